//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod config_repository;
pub mod draft_repository;
pub mod file_system;

pub use config_repository::{ProjectConfigRepository, SettingsRepository};
pub use draft_repository::DraftRepository;
pub use file_system::{DirEntry, FileSystem, FsError, FsResult};
