//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system and home directory resolution
//! - `repositories/` - Draft scanner and YAML config repositories

pub mod fs;
pub mod repositories;

// Re-export for convenience
pub use fs::LocalFs;
pub use repositories::{FsDraftRepository, YamlProjectConfigRepository, YamlSettingsRepository};
