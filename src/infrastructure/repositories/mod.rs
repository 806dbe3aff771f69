//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod config;
mod draft;

pub use config::{YamlProjectConfigRepository, YamlSettingsRepository};
pub use draft::FsDraftRepository;
