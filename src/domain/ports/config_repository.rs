//! Config repository ports - project definitions and the active-project record
//!
//! The two live in separate files: project definitions are edited by hand,
//! settings are rewritten by `lazydraft project config`.

use crate::config::{ProjectsConfig, Settings};
use crate::domain::value_objects::ConfigWarning;
use crate::error::LazydraftResult;

/// Source of the `name -> project` configuration
pub trait ProjectConfigRepository {
    /// Parse the config, collecting non-fatal warnings (e.g. unknown keys).
    fn load(&self) -> LazydraftResult<(ProjectsConfig, Vec<ConfigWarning>)>;
}

/// Persisted record of which project is active
pub trait SettingsRepository {
    fn load(&self) -> LazydraftResult<Settings>;

    /// Replace the stored settings.
    fn save(&self, settings: &Settings) -> LazydraftResult<()>;
}
