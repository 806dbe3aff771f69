//! Configuration module for lazydraft
//!
//! Two YAML files under `~/.config/lazydraft/`:
//! 1. `projects.yml` - project name -> source/target layout
//! 2. `settings.yml` - `activeProject: <name>`

mod loader;
mod paths;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{
    load_projects_with_warnings, load_settings, parse_projects, parse_settings, settings_to_yaml,
};
pub use paths::{ConfigPaths, PROJECTS_FILE_NAME, SETTINGS_FILE_NAME};
pub use types::{ProjectConfig, ProjectsConfig, RewriteMode, Settings, SourceConfig, TargetConfig};
