//! YAML Config Repositories
//!
//! Persist `projects.yml` and `settings.yml` under the config directory.

use std::path::PathBuf;

use crate::config::{
    load_projects_with_warnings, load_settings, settings_to_yaml, ConfigWarning, ProjectsConfig,
    Settings,
};
use crate::domain::ports::{FileSystem, ProjectConfigRepository, SettingsRepository};
use crate::error::{LazydraftError, LazydraftResult};
use crate::infrastructure::fs::LocalFs;

/// Read-only access to `projects.yml`
#[derive(Debug, Clone)]
pub struct YamlProjectConfigRepository {
    path: PathBuf,
}

impl YamlProjectConfigRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProjectConfigRepository for YamlProjectConfigRepository {
    fn load(&self) -> LazydraftResult<(ProjectsConfig, Vec<ConfigWarning>)> {
        load_projects_with_warnings(&self.path)
    }
}

/// Read/write access to `settings.yml`
#[derive(Debug, Clone)]
pub struct YamlSettingsRepository {
    path: PathBuf,
}

impl YamlSettingsRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsRepository for YamlSettingsRepository {
    fn load(&self) -> LazydraftResult<Settings> {
        load_settings(&self.path)
    }

    fn save(&self, settings: &Settings) -> LazydraftResult<()> {
        let content = settings_to_yaml(settings)?;
        LocalFs::new()
            .write(&self.path, &content)
            .map_err(|e| LazydraftError::fs("write", &self.path, e))?;
        tracing::debug!(path = %self.path.display(), "saved settings");
        Ok(())
    }
}
