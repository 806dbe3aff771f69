//! Config file locations
//!
//! `~/.config/lazydraft/` holds `projects.yml` and `settings.yml`.
//! `LAZYDRAFT_CONFIG_DIR` replaces the whole directory.

use std::path::{Path, PathBuf};

use crate::error::{LazydraftError, LazydraftResult};
use crate::infrastructure::fs::{lazydraft_home_dir, LAZYDRAFT_CONFIG_DIR_VAR};

pub const PROJECTS_FILE_NAME: &str = "projects.yml";
pub const SETTINGS_FILE_NAME: &str = "settings.yml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    pub dir: PathBuf,
    pub projects: PathBuf,
    pub settings: PathBuf,
}

impl ConfigPaths {
    /// Resolve from `LAZYDRAFT_CONFIG_DIR`, falling back to the home directory.
    pub fn resolve() -> LazydraftResult<Self> {
        if let Some(dir) = std::env::var_os(LAZYDRAFT_CONFIG_DIR_VAR).filter(|v| !v.is_empty()) {
            return Ok(Self::in_dir(PathBuf::from(dir)));
        }
        let home = lazydraft_home_dir().ok_or(LazydraftError::HomeDirUnavailable)?;
        Ok(Self::in_dir(home.join(".config").join("lazydraft")))
    }

    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref().to_path_buf();
        Self {
            projects: dir.join(PROJECTS_FILE_NAME),
            settings: dir.join(SETTINGS_FILE_NAME),
            dir,
        }
    }
}
