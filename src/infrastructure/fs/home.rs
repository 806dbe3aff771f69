//! Home directory resolution with test isolation support.
//!
//! `dirs::home_dir()` ignores `HOME` on Windows, so tests cannot redirect it.
//! `lazydraft_home_dir()` checks `LAZYDRAFT_TEST_HOME` first and falls back to
//! `dirs::home_dir()`.
//!
//! The config directory itself can be replaced wholesale with
//! `LAZYDRAFT_CONFIG_DIR`; see `config::ConfigPaths`.

use std::path::{Path, PathBuf};

/// Environment variable for test isolation of home directory.
pub const LAZYDRAFT_TEST_HOME_VAR: &str = "LAZYDRAFT_TEST_HOME";

/// Environment variable that replaces `~/.config/lazydraft`.
pub const LAZYDRAFT_CONFIG_DIR_VAR: &str = "LAZYDRAFT_CONFIG_DIR";

/// Home directory used for lazydraft-internal paths.
///
/// Returns `None` if neither `LAZYDRAFT_TEST_HOME` is set nor the system home
/// can be resolved.
pub fn lazydraft_home_dir() -> Option<PathBuf> {
    std::env::var(LAZYDRAFT_TEST_HOME_VAR)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

/// Expand a leading `~` in a user-written path.
///
/// Paths that do not start with `~` (or when no home is known) are returned
/// unchanged.
pub fn expand_home(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();
    if let Some(stripped) = path_str.strip_prefix("~/") {
        if let Some(home) = lazydraft_home_dir() {
            return home.join(stripped);
        }
    } else if path_str == "~" {
        if let Some(home) = lazydraft_home_dir() {
            return home;
        }
    }
    path.to_path_buf()
}
