//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod home;
mod local;

pub use home::{expand_home, lazydraft_home_dir, LAZYDRAFT_CONFIG_DIR_VAR, LAZYDRAFT_TEST_HOME_VAR};
pub use local::LocalFs;
