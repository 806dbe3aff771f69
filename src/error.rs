//! Error types for lazydraft
//!
//! Library code returns `LazydraftResult`; only the binary decides whether an
//! error ends the process with a non-zero status.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for lazydraft operations
pub type LazydraftResult<T> = Result<T, LazydraftError>;

/// Main error type for lazydraft operations
#[derive(Error, Debug)]
pub enum LazydraftError {
    /// Config file exists but could not be read or parsed
    #[error(
        "invalid config file: {path}\n  → Fix: edit the file, or run `lazydraft config reset` and `lazydraft config init`\n  → Details: {message}"
    )]
    Config { path: PathBuf, message: String },

    /// Config file does not exist yet
    #[error("config file not found: {path}\n  → Run: lazydraft init")]
    ConfigMissing { path: PathBuf },

    /// Settings could not be serialized back to disk
    #[error("failed to serialize settings: {message}")]
    Serialization { message: String },

    /// Neither the config override nor the home directory could be resolved
    #[error("user home directory cannot be retrieved")]
    HomeDirUnavailable,

    /// Settings file has no active project
    #[error("no active project found")]
    NoActiveProject,

    /// Settings name a project the config does not define
    #[error("active project '{name}' is not defined in the config")]
    ActiveProjectNotFound { name: String },

    /// Selection outside `[1, len]` or not a number
    #[error("invalid choice: '{input}'")]
    InvalidChoice { input: String },

    /// An operation that selects from the staged list found nothing staged
    #[error("there are no staged drafts")]
    NoStagedDrafts,

    /// Reading, writing, copying or deleting a file failed
    #[error("failed to {action} {path}: {source}")]
    FileSystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// Interactive prompt could not read input
    #[error("failed to read selection: {message}")]
    Prompt { message: String },
}

impl LazydraftError {
    /// Wrap a port-level failure with the action and path it concerned.
    pub fn fs(action: &'static str, path: impl Into<PathBuf>, source: FsError) -> Self {
        LazydraftError::FileSystem {
            action,
            path: path.into(),
            source,
        }
    }

    /// Errors the user can fix by choosing differently or configuring an
    /// active project. These are reported without a failing exit status.
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            LazydraftError::NoActiveProject
                | LazydraftError::ActiveProjectNotFound { .. }
                | LazydraftError::InvalidChoice { .. }
                | LazydraftError::NoStagedDrafts
        )
    }

    /// Follow-up command suggestion shown under the message, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            LazydraftError::NoActiveProject | LazydraftError::ActiveProjectNotFound { .. } => {
                Some("see 'lazydraft project config'")
            }
            LazydraftError::NoStagedDrafts => Some("stage one first with 'lazydraft draft stage'"),
            LazydraftError::InvalidChoice { .. } => Some("type one of the listed numbers"),
            _ => None,
        }
    }
}
