//! Config warning value object

use std::path::PathBuf;

/// An unknown key found while parsing `projects.yml`.
///
/// Parsing still succeeds; the CLI prints these to stderr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    /// 1-based line of the first occurrence, if found
    pub line: Option<usize>,
    /// Closest known key, when one is close enough
    pub suggestion: Option<String>,
}
