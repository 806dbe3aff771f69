//! Configuration type definitions
//!
//! ```yaml
//! blog:
//!   source:
//!     base_dir: ~/notes/blog
//!     draft_posts_dir: drafts
//!     published_posts_dir: published
//!     assets_dir: assets
//!   target:
//!     base_dir: ~/sites/blog
//!     content_dir: content/posts
//!     asset_dir: static/img
//!     asset_prefix: /img
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub use crate::domain::value_objects::RewriteMode;

/// Every project in `projects.yml`, keyed by name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectsConfig {
    pub projects: BTreeMap<String, ProjectConfig>,
}

impl ProjectsConfig {
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

/// One project's source and target layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub source: SourceConfig,
    pub target: TargetConfig,

    /// Accepted for older config files. `settings.yml` decides which project
    /// is active.
    #[serde(default)]
    pub active: bool,
}

/// Where drafts, assets and the published archive live.
///
/// Relative directories are resolved against `base_dir`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    pub base_dir: PathBuf,

    #[serde(alias = "draft_dir")]
    pub draft_posts_dir: PathBuf,

    #[serde(default = "default_published_dir")]
    pub published_posts_dir: PathBuf,

    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,
}

/// Where staged posts and their assets are copied.
///
/// Relative directories are resolved against `base_dir`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetConfig {
    pub base_dir: PathBuf,

    pub content_dir: PathBuf,

    #[serde(alias = "assets_dir")]
    pub asset_dir: PathBuf,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_prefix: Option<String>,

    #[serde(default)]
    pub rewrite: RewriteMode,
}

fn default_published_dir() -> PathBuf {
    PathBuf::from("published")
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("assets")
}

/// Contents of `settings.yml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(
        rename = "activeProject",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub active_project: Option<String>,
}

impl Settings {
    pub fn with_active(name: impl Into<String>) -> Self {
        Self {
            active_project: Some(name.into()),
        }
    }

    /// The active project name, treating a blank value as unset
    pub fn active(&self) -> Option<&str> {
        self.active_project
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}
