//! lazydraft - move markdown drafts into a static site
//!
//! Drafts live in a notes directory. Staging copies a draft (rewritten for
//! the site) and its images into the site's content and asset directories;
//! publishing archives the draft and removes it from the drafts.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{LoadedRegistry, ProjectWorkspace, RegistryUseCase, StagingPipeline};
pub use config::{ConfigPaths, ProjectsConfig, Settings};
pub use domain::entities::{Draft, Project, ProjectRegistry};
pub use domain::services::{compute_staged_view, rewrite_content};
pub use domain::value_objects::{normalize_post_name, RewriteRule, Selection};
pub use error::{LazydraftError, LazydraftResult};
