//! Domain Entities
//!
//! Core objects with identity: drafts, projects and the project registry.

mod draft;
mod project;
mod registry;

pub use draft::{AssetLayout, Draft};
pub use project::{Project, TargetInfo};
pub use registry::ProjectRegistry;
