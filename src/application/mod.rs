//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `RegistryUseCase` - Load projects from config, choose the active one
//! - `ProjectWorkspace` - File operations for one project's target and archive
//! - `StagingPipeline` - stage / update / unstage / publish

pub mod registry;
pub mod staging;
pub mod workspace;

pub use registry::{build_project, build_registry, LoadedRegistry, RegistryUseCase};
pub use staging::{PublishOutcome, StageOutcome, StagingPipeline, UnstageOutcome};
pub use workspace::{ProjectWorkspace, TargetCopy, TargetRemoval};
