//! Presentation Layer
//!
//! This layer handles:
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - List views and their renderings

pub mod factory;
pub mod output;

pub use factory::create_registry_use_case;
pub use output::{
    DraftListView, OutputFormat, ProjectListView, ProjectStatusItem, ProjectStatusView,
};
