//! Value Objects
//!
//! Immutable types with no identity of their own.

mod config_warning;
mod post_name;
mod rewrite_rule;
mod selection;

pub use config_warning::ConfigWarning;
pub use post_name::normalize_post_name;
pub use rewrite_rule::{RewriteMode, RewriteRule, DEFAULT_ASSET_PREFIX};
pub use selection::Selection;
