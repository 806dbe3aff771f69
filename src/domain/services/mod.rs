//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod rewriter;
mod staged_view;

pub use rewriter::rewrite_content;
pub use staged_view::{compute_staged_view, draft_statuses, DraftStatus};
