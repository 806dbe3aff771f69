//! DraftRepository port - discovers drafts and their assets

use std::path::Path;

use crate::domain::entities::Draft;
use crate::error::LazydraftResult;

pub trait DraftRepository {
    /// Every draft in `draft_dir`, with assets resolved against `asset_dir`.
    ///
    /// Either directory being unreadable is an error; no partial list is
    /// returned.
    fn load_drafts(&self, draft_dir: &Path, asset_dir: &Path) -> LazydraftResult<Vec<Draft>>;
}
