//! Staged View Domain Service
//!
//! Staged-ness is never stored. It is recomputed from a listing of the target
//! content directory every time it is needed, so it cannot drift from what is
//! actually on disk.

use crate::domain::entities::Draft;

/// A draft paired with whether its rendered file exists in the target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DraftStatus<'a> {
    pub draft: &'a Draft,
    pub staged: bool,
}

/// Mark each draft staged or not, keeping draft-list order.
///
/// O(drafts x target files).
pub fn draft_statuses<'a>(drafts: &'a [Draft], target_files: &[String]) -> Vec<DraftStatus<'a>> {
    drafts
        .iter()
        .map(|draft| {
            let wanted = draft.target_file_name();
            DraftStatus {
                draft,
                staged: target_files.iter().any(|f| *f == wanted),
            }
        })
        .collect()
}

/// The drafts whose normalized name appears in `target_files`, each once.
pub fn compute_staged_view<'a>(drafts: &'a [Draft], target_files: &[String]) -> Vec<&'a Draft> {
    draft_statuses(drafts, target_files)
        .into_iter()
        .filter(|s| s.staged)
        .map(|s| s.draft)
        .collect()
}
