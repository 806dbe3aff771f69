//! Draft directory scanner
//!
//! Reads the draft directory and matches each post with its assets.

use std::path::{Path, PathBuf};

use crate::domain::entities::{AssetLayout, Draft};
use crate::domain::ports::{DirEntry, DraftRepository, FileSystem};
use crate::error::{LazydraftError, LazydraftResult};

const ASSET_PREFIX_KEY: &str = "asset-prefix:";

/// Scans drafts through a [`FileSystem`]
pub struct FsDraftRepository<F: FileSystem> {
    fs: F,
}

impl<F: FileSystem> FsDraftRepository<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    fn list(&self, dir: &Path) -> LazydraftResult<Vec<DirEntry>> {
        self.fs
            .read_dir(dir)
            .map_err(|e| LazydraftError::fs("list", dir, e))
    }

    fn attach_assets(&self, draft: Draft, asset_dir: &Path) -> LazydraftResult<Draft> {
        let path = draft.path();
        let content = self
            .fs
            .read_to_string(&path)
            .map_err(|e| LazydraftError::fs("read", &path, e))?;

        if let Some(prefix) = find_asset_prefix(&content) {
            if prefix.is_empty() {
                return Ok(draft);
            }
            let assets = regular_files(self.list(asset_dir)?)
                .filter(|name| name.starts_with(prefix.as_str()))
                .collect();
            return Ok(draft.with_assets(AssetLayout::Shared { prefix }, asset_dir, assets));
        }

        let per_post: PathBuf = asset_dir.join(draft.stem());
        if self.fs.is_dir(&per_post) {
            let assets = regular_files(self.list(&per_post)?).collect();
            return Ok(draft.with_assets(AssetLayout::PerPost, per_post, assets));
        }

        Ok(draft)
    }
}

impl<F: FileSystem> DraftRepository for FsDraftRepository<F> {
    fn load_drafts(&self, draft_dir: &Path, asset_dir: &Path) -> LazydraftResult<Vec<Draft>> {
        let mut drafts = Vec::new();

        for name in regular_files(self.list(draft_dir)?) {
            drafts.push(self.attach_assets(Draft::new(name, draft_dir), asset_dir)?);
        }
        release_to_longer_prefixes(&mut drafts);

        drafts.sort_by(|a, b| a.name().cmp(b.name()));
        for draft in &drafts {
            tracing::debug!(
                draft = draft.name(),
                assets = draft.assets().len(),
                "scanned draft"
            );
        }
        Ok(drafts)
    }
}

/// A shared asset belongs to the draft with the longest matching prefix, so
/// `rust-` does not claim `rust-async-1.png` from the `rust-async-` post.
/// Drafts declaring the same prefix still share its files.
fn release_to_longer_prefixes(drafts: &mut [Draft]) {
    let prefixes: Vec<String> = drafts
        .iter()
        .filter_map(|d| match d.layout() {
            AssetLayout::Shared { prefix } => Some(prefix.clone()),
            _ => None,
        })
        .collect();

    for draft in drafts.iter_mut() {
        let own = match draft.layout() {
            AssetLayout::Shared { prefix } => prefix.clone(),
            _ => continue,
        };
        draft.retain_assets(|name| {
            !prefixes.iter().any(|other| {
                other.len() > own.len()
                    && other.starts_with(own.as_str())
                    && name.starts_with(other.as_str())
            })
        });
    }
}

/// Non-hidden regular files, sorted by name
fn regular_files(entries: Vec<DirEntry>) -> impl Iterator<Item = String> {
    let mut names: Vec<String> = entries
        .into_iter()
        .filter(|e| !e.is_dir && !e.name.starts_with('.'))
        .map(|e| e.name)
        .collect();
    names.sort();
    names.into_iter()
}

/// Value of the first `asset-prefix:` line, trimmed and unquoted
fn find_asset_prefix(content: &str) -> Option<String> {
    content.lines().find_map(|line| {
        let value = line.trim_start().strip_prefix(ASSET_PREFIX_KEY)?.trim();
        let value = value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
            .unwrap_or(value);
        Some(value.trim().to_string())
    })
}
