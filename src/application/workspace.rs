//! Project Workspace
//!
//! Filesystem-backed operations on one project: what is in the target site,
//! copying a draft into it, taking it back out, and archiving.

use std::path::{Path, PathBuf};

use crate::domain::entities::{AssetLayout, Draft, Project};
use crate::domain::ports::FileSystem;
use crate::domain::services::{compute_staged_view, draft_statuses, rewrite_content, DraftStatus};
use crate::error::{LazydraftError, LazydraftResult};

/// Files a copy into the target site produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetCopy {
    /// Rendered markdown in the content directory
    pub content: PathBuf,
    /// Assets copied into the target asset directory
    pub assets: Vec<PathBuf>,
}

/// Files taken out of the target site
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TargetRemoval {
    pub content: PathBuf,
    pub assets: Vec<PathBuf>,
    /// Asset paths that were already gone
    pub missing_assets: Vec<PathBuf>,
}

/// One project plus the file system its operations run against
pub struct ProjectWorkspace<'a, F: FileSystem> {
    project: &'a Project,
    fs: &'a F,
}

impl<'a, F: FileSystem> ProjectWorkspace<'a, F> {
    pub fn new(project: &'a Project, fs: &'a F) -> Self {
        Self { project, fs }
    }

    pub fn project(&self) -> &'a Project {
        self.project
    }

    /// Names of the files currently in the target content directory
    pub fn target_content_files(&self) -> LazydraftResult<Vec<String>> {
        let dir = &self.project.target.content_dir;
        let entries = self
            .fs
            .read_dir(dir)
            .map_err(|e| LazydraftError::fs("list", dir, e))?;
        Ok(entries
            .into_iter()
            .filter(|e| !e.is_dir)
            .map(|e| e.name)
            .collect())
    }

    /// Every draft with its staged flag, in draft-list order
    pub fn draft_statuses(&self) -> LazydraftResult<Vec<DraftStatus<'a>>> {
        let files = self.target_content_files()?;
        Ok(draft_statuses(&self.project.drafts, &files))
    }

    /// Drafts whose rendered file exists in the target, in draft-list order
    pub fn staged_drafts(&self) -> LazydraftResult<Vec<&'a Draft>> {
        let files = self.target_content_files()?;
        Ok(compute_staged_view(&self.project.drafts, &files))
    }

    /// Copy the draft at `index` (0-based) and its assets into the target.
    ///
    /// Content is rewritten on the way; assets are copied byte-for-byte.
    /// Directory-layout assets land in a subdirectory named after the post
    /// so two posts can both own a `cover.png`. Target directories are
    /// created when missing.
    pub fn copy_post_to_target(&self, index: usize) -> LazydraftResult<TargetCopy> {
        let draft = self
            .project
            .draft(index)
            .ok_or_else(|| LazydraftError::InvalidChoice {
                input: (index + 1).to_string(),
            })?;
        let target = &self.project.target;

        let asset_dir = self.target_asset_dir(draft);
        for dir in [&target.content_dir, &asset_dir] {
            self.fs
                .create_dir_all(dir)
                .map_err(|e| LazydraftError::fs("create", dir, e))?;
        }

        let mut assets = Vec::with_capacity(draft.assets().len());
        for (name, source) in draft.assets().iter().zip(draft.asset_paths()) {
            let dest = asset_dir.join(name);
            self.fs
                .copy_file(&source, &dest)
                .map_err(|e| LazydraftError::fs("copy", &source, e))?;
            tracing::debug!(from = %source.display(), to = %dest.display(), "copied asset");
            assets.push(dest);
        }

        let rule = match draft.target_asset_subdir() {
            Some(subdir) => target.rewrite.within(subdir),
            None => target.rewrite.clone(),
        };
        let source = draft.path();
        let text = self
            .fs
            .read_to_string(&source)
            .map_err(|e| LazydraftError::fs("read", &source, e))?;
        let content = target.content_dir.join(draft.target_file_name());
        self.fs
            .write(&content, &rewrite_content(&text, &rule))
            .map_err(|e| LazydraftError::fs("write", &content, e))?;
        tracing::debug!(to = %content.display(), "wrote post");

        Ok(TargetCopy { content, assets })
    }

    /// Delete the draft's copied assets and rendered content file.
    ///
    /// A directory-layout post loses its whole target asset subdirectory.
    /// Assets that are already gone are skipped. A missing content file is an
    /// error.
    pub fn remove_post_from_target(&self, draft: &Draft) -> LazydraftResult<TargetRemoval> {
        let target = &self.project.target;
        let mut removal = TargetRemoval {
            content: target.content_dir.join(draft.target_file_name()),
            ..TargetRemoval::default()
        };

        match draft.target_asset_subdir() {
            Some(_) => {
                let dir = self.target_asset_dir(draft);
                match self.fs.remove_dir_all(&dir) {
                    Ok(()) => {
                        tracing::debug!(path = %dir.display(), "removed asset directory");
                        removal.assets.push(dir);
                    }
                    Err(e) if e.is_not_found() => {
                        tracing::debug!(path = %dir.display(), "asset directory already gone, skipping");
                        removal.missing_assets.push(dir);
                    }
                    Err(e) => return Err(LazydraftError::fs("remove", &dir, e)),
                }
            }
            None => {
                for name in draft.assets() {
                    let path = target.asset_dir.join(name);
                    match self.fs.remove_file(&path) {
                        Ok(()) => {
                            tracing::debug!(path = %path.display(), "removed asset");
                            removal.assets.push(path);
                        }
                        Err(e) if e.is_not_found() => {
                            tracing::debug!(path = %path.display(), "asset already gone, skipping");
                            removal.missing_assets.push(path);
                        }
                        Err(e) => return Err(LazydraftError::fs("remove", &path, e)),
                    }
                }
            }
        }

        self.fs
            .remove_file(&removal.content)
            .map_err(|e| LazydraftError::fs("remove", &removal.content, e))?;
        tracing::debug!(path = %removal.content.display(), "removed post");

        Ok(removal)
    }

    /// Remove then re-copy. A failed copy leaves the post unstaged.
    pub fn update_post_to_latest(&self, draft: &Draft, index: usize) -> LazydraftResult<TargetCopy> {
        self.remove_post_from_target(draft)?;
        self.copy_post_to_target(index)
    }

    /// Copy the draft and its assets into the published archive, keeping
    /// asset paths relative to the source base directory.
    pub fn copy_draft_to_published(&self, draft: &Draft) -> LazydraftResult<Vec<PathBuf>> {
        let published = &self.project.published_dir;
        let mut written = Vec::new();

        let source = draft.path();
        let dest = published.join(draft.name());
        self.fs
            .copy_file(&source, &dest)
            .map_err(|e| LazydraftError::fs("copy", &source, e))?;
        written.push(dest);

        match draft.layout() {
            AssetLayout::None => {}
            AssetLayout::Shared { .. } => {
                for source in draft.asset_paths() {
                    let dest = published.join(self.relative_to_source(&source));
                    self.fs
                        .copy_file(&source, &dest)
                        .map_err(|e| LazydraftError::fs("copy", &source, e))?;
                    written.push(dest);
                }
            }
            AssetLayout::PerPost => {
                let source = draft.asset_dir();
                let dest = published.join(self.relative_to_source(source));
                self.fs
                    .copy_dir_all(source, &dest)
                    .map_err(|e| LazydraftError::fs("copy", source, e))?;
                written.push(dest);
            }
        }

        for path in &written {
            tracing::debug!(path = %path.display(), "archived");
        }
        Ok(written)
    }

    /// Delete the draft file and its source assets.
    pub fn remove_post_from_drafts(&self, draft: &Draft) -> LazydraftResult<Vec<PathBuf>> {
        let mut removed = Vec::new();

        let path = draft.path();
        self.fs
            .remove_file(&path)
            .map_err(|e| LazydraftError::fs("remove", &path, e))?;
        removed.push(path);

        match draft.layout() {
            AssetLayout::None => {}
            AssetLayout::Shared { .. } => {
                for path in draft.asset_paths() {
                    self.fs
                        .remove_file(&path)
                        .map_err(|e| LazydraftError::fs("remove", &path, e))?;
                    removed.push(path);
                }
            }
            AssetLayout::PerPost => {
                let dir = draft.asset_dir();
                self.fs
                    .remove_dir_all(dir)
                    .map_err(|e| LazydraftError::fs("remove", dir, e))?;
                removed.push(dir.to_path_buf());
            }
        }

        tracing::debug!(draft = draft.name(), files = removed.len(), "removed draft");
        Ok(removed)
    }

    /// Where this draft's assets go in the target site
    fn target_asset_dir(&self, draft: &Draft) -> PathBuf {
        let base = &self.project.target.asset_dir;
        match draft.target_asset_subdir() {
            Some(subdir) => base.join(subdir),
            None => base.clone(),
        }
    }

    /// Path under the source base directory, or just the file name for
    /// paths outside it.
    fn relative_to_source(&self, path: &Path) -> PathBuf {
        match path.strip_prefix(&self.project.source_dir) {
            Ok(relative) => relative.to_path_buf(),
            Err(_) => PathBuf::from(path.file_name().unwrap_or_default()),
        }
    }
}
