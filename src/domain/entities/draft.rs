//! Draft entity - one post under work in the source draft directory
//!
//! A draft is a single markdown file. Its assets either share a prefix in a
//! common asset directory or live in a directory named after the post.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::normalize_post_name;

/// Where a draft's assets were discovered
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AssetLayout {
    /// No assets belong to the post
    #[default]
    None,
    /// Files in the shared asset directory whose names start with `prefix`
    Shared { prefix: String },
    /// Every file in `<assets_dir>/<post stem>/`
    PerPost,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    /// File name in the draft directory, e.g. `Hello World.md`
    name: String,
    /// Absolute draft directory
    base_dir: PathBuf,
    /// Directory the asset names are relative to
    asset_dir: PathBuf,
    layout: AssetLayout,
    assets: Vec<String>,
}

impl Draft {
    /// Create a draft with no assets
    pub fn new(name: impl Into<String>, base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        Self {
            name: name.into(),
            asset_dir: base_dir.clone(),
            base_dir,
            layout: AssetLayout::None,
            assets: Vec::new(),
        }
    }

    /// Attach the assets found for this draft
    pub fn with_assets(
        mut self,
        layout: AssetLayout,
        asset_dir: impl Into<PathBuf>,
        assets: Vec<String>,
    ) -> Self {
        self.layout = layout;
        self.asset_dir = asset_dir.into();
        self.assets = assets;
        self
    }

    /// Drop the assets `keep` rejects
    pub fn retain_assets(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.assets.retain(|name| keep(name));
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn asset_dir(&self) -> &Path {
        &self.asset_dir
    }

    pub fn layout(&self) -> &AssetLayout {
        &self.layout
    }

    pub fn assets(&self) -> &[String] {
        &self.assets
    }

    /// Absolute path of the markdown file
    pub fn path(&self) -> PathBuf {
        self.base_dir.join(&self.name)
    }

    /// Absolute paths of every asset, in asset-name order
    pub fn asset_paths(&self) -> Vec<PathBuf> {
        self.assets.iter().map(|a| self.asset_dir.join(a)).collect()
    }

    /// File name the draft gets in the target content directory
    pub fn target_file_name(&self) -> String {
        normalize_post_name(&self.name)
    }

    /// Subdirectory of the target asset directory the assets are copied
    /// into. Only directory-layout posts get one.
    pub fn target_asset_subdir(&self) -> Option<&str> {
        match self.layout {
            AssetLayout::PerPost => Some(self.stem()),
            _ => None,
        }
    }

    /// File name without its extension, used to find a per-post asset directory
    pub fn stem(&self) -> &str {
        Path::new(&self.name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(self.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_paths_join_base_dir() {
        let draft = Draft::new("Hello World.md", "/notes/drafts");
        assert_eq!(draft.path(), PathBuf::from("/notes/drafts/Hello World.md"));
        assert_eq!(draft.target_file_name(), "hello-world.md");
        assert_eq!(draft.stem(), "Hello World");
        assert!(draft.assets().is_empty());
        assert_eq!(draft.layout(), &AssetLayout::None);
    }

    #[test]
    fn asset_paths_use_asset_dir() {
        let draft = Draft::new("post.md", "/notes/drafts").with_assets(
            AssetLayout::Shared {
                prefix: "post-".into(),
            },
            "/notes/assets",
            vec!["post-1.png".into(), "post-2.png".into()],
        );
        assert_eq!(
            draft.asset_paths(),
            vec![
                PathBuf::from("/notes/assets/post-1.png"),
                PathBuf::from("/notes/assets/post-2.png"),
            ]
        );
    }

    #[test]
    fn only_per_post_layout_has_target_subdir() {
        let shared = Draft::new("post.md", "/d").with_assets(
            AssetLayout::Shared {
                prefix: "post-".into(),
            },
            "/assets",
            vec!["post-1.png".into()],
        );
        let per_post = Draft::new("Hello World.md", "/d").with_assets(
            AssetLayout::PerPost,
            "/assets/Hello World",
            vec!["cover.png".into()],
        );
        assert_eq!(shared.target_asset_subdir(), None);
        assert_eq!(per_post.target_asset_subdir(), Some("Hello World"));
    }

    #[test]
    fn stem_without_extension_is_whole_name() {
        let draft = Draft::new("README", "/notes/drafts");
        assert_eq!(draft.stem(), "README");
    }
}
