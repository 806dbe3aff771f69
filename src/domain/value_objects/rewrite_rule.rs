//! Rewrite rule value object - how image references change on the way to the site
//!
//! - `WikiEmbed`: `![[photo.png]]` becomes `![](/img/photo.png)`
//! - `FolderPrefix`: `assets/photo.png` becomes `/img/photo.png`

use serde::{Deserialize, Serialize};

/// URL prefix used when a project does not configure `asset_prefix`
pub const DEFAULT_ASSET_PREFIX: &str = "/img";

/// Which rewrite a project uses, as written in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RewriteMode {
    #[default]
    WikiEmbed,
    FolderPrefix,
}

impl std::fmt::Display for RewriteMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RewriteMode::WikiEmbed => write!(f, "wiki_embed"),
            RewriteMode::FolderPrefix => write!(f, "folder_prefix"),
        }
    }
}

/// A fully resolved rewrite, ready to apply to post text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteRule {
    /// Replace `![[NAME]]` with `![](URL_PREFIX/NAME)`
    WikiEmbed { url_prefix: String },
    /// Replace `LOCAL_FOLDER/` with `URL_PREFIX/`
    FolderPrefix {
        local_folder: String,
        url_prefix: String,
    },
}

impl RewriteRule {
    /// Build the rule for a project.
    ///
    /// `local_folder` is the source asset directory as written in the config
    /// (e.g. `assets`); only the folder-prefix mode uses it.
    pub fn new(mode: RewriteMode, asset_prefix: Option<&str>, local_folder: &str) -> Self {
        let url_prefix = asset_prefix
            .unwrap_or(DEFAULT_ASSET_PREFIX)
            .trim_end_matches('/')
            .to_string();
        match mode {
            RewriteMode::WikiEmbed => RewriteRule::WikiEmbed { url_prefix },
            RewriteMode::FolderPrefix => RewriteRule::FolderPrefix {
                local_folder: local_folder.trim_matches('/').to_string(),
                url_prefix,
            },
        }
    }

    pub fn mode(&self) -> RewriteMode {
        match self {
            RewriteRule::WikiEmbed { .. } => RewriteMode::WikiEmbed,
            RewriteRule::FolderPrefix { .. } => RewriteMode::FolderPrefix,
        }
    }

    /// The rule for a post whose assets sit in `subdir` under the target
    /// asset directory.
    ///
    /// Wiki embeds name only the file, so the prefix gains the subdirectory.
    /// Folder-prefix links already carry it after the local folder.
    pub fn within(&self, subdir: &str) -> RewriteRule {
        match self {
            RewriteRule::WikiEmbed { url_prefix } => RewriteRule::WikiEmbed {
                url_prefix: format!("{url_prefix}/{subdir}"),
            },
            RewriteRule::FolderPrefix { .. } => self.clone(),
        }
    }

    pub fn url_prefix(&self) -> &str {
        match self {
            RewriteRule::WikiEmbed { url_prefix } => url_prefix,
            RewriteRule::FolderPrefix { url_prefix, .. } => url_prefix,
        }
    }
}

impl Default for RewriteRule {
    fn default() -> Self {
        RewriteRule::new(RewriteMode::default(), None, "")
    }
}
