//! Project entity - one configured source/target pair and its drafts

use std::path::PathBuf;

use crate::domain::entities::Draft;
use crate::domain::value_objects::RewriteRule;

/// Where staged output lives in the static site
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TargetInfo {
    /// Rendered markdown destination
    pub content_dir: PathBuf,
    /// Copied asset destination
    pub asset_dir: PathBuf,
    pub rewrite: RewriteRule,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub name: String,
    /// Source base directory; archive paths are computed relative to it
    pub source_dir: PathBuf,
    pub drafts: Vec<Draft>,
    pub target: TargetInfo,
    pub published_dir: PathBuf,
}

impl Project {
    pub fn draft(&self, index: usize) -> Option<&Draft> {
        self.drafts.get(index)
    }

    /// Position of the draft with this name in the full draft list.
    ///
    /// Linear scan; draft counts are in the tens.
    pub fn index_of_draft(&self, name: &str) -> Option<usize> {
        self.drafts.iter().position(|d| d.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Project {
        Project {
            name: "blog".to_string(),
            source_dir: PathBuf::from("/notes"),
            drafts: vec![
                Draft::new("Hello World.md", "/notes/drafts"),
                Draft::new("Second Post.md", "/notes/drafts"),
            ],
            target: TargetInfo::default(),
            published_dir: PathBuf::from("/notes/published"),
        }
    }

    #[test]
    fn index_of_draft_matches_by_name() {
        let p = project();
        assert_eq!(p.index_of_draft("Second Post.md"), Some(1));
        assert_eq!(p.index_of_draft("second-post.md"), None);
    }

    #[test]
    fn draft_out_of_range_is_none() {
        assert!(project().draft(2).is_none());
    }
}
