//! Staging Pipeline
//!
//! ```text
//!   DRAFT ──stage──► STAGED ──unstage──► DRAFT
//!   STAGED ──update──► STAGED
//!   STAGED ──publish──► PUBLISHED
//! ```
//!
//! `stage` picks from every draft. The other transitions pick from the staged
//! drafts and map the choice back to the full list by name.

use std::path::PathBuf;

use crate::domain::entities::{Draft, Project};
use crate::domain::ports::FileSystem;
use crate::domain::services::DraftStatus;
use crate::domain::value_objects::Selection;
use crate::error::{LazydraftError, LazydraftResult};

use super::workspace::{ProjectWorkspace, TargetCopy, TargetRemoval};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutcome {
    pub draft: String,
    pub copy: TargetCopy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnstageOutcome {
    pub draft: String,
    pub removal: TargetRemoval,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOutcome {
    pub draft: String,
    /// Final render left in the target site
    pub copy: TargetCopy,
    /// Files and directories written to the published archive
    pub archived: Vec<PathBuf>,
    /// Source files and directories deleted from drafts
    pub removed: Vec<PathBuf>,
}

pub struct StagingPipeline<'a, F: FileSystem> {
    workspace: ProjectWorkspace<'a, F>,
}

impl<'a, F: FileSystem> StagingPipeline<'a, F> {
    pub fn new(project: &'a Project, fs: &'a F) -> Self {
        Self {
            workspace: ProjectWorkspace::new(project, fs),
        }
    }

    pub fn project(&self) -> &'a Project {
        self.workspace.project()
    }

    /// Every draft with its staged flag
    pub fn list(&self) -> LazydraftResult<Vec<DraftStatus<'a>>> {
        self.workspace.draft_statuses()
    }

    /// Staged drafts to choose from. Empty is `NoStagedDrafts`.
    pub fn staged(&self) -> LazydraftResult<Vec<&'a Draft>> {
        let staged = self.workspace.staged_drafts()?;
        if staged.is_empty() {
            return Err(LazydraftError::NoStagedDrafts);
        }
        Ok(staged)
    }

    /// Stage the draft numbered `input` in the full draft list.
    pub fn stage(&self, input: &str) -> LazydraftResult<StageOutcome> {
        let selection = Selection::parse(input, self.project().drafts.len())?;
        let copy = self.workspace.copy_post_to_target(selection.index())?;
        let draft = self.project().drafts[selection.index()].name().to_string();
        tracing::info!(draft = %draft, "staged");
        Ok(StageOutcome { draft, copy })
    }

    /// Re-copy the staged draft numbered `input`.
    pub fn update(&self, input: &str) -> LazydraftResult<StageOutcome> {
        let (draft, index) = self.select_staged(input)?;
        let copy = self.workspace.update_post_to_latest(draft, index)?;
        tracing::info!(draft = draft.name(), "updated");
        Ok(StageOutcome {
            draft: draft.name().to_string(),
            copy,
        })
    }

    /// Take the staged draft numbered `input` out of the target site.
    pub fn unstage(&self, input: &str) -> LazydraftResult<UnstageOutcome> {
        let (draft, _) = self.select_staged(input)?;
        let removal = self.workspace.remove_post_from_target(draft)?;
        tracing::info!(draft = draft.name(), "unstaged");
        Ok(UnstageOutcome {
            draft: draft.name().to_string(),
            removal,
        })
    }

    /// Refresh the staged draft numbered `input`, archive it and delete it
    /// from drafts. Steps are not rolled back on failure.
    pub fn publish(&self, input: &str) -> LazydraftResult<PublishOutcome> {
        let (draft, index) = self.select_staged(input)?;
        let copy = self.workspace.update_post_to_latest(draft, index)?;
        let archived = self.workspace.copy_draft_to_published(draft)?;
        let removed = self.workspace.remove_post_from_drafts(draft)?;
        tracing::info!(draft = draft.name(), "published");
        Ok(PublishOutcome {
            draft: draft.name().to_string(),
            copy,
            archived,
            removed,
        })
    }

    fn select_staged(&self, input: &str) -> LazydraftResult<(&'a Draft, usize)> {
        let staged = self.staged()?;
        let selection = Selection::parse(input, staged.len())?;
        let draft = staged[selection.index()];
        let index = self
            .project()
            .index_of_draft(draft.name())
            .ok_or_else(|| LazydraftError::InvalidChoice {
                input: input.trim().to_string(),
            })?;
        Ok((draft, index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::TargetInfo;
    use crate::infrastructure::LocalFs;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn blog() -> (TempDir, Project) {
        let dir = tempdir().unwrap();
        let drafts = dir.path().join("notes").join("drafts");
        let content = dir.path().join("site").join("content");
        fs::create_dir_all(&drafts).unwrap();
        fs::create_dir_all(&content).unwrap();
        fs::write(drafts.join("Hello World.md"), "hello").unwrap();
        fs::write(drafts.join("Second Post.md"), "second").unwrap();

        let project = Project {
            name: "blog".to_string(),
            source_dir: dir.path().join("notes"),
            drafts: vec![
                Draft::new("Hello World.md", &drafts),
                Draft::new("Second Post.md", &drafts),
            ],
            target: TargetInfo {
                content_dir: content,
                asset_dir: dir.path().join("site").join("img"),
                ..TargetInfo::default()
            },
            published_dir: dir.path().join("notes").join("published"),
        };
        (dir, project)
    }

    fn staged_flags(pipeline: &StagingPipeline<'_, LocalFs>) -> Vec<bool> {
        pipeline.list().unwrap().iter().map(|s| s.staged).collect()
    }

    #[test]
    fn stage_list_unstage() {
        let (_dir, project) = blog();
        let disk = LocalFs::new();
        let pipeline = StagingPipeline::new(&project, &disk);

        let outcome = pipeline.stage("1").unwrap();
        assert_eq!(outcome.draft, "Hello World.md");
        assert_eq!(outcome.copy.content, project.target.content_dir.join("hello-world.md"));
        assert_eq!(staged_flags(&pipeline), vec![true, false]);

        pipeline.unstage("1").unwrap();
        assert_eq!(staged_flags(&pipeline), vec![false, false]);
        assert!(fs::read_dir(&project.target.content_dir).unwrap().next().is_none());
    }

    #[test]
    fn stage_rejects_bad_input() {
        let (_dir, project) = blog();
        let disk = LocalFs::new();
        let pipeline = StagingPipeline::new(&project, &disk);

        for input in ["0", "-1", "3", "two", ""] {
            assert!(matches!(
                pipeline.stage(input),
                Err(LazydraftError::InvalidChoice { .. })
            ));
        }
    }

    #[test]
    fn staging_twice_keeps_one_copy() {
        let (_dir, project) = blog();
        let disk = LocalFs::new();
        let pipeline = StagingPipeline::new(&project, &disk);

        pipeline.stage("2").unwrap();
        pipeline.stage("2").unwrap();

        assert_eq!(pipeline.staged().unwrap().len(), 1);
    }

    #[test]
    fn staged_selection_maps_back_to_draft_list() {
        let (_dir, project) = blog();
        let disk = LocalFs::new();
        let pipeline = StagingPipeline::new(&project, &disk);
        pipeline.stage("2").unwrap();
        fs::write(project.drafts[1].path(), "second, revised").unwrap();

        // "1" is the first staged draft, which is draft 2 overall
        let outcome = pipeline.update("1").unwrap();

        assert_eq!(outcome.draft, "Second Post.md");
        assert_eq!(
            fs::read_to_string(&outcome.copy.content).unwrap(),
            "second, revised"
        );
    }

    #[test]
    fn nothing_staged_is_reported() {
        let (_dir, project) = blog();
        let disk = LocalFs::new();
        let pipeline = StagingPipeline::new(&project, &disk);

        assert!(matches!(pipeline.update("1"), Err(LazydraftError::NoStagedDrafts)));
        assert!(matches!(pipeline.unstage("1"), Err(LazydraftError::NoStagedDrafts)));
        assert!(matches!(pipeline.publish("1"), Err(LazydraftError::NoStagedDrafts)));
    }

    #[test]
    fn unstage_out_of_staged_range() {
        let (_dir, project) = blog();
        let disk = LocalFs::new();
        let pipeline = StagingPipeline::new(&project, &disk);
        pipeline.stage("1").unwrap();

        assert!(matches!(
            pipeline.unstage("2"),
            Err(LazydraftError::InvalidChoice { .. })
        ));
    }

    #[test]
    fn publish_archives_and_removes_draft() {
        let (_dir, project) = blog();
        let disk = LocalFs::new();
        let pipeline = StagingPipeline::new(&project, &disk);
        pipeline.stage("1").unwrap();

        let outcome = pipeline.publish("1").unwrap();

        let archived = project.published_dir.join("Hello World.md");
        assert_eq!(outcome.archived, vec![archived.clone()]);
        assert_eq!(fs::read_to_string(&archived).unwrap(), "hello");
        assert!(!project.drafts[0].path().exists());
        assert_eq!(
            fs::read_to_string(project.target.content_dir.join("hello-world.md")).unwrap(),
            "hello"
        );
    }
}
