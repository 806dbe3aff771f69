//! Output Rendering
//!
//! List views rendered as numbered text or as one JSON object.

use serde::Serialize;

use crate::domain::services::DraftStatus;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftItem {
    /// 1-based number accepted by `draft stage`
    pub number: usize,
    pub name: String,
    pub staged: bool,
    pub assets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftListView {
    pub project: String,
    pub drafts: Vec<DraftItem>,
}

impl DraftListView {
    pub fn new(project: &str, statuses: &[DraftStatus<'_>]) -> Self {
        let drafts = statuses
            .iter()
            .enumerate()
            .map(|(i, status)| DraftItem {
                number: i + 1,
                name: status.draft.name().to_string(),
                staged: status.staged,
                assets: status.draft.assets().to_vec(),
            })
            .collect();
        Self {
            project: project.to_string(),
            drafts,
        }
    }

    pub fn render_text(&self) -> String {
        if self.drafts.is_empty() {
            return format!("No drafts in project '{}'.\n", self.project);
        }
        let mut out = String::new();
        for item in &self.drafts {
            let marker = if item.staged { " (staged)" } else { "" };
            out.push_str(&format!("{}. {}{}\n", item.number, item.name, marker));
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectItem {
    pub number: usize,
    pub name: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectListView {
    pub active: Option<String>,
    pub projects: Vec<ProjectItem>,
}

impl ProjectListView {
    pub fn new(names: &[String], active: Option<&str>) -> Self {
        let projects = names
            .iter()
            .enumerate()
            .map(|(i, name)| ProjectItem {
                number: i + 1,
                name: name.clone(),
                active: Some(name.as_str()) == active,
            })
            .collect();
        Self {
            active: active.map(str::to_string),
            projects,
        }
    }

    pub fn render_text(&self) -> String {
        if self.projects.is_empty() {
            return "No projects configured.\n".to_string();
        }
        let mut out = String::new();
        for item in &self.projects {
            let marker = if item.active { " (active)" } else { "" };
            out.push_str(&format!("{}. {}{}\n", item.number, item.name, marker));
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectStatusItem {
    pub name: String,
    pub active: bool,
    pub drafts: usize,
    pub staged: usize,
    /// Asset files across all drafts
    pub assets: usize,
}

impl ProjectStatusItem {
    pub fn new(name: &str, active: bool, statuses: &[DraftStatus<'_>]) -> Self {
        Self {
            name: name.to_string(),
            active,
            drafts: statuses.len(),
            staged: statuses.iter().filter(|s| s.staged).count(),
            assets: statuses.iter().map(|s| s.draft.assets().len()).sum(),
        }
    }
}

/// Per-project draft and staged counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectStatusView {
    pub projects: Vec<ProjectStatusItem>,
}

impl ProjectStatusView {
    pub fn render_text(&self) -> String {
        if self.projects.is_empty() {
            return "No projects configured.\n".to_string();
        }
        let mut out = String::new();
        for item in &self.projects {
            let marker = if item.active { " (active)" } else { "" };
            out.push_str(&format!(
                "{}{}: {} drafts, {} staged, {} assets\n",
                item.name, marker, item.drafts, item.staged, item.assets
            ));
        }
        out
    }
}

/// Render any view as pretty JSON
pub fn render_json<T: Serialize>(view: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AssetLayout, Draft};

    #[test]
    fn draft_list_marks_staged() {
        let drafts = vec![
            Draft::new("Hello World.md", "/d"),
            Draft::new("Second Post.md", "/d"),
        ];
        let statuses = vec![
            DraftStatus {
                draft: &drafts[0],
                staged: true,
            },
            DraftStatus {
                draft: &drafts[1],
                staged: false,
            },
        ];

        let view = DraftListView::new("blog", &statuses);

        assert_eq!(
            view.render_text(),
            "1. Hello World.md (staged)\n2. Second Post.md\n"
        );
    }

    #[test]
    fn draft_list_json_shape() {
        let drafts = vec![Draft::new("a.md", "/d")];
        let statuses = vec![DraftStatus {
            draft: &drafts[0],
            staged: false,
        }];

        let json = render_json(&DraftListView::new("blog", &statuses)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["project"], "blog");
        assert_eq!(value["drafts"][0]["number"], 1);
        assert_eq!(value["drafts"][0]["staged"], false);
    }

    #[test]
    fn project_list_marks_active() {
        let names = vec!["blog".to_string(), "wiki".to_string()];
        let view = ProjectListView::new(&names, Some("wiki"));
        assert_eq!(view.render_text(), "1. blog\n2. wiki (active)\n");
    }

    #[test]
    fn project_status_counts_staged_and_assets() {
        let drafts = vec![
            Draft::new("a.md", "/d").with_assets(
                AssetLayout::PerPost,
                "/assets/a",
                vec!["1.png".into(), "2.png".into()],
            ),
            Draft::new("b.md", "/d"),
        ];
        let statuses = vec![
            DraftStatus {
                draft: &drafts[0],
                staged: true,
            },
            DraftStatus {
                draft: &drafts[1],
                staged: false,
            },
        ];

        let view = ProjectStatusView {
            projects: vec![
                ProjectStatusItem::new("blog", true, &statuses),
                ProjectStatusItem::new("wiki", false, &[]),
            ],
        };

        assert_eq!(
            view.render_text(),
            "blog (active): 2 drafts, 1 staged, 2 assets\nwiki: 0 drafts, 0 staged, 0 assets\n"
        );
    }

    #[test]
    fn empty_lists_say_so() {
        assert_eq!(
            ProjectListView::new(&[], None).render_text(),
            "No projects configured.\n"
        );
        assert!(DraftListView::new("blog", &[])
            .render_text()
            .contains("No drafts"));
    }
}
