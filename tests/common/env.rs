//! Test environment builder for isolated lazydraft testing.
//!
//! Every command runs with `LAZYDRAFT_CONFIG_DIR` pointing into the temp dir,
//! so the real `~/.config/lazydraft` is never touched.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Result of running a lazydraft CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    /// Empty environment: no config directory yet
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    /// A `blog` project with two drafts, an empty site, and `blog` active
    pub fn with_blog() -> Self {
        let env = Self::new();
        env.write_config(&blog_config(env.root.path()), "activeProject: blog\n");
        env.write_draft("Hello World.md", "# Hello\n![[cover.png]]\n");
        env.write_draft("Second Post.md", "# Second\n");
        env.write_asset("Hello World/cover.png", "PNG");
        std::fs::create_dir_all(env.content_dir()).unwrap();
        env
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn config_dir(&self) -> PathBuf {
        self.path("config")
    }

    pub fn draft_dir(&self) -> PathBuf {
        self.path("notes/drafts")
    }

    pub fn content_dir(&self) -> PathBuf {
        self.path("site/content/posts")
    }

    pub fn site_asset_dir(&self) -> PathBuf {
        self.path("site/static/img")
    }

    pub fn published_dir(&self) -> PathBuf {
        self.path("notes/published")
    }

    pub fn write_config(&self, projects: &str, settings: &str) {
        std::fs::create_dir_all(self.config_dir()).unwrap();
        std::fs::write(self.config_dir().join("projects.yml"), projects).unwrap();
        std::fs::write(self.config_dir().join("settings.yml"), settings).unwrap();
    }

    pub fn write_draft(&self, name: &str, content: &str) {
        std::fs::create_dir_all(self.draft_dir()).unwrap();
        std::fs::write(self.draft_dir().join(name), content).unwrap();
    }

    pub fn write_asset(&self, relative: &str, content: &str) {
        let path = self.path("notes/assets").join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    /// Sorted file names in the site content directory
    pub fn content_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.content_dir())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Run with stdin closed (a prompt reads an empty line)
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_stdin(args, "")
    }

    /// Run with `input` piped to stdin
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> TestResult {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to execute lazydraft");

        child
            .stdin
            .take()
            .unwrap()
            .write_all(input.as_bytes())
            .unwrap();

        output_to_result(child.wait_with_output().unwrap())
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_lazydraft"));
        cmd.current_dir(self.root.path())
            .args(args)
            .env("LAZYDRAFT_CONFIG_DIR", self.config_dir())
            .env("LAZYDRAFT_TEST_HOME", self.path("home"))
            .env_remove("RUST_LOG");
        cmd
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// `projects.yml` for a `blog` project rooted at `root`
pub fn blog_config(root: &Path) -> String {
    format!(
        "blog:\n  source:\n    base_dir: {notes}\n    draft_posts_dir: drafts\n    published_posts_dir: published\n    assets_dir: assets\n  target:\n    base_dir: {site}\n    content_dir: content/posts\n    asset_dir: static/img\n    asset_prefix: /img\n",
        notes = root.join("notes").display(),
        site = root.join("site").display(),
    )
}
