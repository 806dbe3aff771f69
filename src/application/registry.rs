//! Registry Use Case
//!
//! Builds the project registry from the config files and manages which
//! project is active.

use std::path::{Path, PathBuf};

use crate::config::{ConfigWarning, ProjectConfig, ProjectsConfig, Settings};
use crate::domain::entities::{Project, ProjectRegistry, TargetInfo};
use crate::domain::ports::{DraftRepository, ProjectConfigRepository, SettingsRepository};
use crate::domain::value_objects::RewriteRule;
use crate::error::{LazydraftError, LazydraftResult};
use crate::infrastructure::fs::expand_home;

/// A registry together with the settings and warnings it was loaded with
#[derive(Debug, Clone)]
pub struct LoadedRegistry {
    pub registry: ProjectRegistry,
    pub settings: Settings,
    pub warnings: Vec<ConfigWarning>,
}

impl LoadedRegistry {
    pub fn active_project(&self) -> LazydraftResult<&Project> {
        self.registry.active_project(self.settings.active())
    }

    pub fn project_names(&self) -> Vec<String> {
        self.registry.project_names()
    }
}

pub struct RegistryUseCase<P, S, D>
where
    P: ProjectConfigRepository,
    S: SettingsRepository,
    D: DraftRepository,
{
    projects: P,
    settings: S,
    drafts: D,
}

impl<P, S, D> RegistryUseCase<P, S, D>
where
    P: ProjectConfigRepository,
    S: SettingsRepository,
    D: DraftRepository,
{
    pub fn new(projects: P, settings: S, drafts: D) -> Self {
        Self {
            projects,
            settings,
            drafts,
        }
    }

    /// Parse both config files and scan every project's drafts.
    pub fn load(&self) -> LazydraftResult<LoadedRegistry> {
        let (config, warnings) = self.projects.load()?;
        let settings = self.settings.load()?;
        let registry = build_registry(&config, &self.drafts)?;
        tracing::debug!(
            projects = registry.len(),
            active = settings.active().unwrap_or("-"),
            "loaded registry"
        );
        Ok(LoadedRegistry {
            registry,
            settings,
            warnings,
        })
    }

    /// Make `name` the active project and persist it.
    pub fn set_active(&self, registry: &ProjectRegistry, name: &str) -> LazydraftResult<()> {
        if !registry.contains(name) {
            return Err(LazydraftError::ActiveProjectNotFound {
                name: name.to_string(),
            });
        }
        self.settings.save(&Settings::with_active(name))?;
        tracing::info!(project = name, "active project changed");
        Ok(())
    }
}

/// One `Project` per config entry, drafts scanned.
pub fn build_registry<D: DraftRepository>(
    config: &ProjectsConfig,
    drafts: &D,
) -> LazydraftResult<ProjectRegistry> {
    let mut registry = ProjectRegistry::new();
    for (name, project_config) in &config.projects {
        registry.insert(build_project(name, project_config, drafts)?);
    }
    Ok(registry)
}

/// Resolve a project's paths and scan its draft directory.
pub fn build_project<D: DraftRepository>(
    name: &str,
    config: &ProjectConfig,
    drafts: &D,
) -> LazydraftResult<Project> {
    let source = &config.source;
    let target = &config.target;

    let source_dir = expand_home(&source.base_dir);
    let draft_dir = resolve(&source_dir, &source.draft_posts_dir);
    let asset_dir = resolve(&source_dir, &source.assets_dir);
    let published_dir = resolve(&source_dir, &source.published_posts_dir);

    let target_dir = expand_home(&target.base_dir);
    // Posts link to assets by folder name, never by the configured path.
    let local_folder = source
        .assets_dir
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    let rewrite = RewriteRule::new(target.rewrite, target.asset_prefix.as_deref(), &local_folder);

    let drafts = drafts.load_drafts(&draft_dir, &asset_dir)?;
    tracing::debug!(project = name, drafts = drafts.len(), "scanned project");

    Ok(Project {
        name: name.to_string(),
        source_dir,
        drafts,
        target: TargetInfo {
            content_dir: resolve(&target_dir, &target.content_dir),
            asset_dir: resolve(&target_dir, &target.asset_dir),
            rewrite,
        },
        published_dir,
    })
}

/// Join a relative directory to `base`; absolute and `~` paths stand alone.
fn resolve(base: &Path, dir: &Path) -> PathBuf {
    base.join(expand_home(dir))
}
