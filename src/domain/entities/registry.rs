//! Registry entity
//!
//! Holds every configured project by name and answers "which one is active?"
//! against the name stored in the settings file.

use std::collections::BTreeMap;

use crate::domain::entities::Project;
use crate::error::{LazydraftError, LazydraftResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectRegistry {
    projects: BTreeMap<String, Project>,
}

impl ProjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a project, replacing any project with the same name
    pub fn insert(&mut self, project: Project) {
        self.projects.insert(project.name.clone(), project);
    }

    pub fn get(&self, name: &str) -> Option<&Project> {
        self.projects.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.projects.contains_key(name)
    }

    /// All project names, sorted so prompt numbering is stable between runs
    pub fn project_names(&self) -> Vec<String> {
        self.projects.keys().cloned().collect()
    }

    /// Resolve the active project from the name persisted in settings.
    ///
    /// An unset or blank name is `NoActiveProject`; a name the config does
    /// not define is `ActiveProjectNotFound`.
    pub fn active_project(&self, active_name: Option<&str>) -> LazydraftResult<&Project> {
        let name = match active_name.map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => return Err(LazydraftError::NoActiveProject),
        };
        self.projects
            .values()
            .find(|p| p.name == name)
            .ok_or_else(|| LazydraftError::ActiveProjectNotFound {
                name: name.to_string(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.values()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
