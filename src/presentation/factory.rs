//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::RegistryUseCase;
use crate::config::ConfigPaths;
use crate::infrastructure::{
    FsDraftRepository, LocalFs, YamlProjectConfigRepository, YamlSettingsRepository,
};

/// Type alias for the concrete RegistryUseCase with all dependencies
pub type ConcreteRegistryUseCase = RegistryUseCase<
    YamlProjectConfigRepository,
    YamlSettingsRepository,
    FsDraftRepository<LocalFs>,
>;

/// Create a registry use case reading the config files under `paths`
pub fn create_registry_use_case(paths: &ConfigPaths) -> ConcreteRegistryUseCase {
    RegistryUseCase::new(
        YamlProjectConfigRepository::new(&paths.projects),
        YamlSettingsRepository::new(&paths.settings),
        FsDraftRepository::new(LocalFs::new()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LazydraftError;
    use tempfile::tempdir;

    #[test]
    fn create_registry_use_case_reads_config_dir() {
        let dir = tempdir().unwrap();
        let paths = ConfigPaths::in_dir(dir.path());

        let err = create_registry_use_case(&paths).load().unwrap_err();

        assert!(matches!(err, LazydraftError::ConfigMissing { path } if path == paths.projects));
    }

    #[test]
    fn empty_config_loads_empty_registry() {
        let dir = tempdir().unwrap();
        let paths = ConfigPaths::in_dir(dir.path());
        std::fs::write(&paths.projects, "").unwrap();

        let loaded = create_registry_use_case(&paths).load().unwrap();

        assert!(loaded.registry.is_empty());
        assert_eq!(loaded.settings.active(), None);
    }
}
