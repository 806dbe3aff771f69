//! `init` and `config` command handlers

use anyhow::{Context, Result};

use lazydraft::config::ConfigPaths;
use lazydraft::domain::ports::FileSystem;
use lazydraft::infrastructure::LocalFs;
use lazydraft::presentation::create_registry_use_case;

use crate::ui::output::print_config_warnings;
use crate::ui::prompt::confirm;

/// Create the config directory and any missing config file. Idempotent.
pub fn cmd_init(paths: &ConfigPaths) -> Result<()> {
    let fs = LocalFs::new();
    fs.create_dir_all(&paths.dir)
        .with_context(|| format!("failed to create {}", paths.dir.display()))?;

    for file in [&paths.projects, &paths.settings] {
        if file.exists() {
            println!("○ {} already exists", file.display());
            continue;
        }
        fs.write(file, "")
            .with_context(|| format!("failed to create {}", file.display()))?;
        println!("✓ Created {}", file.display());
    }

    println!("\nAdd a project to {} to get started.", paths.projects.display());
    Ok(())
}

/// Delete the config directory after confirmation.
pub fn cmd_reset(paths: &ConfigPaths, yes: bool) -> Result<()> {
    let fs = LocalFs::new();
    if !paths.dir.exists() {
        println!("Nothing to reset: {} does not exist.", paths.dir.display());
        return Ok(());
    }

    if !yes && !confirm(&format!("Delete {} and everything in it?", paths.dir.display()))? {
        println!("Aborted.");
        return Ok(());
    }

    fs.remove_dir_all(&paths.dir)
        .with_context(|| format!("failed to delete {}", paths.dir.display()))?;
    tracing::info!(dir = %paths.dir.display(), "config reset");
    println!("✓ Deleted {}", paths.dir.display());
    Ok(())
}

/// Parse both config files, scan every project and report what was found.
pub fn cmd_check(paths: &ConfigPaths) -> Result<()> {
    let loaded = create_registry_use_case(paths).load()?;
    print_config_warnings(&loaded.warnings);

    println!("✓ {}", paths.projects.display());
    for project in loaded.registry.iter() {
        println!(
            "  {}: {} drafts, target {}",
            project.name,
            project.drafts.len(),
            project.target.content_dir.display()
        );
    }

    println!("✓ {}", paths.settings.display());
    match loaded.active_project() {
        Ok(project) => println!("  active project: {}", project.name),
        Err(e) => println!("  ⚠ {}", e),
    }

    if loaded.warnings.is_empty() {
        println!("\nNo problems found.");
    } else {
        println!("\n{} warning(s).", loaded.warnings.len());
    }
    Ok(())
}
