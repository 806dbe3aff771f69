//! `project` command handlers

use anyhow::{Context, Result};

use lazydraft::config::ConfigPaths;
use lazydraft::infrastructure::LocalFs;
use lazydraft::presentation::output::render_json;
use lazydraft::presentation::{
    create_registry_use_case, OutputFormat, ProjectListView, ProjectStatusItem, ProjectStatusView,
};
use lazydraft::{Selection, StagingPipeline};

use crate::ui::output::{print_config_warnings, render_choices};
use crate::ui::prompt::read_choice;

pub fn cmd_list(paths: &ConfigPaths, format: OutputFormat) -> Result<()> {
    let loaded = create_registry_use_case(paths).load()?;
    print_config_warnings(&loaded.warnings);

    let view = ProjectListView::new(&loaded.project_names(), loaded.settings.active());
    match format {
        OutputFormat::Json => println!("{}", render_json(&view)?),
        OutputFormat::Text => print!("{}", view.render_text()),
    }
    Ok(())
}

pub fn cmd_active(paths: &ConfigPaths, format: OutputFormat) -> Result<()> {
    let loaded = create_registry_use_case(paths).load()?;
    print_config_warnings(&loaded.warnings);

    let project = loaded.active_project()?;
    match format {
        OutputFormat::Json => println!(
            "{}",
            render_json(&serde_json::json!({ "active": project.name }))?
        ),
        OutputFormat::Text => println!("{}", project.name),
    }
    Ok(())
}

/// Draft, staged and asset counts for every project
pub fn cmd_status(paths: &ConfigPaths, format: OutputFormat) -> Result<()> {
    let loaded = create_registry_use_case(paths).load()?;
    print_config_warnings(&loaded.warnings);

    let fs = LocalFs::new();
    let active = loaded.settings.active();
    let mut projects = Vec::with_capacity(loaded.registry.len());
    for project in loaded.registry.iter() {
        let statuses = StagingPipeline::new(project, &fs)
            .list()
            .with_context(|| format!("failed to read status of project '{}'", project.name))?;
        projects.push(ProjectStatusItem::new(
            &project.name,
            active == Some(project.name.as_str()),
            &statuses,
        ));
    }

    let view = ProjectStatusView { projects };
    match format {
        OutputFormat::Json => println!("{}", render_json(&view)?),
        OutputFormat::Text => print!("{}", view.render_text()),
    }
    Ok(())
}

/// Set the active project by name, or by number from a prompt.
pub fn cmd_config(paths: &ConfigPaths, name: Option<String>) -> Result<()> {
    let use_case = create_registry_use_case(paths);
    let loaded = use_case.load()?;
    print_config_warnings(&loaded.warnings);

    let names = loaded.project_names();
    if names.is_empty() {
        println!("No projects configured in {}.", paths.projects.display());
        return Ok(());
    }

    let chosen = match name {
        Some(name) => name,
        None => {
            print!("{}", render_choices(&names));
            let input = read_choice(None, "Project number")?;
            let selection = Selection::parse(&input, names.len())?;
            names[selection.index()].clone()
        }
    };

    use_case.set_active(&loaded.registry, &chosen)?;
    println!("✓ Active project: {}", chosen);
    Ok(())
}
