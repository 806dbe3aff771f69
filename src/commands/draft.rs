//! `draft` command handlers
//!
//! Every handler works on the active project. Handlers that choose a staged
//! draft fail with "no staged drafts" before prompting.

use anyhow::Result;

use lazydraft::config::ConfigPaths;
use lazydraft::domain::entities::Draft;
use lazydraft::infrastructure::LocalFs;
use lazydraft::presentation::output::render_json;
use lazydraft::presentation::{create_registry_use_case, DraftListView, OutputFormat};
use lazydraft::{LoadedRegistry, StagingPipeline};

use crate::ui::output::{
    print_config_warnings, render_choices, render_published, render_staged, render_unstaged,
};
use crate::ui::prompt::read_choice;

fn load(paths: &ConfigPaths) -> Result<LoadedRegistry> {
    let loaded = create_registry_use_case(paths).load()?;
    print_config_warnings(&loaded.warnings);
    Ok(loaded)
}

/// The given number, or one chosen from `drafts` at a prompt
fn choose(number: Option<String>, drafts: &[&Draft]) -> Result<String> {
    if number.is_none() {
        let names: Vec<&str> = drafts.iter().map(|d| d.name()).collect();
        print!("{}", render_choices(&names));
    }
    Ok(read_choice(number, "Draft number")?)
}

pub fn cmd_list(paths: &ConfigPaths, format: OutputFormat) -> Result<()> {
    let loaded = load(paths)?;
    let project = loaded.active_project()?;
    let fs = LocalFs::new();
    let pipeline = StagingPipeline::new(project, &fs);

    let view = DraftListView::new(&project.name, &pipeline.list()?);
    match format {
        OutputFormat::Json => println!("{}", render_json(&view)?),
        OutputFormat::Text => print!("{}", view.render_text()),
    }
    Ok(())
}

pub fn cmd_stage(paths: &ConfigPaths, number: Option<String>) -> Result<()> {
    let loaded = load(paths)?;
    let project = loaded.active_project()?;
    let fs = LocalFs::new();
    let pipeline = StagingPipeline::new(project, &fs);

    let drafts: Vec<&Draft> = project.drafts.iter().collect();
    let input = choose(number, &drafts)?;
    let outcome = pipeline.stage(&input)?;
    print!("{}", render_staged("Staged", &outcome));
    Ok(())
}

pub fn cmd_update(paths: &ConfigPaths, number: Option<String>) -> Result<()> {
    let loaded = load(paths)?;
    let project = loaded.active_project()?;
    let fs = LocalFs::new();
    let pipeline = StagingPipeline::new(project, &fs);

    let input = choose(number, &pipeline.staged()?)?;
    let outcome = pipeline.update(&input)?;
    print!("{}", render_staged("Updated", &outcome));
    Ok(())
}

pub fn cmd_unstage(paths: &ConfigPaths, number: Option<String>) -> Result<()> {
    let loaded = load(paths)?;
    let project = loaded.active_project()?;
    let fs = LocalFs::new();
    let pipeline = StagingPipeline::new(project, &fs);

    let input = choose(number, &pipeline.staged()?)?;
    let outcome = pipeline.unstage(&input)?;
    print!("{}", render_unstaged(&outcome));
    Ok(())
}

pub fn cmd_publish(paths: &ConfigPaths, number: Option<String>) -> Result<()> {
    let loaded = load(paths)?;
    let project = loaded.active_project()?;
    let fs = LocalFs::new();
    let pipeline = StagingPipeline::new(project, &fs);

    let input = choose(number, &pipeline.staged()?)?;
    let outcome = pipeline.publish(&input)?;
    print!("{}", render_published(&outcome));
    Ok(())
}
