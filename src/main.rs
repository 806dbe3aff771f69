//! lazydraft CLI
//!
//! Usage: lazydraft <COMMAND>
//!
//! Commands:
//!   init     Create the config files
//!   config   Check or reset the config files
//!   project  List projects and choose the active one
//!   draft    List, stage, update, unstage and publish drafts

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lazydraft::config::ConfigPaths;
use lazydraft::presentation::OutputFormat;
use lazydraft::LazydraftError;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands, ConfigAction, DraftAction, ProjectAction};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<LazydraftError>() {
            Some(e) if e.is_user_correctable() => {
                print!("{}", ui::output::render_user_error(e));
                ExitCode::SUCCESS
            }
            _ => {
                eprintln!("Error: {:#}", err);
                ExitCode::FAILURE
            }
        },
    }
}

/// `RUST_LOG` wins; otherwise each `-v` raises the level from `warn`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let paths = ConfigPaths::resolve()?;
    let format = OutputFormat::from_json_flag(cli.json);
    tracing::debug!(dir = %paths.dir.display(), "config directory");

    match cli.command {
        Commands::Init => commands::config::cmd_init(&paths),
        Commands::Config { action } => match action {
            ConfigAction::Init => commands::config::cmd_init(&paths),
            ConfigAction::Reset { yes } => commands::config::cmd_reset(&paths, yes),
            ConfigAction::Check => commands::config::cmd_check(&paths),
        },
        Commands::Project { action } => match action {
            ProjectAction::List => commands::project::cmd_list(&paths, format),
            ProjectAction::Active => commands::project::cmd_active(&paths, format),
            ProjectAction::Status => commands::project::cmd_status(&paths, format),
            ProjectAction::Config { name } => commands::project::cmd_config(&paths, name),
        },
        Commands::Draft { action } => match action {
            DraftAction::List => commands::draft::cmd_list(&paths, format),
            DraftAction::Stage { number } => commands::draft::cmd_stage(&paths, number),
            DraftAction::Update { number } => commands::draft::cmd_update(&paths, number),
            DraftAction::Unstage { number } => commands::draft::cmd_unstage(&paths, number),
            DraftAction::Publish { number } => commands::draft::cmd_publish(&paths, number),
        },
    }
}
