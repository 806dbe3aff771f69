//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose) are inherited by all subcommands
//! - Commands that pick a draft or project take an optional number and
//!   prompt for it when absent

use clap::{Parser, Subcommand};

/// lazydraft - stage markdown drafts into a static site
#[derive(Parser, Debug)]
#[command(name = "lazydraft")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'lazydraft init' to create the config files.")]
pub struct Cli {
    /// Emit lists as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Create the config directory and empty config files
    #[command(visible_alias = "i")]
    Init,

    /// Manage the config files
    #[command(visible_alias = "c")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// List projects and choose the active one
    #[command(visible_alias = "p")]
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Work with the active project's drafts
    #[command(visible_alias = "d")]
    Draft {
        #[command(subcommand)]
        action: DraftAction,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigAction {
    /// Create the config directory and empty config files
    #[command(visible_alias = "i")]
    Init,

    /// Delete the config directory
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Parse the config files and report problems
    Check,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ProjectAction {
    /// List configured projects
    #[command(visible_alias = "l")]
    List,

    /// Show the active project
    #[command(visible_alias = "a")]
    Active,

    /// Count drafts and staged posts in every project
    #[command(visible_alias = "s")]
    Status,

    /// Choose the active project
    #[command(visible_alias = "c")]
    Config {
        /// Project name (prompts when omitted)
        name: Option<String>,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum DraftAction {
    /// List drafts, marking the staged ones
    #[command(visible_alias = "l")]
    List,

    /// Copy a draft into the site
    #[command(visible_alias = "s")]
    Stage {
        /// Draft number from `draft list` (prompts when omitted)
        #[arg(allow_negative_numbers = true)]
        number: Option<String>,
    },

    /// Re-copy a staged draft with its latest content
    #[command(visible_alias = "u")]
    Update {
        /// Number in the staged list (prompts when omitted)
        #[arg(allow_negative_numbers = true)]
        number: Option<String>,
    },

    /// Remove a staged draft from the site
    #[command(visible_alias = "r")]
    Unstage {
        /// Number in the staged list (prompts when omitted)
        #[arg(allow_negative_numbers = true)]
        number: Option<String>,
    },

    /// Archive a staged draft and remove it from drafts
    #[command(visible_alias = "p")]
    Publish {
        /// Number in the staged list (prompts when omitted)
        #[arg(allow_negative_numbers = true)]
        number: Option<String>,
    },
}
