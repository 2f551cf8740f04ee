//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Render company ownership hierarchies as text trees with land parcel counts
#[derive(Parser, Debug)]
#[command(name = "landtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase debug output (-d, -dd, -ddd)
    #[arg(short = 'd', long = "debug", action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the path from the root down to a company
    FromRoot {
        /// Company id to locate
        company_id: String,

        /// Company relations csv (default from config)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        relations: Option<PathBuf>,

        /// Land ownership csv (default from config)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        ownership: Option<PathBuf>,
    },

    /// Show the full subtree beneath a company
    Expand {
        /// Company id to expand
        company_id: String,

        /// Company relations csv (default from config)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        relations: Option<PathBuf>,

        /// Land ownership csv (default from config)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        ownership: Option<PathBuf>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config file location
    Path,
}
