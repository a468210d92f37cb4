//! Config subcommand implementations
//!
//! Provides `credtool config` subcommands for viewing configuration.

mod path;
mod show;

use anyhow::Result;
use clap::Subcommand;
use super::Session;

pub use path::cmd_config_path;
pub use show::cmd_config_show;

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show {
        /// Output as JSON instead of table format
        #[arg(long)]
        json: bool,
    },
    /// Print the config file path
    Path,
}

/// Handle config command
pub fn cmd_config(cmd: ConfigCommands, session: &Session) -> Result<()> {
    match cmd {
        ConfigCommands::Show { json } => cmd_config_show(session, json),
        ConfigCommands::Path => cmd_config_path(session.quiet),
    }
}
