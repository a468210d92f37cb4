//! CLI command implementations
//!
//! Retrieval commands (get-password, get-username, get-pair) and config
//! inspection.

mod config;
mod get_pair;
mod get_password;
mod get_username;

pub use config::{ConfigCommands, cmd_config};
pub use get_pair::{GetPairArgs, cmd_get_pair};
pub use get_password::{GetPasswordArgs, cmd_get_password};
pub use get_username::{GetUsernameArgs, cmd_get_username};

use crate::terminal::TerminalCollaborator;
use anyhow::Result;
use credtool_core::{
    Config, CredentialRetriever, Identifier, ProcessRunner, SeedSelector, prompt_identifier,
    runner_from_config,
};
use std::time::Duration;

/// Effective settings for one CLI invocation
pub struct Session {
    pub config: Config,
    pub timeout: Duration,
    pub quiet: bool,
}

impl Session {
    pub fn retriever(&self) -> CredentialRetriever<ProcessRunner> {
        CredentialRetriever::new(runner_from_config(&self.config).with_timeout(self.timeout))
    }

    /// The --seed value, or the configured default
    pub fn seed(&self, requested: Option<SeedSelector>) -> SeedSelector {
        requested.unwrap_or_else(|| self.config.default_seed.into())
    }
}

/// Use the password ID from the command line, or prompt for one
pub fn resolve_identifier(
    arg: Option<&str>,
    terminal: &mut TerminalCollaborator<impl std::io::Write>,
) -> Result<Identifier> {
    let identifier = match arg {
        Some(raw) => Identifier::new(raw)?,
        None => prompt_identifier(terminal)?,
    };
    Ok(identifier)
}
