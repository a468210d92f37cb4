//! credtool-core - Core library for credtool
//!
//! This library provides:
//! - Password ID and seed selection types
//! - gnu-pw-mgr invocation with a timeout, without a shell
//! - Parsing of gnu-pw-mgr password and username listings
//! - The username-then-password workflow over a front-end collaborator
//! - Configuration management

pub mod collaborator;
pub mod config;
pub mod error;
pub mod identifier;
pub mod parse;
pub mod retriever;
pub mod runner;

pub use collaborator::{Collaborator, FailAt, PROMPT_PASSWORD_ID, RecordingCollaborator};
pub use config::{Config, ConfigError, LoadedConfig, load_config_from, load_config_or_default};
pub use error::{EXIT_CONFIG, EXIT_FAILURE, PairError, PairStep, RetrievalError};
pub use identifier::{Identifier, SeedSelector};
pub use retriever::{CredentialRetriever, PairOutcome, prompt_identifier};
pub use runner::{DEFAULT_TIMEOUT, DEFAULT_TOOL, ProcessRunner, ToolMode, ToolOutput, ToolRunner};

/// Get the version of the core library
pub fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Build the process runner described by `config`
pub fn runner_from_config(config: &Config) -> ProcessRunner {
    ProcessRunner::new(config.tool_path.clone())
        .with_extra_args(config.extra_args.clone())
        .with_timeout(config.timeout())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_version() {
        let version = get_version();
        assert!(!version.is_empty());
    }

    #[test]
    fn runner_follows_config() {
        let config = Config {
            tool_path: "/opt/bin/gnu-pw-mgr".to_string(),
            timeout_secs: 3,
            ..Config::default()
        };
        let runner = runner_from_config(&config);
        assert_eq!(runner.program(), "/opt/bin/gnu-pw-mgr");
        assert_eq!(runner.timeout(), std::time::Duration::from_secs(3));
    }
}
