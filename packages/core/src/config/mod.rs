//! Configuration management
//!
//! Loads `config.json` (comments and trailing commas allowed) from the
//! platform config directory. A missing file means defaults.

pub mod paths;
pub mod schema;
pub mod validation;

pub use schema::Config;
pub use validation::{
    ValidationError, ValidationWarning, display_validation_error, display_validation_warning,
    validate_config,
};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors loading the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine config path")]
    NoConfigPath,

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}

/// A validated config together with its non-fatal findings
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ValidationWarning>,
}

/// Load the config file, falling back to defaults when it doesn't exist
pub fn load_config_or_default() -> Result<LoadedConfig, ConfigError> {
    let path = paths::get_config_path().ok_or(ConfigError::NoConfigPath)?;
    load_config_from(&path)
}

/// Load and validate the config at `path`; defaults if the file is absent
pub fn load_config_from(path: &Path) -> Result<LoadedConfig, ConfigError> {
    if !path.exists() {
        debug!(path = %path.display(), "No config file, using defaults");
        return Ok(LoadedConfig::default());
    }

    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&text).map_err(|message| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    })?;
    let warnings = validate_config(&config)?;
    debug!(path = %path.display(), warnings = warnings.len(), "Config loaded");
    Ok(LoadedConfig { config, warnings })
}

/// Parse JSONC text into a Config
///
/// An empty document yields the defaults.
pub fn parse_config(text: &str) -> Result<Config, String> {
    let value: Option<serde_json::Value> =
        jsonc_parser::parse_to_serde_value(text, &Default::default())
            .map_err(|e| e.to_string())?;
    match value {
        Some(value) => serde_json::from_value(value).map_err(|e| e.to_string()),
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let loaded = load_config_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(loaded.config, Config::default());
        assert!(loaded.warnings.is_empty());
    }

    #[test]
    fn loads_jsonc_with_comments() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{
                // pinned install
                "version": 1,
                "tool_path": "/opt/gnu-pw-mgr/bin/gnu-pw-mgr",
                "default_seed": 1, /* oldest seed */
            }"#,
        )
        .unwrap();
        let config = load_config_from(&path).unwrap().config;
        assert_eq!(config.tool_path, "/opt/gnu-pw-mgr/bin/gnu-pw-mgr");
        assert_eq!(config.default_seed, 1);
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn syntax_error_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ \"version\": ").unwrap();
        assert!(matches!(
            load_config_from(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn unknown_field_is_parse_error() {
        assert!(parse_config(r#"{"version": 1, "tool": "x"}"#).is_err());
    }

    #[test]
    fn invalid_values_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"version": 1, "timeout_secs": 0}"#).unwrap();
        match load_config_from(&path) {
            Err(ConfigError::Invalid(err)) => assert_eq!(err.field, "timeout_secs"),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn warnings_are_returned_with_the_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"version": 1, "timeout_secs": 600}"#).unwrap();
        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded.config.timeout_secs, 600);
        assert_eq!(loaded.warnings.len(), 1);
        assert_eq!(loaded.warnings[0].field, "timeout_secs");
    }

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }
}
