//! Configuration schema for credtool
//!
//! Defines the structure and defaults for the config.json file.

use crate::runner::{DEFAULT_TIMEOUT, DEFAULT_TOOL};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration structure for credtool
///
/// Serialized to/from `~/.config/credtool/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config file version for migrations
    pub version: u32,

    /// Derivation tool to run (default: "gnu-pw-mgr")
    /// A bare name is looked up on PATH
    #[serde(default = "default_tool_path")]
    pub tool_path: String,

    /// Seconds one tool run may take before it is killed (default: 10)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Seed used when --seed is not given (default: 0, most recent)
    #[serde(default)]
    pub default_seed: u32,

    /// Extra options passed to the tool before the password ID
    /// e.g. ["--config-file", "/path/to/gnu-pw-mgr.cfg"]
    #[serde(default)]
    pub extra_args: Vec<String>,
}

fn default_tool_path() -> String {
    DEFAULT_TOOL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            tool_path: default_tool_path(),
            timeout_secs: default_timeout_secs(),
            default_seed: 0,
            extra_args: Vec::new(),
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
