//! Config file location
//!
//! Uses the platform config directory (`~/.config/credtool` on Linux).
//! `CREDTOOL_CONFIG` points at a specific file instead.

use directories::ProjectDirs;
use std::path::PathBuf;

/// Environment variable overriding the config file path
pub const CONFIG_PATH_ENV: &str = "CREDTOOL_CONFIG";

const CONFIG_FILE_NAME: &str = "config.json";

/// Directory holding credtool's config file
pub fn get_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "credtool").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Path of the config file, honoring `CREDTOOL_CONFIG`
pub fn get_config_path() -> Option<PathBuf> {
    resolve_config_path(std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
}

fn resolve_config_path(env_override: Option<PathBuf>) -> Option<PathBuf> {
    match env_override {
        Some(path) if !path.as_os_str().is_empty() => Some(path),
        _ => get_config_dir().map(|dir| dir.join(CONFIG_FILE_NAME)),
    }
}
