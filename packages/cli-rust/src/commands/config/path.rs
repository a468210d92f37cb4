//! Config path subcommand

use anyhow::{Result, anyhow};
use console::style;
use credtool_core::config::paths::{CONFIG_PATH_ENV, get_config_path};

/// Print where credtool looks for its config file
pub fn cmd_config_path(quiet: bool) -> Result<()> {
    let path = get_config_path().ok_or_else(|| anyhow!("Could not determine config path"))?;
    println!("{}", path.display());

    if !quiet && !path.exists() {
        eprintln!(
            "{} File does not exist; defaults are in effect. Set {} to use another file.",
            style("Note:").cyan(),
            style(CONFIG_PATH_ENV).green()
        );
    }
    Ok(())
}
