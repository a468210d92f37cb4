//! credtool CLI - Retrieve usernames and passwords from gnu-pw-mgr
//!
//! This module contains the shared CLI implementation used by the binary.

mod commands;
mod output;
mod terminal;

use anyhow::{Result, anyhow, bail};
use clap::{Parser, Subcommand};
use console::style;
use credtool_core::config::{self, display_validation_warning};
use credtool_core::{Config, load_config_or_default};
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub use output::errors::report_error;

/// Retrieve usernames and passwords from gnu-pw-mgr
#[derive(Parser)]
#[command(name = "credtool")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Retrieve usernames and passwords from gnu-pw-mgr", long_about = None)]
#[command(after_help = EXIT_CODES_HELP)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase verbosity level
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Derivation tool to run (overrides tool_path)
    #[arg(long, global = true, value_name = "PATH")]
    tool: Option<String>,

    /// Limit on one tool run, e.g. "10s" or "1m" (overrides timeout_secs)
    #[arg(long, global = true, value_name = "DURATION", value_parser = humantime::parse_duration)]
    timeout: Option<Duration>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the password for a password ID
    #[command(visible_alias = "pass")]
    GetPassword(commands::GetPasswordArgs),
    /// Print the username (login hint) for a password ID
    #[command(visible_alias = "user")]
    GetUsername(commands::GetUsernameArgs),
    /// Print the username, then the password, for a password ID
    #[command(visible_alias = "pair")]
    GetPair(commands::GetPairArgs),
    /// Inspect configuration
    #[command(subcommand)]
    Config(commands::ConfigCommands),
}

const EXIT_CODES_HELP: &str = "\
Exit codes:
  0  success
  1  other failure
  2  usage or configuration error
  3  gnu-pw-mgr could not be started
  4  gnu-pw-mgr exited with an error
  5  requested seed not present
  6  no password token in output
  7  no username hint in output
  8  gnu-pw-mgr timed out
  9  input or output failed";

/// Install the tracing subscriber on stderr
///
/// `RUST_LOG` takes precedence over the verbosity flags.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Apply command-line overrides on top of the loaded config
fn apply_overrides(mut config: Config, tool: Option<&str>) -> Result<Config> {
    if let Some(tool) = tool {
        if tool.trim().is_empty() {
            bail!("--tool cannot be empty");
        }
        config.tool_path = tool.to_string();
    }
    Ok(config)
}

fn resolve_timeout(config: &Config, timeout: Option<Duration>) -> Result<Duration> {
    match timeout {
        Some(d) if d.is_zero() => Err(anyhow!("--timeout must be greater than zero")),
        Some(d) => Ok(d),
        None => Ok(config.timeout()),
    }
}

/// Combine the loaded config with the global flags
fn build_session(cli: &Cli, config: Config) -> Result<commands::Session> {
    let config = apply_overrides(config, cli.tool.as_deref())?;
    Ok(commands::Session {
        timeout: resolve_timeout(&config, cli.timeout)?,
        config,
        quiet: cli.quiet,
    })
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Configure color output
    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let loaded = load_config_or_default()?;

    if cli.verbose > 0
        && let Some(path) = config::paths::get_config_path()
    {
        eprintln!(
            "{} Config: {}",
            style("[info]").cyan(),
            path.display()
        );
    }

    if !cli.quiet {
        for warning in &loaded.warnings {
            display_validation_warning(warning);
        }
    }

    let session = build_session(&cli, loaded.config)?;
    debug!(
        tool = %session.config.tool_path,
        timeout = ?session.timeout,
        extra_args = session.config.extra_args.len(),
        "Effective settings"
    );

    match cli.command {
        Commands::GetPassword(args) => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(commands::cmd_get_password(&args, &session))
        }
        Commands::GetUsername(args) => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(commands::cmd_get_username(&args, &session))
        }
        Commands::GetPair(args) => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(commands::cmd_get_pair(&args, &session))
        }
        Commands::Config(cmd) => commands::cmd_config(cmd, &session),
    }
}
