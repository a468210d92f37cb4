//! Centralized retrieval error formatting
//!
//! This module provides consistent, actionable error messages for every
//! retrieval failure, and maps errors to process exit codes. Messages never
//! include the password ID or any retrieved value.

use console::style;
use credtool_core::config::display_validation_error;
use credtool_core::{ConfigError, EXIT_CONFIG, EXIT_FAILURE, PairError, RetrievalError};

/// Format retrieval errors with actionable guidance
pub fn format_retrieval_error(e: &RetrievalError) -> String {
    match e {
        RetrievalError::ProcessSpawnFailure { program, reason } => format!(
            "{}\n\n  {}\n  {}\n  {}",
            style(format!("Could not run {program}")).red().bold(),
            reason,
            style("  Is gnu-pw-mgr installed and on PATH?").cyan(),
            style("  Or point at it: credtool --tool /path/to/gnu-pw-mgr ...").cyan(),
        ),
        RetrievalError::OutputCapture { program, reason } => format!(
            "{}\n\n  {}\n  {}",
            style(format!("Lost the output of {program}")).red().bold(),
            reason,
            style("  The tool started but its output could not be read. Try again.").cyan(),
        ),
        RetrievalError::ProcessNonZeroExit {
            program, stderr, ..
        } => {
            let mut msg = format!("{}", style(e.to_string()).red().bold());
            if stderr.is_empty() {
                msg.push_str(&format!(
                    "\n\n  {}",
                    style(format!("  Run {program} directly to see what it reports.")).cyan()
                ));
            }
            msg
        }
        RetrievalError::IndexOutOfRange {
            requested,
            available,
        } => format!(
            "{}\n\n  Seed {requested} was requested but only {available} line(s) were listed.\n  {}",
            style("Seed not found").red().bold(),
            style("  Try a smaller --seed, or --seed 0 for the most recent.").cyan(),
        ),
        RetrievalError::MalformedOutput => format!(
            "{}\n\n  {}",
            style("No password in gnu-pw-mgr output").red().bold(),
            "The selected line was empty. Check that seeds are configured (gnu-pw-mgr --tag).",
        ),
        RetrievalError::NoMatch => format!(
            "{}\n\n  {}",
            style("No username recorded for this password ID").red().bold(),
            "gnu-pw-mgr stores a login hint only when one was given with --login-id.",
        ),
        RetrievalError::Timeout { .. } => format!(
            "{}\n\n  {}",
            style(e.to_string()).red().bold(),
            style("  Raise the limit with --timeout or timeout_secs in the config file.").cyan(),
        ),
        _ => format!("{}", style(e.to_string()).red().bold()),
    }
}

/// Format a failed username-then-password run, stating which step failed
pub fn format_pair_error(e: &PairError) -> String {
    format!(
        "{} {}\n\n{}",
        style("Failed at step:").dim(),
        e.step,
        format_retrieval_error(&e.source)
    )
}

/// Note on stderr that the username went out before the failure
pub fn show_partial_delivery(e: &PairError) {
    eprintln!(
        "{} Username was already delivered; the {} step did not complete.",
        style("Partial:").yellow().bold(),
        e.step
    );
}

/// Print an error to stderr and return the exit code for it
pub fn report_error(err: &anyhow::Error) -> i32 {
    eprintln!();
    if let Some(e) = err.downcast_ref::<PairError>() {
        eprintln!("{}", format_pair_error(e));
        return e.exit_code();
    }
    if let Some(e) = err.downcast_ref::<RetrievalError>() {
        eprintln!("{}", format_retrieval_error(e));
        return e.exit_code();
    }
    if let Some(e) = err.downcast_ref::<ConfigError>() {
        match e {
            ConfigError::Invalid(validation) => display_validation_error(validation),
            _ => {
                eprintln!("{} {e}", style("Configuration error:").red().bold());
                eprintln!(
                    "  {} Check the config file for syntax errors or unknown fields.",
                    style("Tip:").cyan()
                );
            }
        }
        return EXIT_CONFIG;
    }
    eprintln!("{} {err:#}", style("Error:").red().bold());
    EXIT_FAILURE
}

#[cfg(test)]
mod tests {
    use super::*;
    use credtool_core::PairStep;
    use std::time::Duration;

    fn plain(s: String) -> String {
        console::strip_ansi_codes(&s).into_owned()
    }

    #[test]
    fn spawn_failure_suggests_install() {
        let msg = plain(format_retrieval_error(&RetrievalError::ProcessSpawnFailure {
            program: "gnu-pw-mgr".to_string(),
            reason: "No such file or directory".to_string(),
        }));
        assert!(msg.contains("Could not run gnu-pw-mgr"));
        assert!(msg.contains("--tool"));
    }

    #[test]
    fn output_capture_does_not_suggest_install() {
        let msg = plain(format_retrieval_error(&RetrievalError::OutputCapture {
            program: "gnu-pw-mgr".to_string(),
            reason: "broken pipe".to_string(),
        }));
        assert!(msg.contains("Lost the output of gnu-pw-mgr"));
        assert!(!msg.contains("installed"));
        assert!(!msg.contains("--tool"));
    }

    #[test]
    fn out_of_range_suggests_smaller_seed() {
        let msg = plain(format_retrieval_error(&RetrievalError::IndexOutOfRange {
            requested: 4,
            available: 2,
        }));
        assert!(msg.contains("Seed 4"));
        assert!(msg.contains("--seed"));
    }

    #[test]
    fn messages_are_distinct_per_error() {
        let errors = [
            RetrievalError::MalformedOutput,
            RetrievalError::NoMatch,
            RetrievalError::Timeout {
                after: Duration::from_secs(10),
            },
            RetrievalError::ProcessNonZeroExit {
                program: "gnu-pw-mgr".to_string(),
                code: Some(1),
                stderr: "boom".to_string(),
            },
        ];
        let mut messages: Vec<String> = errors
            .iter()
            .map(|e| plain(format_retrieval_error(e)))
            .collect();
        messages.sort();
        messages.dedup();
        assert_eq!(messages.len(), errors.len());
    }

    #[test]
    fn pair_error_names_failed_step() {
        let err = PairError {
            step: PairStep::Password,
            username_delivered: true,
            source: RetrievalError::NoMatch,
        };
        let msg = plain(format_pair_error(&err));
        assert!(msg.contains("Failed at step: password"));
    }

    #[test]
    fn report_error_maps_exit_codes() {
        let err = anyhow::Error::new(RetrievalError::Timeout {
            after: Duration::from_secs(1),
        });
        assert_eq!(report_error(&err), 8);

        let err = anyhow::Error::new(PairError {
            step: PairStep::Password,
            username_delivered: true,
            source: RetrievalError::ProcessSpawnFailure {
                program: "gnu-pw-mgr".to_string(),
                reason: "missing".to_string(),
            },
        });
        assert_eq!(report_error(&err), 3);

        let err = anyhow::Error::new(ConfigError::NoConfigPath);
        assert_eq!(report_error(&err), EXIT_CONFIG);

        assert_eq!(report_error(&anyhow::anyhow!("other")), 1);
    }
}
