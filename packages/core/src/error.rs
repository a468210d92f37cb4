//! Retrieval error taxonomy
//!
//! Every failure a retrieval can hit maps to exactly one variant here, and
//! every variant maps to its own process exit code so callers can tell a
//! missing tool from a bad seed without parsing messages.

use std::time::Duration;
use thiserror::Error;

/// Exit code for failures outside the retrieval taxonomy
pub const EXIT_FAILURE: i32 = 1;

/// Exit code for a configuration or usage problem
pub const EXIT_CONFIG: i32 = 2;

/// Errors from invoking the derivation tool or parsing what it printed
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// The tool could not be started at all (missing, not executable)
    #[error("Failed to start {program}: {reason}")]
    ProcessSpawnFailure { program: String, reason: String },

    /// The tool started but its output pipes could not be read
    #[error("Failed to read output of {program}: {reason}")]
    OutputCapture { program: String, reason: String },

    /// The tool ran but reported failure
    #[error("{program} exited with {}{}", describe_code(.code), describe_stderr(.stderr))]
    ProcessNonZeroExit {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    /// The requested seed line is not present in the tool output
    #[error("Seed {requested} requested but the tool printed only {available} line(s)")]
    IndexOutOfRange { requested: u32, available: usize },

    /// The selected line had no token to use as a password
    #[error("Tool output has no password token on the selected line")]
    MalformedOutput,

    /// No `hint: <name> pw:` entry was found in the tool output
    #[error("Tool output contains no username hint")]
    NoMatch,

    /// The tool did not finish in time and was killed
    #[error("Tool did not finish within {}", describe_duration(.after))]
    Timeout { after: Duration },

    /// The identifier was empty or whitespace only
    #[error("Password ID cannot be empty")]
    EmptyIdentifier,

    /// The identifier contained a character that cannot be passed as one argument
    #[error("Password ID cannot contain {0}")]
    InvalidIdentifier(&'static str),

    /// Reading input from, or handing a value to, the front end failed
    #[error("Delivery failed: {0}")]
    Delivery(String),
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

fn describe_duration(after: &Duration) -> String {
    humantime::format_duration(*after).to_string()
}

fn describe_stderr(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

impl RetrievalError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            RetrievalError::EmptyIdentifier | RetrievalError::InvalidIdentifier(_) => EXIT_CONFIG,
            RetrievalError::OutputCapture { .. } => EXIT_FAILURE,
            RetrievalError::ProcessSpawnFailure { .. } => 3,
            RetrievalError::ProcessNonZeroExit { .. } => 4,
            RetrievalError::IndexOutOfRange { .. } => 5,
            RetrievalError::MalformedOutput => 6,
            RetrievalError::NoMatch => 7,
            RetrievalError::Timeout { .. } => 8,
            RetrievalError::Delivery(_) => 9,
        }
    }
}

/// Which half of a username-then-password workflow failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairStep {
    Username,
    Advance,
    Password,
}

impl std::fmt::Display for PairStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PairStep::Username => "username",
            PairStep::Advance => "advance to next field",
            PairStep::Password => "password",
        };
        f.write_str(label)
    }
}

/// Failure of the compound username-then-password workflow
///
/// `username_delivered` is true when the username already reached its
/// destination before the failure. That delivery is not undone.
#[derive(Debug, Error)]
#[error("{step} step failed{}: {source}", partial_suffix(.username_delivered))]
pub struct PairError {
    pub step: PairStep,
    pub username_delivered: bool,
    #[source]
    pub source: RetrievalError,
}

fn partial_suffix(username_delivered: &bool) -> &'static str {
    if *username_delivered {
        " after username was delivered"
    } else {
        ""
    }
}

impl PairError {
    pub fn exit_code(&self) -> i32 {
        self.source.exit_code()
    }
}
