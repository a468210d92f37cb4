//! Derivation tool invocation
//!
//! The password ID is always passed as a single argv element. No shell is
//! involved, so quotes and metacharacters in the ID reach gnu-pw-mgr verbatim.

use crate::error::RetrievalError;
use crate::identifier::Identifier;
use async_trait::async_trait;
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;
use tracing::debug;

/// Default derivation tool program name
pub const DEFAULT_TOOL: &str = "gnu-pw-mgr";

/// Default limit on how long one tool invocation may run
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Flag asking gnu-pw-mgr for the bare password listing
const PASSWORD_FLAG: &str = "-H";

/// Which listing to ask the tool for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolMode {
    /// `gnu-pw-mgr -H <id>`: one line per seed, password last
    Password,
    /// `gnu-pw-mgr <id>`: full listing including the login hint header
    Username,
}

impl ToolMode {
    /// Build the argument vector for this mode
    pub fn args(self, extra_args: &[String], identifier: &Identifier) -> Vec<String> {
        let mut args = extra_args.to_vec();
        if self == ToolMode::Password {
            args.push(PASSWORD_FLAG.to_string());
        }
        args.push(identifier.expose().to_string());
        args
    }

    fn label(self) -> &'static str {
        match self {
            ToolMode::Password => "password",
            ToolMode::Username => "username",
        }
    }
}

/// Captured standard output of one tool run
///
/// Owned by the retrieval that produced it and dropped once parsed.
#[derive(Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub stdout: String,
}

impl std::fmt::Debug for ToolOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolOutput")
            .field("stdout_len", &self.stdout.len())
            .finish()
    }
}

/// Something that can run the derivation tool and capture its output
#[async_trait]
pub trait ToolRunner: Send + Sync {
    /// Run the tool in `mode` for `identifier` and capture stdout
    async fn run(
        &self,
        mode: ToolMode,
        identifier: &Identifier,
    ) -> Result<ToolOutput, RetrievalError>;
}

/// Runs the real tool as a child process
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    program: String,
    extra_args: Vec<String>,
    timeout: Duration,
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(DEFAULT_TOOL)
    }
}

impl ProcessRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            extra_args: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Options placed before the mode flag and password ID
    pub fn with_extra_args(mut self, extra_args: Vec<String>) -> Self {
        self.extra_args = extra_args;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl ToolRunner for ProcessRunner {
    async fn run(
        &self,
        mode: ToolMode,
        identifier: &Identifier,
    ) -> Result<ToolOutput, RetrievalError> {
        let args = mode.args(&self.extra_args, identifier);
        debug!(
            program = %self.program,
            mode = mode.label(),
            arg_count = args.len(),
            "Running derivation tool"
        );

        let child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| RetrievalError::ProcessSpawnFailure {
                program: self.program.clone(),
                reason: e.to_string(),
            })?;

        let start = Instant::now();
        // Dropping the wait future on expiry drops the child, which kills it.
        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|e| RetrievalError::OutputCapture {
                program: self.program.clone(),
                reason: e.to_string(),
            })?,
            Err(_) => {
                debug!(program = %self.program, timeout = ?self.timeout, "Derivation tool timed out");
                return Err(RetrievalError::Timeout {
                    after: self.timeout,
                });
            }
        };

        debug!(
            program = %self.program,
            status = ?output.status.code(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Derivation tool finished"
        );

        if !output.status.success() {
            return Err(RetrievalError::ProcessNonZeroExit {
                program: self.program.clone(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(ToolOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}
