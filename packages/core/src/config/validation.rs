//! Configuration validation with actionable error messages
//!
//! Validates the configuration and tells the user exactly what to change.

use super::schema::Config;
use console::style;

/// Timeouts above this many seconds produce a warning
const LONG_TIMEOUT_SECS: u64 = 300;

/// A configuration validation error with an actionable fix
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The config field that has an error
    pub field: String,
    /// Description of what's wrong
    pub message: String,
    /// Exact change that fixes the issue
    pub fix_command: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// A configuration validation warning (non-fatal)
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The config field with a potential issue
    pub field: String,
    /// Description of the warning
    pub message: String,
    /// Suggested change to address the warning
    pub fix_command: String,
}

/// Validate configuration and return warnings or first error
///
/// Returns Ok(warnings) if validation passes (possibly with non-fatal warnings).
/// Returns Err(error) on the first fatal validation error encountered.
pub fn validate_config(config: &Config) -> Result<Vec<ValidationWarning>, ValidationError> {
    let mut warnings = Vec::new();

    if config.tool_path.trim().is_empty() {
        return Err(ValidationError {
            field: "tool_path".to_string(),
            message: "tool_path cannot be empty".to_string(),
            fix_command: r#"set "tool_path": "gnu-pw-mgr" in the config file"#.to_string(),
        });
    }

    if config.timeout_secs == 0 {
        return Err(ValidationError {
            field: "timeout_secs".to_string(),
            message: "timeout_secs must be > 0".to_string(),
            fix_command: r#"set "timeout_secs": 10 in the config file"#.to_string(),
        });
    }

    // Warnings (non-fatal)

    if config.timeout_secs > LONG_TIMEOUT_SECS {
        warnings.push(ValidationWarning {
            field: "timeout_secs".to_string(),
            message: format!(
                "A hung gnu-pw-mgr will block for {}s before being killed",
                config.timeout_secs
            ),
            fix_command: r#"set "timeout_secs": 10 in the config file"#.to_string(),
        });
    }

    if config.extra_args.iter().any(|arg| arg == "-H") {
        warnings.push(ValidationWarning {
            field: "extra_args".to_string(),
            message: "-H in extra_args also applies to username lookups, which then find no hint"
                .to_string(),
            fix_command: r#"remove "-H" from "extra_args""#.to_string(),
        });
    }

    Ok(warnings)
}

/// Display a validation error with styled formatting
pub fn display_validation_error(error: &ValidationError) {
    eprintln!();
    eprintln!("{}", style("Error: Configuration error").red().bold());
    eprintln!();
    eprintln!("  {}  {}", style("Field:").dim(), error.field);
    eprintln!("  {}  {}", style("Problem:").dim(), error.message);
    eprintln!();
    eprintln!("{}:", style("To fix").dim());
    eprintln!("  {}", style(&error.fix_command).cyan());
    eprintln!();
}

/// Display a validation warning with styled formatting
pub fn display_validation_warning(warning: &ValidationWarning) {
    eprintln!();
    eprintln!(
        "{}",
        style("Warning: Configuration warning").yellow().bold()
    );
    eprintln!();
    eprintln!("  {}  {}", style("Field:").dim(), warning.field);
    eprintln!("  {}  {}", style("Issue:").dim(), warning.message);
    eprintln!();
    eprintln!("{}:", style("To address").dim());
    eprintln!("  {}", style(&warning.fix_command).cyan());
    eprintln!();
}
