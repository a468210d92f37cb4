//! Config show subcommand
//!
//! Displays the effective configuration in table or JSON format.
//! Uses serde serialization to automatically include all Config fields.

use crate::commands::Session;
use anyhow::{Result, anyhow};
use comfy_table::{Cell, Color, Table};
use credtool_core::{DEFAULT_TOOL, config};
use serde_json::{Map, Value};
use std::time::Duration;

/// Show effective configuration
///
/// Command-line overrides (--tool, --timeout) are already applied to `session`.
pub fn cmd_config_show(session: &Session, json: bool) -> Result<()> {
    let effective = effective_config(session)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&effective)?);
        return Ok(());
    }

    show_table(&effective);
    Ok(())
}

/// The session's config with the resolved timeout in place of the file's
fn effective_config(session: &Session) -> Result<Map<String, Value>> {
    let value = serde_json::to_value(&session.config)?;
    let Value::Object(mut obj) = value else {
        return Err(anyhow!("Config did not serialize to an object"));
    };
    obj.insert("timeout_secs".to_string(), timeout_value(session.timeout));
    Ok(obj)
}

/// Whole seconds stay integers; sub-second timeouts keep their fraction
fn timeout_value(timeout: Duration) -> Value {
    if timeout.subsec_nanos() == 0 {
        Value::from(timeout.as_secs())
    } else {
        Value::from(timeout.as_secs_f64())
    }
}

fn show_table(obj: &Map<String, Value>) {
    let mut table = Table::new();
    table.set_header(vec!["Key", "Value"]);

    for (key, val) in obj {
        let display_value = format_value(key, val);
        let cell = apply_cell_styling(key, val, display_value);
        table.add_row(vec![Cell::new(key), cell]);
    }

    println!("{table}");

    if let Some(path) = config::paths::get_config_path() {
        println!();
        println!("Config file: {}", path.display());
    }
}

/// Format a JSON value for display
fn format_value(key: &str, value: &Value) -> String {
    match value {
        Value::Null => "(not set)".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) if key == "default_seed" && n.as_u64() == Some(0) => {
            "0 (most recent)".to_string()
        }
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(arr) => format_array(arr),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

fn format_array(arr: &[Value]) -> String {
    if arr.is_empty() {
        return "(none)".to_string();
    }

    arr.iter()
        .filter_map(|v| v.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Highlight values that differ from the stock gnu-pw-mgr setup
fn apply_cell_styling(key: &str, value: &Value, display_value: String) -> Cell {
    if key == "tool_path" && value.as_str() != Some(DEFAULT_TOOL) {
        return Cell::new(display_value).fg(Color::Yellow);
    }
    Cell::new(display_value)
}
