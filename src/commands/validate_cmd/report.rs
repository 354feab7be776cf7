//! Rendering of validation reports.

use crate::config::OutputFormat;
use crate::error::{Result, StubgateError};
use crate::validate::ValidationResult;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    #[serde(flatten)]
    result: &'a ValidationResult,
    validated_at: DateTime<Utc>,
}

/// Render `result` in the requested format.
pub fn render_report(
    result: &ValidationResult,
    format: OutputFormat,
    pretty: bool,
    validated_at: DateTime<Utc>,
) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let report = JsonReport {
                result,
                validated_at,
            };
            let rendered = if pretty {
                serde_json::to_string_pretty(&report)
            } else {
                serde_json::to_string(&report)
            };
            rendered.map_err(|e| {
                StubgateError::UserError(format!("failed to serialize report: {}", e))
            })
        }
        OutputFormat::Text => Ok(render_text(result)),
    }
}

/// Output format:
/// ```text
/// INVALID: 1 error(s)
///
/// [bad data] 'responses' must be a non-empty array
///     source: {"responses":[]}
/// ```
fn render_text(result: &ValidationResult) -> String {
    if result.is_valid() {
        return "VALID: no errors".to_string();
    }

    let mut msg = format!("INVALID: {} error(s)\n", result.errors().len());
    for error in result.errors() {
        let _ = write!(msg, "\n[{}] {}\n", error.code(), error.message());
        if let Some(data) = error.data() {
            let _ = writeln!(msg, "    data: {}", data);
        }
        let _ = writeln!(msg, "    source: {}", error.source());
    }

    msg
}
