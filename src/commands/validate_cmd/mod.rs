//! Implementation of the `stubgate validate` command.
//!
//! Reads a validation request, runs it through a [`ValidationEngine`] backed
//! by the [`DispatchEngine`], and prints a report. A rejected batch is
//! reported on stdout and then surfaced as a validation failure (exit 2).

mod report;


pub use report::render_report;

use crate::cli::ValidateArgs;
use crate::config::{Config, OutputFormat};
use crate::error::{Result, StubgateError};
use crate::resolver::DispatchEngine;
use crate::validate::{Stub, ValidationEngine, ValidationRequest, ValidationResult};
use chrono::Utc;
use futures::executor::block_on;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Execute the `stubgate validate` command.
pub fn cmd_validate(args: ValidateArgs) -> Result<()> {
    let config = effective_config(&args)?;
    let raw = read_input(args.input.as_deref())?;

    let result = validate_document(&config, &raw)?;
    let report = render_report(&result, config.output_format, config.pretty, Utc::now())?;
    println!("{}", report);

    if result.is_valid() {
        Ok(())
    } else {
        Err(StubgateError::ValidationFailed(format!(
            "{} error(s) in batch",
            result.errors().len()
        )))
    }
}

/// Config file values with command-line overrides applied.
pub fn effective_config(args: &ValidateArgs) -> Result<Config> {
    let mut config = Config::load_or_default(args.config.as_deref())?;

    if args.allow_injection {
        config.allow_injection = true;
    }

    if let Some(format) = &args.format {
        config.output_format = OutputFormat::from_str(format).ok_or_else(|| {
            StubgateError::UserError(format!(
                "unknown report format '{}'\nFix: use --format json or --format text.",
                format
            ))
        })?;
    }

    Ok(config)
}

/// Parse and validate a request document.
pub fn validate_document(config: &Config, raw: &str) -> Result<ValidationResult> {
    let request = parse_request(raw)?;
    tracing::debug!(
        stubs = request.stubs.len(),
        allow_injection = config.allow_injection,
        "validating request"
    );

    let engine = ValidationEngine::from_config(config, DispatchEngine);
    Ok(block_on(engine.validate(&request)))
}

/// Parse a `{"stubs": [...]}` document. A missing or null `stubs` is an empty batch.
pub fn parse_request(raw: &str) -> Result<ValidationRequest> {
    let document: Value = serde_json::from_str(raw)
        .map_err(|e| StubgateError::InputError(format!("request is not valid JSON: {}", e)))?;

    let Value::Object(mut fields) = document else {
        return Err(StubgateError::InputError(
            "request must be a JSON object with a 'stubs' array".to_string(),
        ));
    };

    match fields.remove("stubs") {
        None | Some(Value::Null) => Ok(ValidationRequest::default()),
        Some(Value::Array(stubs)) => Ok(ValidationRequest::new(
            stubs.into_iter().map(Stub::new).collect(),
        )),
        Some(_) => Err(StubgateError::InputError(
            "'stubs' must be an array".to_string(),
        )),
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path).map_err(|e| {
            StubgateError::InputError(format!(
                "failed to read request file '{}': {}",
                path.display(),
                e
            ))
        }),
        _ => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .map_err(|e| StubgateError::InputError(format!("failed to read stdin: {}", e)))?;
            Ok(raw)
        }
    }
}
