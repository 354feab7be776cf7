//! Core types for stub validation requests, errors, and results.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Classification of a validation error.
///
/// `bad data` and `invalid operation` are produced by the validator itself.
/// Resolution engines may reject a stub with any other code, which is carried
/// through verbatim as [`ErrorKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ErrorKind {
    /// The stub is malformed, either structurally or as revealed by a dry run.
    BadData,
    /// The stub declares a capability the engine is not configured to permit.
    InvalidOperation,
    /// A code produced by the resolution engine.
    Other(String),
}

impl ErrorKind {
    pub fn as_str(&self) -> &str {
        match self {
            ErrorKind::BadData => "bad data",
            ErrorKind::InvalidOperation => "invalid operation",
            ErrorKind::Other(code) => code,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ErrorKind {
    fn from(code: String) -> Self {
        match code.as_str() {
            "bad data" => ErrorKind::BadData,
            "invalid operation" => ErrorKind::InvalidOperation,
            _ => ErrorKind::Other(code),
        }
    }
}

impl From<&str> for ErrorKind {
    fn from(code: &str) -> Self {
        ErrorKind::from(code.to_string())
    }
}

impl From<ErrorKind> for String {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Other(code) => code,
            known => known.as_str().to_string(),
        }
    }
}

/// A stub definition as supplied by the caller.
///
/// Stubs are kept as raw JSON so that shape problems (a missing `responses`
/// list, an object where an array belongs) can be reported instead of failing
/// deserialization of the whole batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stub(Value);

impl Stub {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// The `responses` list, when present and actually a list.
    pub fn responses(&self) -> Option<&Vec<Value>> {
        self.0.get("responses").and_then(Value::as_array)
    }

    /// The raw `predicates` value, if any.
    pub fn predicates(&self) -> Option<&Value> {
        self.0.get("predicates")
    }

    /// Predicate configurations, whether keyed by field name or listed.
    pub fn predicate_configs(&self) -> Vec<&Value> {
        match self.predicates() {
            Some(Value::Object(fields)) => fields.values().collect(),
            Some(Value::Array(items)) => items.iter().collect(),
            _ => Vec::new(),
        }
    }

    /// Compact JSON form used as the `source` of errors about this stub.
    pub fn to_source(&self) -> String {
        self.0.to_string()
    }
}

impl From<Value> for Stub {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// An ordered batch of stubs to validate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationRequest {
    #[serde(default)]
    pub stubs: Vec<Stub>,
}

impl ValidationRequest {
    pub fn new(stubs: Vec<Stub>) -> Self {
        Self { stubs }
    }
}

/// A single reason a stub was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    code: ErrorKind,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<String>,
    source: String,
}

impl ValidationError {
    pub fn new(code: ErrorKind, message: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
            source: source.into(),
        }
    }

    pub fn bad_data(message: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadData, message, source)
    }

    pub fn invalid_operation(message: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidOperation, message, source)
    }

    /// Attach the underlying failure text.
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn code(&self) -> &ErrorKind {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Verdict for a whole batch.
///
/// `is_valid` is derived from `errors` at construction and cannot be set
/// independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

/// The request every dry run resolves against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyntheticRequest {
    pub path: String,
    pub query: Map<String, Value>,
    pub method: String,
    pub headers: Map<String, Value>,
    pub body: String,
}

impl SyntheticRequest {
    /// `GET /` with no query, no headers, and an empty body.
    pub fn new() -> Self {
        Self {
            path: "/".to_string(),
            query: Map::new(),
            method: "GET".to_string(),
            headers: Map::new(),
            body: String::new(),
        }
    }
}

impl Default for SyntheticRequest {
    fn default() -> Self {
        Self::new()
    }
}
