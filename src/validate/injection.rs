//! Authorization of dynamic-code (`inject`) features.
//!
//! Only declarations are inspected; injected code is never run here.

use super::types::{Stub, ValidationError};
use serde_json::Value;

pub const INJECTION_NOT_ALLOWED_MESSAGE: &str =
    "inject is not allowed unless the engine is configured to allow injection";

/// Whether any response or predicate configuration declares a truthy `inject`.
pub fn has_injection(stub: &Stub) -> bool {
    let in_responses = stub
        .responses()
        .is_some_and(|responses| responses.iter().any(declares_inject));

    in_responses || stub.predicate_configs().into_iter().any(declares_inject)
}

/// Reject injection unless `allow_injection` is set.
pub fn check_injection(stub: &Stub, allow_injection: bool) -> Option<ValidationError> {
    if allow_injection || !has_injection(stub) {
        return None;
    }

    Some(ValidationError::invalid_operation(
        INJECTION_NOT_ALLOWED_MESSAGE,
        stub.to_source(),
    ))
}

fn declares_inject(value: &Value) -> bool {
    value.get("inject").is_some_and(is_truthy)
}

/// Script-style truthiness: `null`, `false`, zero, and `""` are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
