//! Conversion of dry-run failures into validation errors.
//!
//! Unstructured failure text is matched against one known phrasing: a method
//! lookup on an object or list that came up empty. Digit-only names usually
//! mean a list was supplied where a map belongs, so only letter/underscore
//! names are reported as unknown predicates. Everything else falls back to the
//! generic message.

use super::dry_run::DryRunFailure;
use super::types::{Stub, ValidationError};
use regex::Regex;
use std::sync::LazyLock;

pub const MALFORMED_REQUEST_MESSAGE: &str = "malformed stub request";

static NO_METHOD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"has no method '([A-Za-z_]+)'").expect("Invalid no-method regex")
});

/// Turn a dry-run failure of `stub` into a validation error.
pub fn normalize(failure: DryRunFailure, stub: &Stub) -> ValidationError {
    match failure {
        DryRunFailure::Rejected(rejection) => rejection.into_validation_error(|| stub.to_source()),
        DryRunFailure::Crashed(message) => {
            ValidationError::bad_data(describe_runtime_failure(&message), stub.to_source())
                .with_data(message)
        }
    }
}

/// User-facing message for unstructured failure text.
pub fn describe_runtime_failure(message: &str) -> String {
    match NO_METHOD_REGEX.captures(message) {
        Some(caps) => format!("no predicate '{}'", &caps[1]),
        None => MALFORMED_REQUEST_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::StubRejection;
    use crate::validate::ErrorKind;
    use serde_json::json;

    fn stub() -> Stub {
        Stub::new(json!({"responses": [{"is": {}}]}))
    }

    #[test]
    fn test_alphabetic_method_names_predicate() {
        assert_eq!(
            describe_runtime_failure("Object #<Object> has no method 'equalz'"),
            "no predicate 'equalz'"
        );
        assert_eq!(
            describe_runtime_failure("dispatcher has no method 'starts_with'"),
            "no predicate 'starts_with'"
        );
    }

    #[test]
    fn test_digit_method_names_are_generic() {
        assert_eq!(
            describe_runtime_failure("Object #<Object> has no method '0'"),
            MALFORMED_REQUEST_MESSAGE
        );
        assert_eq!(
            describe_runtime_failure("has no method 'equals2'"),
            MALFORMED_REQUEST_MESSAGE
        );
    }

    #[test]
    fn test_other_phrasings_are_generic() {
        for message in [
            "",
            "undefined is not a function",
            "has no method equals",
            "no method 'equals'",
            "HAS NO METHOD 'equals'",
        ] {
            assert_eq!(describe_runtime_failure(message), MALFORMED_REQUEST_MESSAGE);
        }
    }

    #[test]
    fn test_crash_becomes_bad_data_with_data() {
        let message = "dispatcher has no method 'resembles'".to_string();
        let error = normalize(DryRunFailure::Crashed(message.clone()), &stub());

        assert_eq!(error.code(), &ErrorKind::BadData);
        assert_eq!(error.message(), "no predicate 'resembles'");
        assert_eq!(error.data(), Some(message.as_str()));
        assert_eq!(error.source(), r#"{"responses":[{"is":{}}]}"#);
    }

    #[test]
    fn test_rejection_passes_through_with_default_source() {
        let rejection = StubRejection::new(ErrorKind::BadData, "unrecognized response type");
        let error = normalize(DryRunFailure::Rejected(rejection), &stub());

        assert_eq!(error.message(), "unrecognized response type");
        assert_eq!(error.data(), None);
        assert_eq!(error.source(), r#"{"responses":[{"is":{}}]}"#);
    }

    #[test]
    fn test_rejection_keeps_nested_source() {
        let rejection =
            StubRejection::new(ErrorKind::BadData, "bad response").with_source(r#"{"x":1}"#);
        let error = normalize(DryRunFailure::Rejected(rejection), &stub());
        assert_eq!(error.source(), r#"{"x":1}"#);
    }
}
