//! Structural well-formedness of a stub.

use super::types::{Stub, ValidationError};

pub const EMPTY_RESPONSES_MESSAGE: &str = "'responses' must be a non-empty array";

/// Check that the stub carries a non-empty `responses` list.
pub fn check_structure(stub: &Stub) -> Option<ValidationError> {
    match stub.responses() {
        Some(responses) if !responses.is_empty() => None,
        _ => Some(ValidationError::bad_data(
            EMPTY_RESPONSES_MESSAGE,
            stub.to_source(),
        )),
    }
}
