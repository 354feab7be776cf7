//! Error types for stubgate.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Stub rejections are not errors: they are reported as data in a
//! [`ValidationResult`](crate::validate::ValidationResult).

use crate::exit_codes;
use thiserror::Error;

/// Main error type for stubgate operations.
#[derive(Error, Debug)]
pub enum StubgateError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// The validation request could not be read or parsed.
    #[error("Invalid input: {0}")]
    InputError(String),

    /// The batch was validated and at least one stub was rejected.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl StubgateError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            StubgateError::UserError(_) => exit_codes::USER_ERROR,
            StubgateError::InputError(_) => exit_codes::USER_ERROR,
            StubgateError::ValidationFailed(_) => exit_codes::VALIDATION_FAILURE,
        }
    }
}

/// Result type alias for stubgate operations.
pub type Result<T> = std::result::Result<T, StubgateError>;
