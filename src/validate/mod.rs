//! Stub validation for stubgate.
//!
//! A stub is accepted only after three checks:
//! - Structure: `responses` must be a non-empty list
//! - Authorization: `inject` is refused unless the engine allows injection
//! - Dry run: the stub is installed in an isolated context and resolved
//!   against a synthetic `GET /`
//!
//! The dry run only happens when the first two checks pass. Its failures are
//! normalized into the same [`ValidationError`] shape as the static checks.

mod dry_run;
mod engine;
mod injection;
mod normalize;
mod structure;
mod types;


// Re-export public API
pub use dry_run::{DryRunFailure, dry_run};
pub use engine::ValidationEngine;
pub use injection::{INJECTION_NOT_ALLOWED_MESSAGE, check_injection, has_injection};
pub use normalize::{MALFORMED_REQUEST_MESSAGE, describe_runtime_failure, normalize};
pub use structure::{EMPTY_RESPONSES_MESSAGE, check_structure};
pub use types::{
    ErrorKind, Stub, SyntheticRequest, ValidationError, ValidationRequest, ValidationResult,
};
