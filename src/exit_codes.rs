//! Exit code constants for the stubgate CLI.
//!
//! - 0: Success (every stub in the batch is valid)
//! - 1: User error (bad args, unreadable input, invalid config)
//! - 2: Validation failure (at least one stub was rejected)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable or unparsable input, invalid config.
pub const USER_ERROR: i32 = 1;

/// Validation failure: the batch contained at least one invalid stub.
pub const VALIDATION_FAILURE: i32 = 2;
