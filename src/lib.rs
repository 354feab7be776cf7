//! Stubgate: pre-acceptance validation of service-virtualization stubs.
//!
//! A batch of stub definitions is validated before it is installed. Each stub
//! is checked for structure, for unauthorized `inject` use, and by a dry run
//! in an isolated resolution context. The answer is always a
//! [`ValidationResult`](validate::ValidationResult); failures never escape as
//! errors.
//!
//! ```
//! use futures::executor::block_on;
//! use serde_json::json;
//! use stubgate::resolver::DispatchEngine;
//! use stubgate::validate::{Stub, ValidationEngine, ValidationRequest};
//!
//! let engine = ValidationEngine::configure(false, DispatchEngine);
//! let request = ValidationRequest::new(vec![Stub::new(json!({"responses": []}))]);
//!
//! let result = block_on(engine.validate(&request));
//! assert!(!result.is_valid());
//! assert_eq!(result.errors()[0].message(), "'responses' must be a non-empty array");
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod resolver;
pub mod validate;
