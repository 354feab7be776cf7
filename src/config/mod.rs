//! Configuration model for stubgate.
//!
//! This module defines the Config struct that represents `stubgate.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored)
//! and sensible defaults for optional fields.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::OutputFormat;
