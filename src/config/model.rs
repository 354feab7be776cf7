//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for a stubgate validation run.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Whether stubs may declare `inject` on predicates or responses.
    #[serde(default)]
    pub allow_injection: bool,

    /// Report format for the `validate` command.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON reports.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allow_injection: false,
            output_format: OutputFormat::default(),
            pretty: default_true(),
        }
    }
}
