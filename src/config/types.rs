//! Enum types used by the configuration model.

use serde::{Deserialize, Serialize};

/// How validation reports are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// A JSON document with `isValid`, `errors`, and `validatedAt` (default).
    #[default]
    Json,
    /// One human-readable line per error.
    Text,
}

impl OutputFormat {
    /// Parse an output format from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "json" => Some(Self::Json),
            "text" => Some(Self::Text),
            _ => None,
        }
    }
}

// Default value functions for serde
pub(crate) fn default_true() -> bool {
    true
}
