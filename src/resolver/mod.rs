//! Boundary to the stub-resolution engine.
//!
//! The validator never matches predicates or renders responses itself. It
//! builds a fresh [`ResolutionContext`] per dry run through a
//! [`ResolutionEngine`], installs one stub, and resolves a synthetic request.
//! Outbound effects go through a [`ResponseEmitter`], which for dry runs is
//! the [`NoopEmitter`].

mod dispatch;


pub use dispatch::DispatchEngine;

use crate::validate::{ErrorKind, Stub, SyntheticRequest, ValidationError};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// A structured rejection produced by a resolution engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubRejection {
    pub code: ErrorKind,
    pub message: String,
    pub data: Option<String>,
    pub source: Option<String>,
}

impl StubRejection {
    pub fn new(code: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
            source: None,
        }
    }

    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Convert into a validation error, keeping an existing `source`.
    pub fn into_validation_error(self, default_source: impl FnOnce() -> String) -> ValidationError {
        let source = self.source.unwrap_or_else(default_source);
        let error = ValidationError::new(self.code, self.message, source);
        match self.data {
            Some(data) => error.with_data(data),
            None => error,
        }
    }
}

impl fmt::Display for StubRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Why a resolution did not produce a response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The engine rejected the stub with a code and message.
    #[error("{0}")]
    Rejected(StubRejection),

    /// The engine failed without a structured reason.
    #[error("{0}")]
    Failed(String),
}

/// Outbound response emission (proxying, callbacks, ...).
#[async_trait]
pub trait ResponseEmitter: Send + Sync {
    async fn emit(&self, response: &Value) -> Result<Value, ResolveError>;
}

/// Emitter used for dry runs: succeeds immediately with `{}` and does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEmitter;

#[async_trait]
impl ResponseEmitter for NoopEmitter {
    async fn emit(&self, _response: &Value) -> Result<Value, ResolveError> {
        Ok(Value::Object(Map::new()))
    }
}

/// A set of installed stubs that requests are resolved against.
#[async_trait]
pub trait ResolutionContext: Send + Sync {
    /// Register a stub for matching.
    fn install_stub(&mut self, stub: Stub);

    /// Resolve a request against the installed stubs.
    async fn resolve(&self, request: &SyntheticRequest) -> Result<Value, ResolveError>;
}

/// Factory for empty, independent resolution contexts.
pub trait ResolutionEngine: Send + Sync {
    fn create_context(&self, emitter: Arc<dyn ResponseEmitter>) -> Box<dyn ResolutionContext>;
}
