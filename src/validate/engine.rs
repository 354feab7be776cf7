//! Batch validation engine.

use super::dry_run::dry_run;
use super::injection::check_injection;
use super::normalize::normalize;
use super::structure::check_structure;
use super::types::{Stub, ValidationError, ValidationRequest, ValidationResult};
use crate::config::Config;
use crate::resolver::ResolutionEngine;
use futures::future::join_all;

/// Validates batches of stubs against a resolution engine.
///
/// The injection policy is fixed when the engine is built and applies to
/// every batch it validates.
#[derive(Debug, Clone)]
pub struct ValidationEngine<R> {
    allow_injection: bool,
    resolver: R,
}

impl<R: ResolutionEngine> ValidationEngine<R> {
    pub fn configure(allow_injection: bool, resolver: R) -> Self {
        Self {
            allow_injection,
            resolver,
        }
    }

    pub fn from_config(config: &Config, resolver: R) -> Self {
        Self::configure(config.allow_injection, resolver)
    }

    pub fn allow_injection(&self) -> bool {
        self.allow_injection
    }

    /// Validate every stub in `request`.
    ///
    /// Stubs are validated concurrently; errors are grouped per stub in input
    /// order. Never fails: every problem is reported in the result.
    pub async fn validate(&self, request: &ValidationRequest) -> ValidationResult {
        let per_stub = join_all(request.stubs.iter().map(|stub| self.errors_for(stub))).await;

        let errors: Vec<ValidationError> = per_stub.into_iter().flatten().collect();
        tracing::info!(
            stubs = request.stubs.len(),
            errors = errors.len(),
            "validated stub batch"
        );

        ValidationResult::from_errors(errors)
    }

    /// All errors for one stub. The dry run is skipped once a static check fails.
    pub async fn errors_for(&self, stub: &Stub) -> Vec<ValidationError> {
        let mut errors: Vec<ValidationError> = check_structure(stub)
            .into_iter()
            .chain(check_injection(stub, self.allow_injection))
            .collect();

        if !errors.is_empty() {
            tracing::debug!(errors = errors.len(), "skipping dry run for invalid stub");
            return errors;
        }

        if let Err(failure) = dry_run(&self.resolver, stub).await {
            tracing::debug!(?failure, "dry run failed");
            errors.push(normalize(failure, stub));
        }

        errors
    }
}
