//! Dry-run execution of a single stub.
//!
//! Each trial gets its own copy of the stub and its own resolution context
//! wired to the [`NoopEmitter`], so nothing the resolution does can reach the
//! caller's data, another trial, or the outside world.

use super::types::{Stub, SyntheticRequest};
use crate::resolver::{NoopEmitter, ResolutionEngine, ResolveError, StubRejection};
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

/// How a dry run failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DryRunFailure {
    /// The resolution engine rejected the stub with a structured reason.
    Rejected(StubRejection),
    /// Resolution failed or panicked with only a message to go on.
    Crashed(String),
}

/// Install a copy of `stub` in a fresh context and resolve the synthetic request.
pub async fn dry_run<E>(engine: &E, stub: &Stub) -> Result<(), DryRunFailure>
where
    E: ResolutionEngine + ?Sized,
{
    let trial = async {
        let mut context = engine.create_context(Arc::new(NoopEmitter));
        context.install_stub(stub.clone());
        context.resolve(&SyntheticRequest::new()).await
    };

    match AssertUnwindSafe(trial).catch_unwind().await {
        Ok(Ok(_)) => Ok(()),
        Ok(Err(ResolveError::Rejected(rejection))) => Err(DryRunFailure::Rejected(rejection)),
        Ok(Err(ResolveError::Failed(message))) => Err(DryRunFailure::Crashed(message)),
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            tracing::warn!(%message, "dry run panicked");
            Err(DryRunFailure::Crashed(message))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "dry run panicked".to_string()
    }
}
