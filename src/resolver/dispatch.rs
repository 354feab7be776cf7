//! Operator-dispatch resolution engine.
//!
//! This engine does not match requests. It walks the first installed stub the
//! way a matcher would dispatch it: every predicate key is looked up in the
//! operator table and the first response is routed by its type. Anything the
//! table cannot dispatch fails the resolution, which is what a dry run needs
//! to see.

use super::{ResolutionContext, ResolutionEngine, ResolveError, ResponseEmitter, StubRejection};
use crate::validate::{ErrorKind, Stub, SyntheticRequest};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Predicate operators the dispatcher recognizes.
pub const PREDICATE_OPERATORS: &[&str] = &[
    "equals",
    "deepEquals",
    "contains",
    "startsWith",
    "endsWith",
    "matches",
    "exists",
    "not",
    "or",
    "and",
    "inject",
];

/// Keys allowed next to operators in a predicate configuration.
pub const PREDICATE_MODIFIERS: &[&str] = &["caseSensitive", "except"];

/// Response types; a response must carry exactly one.
pub const RESPONSE_TYPES: &[&str] = &["is", "proxy", "inject"];

/// Engine producing [`DispatchContext`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct DispatchEngine;

impl ResolutionEngine for DispatchEngine {
    fn create_context(&self, emitter: Arc<dyn ResponseEmitter>) -> Box<dyn ResolutionContext> {
        Box::new(DispatchContext {
            emitter,
            stubs: Vec::new(),
        })
    }
}

/// Stubs in installation order plus the emitter proxy responses go to.
pub struct DispatchContext {
    emitter: Arc<dyn ResponseEmitter>,
    stubs: Vec<Stub>,
}

#[async_trait]
impl ResolutionContext for DispatchContext {
    fn install_stub(&mut self, stub: Stub) {
        self.stubs.push(stub);
    }

    async fn resolve(&self, _request: &SyntheticRequest) -> Result<Value, ResolveError> {
        let Some(stub) = self.stubs.first() else {
            return Ok(empty_response());
        };

        dispatch_predicates(stub)?;

        match stub.responses().and_then(|responses| responses.first()) {
            Some(response) => self.dispatch_response(response).await,
            None => Ok(empty_response()),
        }
    }
}

impl DispatchContext {
    async fn dispatch_response(&self, response: &Value) -> Result<Value, ResolveError> {
        let types: Vec<&str> = match response.as_object() {
            Some(fields) => RESPONSE_TYPES
                .iter()
                .copied()
                .filter(|kind| fields.contains_key(*kind))
                .collect(),
            None => Vec::new(),
        };

        match types.as_slice() {
            ["is"] => Ok(response["is"].clone()),
            ["proxy"] => self.emitter.emit(&response["proxy"]).await,
            ["inject"] => Ok(empty_response()),
            _ => Err(ResolveError::Rejected(
                StubRejection::new(ErrorKind::BadData, "unrecognized response type")
                    .with_source(response.to_string()),
            )),
        }
    }
}

fn dispatch_predicates(stub: &Stub) -> Result<(), ResolveError> {
    match stub.predicates() {
        None | Some(Value::Null) => Ok(()),
        Some(Value::Object(fields)) => fields.values().try_for_each(dispatch_predicate),
        Some(other) => Err(ResolveError::Failed(format!(
            "predicates must be an object, found {}",
            json_kind(other)
        ))),
    }
}

fn dispatch_predicate(config: &Value) -> Result<(), ResolveError> {
    match config {
        Value::Object(operators) => {
            for (key, value) in operators {
                if PREDICATE_MODIFIERS.contains(&key.as_str()) {
                    continue;
                }
                if !PREDICATE_OPERATORS.contains(&key.as_str()) {
                    return Err(no_method(key));
                }
                dispatch_nested(key, value)?;
            }
            Ok(())
        }
        // Indices become method names when a list is dispatched like a map.
        Value::Array(items) if !items.is_empty() => Err(no_method("0")),
        Value::Array(_) => Ok(()),
        other => Err(ResolveError::Failed(format!(
            "cannot dispatch a predicate configured as {}",
            json_kind(other)
        ))),
    }
}

fn dispatch_nested(operator: &str, value: &Value) -> Result<(), ResolveError> {
    match (operator, value) {
        ("not", nested) => dispatch_predicate(nested),
        ("or" | "and", Value::Array(nested)) => nested.iter().try_for_each(dispatch_predicate),
        ("or" | "and", other) => dispatch_predicate(other),
        _ => Ok(()),
    }
}

fn no_method(name: &str) -> ResolveError {
    ResolveError::Failed(format!("predicate dispatcher has no method '{}'", name))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn empty_response() -> Value {
    Value::Object(Map::new())
}
