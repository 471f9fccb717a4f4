//! Process-wide cache of compiled JSON Schema validators.
//!
//! Schema compilation is far more expensive than validation, so each named
//! model schema is compiled once and shared across requests behind an `Arc`.
//! Format assertions are enabled so `format: "uri"` fields require
//! well-formed absolute URLs.

use crate::api::ModelSchema;
use jsonschema::Validator;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::debug;

static COMPILED: Lazy<RwLock<HashMap<&'static str, Arc<Validator>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Fetch (compiling on first use) the validator for a named model schema.
///
/// # Panics
///
/// Panics if the schema itself is malformed. Model schemas are crate-internal
/// declarations, so this is a startup invariant.
#[allow(clippy::unwrap_used, clippy::expect_used)]
pub fn compiled_schema(model: &ModelSchema) -> Arc<Validator> {
    if let Some(validator) = COMPILED.read().unwrap().get(model.name) {
        return Arc::clone(validator);
    }

    debug!(schema = model.name, "compiling model schema");

    let validator = Arc::new(
        jsonschema::options()
            .should_validate_formats(true)
            .build(&model.schema)
            .expect("model schema must compile"),
    );

    COMPILED
        .write()
        .unwrap()
        .insert(model.name, Arc::clone(&validator));
    validator
}
