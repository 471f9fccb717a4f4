//! # Validator module
//!
//! Per-request validation: extracts every declared parameter from its
//! location, coerces it to its declared type, checks the declared constraints,
//! and binds the JSON body according to the route's body mode. A request that
//! fails any check is rejected before its handler runs; a request that passes
//! reaches the handler carrying only validated, typed values, so handlers
//! never re-validate.
//!
//! All failures for a request are collected into a single [`ValidationError`]
//! whose entries are field-addressed: location (`path` / `query` / `body` plus
//! the field path), the constraint kind, a human message, and the rejected
//! input value. The server layer renders it as a `422` body:
//!
//! ```json
//! {"detail": [{"type": "int_parsing", "loc": ["path", "item_id"],
//!              "msg": "Input should be a valid integer, unable to parse string as an integer",
//!              "input": "abc"}]}
//! ```

mod body;
mod cache;
mod error;
mod params;

pub use cache::compiled_schema;
pub use error::{FieldError, ValidationError};

use crate::api::RouteMeta;
use crate::router::ParamVec;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// The validated, coerced view of a request that handlers receive.
#[derive(Debug, Clone, Default)]
pub struct ValidatedRequest {
    /// Path parameters by declared name, coerced to their declared types.
    pub params: HashMap<String, Value>,
    /// Query parameters by declared name (not wire alias); absent optional
    /// parameters are simply missing from the map.
    pub query: HashMap<String, Value>,
    /// Bound request body, shaped per the route's body mode.
    pub body: Option<Value>,
}

/// Validate one request against its matched route declaration.
///
/// `path_raw` and `query_raw` are the raw string pairs extracted by the
/// router and the server's query parser. Every declared parameter is checked;
/// all failures are reported together.
pub fn validate_request(
    route: &RouteMeta,
    path_raw: &ParamVec,
    query_raw: &ParamVec,
    body: Option<&Value>,
) -> Result<ValidatedRequest, ValidationError> {
    let mut errors = Vec::new();

    let params = params::validate_path_params(route, path_raw, &mut errors);
    let query = params::validate_query_params(route, query_raw, &mut errors);
    let body = match &route.body {
        Some(meta) => body::bind_body(meta, body, &mut errors),
        None => None,
    };

    if errors.is_empty() {
        Ok(ValidatedRequest {
            params,
            query,
            body,
        })
    } else {
        debug!(
            route = %route.path_pattern,
            error_count = errors.len(),
            "request rejected by validation"
        );
        Err(ValidationError { errors })
    }
}
