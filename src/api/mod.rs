//! # API definition module
//!
//! Declarative route metadata and the builder that assembles it into a dispatch
//! table.
//!
//! Every route is an explicit configuration struct: HTTP method, a path pattern
//! with named segments (`/items/{item_id}`), per-parameter source and
//! constraints, and an optional body binding. The [`ApiBuilder`] collects the
//! declarations in registration order (the router honors that order when two
//! patterns could match the same path) and rejects conflicting registrations at
//! build time instead of silently replacing them.

mod build;
mod types;

pub use build::{pattern_params, ApiBuilder, RegistrationIssue};
pub use types::{
    BodyBinding, BodyField, BodyFieldKind, BodyMeta, ModelSchema, Param, ParamLocation, ParamMeta,
    ParamType, RouteMeta,
};
