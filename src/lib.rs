//! # paramedic
//!
//! **paramedic** is a schema-first request validation router for Rust, powered by the
//! `may` coroutine runtime and `may_minihttp`.
//!
//! Routes are declared at startup as explicit configuration structs: HTTP method, a
//! path pattern with named segments, and per-parameter source and constraints. The
//! table is compiled into an ordered dispatch table; every declared input is extracted
//! from its location (path segment, query string, JSON body), coerced to its declared
//! type, and checked against its constraints *before* the handler runs. Handlers only
//! ever see validated values.
//!
//! ## Architecture
//!
//! - **[`api`]** - route and parameter metadata plus the [`api::ApiBuilder`] that
//!   assembles a dispatch table and rejects conflicting registrations
//! - **[`router`]** - ordered regex path matching; first registered pattern wins
//! - **[`validator`]** - parameter coercion, body binding, and structured
//!   field-addressed validation errors
//! - **[`schema`]** - JSON Schemas for the demo models, compiled once and cached
//! - **[`dispatcher`]** - coroutine-based handler dispatch over MPSC channels
//! - **[`typed`]** - type-safe request/response handler traits
//! - **[`middleware`]** - pluggable request/response hooks (tracing)
//! - **[`server`]** - HTTP server built on `may_minihttp`
//! - **[`handlers`]** / **[`registry`]** / **[`routes`]** - the demo application: one
//!   minimal echo handler per request-parsing feature
//!
//! ## Request flow
//!
//! ```text
//! HTTP request
//!   -> server::parse_request        (method, path, query pairs, JSON body)
//!   -> router::Router::route        (declaration order, static before dynamic)
//!   -> validator::validate_request  (coerce + constrain every declared input)
//!   -> dispatcher::Dispatcher       (channel to the handler coroutine)
//!   -> handler echo | 422 detail list
//! ```
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use paramedic::dispatcher::Dispatcher;
//! use paramedic::router::Router;
//! use paramedic::server::{AppService, HttpServer};
//!
//! let table = paramedic::routes::table().expect("route table is valid");
//! let router = Router::new(table);
//! let mut dispatcher = Dispatcher::new();
//! unsafe { paramedic::registry::register_all(&mut dispatcher) };
//!
//! let service = AppService::new(router, dispatcher);
//! let handle = HttpServer(service).start("127.0.0.1:8080").expect("bind");
//! let _ = handle.join();
//! ```
//!
//! ## Runtime considerations
//!
//! paramedic uses the `may` coroutine runtime, not tokio. Handlers run in coroutines
//! whose stack size is configurable via the `PARAMEDIC_STACK_SIZE` environment
//! variable (see [`runtime_config`]).

pub mod api;
pub mod dispatcher;
pub mod handlers;
pub mod ids;
pub mod middleware;
pub mod registry;
pub mod router;
pub mod routes;
pub mod runtime_config;
pub mod schema;
pub mod server;
pub mod typed;
pub mod validator;

pub use api::{
    ApiBuilder, BodyBinding, BodyField, BodyMeta, ModelSchema, Param, ParamLocation, ParamMeta,
    ParamType, RouteMeta,
};
pub use validator::{FieldError, ValidationError};
