//! HTTP server built on `may_minihttp`: request parsing, response writing,
//! and the [`AppService`] that wires router, validator and dispatcher into a
//! single request pipeline.

pub mod http_server;
pub mod request;
pub mod response;
pub mod service;

pub use http_server::{HttpServer, ServerHandle};
pub use request::{parse_query_params, parse_request, ParsedRequest};
pub use service::{health_endpoint, AppService};
