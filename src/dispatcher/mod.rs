//! # Dispatcher module
//!
//! Coroutine-based request handler dispatch.
//!
//! Each handler runs in its own `may` coroutine fed by an MPSC channel; the
//! dispatcher owns a registry mapping handler names to channel senders.
//! Requests reach a handler only after validation, carrying coerced values -
//! handlers never see raw wire strings and never re-validate.
//!
//! Handler panics are caught inside the coroutine and converted to 500
//! responses, so one failing handler cannot take the server down.

mod core;

pub use core::{Dispatcher, HandlerRequest, HandlerResponse, HandlerSender};
