//! # Typed module
//!
//! Type-safe request/response handling on top of the dispatcher.
//!
//! A typed handler declares a `Request` type built from the validated
//! [`HandlerRequest`] via `TryFrom` and a `Response` type serialized to JSON.
//! Validation has already run by the time conversion happens, so a conversion
//! failure means the route declaration and the handler's expectations
//! disagree - it is reported as a 500, not a client error.

use crate::dispatcher::{Dispatcher, HandlerRequest, HandlerResponse, HandlerSender};
use anyhow::Result;
use http::Method;
use may::sync::mpsc;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::convert::TryFrom;
use tracing::error;

/// Trait implemented by typed coroutine handlers.
pub trait Handler: Send + 'static {
    /// The typed request (converted from the validated [`HandlerRequest`])
    type Request: TryFrom<HandlerRequest, Error = anyhow::Error> + Send + 'static;
    /// The typed response (serialized to JSON)
    type Response: Serialize + Send + 'static;

    fn handle(&self, req: TypedHandlerRequest<Self::Request>) -> Self::Response;
}

/// Typed request data passed to a [`Handler`].
#[derive(Debug, Clone)]
pub struct TypedHandlerRequest<T> {
    pub method: Method,
    pub path: String,
    pub handler_name: String,
    pub params: HashMap<String, Value>,
    pub query: HashMap<String, Value>,
    /// Strongly typed request data
    pub data: T,
}

/// Spawn a typed handler coroutine and return a sender to communicate with it.
///
/// # Safety
///
/// Spawns a `may` coroutine; the runtime must be initialized and the handler
/// must be safe to run concurrently.
#[allow(clippy::expect_used)]
pub unsafe fn spawn_typed<H>(handler: H) -> HandlerSender
where
    H: Handler + Send + 'static,
{
    let (tx, rx) = mpsc::channel::<HandlerRequest>();

    unsafe {
        may::coroutine::Builder::new()
            .stack_size(may::config().get_stack_size())
            .spawn(move || {
                for req in rx.iter() {
                    let reply_tx = req.reply_tx.clone();
                    let handler_name = req.handler_name.clone();

                    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                        let reply_tx_inner = reply_tx.clone();

                        let data = match H::Request::try_from(req.clone()) {
                            Ok(v) => v,
                            Err(err) => {
                                // Validation already passed; a conversion
                                // failure is a table/handler mismatch.
                                error!(
                                    handler_name = %req.handler_name,
                                    error = %err,
                                    "typed conversion failed after validation"
                                );
                                let _ = reply_tx_inner.send(HandlerResponse::error(
                                    500,
                                    &format!("Handler request mismatch: {err}"),
                                ));
                                return;
                            }
                        };

                        let typed_req = TypedHandlerRequest {
                            method: req.method,
                            path: req.path,
                            handler_name: req.handler_name,
                            params: req.params,
                            query: req.query,
                            data,
                        };

                        let result = handler.handle(typed_req);

                        let body = serde_json::to_value(result).unwrap_or_else(|_| {
                            serde_json::json!({ "detail": "Failed to serialize response" })
                        });
                        let _ = reply_tx_inner.send(HandlerResponse::ok(body));
                    }));

                    if let Err(panic) = result {
                        error!(handler_name = %handler_name, "typed handler panicked: {panic:?}");
                        let _ = reply_tx.send(HandlerResponse::error(
                            500,
                            &format!("Handler panicked: {panic:?}"),
                        ));
                    }
                }
            })
            .expect("failed to spawn typed handler coroutine");
    }

    tx
}

/// Trait for converting a validated request into a typed one.
pub trait TypedHandlerFor<T>: Sized {
    fn from_handler(req: HandlerRequest) -> Result<TypedHandlerRequest<T>>;
}

impl<T> TypedHandlerFor<T> for TypedHandlerRequest<T>
where
    T: TryFrom<HandlerRequest, Error = anyhow::Error>,
{
    fn from_handler(req: HandlerRequest) -> Result<TypedHandlerRequest<T>> {
        let data = T::try_from(req.clone())?;
        Ok(TypedHandlerRequest {
            method: req.method,
            path: req.path,
            handler_name: req.handler_name,
            params: req.params,
            query: req.query,
            data,
        })
    }
}

impl Dispatcher {
    /// Register a typed handler that converts [`HandlerRequest`] into its
    /// associated request type using `TryFrom`.
    ///
    /// # Safety
    ///
    /// Same requirements as [`spawn_typed`].
    pub unsafe fn register_typed<H>(&mut self, name: &str, handler: H)
    where
        H: Handler + Send + 'static,
    {
        let tx = unsafe { spawn_typed(handler) };
        self.handlers.insert(name.to_string(), tx);
    }
}
