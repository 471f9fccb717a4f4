use crate::ids::RequestId;
use crate::middleware::Middleware;
use crate::router::RouteMatch;
use crate::runtime_config::RuntimeConfig;
use crate::validator::ValidatedRequest;
use http::Method;
use may::coroutine;
use may::sync::mpsc;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Request data passed to a handler coroutine.
///
/// Every value in `params`, `query` and `body` has already been coerced and
/// constraint-checked by the validator; absent optional parameters are simply
/// missing from the maps.
#[derive(Debug, Clone)]
pub struct HandlerRequest {
    /// Unique request ID for tracing and correlation
    pub request_id: RequestId,
    /// HTTP method (GET, POST, etc.)
    pub method: Method,
    /// Matched route pattern (e.g. `/items/{item_id}`)
    pub path: String,
    /// Name of the handler that should process this request
    pub handler_name: String,
    /// Validated path parameters, keyed by declared name
    pub params: HashMap<String, Value>,
    /// Validated query parameters, keyed by declared name
    pub query: HashMap<String, Value>,
    /// Bound request body, shaped per the route's body mode
    pub body: Option<Value>,
    /// Channel for sending the response back to the dispatcher
    pub reply_tx: mpsc::Sender<HandlerResponse>,
}

impl HandlerRequest {
    /// Get a validated path parameter by name.
    #[inline]
    #[must_use]
    pub fn path_param(&self, name: &str) -> Option<&Value> {
        self.params.get(name)
    }

    /// Get a validated query parameter by name.
    #[inline]
    #[must_use]
    pub fn query_param(&self, name: &str) -> Option<&Value> {
        self.query.get(name)
    }

    #[must_use]
    pub fn path_i64(&self, name: &str) -> Option<i64> {
        self.params.get(name).and_then(Value::as_i64)
    }

    #[must_use]
    pub fn path_str(&self, name: &str) -> Option<&str> {
        self.params.get(name).and_then(Value::as_str)
    }

    #[must_use]
    pub fn query_i64(&self, name: &str) -> Option<i64> {
        self.query.get(name).and_then(Value::as_i64)
    }

    #[must_use]
    pub fn query_str(&self, name: &str) -> Option<&str> {
        self.query.get(name).and_then(Value::as_str)
    }

    #[must_use]
    pub fn query_bool(&self, name: &str) -> Option<bool> {
        self.query.get(name).and_then(Value::as_bool)
    }
}

/// Response data sent back from a handler coroutine.
#[derive(Debug, Clone, serde::Serialize)]
pub struct HandlerResponse {
    /// HTTP status code (200, 422, 500, ...)
    pub status: u16,
    /// Response body as JSON
    pub body: Value,
}

impl HandlerResponse {
    #[must_use]
    pub fn json(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// A 200 response.
    #[must_use]
    pub fn ok(body: Value) -> Self {
        Self::json(200, body)
    }

    /// An error response with the conventional `detail` body.
    #[must_use]
    pub fn error(status: u16, message: &str) -> Self {
        Self::json(status, json!({ "detail": message }))
    }
}

/// Type alias for a channel sender that dispatches requests to a handler
pub type HandlerSender = mpsc::Sender<HandlerRequest>;

/// Dispatcher that routes validated requests to registered handler coroutines.
#[derive(Clone, Default)]
pub struct Dispatcher {
    /// Map of handler names to their channel senders
    pub handlers: HashMap<String, HandlerSender>,
    /// Ordered list of middleware applied around handler execution
    pub middlewares: Vec<Arc<dyn Middleware>>,
}

impl Dispatcher {
    /// Create a new empty dispatcher. Handlers are registered with
    /// [`Dispatcher::register_handler`] or [`crate::typed`]'s
    /// `register_typed`.
    #[must_use]
    pub fn new() -> Self {
        Dispatcher {
            handlers: HashMap::new(),
            middlewares: Vec::new(),
        }
    }

    /// Add middleware to the processing pipeline. Middleware runs in the
    /// order it was added.
    pub fn add_middleware(&mut self, mw: Arc<dyn Middleware>) {
        self.middlewares.push(mw);
    }

    /// Register a handler function under the given name.
    ///
    /// Spawns a coroutine that drains a channel of [`HandlerRequest`]s. The
    /// handler is wrapped with panic recovery; a panicking handler yields a
    /// 500 response instead of killing the coroutine loop.
    ///
    /// Re-registering a name replaces the previous handler; the old sender is
    /// dropped, which closes its channel and lets the old coroutine exit.
    ///
    /// # Safety
    ///
    /// Calls `may::coroutine::Builder::spawn`, which is unsafe in the `may`
    /// runtime. The caller must ensure the runtime is initialized and that
    /// the handler sends exactly one response per request.
    pub unsafe fn register_handler<F>(&mut self, name: &str, handler_fn: F)
    where
        F: Fn(HandlerRequest) + Send + 'static + Clone,
    {
        let (tx, rx) = mpsc::channel::<HandlerRequest>();
        let name = name.to_string();

        if self.handlers.remove(&name).is_some() {
            warn!(handler_name = %name, "replaced existing handler; old coroutine will exit");
        }

        let stack_size = RuntimeConfig::from_env().stack_size;
        let coroutine_name = name.clone();

        // SAFETY: spawn is unsafe per the may runtime. The handler is
        // Send + 'static and errors are reported through the reply channel,
        // not unwound across the coroutine boundary.
        let spawn_result = unsafe {
            coroutine::Builder::new()
                .stack_size(stack_size)
                .spawn(move || {
                    debug!(handler_name = %coroutine_name, stack_size, "handler coroutine start");

                    for req in rx.iter() {
                        let reply_tx = req.reply_tx.clone();
                        let handler_name = req.handler_name.clone();
                        let request_id = req.request_id;
                        let started = Instant::now();

                        if let Err(panic) =
                            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                                handler_fn(req);
                            }))
                        {
                            let panic_message = format!("{panic:?}");
                            error!(
                                request_id = %request_id,
                                handler_name = %handler_name,
                                panic_message = %panic_message,
                                "handler panicked"
                            );
                            let _ = reply_tx.send(HandlerResponse::error(
                                500,
                                &format!("Handler panicked: {panic_message}"),
                            ));
                        } else {
                            debug!(
                                request_id = %request_id,
                                handler_name = %handler_name,
                                execution_time_ms = started.elapsed().as_millis() as u64,
                                "handler execution complete"
                            );
                        }
                    }
                })
        };

        if let Err(e) = spawn_result {
            error!(handler_name = %name, error = %e, "failed to spawn handler coroutine");
            return;
        }

        self.handlers.insert(name, tx);
    }

    /// Dispatch a validated request to its handler and wait for the response.
    ///
    /// Returns `None` when no handler is registered under the matched route's
    /// handler name; the server layer turns that into a 500.
    #[must_use]
    pub fn dispatch(
        &self,
        route_match: RouteMatch,
        valid: ValidatedRequest,
    ) -> Option<HandlerResponse> {
        let request_id = RequestId::new();
        let (reply_tx, reply_rx) = mpsc::channel();

        let tx = match self.handlers.get(&route_match.handler_name) {
            Some(tx) => tx,
            None => {
                let available: Vec<&String> = self.handlers.keys().collect();
                error!(
                    handler_name = %route_match.handler_name,
                    available_handlers = ?available,
                    "handler not found"
                );
                return None;
            }
        };

        let request = HandlerRequest {
            request_id,
            method: route_match.route.method.clone(),
            path: route_match.route.path_pattern.clone(),
            handler_name: route_match.handler_name,
            params: valid.params,
            query: valid.query,
            body: valid.body,
            reply_tx,
        };

        let mut early_resp: Option<HandlerResponse> = None;
        for mw in &self.middlewares {
            if early_resp.is_none() {
                early_resp = mw.before(&request);
            } else {
                mw.before(&request);
            }
        }

        let (mut resp, latency) = if let Some(r) = early_resp {
            (r, std::time::Duration::from_millis(0))
        } else {
            info!(
                request_id = %request_id,
                handler_name = %request.handler_name,
                method = %request.method,
                path = %request.path,
                "request dispatched to handler"
            );

            let start = Instant::now();
            if let Err(e) = tx.send(request.clone()) {
                error!(
                    request_id = %request_id,
                    handler_name = %request.handler_name,
                    error = %e,
                    "failed to send request to handler"
                );
                return None;
            }

            match reply_rx.recv() {
                Ok(response) => {
                    let elapsed = start.elapsed();
                    info!(
                        request_id = %request_id,
                        handler_name = %request.handler_name,
                        latency_ms = elapsed.as_millis() as u64,
                        status = response.status,
                        "handler response received"
                    );
                    (response, elapsed)
                }
                Err(e) => {
                    error!(
                        request_id = %request_id,
                        handler_name = %request.handler_name,
                        error = %e,
                        "handler channel closed - handler may have crashed"
                    );
                    return Some(HandlerResponse::error(
                        503,
                        &format!("Handler '{}' is not responding", request.handler_name),
                    ));
                }
            }
        };

        for mw in &self.middlewares {
            mw.after(&request, &mut resp, latency);
        }

        Some(resp)
    }
}
