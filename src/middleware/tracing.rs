use std::time::Duration;

use tracing::info;

use super::Middleware;
use crate::dispatcher::{HandlerRequest, HandlerResponse};

/// Emits one structured event when a request enters a handler and one when
/// the response comes back, correlated by request id.
pub struct TracingMiddleware;

impl Middleware for TracingMiddleware {
    fn before(&self, req: &HandlerRequest) -> Option<HandlerResponse> {
        info!(
            request_id = %req.request_id,
            method = %req.method,
            path = %req.path,
            handler = %req.handler_name,
            "handler start"
        );
        None
    }

    fn after(&self, req: &HandlerRequest, res: &mut HandlerResponse, latency: Duration) {
        info!(
            request_id = %req.request_id,
            handler = %req.handler_name,
            status = res.status,
            latency_ms = latency.as_millis() as u64,
            "handler complete"
        );
    }
}
