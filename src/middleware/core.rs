use std::time::Duration;

use crate::dispatcher::{HandlerRequest, HandlerResponse};

/// Hook invoked around handler execution.
///
/// `before` may short-circuit dispatch by returning a response; `after` sees
/// the response (mutably) together with the handler latency.
pub trait Middleware: Send + Sync {
    fn before(&self, _req: &HandlerRequest) -> Option<HandlerResponse> {
        None
    }
    fn after(&self, _req: &HandlerRequest, _res: &mut HandlerResponse, _latency: Duration) {}
}
