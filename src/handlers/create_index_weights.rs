use crate::dispatcher::{HandlerRequest, HandlerResponse};
use serde_json::Value;

/// Echo the validated integer-to-float mapping unchanged. Keys stay strings
/// on the wire because JSON objects only support string keys.
pub fn handler(req: HandlerRequest) {
    let body = req.body.clone().unwrap_or(Value::Null);
    let _ = req.reply_tx.send(HandlerResponse::ok(body));
}
