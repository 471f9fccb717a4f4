use crate::dispatcher::{HandlerRequest, HandlerResponse};
use serde_json::json;

pub fn handler(req: HandlerRequest) {
    let inp = req.query_str("inp").unwrap_or_default();
    let body = json!({ "message": format!("Hello World {inp}") });
    let _ = req.reply_tx.send(HandlerResponse::ok(body));
}
