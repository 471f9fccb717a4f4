use crate::dispatcher::{HandlerRequest, HandlerResponse};
use serde_json::json;

pub fn handler(req: HandlerRequest) {
    let body = json!({ "user_id": "the current user" });
    let _ = req.reply_tx.send(HandlerResponse::ok(body));
}
