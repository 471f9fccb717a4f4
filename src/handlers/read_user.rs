use crate::dispatcher::{HandlerRequest, HandlerResponse};
use serde_json::json;

pub fn handler(req: HandlerRequest) {
    let body = json!({ "user_id": req.path_param("user_id") });
    let _ = req.reply_tx.send(HandlerResponse::ok(body));
}
