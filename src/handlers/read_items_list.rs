use crate::dispatcher::{HandlerRequest, HandlerResponse};
use serde_json::json;

pub fn handler(req: HandlerRequest) {
    let body = json!({ "q": req.query_param("q") });
    let _ = req.reply_tx.send(HandlerResponse::ok(body));
}
