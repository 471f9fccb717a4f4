use crate::dispatcher::{HandlerRequest, HandlerResponse};
use serde_json::json;

pub fn handler(req: HandlerRequest) {
    let body = match req.query_str("hidden_query") {
        Some(hidden) => json!({ "hidden_query": hidden }),
        None => json!({ "hidden_query": "Not found" }),
    };
    let _ = req.reply_tx.send(HandlerResponse::ok(body));
}
