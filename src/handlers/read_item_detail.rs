use crate::dispatcher::{HandlerRequest, HandlerResponse};
use serde_json::json;

pub fn handler(req: HandlerRequest) {
    let mut body = json!({ "item_id": req.path_param("item_id") });
    if let Some(q) = req.query_str("q").filter(|q| !q.is_empty()) {
        body["q"] = json!(q);
    }
    if !req.query_bool("short").unwrap_or(false) {
        body["description"] = json!("This is an amazing item that has a long description");
    }
    let _ = req.reply_tx.send(HandlerResponse::ok(body));
}
