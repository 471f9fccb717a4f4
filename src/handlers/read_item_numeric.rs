use crate::dispatcher::{HandlerRequest, HandlerResponse};
use serde_json::json;

/// Shared by the numeric path-validation demo routes; the bounds differ per
/// route declaration, the echo does not.
pub fn handler(req: HandlerRequest) {
    let mut body = json!({ "item_id": req.path_param("item_id") });
    if let Some(q) = req.query_str("q").filter(|q| !q.is_empty()) {
        body["q"] = json!(q);
    }
    let _ = req.reply_tx.send(HandlerResponse::ok(body));
}
