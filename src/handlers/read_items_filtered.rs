use crate::dispatcher::{HandlerRequest, HandlerResponse};
use serde_json::json;

/// Shared by every query-metadata demo route: the declared constraints,
/// alias, title and deprecation flags differ per route, the echo does not.
pub fn handler(req: HandlerRequest) {
    let mut body = json!({ "items": [{ "item_id": "Foo" }, { "item_id": "Bar" }] });
    if let Some(q) = req.query_str("q").filter(|q| !q.is_empty()) {
        body["q"] = json!(q);
    }
    let _ = req.reply_tx.send(HandlerResponse::ok(body));
}
