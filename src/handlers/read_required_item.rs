use crate::dispatcher::{HandlerRequest, HandlerResponse};
use serde_json::json;

pub fn handler(req: HandlerRequest) {
    let body = json!({
        "item_id": req.path_param("item_id"),
        "needy": req.query_param("needy"),
    });
    let _ = req.reply_tx.send(HandlerResponse::ok(body));
}
