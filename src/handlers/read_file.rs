use crate::dispatcher::{HandlerRequest, HandlerResponse};
use serde_json::json;

pub fn handler(req: HandlerRequest) {
    let body = json!({ "file_path": req.path_param("file_path") });
    let _ = req.reply_tx.send(HandlerResponse::ok(body));
}
