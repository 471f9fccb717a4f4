use crate::dispatcher::{HandlerRequest, HandlerResponse};
use serde_json::json;

pub fn handler(req: HandlerRequest) {
    let model_name = req.path_str("model_name").unwrap_or_default();
    let message = match model_name {
        "alexnet" => "Deep Learning FTW!",
        "lenet" => "LeCNN all the images",
        _ => "Have some residuals",
    };
    let body = json!({ "model_name": model_name, "message": message });
    let _ = req.reply_tx.send(HandlerResponse::ok(body));
}
