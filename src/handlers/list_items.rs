use crate::dispatcher::{HandlerRequest, HandlerResponse};
use once_cell::sync::Lazy;
use serde_json::{json, Value};

/// Fixed sample list; read-only at request time.
static SAMPLE_ITEMS: Lazy<Vec<Value>> = Lazy::new(|| {
    vec![
        json!({ "item_name": "Foo" }),
        json!({ "item_name": "Bar" }),
        json!({ "item_name": "Baz" }),
    ]
});

pub fn handler(req: HandlerRequest) {
    let len = SAMPLE_ITEMS.len();
    let skip = req.query_i64("skip").unwrap_or(0).max(0) as usize;
    let limit = req.query_i64("limit").unwrap_or(10).max(0) as usize;

    let start = skip.min(len);
    let end = skip.saturating_add(limit).min(len);
    let body = Value::Array(SAMPLE_ITEMS[start..end].to_vec());
    let _ = req.reply_tx.send(HandlerResponse::ok(body));
}
