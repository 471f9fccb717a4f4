//! End-to-end HTTP tests: real server, raw TCP requests, wire-shape
//! assertions for both successful echoes and validation failures.

use serde_json::json;

mod common;
use common::test_server::{http_request, start_demo_server};

#[test]
fn test_health_endpoint() {
    let (server, addr) = start_demo_server();
    let (status, body) = http_request(&addr, "GET", "/health", None);
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "status": "ok" }));
    server.stop();
}

#[test]
fn test_path_param_echo() {
    let (server, addr) = start_demo_server();
    let (status, body) = http_request(&addr, "GET", "/items/5", None);
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "item_id": 5 }));
    server.stop();
}

#[test]
fn test_path_param_type_failure() {
    let (server, addr) = start_demo_server();
    let (status, body) = http_request(&addr, "GET", "/items/abc", None);
    assert_eq!(status, 422);
    let detail = &body["detail"][0];
    assert_eq!(detail["type"], "int_parsing");
    assert_eq!(detail["loc"], json!(["path", "item_id"]));
    assert_eq!(detail["input"], "abc");
    server.stop();
}

#[test]
fn test_list_items_slicing_and_defaults() {
    let (server, addr) = start_demo_server();

    let (status, body) = http_request(&addr, "GET", "/items/", None);
    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!([
            { "item_name": "Foo" },
            { "item_name": "Bar" },
            { "item_name": "Baz" }
        ])
    );

    let (_, body) = http_request(&addr, "GET", "/items/?skip=1&limit=1", None);
    assert_eq!(body, json!([{ "item_name": "Bar" }]));

    // clamped to available length
    let (_, body) = http_request(&addr, "GET", "/items/?skip=2&limit=10", None);
    assert_eq!(body, json!([{ "item_name": "Baz" }]));
    let (_, body) = http_request(&addr, "GET", "/items/?skip=7", None);
    assert_eq!(body, json!([]));

    server.stop();
}

#[test]
fn test_static_route_beats_dynamic_sibling() {
    let (server, addr) = start_demo_server();

    let (_, body) = http_request(&addr, "GET", "/users/me", None);
    assert_eq!(body, json!({ "user_id": "the current user" }));

    let (_, body) = http_request(&addr, "GET", "/users/alice", None);
    assert_eq!(body, json!({ "user_id": "alice" }));

    server.stop();
}

#[test]
fn test_enumerated_path_values() {
    let (server, addr) = start_demo_server();

    let (status, body) = http_request(&addr, "GET", "/models/alexnet", None);
    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({ "model_name": "alexnet", "message": "Deep Learning FTW!" })
    );

    let (_, body) = http_request(&addr, "GET", "/models/lenet", None);
    assert_eq!(body["message"], "LeCNN all the images");
    let (_, body) = http_request(&addr, "GET", "/models/resnet", None);
    assert_eq!(body["message"], "Have some residuals");

    let (status, body) = http_request(&addr, "GET", "/models/vgg", None);
    assert_eq!(status, 422);
    assert_eq!(body["detail"][0]["type"], "enum");

    server.stop();
}

#[test]
fn test_catch_all_path() {
    let (server, addr) = start_demo_server();
    let (status, body) = http_request(&addr, "GET", "/files/home/user/notes.txt", None);
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "file_path": "home/user/notes.txt" }));
    server.stop();
}

#[test]
fn test_create_item_price_with_tax() {
    let (server, addr) = start_demo_server();

    let item = json!({ "name": "Hammer", "price": 10.0, "tax": 2.5 });
    let (status, body) = http_request(&addr, "POST", "/items/", Some(&item));
    assert_eq!(status, 200);
    assert_eq!(body["price_with_tax"], json!(12.5));

    let item = json!({ "name": "Hammer", "price": 10.0 });
    let (status, body) = http_request(&addr, "POST", "/items/", Some(&item));
    assert_eq!(status, 200);
    assert!(body.get("price_with_tax").is_none());
    assert_eq!(body["tax"], json!(null));

    server.stop();
}

#[test]
fn test_update_item_merges_path_and_body() {
    let (server, addr) = start_demo_server();
    let item = json!({ "name": "Hammer", "price": 10.0 });
    let (status, body) = http_request(&addr, "PUT", "/items/7", Some(&item));
    assert_eq!(status, 200);
    assert_eq!(body["item_id"], json!(7));
    assert_eq!(body["name"], json!("Hammer"));
    assert_eq!(body["price"], json!(10.0));
    server.stop();
}

#[test]
fn test_query_regex_validation() {
    let (server, addr) = start_demo_server();

    let (status, body) = http_request(&addr, "GET", "/item-regex/?q=foo", None);
    assert_eq!(status, 422);
    assert_eq!(body["detail"][0]["type"], "string_pattern_mismatch");

    let (status, body) = http_request(&addr, "GET", "/item-regex/?q=fixedquery", None);
    assert_eq!(status, 200);
    assert_eq!(body["q"], json!("fixedquery"));

    server.stop();
}

#[test]
fn test_path_numeric_bounds() {
    let (server, addr) = start_demo_server();

    let (status, body) = http_request(&addr, "GET", "/path-ge/0?q=x", None);
    assert_eq!(status, 422);
    assert_eq!(body["detail"][0]["type"], "greater_than_equal");

    let (status, body) = http_request(&addr, "GET", "/path-ge/1?q=x", None);
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "item_id": 1, "q": "x" }));

    server.stop();
}

#[test]
fn test_alias_parameter() {
    let (server, addr) = start_demo_server();
    let (status, body) = http_request(&addr, "GET", "/alias-param/?item-query=foobaritems", None);
    assert_eq!(status, 200);
    assert_eq!(body["q"], json!("foobaritems"));
    server.stop();
}

#[test]
fn test_repeated_query_key_list() {
    let (server, addr) = start_demo_server();

    let (_, body) = http_request(&addr, "GET", "/item-list/?q=foo&q=bar", None);
    assert_eq!(body, json!({ "q": ["foo", "bar"] }));

    let (_, body) = http_request(&addr, "GET", "/item-list/", None);
    assert_eq!(body, json!({ "q": null }));

    server.stop();
}

#[test]
fn test_hidden_query_still_validates() {
    let (server, addr) = start_demo_server();

    let (_, body) = http_request(&addr, "GET", "/exclude-from-docs/?hidden_query=x", None);
    assert_eq!(body, json!({ "hidden_query": "x" }));
    let (_, body) = http_request(&addr, "GET", "/exclude-from-docs/", None);
    assert_eq!(body, json!({ "hidden_query": "Not found" }));

    server.stop();
}

#[test]
fn test_multiple_body_parameters() {
    let (server, addr) = start_demo_server();

    let body = json!({
        "item": { "name": "Hammer", "price": 9.5 },
        "user": { "username": "dave", "full_name": "Dave Grohl" }
    });
    let (status, echoed) = http_request(&addr, "PUT", "/multiple-body/5", Some(&body));
    assert_eq!(status, 200);
    assert_eq!(echoed["item_id"], json!(5));
    assert_eq!(echoed["item"]["name"], json!("Hammer"));
    assert_eq!(echoed["user"]["username"], json!("dave"));

    let body = json!({ "item": { "name": "Hammer", "price": 9.5 } });
    let (status, err) = http_request(&addr, "PUT", "/multiple-body/5", Some(&body));
    assert_eq!(status, 422);
    assert_eq!(err["detail"][0]["loc"], json!(["body", "user"]));
    assert_eq!(err["detail"][0]["type"], "missing");

    server.stop();
}

#[test]
fn test_embedded_body_parameter() {
    let (server, addr) = start_demo_server();

    let wrapped = json!({ "item": { "name": "Hammer", "price": 9.5 } });
    let (status, body) = http_request(&addr, "PUT", "/embed-in-body/5", Some(&wrapped));
    assert_eq!(status, 200);
    assert_eq!(body["item"]["name"], json!("Hammer"));

    let bare = json!({ "name": "Hammer", "price": 9.5 });
    let (status, err) = http_request(&addr, "PUT", "/embed-in-body/5", Some(&bare));
    assert_eq!(status, 422);
    assert_eq!(err["detail"][0]["loc"], json!(["body", "item"]));

    server.stop();
}

#[test]
fn test_offer_round_trip() {
    let (server, addr) = start_demo_server();
    let offer = json!({
        "name": "Bundle",
        "description": null,
        "price": 42.0,
        "items": [
            {
                "name": "Hammer",
                "description": null,
                "price": 9.5,
                "tax": null,
                "tags": ["metal", "tool"],
                "image": { "url": "https://example.com/h.png", "name": "hero" }
            }
        ]
    });
    let (status, body) = http_request(&addr, "POST", "/offers/", Some(&offer));
    assert_eq!(status, 200);
    assert_eq!(body, offer);
    server.stop();
}

#[test]
fn test_index_weights_round_trip() {
    let (server, addr) = start_demo_server();

    let weights = json!({ "2": 1.4, "7": 7.7 });
    let (status, body) = http_request(&addr, "POST", "/index-weights/", Some(&weights));
    assert_eq!(status, 200);
    assert_eq!(body, weights);

    let bad = json!({ "two": 1.4 });
    let (status, err) = http_request(&addr, "POST", "/index-weights/", Some(&bad));
    assert_eq!(status, 422);
    assert_eq!(err["detail"][0]["type"], "int_parsing");
    assert_eq!(err["detail"][0]["loc"], json!(["body", "two"]));

    server.stop();
}

#[test]
fn test_missing_body_reports_at_body() {
    let (server, addr) = start_demo_server();
    let (status, err) = http_request(&addr, "POST", "/items/", None);
    assert_eq!(status, 422);
    assert_eq!(err["detail"][0]["loc"], json!(["body"]));
    assert_eq!(err["detail"][0]["type"], "missing");
    server.stop();
}

#[test]
fn test_unknown_route_is_404() {
    let (server, addr) = start_demo_server();
    let (status, body) = http_request(&addr, "GET", "/nope", None);
    assert_eq!(status, 404);
    assert_eq!(body, json!({ "detail": "Not Found" }));
    server.stop();
}

#[test]
fn test_required_root_query() {
    let (server, addr) = start_demo_server();

    let (status, body) = http_request(&addr, "GET", "/?inp=there", None);
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "message": "Hello World there" }));

    let (status, err) = http_request(&addr, "GET", "/", None);
    assert_eq!(status, 422);
    assert_eq!(err["detail"][0]["loc"], json!(["query", "inp"]));

    server.stop();
}
