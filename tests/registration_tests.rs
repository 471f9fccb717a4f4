//! Route table assembly rules: duplicate registrations and pattern/parameter
//! agreement are configuration errors reported at build time.

use http::Method;
use paramedic::api::{ApiBuilder, Param, ParamType};

#[test]
fn test_duplicate_route_is_a_configuration_error() {
    let mut api = ApiBuilder::new();
    api.route(Method::GET, "/items/{item_id}", "read_item")
        .param(Param::path("item_id", ParamType::Integer));
    api.route(Method::GET, "/items/{item_id}", "read_item_again")
        .param(Param::path("item_id", ParamType::Integer));

    let err = api.build().expect_err("duplicate rejected");
    let message = err.to_string();
    assert!(message.contains("duplicate_route"), "got: {message}");
    assert!(message.contains("GET /items/{item_id}"), "got: {message}");
}

#[test]
fn test_same_path_different_methods_is_fine() {
    let mut api = ApiBuilder::new();
    api.route(Method::GET, "/items/", "list_items");
    api.route(Method::POST, "/items/", "create_item");
    assert_eq!(api.build().expect("distinct methods").len(), 2);
}

#[test]
fn test_pattern_param_must_be_declared() {
    let mut api = ApiBuilder::new();
    api.route(Method::GET, "/items/{item_id}", "read_item");

    let err = api.build().expect_err("undeclared path param");
    assert!(err.to_string().contains("undeclared_path_param"));
}

#[test]
fn test_declared_param_must_be_in_pattern() {
    let mut api = ApiBuilder::new();
    api.route(Method::GET, "/items/", "list_items")
        .param(Param::path("item_id", ParamType::Integer));

    let err = api.build().expect_err("unknown path param");
    assert!(err.to_string().contains("unknown_path_param"));
}

#[test]
fn test_catch_all_must_be_trailing() {
    let mut api = ApiBuilder::new();
    api.route(Method::GET, "/files/{file_path:path}/meta", "read_meta")
        .param(Param::path("file_path", ParamType::String));

    let err = api.build().expect_err("catch-all must be last");
    assert!(err.to_string().contains("catch_all_not_trailing"));
}

#[test]
fn test_all_issues_reported_together() {
    let mut api = ApiBuilder::new();
    api.route(Method::GET, "/a/{x}", "a")
        .param(Param::path("x", ParamType::String));
    api.route(Method::GET, "/a/{x}", "a_again")
        .param(Param::path("x", ParamType::String));
    api.route(Method::GET, "/b", "b")
        .param(Param::path("y", ParamType::String));

    let err = api.build().expect_err("two defects");
    let message = err.to_string();
    assert!(message.contains("2 issue(s)"), "got: {message}");
    assert!(message.contains("duplicate_route"), "got: {message}");
    assert!(message.contains("unknown_path_param"), "got: {message}");
}

#[test]
fn test_missing_handler_name() {
    let mut api = ApiBuilder::new();
    api.route(Method::GET, "/items/", "");
    let err = api.build().expect_err("handler required");
    assert!(err.to_string().contains("missing_handler"));
}
