use http::Method;
use paramedic::api::{ApiBuilder, Param, ParamType, RouteMeta};
use paramedic::router::{RouteMatch, Router};

fn demo_table() -> Vec<RouteMeta> {
    let mut api = ApiBuilder::new();

    api.route(Method::GET, "/", "root_handler");
    api.route(Method::GET, "/users/me", "current_user");
    api.route(Method::GET, "/users/{user_id}", "get_user")
        .param(Param::path("user_id", ParamType::String));
    api.route(Method::GET, "/items/", "list_items");
    api.route(Method::GET, "/items/{item_id}", "get_item")
        .param(Param::path("item_id", ParamType::Integer));
    api.route(Method::POST, "/items/", "create_item");
    api.route(Method::GET, "/files/{file_path:path}", "read_file")
        .param(Param::path("file_path", ParamType::String));

    api.build().expect("table builds")
}

fn assert_route_match(router: &Router, method: Method, path: &str, expected_handler: &str) {
    match router.route(method.clone(), path) {
        Some(RouteMatch { route, .. }) => {
            assert_eq!(
                route.handler_name, expected_handler,
                "handler mismatch for {method} {path}: expected '{expected_handler}', got '{}'",
                route.handler_name
            );
        }
        None => {
            assert_eq!(
                expected_handler, "<none>",
                "expected route to match for {method} {path}"
            );
        }
    }
}

#[test]
fn test_root_path() {
    let router = Router::new(demo_table());
    assert_route_match(&router, Method::GET, "/", "root_handler");
}

#[test]
fn test_static_path_wins_over_dynamic_sibling() {
    let router = Router::new(demo_table());
    assert_route_match(&router, Method::GET, "/users/me", "current_user");
    assert_route_match(&router, Method::GET, "/users/42", "get_user");
}

#[test]
fn test_declaration_order_decides_overlap() {
    // Same shape as /users: the parameterized pattern declared first takes
    // every match, including the would-be static one.
    let mut api = ApiBuilder::new();
    api.route(Method::GET, "/users/{user_id}", "get_user")
        .param(Param::path("user_id", ParamType::String));
    api.route(Method::GET, "/users/me", "current_user");
    let router = Router::new(api.build().expect("table builds"));

    assert_route_match(&router, Method::GET, "/users/me", "get_user");
}

#[test]
fn test_path_param_extraction() {
    let router = Router::new(demo_table());
    let m = router
        .route(Method::GET, "/items/123")
        .expect("route matches");
    assert_eq!(m.get_path_param("item_id"), Some("123"));
    assert_eq!(m.handler_name, "get_item");
}

#[test]
fn test_trailing_slash_routes_are_distinct() {
    let router = Router::new(demo_table());
    assert_route_match(&router, Method::GET, "/items/", "list_items");
    assert_route_match(&router, Method::GET, "/items/123", "get_item");
}

#[test]
fn test_method_distinguishes_routes() {
    let router = Router::new(demo_table());
    assert_route_match(&router, Method::POST, "/items/", "create_item");
    assert_route_match(&router, Method::PUT, "/items/", "<none>");
}

#[test]
fn test_catch_all_captures_separators() {
    let router = Router::new(demo_table());
    let m = router
        .route(Method::GET, "/files/home/user/notes.txt")
        .expect("route matches");
    assert_eq!(m.get_path_param("file_path"), Some("home/user/notes.txt"));
}

#[test]
fn test_unknown_path() {
    let router = Router::new(demo_table());
    assert_route_match(&router, Method::GET, "/unknown", "<none>");
}

#[test]
fn test_single_segment_param_rejects_subpaths() {
    let router = Router::new(demo_table());
    assert_route_match(&router, Method::GET, "/users/42/posts", "<none>");
}
