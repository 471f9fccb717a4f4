//! The demo route table.
//!
//! Every route is one request-parsing feature: path parameters (typed,
//! bounded, enumerated, catch-all), query parameters (defaults, required
//! markers, string constraints, aliases, lists, documentation metadata) and
//! the body-binding modes (whole-model, multi-parameter, embedded, arbitrary
//! mapping).
//!
//! Registration order is load-bearing in one place: `/users/me` is declared
//! before `/users/{user_id}` so the static path wins the tie-break.

use crate::api::{ApiBuilder, BodyField, Param, ParamType, RouteMeta};
use crate::schema;
use http::Method;

/// Build the demo dispatch table.
pub fn table() -> anyhow::Result<Vec<RouteMeta>> {
    let mut api = ApiBuilder::new();

    api.route(Method::GET, "/", "root")
        .param(Param::query("inp", ParamType::String).required());

    api.route(Method::GET, "/items/{item_id}", "read_item")
        .param(Param::path("item_id", ParamType::Integer));

    // Static before dynamic: declaration order decides this tie-break.
    api.route(Method::GET, "/users/me", "read_user_me");
    api.route(Method::GET, "/users/{user_id}", "read_user")
        .param(Param::path("user_id", ParamType::String));

    api.route(Method::GET, "/models/{model_name}", "get_model").param(
        Param::path("model_name", ParamType::String).one_of(&["alexnet", "resnet", "lenet"]),
    );

    api.route(Method::GET, "/files/{file_path:path}", "read_file")
        .param(Param::path("file_path", ParamType::String));

    api.route(Method::GET, "/items/", "list_items")
        .param(Param::query("skip", ParamType::Integer).default_value(0.into()))
        .param(Param::query("limit", ParamType::Integer).default_value(10.into()));

    api.route(Method::GET, "/item/{item_id}", "read_item_detail")
        .param(Param::path("item_id", ParamType::String))
        .param(Param::query("q", ParamType::String))
        .param(Param::query("short", ParamType::Boolean).default_value(false.into()));

    api.route(Method::GET, "/req-items/{item_id}", "read_required_item")
        .param(Param::path("item_id", ParamType::String))
        .param(Param::query("needy", ParamType::String).required());

    api.route(Method::POST, "/items/", "create_item")
        .body_model("item", schema::item());

    api.route(Method::PUT, "/items/{item_id}", "update_item")
        .param(Param::path("item_id", ParamType::Integer))
        .body_model("item", schema::item());

    api.route(Method::GET, "/item-validation/", "read_items_filtered")
        .param(Param::query("q", ParamType::String).max_length(50));

    api.route(Method::GET, "/item-regex/", "read_items_filtered").param(
        Param::query("q", ParamType::String)
            .min_length(3)
            .max_length(50)
            .pattern("^fixedquery$"),
    );

    // The explicit "no default, must be sent" declaration.
    api.route(Method::GET, "/item-ellipsis/", "read_items_filtered")
        .param(Param::query("q", ParamType::String).min_length(3).required());

    api.route(Method::GET, "/item-list/", "read_items_list")
        .param(Param::query("q", ParamType::String).list());

    api.route(Method::GET, "/query-metadata/", "read_items_filtered").param(
        Param::query("q", ParamType::String)
            .title("Query string")
            .description(
                "Query string for the items to search in the database that have a good match",
            )
            .min_length(3),
    );

    api.route(Method::GET, "/alias-param/", "read_items_filtered")
        .param(Param::query("q", ParamType::String).alias("item-query"));

    api.route(Method::GET, "/deprecate-param/", "read_items_filtered").param(
        Param::query("q", ParamType::String)
            .alias("item-query")
            .title("Query string")
            .description(
                "Query string for the items to search in the database that have a good match",
            )
            .min_length(3)
            .max_length(50)
            .pattern("^fixedquery$")
            .deprecated(),
    );

    api.route(Method::GET, "/exclude-from-docs/", "read_hidden_query")
        .param(Param::query("hidden_query", ParamType::String).hidden());

    api.route(Method::GET, "/path-validations/{item_id}", "read_item_numeric")
        .param(Param::path("item_id", ParamType::Integer).title("The ID of the item to get"))
        .param(Param::query("q", ParamType::String).alias("item-query"));

    api.route(Method::GET, "/path-ge/{item_id}", "read_item_numeric")
        .param(
            Param::path("item_id", ParamType::Integer)
                .title("The ID of the item to get")
                .ge(1.0),
        )
        .param(Param::query("q", ParamType::String).required());

    api.route(Method::GET, "/path-gt-le/{item_id}", "read_item_numeric")
        .param(
            Param::path("item_id", ParamType::Integer)
                .title("The ID of the item to get")
                .gt(0.0)
                .le(1000.0),
        )
        .param(Param::query("q", ParamType::String).required());

    api.route(Method::PUT, "/multiple-body/{item_id}", "update_item_full")
        .param(Param::path("item_id", ParamType::Integer))
        .body_fields(vec![
            BodyField::model("item", schema::item()),
            BodyField::model("user", schema::user()),
        ]);

    // A singular value in the body pulls every parameter into the
    // object-keyed mode.
    api.route(
        Method::PUT,
        "/singular-in-body/{item_id}",
        "update_item_importance",
    )
    .param(Param::path("item_id", ParamType::Integer))
    .body_fields(vec![
        BodyField::model("item", schema::item()),
        BodyField::model("user", schema::user()),
        BodyField::scalar("importance", ParamType::Integer),
    ]);

    api.route(Method::PUT, "/embed-in-body/{item_id}", "update_item_embedded")
        .param(Param::path("item_id", ParamType::Integer))
        .body_embed("item", schema::item());

    api.route(Method::PUT, "/body-field/{item_id}", "update_item_embedded")
        .param(Param::path("item_id", ParamType::Integer))
        .body_embed("item", schema::item_constrained());

    api.route(Method::PUT, "/nested-models/{item_id}", "update_item_nested")
        .param(Param::path("item_id", ParamType::Integer))
        .body_model("item", schema::nested_item());

    api.route(Method::PUT, "/special-types/{item_id}", "update_item_nested")
        .param(Param::path("item_id", ParamType::Integer))
        .body_model("item", schema::nested_item_strict());

    api.route(Method::POST, "/offers/", "create_offer")
        .body_model("offer", schema::offer());

    api.route(Method::POST, "/index-weights/", "create_index_weights")
        .body_map(ParamType::Integer, ParamType::Number);

    api.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_builds() {
        let routes = table().expect("demo table builds");
        assert_eq!(routes.len(), 30);
    }

    #[test]
    fn test_static_users_route_precedes_dynamic() {
        let routes = table().expect("demo table builds");
        let me = routes
            .iter()
            .position(|r| r.path_pattern == "/users/me")
            .expect("static route present");
        let dynamic = routes
            .iter()
            .position(|r| r.path_pattern == "/users/{user_id}")
            .expect("dynamic route present");
        assert!(me < dynamic);
    }
}
