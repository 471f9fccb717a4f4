//! JSON Schemas for the demo models.
//!
//! Each function returns a named [`ModelSchema`]; the name keys the compiled
//! validator cache in [`crate::validator`], so routes sharing a model share a
//! single compiled schema. Optional model fields are nullable, matching the
//! echo semantics of the handlers (absent optional fields serialize as
//! `null`, they are not dropped).

use crate::api::ModelSchema;
use serde_json::json;

/// A basic item: required name and price, optional description and tax.
pub fn item() -> ModelSchema {
    ModelSchema {
        name: "Item",
        schema: json!({
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "description": { "type": ["string", "null"] },
                "price": { "type": "number" },
                "tax": { "type": ["number", "null"] }
            },
            "required": ["name", "price"]
        }),
    }
}

/// Item variant with field-level constraints: bounded description length and a
/// strictly positive price.
pub fn item_constrained() -> ModelSchema {
    ModelSchema {
        name: "ItemConstrained",
        schema: json!({
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "description": {
                    "type": ["string", "null"],
                    "title": "The description of the item",
                    "maxLength": 300
                },
                "price": {
                    "type": "number",
                    "description": "The price must be greater than zero",
                    "exclusiveMinimum": 0
                },
                "tax": { "type": ["number", "null"] }
            },
            "required": ["name", "price"]
        }),
    }
}

/// A user: required username, optional full name.
pub fn user() -> ModelSchema {
    ModelSchema {
        name: "User",
        schema: json!({
            "type": "object",
            "properties": {
                "username": { "type": "string" },
                "full_name": { "type": ["string", "null"] }
            },
            "required": ["username"]
        }),
    }
}

fn image_schema(strict_url: bool) -> serde_json::Value {
    let url = if strict_url {
        // `format` assertions are enabled on the compiled validators, so this
        // requires a well-formed absolute URL, not just any string.
        json!({ "type": "string", "format": "uri" })
    } else {
        json!({ "type": "string" })
    };
    json!({
        "type": "object",
        "properties": {
            "url": url,
            "name": { "type": "string" }
        },
        "required": ["url", "name"]
    })
}

/// An embedded image with a free-form url string.
pub fn image() -> ModelSchema {
    ModelSchema {
        name: "Image",
        schema: image_schema(false),
    }
}

/// Image variant whose url must be a well-formed absolute URL.
pub fn image_strict() -> ModelSchema {
    ModelSchema {
        name: "ImageStrict",
        schema: image_schema(true),
    }
}

fn nested_item_schema(strict_url: bool) -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "name": { "type": "string" },
            "description": { "type": ["string", "null"] },
            "price": { "type": "number" },
            "tax": { "type": ["number", "null"] },
            "tags": {
                "type": "array",
                "items": { "type": "string" },
                "uniqueItems": true,
                "default": []
            },
            "image": {
                "anyOf": [
                    image_schema(strict_url),
                    { "type": "null" }
                ]
            }
        },
        "required": ["name", "price"]
    })
}

/// Item extended with a set of unique tags and an optional embedded [`image`].
pub fn nested_item() -> ModelSchema {
    ModelSchema {
        name: "NestedItem",
        schema: nested_item_schema(false),
    }
}

/// [`nested_item`] with the strict image variant.
pub fn nested_item_strict() -> ModelSchema {
    ModelSchema {
        name: "NestedItemStrict",
        schema: nested_item_schema(true),
    }
}

/// An offer bundling a list of nested items. Embedded image URLs are strict,
/// matching the deeply nested demo model.
pub fn offer() -> ModelSchema {
    ModelSchema {
        name: "Offer",
        schema: json!({
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "description": { "type": ["string", "null"] },
                "price": { "type": "number" },
                "items": {
                    "type": "array",
                    "items": nested_item_schema(true)
                }
            },
            "required": ["name", "price", "items"]
        }),
    }
}
