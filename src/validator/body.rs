//! Body extraction and binding.
//!
//! Implements the three body-binding modes plus arbitrary typed mappings:
//!
//! - `Model` - exactly one structured parameter without an explicit body
//!   marker: the whole JSON body is the model.
//! - `Fields` - several structured parameters (or a singular value marked as
//!   body): the body is an object keyed by parameter name, each section
//!   validated independently.
//! - `Embed` - a single structured parameter explicitly embedded: the body is
//!   still an object keyed by that parameter's name.
//! - `Map` - a mapping with typed keys parsed from a string-keyed JSON object
//!   (JSON only supports string keys on the wire; keys are parsed to the
//!   declared key type and the original object is echoed through unchanged).

use super::cache::compiled_schema;
use super::error::FieldError;
use crate::api::{BodyBinding, BodyField, BodyFieldKind, BodyMeta, ModelSchema, ParamType};
use jsonschema::error::ValidationErrorKind;
use serde_json::{json, Map, Value};

/// Validate and bind the request body per the route's declared mode.
///
/// Returns the bound body value on success; pushes field errors and returns
/// `None` otherwise. A missing body is an error only when the declaration
/// requires one.
pub fn bind_body(
    meta: &BodyMeta,
    body: Option<&Value>,
    errors: &mut Vec<FieldError>,
) -> Option<Value> {
    let Some(body) = body else {
        if meta.required {
            errors.push(FieldError::missing(vec![json!("body")]));
        }
        return None;
    };

    match &meta.binding {
        BodyBinding::Model { schema, .. } => {
            let before = errors.len();
            validate_model(schema, body, &[json!("body")], errors);
            (errors.len() == before).then(|| body.clone())
        }
        BodyBinding::Embed { name, schema } => {
            let obj = match require_object(body, errors) {
                Some(obj) => obj,
                None => return None,
            };
            let Some(section) = obj.get(name) else {
                errors.push(FieldError::missing(vec![json!("body"), json!(name)]));
                return None;
            };
            let before = errors.len();
            validate_model(schema, section, &[json!("body"), json!(name)], errors);
            (errors.len() == before).then(|| {
                let mut wrapped = Map::new();
                wrapped.insert(name.clone(), section.clone());
                Value::Object(wrapped)
            })
        }
        BodyBinding::Fields(fields) => {
            let obj = match require_object(body, errors) {
                Some(obj) => obj,
                None => return None,
            };
            bind_fields(fields, obj, errors)
        }
        BodyBinding::Map { key, value } => {
            let obj = match require_object(body, errors) {
                Some(obj) => obj,
                None => return None,
            };
            let before = errors.len();
            for (k, v) in obj {
                let loc = vec![json!("body"), json!(k)];
                check_map_key(*key, k, &loc, errors);
                coerce_json_scalar(*value, v, &loc, errors);
            }
            // Keys stay strings on the wire; the mapping is echoed unchanged.
            (errors.len() == before).then(|| body.clone())
        }
    }
}

fn require_object<'a>(
    body: &'a Value,
    errors: &mut Vec<FieldError>,
) -> Option<&'a Map<String, Value>> {
    match body.as_object() {
        Some(obj) => Some(obj),
        None => {
            errors.push(FieldError::not_object(vec![json!("body")], body.clone()));
            None
        }
    }
}

fn bind_fields(
    fields: &[BodyField],
    obj: &Map<String, Value>,
    errors: &mut Vec<FieldError>,
) -> Option<Value> {
    let mut bound = Map::new();
    let before = errors.len();

    for field in fields {
        let loc = vec![json!("body"), json!(field.name)];
        let Some(section) = obj.get(&field.name) else {
            if field.required {
                errors.push(FieldError::missing(loc));
            }
            continue;
        };
        match &field.kind {
            BodyFieldKind::Model(schema) => {
                let errs_before = errors.len();
                validate_model(schema, section, &loc, errors);
                if errors.len() == errs_before {
                    bound.insert(field.name.clone(), section.clone());
                }
            }
            BodyFieldKind::Scalar(ty) => {
                if let Some(coerced) = coerce_json_scalar(*ty, section, &loc, errors) {
                    bound.insert(field.name.clone(), coerced);
                }
            }
        }
    }

    (errors.len() == before).then(|| Value::Object(bound))
}

/// Validate a body section against a model schema, mapping each schema
/// failure to a field-addressed error under `prefix`.
fn validate_model(
    schema: &ModelSchema,
    instance: &Value,
    prefix: &[Value],
    errors: &mut Vec<FieldError>,
) {
    let validator = compiled_schema(schema);
    for err in validator.iter_errors(instance) {
        let mut loc = prefix.to_vec();
        loc.extend(pointer_segments(&err.instance_path().to_string()));
        // Address a missing required property at the property itself.
        if let ValidationErrorKind::Required { property } = err.kind() {
            loc.push(property.clone());
            errors.push(FieldError::missing(loc));
            continue;
        }
        let input = err.instance().as_ref().clone();
        errors.push(FieldError::schema(loc, err.to_string(), input));
    }
}

/// Split a JSON pointer (`/items/0/url`) into loc segments, array indices as
/// numbers.
fn pointer_segments(pointer: &str) -> Vec<Value> {
    pointer
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|segment| match segment.parse::<u64>() {
            Ok(index) => json!(index),
            Err(_) => json!(segment),
        })
        .collect()
}

/// Coerce a JSON value appearing in a body into the declared scalar type.
///
/// Lax in the same way the query coercion is: a string holding a valid
/// number/boolean is accepted and converted.
fn coerce_json_scalar(
    ty: ParamType,
    value: &Value,
    loc: &[Value],
    errors: &mut Vec<FieldError>,
) -> Option<Value> {
    match ty {
        ParamType::Integer => match value {
            Value::Number(n) if n.is_i64() || n.is_u64() => Some(value.clone()),
            Value::String(s) => match s.parse::<i64>() {
                Ok(n) => Some(json!(n)),
                Err(_) => {
                    errors.push(FieldError::int_parsing(loc.to_vec(), s));
                    None
                }
            },
            other => {
                errors.push(FieldError::int_type(loc.to_vec(), other.clone()));
                None
            }
        },
        ParamType::Number => match value {
            Value::Number(_) => Some(value.clone()),
            Value::String(s) => match s.parse::<f64>() {
                Ok(n) if n.is_finite() => Some(json!(n)),
                _ => {
                    errors.push(FieldError::float_parsing(loc.to_vec(), s));
                    None
                }
            },
            other => {
                errors.push(FieldError::float_type(loc.to_vec(), other.clone()));
                None
            }
        },
        ParamType::Boolean => match value {
            Value::Bool(_) => Some(value.clone()),
            other => {
                errors.push(FieldError::new(
                    "bool_type",
                    loc.to_vec(),
                    "Input should be a valid boolean",
                    other.clone(),
                ));
                None
            }
        },
        ParamType::String => match value {
            Value::String(_) => Some(value.clone()),
            other => {
                errors.push(FieldError::new(
                    "string_type",
                    loc.to_vec(),
                    "Input should be a valid string",
                    other.clone(),
                ));
                None
            }
        },
    }
}

/// Parse a mapping key (always a string on the wire) into the declared key
/// type.
fn check_map_key(ty: ParamType, key: &str, loc: &[Value], errors: &mut Vec<FieldError>) {
    match ty {
        ParamType::Integer => {
            if key.parse::<i64>().is_err() {
                errors.push(FieldError::int_parsing(loc.to_vec(), key));
            }
        }
        ParamType::Number => {
            if key.parse::<f64>().map(f64::is_finite) != Ok(true) {
                errors.push(FieldError::float_parsing(loc.to_vec(), key));
            }
        }
        ParamType::Boolean | ParamType::String => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;

    #[test]
    fn test_map_binding_integer_keys() {
        let meta = BodyMeta {
            required: true,
            binding: BodyBinding::Map {
                key: ParamType::Integer,
                value: ParamType::Number,
            },
        };
        let mut errors = Vec::new();
        let body = json!({ "2": 1.4, "7": 0.2 });
        let bound = bind_body(&meta, Some(&body), &mut errors);
        assert!(errors.is_empty());
        assert_eq!(bound, Some(body));

        let mut errors = Vec::new();
        let body = json!({ "two": 1.4 });
        assert!(bind_body(&meta, Some(&body), &mut errors).is_none());
        assert_eq!(errors[0].kind, "int_parsing");
        assert_eq!(errors[0].loc, vec![json!("body"), json!("two")]);
    }

    #[test]
    fn test_embed_binding_requires_wrapper_key() {
        let meta = BodyMeta {
            required: true,
            binding: BodyBinding::Embed {
                name: "item".to_string(),
                schema: schema::item(),
            },
        };
        let mut errors = Vec::new();
        let body = json!({ "name": "Hammer", "price": 9.5 });
        assert!(bind_body(&meta, Some(&body), &mut errors).is_none());
        assert_eq!(errors[0].kind, "missing");
        assert_eq!(errors[0].loc, vec![json!("body"), json!("item")]);

        let mut errors = Vec::new();
        let body = json!({ "item": { "name": "Hammer", "price": 9.5 } });
        let bound = bind_body(&meta, Some(&body), &mut errors);
        assert!(errors.is_empty());
        assert_eq!(bound, Some(body));
    }

    #[test]
    fn test_missing_required_body() {
        let meta = BodyMeta {
            required: true,
            binding: BodyBinding::Model {
                name: "item".to_string(),
                schema: schema::item(),
            },
        };
        let mut errors = Vec::new();
        assert!(bind_body(&meta, None, &mut errors).is_none());
        assert_eq!(errors[0].loc, vec![json!("body")]);
        assert_eq!(errors[0].kind, "missing");
    }
}
