//! Typed coercion and constraint checks for path and query parameters.
//!
//! Each declared field type has an explicit parsing function that turns the
//! raw string from the URL into a typed JSON value or a structured failure.
//! Constraint checks run on the coerced value.

use super::error::FieldError;
use crate::api::{ParamMeta, ParamType, RouteMeta};
use crate::router::ParamVec;
use serde_json::{json, Value};
use std::collections::HashMap;

/// Coerce a raw string into the declared scalar type.
fn coerce(ty: ParamType, raw: &str, loc: &[Value]) -> Result<Value, FieldError> {
    match ty {
        ParamType::Integer => raw
            .parse::<i64>()
            .map(Value::from)
            .map_err(|_| FieldError::int_parsing(loc.to_vec(), raw)),
        ParamType::Number => match raw.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(json!(n)),
            _ => Err(FieldError::float_parsing(loc.to_vec(), raw)),
        },
        ParamType::Boolean => match raw.to_ascii_lowercase().as_str() {
            "true" | "t" | "yes" | "y" | "on" | "1" => Ok(Value::Bool(true)),
            "false" | "f" | "no" | "n" | "off" | "0" => Ok(Value::Bool(false)),
            _ => Err(FieldError::bool_parsing(loc.to_vec(), raw)),
        },
        ParamType::String => Ok(Value::String(raw.to_string())),
    }
}

/// Check numeric bounds and string constraints against a coerced value.
fn check_constraints(meta: &ParamMeta, value: &Value, loc: &[Value], errors: &mut Vec<FieldError>) {
    if let Some(n) = value.as_f64() {
        if let Some(limit) = meta.gt {
            if !(n > limit) {
                errors.push(FieldError::greater_than(loc.to_vec(), limit, value.clone()));
            }
        }
        if let Some(limit) = meta.ge {
            if !(n >= limit) {
                errors.push(FieldError::greater_than_equal(
                    loc.to_vec(),
                    limit,
                    value.clone(),
                ));
            }
        }
        if let Some(limit) = meta.lt {
            if !(n < limit) {
                errors.push(FieldError::less_than(loc.to_vec(), limit, value.clone()));
            }
        }
        if let Some(limit) = meta.le {
            if !(n <= limit) {
                errors.push(FieldError::less_than_equal(
                    loc.to_vec(),
                    limit,
                    value.clone(),
                ));
            }
        }
    }

    if let Some(s) = value.as_str() {
        let chars = s.chars().count();
        if let Some(min) = meta.min_length {
            if chars < min {
                errors.push(FieldError::string_too_short(loc.to_vec(), min, s));
            }
        }
        if let Some(max) = meta.max_length {
            if chars > max {
                errors.push(FieldError::string_too_long(loc.to_vec(), max, s));
            }
        }
        if let Some(pattern) = &meta.pattern {
            if !pattern.is_match(s) {
                errors.push(FieldError::pattern_mismatch(
                    loc.to_vec(),
                    pattern.as_str(),
                    s,
                ));
            }
        }
    }
}

/// Coerce and check a single raw value against its declaration.
fn validate_one(
    meta: &ParamMeta,
    raw: &str,
    loc: &[Value],
    errors: &mut Vec<FieldError>,
) -> Option<Value> {
    if let Some(allowed) = &meta.allowed {
        if !allowed.iter().any(|a| a == raw) {
            errors.push(FieldError::enum_member(loc.to_vec(), allowed, raw));
            return None;
        }
    }
    match coerce(meta.ty, raw, loc) {
        Ok(value) => {
            let before = errors.len();
            check_constraints(meta, &value, loc, errors);
            (errors.len() == before).then_some(value)
        }
        Err(err) => {
            errors.push(err);
            None
        }
    }
}

/// Validate every declared path parameter of a route.
///
/// Raw values come from the router's captures; a missing segment only occurs
/// when a default covers it, since the pattern itself makes segments
/// mandatory.
pub fn validate_path_params(
    route: &RouteMeta,
    raw: &ParamVec,
    errors: &mut Vec<FieldError>,
) -> HashMap<String, Value> {
    let mut out = HashMap::new();

    for meta in route.path_params() {
        let loc = vec![json!("path"), json!(meta.name)];
        let found = raw
            .iter()
            .rfind(|(k, _)| k.as_ref() == meta.name)
            .map(|(_, v)| v.as_str());

        match found {
            Some(value) => {
                if let Some(coerced) = validate_one(meta, value, &loc, errors) {
                    out.insert(meta.name.clone(), coerced);
                }
            }
            None => match &meta.default {
                Some(default) => {
                    out.insert(meta.name.clone(), default.clone());
                }
                None => errors.push(FieldError::missing(loc)),
            },
        }
    }

    out
}

/// Validate every declared query parameter of a route.
///
/// Extraction happens under the wire key (the alias when one is declared);
/// the validated map is keyed by the declared name. Repeated keys collect
/// into a list for `repeated` parameters; for scalar parameters the last
/// occurrence wins.
pub fn validate_query_params(
    route: &RouteMeta,
    raw: &ParamVec,
    errors: &mut Vec<FieldError>,
) -> HashMap<String, Value> {
    let mut out = HashMap::new();

    for meta in route.query_params() {
        let wire = meta.wire_name();
        let loc = vec![json!("query"), json!(wire)];

        if meta.repeated {
            let values: Vec<&str> = raw
                .iter()
                .filter(|(k, _)| k.as_ref() == wire)
                .map(|(_, v)| v.as_str())
                .collect();

            if values.is_empty() {
                match &meta.default {
                    Some(default) => {
                        out.insert(meta.name.clone(), default.clone());
                    }
                    None if meta.required => errors.push(FieldError::missing(loc)),
                    None => {}
                }
                continue;
            }

            let mut items = Vec::with_capacity(values.len());
            let mut ok = true;
            for (i, value) in values.iter().enumerate() {
                let mut item_loc = loc.clone();
                item_loc.push(json!(i));
                match validate_one(meta, value, &item_loc, errors) {
                    Some(v) => items.push(v),
                    None => ok = false,
                }
            }
            if ok {
                out.insert(meta.name.clone(), Value::Array(items));
            }
            continue;
        }

        let found = raw
            .iter()
            .rfind(|(k, _)| k.as_ref() == wire)
            .map(|(_, v)| v.as_str());

        match found {
            Some(value) => {
                if let Some(coerced) = validate_one(meta, value, &loc, errors) {
                    out.insert(meta.name.clone(), coerced);
                }
            }
            None => match &meta.default {
                Some(default) => {
                    out.insert(meta.name.clone(), default.clone());
                }
                None if meta.required => errors.push(FieldError::missing(loc)),
                None => {}
            },
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Param;

    fn errs() -> Vec<FieldError> {
        Vec::new()
    }

    #[test]
    fn test_coerce_integer() {
        let loc = [json!("path"), json!("id")];
        assert_eq!(coerce(ParamType::Integer, "42", &loc).ok(), Some(json!(42)));
        assert!(coerce(ParamType::Integer, "4.2", &loc).is_err());
        assert!(coerce(ParamType::Integer, "abc", &loc).is_err());
    }

    #[test]
    fn test_coerce_boolean_lax_forms() {
        let loc = [json!("query"), json!("short")];
        for raw in ["true", "True", "1", "yes", "on"] {
            assert_eq!(coerce(ParamType::Boolean, raw, &loc).ok(), Some(json!(true)));
        }
        for raw in ["false", "0", "no", "off"] {
            assert_eq!(
                coerce(ParamType::Boolean, raw, &loc).ok(),
                Some(json!(false))
            );
        }
        assert!(coerce(ParamType::Boolean, "maybe", &loc).is_err());
    }

    #[test]
    fn test_coerce_number_rejects_non_finite() {
        let loc = [json!("query"), json!("x")];
        assert!(coerce(ParamType::Number, "inf", &loc).is_err());
        assert_eq!(coerce(ParamType::Number, "1.5", &loc).ok(), Some(json!(1.5)));
    }

    #[test]
    fn test_ge_bound() {
        let meta = Param::path("id", ParamType::Integer).ge(1.0);
        let mut errors = errs();
        let loc = [json!("path"), json!("id")];
        assert!(validate_one(&meta, "0", &loc, &mut errors).is_none());
        assert_eq!(errors[0].kind, "greater_than_equal");

        let mut errors = errs();
        assert_eq!(validate_one(&meta, "1", &loc, &mut errors), Some(json!(1)));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_pattern_and_length() {
        let meta = Param::query("q", ParamType::String)
            .min_length(3)
            .max_length(50)
            .pattern("^fixedquery$");
        let loc = [json!("query"), json!("q")];

        let mut errors = errs();
        assert!(validate_one(&meta, "foo", &loc, &mut errors).is_none());
        assert_eq!(errors[0].kind, "string_pattern_mismatch");

        let mut errors = errs();
        assert_eq!(
            validate_one(&meta, "fixedquery", &loc, &mut errors),
            Some(json!("fixedquery"))
        );
    }

    #[test]
    fn test_enum_membership() {
        let meta =
            Param::path("model_name", ParamType::String).one_of(&["alexnet", "resnet", "lenet"]);
        let loc = [json!("path"), json!("model_name")];

        let mut errors = errs();
        assert!(validate_one(&meta, "vgg", &loc, &mut errors).is_none());
        assert_eq!(errors[0].kind, "enum");

        let mut errors = errs();
        assert_eq!(
            validate_one(&meta, "resnet", &loc, &mut errors),
            Some(json!("resnet"))
        );
    }
}
