use serde::Serialize;
use serde_json::{json, Value};

/// One field-addressed validation failure.
///
/// Serializes to the wire shape `{"type", "loc", "msg", "input"}`. `loc`
/// starts with the parameter source (`path`, `query` or `body`) followed by
/// the field path; array indices appear as numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    #[serde(rename = "type")]
    pub kind: String,
    pub loc: Vec<Value>,
    pub msg: String,
    pub input: Value,
}

impl FieldError {
    pub fn new(
        kind: impl Into<String>,
        loc: Vec<Value>,
        msg: impl Into<String>,
        input: Value,
    ) -> Self {
        FieldError {
            kind: kind.into(),
            loc,
            msg: msg.into(),
            input,
        }
    }

    pub fn missing(loc: Vec<Value>) -> Self {
        Self::new("missing", loc, "Field required", Value::Null)
    }

    pub fn int_parsing(loc: Vec<Value>, input: &str) -> Self {
        Self::new(
            "int_parsing",
            loc,
            "Input should be a valid integer, unable to parse string as an integer",
            json!(input),
        )
    }

    pub fn float_parsing(loc: Vec<Value>, input: &str) -> Self {
        Self::new(
            "float_parsing",
            loc,
            "Input should be a valid number, unable to parse string as a number",
            json!(input),
        )
    }

    pub fn bool_parsing(loc: Vec<Value>, input: &str) -> Self {
        Self::new(
            "bool_parsing",
            loc,
            "Input should be a valid boolean, unable to parse the input",
            json!(input),
        )
    }

    pub fn int_type(loc: Vec<Value>, input: Value) -> Self {
        Self::new("int_type", loc, "Input should be a valid integer", input)
    }

    pub fn float_type(loc: Vec<Value>, input: Value) -> Self {
        Self::new("float_type", loc, "Input should be a valid number", input)
    }

    pub fn greater_than(loc: Vec<Value>, limit: f64, input: Value) -> Self {
        Self::new(
            "greater_than",
            loc,
            format!("Input should be greater than {limit}"),
            input,
        )
    }

    pub fn greater_than_equal(loc: Vec<Value>, limit: f64, input: Value) -> Self {
        Self::new(
            "greater_than_equal",
            loc,
            format!("Input should be greater than or equal to {limit}"),
            input,
        )
    }

    pub fn less_than(loc: Vec<Value>, limit: f64, input: Value) -> Self {
        Self::new(
            "less_than",
            loc,
            format!("Input should be less than {limit}"),
            input,
        )
    }

    pub fn less_than_equal(loc: Vec<Value>, limit: f64, input: Value) -> Self {
        Self::new(
            "less_than_equal",
            loc,
            format!("Input should be less than or equal to {limit}"),
            input,
        )
    }

    pub fn string_too_short(loc: Vec<Value>, min: usize, input: &str) -> Self {
        Self::new(
            "string_too_short",
            loc,
            format!("String should have at least {min} characters"),
            json!(input),
        )
    }

    pub fn string_too_long(loc: Vec<Value>, max: usize, input: &str) -> Self {
        Self::new(
            "string_too_long",
            loc,
            format!("String should have at most {max} characters"),
            json!(input),
        )
    }

    pub fn pattern_mismatch(loc: Vec<Value>, pattern: &str, input: &str) -> Self {
        Self::new(
            "string_pattern_mismatch",
            loc,
            format!("String should match pattern '{pattern}'"),
            json!(input),
        )
    }

    pub fn enum_member(loc: Vec<Value>, allowed: &[String], input: &str) -> Self {
        let quoted: Vec<String> = allowed.iter().map(|a| format!("'{a}'")).collect();
        let expected = match quoted.split_last() {
            Some((last, rest)) if !rest.is_empty() => {
                format!("{} or {last}", rest.join(", "))
            }
            _ => quoted.join(""),
        };
        Self::new(
            "enum",
            loc,
            format!("Input should be {expected}"),
            json!(input),
        )
    }

    pub fn not_object(loc: Vec<Value>, input: Value) -> Self {
        Self::new(
            "model_attributes_type",
            loc,
            "Input should be a valid dictionary or object to extract fields from",
            input,
        )
    }

    /// A failure reported by JSON Schema validation of a structured body.
    pub fn schema(loc: Vec<Value>, msg: impl Into<String>, input: Value) -> Self {
        Self::new("schema", loc, msg, input)
    }
}

/// The single error category of the request path: one or more inputs failed
/// type conversion or a declared constraint.
///
/// Never caught or retried internally; the server renders [`Self::detail`] as
/// the 422 response body and dispatch is aborted before the handler runs.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Wire shape: `{"detail": [ ...field errors... ]}`.
    pub fn detail(&self) -> Value {
        json!({ "detail": self.errors })
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} validation error(s)", self.errors.len())?;
        for err in &self.errors {
            let loc: Vec<String> = err
                .loc
                .iter()
                .map(|v| match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect();
            writeln!(f, "  {}: {} ({})", loc.join("."), err.msg, err.kind)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
