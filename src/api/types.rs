use http::Method;
use regex::Regex;
use serde_json::Value;

/// Where a declared parameter is extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    Path,
    Query,
}

impl std::fmt::Display for ParamLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamLocation::Path => write!(f, "path"),
            ParamLocation::Query => write!(f, "query"),
        }
    }
}

/// Declared scalar type of a parameter. Drives the coercion function applied
/// to the raw request value before constraint checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Integer,
    Number,
    Boolean,
    String,
}

impl std::fmt::Display for ParamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ParamType::Integer => "integer",
            ParamType::Number => "number",
            ParamType::Boolean => "boolean",
            ParamType::String => "string",
        };
        write!(f, "{s}")
    }
}

/// A named JSON Schema for a structured body model.
///
/// The `name` keys the process-wide compiled-validator cache, so two routes
/// referencing the same model share one compiled schema.
#[derive(Debug, Clone)]
pub struct ModelSchema {
    pub name: &'static str,
    pub schema: Value,
}

/// Full declaration of a single path or query parameter.
///
/// Construct with [`ParamMeta::path`] / [`ParamMeta::query`] and refine with
/// the chaining methods. Metadata fields (`title`, `description`,
/// `deprecated`, `include_in_schema`) exist for documentation consumers only
/// and never influence validation results or response content.
#[derive(Debug, Clone)]
pub struct ParamMeta {
    pub name: String,
    pub location: ParamLocation,
    pub ty: ParamType,
    pub required: bool,
    pub default: Option<Value>,
    /// Wire-level key overriding `name` for query extraction.
    pub alias: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub deprecated: bool,
    pub include_in_schema: bool,
    /// Collect every occurrence of the key into a list instead of one value.
    pub repeated: bool,
    /// Fixed set of admissible values (enumerated path segments).
    pub allowed: Option<Vec<String>>,
    pub gt: Option<f64>,
    pub ge: Option<f64>,
    pub lt: Option<f64>,
    pub le: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Regex>,
}

/// Short alias used in route tables.
pub type Param = ParamMeta;

impl ParamMeta {
    fn new(name: &str, location: ParamLocation, ty: ParamType, required: bool) -> Self {
        ParamMeta {
            name: name.to_string(),
            location,
            ty,
            required,
            default: None,
            alias: None,
            title: None,
            description: None,
            deprecated: false,
            include_in_schema: true,
            repeated: false,
            allowed: None,
            gt: None,
            ge: None,
            lt: None,
            le: None,
            min_length: None,
            max_length: None,
            pattern: None,
        }
    }

    /// A path segment parameter. Always required unless a default is given.
    pub fn path(name: &str, ty: ParamType) -> Self {
        Self::new(name, ParamLocation::Path, ty, true)
    }

    /// A query string parameter. Optional by default; see [`ParamMeta::required`]
    /// and [`ParamMeta::default_value`].
    pub fn query(name: &str, ty: ParamType) -> Self {
        Self::new(name, ParamLocation::Query, ty, false)
    }

    /// Mark the parameter required (the explicit "no default, must be sent"
    /// declaration for query parameters).
    pub fn required(mut self) -> Self {
        self.required = true;
        self.default = None;
        self
    }

    /// Value substituted when the parameter is absent from the request.
    pub fn default_value(mut self, value: Value) -> Self {
        self.default = Some(value);
        self.required = false;
        self
    }

    /// Wire-level key used instead of `name` when extracting from the query
    /// string (e.g. a key like `item-query` that is not a valid identifier).
    pub fn alias(mut self, alias: &str) -> Self {
        self.alias = Some(alias.to_string());
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// Exclude from generated documentation. Validation is unaffected.
    pub fn hidden(mut self) -> Self {
        self.include_in_schema = false;
        self
    }

    /// Accept the key multiple times and deliver a list of coerced values.
    pub fn list(mut self) -> Self {
        self.repeated = true;
        self
    }

    /// Restrict the value to a fixed set of named members.
    pub fn one_of(mut self, allowed: &[&str]) -> Self {
        self.allowed = Some(allowed.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn gt(mut self, limit: f64) -> Self {
        self.gt = Some(limit);
        self
    }

    pub fn ge(mut self, limit: f64) -> Self {
        self.ge = Some(limit);
        self
    }

    pub fn lt(mut self, limit: f64) -> Self {
        self.lt = Some(limit);
        self
    }

    pub fn le(mut self, limit: f64) -> Self {
        self.le = Some(limit);
        self
    }

    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    /// Anchor regex the string value must match.
    ///
    /// # Panics
    ///
    /// Panics at declaration time if the pattern is not a valid regex; an
    /// unparseable pattern is a configuration error, not a request error.
    pub fn pattern(mut self, pattern: &str) -> Self {
        #[allow(clippy::expect_used)]
        let re = Regex::new(pattern).expect("parameter pattern must be a valid regex");
        self.pattern = Some(re);
        self
    }

    /// The key this parameter is read from on the wire.
    pub fn wire_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

/// How the JSON body maps onto declared parameters.
#[derive(Debug, Clone)]
pub enum BodyBinding {
    /// Exactly one structured parameter, no explicit marker: the whole body
    /// *is* the model.
    Model { name: String, schema: ModelSchema },
    /// Single structured parameter explicitly embedded: the body is still an
    /// object keyed by the parameter name.
    Embed { name: String, schema: ModelSchema },
    /// Several body parameters (or a singular value explicitly marked as
    /// body): the body is an object whose keys are the parameter names.
    Fields(Vec<BodyField>),
    /// Arbitrary mapping with typed keys and values, parsed from a
    /// string-keyed JSON object (e.g. integer keys to float values).
    Map { key: ParamType, value: ParamType },
}

/// One named section of a multi-parameter body.
#[derive(Debug, Clone)]
pub struct BodyField {
    pub name: String,
    pub kind: BodyFieldKind,
    pub required: bool,
}

#[derive(Debug, Clone)]
pub enum BodyFieldKind {
    Model(ModelSchema),
    Scalar(ParamType),
}

impl BodyField {
    pub fn model(name: &str, schema: ModelSchema) -> Self {
        BodyField {
            name: name.to_string(),
            kind: BodyFieldKind::Model(schema),
            required: true,
        }
    }

    pub fn scalar(name: &str, ty: ParamType) -> Self {
        BodyField {
            name: name.to_string(),
            kind: BodyFieldKind::Scalar(ty),
            required: true,
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// Request body declaration for a route.
#[derive(Debug, Clone)]
pub struct BodyMeta {
    pub required: bool,
    pub binding: BodyBinding,
}

/// Complete declaration of one route: the unit the router matches against and
/// the validator reads its rules from.
#[derive(Debug, Clone)]
pub struct RouteMeta {
    pub method: Method,
    pub path_pattern: String,
    pub handler_name: String,
    pub params: Vec<ParamMeta>,
    pub body: Option<BodyMeta>,
}

impl RouteMeta {
    /// Attach a parameter declaration.
    pub fn param(&mut self, param: ParamMeta) -> &mut Self {
        self.params.push(param);
        self
    }

    /// Declare the whole body as a single model.
    pub fn body_model(&mut self, name: &str, schema: ModelSchema) -> &mut Self {
        self.body = Some(BodyMeta {
            required: true,
            binding: BodyBinding::Model {
                name: name.to_string(),
                schema,
            },
        });
        self
    }

    /// Declare a single model wrapped in an object keyed by its name.
    pub fn body_embed(&mut self, name: &str, schema: ModelSchema) -> &mut Self {
        self.body = Some(BodyMeta {
            required: true,
            binding: BodyBinding::Embed {
                name: name.to_string(),
                schema,
            },
        });
        self
    }

    /// Declare a body object keyed by parameter names.
    pub fn body_fields(&mut self, fields: Vec<BodyField>) -> &mut Self {
        self.body = Some(BodyMeta {
            required: true,
            binding: BodyBinding::Fields(fields),
        });
        self
    }

    /// Declare an arbitrary typed mapping body.
    pub fn body_map(&mut self, key: ParamType, value: ParamType) -> &mut Self {
        self.body = Some(BodyMeta {
            required: true,
            binding: BodyBinding::Map { key, value },
        });
        self
    }

    /// Allow the request to omit the declared body entirely.
    pub fn optional_body(&mut self) -> &mut Self {
        if let Some(body) = self.body.as_mut() {
            body.required = false;
        }
        self
    }

    /// Path parameters declared on this route, in declaration order.
    pub fn path_params(&self) -> impl Iterator<Item = &ParamMeta> {
        self.params
            .iter()
            .filter(|p| p.location == ParamLocation::Path)
    }

    /// Query parameters declared on this route, in declaration order.
    pub fn query_params(&self) -> impl Iterator<Item = &ParamMeta> {
        self.params
            .iter()
            .filter(|p| p.location == ParamLocation::Query)
    }
}
