//! Declarative tool schema types.
//!
//! A tool is pure data: a name, a description, an HTTP method, a path
//! template and an ordered list of [`ParameterSpec`]s. Everything about how an
//! argument reaches the backend (path segment, query string or JSON body) is
//! derived from that data, never configured per tool.

use std::fmt;

use serde_json::{Map, Value, json};

/// HTTP methods supported by the admin API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Canonical upper-case method name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Whether non-path arguments travel in the JSON body for this method.
    pub fn carries_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Value type accepted for the entries of a map parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapValues {
    String,
    Unknown,
}

/// The closed set of argument shapes a tool can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    String,
    Number,
    Boolean,
    Enum(&'static [&'static str]),
    Array(&'static ParameterKind),
    Map(MapValues),
}

impl ParameterKind {
    /// Scalar kinds are the only ones allowed in a path segment.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::String | Self::Number)
    }

    /// Human-readable kind name used in validation messages.
    pub fn describe(&self) -> String {
        match self {
            Self::String => "string".to_string(),
            Self::Number => "number".to_string(),
            Self::Boolean => "boolean".to_string(),
            Self::Enum(values) => format!("one of [{}]", values.join(", ")),
            Self::Array(item) => format!("array of {}", item.describe()),
            Self::Map(MapValues::String) => "object of strings".to_string(),
            Self::Map(MapValues::Unknown) => "object".to_string(),
        }
    }

    /// JSON Schema fragment for this kind.
    pub fn json_schema(&self) -> Value {
        match self {
            Self::String => json!({ "type": "string" }),
            Self::Number => json!({ "type": "number" }),
            Self::Boolean => json!({ "type": "boolean" }),
            Self::Enum(values) => json!({ "type": "string", "enum": values }),
            Self::Array(item) => json!({ "type": "array", "items": item.json_schema() }),
            Self::Map(MapValues::String) => json!({
                "type": "object",
                "additionalProperties": { "type": "string" }
            }),
            Self::Map(MapValues::Unknown) => json!({
                "type": "object",
                "additionalProperties": {}
            }),
        }
    }
}

/// Default value substituted for an absent optional parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    String(&'static str),
    Number(i64),
    Boolean(bool),
}

impl DefaultValue {
    pub fn to_value(&self) -> Value {
        match *self {
            Self::String(s) => Value::from(s),
            Self::Number(n) => Value::from(n),
            Self::Boolean(b) => Value::from(b),
        }
    }
}

/// Where an argument is placed in the outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    Path,
    Query,
    Body,
}

/// One declared argument of a tool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub kind: ParameterKind,
    pub required: bool,
    pub default: Option<DefaultValue>,
    pub description: &'static str,
}

impl ParameterSpec {
    pub const fn required(
        name: &'static str,
        kind: ParameterKind,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            kind,
            required: true,
            default: None,
            description,
        }
    }

    pub const fn optional(
        name: &'static str,
        kind: ParameterKind,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            kind,
            required: false,
            default: None,
            description,
        }
    }

    /// Attach a default. Ignored for required parameters.
    pub const fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }
}

/// A declarative description of one admin API call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub method: HttpMethod,
    pub path: &'static str,
    pub parameters: &'static [ParameterSpec],
}

impl ToolDefinition {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        method: HttpMethod,
        path: &'static str,
        parameters: &'static [ParameterSpec],
    ) -> Self {
        Self {
            name,
            description,
            method,
            path,
            parameters,
        }
    }

    /// Placeholder names appearing as `{name}` in the path template, in order.
    pub fn placeholders(&self) -> Vec<&'static str> {
        path_placeholders(self.path)
    }

    /// Derive the placement of a parameter.
    ///
    /// Path if it names a placeholder, otherwise query for GET/DELETE and
    /// body for POST/PUT/PATCH.
    pub fn placement_of(&self, parameter: &ParameterSpec) -> Placement {
        if self.placeholders().contains(&parameter.name) {
            Placement::Path
        } else if self.method.carries_body() {
            Placement::Body
        } else {
            Placement::Query
        }
    }

    /// Declared parameter by name.
    pub fn parameter(&self, name: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Whether any parameter ends up in the JSON body.
    pub fn has_body_parameters(&self) -> bool {
        self.parameters
            .iter()
            .any(|p| self.placement_of(p) == Placement::Body)
    }

    /// JSON Schema object describing the tool's arguments.
    pub fn input_schema(&self) -> Map<String, Value> {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for param in self.parameters {
            let mut schema = param.kind.json_schema();
            if let Some(obj) = schema.as_object_mut() {
                if !param.description.is_empty() {
                    obj.insert("description".into(), Value::from(param.description));
                }
                if let Some(default) = param.default.filter(|_| !param.required) {
                    obj.insert("default".into(), default.to_value());
                }
            }
            properties.insert(param.name.to_string(), schema);
            if param.required {
                required.push(Value::from(param.name));
            }
        }

        let mut schema = Map::new();
        schema.insert("type".into(), Value::from("object"));
        schema.insert("properties".into(), Value::Object(properties));
        if !required.is_empty() {
            schema.insert("required".into(), Value::Array(required));
        }
        schema.insert("additionalProperties".into(), Value::Bool(false));
        schema
    }
}

/// Extract `{name}` placeholders from a path template.
///
/// Unterminated braces are not placeholders; [`super::ToolRegistry::verify`]
/// reports them.
pub fn path_placeholders(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                names.push(&after[..end]);
                rest = &after[end + 1..];
            }
            None => break,
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEM_PARAMS: &[ParameterSpec] = &[
        ParameterSpec::required("id", ParameterKind::Number, "Item ID"),
        ParameterSpec::optional("name", ParameterKind::String, "Item name"),
        ParameterSpec::optional("page", ParameterKind::Number, "")
            .with_default(DefaultValue::Number(1)),
    ];

    #[test]
    fn test_path_placeholders() {
        assert_eq!(path_placeholders("/admin/products"), Vec::<&str>::new());
        assert_eq!(path_placeholders("/admin/users/{id}/wallet"), vec!["id"]);
        assert_eq!(
            path_placeholders("/a/{role}/b/{id}"),
            vec!["role", "id"]
        );
        assert_eq!(path_placeholders("/a/{broken"), Vec::<&str>::new());
    }

    #[test]
    fn test_placement_derivation() {
        let get = ToolDefinition::new("t", "", HttpMethod::Get, "/items/{id}", ITEM_PARAMS);
        assert_eq!(get.placement_of(&ITEM_PARAMS[0]), Placement::Path);
        assert_eq!(get.placement_of(&ITEM_PARAMS[1]), Placement::Query);

        let delete = ToolDefinition::new("t", "", HttpMethod::Delete, "/items", ITEM_PARAMS);
        assert_eq!(delete.placement_of(&ITEM_PARAMS[0]), Placement::Query);
        assert!(!delete.has_body_parameters());

        let put = ToolDefinition::new("t", "", HttpMethod::Put, "/items/{id}", ITEM_PARAMS);
        assert_eq!(put.placement_of(&ITEM_PARAMS[0]), Placement::Path);
        assert_eq!(put.placement_of(&ITEM_PARAMS[1]), Placement::Body);
        assert!(put.has_body_parameters());
    }

    #[test]
    fn test_input_schema() {
        let def = ToolDefinition::new("t", "", HttpMethod::Get, "/items/{id}", ITEM_PARAMS);
        let schema = Value::Object(def.input_schema());

        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["id"]));
        assert_eq!(schema["additionalProperties"], false);
        assert_eq!(schema["properties"]["id"]["type"], "number");
        assert_eq!(schema["properties"]["id"]["description"], "Item ID");
        assert_eq!(schema["properties"]["page"]["default"], 1);
        assert!(schema["properties"]["page"].get("description").is_none());
    }

    #[test]
    fn test_nested_kind_schema() {
        const IDS: ParameterKind = ParameterKind::Array(&ParameterKind::Number);
        assert_eq!(
            IDS.json_schema(),
            json!({ "type": "array", "items": { "type": "number" } })
        );
        assert_eq!(
            ParameterKind::Enum(&["low", "out"]).json_schema(),
            json!({ "type": "string", "enum": ["low", "out"] })
        );
        assert_eq!(IDS.describe(), "array of number");
    }

    #[test]
    fn test_method_body_rules() {
        assert!(!HttpMethod::Get.carries_body());
        assert!(!HttpMethod::Delete.carries_body());
        assert!(HttpMethod::Post.carries_body());
        assert!(HttpMethod::Patch.carries_body());
        assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
    }
}
