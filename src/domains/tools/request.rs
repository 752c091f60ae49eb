//! Request construction from a tool definition and validated arguments.

use serde_json::{Map, Value};

use super::error::ToolError;
use super::schema::{HttpMethod, Placement, ToolDefinition};
use super::validator::ValidatedArgs;

/// A fully resolved backend request, relative to the API root.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl HttpRequest {
    /// Path plus encoded query string, e.g. `/admin/products?page=2`.
    pub fn url(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        match serde_urlencoded::to_string(&self.query) {
            Ok(qs) => format!("{}?{}", self.path, qs),
            Err(_) => self.path.clone(),
        }
    }
}

/// Build the request for `def` from arguments already passed through
/// [`super::validator::validate`].
///
/// A placeholder that cannot be resolved is a defect in the definition and is
/// reported as [`ToolError::Internal`].
pub fn build(def: &ToolDefinition, args: &ValidatedArgs) -> Result<HttpRequest, ToolError> {
    let mut path = def.path.to_string();
    let mut query = Vec::new();
    let mut body = Map::new();

    for param in def.parameters {
        let placement = def.placement_of(param);
        let Some(value) = args.get(param.name) else {
            if placement == Placement::Path {
                return Err(ToolError::internal(format!(
                    "tool '{}': no value for path placeholder '{{{}}}'",
                    def.name, param.name
                )));
            }
            continue;
        };

        match placement {
            Placement::Path => {
                let segment = scalar_text(value).ok_or_else(|| {
                    ToolError::internal(format!(
                        "tool '{}': path parameter '{}' is not a scalar",
                        def.name, param.name
                    ))
                })?;
                path = path.replace(&format!("{{{}}}", param.name), &encode_component(&segment));
            }
            Placement::Query => push_query(&mut query, param.name, value),
            Placement::Body => {
                body.insert(param.name.to_string(), value.clone());
            }
        }
    }

    if path.contains('{') || path.contains('}') {
        return Err(ToolError::internal(format!(
            "tool '{}': unresolved placeholder in '{}'",
            def.name, path
        )));
    }

    let body = def.has_body_parameters().then_some(Value::Object(body));

    Ok(HttpRequest {
        method: def.method,
        path,
        query,
        body,
    })
}

fn push_query(query: &mut Vec<(String, String)>, name: &str, value: &Value) {
    match value {
        Value::Array(items) => {
            for item in items {
                push_query(query, name, item);
            }
        }
        Value::Object(_) => query.push((name.to_string(), value.to_string())),
        other => {
            if let Some(text) = scalar_text(other) {
                query.push((name.to_string(), text));
            }
        }
    }
}

/// String form of a scalar JSON value.
///
/// Integral numbers are rendered without a fractional part so that `42.0`
/// from a client still addresses `/items/42`.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i.to_string())
            } else if let Some(u) = n.as_u64() {
                Some(u.to_string())
            } else {
                n.as_f64().map(|f| {
                    if f.fract() == 0.0 && f.abs() < 9_007_199_254_740_992.0 {
                        (f as i64).to_string()
                    } else {
                        f.to_string()
                    }
                })
            }
        }
        _ => None,
    }
}

/// Percent-encode a value for use as a single path segment.
///
/// Keeps the same unreserved set as `encodeURIComponent`.
fn encode_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'~'
            | b'!'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::schema::{MapValues, ParameterKind, ParameterSpec};
    use serde_json::json;

    const UPDATE: ToolDefinition = ToolDefinition::new(
        "update_thing",
        "",
        HttpMethod::Put,
        "/admin/things/{id}",
        &[
            ParameterSpec::required("id", ParameterKind::Number, ""),
            ParameterSpec::optional("name", ParameterKind::String, ""),
            ParameterSpec::optional("tags", ParameterKind::Array(&ParameterKind::String), ""),
        ],
    );

    const LIST: ToolDefinition = ToolDefinition::new(
        "list_things",
        "",
        HttpMethod::Get,
        "/admin/things",
        &[
            ParameterSpec::optional("page", ParameterKind::Number, ""),
            ParameterSpec::optional("keyword", ParameterKind::String, ""),
            ParameterSpec::optional("is_active", ParameterKind::Boolean, ""),
            ParameterSpec::optional("ids", ParameterKind::Array(&ParameterKind::Number), ""),
            ParameterSpec::optional("filter", ParameterKind::Map(MapValues::Unknown), ""),
        ],
    );

    const DELETE_ROLE: ToolDefinition = ToolDefinition::new(
        "delete_role",
        "",
        HttpMethod::Delete,
        "/admin/roles/{role}",
        &[ParameterSpec::required("role", ParameterKind::String, "")],
    );

    fn args(value: Value) -> ValidatedArgs {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_put_splits_path_and_body() {
        let req = build(&UPDATE, &args(json!({ "id": 7, "name": "x" }))).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "/admin/things/7");
        assert!(req.query.is_empty());
        assert_eq!(req.body, Some(json!({ "name": "x" })));
    }

    #[test]
    fn test_body_present_even_when_no_optional_provided() {
        let req = build(&UPDATE, &args(json!({ "id": 7 }))).unwrap();
        assert_eq!(req.body, Some(json!({})));
    }

    #[test]
    fn test_get_uses_query_and_no_body() {
        let req = build(
            &LIST,
            &args(json!({ "page": 2, "keyword": "a b&c", "is_active": false })),
        )
        .unwrap();
        assert_eq!(req.body, None);
        assert_eq!(
            req.query,
            vec![
                ("page".to_string(), "2".to_string()),
                ("keyword".to_string(), "a b&c".to_string()),
                ("is_active".to_string(), "false".to_string()),
            ]
        );
        assert_eq!(req.url(), "/admin/things?page=2&keyword=a+b%26c&is_active=false");
    }

    #[test]
    fn test_get_without_arguments_has_bare_path() {
        let req = build(&LIST, &Map::new()).unwrap();
        assert_eq!(req.url(), "/admin/things");
        assert!(req.body.is_none());
    }

    #[test]
    fn test_query_arrays_and_maps() {
        let req = build(&LIST, &args(json!({ "ids": [1, 2], "filter": { "a": 1 } }))).unwrap();
        assert_eq!(
            req.query,
            vec![
                ("ids".to_string(), "1".to_string()),
                ("ids".to_string(), "2".to_string()),
                ("filter".to_string(), r#"{"a":1}"#.to_string()),
            ]
        );
    }

    #[test]
    fn test_path_values_are_percent_encoded() {
        let req = build(&DELETE_ROLE, &args(json!({ "role": "ops/admin team" }))).unwrap();
        assert_eq!(req.path, "/admin/roles/ops%2Fadmin%20team");
        assert!(req.body.is_none());
    }

    #[test]
    fn test_integral_float_renders_as_integer() {
        let req = build(&UPDATE, &args(json!({ "id": 42.0 }))).unwrap();
        assert_eq!(req.path, "/admin/things/42");
        assert_eq!(scalar_text(&json!(1.5)).as_deref(), Some("1.5"));
    }

    #[test]
    fn test_missing_path_value_is_internal() {
        let err = build(&UPDATE, &Map::new()).unwrap_err();
        assert!(matches!(err, ToolError::Internal(_)));
    }

    #[test]
    fn test_orphan_placeholder_is_internal() {
        const BROKEN: ToolDefinition = ToolDefinition::new(
            "broken",
            "",
            HttpMethod::Get,
            "/admin/things/{thing_id}",
            &[ParameterSpec::required("id", ParameterKind::Number, "")],
        );
        let err = build(&BROKEN, &args(json!({ "id": 1 }))).unwrap_err();
        assert!(matches!(err, ToolError::Internal(_)));
    }

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("abc-_.~!*'()"), "abc-_.~!*'()");
        assert_eq!(encode_component("a/b?c"), "a%2Fb%3Fc");
        assert_eq!(encode_component("卡"), "%E5%8D%A1");
    }
}
