//! Argument validation against a tool's parameter list.
//!
//! Validation is strict: every declared parameter is type-checked, required
//! parameters must be present, defaults are filled in for absent optional
//! ones and undeclared keys are rejected. Absent optional parameters without a
//! default are omitted from the output, never set to `null`.

use serde_json::{Map, Value};

use super::error::ValidationError;
use super::schema::{MapValues, ParameterKind, ParameterSpec};

/// Arguments that passed validation, keyed by parameter name.
pub type ValidatedArgs = Map<String, Value>;

/// Validate `arguments` against `parameters`.
pub fn validate(
    parameters: &[ParameterSpec],
    arguments: &Map<String, Value>,
) -> Result<ValidatedArgs, ValidationError> {
    let mut validated = Map::new();

    for param in parameters {
        match arguments.get(param.name) {
            Some(value) => {
                check_kind(param.name, &param.kind, value)?;
                validated.insert(param.name.to_string(), value.clone());
            }
            None if param.required => return Err(ValidationError::missing(param.name)),
            None => {
                if let Some(default) = param.default {
                    validated.insert(param.name.to_string(), default.to_value());
                }
            }
        }
    }

    if let Some(unknown) = arguments
        .keys()
        .find(|key| !parameters.iter().any(|p| p.name == key.as_str()))
    {
        return Err(ValidationError::unknown(unknown.as_str()));
    }

    Ok(validated)
}

/// Check a single value against a kind. `field` names the value in errors.
fn check_kind(field: &str, kind: &ParameterKind, value: &Value) -> Result<(), ValidationError> {
    let mismatch = || ValidationError::type_mismatch(field, kind.describe(), json_type(value));

    match kind {
        ParameterKind::String => value.as_str().map(|_| ()).ok_or_else(mismatch),
        ParameterKind::Number => match value.as_f64() {
            Some(n) if n.is_finite() => Ok(()),
            _ => Err(mismatch()),
        },
        ParameterKind::Boolean => value.as_bool().map(|_| ()).ok_or_else(mismatch),
        ParameterKind::Enum(allowed) => {
            let s = value.as_str().ok_or_else(mismatch)?;
            if allowed.iter().any(|a| *a == s) {
                Ok(())
            } else {
                Err(ValidationError::not_allowed(field, allowed))
            }
        }
        ParameterKind::Array(item) => {
            let items = value.as_array().ok_or_else(mismatch)?;
            for (index, element) in items.iter().enumerate() {
                check_kind(&format!("{}[{}]", field, index), item, element)?;
            }
            Ok(())
        }
        ParameterKind::Map(values) => {
            let entries = value.as_object().ok_or_else(mismatch)?;
            if *values == MapValues::String {
                for (key, entry) in entries {
                    if !entry.is_string() {
                        return Err(ValidationError::type_mismatch(
                            format!("{}.{}", field, key),
                            "string",
                            json_type(entry),
                        ));
                    }
                }
            }
            Ok(())
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::error::ValidationReason;
    use crate::domains::tools::schema::DefaultValue;
    use serde_json::json;

    const STATUS: ParameterKind = ParameterKind::Enum(&["available", "reserved", "used"]);

    const PARAMS: &[ParameterSpec] = &[
        ParameterSpec::required("id", ParameterKind::Number, "ID"),
        ParameterSpec::optional("keyword", ParameterKind::String, ""),
        ParameterSpec::optional("is_active", ParameterKind::Boolean, ""),
        ParameterSpec::optional("status", STATUS, ""),
        ParameterSpec::optional("ids", ParameterKind::Array(&ParameterKind::Number), ""),
        ParameterSpec::optional("title", ParameterKind::Map(MapValues::String), ""),
        ParameterSpec::optional("config", ParameterKind::Map(MapValues::Unknown), ""),
        ParameterSpec::optional("page_size", ParameterKind::Number, "")
            .with_default(DefaultValue::Number(20)),
    ];

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_valid_arguments_pass_through() {
        let input = args(json!({
            "id": 42,
            "keyword": "vip",
            "is_active": true,
            "status": "used",
            "ids": [1, 2.5],
            "title": { "en-US": "Card", "zh-CN": "卡" },
            "config": { "key": 1, "nested": { "a": null } },
        }));
        let validated = validate(PARAMS, &input).unwrap();
        assert_eq!(validated["id"], 42);
        assert_eq!(validated["status"], "used");
        assert_eq!(validated["config"]["key"], 1);
    }

    #[test]
    fn test_missing_required() {
        let err = validate(PARAMS, &args(json!({ "keyword": "x" }))).unwrap_err();
        assert_eq!(err.field, "id");
        assert_eq!(err.reason, ValidationReason::Missing);
    }

    #[test]
    fn test_absent_optional_omitted_and_default_applied() {
        let validated = validate(PARAMS, &args(json!({ "id": 1 }))).unwrap();
        assert!(!validated.contains_key("keyword"));
        assert!(!validated.contains_key("is_active"));
        assert_eq!(validated["page_size"], 20);
        assert_eq!(validated.len(), 2);
    }

    #[test]
    fn test_explicit_value_overrides_default() {
        let validated = validate(PARAMS, &args(json!({ "id": 1, "page_size": 50 }))).unwrap();
        assert_eq!(validated["page_size"], 50);
    }

    #[test]
    fn test_type_mismatch() {
        let err = validate(PARAMS, &args(json!({ "id": "42" }))).unwrap_err();
        assert_eq!(
            err.reason,
            ValidationReason::TypeMismatch {
                expected: "number".into(),
                got: "string".into()
            }
        );

        let err = validate(PARAMS, &args(json!({ "id": 1, "keyword": null }))).unwrap_err();
        assert_eq!(err.field, "keyword");
    }

    #[test]
    fn test_enum_membership() {
        let err = validate(PARAMS, &args(json!({ "id": 1, "status": "gone" }))).unwrap_err();
        assert_eq!(err.field, "status");
        match err.reason {
            ValidationReason::NotAllowed { allowed } => {
                assert_eq!(allowed, vec!["available", "reserved", "used"]);
            }
            other => panic!("unexpected reason: {:?}", other),
        }
    }

    #[test]
    fn test_nested_element_errors_name_the_element() {
        let err = validate(PARAMS, &args(json!({ "id": 1, "ids": [1, "two"] }))).unwrap_err();
        assert_eq!(err.field, "ids[1]");

        let err = validate(PARAMS, &args(json!({ "id": 1, "title": { "en-US": 3 } })))
            .unwrap_err();
        assert_eq!(err.field, "title.en-US");

        let err = validate(PARAMS, &args(json!({ "id": 1, "config": [] }))).unwrap_err();
        assert_eq!(err.field, "config");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = validate(PARAMS, &args(json!({ "id": 1, "price": 100 }))).unwrap_err();
        assert_eq!(err, ValidationError::unknown("price"));
    }

    #[test]
    fn test_declared_errors_reported_before_unknown_keys() {
        let err = validate(PARAMS, &args(json!({ "price": 100 }))).unwrap_err();
        assert_eq!(err, ValidationError::missing("id"));
    }

    #[test]
    fn test_empty_schema() {
        assert!(validate(&[], &Map::new()).unwrap().is_empty());
        assert!(validate(&[], &args(json!({ "x": 1 }))).is_err());
    }
}
