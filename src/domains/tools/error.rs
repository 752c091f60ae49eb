//! Tool-specific error types.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

/// Why a single argument was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationReason {
    /// A required parameter was not supplied.
    Missing,
    /// The argument is not declared by the tool.
    Unknown,
    /// The argument has the wrong JSON type.
    TypeMismatch { expected: String, got: String },
    /// The argument is not one of the declared enum values.
    NotAllowed { allowed: Vec<String> },
}

/// A rejected argument, naming the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ValidationError {
    pub field: String,
    pub reason: ValidationReason,
}

impl ValidationError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: ValidationReason::Missing,
        }
    }

    pub fn unknown(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: ValidationReason::Unknown,
        }
    }

    pub fn type_mismatch(
        field: impl Into<String>,
        expected: impl Into<String>,
        got: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            reason: ValidationReason::TypeMismatch {
                expected: expected.into(),
                got: got.into(),
            },
        }
    }

    pub fn not_allowed(field: impl Into<String>, allowed: &[&str]) -> Self {
        Self {
            field: field.into(),
            reason: ValidationReason::NotAllowed {
                allowed: allowed.iter().map(|s| s.to_string()).collect(),
            },
        }
    }

    /// Structured detail for clients rendering the failure.
    pub fn detail(&self) -> Value {
        match &self.reason {
            ValidationReason::Missing => json!({ "field": self.field, "reason": "missing" }),
            ValidationReason::Unknown => json!({ "field": self.field, "reason": "unknown" }),
            ValidationReason::TypeMismatch { expected, got } => json!({
                "field": self.field,
                "reason": "type_mismatch",
                "expected": expected,
                "got": got,
            }),
            ValidationReason::NotAllowed { allowed } => json!({
                "field": self.field,
                "reason": "not_allowed",
                "allowed": allowed,
            }),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            ValidationReason::Missing => write!(f, "'{}': missing", self.field),
            ValidationReason::Unknown => write!(f, "'{}': unknown", self.field),
            ValidationReason::TypeMismatch { expected, got } => {
                write!(f, "'{}': expected {}, got {}", self.field, expected, got)
            }
            ValidationReason::NotAllowed { allowed } => {
                write!(f, "'{}': must be one of [{}]", self.field, allowed.join(", "))
            }
        }
    }
}

/// Category of a [`ToolError`], stable across message wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    DuplicateName,
    NotFound,
    Validation,
    Internal,
    Transport,
    Network,
}

/// Errors that can occur during tool registration or invocation.
#[derive(Debug, Error)]
pub enum ToolError {
    /// A tool with this name is already registered.
    #[error("Duplicate tool name: {0}")]
    DuplicateName(String),

    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    Validation(#[from] ValidationError),

    /// A tool definition is inconsistent. Never caused by caller input.
    #[error("Internal error: {0}")]
    Internal(String),

    /// The backend answered with a non-success status.
    #[error("Backend returned HTTP {status}")]
    Transport { status: u16, body: String },

    /// No response was obtained from the backend.
    #[error("Network error: {cause}")]
    Network { cause: String },
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "duplicate name" error.
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName(name.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Create a new "network" error.
    pub fn network(cause: impl Into<String>) -> Self {
        Self::Network {
            cause: cause.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateName(_) => ErrorKind::DuplicateName,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Internal(_) => ErrorKind::Internal,
            Self::Transport { .. } => ErrorKind::Transport,
            Self::Network { .. } => ErrorKind::Network,
        }
    }

    /// Structured detail accompanying the message, if any.
    ///
    /// For backend rejections the body is returned as parsed JSON when it is
    /// JSON, otherwise as the verbatim text.
    pub fn detail(&self) -> Option<Value> {
        match self {
            Self::Validation(e) => Some(e.detail()),
            Self::NotFound(name) | Self::DuplicateName(name) => Some(json!({ "tool": name })),
            Self::Transport { status, body } => Some(json!({
                "status": status,
                "body": backend_body_value(body),
            })),
            Self::Network { cause } => Some(json!({ "cause": cause })),
            Self::Internal(_) => None,
        }
    }

    /// Message suitable for showing to an MCP client.
    ///
    /// Backend rejections include the pretty-printed backend body so the
    /// caller can see why the request was refused.
    pub fn render(&self) -> String {
        match self {
            Self::Transport { status, body } if !body.is_empty() => {
                let rendered = serde_json::to_string_pretty(&backend_body_value(body))
                    .unwrap_or_else(|_| body.clone());
                format!("Backend returned HTTP {}:\n{}", status, rendered)
            }
            other => other.to_string(),
        }
    }
}

fn backend_body_value(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::missing("id").to_string(), "'id': missing");
        assert_eq!(ValidationError::unknown("foo").to_string(), "'foo': unknown");
        assert_eq!(
            ValidationError::type_mismatch("id", "number", "string").to_string(),
            "'id': expected number, got string"
        );
        assert_eq!(
            ValidationError::not_allowed("status", &["low", "out"]).to_string(),
            "'status': must be one of [low, out]"
        );
    }

    #[test]
    fn test_kinds() {
        assert_eq!(ToolError::not_found("x").kind(), ErrorKind::NotFound);
        assert_eq!(
            ToolError::from(ValidationError::missing("id")).kind(),
            ErrorKind::Validation
        );
        assert_eq!(ToolError::network("refused").kind(), ErrorKind::Network);
        assert_eq!(
            serde_json::to_value(ErrorKind::DuplicateName).unwrap(),
            "duplicate_name"
        );
    }

    #[test]
    fn test_transport_detail_keeps_backend_body() {
        let err = ToolError::Transport {
            status: 404,
            body: r#"{"code":404,"msg":"category not found"}"#.to_string(),
        };
        let detail = err.detail().unwrap();
        assert_eq!(detail["status"], 404);
        assert_eq!(detail["body"]["msg"], "category not found");
        assert!(err.render().contains("category not found"));

        let plain = ToolError::Transport {
            status: 502,
            body: "Bad Gateway".to_string(),
        };
        assert_eq!(plain.detail().unwrap()["body"], "Bad Gateway");
    }
}
