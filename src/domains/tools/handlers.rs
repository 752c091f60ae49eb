//! Invocation payloads and result rendering.
//!
//! Both the rmcp router and the HTTP transport turn a dispatcher outcome into
//! the same `CallToolResult` shape: indented JSON text on success, the
//! rendered error message flagged `isError` on failure, and a structured
//! [`ToolOutput`] alongside either.

use rmcp::model::{CallToolResult, Content};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::{ErrorKind, ToolError};

/// A single `tools/call` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invocation {
    #[serde(rename = "name")]
    pub tool_name: String,

    #[serde(default)]
    pub arguments: Map<String, Value>,
}

/// Structured form of a tool outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutput {
    pub success: bool,

    #[serde(skip_serializing_if = "Value::is_null", default)]
    pub data: Value,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ToolFailure>,
}

/// Error half of a [`ToolOutput`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolFailure {
    pub kind: ErrorKind,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
}

impl ToolOutput {
    pub fn success(data: Value) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }

    pub fn failure(error: &ToolError) -> Self {
        Self {
            success: false,
            data: Value::Null,
            error: Some(ToolFailure {
                kind: error.kind(),
                message: error.to_string(),
                detail: error.detail(),
            }),
        }
    }
}

/// Render a dispatcher outcome for an MCP client.
pub fn to_call_result(outcome: Result<Value, ToolError>) -> CallToolResult {
    match outcome {
        Ok(payload) => {
            let text = serde_json::to_string_pretty(&payload).unwrap_or_else(|_| payload.to_string());
            CallToolResult {
                content: vec![Content::text(text)],
                structured_content: None,
                is_error: Some(false),
                meta: None,
            }
        }
        Err(e) => CallToolResult {
            content: vec![Content::text(e.render())],
            structured_content: serde_json::to_value(ToolOutput::failure(&e)).ok(),
            is_error: Some(true),
            meta: None,
        },
    }
}
