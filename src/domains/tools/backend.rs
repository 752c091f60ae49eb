//! Backend client executing built requests against the admin REST API.
//!
//! One attempt per call, bounded by the configured timeout. Non-success
//! statuses become [`ToolError::Transport`] with the backend body kept
//! verbatim; anything that prevents a response from arriving becomes
//! [`ToolError::Network`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use serde_json::Value;
use tracing::{debug, warn};

use super::error::ToolError;
use super::request::HttpRequest;
use crate::core::config::BackendConfig;

/// Executes a built request and returns the backend's JSON payload.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn execute(&self, request: &HttpRequest) -> Result<Value, ToolError>;
}

/// reqwest-based [`Backend`] for the admin API.
#[derive(Clone)]
pub struct HttpBackend {
    http: reqwest::Client,
    api_root: String,
    token: Option<String>,
    timeout: Duration,
}

/// Custom Debug implementation to redact the token from logs.
impl std::fmt::Debug for HttpBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpBackend")
            .field("api_root", &self.api_root)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl HttpBackend {
    /// Build a client from explicit configuration.
    pub fn new(config: &BackendConfig) -> Result<Self, ToolError> {
        let timeout = config.timeout();
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ToolError::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_root: config.api_root(),
            token: config.admin_token.clone().filter(|t| !t.is_empty()),
            timeout,
        })
    }

    /// Absolute URL for a request.
    pub fn url_for(&self, request: &HttpRequest) -> String {
        format!("{}{}", self.api_root, request.url())
    }

    fn classify(&self, err: reqwest::Error) -> ToolError {
        if err.is_timeout() {
            ToolError::network(format!("request timed out after {:?}", self.timeout))
        } else if err.is_connect() {
            ToolError::network(format!("connection failed: {}", err))
        } else {
            ToolError::network(err.to_string())
        }
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn execute(&self, request: &HttpRequest) -> Result<Value, ToolError> {
        let url = self.url_for(request);
        debug!("{} {}", request.method, url);

        let mut builder = self
            .http
            .request(request.method.into(), &url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let resp = builder.send().await.map_err(|e| self.classify(e))?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| self.classify(e))?;

        if !status.is_success() {
            warn!("{} {} failed with HTTP {}", request.method, url, status.as_u16());
            return Err(ToolError::Transport {
                status: status.as_u16(),
                body: text,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }
}
