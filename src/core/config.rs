//! Configuration management for the MCP server.
//!
//! Values come from defaults, overridden by environment variables (a `.env`
//! file is honoured). Configuration is read once at startup and never
//! reloaded.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

/// Fixed path prefix of the admin REST API.
pub const API_PREFIX: &str = "/api/v1";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Admin API connection settings.
    pub backend: BackendConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Connection settings for the admin REST API.
#[derive(Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Scheme, host and port of the backend, e.g. `http://localhost:8080`.
    pub base_url: String,

    /// Bearer token for admin endpoints. `None` or empty means anonymous.
    pub admin_token: Option<String>,

    /// Path prefix appended to `base_url`.
    pub api_prefix: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// Custom Debug implementation to redact the token from logs.
impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("base_url", &self.base_url)
            .field("admin_token", &self.admin_token.as_ref().map(|_| "[REDACTED]"))
            .field("api_prefix", &self.api_prefix)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            admin_token: None,
            api_prefix: API_PREFIX.to_string(),
            timeout_secs: 30,
        }
    }
}

impl BackendConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Base URL joined with the API prefix, without a trailing slash.
    pub fn api_root(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.api_prefix.trim_end_matches('/')
        )
    }

    /// Whether a non-empty token is configured.
    pub fn is_authenticated(&self) -> bool {
        self.admin_token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "dujiao-admin-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            backend: BackendConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix, backend settings the
    /// `DUJIAO_` prefix.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        if let Ok(base_url) = std::env::var("DUJIAO_API_BASE_URL") {
            if !base_url.is_empty() {
                config.backend.base_url = base_url;
            }
        }

        if let Ok(token) = std::env::var("DUJIAO_ADMIN_TOKEN") {
            config.backend.admin_token = Some(token).filter(|t| !t.is_empty());
        }

        if let Ok(timeout) = std::env::var("DUJIAO_API_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) if secs > 0 => config.backend.timeout_secs = secs,
                _ => warn!(
                    "Ignoring invalid DUJIAO_API_TIMEOUT_SECS '{}', using {}s",
                    timeout, config.backend.timeout_secs
                ),
            }
        }

        if config.backend.is_authenticated() {
            info!("Admin token loaded from environment");
        } else {
            warn!("DUJIAO_ADMIN_TOKEN not set - admin endpoints will be called anonymously");
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    const BACKEND_VARS: [&str; 3] = [
        "DUJIAO_API_BASE_URL",
        "DUJIAO_ADMIN_TOKEN",
        "DUJIAO_API_TIMEOUT_SECS",
    ];

    fn clear_backend_env() {
        for var in BACKEND_VARS {
            unsafe {
                std::env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_backend_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("DUJIAO_API_BASE_URL", "https://shop.example.com/");
            std::env::set_var("DUJIAO_ADMIN_TOKEN", "test_token_12345");
            std::env::set_var("DUJIAO_API_TIMEOUT_SECS", "5");
        }
        let config = Config::from_env();
        assert_eq!(config.backend.api_root(), "https://shop.example.com/api/v1");
        assert_eq!(config.backend.admin_token.as_deref(), Some("test_token_12345"));
        assert_eq!(config.backend.timeout(), Duration::from_secs(5));
        clear_backend_env();
    }

    #[test]
    fn test_backend_default_fallback() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_backend_env();
        unsafe {
            std::env::set_var("DUJIAO_ADMIN_TOKEN", "");
            std::env::set_var("DUJIAO_API_TIMEOUT_SECS", "soon");
        }
        let config = Config::from_env();
        assert_eq!(config.backend.api_root(), "http://localhost:8080/api/v1");
        assert!(config.backend.admin_token.is_none());
        assert!(!config.backend.is_authenticated());
        assert_eq!(config.backend.timeout_secs, 30);
        clear_backend_env();
    }

    #[test]
    fn test_token_redacted_in_debug() {
        let backend = BackendConfig {
            admin_token: Some("super_secret_token".to_string()),
            ..BackendConfig::default()
        };
        let debug_str = format!("{:?}", backend);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_token"));
    }

    #[test]
    fn test_config_default_identity() {
        let config = Config::default();
        assert_eq!(config.server.name, "dujiao-admin-mcp");
        assert_eq!(config.server.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(config.backend.api_prefix, "/api/v1");
    }
}
