//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the header service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Endpoint settings.
    pub api: ApiConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Path prefix every endpoint is mounted under.
    pub base_path: String,

    /// Value used by `/default` when `optional-header` is absent.
    pub optional_header_default: i64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_path: "/api/v1".to_string(),
            optional_header_default: 3600,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log filter used when RUST_LOG is unset (e.g. "info", "header_echo=debug").
    pub log_level: String,

    /// Colored terminal output.
    pub ansi: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "header_echo=info,tower_http=info".to_string(),
            ansi: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: ServerConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.api.base_path, "/api/v1");
        assert_eq!(config.api.optional_header_default, 3600);
        assert_eq!(config.timeouts.request_secs, 30);
    }

    #[test]
    fn test_partial_section() {
        let config: ServerConfig = toml::from_str(
            r#"
            [api]
            optional_header_default = 60
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_path, "/api/v1");
        assert_eq!(config.api.optional_header_default, 60);
    }
}
