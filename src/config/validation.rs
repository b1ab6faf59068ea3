//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, bind address parses)
//! - Validate the endpoint base path shape
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ServerConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a socket address")]
    BindAddress(String),

    #[error("api.base_path '{0}' must look like '/segment(/segment)*' using [A-Za-z0-9-._~]")]
    BasePath(String),

    #[error("timeouts.request_secs must be greater than zero")]
    RequestTimeout,
}

/// Check a parsed configuration for semantic errors.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    let base_path = &config.api.base_path;
    if !base_path.is_empty() && !is_plain_path(base_path) {
        errors.push(ValidationError::BasePath(base_path.clone()));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::RequestTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// `/segment(/segment)*` where segments use unreserved ASCII only.
/// Rules out route captures and wildcards, which cannot be nested.
fn is_plain_path(path: &str) -> bool {
    match path.strip_prefix('/') {
        Some(rest) => rest.split('/').all(|segment| {
            !segment.is_empty()
                && segment
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~'))
        }),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&ServerConfig::default()), Ok(()));
    }

    #[test]
    fn test_empty_base_path_mounts_at_root() {
        let mut config = ServerConfig::default();
        config.api.base_path = String::new();
        assert_eq!(validate_config(&config), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ServerConfig::default();
        config.listener.bind_address = "localhost".to_string();
        config.api.base_path = "/api/v1/".to_string();
        config.timeouts.request_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::BindAddress("localhost".to_string()),
                ValidationError::BasePath("/api/v1/".to_string()),
                ValidationError::RequestTimeout,
            ]
        );
    }

    #[test]
    fn test_rejects_base_paths_the_router_cannot_nest() {
        for bad in ["/{*rest}", "/api/{version}", "/api//v1", "/api/*", "/", "api/v1", "/api/v1/", "/ap i"] {
            let mut config = ServerConfig::default();
            config.api.base_path = bad.to_string();
            assert_eq!(
                validate_config(&config),
                Err(vec![ValidationError::BasePath(bad.to_string())]),
                "{bad} should be rejected"
            );
        }

        for good in ["/api/v1", "/headers", "/a.b/c-d/e_f~g"] {
            let mut config = ServerConfig::default();
            config.api.base_path = good.to_string();
            assert_eq!(validate_config(&config), Ok(()), "{good} should be accepted");
        }
    }
}
