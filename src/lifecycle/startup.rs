//! Startup orchestration.
//!
//! # Responsibilities
//! - Load configuration (file optional)
//! - Apply command-line overrides, then validate
//! - Bind the listener
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Overrides are validated like file values

use std::path::Path;

use tokio::net::TcpListener;

use crate::config::{load_config, validate_config, ConfigError, ServerConfig};

/// Build the effective configuration.
pub fn resolve_config(
    path: Option<&Path>,
    bind_override: Option<&str>,
) -> Result<ServerConfig, ConfigError> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };

    if let Some(bind) = bind_override {
        config.listener.bind_address = bind.to_string();
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Bind the configured listener address.
pub async fn bind(config: &ServerConfig) -> std::io::Result<TcpListener> {
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");
    Ok(listener)
}
