//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers under the configured base path
//! - Wire up middleware (tracing, request ID, timeout)
//! - Inject shared state (API config, diagnostics sink)
//! - Serve until the shutdown signal fires

use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{ApiConfig, ServerConfig};
use crate::http::handlers;
use crate::http::request::request_id_middleware;
use crate::lifecycle::shutdown;
use crate::observability::{HeaderDiagnostics, TracingDiagnostics};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<ApiConfig>,
    pub diagnostics: Arc<dyn HeaderDiagnostics>,
}

/// HTTP server for the header endpoints.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a server that logs diagnostics through `tracing`.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_diagnostics(config, Arc::new(TracingDiagnostics))
    }

    /// Create a server with a caller-supplied diagnostics sink.
    pub fn with_diagnostics(config: ServerConfig, diagnostics: Arc<dyn HeaderDiagnostics>) -> Self {
        let state = AppState {
            api: Arc::new(config.api.clone()),
            diagnostics,
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    pub fn build_router(config: &ServerConfig, state: AppState) -> Router {
        let api = Router::new()
            .route("/greeting", get(handlers::greeting))
            .route("/double", get(handlers::double_number))
            .route("/listHeaders", get(handlers::list_all_headers))
            .route("/multiValue", get(handlers::multi_value))
            .route("/getBaseUrl", get(handlers::base_url))
            .route("/nonRequiredHeader", get(handlers::non_required_header))
            .route("/default", get(handlers::default_header))
            .with_state(state);

        let base_path = config.api.base_path.as_str();
        let routes = if base_path.is_empty() {
            api
        } else {
            Router::new().nest(base_path, api)
        };

        routes
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(middleware::from_fn(request_id_middleware))
            .layer(TraceLayer::new_for_http())
    }

    /// Router with every layer applied, for in-process callers.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown_rx` fires. In-flight requests are allowed to finish.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            base_path = %self.config.api.base_path,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait_for(shutdown_rx))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
