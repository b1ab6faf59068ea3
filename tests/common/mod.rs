//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;

use header_echo::http::HttpServer;
use header_echo::lifecycle::Shutdown;
use header_echo::observability::{HeaderDiagnostics, TracingDiagnostics};
use header_echo::ServerConfig;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A server running on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Trigger shutdown and wait for the server task to exit.
    pub async fn stop(self) {
        self.shutdown.trigger();
        let _ = self.handle.await;
    }
}

/// Start the server with the given config.
pub async fn start_server(config: ServerConfig) -> TestServer {
    start_server_with(config, Arc::new(TracingDiagnostics)).await
}

/// Start the server with a custom diagnostics sink.
pub async fn start_server_with(
    config: ServerConfig,
    diagnostics: Arc<dyn HeaderDiagnostics>,
) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::with_diagnostics(config, diagnostics);

    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    TestServer {
        addr,
        shutdown,
        handle,
    }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
