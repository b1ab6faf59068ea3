//! HTTP header inspection service.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request           ┌───────────────────────────────────────────────┐
//!     ─────────────────────────┼─▶ TraceLayer → request ID → timeout           │
//!                              │        │                                      │
//!                              │        ▼                                      │
//!                              │  ┌───────────┐    ┌──────────────────────┐    │
//!                              │  │ handlers  │───▶│ headers::extract     │    │
//!                              │  │ (7 routes)│    │ headers::multi/host  │    │
//!                              │  └─────┬─────┘    └──────────────────────┘    │
//!                              │        │                                      │
//!     Client Response          │        ▼                                      │
//!     ◀────────────────────────┼── text / JSON body, or 400 HeaderError        │
//!                              │                                               │
//!                              │  config · observability · lifecycle           │
//!                              └───────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use header_echo::http::HttpServer;
use header_echo::lifecycle::{signals, startup, Shutdown};
use header_echo::observability::init_logging;

#[derive(Parser)]
#[command(name = "header-echo")]
#[command(about = "Serve the HTTP header inspection endpoints", long_about = None)]
struct Args {
    /// TOML configuration file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = startup::resolve_config(args.config.as_deref(), args.bind.as_deref())?;
    init_logging(&config.observability)?;

    tracing::info!("header-echo v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        base_path = %config.api.base_path,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = startup::bind(&config).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(signals::forward_signals(shutdown.clone()));

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
