//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and middleware produce:
//!     → logging.rs (subscriber setup, structured events)
//!     → diagnostics.rs (header dumps requested by handlers)
//!
//! Consumers:
//!     → stdout via tracing-subscriber fmt layer
//! ```
//!
//! # Design Decisions
//! - Structured fields on every event (request_id, header, status)
//! - Request ID flows through the request span, not the header map

pub mod diagnostics;
pub mod logging;

pub use diagnostics::{HeaderDiagnostics, RecordingDiagnostics, TracingDiagnostics};
pub use logging::init_logging;
