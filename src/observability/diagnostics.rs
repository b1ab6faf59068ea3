//! Diagnostic output for header inspection endpoints.
//!
//! Handlers never print; they hand what they want recorded to a
//! [`HeaderDiagnostics`] implementation injected through the app state.

use crate::headers::MultiValueHeaders;

/// Sink for header diagnostics emitted by handlers.
pub trait HeaderDiagnostics: Send + Sync {
    /// Called with the full multi-valued header map of a request.
    fn multi_value_headers(&self, headers: &MultiValueHeaders);
}

/// Emits diagnostics as `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl HeaderDiagnostics for TracingDiagnostics {
    fn multi_value_headers(&self, headers: &MultiValueHeaders) {
        tracing::info!(
            header_count = headers.len(),
            headers = %headers,
            "Multi-value request headers"
        );
    }
}

/// Keeps every reported map in memory. Used by tests.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    seen: std::sync::Mutex<Vec<MultiValueHeaders>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn recorded(&self) -> Vec<MultiValueHeaders> {
        self.seen
            .lock()
            .map(|seen| seen.clone())
            .unwrap_or_default()
    }
}

impl HeaderDiagnostics for RecordingDiagnostics {
    fn multi_value_headers(&self, headers: &MultiValueHeaders) {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(headers.clone());
        }
    }
}
