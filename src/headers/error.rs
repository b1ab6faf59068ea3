//! Header error taxonomy.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failure to bind a request header to a handler input.
///
/// Both variants are client errors and map to `400 Bad Request`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    /// A required header was not sent.
    #[error("Required request header '{name}' is not present")]
    MissingHeader { name: String },

    /// A header was sent but could not be converted to the declared type.
    #[error("Request header '{name}' has invalid value '{value}': {reason}")]
    InvalidFormat {
        name: String,
        value: String,
        reason: String,
    },
}

impl HeaderError {
    pub fn missing(name: impl Into<String>) -> Self {
        HeaderError::MissingHeader { name: name.into() }
    }

    pub fn invalid(
        name: impl Into<String>,
        value: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        HeaderError::InvalidFormat {
            name: name.into(),
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    /// Name of the offending header.
    pub fn header_name(&self) -> &str {
        match self {
            HeaderError::MissingHeader { name } => name,
            HeaderError::InvalidFormat { name, .. } => name,
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl IntoResponse for HeaderError {
    fn into_response(self) -> Response {
        tracing::warn!(header = %self.header_name(), error = %self, "Rejecting request");

        let body = json!({
            "error": self.to_string(),
            "header": self.header_name(),
        });
        (self.status(), Json(body)).into_response()
    }
}
