//! Application error types with HTTP status code mapping.
//!
//! [`BoardError`] is the central error type. Request handlers propagate it
//! with `?`; the [`IntoResponse`] impl turns it into a status response,
//! logging the cause server-side instead of leaking it to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Server-side error enum with HTTP status code mapping.
///
/// | Variant | HTTP Status |
/// |---------|-------------|
/// | `Validation` | 422 Unprocessable Entity |
/// | `Persistence` | 500 Internal Server Error |
/// | `Template` | 500 Internal Server Error |
/// | `Config` | fatal at startup, never reaches a response |
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// Configuration could not be loaded or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// A required form field was absent or over the column width.
    #[error("invalid submission: {0}")]
    Validation(String),

    /// Persistence layer failure.
    #[error("persistence error: {0}")]
    Persistence(String),

    /// Template rendering failure.
    #[error("template error: {0}")]
    Template(String),
}

impl BoardError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Config(_) | Self::Persistence(_) | Self::Template(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for BoardError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            // Store and template internals stay out of the response body.
            (status, "internal server error").into_response()
        } else {
            (status, self.to_string()).into_response()
        }
    }
}
