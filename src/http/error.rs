//! Request error handling.
//!
//! # Design Decisions
//! - One error kind for the whole request path; the caller only ever sees
//!   HTTP 400 with a textual description
//! - Handlers return `Result<_, RequestError>` rather than panicking;
//!   nothing here is fatal to the process
//! - No distinction between client-caused and server-caused failures

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Any failure while processing a request.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct RequestError {
    message: String,
}

impl RequestError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("invalid JSON payload: {err}"))
    }
}

/// JSON error body returned to the caller.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "Request failed");
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}
