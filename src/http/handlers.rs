//! Request handlers.
//!
//! # Responsibilities
//! - `/predict`: parse the request body as JSON and return the prediction
//! - `/health`: liveness probe
//! - fallback: JSON 404 for unknown paths

use axum::body::Bytes;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::http::error::{ErrorBody, RequestError};

/// Value returned while no trained model is wired in.
const PLACEHOLDER_PREDICTION: f64 = 0.5;

/// Successful prediction response body.
#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub prediction: f64,
}

/// Health probe response body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Handle `POST /predict`.
///
/// The body must parse as JSON but no schema is enforced; the payload is
/// logged and otherwise unused. Any failure surfaces as HTTP 400 with a
/// JSON error body.
pub async fn predict(body: Bytes) -> Result<Json<PredictionResponse>, RequestError> {
    let payload: Value = serde_json::from_slice(&body)?;

    tracing::debug!(payload = %payload, "Received prediction request");

    // TODO: run the trained model here once one ships.
    Ok(Json(PredictionResponse {
        prediction: PLACEHOLDER_PREDICTION,
    }))
}

/// Handle `GET /health`.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Fallback for unknown paths.
pub async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "no matching route".to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn accepts_any_json_shape() {
        for body in [r#"{"x": 1}"#, r#"[1, 2, 3]"#, "0.25", "null", r#""text""#] {
            let result = predict(Bytes::from(body)).await;
            let Json(response) = result.expect("valid JSON should be accepted");
            assert_eq!(response.prediction, PLACEHOLDER_PREDICTION);
        }
    }

    #[tokio::test]
    async fn rejects_malformed_body() {
        let result = predict(Bytes::from_static(b"definitely not json")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn rejects_empty_body() {
        let result = predict(Bytes::new()).await;
        assert!(result.is_err());
    }
}
