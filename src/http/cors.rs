//! Cross-origin access control.
//!
//! # Responsibilities
//! - Build the CORS layer from configuration
//! - Answer preflight OPTIONS requests
//! - Echo the allow-list origin back on matching requests
//!
//! # Design Decisions
//! - The layer wraps the whole router, so the policy applies uniformly to
//!   every path, not only the prediction endpoint
//! - Origins off the allow-list get no permissive headers; the request
//!   itself is not rejected (CORS is browser-enforced)

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::CorsConfig;

/// Build the CORS layer from configuration.
///
/// Entries that fail to parse are skipped with a warning rather than
/// aborting startup; validation normally rejects them before this point.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Skipping unparseable CORS origin");
                None
            }
        })
        .collect();

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|method| match Method::from_bytes(method.as_bytes()) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(method = %method, "Skipping unparseable CORS method");
                None
            }
        })
        .collect();

    let headers: Vec<HeaderName> = config
        .allowed_headers
        .iter()
        .filter_map(|header| match HeaderName::from_bytes(header.as_bytes()) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(header = %header, "Skipping unparseable CORS header");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(methods)
        .allow_headers(headers)
        .allow_credentials(config.allow_credentials)
}
