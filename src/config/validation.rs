//! Configuration validation.
//!
//! Semantic checks on top of what serde already guarantees syntactically:
//! addresses parse, CORS entries are well-formed, numeric bounds are sane.
//! All errors are collected and returned together, not just the first.

use std::net::SocketAddr;

use axum::http::{HeaderName, HeaderValue, Method};
use thiserror::Error;

use crate::config::schema::ServiceConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("listener.bind_address `{0}` is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("cors.allowed_origins must not be empty")]
    NoAllowedOrigins,

    #[error("cors.allowed_origins entry `{0}` is not a valid origin value")]
    InvalidOrigin(String),

    #[error("cors.allowed_methods entry `{0}` is not a valid HTTP method")]
    InvalidMethod(String),

    #[error("cors.allowed_headers entry `{0}` is not a valid header name")]
    InvalidHeader(String),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("limits.max_body_size must be greater than zero")]
    ZeroBodyLimit,
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.cors.allowed_origins.is_empty() {
        errors.push(ValidationError::NoAllowedOrigins);
    }
    for origin in &config.cors.allowed_origins {
        if HeaderValue::from_str(origin).is_err() {
            errors.push(ValidationError::InvalidOrigin(origin.clone()));
        }
    }
    for method in &config.cors.allowed_methods {
        if Method::from_bytes(method.as_bytes()).is_err() {
            errors.push(ValidationError::InvalidMethod(method.clone()));
        }
    }
    for header in &config.cors.allowed_headers {
        if HeaderName::from_bytes(header.as_bytes()).is_err() {
            errors.push(ValidationError::InvalidHeader(header.clone()));
        }
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }
    if config.limits.max_body_size == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
