//! Prediction API service library.

pub mod config;
pub mod http;
pub mod lifecycle;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
