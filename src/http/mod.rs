//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → cors.rs (origin allow-list, preflight responses)
//!     → handlers.rs (parse payload, build response)
//!     → error.rs (failures become 400 + {"error": ...})
//! ```

pub mod cors;
pub mod error;
pub mod handlers;
pub mod request_id;
pub mod server;

pub use error::RequestError;
pub use server::HttpServer;
