//! Shared utilities for integration tests.

use std::net::SocketAddr;

use prediction_api::config::ServiceConfig;
use prediction_api::http::HttpServer;
use prediction_api::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// Start the service on an ephemeral loopback port.
///
/// The listener is bound before the server task is spawned, so the service
/// is ready to accept as soon as this returns. Dropping the `Shutdown` is
/// fine; call `trigger` to stop the server explicitly.
#[allow(dead_code)]
pub async fn start_service(config: ServiceConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (addr, shutdown)
}

/// Start the service with default configuration.
pub async fn start_default_service() -> (SocketAddr, Shutdown) {
    start_service(ServiceConfig::default()).await
}

/// HTTP client that ignores any ambient proxy settings.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
