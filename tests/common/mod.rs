//! Shared utilities for integration tests.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use bundlesink_fixtures::{HttpServer, ServerConfig, Shutdown};

/// Spawn the fixture server on an ephemeral port.
///
/// Returns the bound address and the shutdown handle that stops the server.
pub async fn spawn_server() -> (SocketAddr, Shutdown) {
    let config = ServerConfig::default();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (addr, shutdown)
}

/// HTTP client that never picks up a system proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
