//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use chaos_demo::config::DemoConfig;
use chaos_demo::http::HttpServer;
use chaos_demo::lifecycle::Shutdown;

/// Start the demo server on an ephemeral port.
///
/// Returns the bound address and the shutdown handle; trigger it at the
/// end of the test to drain the server.
pub async fn start_demo(config: DemoConfig) -> (SocketAddr, Shutdown) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;

    (addr, shutdown)
}

/// Config with a shortened failure delay so toggle tests stay fast.
#[allow(dead_code)]
pub fn fast_chaos_config(failure_delay_ms: u64) -> DemoConfig {
    let mut config = DemoConfig::default();
    config.chaos.failure_delay_ms = failure_delay_ms;
    config
}

/// Client that does not follow redirects, so 302s are observable.
#[allow(dead_code)]
pub fn no_redirect_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}
