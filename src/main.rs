//! Chaos Demo Service
//!
//! A small observability demo built with Tokio and Axum: a transaction
//! endpoint that can be flipped between fast-success and slow-failure,
//! and a status page that polls it to visualize system health.
//!
//! # Architecture Overview
//!
//! ```text
//!                          ┌──────────────────────────────────────────┐
//!                          │               CHAOS DEMO                 │
//!                          │                                          │
//!   GET /toggle-chaos ─────┼──▶ chaos switch (shared AtomicBool)      │
//!                          │          │                               │
//!   GET /api/transaction ──┼──▶ read switch ──▶ success (200, now)    │
//!                          │               └──▶ delay 3s, fail (500)  │
//!                          │                                          │
//!   GET / ─────────────────┼──▶ status page (polls the endpoint       │
//!                          │        every 2s and renders health)      │
//!                          │                                          │
//!                          │  ┌────────────────────────────────────┐  │
//!                          │  │       Cross-Cutting Concerns       │  │
//!                          │  │  config │ observability │ lifecycle│  │
//!                          │  └────────────────────────────────────┘  │
//!                          └──────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;

use chaos_demo::config::loader;
use chaos_demo::http::HttpServer;
use chaos_demo::lifecycle::Shutdown;
use chaos_demo::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    logging::init_logging();

    tracing::info!("chaos-demo v{} starting", env!("CARGO_PKG_VERSION"));

    // Load configuration (defaults unless CHAOS_DEMO_CONFIG points at a file)
    let config = loader::load_from_env()?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        version_label = %config.version_label,
        failure_delay_ms = config.chaos.failure_delay_ms,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Initialize metrics exposition if enabled
    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            chaos_demo::observability::metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Create and run HTTP server
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
