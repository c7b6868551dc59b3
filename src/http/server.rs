//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID, cache control)
//! - Serve static assets as the router fallback
//! - Bind server to listener, serve with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::chaos::ChaosSwitch;
use crate::config::{ChaosConfig, DemoConfig};
use crate::http::handlers;
use crate::lifecycle::signals;

/// Every response must hit the handler; a cached 304 would report a stale
/// status to the polling client.
const CACHE_CONTROL_VALUE: &str = "no-store, no-cache, must-revalidate, private";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub switch: Arc<ChaosSwitch>,
    pub chaos: ChaosConfig,
    pub version_label: Arc<str>,
}

/// HTTP server for the demo service.
pub struct HttpServer {
    router: Router,
    switch: Arc<ChaosSwitch>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: DemoConfig) -> Self {
        let switch = Arc::new(ChaosSwitch::new());

        let state = AppState {
            switch: switch.clone(),
            chaos: config.chaos.clone(),
            version_label: Arc::from(config.version_label.as_str()),
        };

        let router = Self::build_router(&config, state);
        Self { router, switch }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &DemoConfig, state: AppState) -> Router {
        Router::new()
            .route("/api/transaction", get(handlers::transaction))
            .route("/toggle-chaos", get(handlers::toggle_chaos))
            .route("/", get(handlers::status_page))
            .fallback_service(ServeDir::new(&config.static_dir))
            .with_state(state)
            .layer(SetResponseHeaderLayer::overriding(
                header::CACHE_CONTROL,
                HeaderValue::from_static(CACHE_CONTROL_VALUE),
            ))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
    }

    /// The fault-injection switch shared with the handlers.
    pub fn switch(&self) -> Arc<ChaosSwitch> {
        self.switch.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        let app = self.router.into_make_service();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = signals::wait_for_signal() => {}
                    _ = shutdown.recv() => {}
                }
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
