//! Metrics collection and exposition.
//!
//! # Metrics
//! - `demo_transactions_total` (counter): transactions by status code
//! - `demo_transaction_duration_seconds` (histogram): handler latency,
//!   including the simulated failure delay
//! - `demo_chaos_toggles_total` (counter): switch flips
//! - `demo_chaos_mode` (gauge): 1 when the simulated failure is active
//!
//! Recording is unconditional and near-free; exposition only happens if
//! the exporter was installed at startup.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on the given address.
pub fn init_metrics(addr: SocketAddr) {
    let builder = PrometheusBuilder::new().with_http_listener(addr);
    match builder.install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one transaction outcome.
pub fn record_transaction(status: u16, start: Instant) {
    metrics::counter!("demo_transactions_total", "status" => status.to_string()).increment(1);
    metrics::histogram!("demo_transaction_duration_seconds").record(start.elapsed().as_secs_f64());
}

/// Record a chaos toggle and the resulting mode.
pub fn record_toggle(broken: bool) {
    metrics::counter!("demo_chaos_toggles_total").increment(1);
    metrics::gauge!("demo_chaos_mode").set(if broken { 1.0 } else { 0.0 });
}
