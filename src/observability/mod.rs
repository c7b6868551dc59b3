//! Observability subsystem: structured logging and optional metrics.
//!
//! This service exists to be observed, so its own telemetry stays
//! deliberately small: tracing for structured logs, and a Prometheus
//! exporter that is off unless enabled in config.

pub mod logging;
pub mod metrics;
