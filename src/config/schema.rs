//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the demo service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Fault injection settings.
    pub chaos: ChaosConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Directory served for static assets.
    pub static_dir: String,

    /// Cosmetic version label shown on the status page.
    pub version_label: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            chaos: ChaosConfig::default(),
            timeouts: TimeoutConfig::default(),
            observability: ObservabilityConfig::default(),
            static_dir: "public".to_string(),
            version_label: "1.0.0 (Stable)".to_string(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Fault injection settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChaosConfig {
    /// How long a broken transaction hangs before failing, in milliseconds.
    pub failure_delay_ms: u64,
}

impl Default for ChaosConfig {
    fn default() -> Self {
        Self {
            failure_delay_ms: 3_000,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Overall request timeout in seconds. Must exceed the failure delay,
    /// otherwise broken transactions time out instead of returning 500.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Whether to expose Prometheus metrics.
    pub metrics_enabled: bool,

    /// Address for the metrics exporter.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

impl DemoConfig {
    /// Apply environment overrides. `VERSION` replaces the version label,
    /// matching the one knob the demo exposes.
    pub fn apply_env(&mut self) {
        if let Ok(version) = std::env::var("VERSION") {
            self.version_label = version;
        }
    }
}
