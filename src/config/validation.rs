//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (delays > 0, addresses parse)
//! - Catch timeout/delay combinations that break the demo
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: DemoConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::DemoConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid bind address '{0}'")]
    InvalidBindAddress(String),

    #[error("chaos.failure_delay_ms must be greater than zero")]
    ZeroFailureDelay,

    #[error("timeouts.request_secs ({timeout_secs}s) must exceed chaos.failure_delay_ms ({failure_delay_ms}ms)")]
    RequestTimeoutTooShort {
        timeout_secs: u64,
        failure_delay_ms: u64,
    },

    #[error("invalid metrics address '{0}'")]
    InvalidMetricsAddress(String),
}

/// Check a configuration for semantic problems, collecting every error.
pub fn validate_config(config: &DemoConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.chaos.failure_delay_ms == 0 {
        errors.push(ValidationError::ZeroFailureDelay);
    }

    if config.timeouts.request_secs * 1_000 <= config.chaos.failure_delay_ms {
        errors.push(ValidationError::RequestTimeoutTooShort {
            timeout_secs: config.timeouts.request_secs,
            failure_delay_ms: config.chaos.failure_delay_ms,
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&DemoConfig::default()).is_ok());
    }

    #[test]
    fn rejects_bad_bind_address() {
        let mut config = DemoConfig::default();
        config.listener.bind_address = "not-an-address".into();
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(
            errors[0],
            ValidationError::InvalidBindAddress(_)
        ));
    }

    #[test]
    fn rejects_timeout_shorter_than_failure_delay() {
        let mut config = DemoConfig::default();
        config.timeouts.request_secs = 2;
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(
            errors[0],
            ValidationError::RequestTimeoutTooShort { .. }
        ));
    }

    #[test]
    fn collects_every_error() {
        let mut config = DemoConfig::default();
        config.listener.bind_address = "bad".into();
        config.chaos.failure_delay_ms = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
