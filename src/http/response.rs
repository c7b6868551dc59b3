//! Transaction payload shapes.
//!
//! The demo exposes exactly one synthetic error kind: the simulated
//! database timeout. It is a payload, not an error path; nothing in the
//! service retries or recovers it.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

/// Error code reported by a broken transaction.
pub const DB_TIMEOUT: &str = "DB_TIMEOUT";

/// Severity marker attached to the simulated failure.
pub const SEVERITY_HIGH: &str = "HIGH";

/// Body of a successful transaction.
#[derive(Debug, Serialize)]
pub struct TransactionSuccess {
    pub status: &'static str,
    pub data: &'static str,
    /// Server wall clock, milliseconds since the Unix epoch. Computed per
    /// request so repeated polls always see fresh values.
    pub timestamp: u64,
}

impl TransactionSuccess {
    pub fn now() -> Self {
        Self {
            status: "success",
            data: "Transaction processed",
            timestamp: epoch_millis(),
        }
    }
}

/// Body of a failed transaction.
#[derive(Debug, Serialize)]
pub struct TransactionError {
    pub error: &'static str,
    pub severity: &'static str,
}

impl TransactionError {
    pub fn db_timeout() -> Self {
        Self {
            error: DB_TIMEOUT,
            severity: SEVERITY_HIGH,
        }
    }
}

/// Current wall clock in milliseconds since the Unix epoch.
pub fn epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_shape() {
        let body = serde_json::to_value(TransactionSuccess::now()).unwrap();
        assert_eq!(body["status"], "success");
        assert_eq!(body["data"], "Transaction processed");
        assert!(body["timestamp"].as_u64().unwrap() > 0);
    }

    #[test]
    fn error_body_shape() {
        let body = serde_json::to_value(TransactionError::db_timeout()).unwrap();
        assert_eq!(body["error"], "DB_TIMEOUT");
        assert_eq!(body["severity"], "HIGH");
    }

    #[test]
    fn epoch_millis_is_monotonic_enough() {
        let a = epoch_millis();
        let b = epoch_millis();
        assert!(b >= a);
    }
}
