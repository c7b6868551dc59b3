//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     trigger() → broadcast → server stops accepting, drains, exits
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → same graceful shutdown path
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
