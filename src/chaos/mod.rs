//! Fault injection subsystem.
//!
//! # Data Flow
//! ```text
//! GET /toggle-chaos
//!     → switch.rs (atomic flip, log new state)
//!     → observed by every subsequent /api/transaction call
//! ```
//!
//! # Design Decisions
//! - One process-wide switch, owned by the server and injected into
//!   handlers via state, never a global
//! - AtomicBool rather than a mutex: no derived invariants span the flag,
//!   so handlers only need a coherent pre- or post-toggle value

pub mod switch;

pub use switch::ChaosSwitch;
