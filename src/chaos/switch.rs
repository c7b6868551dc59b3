//! The shared fault-injection switch.

use std::sync::atomic::{AtomicBool, Ordering};

/// Process-wide switch controlling whether the transaction endpoint
/// simulates a failing downstream dependency.
///
/// Starts healthy (`false`). Flipped only by [`ChaosSwitch::toggle`],
/// read by every transaction request.
pub struct ChaosSwitch {
    broken: AtomicBool,
}

impl ChaosSwitch {
    /// Create a new switch in the healthy state.
    pub fn new() -> Self {
        Self {
            broken: AtomicBool::new(false),
        }
    }

    /// Whether the simulated failure mode is active.
    pub fn is_broken(&self) -> bool {
        self.broken.load(Ordering::Acquire)
    }

    /// Flip the switch unconditionally and return the new state.
    ///
    /// `fetch_xor` keeps concurrent toggles from losing a flip: each call
    /// negates exactly once, whatever the interleaving.
    pub fn toggle(&self) -> bool {
        let now_broken = !self.broken.fetch_xor(true, Ordering::AcqRel);
        tracing::info!(chaos_mode = now_broken, "Chaos mode toggled");
        now_broken
    }
}

impl Default for ChaosSwitch {
    fn default() -> Self {
        Self::new()
    }
}
