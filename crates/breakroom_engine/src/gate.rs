//! The delay gate: best-effort slow-down once the boss is fully alert.
//!
//! The gate reads the alert level, and if it is at its maximum it suspends
//! the calling task for a fixed duration before the break proceeds. The
//! read and the break's later mutation are two separate store operations;
//! the level may drop (cooldown tick) or rise during the sleep, and the
//! gate does not re-check. It slows callers down, it does not guarantee
//! anything.

use breakroom_core::state::ALERT_MAX;
use breakroom_core::StateStore;
use std::time::Duration;

/// Alert level at which breaks start getting delayed.
pub const GATE_THRESHOLD: u8 = ALERT_MAX;

/// How long a gated break waits before proceeding.
pub const GATE_DELAY: Duration = Duration::from_secs(20);

#[derive(Debug, Clone)]
pub struct DelayGate {
    delay: Duration,
}

impl Default for DelayGate {
    fn default() -> Self {
        Self { delay: GATE_DELAY }
    }
}

impl DelayGate {
    /// Gate with a custom delay (tests use short ones).
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    /// Suspend the caller if the boss is fully alert.
    ///
    /// The store's lock is released before the sleep begins; only the
    /// calling task waits, never the tickers or other callers.
    pub async fn wait(&self, store: &StateStore) {
        let alert = store.alert_level().await;
        if alert >= GATE_THRESHOLD {
            tracing::debug!(alert, delay_ms = self.delay.as_millis() as u64, "break gated");
            tokio::time::sleep(self.delay).await;
        }
    }
}
