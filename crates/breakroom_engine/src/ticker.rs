//! The two perpetual background tickers.
//!
//! Both are plain `tokio::spawn` loops on a fixed period, started once at
//! startup and never joined: stress creeps back up every decay period, the
//! boss calms down every cooldown period. Each tick is one short critical
//! section on the store; the sleeps between ticks hold no lock.

use breakroom_core::StateStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Configuration for the stress decay ticker.
#[derive(Debug, Clone)]
pub struct TickerConfig {
    /// How often stress creeps up by one (default: 60s).
    pub decay_interval: Duration,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            decay_interval: Duration::from_secs(60),
        }
    }
}

impl TickerConfig {
    /// Very fast ticks for testing.
    pub fn testing() -> Self {
        Self {
            decay_interval: Duration::from_millis(20),
        }
    }
}

/// Spawn the stress decay loop: every `decay_interval`, stress +1 toward 100.
pub fn spawn_stress_decay(store: Arc<StateStore>, config: TickerConfig) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(config.decay_interval);
        // The first tick of a tokio interval completes immediately; consume
        // it so the first mutation lands one full period after spawn.
        interval.tick().await;
        loop {
            interval.tick().await;
            store.decay_stress_tick().await;
            let snap = store.snapshot().await;
            tracing::trace!(stress = snap.stress_level, "stress decay tick");
        }
    })
}

/// Spawn the boss cooldown loop: every cooldown period, alert -1 toward 0.
///
/// The period is read from the store once at spawn time and is fixed for
/// the life of the process.
pub fn spawn_boss_cooldown(store: Arc<StateStore>) -> JoinHandle<()> {
    let period = store.cooldown();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.tick().await;
        loop {
            interval.tick().await;
            store.cooldown_tick().await;
            let snap = store.snapshot().await;
            tracing::trace!(alert = snap.boss_alert_level, "boss cooldown tick");
        }
    })
}
