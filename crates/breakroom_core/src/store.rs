//! The state store: serialized access to the well-being register.
//!
//! Every read and write of [`Wellbeing`] goes through this store, each one
//! a single critical section under one `RwLock`. Concurrent operations are
//! linearizable with respect to each other; no operation sleeps or does I/O
//! while holding the lock.

use crate::state::{clamp, StateSnapshot, Wellbeing, ALERT_MAX, ALERT_MIN, STRESS_MAX, STRESS_MIN};
use std::time::Duration;
use tokio::sync::RwLock;

/// Owns the single well-being register plus the immutable-after-init
/// parameters that were read from configuration at startup.
///
/// The immutable fields live outside the lock: they never change after
/// construction, so reading them needs no critical section.
pub struct StateStore {
    register: RwLock<Wellbeing>,
    boss_alertness: u8,
    boss_cooldown: Duration,
}

impl StateStore {
    /// Create a store with the default register seed (stress 50, alert 0).
    pub fn new(boss_alertness: u8, boss_cooldown: Duration) -> Self {
        Self::with_register(Wellbeing::default(), boss_alertness, boss_cooldown)
    }

    /// Create a store with an explicit starting register.
    pub fn with_register(register: Wellbeing, boss_alertness: u8, boss_cooldown: Duration) -> Self {
        Self {
            register: RwLock::new(register),
            boss_alertness,
            boss_cooldown,
        }
    }

    /// Consistent read of both levels under one critical section.
    pub async fn snapshot(&self) -> StateSnapshot {
        let reg = self.register.read().await;
        StateSnapshot::from(*reg)
    }

    /// Apply one break as a single atomic compound update.
    ///
    /// Lowers stress by `reduction` (floored at 0) and, if the alert roll
    /// succeeded, raises the alert level by one (capped at 5). Both clamps
    /// use the register as it stands when the write lock is taken, not any
    /// value the caller read earlier.
    pub async fn apply_break_effect(
        &self,
        reduction: u8,
        alert_roll_succeeded: bool,
    ) -> StateSnapshot {
        let mut reg = self.register.write().await;
        reg.stress_level = clamp(
            reg.stress_level as i16 - reduction as i16,
            STRESS_MIN,
            STRESS_MAX,
        );
        if alert_roll_succeeded {
            reg.boss_alert_level = clamp(reg.boss_alert_level as i16 + 1, ALERT_MIN, ALERT_MAX);
        }
        StateSnapshot::from(*reg)
    }

    /// One stress decay tick: stress creeps up by 1 toward the ceiling.
    pub async fn decay_stress_tick(&self) {
        let mut reg = self.register.write().await;
        if reg.stress_level < STRESS_MAX {
            reg.stress_level += 1;
        }
    }

    /// One cooldown tick: the boss calms down by 1 toward the floor.
    pub async fn cooldown_tick(&self) {
        let mut reg = self.register.write().await;
        if reg.boss_alert_level > ALERT_MIN {
            reg.boss_alert_level -= 1;
        }
    }

    /// Current boss alert level (used by the delay gate).
    pub async fn alert_level(&self) -> u8 {
        self.register.read().await.boss_alert_level
    }

    /// Chance out of 100 that a break raises the alert level.
    pub fn alertness(&self) -> u8 {
        self.boss_alertness
    }

    /// Period of the boss cooldown ticker, fixed for the process lifetime.
    pub fn cooldown(&self) -> Duration {
        self.boss_cooldown
    }

    /// Force both levels (for tests or manual intervention).
    pub async fn set_levels(&self, stress_level: u8, boss_alert_level: u8) {
        let mut reg = self.register.write().await;
        reg.stress_level = stress_level;
        reg.boss_alert_level = boss_alert_level;
    }
}
