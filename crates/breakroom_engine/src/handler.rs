//! The break handler: the one mutation algorithm every break shares.
//!
//! A break is: wait at the gate, draw a reduction and an alert roll, apply
//! both to the register in one atomic compound update, report the result.
//! The handler has no state of its own; any number of callers may run it
//! concurrently, interleaving freely with the tickers.

use crate::catalog::BreakKind;
use crate::gate::DelayGate;
use breakroom_core::{RandomSource, StateSnapshot, StateStore};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Outcome of one break: the summary label plus the post-mutation levels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakReport {
    pub summary: String,
    pub stress_level: u8,
    pub boss_alert_level: u8,
}

impl BreakReport {
    fn new(kind: BreakKind, snapshot: StateSnapshot) -> Self {
        Self {
            summary: kind.summary().to_string(),
            stress_level: snapshot.stress_level,
            boss_alert_level: snapshot.boss_alert_level,
        }
    }

    /// The three-line textual rendering external callers parse by label.
    pub fn render(&self) -> String {
        format!(
            "Break Summary: {}\nStress Level: {}\nBoss Alert Level: {}",
            self.summary, self.stress_level, self.boss_alert_level
        )
    }
}

pub struct BreakHandler {
    store: Arc<StateStore>,
    rng: Arc<dyn RandomSource>,
    gate: DelayGate,
}

impl BreakHandler {
    pub fn new(store: Arc<StateStore>, rng: Arc<dyn RandomSource>, gate: DelayGate) -> Self {
        Self { store, rng, gate }
    }

    /// Take one break. Total: no error path, at most one suspension (the
    /// gate), exactly one compound mutation of the register.
    pub async fn perform(&self, kind: BreakKind) -> BreakReport {
        self.gate.wait(&self.store).await;

        let reduction = self.rng.draw();
        let roll = self.rng.draw();
        let alert_roll_succeeded = roll <= self.store.alertness();

        let snapshot = self
            .store
            .apply_break_effect(reduction, alert_roll_succeeded)
            .await;

        tracing::debug!(
            kind = kind.name(),
            reduction,
            roll,
            alert_roll_succeeded,
            stress = snapshot.stress_level,
            alert = snapshot.boss_alert_level,
            "break taken"
        );

        BreakReport::new(kind, snapshot)
    }

    /// The store this handler mutates (shared with the tickers and gateway).
    pub fn store(&self) -> &Arc<StateStore> {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use breakroom_core::ScriptedRandom;
    use std::time::Duration;

    fn handler_with(script: Vec<u8>, alertness: u8) -> BreakHandler {
        let store = Arc::new(StateStore::new(alertness, Duration::from_secs(300)));
        BreakHandler::new(
            store,
            Arc::new(ScriptedRandom::new(script)),
            DelayGate::with_delay(Duration::from_millis(10)),
        )
    }

    #[tokio::test]
    async fn test_deterministic_break_with_successful_roll() {
        // reduction 30, roll 40 <= alertness 50: stress 50 -> 20, alert 0 -> 1
        let handler = handler_with(vec![30, 40], 50);
        let report = handler.perform(BreakKind::TakeABreak).await;
        assert_eq!(report.stress_level, 20);
        assert_eq!(report.boss_alert_level, 1);
    }

    #[tokio::test]
    async fn test_deterministic_break_with_failed_roll() {
        // reduction 10, roll 90 > alertness 50: stress 50 -> 40, alert stays 0
        let handler = handler_with(vec![10, 90], 50);
        let report = handler.perform(BreakKind::WatchNetflix).await;
        assert_eq!(report.stress_level, 40);
        assert_eq!(report.boss_alert_level, 0);
    }

    #[tokio::test]
    async fn test_report_carries_summary() {
        let handler = handler_with(vec![1, 100], 0);
        let report = handler.perform(BreakKind::CoffeeMission).await;
        assert_eq!(report.summary, BreakKind::CoffeeMission.summary());
    }

    #[tokio::test]
    async fn test_render_three_line_format() {
        let handler = handler_with(vec![30, 40], 50);
        let report = handler.perform(BreakKind::ShowMeme).await;
        let text = report.render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Break Summary: "));
        assert_eq!(lines[1], "Stress Level: 20");
        assert_eq!(lines[2], "Boss Alert Level: 1");
    }

    #[tokio::test]
    async fn test_gate_lag_by_one_break() {
        // The gate reads the alert level before the mutation that might max
        // it out, so the break that reaches 5 is itself not delayed; only
        // the next one is.
        let store = Arc::new(StateStore::new(100, Duration::from_secs(300)));
        let handler = BreakHandler::new(
            store.clone(),
            Arc::new(ScriptedRandom::new(vec![1, 1])), // every roll succeeds
            DelayGate::with_delay(Duration::from_millis(100)),
        );
        store.set_levels(50, 4).await;

        let started = std::time::Instant::now();
        let report = handler.perform(BreakKind::UrgentCall).await;
        assert_eq!(report.boss_alert_level, 5);
        assert!(
            started.elapsed() < Duration::from_millis(50),
            "break that raised alert to 5 was itself gated"
        );

        let started = std::time::Instant::now();
        handler.perform(BreakKind::UrgentCall).await;
        assert!(
            started.elapsed() >= Duration::from_millis(100),
            "break after alert reached 5 was not gated"
        );
    }
}
