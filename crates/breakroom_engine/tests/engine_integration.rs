//! Integration tests for the engine: concurrent breaks against one store,
//! breaks interleaving with the background tickers.

use breakroom_core::{ScriptedRandom, StateStore};
use breakroom_engine::{
    spawn_boss_cooldown, spawn_stress_decay, BreakHandler, BreakKind, DelayGate, TickerConfig,
};
use std::sync::Arc;
use std::time::Duration;

fn quiet_gate() -> DelayGate {
    DelayGate::with_delay(Duration::from_millis(10))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_breaks_lose_no_updates() {
    // Alertness 0: no roll can succeed (draws are >= 1), so every break is
    // a pure reduction of 1 and the final stress is exactly 100 - N. The
    // single-value script keeps draws deterministic even though concurrent
    // breaks interleave on the shared source.
    let store = Arc::new(StateStore::new(0, Duration::from_secs(300)));
    store.set_levels(100, 0).await;

    let handler = Arc::new(BreakHandler::new(
        store.clone(),
        Arc::new(ScriptedRandom::new(vec![1])),
        quiet_gate(),
    ));

    let n = 64u8;
    let mut handles = Vec::new();
    for i in 0..n {
        let handler = handler.clone();
        let kind = BreakKind::all()[i as usize % BreakKind::all().len()];
        handles.push(tokio::spawn(async move { handler.perform(kind).await }));
    }
    for h in handles {
        let report = h.await.unwrap();
        assert!(report.stress_level <= 100);
        assert_eq!(report.boss_alert_level, 0);
    }

    assert_eq!(store.snapshot().await.stress_level, 100 - n);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_breaks_interleave_with_tickers() {
    let store = Arc::new(StateStore::new(100, Duration::from_millis(20)));
    let handler = Arc::new(BreakHandler::new(
        store.clone(),
        Arc::new(ScriptedRandom::new(vec![3, 1, 40, 80])),
        quiet_gate(),
    ));

    let decay = spawn_stress_decay(store.clone(), TickerConfig::testing());
    let cooldown = spawn_boss_cooldown(store.clone());

    let mut handles = Vec::new();
    for _ in 0..32 {
        let handler = handler.clone();
        handles.push(tokio::spawn(async move {
            let report = handler.perform(BreakKind::DeepThinking).await;
            tokio::time::sleep(Duration::from_millis(5)).await;
            report
        }));
    }
    for h in handles {
        let report = h.await.unwrap();
        assert!(report.stress_level <= 100, "stress escaped: {:?}", report);
        assert!(report.boss_alert_level <= 5, "alert escaped: {:?}", report);
    }

    let snap = store.snapshot().await;
    assert!(snap.stress_level <= 100);
    assert!(snap.boss_alert_level <= 5);

    decay.abort();
    cooldown.abort();
}

#[tokio::test]
async fn test_gated_break_does_not_block_tickers() {
    // A break stuck at the gate must not stop the cooldown ticker from
    // lowering the alert level in the background.
    let store = Arc::new(StateStore::new(0, Duration::from_millis(50)));
    store.set_levels(50, 5).await;

    let handler = Arc::new(BreakHandler::new(
        store.clone(),
        Arc::new(ScriptedRandom::new(vec![1, 100])),
        DelayGate::with_delay(Duration::from_millis(200)),
    ));

    let cooldown = spawn_boss_cooldown(store.clone());

    let h = {
        let handler = handler.clone();
        tokio::spawn(async move { handler.perform(BreakKind::TakeABreak).await })
    };

    // While the break sleeps at the gate, cooldown ticks keep landing.
    tokio::time::sleep(Duration::from_millis(130)).await;
    assert!(
        store.snapshot().await.boss_alert_level < 5,
        "cooldown ticker starved by a gated break"
    );

    let report = h.await.unwrap();
    assert!(report.stress_level <= 50);

    cooldown.abort();
}
