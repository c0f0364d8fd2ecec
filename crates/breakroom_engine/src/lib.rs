//! # Breakroom Engine
//!
//! The foreground and background halves of the well-being simulation:
//!
//! - [`gate`] — the delay gate that slows breaks once the boss is maxed out
//! - [`catalog`] — the fixed set of named breaks
//! - [`handler`] — the one break algorithm (gate → draw → mutate → report)
//! - [`ticker`] — the two perpetual loops (stress decay, boss cooldown)
//!
//! All shared state lives in `breakroom_core::StateStore`; the engine only
//! ever holds an `Arc` to it. An unbounded number of concurrent breaks and
//! the two tickers interleave arbitrarily, serialized per-operation by the
//! store.

pub mod catalog;
pub mod gate;
pub mod handler;
pub mod ticker;

pub use catalog::BreakKind;
pub use gate::{DelayGate, GATE_DELAY, GATE_THRESHOLD};
pub use handler::{BreakHandler, BreakReport};
pub use ticker::{spawn_boss_cooldown, spawn_stress_decay, TickerConfig};
