//! # Breakroom Core
//!
//! The well-being register and everything that guards it:
//!
//! - [`state`] — the register itself (two bounded scalars) and its clamps
//! - [`store`] — the single lock serializing every read and write
//! - [`rng`] — the randomness seam used by the break handler
//! - [`config`] — startup configuration (TOML file + env overrides)
//!
//! Higher layers (the engine, the gateway, the binary) never touch the
//! register directly; they hold an `Arc<StateStore>` and go through its
//! operations.

pub mod config;
pub mod rng;
pub mod state;
pub mod store;

pub use config::{BossConfig, BreakroomConfig, GatewayConfig};
pub use rng::{RandomSource, ScriptedRandom, ThreadRandom};
pub use state::{StateSnapshot, Wellbeing};
pub use store::StateStore;
