//! Randomness behind a seam.
//!
//! The break handler draws two numbers per break (the stress reduction and
//! the alert roll). Both come through [`RandomSource`] so tests can swap in
//! a scripted sequence and get fully deterministic outcomes.

use rand::Rng;
use std::sync::Mutex;

/// Supplies uniformly distributed integers in `[1, 100]`.
pub trait RandomSource: Send + Sync {
    fn draw(&self) -> u8;
}

/// Production source backed by the thread-local generator.
#[derive(Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn draw(&self) -> u8 {
        rand::thread_rng().gen_range(1..=100)
    }
}

/// Deterministic source that replays a fixed script, cycling when exhausted.
///
/// Intended for tests: `ScriptedRandom::new(vec![30, 40])` makes the first
/// break draw reduction 30 and roll 40, the second break the same, and so on.
pub struct ScriptedRandom {
    script: Vec<u8>,
    cursor: Mutex<usize>,
}

impl ScriptedRandom {
    /// Build from a non-empty script of values in `[1, 100]`.
    pub fn new(script: Vec<u8>) -> Self {
        assert!(!script.is_empty(), "script must not be empty");
        Self {
            script,
            cursor: Mutex::new(0),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn draw(&self) -> u8 {
        let mut cursor = self.cursor.lock().expect("rng cursor poisoned");
        let v = self.script[*cursor % self.script.len()];
        *cursor += 1;
        v
    }
}
