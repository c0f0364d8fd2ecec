//! The well-being register and its bounds.
//!
//! The whole data model is deliberately a single pair of bounded scalars:
//! a stress level and a boss alert level. Everything interesting about the
//! system is in how that pair is mutated concurrently, not in the pair
//! itself.

use serde::{Deserialize, Serialize};

/// Inclusive stress bounds.
pub const STRESS_MIN: u8 = 0;
pub const STRESS_MAX: u8 = 100;

/// Inclusive alert bounds.
pub const ALERT_MIN: u8 = 0;
pub const ALERT_MAX: u8 = 5;

/// Clamp `v` into `[lo, hi]`.
///
/// Arithmetic on the register happens in `i16` so that a reduction larger
/// than the current stress underflows into negative territory instead of
/// wrapping, then gets pulled back to the floor here.
#[inline]
pub fn clamp(v: i16, lo: u8, hi: u8) -> u8 {
    v.clamp(lo as i16, hi as i16) as u8
}

/// The mutable well-being register.
///
/// Exactly one instance exists per process, owned by
/// [`StateStore`](crate::store::StateStore). Nothing else holds a mutable
/// reference to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wellbeing {
    /// Stress level (0–100). Drops on a break, creeps back up over time.
    pub stress_level: u8,
    /// Boss alert level (0–5). May rise on a break, cools down over time.
    pub boss_alert_level: u8,
}

impl Default for Wellbeing {
    fn default() -> Self {
        // A freshly started agent is already half stressed and unobserved.
        Self {
            stress_level: 50,
            boss_alert_level: 0,
        }
    }
}

/// A consistent point-in-time read of the register.
///
/// Both fields come from one critical section, so every snapshot is a value
/// the register actually held at some instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub stress_level: u8,
    pub boss_alert_level: u8,
}

impl From<Wellbeing> for StateSnapshot {
    fn from(w: Wellbeing) -> Self {
        Self {
            stress_level: w.stress_level,
            boss_alert_level: w.boss_alert_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_in_range_is_identity() {
        assert_eq!(clamp(42, STRESS_MIN, STRESS_MAX), 42);
        assert_eq!(clamp(0, STRESS_MIN, STRESS_MAX), 0);
        assert_eq!(clamp(100, STRESS_MIN, STRESS_MAX), 100);
    }

    #[test]
    fn test_clamp_saturates_both_ends() {
        assert_eq!(clamp(-30, STRESS_MIN, STRESS_MAX), 0);
        assert_eq!(clamp(130, STRESS_MIN, STRESS_MAX), 100);
        assert_eq!(clamp(6, ALERT_MIN, ALERT_MAX), 5);
        assert_eq!(clamp(-1, ALERT_MIN, ALERT_MAX), 0);
    }

    #[test]
    fn test_default_register_seed() {
        let w = Wellbeing::default();
        assert_eq!(w.stress_level, 50);
        assert_eq!(w.boss_alert_level, 0);
    }

    #[test]
    fn test_snapshot_from_register() {
        let w = Wellbeing {
            stress_level: 7,
            boss_alert_level: 3,
        };
        let snap = StateSnapshot::from(w);
        assert_eq!(snap.stress_level, 7);
        assert_eq!(snap.boss_alert_level, 3);
    }
}
