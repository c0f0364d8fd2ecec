use breakroom_engine::{BreakKind, BreakReport};
use serde::{Deserialize, Serialize};

/// One catalog entry as listed by `GET /breaks`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakListing {
    pub name: String,
    pub summary: String,
}

impl From<BreakKind> for BreakListing {
    fn from(kind: BreakKind) -> Self {
        Self {
            name: kind.name().to_string(),
            summary: kind.summary().to_string(),
        }
    }
}

/// Response body for `POST /breaks/:name`.
///
/// Carries the structured fields plus `text`, the three-line rendering
/// callers parse by label (`Break Summary:`, `Stress Level:`,
/// `Boss Alert Level:`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakResponse {
    pub summary: String,
    pub stress_level: u8,
    pub boss_alert_level: u8,
    pub text: String,
}

impl From<BreakReport> for BreakResponse {
    fn from(report: BreakReport) -> Self {
        let text = report.render();
        Self {
            summary: report.summary,
            stress_level: report.stress_level,
            boss_alert_level: report.boss_alert_level,
            text,
        }
    }
}
