//! The break catalog: the fixed set of named breaks callers can take.
//!
//! Every break runs the same mutation; the only thing a kind carries is its
//! wire name and the summary line echoed back to the caller.

use serde::{Deserialize, Serialize};

/// One named break from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakKind {
    TakeABreak,
    WatchNetflix,
    ShowMeme,
    BathroomBreak,
    CoffeeMission,
    UrgentCall,
    DeepThinking,
    EmailOrganizing,
}

impl BreakKind {
    /// All catalog entries, in listing order.
    pub fn all() -> &'static [BreakKind] {
        &[
            BreakKind::TakeABreak,
            BreakKind::WatchNetflix,
            BreakKind::ShowMeme,
            BreakKind::BathroomBreak,
            BreakKind::CoffeeMission,
            BreakKind::UrgentCall,
            BreakKind::DeepThinking,
            BreakKind::EmailOrganizing,
        ]
    }

    /// The wire name callers use to select this break.
    pub fn name(&self) -> &'static str {
        match self {
            BreakKind::TakeABreak => "take_a_break",
            BreakKind::WatchNetflix => "watch_netflix",
            BreakKind::ShowMeme => "show_meme",
            BreakKind::BathroomBreak => "bathroom_break",
            BreakKind::CoffeeMission => "coffee_mission",
            BreakKind::UrgentCall => "urgent_call",
            BreakKind::DeepThinking => "deep_thinking",
            BreakKind::EmailOrganizing => "email_organizing",
        }
    }

    /// The human-readable summary echoed back in the break report.
    pub fn summary(&self) -> &'static str {
        match self {
            BreakKind::TakeABreak => "taking a short break...",
            BreakKind::WatchNetflix => "Just one more episode… or maybe three.",
            BreakKind::ShowMeme => {
                "Not just a meme, but a masterpiece of modern media art!"
            }
            BreakKind::BathroomBreak => "Bathroom break with just a bit of phone time",
            BreakKind::CoffeeMission => "A cup of coffee! with a little office stroll",
            BreakKind::UrgentCall => "Urgent! My brain is CALLing for a break...!",
            BreakKind::DeepThinking => {
                "Let's think about the future of this company... (blank stare)"
            }
            BreakKind::EmailOrganizing => {
                "Organizing emails... and maybe some online shopping"
            }
        }
    }

    /// Resolve a wire name to a catalog entry.
    pub fn from_name(name: &str) -> Option<BreakKind> {
        BreakKind::all().iter().copied().find(|k| k.name() == name)
    }
}
