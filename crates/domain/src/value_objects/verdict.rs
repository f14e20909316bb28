//! End-of-game verdict and coaching recommendation

use std::fmt;

use serde::{Deserialize, Serialize};

use super::scenario::FlagCategory;

/// Risk score at or above which a player earns the top verdict
pub const GUARDIAN_THRESHOLD: u8 = 85;

/// Risk score at or above which a player is aware but vulnerable
pub const AWARE_THRESHOLD: u8 = 60;

/// Player rating bands, serialized as the user-facing titles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerdictTier {
    #[serde(rename = "Cyber Guardian")]
    CyberGuardian,
    #[serde(rename = "Aware but Vulnerable")]
    AwareButVulnerable,
    #[serde(rename = "High Risk Target")]
    HighRiskTarget,
}

impl VerdictTier {
    pub fn from_score(score: u8) -> Self {
        if score >= GUARDIAN_THRESHOLD {
            Self::CyberGuardian
        } else if score >= AWARE_THRESHOLD {
            Self::AwareButVulnerable
        } else {
            Self::HighRiskTarget
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::CyberGuardian => "Cyber Guardian",
            Self::AwareButVulnerable => "Aware but Vulnerable",
            Self::HighRiskTarget => "High Risk Target",
        }
    }
}

impl fmt::Display for VerdictTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Coaching line for the player's dominant weakness, or a generic
/// closing line when no weakness was recorded
pub fn recommendation_for(dominant: Option<FlagCategory>) -> &'static str {
    match dominant {
        Some(FlagCategory::Urgency) => {
            "Slow down when a message pushes you to act immediately. \
             A real deadline survives a pause and a phone call."
        }
        Some(FlagCategory::Authority) => {
            "Treat names like bank, police, or tax department as claims, \
             not proof. Reach the institution through its official number."
        }
        Some(FlagCategory::Reward) => {
            "Be suspicious of money you did not expect. Free prizes and \
             cashback offers are the cheapest bait there is."
        }
        Some(FlagCategory::Link) => {
            "Never open links from unknown senders. Navigate to the \
             official site or app yourself."
        }
        None => {
            "Great instincts. Keep verifying unexpected messages through \
             official channels."
        }
    }
}

/// Summary handed back when a game ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalVerdict {
    pub verdict: VerdictTier,
    pub recommendation: String,
    pub dominant_weakness: Option<FlagCategory>,
    pub score: u8,
    pub rounds_played: u8,
}
