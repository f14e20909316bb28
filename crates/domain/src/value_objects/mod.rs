//! Value objects - Immutable objects defined by their attributes

mod assessment;
mod learning_cards;
mod scenario;
mod triggers;
mod verdict;

pub use assessment::{
    RiskLabel, ScamAssessment, HIGH_RISK_THRESHOLD, ML_WEIGHT, MODERATE_RISK_THRESHOLD,
};
pub use learning_cards::{learning_card, learning_cards_for};
pub use scenario::{
    FlagCategory, GeneratedScenario, ResponseAction, ScenarioPool, ScenarioTemplate, LINK_STEMS,
};
pub use triggers::{TriggerCategory, TriggerLexicon, TriggerScan, KEYWORD_SCORE, LINK_SCORE};
pub use verdict::{
    recommendation_for, FinalVerdict, VerdictTier, AWARE_THRESHOLD, GUARDIAN_THRESHOLD,
};
