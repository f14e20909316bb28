pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use error::DomainError;

// Re-export ID types
pub use ids::SessionId;

// Re-export entities (explicit list in entities/mod.rs)
pub use entities::{
    GameSession, RoundResult, VulnerabilityProfile, ADAPTIVE_FROM_ROUND, FALSE_FLAG_PENALTY,
    MISSED_FLAG_PENALTY, STARTING_RISK_SCORE, TOTAL_ROUNDS, WRONG_ACTION_PENALTY,
};

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{
    learning_cards_for, recommendation_for, FinalVerdict, FlagCategory, GeneratedScenario,
    ResponseAction, RiskLabel, ScamAssessment, ScenarioPool, ScenarioTemplate, TriggerCategory,
    TriggerLexicon, TriggerScan, VerdictTier, HIGH_RISK_THRESHOLD, KEYWORD_SCORE, LINK_SCORE,
    MODERATE_RISK_THRESHOLD,
};
