//! Domain entities - Core business objects with identity

mod game_session;

pub use game_session::{
    GameSession, RoundResult, VulnerabilityProfile, ADAPTIVE_FROM_ROUND, FALSE_FLAG_PENALTY,
    MISSED_FLAG_PENALTY, STARTING_RISK_SCORE, TOTAL_ROUNDS, WRONG_ACTION_PENALTY,
};
