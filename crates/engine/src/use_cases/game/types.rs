//! Wire types for the training game endpoints.

use std::collections::BTreeMap;

use scamguard_domain::{FlagCategory, GameSession, GeneratedScenario, SessionId, TOTAL_ROUNDS};
use serde::{Deserialize, Serialize};

/// Scenario as shown to the player. The correct answers stay server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioView {
    pub round: u8,
    pub total_rounds: u8,
    pub text: String,
}

impl ScenarioView {
    pub fn from_scenario(round: u8, scenario: &GeneratedScenario) -> Self {
        Self {
            round,
            total_rounds: TOTAL_ROUNDS,
            text: scenario.text().to_string(),
        }
    }
}

/// Response to a game start request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartedGame {
    pub session_id: SessionId,
    pub risk_score: u8,
    pub scenario: ScenarioView,
}

/// A player's answer for one round. Missing fields read as "no answer".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoundAnswer {
    pub flags: Vec<String>,
    pub action: Option<String>,
}

/// Snapshot of a running or finished session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateView {
    pub session_id: SessionId,
    pub risk_score: u8,
    pub current_round: u8,
    pub total_rounds: u8,
    pub game_over: bool,
    pub vulnerability: BTreeMap<FlagCategory, u32>,
    pub current_scenario: Option<ScenarioView>,
}

impl GameStateView {
    pub fn from_session(session: &GameSession) -> Self {
        Self {
            session_id: session.id(),
            risk_score: session.risk_score(),
            current_round: session.current_round(),
            total_rounds: TOTAL_ROUNDS,
            game_over: session.game_over(),
            vulnerability: session.vulnerability().snapshot(),
            current_scenario: session
                .current_scenario()
                .map(|scenario| ScenarioView::from_scenario(session.current_round(), scenario)),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use scamguard_domain::ScenarioPool;

    use super::*;

    #[test]
    fn test_round_answer_defaults_to_no_answer() {
        let answer: RoundAnswer = serde_json::from_str("{}").unwrap();
        assert!(answer.flags.is_empty());
        assert!(answer.action.is_none());

        let answer: RoundAnswer =
            serde_json::from_str(r#"{"flags":["link"],"action":"verify"}"#).unwrap();
        assert_eq!(answer.flags, vec!["link"]);
        assert_eq!(answer.action.as_deref(), Some("verify"));
    }

    #[test]
    fn test_state_view_never_leaks_answers() {
        let pool = ScenarioPool::builtin();
        let mut rng = StdRng::seed_from_u64(3);
        let session = GameSession::start(SessionId::new(), &pool, &mut rng);

        let json = serde_json::to_value(GameStateView::from_session(&session)).unwrap();

        assert_eq!(json["currentRound"], 0);
        assert_eq!(json["totalRounds"], 7);
        assert_eq!(json["gameOver"], false);
        assert!(json["currentScenario"]["text"].is_string());
        assert!(json["currentScenario"].get("correctFlags").is_none());
        assert!(json["currentScenario"].get("correctAction").is_none());
        // All four categories appear even before any mistakes
        assert_eq!(json["vulnerability"].as_object().unwrap().len(), 4);
    }
}
