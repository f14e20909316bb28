//! Game session aggregate
//!
//! Tracks one player's run through the training game: the dealt
//! scenarios, the shrinking risk score, and the per-category mistake
//! profile that steers adaptive scenario selection from the third
//! round onward.

use std::collections::{BTreeMap, BTreeSet};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::SessionId;
use crate::value_objects::{
    recommendation_for, FinalVerdict, FlagCategory, GeneratedScenario, ResponseAction,
    ScenarioPool, VerdictTier,
};

/// Rounds in a full game
pub const TOTAL_ROUNDS: u8 = 7;

/// Score a player starts with; penalties only ever subtract
pub const STARTING_RISK_SCORE: u8 = 70;

/// Penalty for each correct flag the player failed to raise
pub const MISSED_FLAG_PENALTY: u8 = 5;

/// Penalty for each flag raised against nothing in the scenario
pub const FALSE_FLAG_PENALTY: u8 = 3;

/// Penalty for picking the wrong response action
pub const WRONG_ACTION_PENALTY: u8 = 15;

/// First zero-based round that draws scenarios adaptively
pub const ADAPTIVE_FROM_ROUND: u8 = 2;

/// Per-category mistake counters driving adaptive selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VulnerabilityProfile {
    counts: BTreeMap<FlagCategory, u32>,
}

impl VulnerabilityProfile {
    pub fn record(&mut self, flag: FlagCategory) {
        *self.counts.entry(flag).or_insert(0) += 1;
    }

    pub fn count(&self, flag: FlagCategory) -> u32 {
        self.counts.get(&flag).copied().unwrap_or(0)
    }

    /// The category with the most recorded mistakes, or `None` while the
    /// slate is clean. Ties break toward the earlier declared category,
    /// urgency first.
    pub fn dominant(&self) -> Option<FlagCategory> {
        let mut best: Option<(FlagCategory, u32)> = None;
        for flag in FlagCategory::ALL {
            let count = self.count(flag);
            if count == 0 {
                continue;
            }
            match best {
                Some((_, best_count)) if best_count >= count => {}
                _ => best = Some((flag, count)),
            }
        }
        best.map(|(flag, _)| flag)
    }

    /// All four counters with zeros filled in, for display
    pub fn snapshot(&self) -> BTreeMap<FlagCategory, u32> {
        FlagCategory::ALL
            .iter()
            .map(|flag| (*flag, self.count(*flag)))
            .collect()
    }
}

/// Outcome of scoring one round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    pub success: bool,
    pub penalty: u8,
    pub score: u8,
    pub game_over: bool,
    pub selected_flags: Vec<FlagCategory>,
    pub correct_flags: Vec<FlagCategory>,
    pub action: Option<ResponseAction>,
    pub correct_action: ResponseAction,
}

/// One player's run through the training game.
///
/// The session owns every scenario it has dealt, so answers are always
/// scored against exactly the text the player saw. All mutation goes
/// through [`GameSession::deal_next`] and [`GameSession::submit_round`],
/// which enforce the deal-then-answer rhythm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    id: SessionId,
    risk_score: u8,
    current_round: u8,
    vulnerability: VulnerabilityProfile,
    history: Vec<GeneratedScenario>,
}

impl GameSession {
    /// Open a session and deal the first scenario
    pub fn start<R: Rng>(id: SessionId, pool: &ScenarioPool, rng: &mut R) -> Self {
        let first = pool.pick_uniform(rng).instantiate(rng);
        Self {
            id,
            risk_score: STARTING_RISK_SCORE,
            current_round: 0,
            vulnerability: VulnerabilityProfile::default(),
            history: vec![first],
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn risk_score(&self) -> u8 {
        self.risk_score
    }

    /// Zero-based index of the round awaiting an answer
    pub fn current_round(&self) -> u8 {
        self.current_round
    }

    pub fn vulnerability(&self) -> &VulnerabilityProfile {
        &self.vulnerability
    }

    pub fn history(&self) -> &[GeneratedScenario] {
        &self.history
    }

    pub fn game_over(&self) -> bool {
        self.current_round >= TOTAL_ROUNDS
    }

    /// Scenario awaiting an answer this round, if one has been dealt
    pub fn current_scenario(&self) -> Option<&GeneratedScenario> {
        if self.game_over() {
            None
        } else {
            self.history.get(self.current_round as usize)
        }
    }

    /// Deal the scenario for the current round.
    ///
    /// The opening rounds draw uniformly; from [`ADAPTIVE_FROM_ROUND`]
    /// onward the draw narrows to templates carrying the player's
    /// dominant weakness, widening back to the whole pool while the
    /// mistake slate is clean.
    pub fn deal_next<R: Rng>(
        &mut self,
        pool: &ScenarioPool,
        rng: &mut R,
    ) -> Result<&GeneratedScenario, DomainError> {
        if self.game_over() {
            return Err(DomainError::invalid_session_state(
                "game is already complete",
            ));
        }
        if self.history.len() > self.current_round as usize {
            return Err(DomainError::invalid_session_state(
                "current round already has a scenario",
            ));
        }

        let template = if self.current_round < ADAPTIVE_FROM_ROUND {
            pool.pick_uniform(rng)
        } else {
            match self.vulnerability.dominant() {
                Some(flag) => pool.pick_for_flag(flag, rng),
                None => pool.pick_uniform(rng),
            }
        };

        self.history.push(template.instantiate(rng));
        let index = self.history.len() - 1;
        Ok(&self.history[index])
    }

    /// Score the player's answer for the current round.
    ///
    /// Each missed correct flag costs [`MISSED_FLAG_PENALTY`] and marks
    /// that category in the vulnerability profile. Each flag raised
    /// against nothing costs [`FALSE_FLAG_PENALTY`]. A wrong or missing
    /// action costs [`WRONG_ACTION_PENALTY`] and counts against urgency,
    /// since rushed decisions are what the action check trains.
    pub fn submit_round(
        &mut self,
        selected_flags: &BTreeSet<FlagCategory>,
        action: Option<ResponseAction>,
    ) -> Result<RoundResult, DomainError> {
        if self.game_over() {
            return Err(DomainError::invalid_session_state(
                "game is already complete",
            ));
        }
        let scenario = self
            .history
            .get(self.current_round as usize)
            .ok_or_else(|| {
                DomainError::invalid_session_state("no scenario dealt for the current round")
            })?;
        let correct_flags = scenario.correct_flags().clone();
        let correct_action = scenario.correct_action();

        let mut penalty = 0u8;
        for flag in &correct_flags {
            if !selected_flags.contains(flag) {
                penalty += MISSED_FLAG_PENALTY;
                self.vulnerability.record(*flag);
            }
        }
        for _extra in selected_flags.difference(&correct_flags) {
            penalty += FALSE_FLAG_PENALTY;
        }
        if action != Some(correct_action) {
            penalty += WRONG_ACTION_PENALTY;
            self.vulnerability.record(FlagCategory::Urgency);
        }

        self.risk_score = self.risk_score.saturating_sub(penalty);
        self.current_round += 1;

        Ok(RoundResult {
            success: penalty == 0,
            penalty,
            score: self.risk_score,
            game_over: self.game_over(),
            selected_flags: selected_flags.iter().copied().collect(),
            correct_flags: correct_flags.into_iter().collect(),
            action,
            correct_action,
        })
    }

    /// Rate the whole run so far
    pub fn final_verdict(&self) -> FinalVerdict {
        let dominant = self.vulnerability.dominant();
        FinalVerdict {
            verdict: VerdictTier::from_score(self.risk_score),
            recommendation: recommendation_for(dominant).to_string(),
            dominant_weakness: dominant,
            score: self.risk_score,
            rounds_played: self.current_round,
        }
    }
}
