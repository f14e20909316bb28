//! Training game use cases.
//!
//! Sessions live behind the [`SessionStore`] port. Round mutations are
//! serialized per session so concurrent submits cannot score the same
//! scenario twice.

mod types;

pub use types::{GameStateView, RoundAnswer, ScenarioView, StartedGame};

use std::collections::BTreeSet;
use std::str::FromStr;
use std::sync::Arc;

use dashmap::DashMap;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scamguard_domain::{
    DomainError, FinalVerdict, FlagCategory, GameSession, ResponseAction, RoundResult,
    ScenarioPool, SessionId,
};
use thiserror::Error;
use tokio::sync::Mutex;

use crate::infrastructure::ports::{SessionStore, StoreError};

/// Errors from the game use cases.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Session {0} not found")]
    SessionNotFound(SessionId),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Application service for the training game.
pub struct GameOps {
    sessions: Arc<dyn SessionStore>,
    pool: Arc<ScenarioPool>,
    rng: Mutex<StdRng>,
    round_locks: DashMap<SessionId, Arc<Mutex<()>>>,
}

impl GameOps {
    pub fn new(sessions: Arc<dyn SessionStore>, pool: Arc<ScenarioPool>) -> Self {
        Self::with_rng(sessions, pool, StdRng::from_entropy())
    }

    /// Seeded constructor so tests can replay exact scenario draws.
    pub fn with_rng(sessions: Arc<dyn SessionStore>, pool: Arc<ScenarioPool>, rng: StdRng) -> Self {
        Self {
            sessions,
            pool,
            rng: Mutex::new(rng),
            round_locks: DashMap::new(),
        }
    }

    /// Open a new session with its first scenario dealt.
    pub async fn start(&self) -> Result<StartedGame, GameError> {
        let id = SessionId::new();
        let session = {
            let mut rng = self.rng.lock().await;
            GameSession::start(id, &self.pool, &mut *rng)
        };
        self.sessions.put(&session).await?;

        tracing::info!(session_id = %id, "Game session started");

        let scenario = session
            .current_scenario()
            .ok_or_else(|| DomainError::invalid_session_state("no scenario dealt on start"))?;

        Ok(StartedGame {
            session_id: id,
            risk_score: session.risk_score(),
            scenario: ScenarioView::from_scenario(session.current_round(), scenario),
        })
    }

    /// Current state of a session, for reconnecting clients.
    pub async fn state(&self, id: SessionId) -> Result<GameStateView, GameError> {
        let session = self.load(id).await?;
        Ok(GameStateView::from_session(&session))
    }

    /// Deal the scenario for the current round.
    pub async fn next_scenario(&self, id: SessionId) -> Result<ScenarioView, GameError> {
        let lock = self.round_lock(id);
        let _guard = lock.lock().await;

        let mut session = self.load_or_forget(id).await?;
        let scenario = {
            let mut rng = self.rng.lock().await;
            session.deal_next(&self.pool, &mut *rng)?.clone()
        };
        let view = ScenarioView::from_scenario(session.current_round(), &scenario);
        self.sessions.put(&session).await?;

        Ok(view)
    }

    /// Score the player's answer for the current round.
    ///
    /// Unknown flag names are skipped; an unknown action reads as no
    /// answer, which the session scores as wrong.
    pub async fn submit_round(
        &self,
        id: SessionId,
        answer: &RoundAnswer,
    ) -> Result<RoundResult, GameError> {
        let lock = self.round_lock(id);
        let _guard = lock.lock().await;

        let mut session = self.load_or_forget(id).await?;
        let flags = parse_flags(&answer.flags);
        let action = answer.action.as_deref().and_then(parse_action);

        let result = session.submit_round(&flags, action)?;
        self.sessions.put(&session).await?;

        if result.game_over {
            self.round_locks.remove(&id);
        }

        tracing::debug!(
            session_id = %id,
            penalty = result.penalty,
            score = result.score,
            game_over = result.game_over,
            "Round scored"
        );

        Ok(result)
    }

    /// Verdict for the run so far. Valid midway through a game.
    pub async fn final_verdict(&self, id: SessionId) -> Result<FinalVerdict, GameError> {
        let session = self.load(id).await?;
        Ok(session.final_verdict())
    }

    async fn load(&self, id: SessionId) -> Result<GameSession, GameError> {
        self.sessions
            .get(id)
            .await?
            .ok_or(GameError::SessionNotFound(id))
    }

    /// Load for a round mutation. A vanished session will never need its
    /// round lock again, so drop the entry on the way out.
    async fn load_or_forget(&self, id: SessionId) -> Result<GameSession, GameError> {
        match self.load(id).await {
            Ok(session) => Ok(session),
            Err(err) => {
                if matches!(err, GameError::SessionNotFound(_)) {
                    self.round_locks.remove(&id);
                }
                Err(err)
            }
        }
    }

    fn round_lock(&self, id: SessionId) -> Arc<Mutex<()>> {
        self.round_locks
            .entry(id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

fn parse_flags(raw: &[String]) -> BTreeSet<FlagCategory> {
    let mut flags = BTreeSet::new();
    for name in raw {
        match FlagCategory::from_str(name) {
            Ok(flag) => {
                flags.insert(flag);
            }
            Err(_) => {
                tracing::debug!(flag = %name, "Ignoring unknown flag");
            }
        }
    }
    flags
}

fn parse_action(raw: &str) -> Option<ResponseAction> {
    match ResponseAction::from_str(raw) {
        Ok(action) => Some(action),
        Err(_) => {
            tracing::debug!(action = %raw, "Ignoring unknown action");
            None
        }
    }
}
