//! Repository ports for persistence.

use async_trait::async_trait;
use scamguard_domain::{GameSession, SessionId};

use super::error::StoreError;

/// Port for game session persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Fetch a session by id. Returns `None` for unknown or expired sessions.
    async fn get(&self, id: SessionId) -> Result<Option<GameSession>, StoreError>;

    /// Insert or replace a session.
    async fn put(&self, session: &GameSession) -> Result<(), StoreError>;

    /// Drop a session. Removing an unknown id is not an error.
    async fn remove(&self, id: SessionId) -> Result<(), StoreError>;
}
