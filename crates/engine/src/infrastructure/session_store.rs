//! In-memory session store.
//!
//! Sessions expire after a period of inactivity, measured from the last
//! write. Expired entries are dropped lazily on read and in bulk by
//! [`InMemorySessionStore::sweep_expired`], which the server calls from a
//! background task.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;
use scamguard_domain::{GameSession, SessionId};

use super::ports::{SessionStore, StoreError};

pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(30 * 60);

struct Entry {
    session: GameSession,
    touched_at: Instant,
}

pub struct InMemorySessionStore {
    sessions: DashMap<SessionId, Entry>,
    ttl: Duration,
}

impl InMemorySessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl,
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Drop every expired session, returning how many were evicted.
    pub fn sweep_expired(&self) -> usize {
        let before = self.sessions.len();
        self.sessions
            .retain(|_, entry| entry.touched_at.elapsed() <= self.ttl);
        before.saturating_sub(self.sessions.len())
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_TTL)
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, id: SessionId) -> Result<Option<GameSession>, StoreError> {
        // The read guard must be released before touching the map again,
        // or the removal below can deadlock on the same shard.
        match self.sessions.get(&id) {
            None => return Ok(None),
            Some(entry) => {
                if entry.touched_at.elapsed() <= self.ttl {
                    return Ok(Some(entry.session.clone()));
                }
            }
        }

        self.sessions.remove(&id);
        Ok(None)
    }

    async fn put(&self, session: &GameSession) -> Result<(), StoreError> {
        self.sessions.insert(
            session.id(),
            Entry {
                session: session.clone(),
                touched_at: Instant::now(),
            },
        );
        Ok(())
    }

    async fn remove(&self, id: SessionId) -> Result<(), StoreError> {
        self.sessions.remove(&id);
        Ok(())
    }
}
