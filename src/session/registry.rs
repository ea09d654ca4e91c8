//! Registry of live sessions, keyed by session id

use super::SessionStore;
use crate::error::{FoodBridgeError, Result};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tokio::time::{Instant, MissedTickBehavior};
use uuid::Uuid;

pub type SessionId = Uuid;

/// Shared handle to one session's store
pub type SessionHandle = Arc<Mutex<SessionStore>>;

struct SessionEntry {
    handle: SessionHandle,
    last_access: Instant,
}

/// Owns every live session. Sessions share nothing with each other.
///
/// A session ends on explicit removal or after `idle_ttl` without access.
pub struct SessionRegistry {
    sessions: RwLock<HashMap<SessionId, SessionEntry>>,
    idle_ttl: Duration,
}

impl SessionRegistry {
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            idle_ttl,
        }
    }

    /// Start a session with freshly seeded state
    pub async fn create(&self) -> (SessionId, SessionHandle) {
        let id = Uuid::new_v4();
        let handle = Arc::new(Mutex::new(SessionStore::new()));
        self.sessions.write().await.insert(
            id,
            SessionEntry {
                handle: handle.clone(),
                last_access: Instant::now(),
            },
        );
        tracing::info!(session_id = %id, "Session created");
        (id, handle)
    }

    /// Look up a session and mark it as used
    pub async fn get(&self, id: SessionId) -> Result<SessionHandle> {
        let mut sessions = self.sessions.write().await;
        let entry = sessions
            .get_mut(&id)
            .ok_or_else(|| FoodBridgeError::NotFound(format!("Session {id} not found")))?;
        entry.last_access = Instant::now();
        Ok(entry.handle.clone())
    }

    /// End a session and drop its state
    pub async fn remove(&self, id: SessionId) -> Result<()> {
        match self.sessions.write().await.remove(&id) {
            Some(_) => {
                tracing::info!(session_id = %id, "Session ended");
                Ok(())
            }
            None => Err(FoodBridgeError::NotFound(format!("Session {id} not found"))),
        }
    }

    /// Drop every session idle for at least `idle_ttl`. Returns how many went.
    pub async fn evict_idle(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|id, entry| {
            let keep = now.duration_since(entry.last_access) < self.idle_ttl;
            if !keep {
                tracing::info!(session_id = %id, "Session expired");
            }
            keep
        });
        before - sessions.len()
    }

    /// Evict idle sessions every `period` for the life of the process
    pub fn spawn_reaper(self: &Arc<Self>, period: Duration) {
        let registry = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticks = tokio::time::interval(period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                let evicted = registry.evict_idle().await;
                if evicted > 0 {
                    tracing::debug!(evicted, "Reaped idle sessions");
                }
            }
        });
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
