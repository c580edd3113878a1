//! Session store interface and the in-memory implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::model::Session;
use crate::error::Result;

/// Stable platform identifier for a remote user.
pub type UserId = i64;

/// An abstract store for per-user conversation state.
///
/// This trait defines the contract for holding sessions during a process
/// lifetime, decoupling the flow logic from the concrete structure so a
/// persistent or distributed store can be substituted later.
///
/// # Implementation Notes
///
/// Implementations must support concurrent callers: many per-event
/// read/write pairs plus one periodic bulk clear. A session is always
/// replaced as a whole value; partial updates are never visible to readers.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Looks up the session for a user.
    ///
    /// A user with no stored session gets a fresh `Uninitialized` session;
    /// absence is never an error. `Err` is reserved for backend faults.
    async fn get(&self, user_id: UserId) -> Result<Session>;

    /// Stores a session for a user, replacing any previous value.
    async fn put(&self, user_id: UserId, session: Session) -> Result<()>;

    /// Discards every stored session.
    async fn clear_all(&self) -> Result<()>;

    /// Returns a copy of every stored `(user, session)` pair, for diagnostics.
    async fn snapshot(&self) -> Result<Vec<(UserId, Session)>>;
}

/// In-memory session store.
///
/// Sessions are ephemeral by design: the map lives for the process lifetime
/// and is periodically emptied by the expiry sweeper. Locking is
/// coarse-grained over the whole map.
pub struct MemorySessionStore {
    sessions: Arc<RwLock<HashMap<UserId, Session>>>,
}

impl MemorySessionStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, user_id: UserId) -> Result<Session> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(&user_id).cloned().unwrap_or_default())
    }

    async fn put(&self, user_id: UserId, session: Session) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(user_id, session);
        Ok(())
    }

    async fn clear_all(&self) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.clear();
        Ok(())
    }

    async fn snapshot(&self) -> Result<Vec<(UserId, Session)>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.iter().map(|(id, s)| (*id, s.clone())).collect())
    }
}
