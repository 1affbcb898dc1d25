//! In-memory registry of explorer sessions

use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use domain::SessionId;
use parking_lot::{Mutex, RwLock};
use tracing::info;

use super::explorer_session::ExplorerSession;
use crate::error::ApplicationError;

/// Shared handle to one session
pub type SessionHandle = Arc<Mutex<ExplorerSession>>;

#[derive(Debug)]
struct Entry {
    handle: SessionHandle,
    last_seen: Mutex<Instant>,
}

impl Entry {
    fn touch(&self) {
        *self.last_seen.lock() = Instant::now();
    }

    fn idle_for(&self) -> Duration {
        self.last_seen.lock().elapsed()
    }
}

/// Sessions keyed by id, bounded by `capacity`
///
/// Sessions whose tab went away without closing them are reclaimed once
/// they have been idle for `idle_timeout` and the store is full.
#[derive(Debug)]
pub struct SessionStore {
    sessions: RwLock<HashMap<SessionId, Entry>>,
    capacity: usize,
    idle_timeout: Duration,
}

impl SessionStore {
    pub fn new(capacity: usize, idle_timeout: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            capacity,
            idle_timeout,
        }
    }

    /// Register a fresh session
    ///
    /// # Errors
    ///
    /// Returns `RateLimited` when the store is full and no session has been
    /// idle long enough to evict.
    pub fn create(&self) -> Result<SessionHandle, ApplicationError> {
        let mut sessions = self.sessions.write();
        if sessions.len() >= self.capacity {
            let before = sessions.len();
            sessions.retain(|_, entry| entry.idle_for() < self.idle_timeout);
            let evicted = before - sessions.len();
            if evicted > 0 {
                info!(evicted, "Evicted idle sessions");
            }
        }
        if sessions.len() >= self.capacity {
            return Err(ApplicationError::RateLimited);
        }

        let id = SessionId::new();
        let handle = Arc::new(Mutex::new(ExplorerSession::new(id)));
        sessions.insert(
            id,
            Entry {
                handle: Arc::clone(&handle),
                last_seen: Mutex::new(Instant::now()),
            },
        );
        Ok(handle)
    }

    /// Look up a session and mark it as used
    pub fn get(&self, id: SessionId) -> Result<SessionHandle, ApplicationError> {
        let sessions = self.sessions.read();
        let entry = sessions
            .get(&id)
            .ok_or_else(|| ApplicationError::NotFound(format!("session {id}")))?;
        entry.touch();
        Ok(Arc::clone(&entry.handle))
    }

    /// Forget a session; `false` if it did not exist
    pub fn remove(&self, id: SessionId) -> bool {
        self.sessions.write().remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}
