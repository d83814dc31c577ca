//! Session registry - keeps each conversation's store and history apart.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;

use crate::config::GroundingConfig;
use crate::conversation::Message;
use crate::session::{Session, SessionId};

/// A session shared between request handlers. The lock is held for a whole
/// turn, including the completion call.
pub type SharedSession = Arc<Mutex<Session>>;

/// Open sessions keyed by ID.
pub struct SessionRegistry {
    config: GroundingConfig,
    sessions: DashMap<SessionId, SharedSession>,
}

impl SessionRegistry {
    pub fn new(config: GroundingConfig) -> Self {
        Self {
            config,
            sessions: DashMap::new(),
        }
    }

    pub fn config(&self) -> &GroundingConfig {
        &self.config
    }

    /// Open a new session from the registry's config.
    pub fn open(&self) -> SessionId {
        self.insert(Session::new(&self.config))
    }

    /// Open a new session that continues an existing message history.
    pub fn open_with_history(&self, history: Vec<Message>) -> SessionId {
        self.insert(Session::with_history(&self.config, history))
    }

    fn insert(&self, session: Session) -> SessionId {
        let id = session.id();
        self.sessions.insert(id, Arc::new(Mutex::new(session)));
        tracing::info!("Opened session {}", id);
        id
    }

    /// Get a handle to an open session.
    pub fn get(&self, id: SessionId) -> Option<SharedSession> {
        self.sessions.get(&id).map(|entry| Arc::clone(entry.value()))
    }

    /// Close a session, returning its handle if it was open.
    pub fn close(&self, id: SessionId) -> Option<SharedSession> {
        let removed = self.sessions.remove(&id).map(|(_, session)| session);
        if removed.is_some() {
            tracing::info!("Closed session {}", id);
        }
        removed
    }

    pub fn contains(&self, id: SessionId) -> bool {
        self.sessions.contains_key(&id)
    }

    /// Get the number of open sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new(GroundingConfig::default())
    }
}
