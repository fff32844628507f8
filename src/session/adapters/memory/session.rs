//! In-memory repository for session records.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::session::{
    domain::{Session, SessionFilter, SessionId},
    ports::{SessionRepository, SessionRepositoryError, SessionRepositoryResult},
};

/// Thread-safe in-memory session repository.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRepository {
    state: Arc<RwLock<InMemorySessionState>>,
}

#[derive(Debug, Default)]
struct InMemorySessionState {
    sessions: HashMap<SessionId, Session>,
    order: Vec<SessionId>,
}

impl InMemorySessionRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl ToString) -> SessionRepositoryError {
    SessionRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn store(&self, session: &Session) -> SessionRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.sessions.contains_key(&session.id()) {
            return Err(SessionRepositoryError::DuplicateSession(session.id()));
        }
        state.order.push(session.id());
        state.sessions.insert(session.id(), session.clone());
        Ok(())
    }

    async fn update(&self, session: &Session) -> SessionRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let slot = state
            .sessions
            .get_mut(&session.id())
            .ok_or(SessionRepositoryError::NotFound(session.id()))?;
        *slot = session.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: SessionId) -> SessionRepositoryResult<Option<Session>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.sessions.get(&id).cloned())
    }

    async fn list(&self, filter: &SessionFilter) -> SessionRepositoryResult<Vec<Session>> {
        let state = self.state.read().map_err(poisoned)?;
        let mut sessions: Vec<Session> = state
            .order
            .iter()
            .filter_map(|id| state.sessions.get(id))
            .filter(|session| filter.matches(session))
            .cloned()
            .collect();
        sessions.sort_by_key(Session::starts_at);
        Ok(sessions)
    }
}
