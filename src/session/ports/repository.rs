//! Repository port for session persistence and search.

use crate::session::domain::{Session, SessionFilter, SessionId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for session repository operations.
pub type SessionRepositoryResult<T> = Result<T, SessionRepositoryError>;

/// Session persistence contract.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Stores a new session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionRepositoryError::DuplicateSession`] when the session
    /// ID already exists.
    async fn store(&self, session: &Session) -> SessionRepositoryResult<()>;

    /// Persists changes to an existing session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionRepositoryError::NotFound`] when the session does not
    /// exist.
    async fn update(&self, session: &Session) -> SessionRepositoryResult<()>;

    /// Finds a session by identifier.
    ///
    /// Returns `None` when the session does not exist.
    async fn find_by_id(&self, id: SessionId) -> SessionRepositoryResult<Option<Session>>;

    /// Returns every session matching `filter`, ordered by start time.
    async fn list(&self, filter: &SessionFilter) -> SessionRepositoryResult<Vec<Session>>;
}

/// Errors returned by session repository implementations.
#[derive(Debug, Clone, Error)]
pub enum SessionRepositoryError {
    /// A session with the same identifier already exists.
    #[error("duplicate session identifier: {0}")]
    DuplicateSession(SessionId),

    /// The session was not found.
    #[error("session not found: {0}")]
    NotFound(SessionId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SessionRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
