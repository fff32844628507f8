//! Session search criteria.

use super::{Session, SessionStatus, SessionType};
use crate::client::ClientId;
use chrono::NaiveDate;

/// Criteria applied when listing sessions. The default filter matches every
/// session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionFilter {
    query: Option<String>,
    session_type: Option<SessionType>,
    status: Option<SessionStatus>,
    client_id: Option<ClientId>,
    starts_from: Option<NaiveDate>,
    starts_before: Option<NaiveDate>,
}

impl SessionFilter {
    /// Creates a filter matching every session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a case-insensitive text query over client name, notes and id.
    /// A blank query is ignored.
    #[must_use]
    pub fn with_query(mut self, query: impl AsRef<str>) -> Self {
        let trimmed = query.as_ref().trim();
        self.query = (!trimmed.is_empty()).then(|| trimmed.to_lowercase());
        self
    }

    /// Restricts to one session type.
    #[must_use]
    pub const fn with_type(mut self, session_type: SessionType) -> Self {
        self.session_type = Some(session_type);
        self
    }

    /// Restricts to one status.
    #[must_use]
    pub const fn with_status(mut self, status: SessionStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts to one client.
    #[must_use]
    pub const fn with_client(mut self, client_id: ClientId) -> Self {
        self.client_id = Some(client_id);
        self
    }

    /// Restricts session dates to the half-open range `[from, before)`.
    #[must_use]
    pub const fn with_date_range(mut self, from: Option<NaiveDate>, before: Option<NaiveDate>) -> Self {
        self.starts_from = from;
        self.starts_before = before;
        self
    }

    /// Returns the lowercased text query.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Returns the session type restriction.
    #[must_use]
    pub const fn session_type(&self) -> Option<SessionType> {
        self.session_type
    }

    /// Returns the status restriction.
    #[must_use]
    pub const fn status(&self) -> Option<SessionStatus> {
        self.status
    }

    /// Returns the client restriction.
    #[must_use]
    pub const fn client_id(&self) -> Option<ClientId> {
        self.client_id
    }

    /// Returns the inclusive lower date bound.
    #[must_use]
    pub const fn starts_from(&self) -> Option<NaiveDate> {
        self.starts_from
    }

    /// Returns the exclusive upper date bound.
    #[must_use]
    pub const fn starts_before(&self) -> Option<NaiveDate> {
        self.starts_before
    }

    /// Returns whether `session` satisfies every criterion.
    #[must_use]
    pub fn matches(&self, session: &Session) -> bool {
        let date = session.date();
        self.query
            .as_deref()
            .is_none_or(|query| matches_query(session, query))
            && self
                .session_type
                .is_none_or(|kind| session.session_type() == kind)
            && self.status.is_none_or(|status| session.status() == status)
            && self
                .client_id
                .is_none_or(|id| session.client().id() == id)
            && self.starts_from.is_none_or(|from| date >= from)
            && self.starts_before.is_none_or(|before| date < before)
    }
}

fn matches_query(session: &Session, query: &str) -> bool {
    session.client().name().to_lowercase().contains(query)
        || session.notes().to_lowercase().contains(query)
        || session.id().to_string().contains(query)
}
