//! Session aggregate root.

use super::{Payment, SessionDomainError, SessionId, SessionStatus, SessionType};
use crate::client::ClientRef;
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Session aggregate root.
///
/// `starts_at` is a local wall-clock time with no zone attached; calendar
/// bucketing uses its date part only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    client: ClientRef,
    starts_at: NaiveDateTime,
    session_type: SessionType,
    status: SessionStatus,
    duration_minutes: u32,
    location: String,
    notes: String,
    payment: Payment,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for creating a new session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSessionData {
    /// Client the session is held with.
    pub client: ClientRef,
    /// Local start time.
    pub starts_at: NaiveDateTime,
    /// Kind of appointment.
    pub session_type: SessionType,
    /// Initial status.
    pub status: SessionStatus,
    /// Length in minutes.
    pub duration_minutes: u32,
    /// Where the session takes place.
    pub location: String,
    /// Free-form notes.
    pub notes: String,
    /// Payment details.
    pub payment: Payment,
}

/// Parameter object for reconstructing a persisted session aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedSessionData {
    /// Persisted identifier.
    pub id: SessionId,
    /// Persisted client reference.
    pub client: ClientRef,
    /// Persisted local start time.
    pub starts_at: NaiveDateTime,
    /// Persisted session type.
    pub session_type: SessionType,
    /// Persisted status.
    pub status: SessionStatus,
    /// Persisted duration in minutes.
    pub duration_minutes: u32,
    /// Persisted location.
    pub location: String,
    /// Persisted notes.
    pub notes: String,
    /// Persisted payment details.
    pub payment: Payment,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Creates a new session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionDomainError::InvalidDuration`] for a zero duration or
    /// [`SessionDomainError::EmptyClientName`] when the client has no name.
    pub fn new(data: NewSessionData, clock: &impl Clock) -> Result<Self, SessionDomainError> {
        if data.duration_minutes == 0 {
            return Err(SessionDomainError::InvalidDuration(data.duration_minutes));
        }
        if data.client.name().is_empty() {
            return Err(SessionDomainError::EmptyClientName);
        }
        let timestamp = clock.utc();
        Ok(Self {
            id: SessionId::new(),
            client: data.client,
            starts_at: data.starts_at,
            session_type: data.session_type,
            status: data.status,
            duration_minutes: data.duration_minutes,
            location: data.location,
            notes: data.notes,
            payment: data.payment,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a session from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedSessionData) -> Self {
        Self {
            id: data.id,
            client: data.client,
            starts_at: data.starts_at,
            session_type: data.session_type,
            status: data.status,
            duration_minutes: data.duration_minutes,
            location: data.location,
            notes: data.notes,
            payment: data.payment,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the session identifier.
    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    /// Returns the client reference.
    #[must_use]
    pub const fn client(&self) -> &ClientRef {
        &self.client
    }

    /// Returns the local start time.
    #[must_use]
    pub const fn starts_at(&self) -> NaiveDateTime {
        self.starts_at
    }

    /// Returns the calendar date the session falls on.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.starts_at.date()
    }

    /// Returns the local end time.
    #[must_use]
    pub fn ends_at(&self) -> NaiveDateTime {
        self.starts_at + Duration::minutes(i64::from(self.duration_minutes))
    }

    /// Returns the session type.
    #[must_use]
    pub const fn session_type(&self) -> SessionType {
        self.session_type
    }

    /// Returns the session status.
    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    /// Returns the duration in minutes.
    #[must_use]
    pub const fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    /// Returns the location.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the notes.
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Returns the payment details.
    #[must_use]
    pub const fn payment(&self) -> Payment {
        self.payment
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Sets the session status. Returns `false` when it was already set.
    pub fn set_status(&mut self, status: SessionStatus, clock: &impl Clock) -> bool {
        if self.status == status {
            return false;
        }
        self.status = status;
        self.updated_at = clock.utc();
        true
    }

    /// Replaces the payment details.
    pub fn record_payment(&mut self, payment: Payment, clock: &impl Clock) {
        self.payment = payment;
        self.updated_at = clock.utc();
    }
}
