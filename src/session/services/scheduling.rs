//! Service layer for scheduling and searching sessions.

use crate::{
    client::ClientRef,
    session::{
        domain::{
            NewSessionData, ParsePaymentMethodError, ParsePaymentStatusError,
            ParseSessionStatusError, ParseSessionTypeError, Payment, PaymentMethod, PaymentStatus,
            Session, SessionDomainError, SessionFilter, SessionId, SessionStatus, SessionType,
        },
        ports::{SessionRepository, SessionRepositoryError},
    },
};
use chrono::NaiveDateTime;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Duration used when a request does not specify one.
pub const DEFAULT_DURATION_MINUTES: u32 = 60;

/// Request payload for scheduling a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSessionRequest {
    client: ClientRef,
    starts_at: NaiveDateTime,
    session_type: Option<String>,
    status: Option<String>,
    duration_minutes: Option<u32>,
    location: String,
    notes: String,
    payment_status: Option<String>,
    payment_amount_minor: u64,
    payment_method: Option<String>,
}

impl ScheduleSessionRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(client: ClientRef, starts_at: NaiveDateTime) -> Self {
        Self {
            client,
            starts_at,
            session_type: None,
            status: None,
            duration_minutes: None,
            location: String::new(),
            notes: String::new(),
            payment_status: None,
            payment_amount_minor: 0,
            payment_method: None,
        }
    }

    /// Sets the session type. Defaults to `Initial`.
    #[must_use]
    pub fn with_type(mut self, session_type: impl Into<String>) -> Self {
        self.session_type = Some(session_type.into());
        self
    }

    /// Sets the initial status. Defaults to `Scheduled`.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the duration in minutes. Defaults to 60.
    #[must_use]
    pub const fn with_duration_minutes(mut self, minutes: u32) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    /// Sets the location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Sets payment details. A blank or `none` method records no method.
    #[must_use]
    pub fn with_payment(
        mut self,
        status: impl Into<String>,
        amount_minor: u64,
        method: impl Into<String>,
    ) -> Self {
        self.payment_status = Some(status.into());
        self.payment_amount_minor = amount_minor;
        self.payment_method = Some(method.into());
        self
    }
}

/// Service-level errors for session operations.
#[derive(Debug, Error)]
pub enum SessionSchedulingError {
    /// The requested status is unknown.
    #[error(transparent)]
    InvalidStatus(#[from] ParseSessionStatusError),
    /// The requested session type is unknown.
    #[error(transparent)]
    InvalidType(#[from] ParseSessionTypeError),
    /// The requested payment status is unknown.
    #[error(transparent)]
    InvalidPaymentStatus(#[from] ParsePaymentStatusError),
    /// The requested payment method is unknown.
    #[error(transparent)]
    InvalidPaymentMethod(#[from] ParsePaymentMethodError),
    /// No session exists with the identifier.
    #[error("session not found: {0}")]
    NotFound(SessionId),
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] SessionDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] SessionRepositoryError),
}

/// Result type for session service operations.
pub type SessionSchedulingResult<T> = Result<T, SessionSchedulingError>;

/// Session scheduling service.
#[derive(Clone)]
pub struct SessionSchedulingService<R, C>
where
    R: SessionRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> SessionSchedulingService<R, C>
where
    R: SessionRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new session scheduling service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Validates and stores a new session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionSchedulingError`] when a field is malformed or the
    /// repository rejects persistence.
    pub async fn schedule(
        &self,
        request: ScheduleSessionRequest,
    ) -> SessionSchedulingResult<Session> {
        let ScheduleSessionRequest {
            client,
            starts_at,
            session_type,
            status,
            duration_minutes,
            location,
            notes,
            payment_status,
            payment_amount_minor,
            payment_method,
        } = request;

        let payment = Payment {
            status: payment_status
                .as_deref()
                .map(PaymentStatus::try_from)
                .transpose()?
                .unwrap_or_default(),
            amount_minor: payment_amount_minor,
            method: parse_payment_method(payment_method.as_deref())?,
        };
        let data = NewSessionData {
            client,
            starts_at,
            session_type: session_type
                .as_deref()
                .map(SessionType::try_from)
                .transpose()?
                .unwrap_or_default(),
            status: status
                .as_deref()
                .map(SessionStatus::try_from)
                .transpose()?
                .unwrap_or_default(),
            duration_minutes: duration_minutes.unwrap_or(DEFAULT_DURATION_MINUTES),
            location,
            notes,
            payment,
        };

        let session = Session::new(data, &*self.clock)?;
        self.repository.store(&session).await?;
        info!(session_id = %session.id(), starts_at = %session.starts_at(), "session scheduled");
        Ok(session)
    }

    /// Retrieves a session by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`SessionSchedulingError::Repository`] when lookup fails.
    pub async fn find(&self, session_id: SessionId) -> SessionSchedulingResult<Option<Session>> {
        Ok(self.repository.find_by_id(session_id).await?)
    }

    /// Lists sessions matching `filter`, ordered by start time.
    ///
    /// # Errors
    ///
    /// Returns [`SessionSchedulingError::Repository`] when the read fails.
    pub async fn search(&self, filter: &SessionFilter) -> SessionSchedulingResult<Vec<Session>> {
        Ok(self.repository.list(filter).await?)
    }

    /// Sets a session's status.
    ///
    /// # Errors
    ///
    /// Returns [`SessionSchedulingError::InvalidStatus`] before any read for
    /// an unknown status, [`SessionSchedulingError::NotFound`] when the
    /// session does not exist, or [`SessionSchedulingError::Repository`] when
    /// persistence fails.
    pub async fn update_status(
        &self,
        session_id: SessionId,
        status: &str,
    ) -> SessionSchedulingResult<Session> {
        let target = SessionStatus::try_from(status)?;
        let mut session = self.load(session_id).await?;
        if !session.set_status(target, &*self.clock) {
            return Ok(session);
        }
        self.persist(&session).await?;
        info!(session_id = %session_id, status = %target, "session status updated");
        Ok(session)
    }

    /// Replaces a session's payment details.
    ///
    /// A method of `"none"` or a blank method clears it.
    ///
    /// # Errors
    ///
    /// Returns a parse error before any read for an unknown payment status
    /// or method, [`SessionSchedulingError::NotFound`] when the session does
    /// not exist, or [`SessionSchedulingError::Repository`] when persistence
    /// fails.
    pub async fn record_payment(
        &self,
        session_id: SessionId,
        status: &str,
        amount_minor: u64,
        method: Option<&str>,
    ) -> SessionSchedulingResult<Session> {
        let payment = Payment {
            status: PaymentStatus::try_from(status)?,
            amount_minor,
            method: parse_payment_method(method)?,
        };
        let mut session = self.load(session_id).await?;
        session.record_payment(payment, &*self.clock);
        self.persist(&session).await?;
        info!(session_id = %session_id, payment = %payment.status, "session payment recorded");
        Ok(session)
    }

    async fn load(&self, session_id: SessionId) -> SessionSchedulingResult<Session> {
        self.repository
            .find_by_id(session_id)
            .await?
            .ok_or(SessionSchedulingError::NotFound(session_id))
    }

    async fn persist(&self, session: &Session) -> SessionSchedulingResult<()> {
        self.repository
            .update(session)
            .await
            .map_err(|err| match err {
                SessionRepositoryError::NotFound(id) => SessionSchedulingError::NotFound(id),
                other => SessionSchedulingError::Repository(other),
            })
    }
}

fn parse_payment_method(
    value: Option<&str>,
) -> Result<Option<PaymentMethod>, ParsePaymentMethodError> {
    match value.map(str::trim) {
        None => Ok(None),
        Some(raw) if raw.is_empty() || raw.eq_ignore_ascii_case("none") => Ok(None),
        Some(raw) => PaymentMethod::try_from(raw).map(Some),
    }
}
