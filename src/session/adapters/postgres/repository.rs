//! `PostgreSQL` repository implementation for session storage.

use super::{models::SessionRow, schema::sessions};
use crate::{
    client::{ClientId, ClientRef},
    session::{
        domain::{
            Payment, PaymentMethod, PaymentStatus, PersistedSessionData, Session, SessionFilter,
            SessionId, SessionStatus, SessionType,
        },
        ports::{SessionRepository, SessionRepositoryError, SessionRepositoryResult},
    },
};
use async_trait::async_trait;
use chrono::NaiveTime;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by session adapters.
pub type SessionPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed session repository.
#[derive(Debug, Clone)]
pub struct PostgresSessionRepository {
    pool: SessionPgPool,
}

impl PostgresSessionRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: SessionPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> SessionRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> SessionRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(SessionRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(SessionRepositoryError::persistence)?
    }
}

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
    async fn store(&self, session: &Session) -> SessionRepositoryResult<()> {
        let session_id = session.id();
        let row = to_row(session)?;

        self.run_blocking(move |connection| {
            diesel::insert_into(sessions::table)
                .values(&row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        SessionRepositoryError::DuplicateSession(session_id)
                    }
                    _ => SessionRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, session: &Session) -> SessionRepositoryResult<()> {
        let session_id = session.id();
        let row = to_row(session)?;

        self.run_blocking(move |connection| {
            let affected =
                diesel::update(sessions::table.filter(sessions::id.eq(session_id.into_inner())))
                    .set(&row)
                    .execute(connection)
                    .map_err(SessionRepositoryError::persistence)?;
            if affected == 0 {
                return Err(SessionRepositoryError::NotFound(session_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: SessionId) -> SessionRepositoryResult<Option<Session>> {
        self.run_blocking(move |connection| {
            let row = sessions::table
                .filter(sessions::id.eq(id.into_inner()))
                .select(SessionRow::as_select())
                .first::<SessionRow>(connection)
                .optional()
                .map_err(SessionRepositoryError::persistence)?;
            row.map(row_to_session).transpose()
        })
        .await
    }

    async fn list(&self, filter: &SessionFilter) -> SessionRepositoryResult<Vec<Session>> {
        let criteria = filter.clone();
        self.run_blocking(move |connection| {
            let mut query = sessions::table.into_boxed();
            if let Some(session_type) = criteria.session_type() {
                query = query.filter(sessions::session_type.eq(session_type.as_str()));
            }
            if let Some(status) = criteria.status() {
                query = query.filter(sessions::status.eq(status.as_str()));
            }
            if let Some(client_id) = criteria.client_id() {
                query = query.filter(sessions::client_id.eq(client_id.into_inner()));
            }
            if let Some(from) = criteria.starts_from() {
                query = query.filter(sessions::starts_at.ge(from.and_time(NaiveTime::MIN)));
            }
            if let Some(before) = criteria.starts_before() {
                query = query.filter(sessions::starts_at.lt(before.and_time(NaiveTime::MIN)));
            }

            let rows = query
                .order((sessions::starts_at.asc(), sessions::created_at.asc()))
                .select(SessionRow::as_select())
                .load::<SessionRow>(connection)
                .map_err(SessionRepositoryError::persistence)?;

            // The free-text query also matches the id, which is simpler to
            // check on the decoded rows.
            let mut found = Vec::with_capacity(rows.len());
            for row in rows {
                let session = row_to_session(row)?;
                if criteria.matches(&session) {
                    found.push(session);
                }
            }
            Ok(found)
        })
        .await
    }
}

fn to_row(session: &Session) -> SessionRepositoryResult<SessionRow> {
    let payment = session.payment();
    let duration_minutes =
        i32::try_from(session.duration_minutes()).map_err(SessionRepositoryError::persistence)?;
    let payment_amount_minor =
        i64::try_from(payment.amount_minor).map_err(SessionRepositoryError::persistence)?;

    Ok(SessionRow {
        id: session.id().into_inner(),
        client_id: session.client().id().into_inner(),
        client_name: session.client().name().to_owned(),
        starts_at: session.starts_at(),
        session_type: session.session_type().as_str().to_owned(),
        status: session.status().as_str().to_owned(),
        duration_minutes,
        location: session.location().to_owned(),
        notes: session.notes().to_owned(),
        payment_status: payment.status.as_str().to_owned(),
        payment_amount_minor,
        payment_method: payment.method.map(|method| method.as_str().to_owned()),
        created_at: session.created_at(),
        updated_at: session.updated_at(),
    })
}

fn row_to_session(row: SessionRow) -> SessionRepositoryResult<Session> {
    let SessionRow {
        id,
        client_id,
        client_name,
        starts_at,
        session_type: persisted_type,
        status: persisted_status,
        duration_minutes: persisted_duration,
        location,
        notes,
        payment_status: persisted_payment_status,
        payment_amount_minor: persisted_amount,
        payment_method: persisted_method,
        created_at,
        updated_at,
    } = row;

    let session_type = SessionType::try_from(persisted_type.as_str())
        .map_err(SessionRepositoryError::persistence)?;
    let status = SessionStatus::try_from(persisted_status.as_str())
        .map_err(SessionRepositoryError::persistence)?;
    let duration_minutes =
        u32::try_from(persisted_duration).map_err(SessionRepositoryError::persistence)?;
    let payment = Payment {
        status: PaymentStatus::try_from(persisted_payment_status.as_str())
            .map_err(SessionRepositoryError::persistence)?,
        amount_minor: u64::try_from(persisted_amount)
            .map_err(SessionRepositoryError::persistence)?,
        method: persisted_method
            .as_deref()
            .map(PaymentMethod::try_from)
            .transpose()
            .map_err(SessionRepositoryError::persistence)?,
    };

    Ok(Session::from_persisted(PersistedSessionData {
        id: SessionId::from_uuid(id),
        client: ClientRef::new(ClientId::from_uuid(client_id), client_name),
        starts_at,
        session_type,
        status,
        duration_minutes,
        location,
        notes,
        payment,
        created_at,
        updated_at,
    }))
}
