//! Diesel row models for session persistence.

use super::schema::sessions;
use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;

/// Query result row and insert model for session records.
#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = sessions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(treat_none_as_null = true)]
pub struct SessionRow {
    /// Session identifier.
    pub id: uuid::Uuid,
    /// Client identifier.
    pub client_id: uuid::Uuid,
    /// Client display name.
    pub client_name: String,
    /// Local start time.
    pub starts_at: NaiveDateTime,
    /// Session type.
    pub session_type: String,
    /// Session status.
    pub status: String,
    /// Duration in minutes.
    pub duration_minutes: i32,
    /// Location.
    pub location: String,
    /// Notes.
    pub notes: String,
    /// Payment status.
    pub payment_status: String,
    /// Payment amount in minor units.
    pub payment_amount_minor: i64,
    /// Payment method.
    pub payment_method: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
