//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Lifecycle status.
    pub status: String,
    /// Priority.
    pub priority: String,
    /// Due date.
    pub due_date: NaiveDate,
    /// Related client identifier.
    pub client_id: Option<uuid::Uuid>,
    /// Related client display name.
    pub client_name: Option<String>,
    /// Related session identifier.
    pub session_id: Option<uuid::Uuid>,
    /// Assignee.
    pub assignee: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Lifecycle status.
    pub status: String,
    /// Priority.
    pub priority: String,
    /// Due date.
    pub due_date: NaiveDate,
    /// Related client identifier.
    pub client_id: Option<uuid::Uuid>,
    /// Related client display name.
    pub client_name: Option<String>,
    /// Related session identifier.
    pub session_id: Option<uuid::Uuid>,
    /// Assignee.
    pub assignee: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Field-edit changeset. Clearing an optional reference writes `NULL`.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Task title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Priority.
    pub priority: String,
    /// Due date.
    pub due_date: NaiveDate,
    /// Related client identifier.
    pub client_id: Option<uuid::Uuid>,
    /// Related client display name.
    pub client_name: Option<String>,
    /// Related session identifier.
    pub session_id: Option<uuid::Uuid>,
    /// Assignee.
    pub assignee: String,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
