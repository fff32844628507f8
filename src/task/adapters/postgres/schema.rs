//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Free-form description.
        description -> Text,
        /// Lifecycle status.
        #[max_length = 50]
        status -> Varchar,
        /// Priority.
        #[max_length = 50]
        priority -> Varchar,
        /// Due date.
        due_date -> Date,
        /// Related client identifier.
        client_id -> Nullable<Uuid>,
        /// Related client display name.
        #[max_length = 255]
        client_name -> Nullable<Varchar>,
        /// Related session identifier.
        session_id -> Nullable<Uuid>,
        /// Assignee.
        #[max_length = 255]
        assignee -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
