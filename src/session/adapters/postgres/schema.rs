//! Diesel schema for session persistence.

diesel::table! {
    /// Session records.
    sessions (id) {
        /// Session identifier.
        id -> Uuid,
        /// Client identifier.
        client_id -> Uuid,
        /// Client display name captured at write time.
        #[max_length = 255]
        client_name -> Varchar,
        /// Local start time without zone.
        starts_at -> Timestamp,
        /// Session type.
        #[max_length = 50]
        session_type -> Varchar,
        /// Session status.
        #[max_length = 50]
        status -> Varchar,
        /// Duration in minutes.
        duration_minutes -> Int4,
        /// Location.
        location -> Text,
        /// Notes.
        notes -> Text,
        /// Payment status.
        #[max_length = 50]
        payment_status -> Varchar,
        /// Payment amount in minor units.
        payment_amount_minor -> Int8,
        /// Payment method.
        #[max_length = 50]
        payment_method -> Nullable<Varchar>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
