//! `PostgreSQL` adapters for session persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresSessionRepository, SessionPgPool};
