//! Port contracts for session records.

pub mod repository;

pub use repository::{SessionRepository, SessionRepositoryError, SessionRepositoryResult};
