//! Error types for session domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain session values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionDomainError {
    /// Session duration must be a positive number of minutes.
    #[error("invalid session duration {0}, expected a positive number of minutes")]
    InvalidDuration(u32),

    /// The client display name is empty after trimming.
    #[error("session client name must not be empty")]
    EmptyClientName,
}

/// Error returned while parsing session statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown session status: {0}")]
pub struct ParseSessionStatusError(pub String);

/// Error returned while parsing session types.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown session type: {0}")]
pub struct ParseSessionTypeError(pub String);

/// Error returned while parsing payment statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown payment status: {0}")]
pub struct ParsePaymentStatusError(pub String);

/// Error returned while parsing payment methods.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown payment method: {0}")]
pub struct ParsePaymentMethodError(pub String);
