//! Enumerated session attributes: status, type and payment details.

use super::{
    ParsePaymentMethodError, ParsePaymentStatusError, ParseSessionStatusError,
    ParseSessionTypeError,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowercases and folds spaces and hyphens to underscores so that display
/// labels such as `Follow-up` or `Credit Card` parse like storage keys.
fn normalize(value: &str) -> String {
    value
        .trim()
        .chars()
        .map(|ch| match ch {
            ' ' | '-' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

/// Session scheduling status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Booked and upcoming.
    #[default]
    Scheduled,
    /// Took place.
    Completed,
    /// Called off.
    Cancelled,
}

impl SessionStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for SessionStatus {
    type Error = ParseSessionStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match normalize(value).as_str() {
            "scheduled" => Ok(Self::Scheduled),
            "completed" => Ok(Self::Completed),
            "cancelled" | "canceled" => Ok(Self::Cancelled),
            _ => Err(ParseSessionStatusError(value.to_owned())),
        }
    }
}

/// Kind of appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    /// First meeting with a client.
    #[default]
    Initial,
    /// Subsequent meeting.
    FollowUp,
    /// Evaluation session.
    Assessment,
    /// Treatment session.
    Therapy,
    /// Advisory session.
    Consultation,
}

impl SessionType {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::FollowUp => "follow_up",
            Self::Assessment => "assessment",
            Self::Therapy => "therapy",
            Self::Consultation => "consultation",
        }
    }

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Initial => "Initial",
            Self::FollowUp => "Follow-up",
            Self::Assessment => "Assessment",
            Self::Therapy => "Therapy",
            Self::Consultation => "Consultation",
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for SessionType {
    type Error = ParseSessionTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match normalize(value).as_str() {
            "initial" => Ok(Self::Initial),
            "follow_up" | "followup" => Ok(Self::FollowUp),
            "assessment" => Ok(Self::Assessment),
            "therapy" => Ok(Self::Therapy),
            "consultation" => Ok(Self::Consultation),
            _ => Err(ParseSessionTypeError(value.to_owned())),
        }
    }
}

/// Settlement state of a session fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Not yet paid.
    #[default]
    Pending,
    /// Paid in full.
    Paid,
    /// Partly paid.
    Partial,
    /// Fee waived.
    Waived,
}

impl PaymentStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Partial => "partial",
            Self::Waived => "waived",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for PaymentStatus {
    type Error = ParsePaymentStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match normalize(value).as_str() {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "partial" => Ok(Self::Partial),
            "waived" => Ok(Self::Waived),
            _ => Err(ParsePaymentStatusError(value.to_owned())),
        }
    }
}

/// How a session fee was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Cash.
    Cash,
    /// Credit card.
    CreditCard,
    /// Bank transfer.
    BankTransfer,
    /// Insurance claim.
    Insurance,
}

impl PaymentMethod {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::CreditCard => "credit_card",
            Self::BankTransfer => "bank_transfer",
            Self::Insurance => "insurance",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for PaymentMethod {
    type Error = ParsePaymentMethodError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match normalize(value).as_str() {
            "cash" => Ok(Self::Cash),
            "credit_card" => Ok(Self::CreditCard),
            "bank_transfer" => Ok(Self::BankTransfer),
            "insurance" => Ok(Self::Insurance),
            _ => Err(ParsePaymentMethodError(value.to_owned())),
        }
    }
}

/// Payment details recorded against a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Payment {
    /// Settlement state.
    pub status: PaymentStatus,
    /// Amount in minor currency units.
    pub amount_minor: u64,
    /// Settlement method, if recorded.
    pub method: Option<PaymentMethod>,
}
