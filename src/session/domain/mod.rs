//! Domain model for client sessions.

mod error;
mod filter;
mod ids;
mod kinds;
mod session;

pub use error::{
    ParsePaymentMethodError, ParsePaymentStatusError, ParseSessionStatusError,
    ParseSessionTypeError, SessionDomainError,
};
pub use filter::SessionFilter;
pub use ids::SessionId;
pub use kinds::{Payment, PaymentMethod, PaymentStatus, SessionStatus, SessionType};
pub use session::{NewSessionData, PersistedSessionData, Session};
