//! In-memory session adapters.

mod session;

pub use session::InMemorySessionRepository;
