//! Adapter implementations of the session ports.

pub mod memory;
pub mod postgres;
