//! Task lifecycle engine.
//!
//! Tasks move between `todo`, `in-progress` and `completed` through explicit
//! transition requests. The kanban board and filtered task lists are derived
//! from stored status on every read. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
