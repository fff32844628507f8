//! Caseboard: task and calendar core for a client practice.
//!
//! The crate tracks follow-up tasks through a kanban lifecycle and renders
//! a month calendar that places client sessions and task due dates on the
//! day they fall.
//!
//! # Architecture
//!
//! Each feature follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for record stores
//! - **Adapters**: In-memory and `PostgreSQL` implementations of the ports
//! - **Services**: Orchestration over ports, injected with a clock
//!
//! # Modules
//!
//! - [`task`]: Task lifecycle engine and kanban board
//! - [`session`]: Client session scheduling and search
//! - [`calendar`]: Month grid aggregation over sessions and tasks
//! - [`client`]: Client references shared by tasks and sessions
//! - [`config`]: Calendar rendering configuration

pub mod calendar;
pub mod client;
pub mod config;
pub mod session;
pub mod task;

#[cfg(test)]
mod test_support;
