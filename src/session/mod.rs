//! Client session records.
//!
//! Sessions are scheduled independently of tasks. The calendar reads them
//! through the [`ports::SessionRepository`] port and buckets them by the
//! date part of their local start time.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
