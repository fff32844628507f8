//! Calendar aggregation engine.
//!
//! Projects sessions and tasks onto a month grid. Each day of the month gets
//! a bucket holding every event whose normalized date falls on it; the
//! display cap only governs how many are shown inline.

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
