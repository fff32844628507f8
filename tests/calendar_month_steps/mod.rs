//! Step definitions for calendar month view scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
