//! Unit tests for session records.
