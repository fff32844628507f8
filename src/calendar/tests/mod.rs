//! Unit tests for the calendar aggregation engine.
