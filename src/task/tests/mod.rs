//! Unit tests for the task lifecycle engine.

mod service_tests;
