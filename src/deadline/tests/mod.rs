//! Unit tests for task derivation and aggregation.

mod date_tests;
