//! Unit tests for meeting records and deadline tracking services.
