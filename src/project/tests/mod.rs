//! Unit tests for deliverable tracking.
