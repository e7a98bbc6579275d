//! Adapter implementations for deliverable ports.

pub mod memory;
