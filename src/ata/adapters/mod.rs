//! Adapter implementations for meeting record ports.

pub mod json_file;
pub mod memory;
