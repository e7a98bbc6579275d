//! Port contracts for meeting record storage.

pub mod repository;

pub use repository::{AtaRepository, AtaRepositoryError, AtaRepositoryResult};
