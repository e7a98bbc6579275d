//! In-memory adapters for tests and local tooling.

mod repository;

pub use repository::InMemoryProjectRepository;
