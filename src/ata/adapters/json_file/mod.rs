//! File-system adapter persisting meeting records as JSON documents.

mod repository;

pub use repository::JsonFileAtaRepository;
