//! Repository port for meeting record persistence.

use crate::ata::domain::{AtaId, MeetingRecord};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for meeting record repository operations.
pub type AtaRepositoryResult<T> = Result<T, AtaRepositoryError>;

/// Meeting record persistence contract.
///
/// Records are written whole; a save overwrites whatever the store held for
/// that identifier (last writer wins).
#[async_trait]
pub trait AtaRepository: Send + Sync {
    /// Loads every stored record.
    ///
    /// # Errors
    ///
    /// Returns [`AtaRepositoryError::Persistence`] when the store cannot be
    /// read.
    async fn load_all(&self) -> AtaRepositoryResult<Vec<MeetingRecord>>;

    /// Finds a record by identifier.
    ///
    /// Returns `None` when the record does not exist.
    async fn find_by_id(&self, id: &AtaId) -> AtaRepositoryResult<Option<MeetingRecord>>;

    /// Stores a record, assigning a fresh identifier when it has none, and
    /// returns the identifier it was stored under.
    ///
    /// # Errors
    ///
    /// Returns [`AtaRepositoryError::Persistence`] when the write fails.
    async fn save(&self, record: &MeetingRecord) -> AtaRepositoryResult<AtaId>;
}

/// Errors returned by meeting record repository implementations.
#[derive(Debug, Clone, Error)]
pub enum AtaRepositoryError {
    /// A stored document could not be decoded.
    #[error("stored record '{id}' is corrupt: {reason}")]
    Corrupt {
        /// Identifier or key of the unreadable document.
        id: String,
        /// Decoder message.
        reason: String,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AtaRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
