//! Repository port for deliverable persistence.

use crate::project::domain::{ProjectId, Projeto};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for deliverable repository operations.
pub type ProjectRepositoryResult<T> = Result<T, ProjectRepositoryError>;

/// Deliverable persistence contract.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Loads every stored deliverable.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::Persistence`] when the store cannot
    /// be read.
    async fn load_all(&self) -> ProjectRepositoryResult<Vec<Projeto>>;

    /// Finds a deliverable by identifier.
    async fn find_by_id(&self, id: &ProjectId) -> ProjectRepositoryResult<Option<Projeto>>;

    /// Stores a deliverable, replacing any previous version.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::Persistence`] when the write fails.
    async fn save(&self, project: &Projeto) -> ProjectRepositoryResult<()>;
}

/// Errors returned by deliverable repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProjectRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProjectRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
