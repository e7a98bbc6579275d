//! In-memory repository for deliverables.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::project::{
    domain::{ProjectId, Projeto},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};

/// Thread-safe in-memory deliverable repository, ordered by identifier.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    projects: Arc<RwLock<BTreeMap<ProjectId, Projeto>>>,
}

impl InMemoryProjectRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> ProjectRepositoryError {
    ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn load_all(&self) -> ProjectRepositoryResult<Vec<Projeto>> {
        let projects = self.projects.read().map_err(lock_error)?;
        Ok(projects.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &ProjectId) -> ProjectRepositoryResult<Option<Projeto>> {
        let projects = self.projects.read().map_err(lock_error)?;
        Ok(projects.get(id).cloned())
    }

    async fn save(&self, project: &Projeto) -> ProjectRepositoryResult<()> {
        let mut projects = self.projects.write().map_err(lock_error)?;
        projects.insert(project.id().clone(), project.clone());
        Ok(())
    }
}
