//! Deliverable listing with derived statuses.

use crate::{
    deadline::{ProjectStatus, status},
    project::{
        domain::{NewProjeto, ProjectDomainError, ProjectId, Projeto},
        ports::{ProjectRepository, ProjectRepositoryError},
    },
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for deliverable operations.
#[derive(Debug, Error)]
pub enum ProjectTrackingError {
    /// Deliverable validation failed.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ProjectRepositoryError),
    /// No deliverable with the identifier exists.
    #[error("deliverable not found: {0}")]
    NotFound(ProjectId),
}

/// Result type for deliverable operations.
pub type ProjectTrackingResult<T> = Result<T, ProjectTrackingError>;

/// A deliverable paired with the status it shows on a given day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedProject {
    /// Stored deliverable.
    pub project: Projeto,
    /// Status after applying the deadline rule.
    pub status: ProjectStatus,
}

/// Deliverable tracking over a repository and a clock.
#[derive(Clone)]
pub struct ProjectTrackingService<R, C>
where
    R: ProjectRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> ProjectTrackingService<R, C>
where
    R: ProjectRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns the current local date.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        status::today(self.clock.as_ref())
    }

    /// Validates and stores a new deliverable.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectTrackingError::Domain`] when validation fails or
    /// [`ProjectTrackingError::Repository`] when the write fails.
    pub async fn create(&self, params: NewProjeto) -> ProjectTrackingResult<Projeto> {
        let project = Projeto::new(params)?;
        self.repository.save(&project).await?;
        tracing::info!(project_id = %project.id(), "created deliverable");
        Ok(project)
    }

    /// Sets the explicit status of a deliverable.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectTrackingError::NotFound`] for an unknown identifier
    /// and [`ProjectTrackingError::Domain`] for `overdue`.
    pub async fn update_status(
        &self,
        id: &ProjectId,
        new_status: ProjectStatus,
    ) -> ProjectTrackingResult<Projeto> {
        let mut project = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ProjectTrackingError::NotFound(id.clone()))?;
        project.set_status(new_status)?;
        self.repository.save(&project).await?;
        Ok(project)
    }

    /// Lists every deliverable with its effective status, earliest deadline
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectTrackingError::Repository`] when loading fails.
    pub async fn list_with_status(&self) -> ProjectTrackingResult<Vec<TrackedProject>> {
        let today = self.today();
        let mut tracked: Vec<TrackedProject> = self
            .repository
            .load_all()
            .await?
            .into_iter()
            .map(|project| TrackedProject {
                status: project.effective_status(today),
                project,
            })
            .collect();
        tracked.sort_by(|left, right| {
            left.project
                .deadline_date()
                .cmp(&right.project.deadline_date())
                .then_with(|| left.project.name().cmp(right.project.name()))
        });
        Ok(tracked)
    }

    /// Lists deliverables whose effective status is overdue.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectTrackingError::Repository`] when loading fails.
    pub async fn overdue(&self) -> ProjectTrackingResult<Vec<TrackedProject>> {
        let mut tracked = self.list_with_status().await?;
        tracked.retain(|entry| entry.status == ProjectStatus::Overdue);
        Ok(tracked)
    }
}
