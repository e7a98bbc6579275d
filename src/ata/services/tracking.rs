//! Service layer for the deadline panel and dashboards.

use crate::{
    ata::{
        domain::{AtaDomainError, AtaId},
        ports::{AtaRepository, AtaRepositoryError},
    },
    config::TrackingConfig,
    deadline::{
        Task, TaskGroup, TaskId, TaskSummary, completion_update, due_within, group_by_month,
        group_by_project, group_by_responsible, project_all, sort_default, status,
    },
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for deadline tracking operations.
#[derive(Debug, Error)]
pub enum TrackingError {
    /// Applying a write-back delta to a record failed.
    #[error(transparent)]
    Domain(#[from] AtaDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] AtaRepositoryError),
    /// No task with the identifier exists in the current projection.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    /// The task belongs to a record that has never been saved.
    #[error("task {0} belongs to an unsaved record")]
    UnsavedRecord(TaskId),
    /// The owning record disappeared from the store.
    #[error("meeting record not found: {0}")]
    RecordNotFound(AtaId),
}

/// Result type for deadline tracking operations.
pub type TrackingResult<T> = Result<T, TrackingError>;

/// Read-through deadline tracking over a meeting record repository.
///
/// Every call reloads the records and re-derives tasks against the clock's
/// current date; nothing is cached between calls.
#[derive(Clone)]
pub struct DeadlineTrackingService<R, C>
where
    R: AtaRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    config: TrackingConfig,
}

impl<R, C> DeadlineTrackingService<R, C>
where
    R: AtaRepository,
    C: Clock + Send + Sync,
{
    /// Creates a service with the default configuration.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self::with_config(repository, clock, TrackingConfig::default())
    }

    /// Creates a service with an explicit configuration.
    #[must_use]
    pub const fn with_config(repository: Arc<R>, clock: Arc<C>, config: TrackingConfig) -> Self {
        Self {
            repository,
            clock,
            config,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &TrackingConfig {
        &self.config
    }

    /// Returns today's date according to the injected clock.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        status::today(&*self.clock)
    }

    /// Returns every task in default panel order.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::Repository`] when records cannot be loaded.
    pub async fn tasks(&self) -> TrackingResult<Vec<Task>> {
        self.tasks_on(self.today()).await
    }

    /// Returns every task in default panel order with statuses derived
    /// for `today`, without consulting the clock.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::Repository`] when records cannot be loaded.
    pub async fn tasks_on(&self, today: NaiveDate) -> TrackingResult<Vec<Task>> {
        let records = self.repository.load_all().await?;
        Ok(sort_default(project_all(&records, today)))
    }

    /// Returns tasks grouped by responsible party, each group in default
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::Repository`] when records cannot be loaded.
    pub async fn tasks_by_responsible(&self) -> TrackingResult<Vec<TaskGroup>> {
        let tasks = self.tasks().await?;
        Ok(group_by_responsible(&tasks, &self.config))
    }

    /// Returns tasks grouped by project name.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::Repository`] when records cannot be loaded.
    pub async fn tasks_by_project(&self) -> TrackingResult<Vec<TaskGroup>> {
        let tasks = self.tasks().await?;
        Ok(group_by_project(&tasks, &self.config))
    }

    /// Returns tasks grouped by deadline month.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::Repository`] when records cannot be loaded.
    pub async fn tasks_by_month(&self) -> TrackingResult<Vec<TaskGroup>> {
        let tasks = self.tasks().await?;
        Ok(group_by_month(&tasks, &self.config))
    }

    /// Returns per-status counters for the dashboard.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::Repository`] when records cannot be loaded.
    pub async fn summary(&self) -> TrackingResult<TaskSummary> {
        let tasks = self.tasks().await?;
        Ok(TaskSummary::from_tasks(&tasks))
    }

    /// Returns open tasks due within the configured upcoming window.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::Repository`] when records cannot be loaded.
    pub async fn upcoming(&self) -> TrackingResult<Vec<Task>> {
        let today = self.today();
        let tasks = self.tasks_on(today).await?;
        Ok(due_within(&tasks, today, self.config.upcoming_window_days))
    }

    /// Marks a task as completed or reopens it.
    ///
    /// The owning record is re-read, updated copy-on-write and saved whole.
    /// Returns the task as re-derived from the saved record.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::TaskNotFound`] when the identifier is not in
    /// the current projection, [`TrackingError::UnsavedRecord`] for tasks of
    /// unsaved records, [`TrackingError::RecordNotFound`] when the record was
    /// removed concurrently, [`TrackingError::Domain`] when the assignment no
    /// longer exists, and [`TrackingError::Repository`] on storage failure.
    pub async fn set_completion(&self, task_id: &TaskId, completed: bool) -> TrackingResult<Task> {
        let today = self.today();
        let records = self.repository.load_all().await?;
        let tasks = project_all(&records, today);
        let task = find_task(&tasks, task_id)?;
        let record_id = task
            .source()
            .record_id
            .clone()
            .ok_or_else(|| TrackingError::UnsavedRecord(task_id.clone()))?;

        let record = self
            .repository
            .find_by_id(&record_id)
            .await?
            .ok_or_else(|| TrackingError::RecordNotFound(record_id.clone()))?;
        let update = completion_update(task, completed, today, &self.config);
        let updated = record.with_completion(&update)?;
        self.repository.save(&updated).await?;
        tracing::info!(
            task_id = %task_id,
            record_id = %record_id,
            completed,
            "updated task completion"
        );

        let refreshed = project_all(std::slice::from_ref(&updated), today);
        find_task(&refreshed, task_id).cloned()
    }
}

/// Looks a task up by identifier in a projection.
pub(crate) fn find_task<'a>(tasks: &'a [Task], task_id: &TaskId) -> TrackingResult<&'a Task> {
    tasks
        .iter()
        .find(|task| task.id() == task_id)
        .ok_or_else(|| TrackingError::TaskNotFound(task_id.clone()))
}
