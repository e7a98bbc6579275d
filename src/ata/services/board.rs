//! In-memory deadline board with optimistic completion toggles.

use super::tracking::{TrackingError, TrackingResult, find_task};
use crate::{
    ata::{domain::MeetingRecord, ports::AtaRepository},
    config::TrackingConfig,
    deadline::{Task, TaskId, completion_update, project_all, sort_default, status},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;

/// Snapshot of meeting records backing an interactive deadline panel.
///
/// Toggling a task updates the snapshot immediately, then persists the
/// owning record. When the save fails the record is restored to its
/// previous state and the error is returned so the caller can notify the
/// user. Failed saves are never retried.
pub struct DeadlineBoard<R, C>
where
    R: AtaRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    config: TrackingConfig,
    records: Vec<MeetingRecord>,
}

impl<R, C> DeadlineBoard<R, C>
where
    R: AtaRepository,
    C: Clock + Send + Sync,
{
    /// Loads a board snapshot from the repository.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::Repository`] when records cannot be loaded.
    pub async fn load(
        repository: Arc<R>,
        clock: Arc<C>,
        config: TrackingConfig,
    ) -> TrackingResult<Self> {
        let records = repository.load_all().await?;
        Ok(Self {
            repository,
            clock,
            config,
            records,
        })
    }

    /// Returns the records currently shown on the board.
    #[must_use]
    pub fn records(&self) -> &[MeetingRecord] {
        &self.records
    }

    /// Returns today's date according to the injected clock.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        status::today(&*self.clock)
    }

    /// Derives the board's tasks in default panel order.
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        sort_default(project_all(&self.records, self.today()))
    }

    /// Replaces the snapshot with the repository's current contents.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::Repository`] when records cannot be loaded;
    /// the previous snapshot is kept in that case.
    pub async fn refresh(&mut self) -> TrackingResult<()> {
        self.records = self.repository.load_all().await?;
        Ok(())
    }

    /// Toggles a task's completion state optimistically.
    ///
    /// Returns the re-derived task on success.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::TaskNotFound`] or
    /// [`TrackingError::UnsavedRecord`] before anything changes,
    /// [`TrackingError::Domain`] when the write-back cannot be applied, and
    /// [`TrackingError::Repository`] after rolling back a failed save.
    pub async fn toggle(&mut self, task_id: &TaskId, completed: bool) -> TrackingResult<Task> {
        let today = self.today();
        let tasks = project_all(&self.records, today);
        let task = find_task(&tasks, task_id)?;
        if task.source().record_id.is_none() {
            return Err(TrackingError::UnsavedRecord(task_id.clone()));
        }
        let update = completion_update(task, completed, today, &self.config);

        let position = self
            .records
            .iter()
            .position(|record| record.id == update.record_id)
            .ok_or_else(|| TrackingError::TaskNotFound(task_id.clone()))?;
        let slot = self
            .records
            .get_mut(position)
            .ok_or_else(|| TrackingError::TaskNotFound(task_id.clone()))?;
        let updated = slot.with_completion(&update)?;
        let previous = std::mem::replace(slot, updated.clone());

        if let Err(err) = self.repository.save(&updated).await {
            if let Some(restore) = self.records.get_mut(position) {
                *restore = previous;
            }
            tracing::warn!(
                task_id = %task_id,
                error = %err,
                "save failed; rolled back completion toggle"
            );
            return Err(err.into());
        }

        tracing::info!(task_id = %task_id, completed, "persisted completion toggle");
        let refreshed = project_all(&self.records, today);
        find_task(&refreshed, task_id).cloned()
    }
}
