//! Shared world state for deadline tracking BDD scenarios.

use std::sync::Arc;

use atas::{
    ata::{
        adapters::memory::InMemoryAtaRepository, domain::MeetingRecord,
        services::DeadlineTrackingService,
    },
    clock::FixedClock,
    deadline::Task,
};
use chrono::NaiveDate;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestTrackingService = DeadlineTrackingService<InMemoryAtaRepository, FixedClock>;

/// Scenario world for deadline tracking behaviour tests.
pub struct DeadlineWorld {
    pub repository: Arc<InMemoryAtaRepository>,
    pub today: Option<NaiveDate>,
    pub record: Option<MeetingRecord>,
    pub tasks: Vec<Task>,
}

impl DeadlineWorld {
    /// Creates a world with an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            repository: Arc::new(InMemoryAtaRepository::new()),
            today: None,
            record: None,
            tasks: Vec::new(),
        }
    }

    /// Builds a tracking service pinned to the scenario's reference date.
    pub fn service(&self) -> Result<TestTrackingService, eyre::Report> {
        let today = self
            .today
            .ok_or_else(|| eyre::eyre!("missing reference date in scenario world"))?;
        Ok(DeadlineTrackingService::new(
            Arc::clone(&self.repository),
            Arc::new(FixedClock::at_date(today)),
        ))
    }

    /// Finds the projected task assigned to `responsible`.
    pub fn task_for(&self, responsible: &str) -> Result<&Task, eyre::Report> {
        self.tasks
            .iter()
            .find(|task| task.responsible() == responsible)
            .ok_or_else(|| eyre::eyre!("no task assigned to {responsible}"))
    }
}

impl Default for DeadlineWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DeadlineWorld {
    DeadlineWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
