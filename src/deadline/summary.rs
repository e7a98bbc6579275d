//! Dashboard counters and deadline-window filtering over projected tasks.

use super::{projector::Task, status::TaskStatus};
use chrono::{Days, NaiveDate};
use serde::Serialize;

/// Per-status task counts shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskSummary {
    /// Number of tasks counted.
    pub total: usize,
    /// Open tasks past their deadline.
    pub overdue: usize,
    /// Open tasks due today.
    pub due_today: usize,
    /// Open tasks due later.
    pub upcoming: usize,
    /// Completed tasks.
    pub completed: usize,
    /// Open tasks without a deadline.
    pub no_deadline: usize,
}

impl TaskSummary {
    /// Counts tasks by their derived status.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        tasks.iter().fold(Self::default(), |mut summary, task| {
            summary.total = summary.total.saturating_add(1);
            let slot = match task.status() {
                TaskStatus::Overdue => &mut summary.overdue,
                TaskStatus::DueToday => &mut summary.due_today,
                TaskStatus::Upcoming => &mut summary.upcoming,
                TaskStatus::Completed => &mut summary.completed,
                TaskStatus::NoDeadline => &mut summary.no_deadline,
            };
            *slot = slot.saturating_add(1);
            summary
        })
    }

    /// Returns the count for one status.
    #[must_use]
    pub const fn count(&self, status: TaskStatus) -> usize {
        match status {
            TaskStatus::Overdue => self.overdue,
            TaskStatus::DueToday => self.due_today,
            TaskStatus::Upcoming => self.upcoming,
            TaskStatus::Completed => self.completed,
            TaskStatus::NoDeadline => self.no_deadline,
        }
    }

    /// Returns the number of tasks that are not completed.
    #[must_use]
    pub const fn open(&self) -> usize {
        self.total.saturating_sub(self.completed)
    }
}

/// Returns open tasks whose deadline falls between `today` and
/// `today + days`, both inclusive, in input order.
#[must_use]
pub fn due_within(tasks: &[Task], today: NaiveDate, days: u32) -> Vec<Task> {
    let horizon = today
        .checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX);
    tasks
        .iter()
        .filter(|task| !task.is_completed())
        .filter(|task| {
            task.deadline_date()
                .is_some_and(|deadline| deadline >= today && deadline <= horizon)
        })
        .cloned()
        .collect()
}
