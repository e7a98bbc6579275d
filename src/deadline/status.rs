//! Status derivation for tasks and projects.
//!
//! Both entity kinds share one rule: completion wins, then the deadline is
//! compared with "today" at calendar-day granularity. Status is derived on
//! every read and never stored.

use chrono::NaiveDate;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

/// Derived status of a task flattened from a meeting record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// The deadline is before today and the task is not completed.
    Overdue,
    /// The deadline is today and the task is not completed.
    DueToday,
    /// The deadline is after today and the task is not completed.
    Upcoming,
    /// The task has been marked as completed.
    Completed,
    /// The task is not completed and has no usable deadline.
    NoDeadline,
}

impl TaskStatus {
    /// Every task status, in dashboard display order.
    pub const ALL: [Self; 5] = [
        Self::Overdue,
        Self::DueToday,
        Self::Upcoming,
        Self::NoDeadline,
        Self::Completed,
    ];

    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::DueToday => "due-today",
            Self::Upcoming => "upcoming",
            Self::Completed => "completed",
            Self::NoDeadline => "no-deadline",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "overdue" => Ok(Self::Overdue),
            "due-today" => Ok(Self::DueToday),
            "upcoming" => Ok(Self::Upcoming),
            "completed" => Ok(Self::Completed),
            "no-deadline" => Ok(Self::NoDeadline),
            _ => Err(ParseStatusError(value.to_owned())),
        }
    }
}

/// Status of a project deliverable.
///
/// `Pending`, `InProgress` and `Completed` are set explicitly by users.
/// `Overdue` is only ever produced by [`classify_project`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    /// Work has not started.
    Pending,
    /// Work is under way.
    InProgress,
    /// The deliverable has been handed over.
    Completed,
    /// The deadline has passed without completion.
    Overdue,
}

impl ProjectStatus {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Overdue => "overdue",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProjectStatus {
    type Error = ParseStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "overdue" => Ok(Self::Overdue),
            _ => Err(ParseStatusError(value.to_owned())),
        }
    }
}

/// Error returned while parsing a status from its string form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown status: {0}")]
pub struct ParseStatusError(pub String);

/// Returns the local calendar date reported by `clock`.
#[must_use]
pub fn today(clock: &impl Clock) -> NaiveDate {
    clock.local().date_naive()
}

/// Derives a task status.
///
/// # Examples
///
/// ```
/// use atas::deadline::status::{TaskStatus, classify_task};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 7, 15).unwrap_or_default();
/// let yesterday = today.pred_opt();
/// assert_eq!(classify_task(yesterday, false, today), TaskStatus::Overdue);
/// assert_eq!(classify_task(yesterday, true, today), TaskStatus::Completed);
/// assert_eq!(classify_task(None, false, today), TaskStatus::NoDeadline);
/// ```
#[must_use]
pub fn classify_task(deadline: Option<NaiveDate>, completed: bool, today: NaiveDate) -> TaskStatus {
    if completed {
        return TaskStatus::Completed;
    }
    match deadline.map(|date| date.cmp(&today)) {
        None => TaskStatus::NoDeadline,
        Some(Ordering::Less) => TaskStatus::Overdue,
        Some(Ordering::Equal) => TaskStatus::DueToday,
        Some(Ordering::Greater) => TaskStatus::Upcoming,
    }
}

/// Derives the effective status of a project deliverable.
///
/// A completed project is never downgraded. Any other project whose
/// deadline lies strictly before `today` becomes [`ProjectStatus::Overdue`];
/// otherwise the explicit status is returned unchanged.
#[must_use]
pub fn classify_project(
    explicit: ProjectStatus,
    deadline: Option<NaiveDate>,
    today: NaiveDate,
) -> ProjectStatus {
    if explicit == ProjectStatus::Completed {
        return ProjectStatus::Completed;
    }
    match deadline {
        Some(date) if date < today => ProjectStatus::Overdue,
        _ => explicit,
    }
}
