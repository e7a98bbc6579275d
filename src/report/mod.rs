//! Markdown deadline reports rendered with `minijinja`.
//!
//! A report lists the summary counters for a reference date followed by the
//! tasks of each responsible party in default order.

use crate::{
    config::TrackingConfig,
    deadline::{
        Task, TaskGroup, TaskSummary, date::format_display, group_by_responsible, sort_default,
    },
};
use chrono::NaiveDate;
use minijinja::Environment;
use serde::Serialize;
use thiserror::Error;

/// Template used by [`render_markdown`].
///
/// The context exposes `reference_date` (`DD/MM/YYYY`), `summary` (see
/// [`TaskSummary`]) and `groups`, each with a `key` and its `tasks`.
pub const DEFAULT_TEMPLATE: &str = "\
# Deadline report {{ reference_date }}

Total: {{ summary.total }} | Overdue: {{ summary.overdue }} | Due today: {{ summary.due_today }} | Upcoming: {{ summary.upcoming }} | Completed: {{ summary.completed }} | No deadline: {{ summary.no_deadline }}
{% for group in groups %}

## {{ group.key }}

{% for task in group.tasks %}
- [{{ 'x' if task.completed else ' ' }}] {{ task.description }} ({{ task.status }}, due {{ task.deadline or 'n/a' }}) - {{ task.source.title }}
{% endfor %}
{% endfor %}
";

/// Errors raised while rendering a report.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReportError {
    /// The template failed to parse or evaluate.
    #[error("failed to render deadline report: {reason}")]
    Render {
        /// Renderer message.
        reason: String,
    },
}

#[derive(Debug, Serialize)]
struct ReportContext {
    reference_date: String,
    summary: TaskSummary,
    groups: Vec<TaskGroup>,
}

/// Renders the default Markdown report for `tasks` as of `today`.
///
/// # Errors
///
/// Returns [`ReportError::Render`] when rendering fails.
pub fn render_markdown(
    tasks: &[Task],
    today: NaiveDate,
    config: &TrackingConfig,
) -> Result<String, ReportError> {
    render_with_template(DEFAULT_TEMPLATE, tasks, today, config)
}

/// Renders `tasks` with a caller-supplied template.
///
/// The template receives the same context as [`DEFAULT_TEMPLATE`].
///
/// # Errors
///
/// Returns [`ReportError::Render`] when the template is invalid or fails
/// to evaluate.
pub fn render_with_template(
    template: &str,
    tasks: &[Task],
    today: NaiveDate,
    config: &TrackingConfig,
) -> Result<String, ReportError> {
    let ordered = sort_default(tasks.to_vec());
    let context = ReportContext {
        reference_date: format_display(today),
        summary: TaskSummary::from_tasks(&ordered),
        groups: group_by_responsible(&ordered, config),
    };

    let mut environment = Environment::new();
    environment.set_trim_blocks(true);
    environment.set_lstrip_blocks(true);
    let rendered = environment
        .render_str(template, context)
        .map_err(|error| ReportError::Render {
            reason: error.to_string(),
        })?;
    tracing::debug!(tasks = ordered.len(), "rendered deadline report");
    Ok(rendered)
}

#[cfg(test)]
mod tests;
