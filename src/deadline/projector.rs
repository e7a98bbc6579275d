//! Flattening of meeting records into independently addressable tasks.
//!
//! Tasks are read-through views: they are rebuilt from the records on every
//! read and never become a source of truth. Changes travel back to the
//! owning record through [`completion_update`].

use super::{
    date::{parse_any_date, parse_display_date},
    status::{TaskStatus, classify_task},
};
use crate::{
    ata::domain::{AssignmentId, Assignment, AtaId, CompletionUpdate, MeetingRecord},
    config::TrackingConfig,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

/// Composite identifier of a derived task.
///
/// Built from the record id, the agenda item position and the assignment
/// id, so projecting the same records twice yields the same identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display metadata of the record a task was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceRecord {
    /// Identifier of the owning record, if it has been saved.
    pub record_id: Option<AtaId>,
    /// Meeting title.
    pub title: String,
    /// Meeting date in `DD/MM/YYYY` format.
    pub date: String,
    /// Project or site name.
    pub empreendimento: String,
}

impl SourceRecord {
    fn from_record(record: &MeetingRecord) -> Self {
        Self {
            record_id: record.id.clone(),
            title: record.title.clone(),
            date: record.date.clone(),
            empreendimento: record.empreendimento.clone(),
        }
    }
}

/// One assignment of one agenda item of one meeting record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    description: String,
    responsible: String,
    deadline: Option<String>,
    deadline_date: Option<NaiveDate>,
    status: TaskStatus,
    completed: bool,
    completion_date: Option<String>,
    completed_on: Option<NaiveDate>,
    source: SourceRecord,
    agenda_item_index: usize,
    assignment_index: usize,
    assignment_id: AssignmentId,
}

impl Task {
    fn from_assignment(
        id: TaskId,
        source: SourceRecord,
        location: (usize, usize, &str),
        assignment: &Assignment,
        today: NaiveDate,
    ) -> Self {
        let (agenda_item_index, assignment_index, description) = location;
        let deadline = assignment.deadline_text().map(ToOwned::to_owned);
        let deadline_date = deadline.as_deref().and_then(parse_display_date);
        let completion_date = assignment
            .completion_date
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(ToOwned::to_owned);
        let completed_on = completion_date.as_deref().and_then(parse_any_date);

        Self {
            id,
            description: description.to_owned(),
            responsible: assignment.responsible.clone(),
            deadline,
            deadline_date,
            status: classify_task(deadline_date, assignment.completed, today),
            completed: assignment.completed,
            completion_date,
            completed_on,
            source,
            agenda_item_index,
            assignment_index,
            assignment_id: assignment.id.clone(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the agenda item description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the responsible party's name as recorded.
    #[must_use]
    pub fn responsible(&self) -> &str {
        &self.responsible
    }

    /// Returns the deadline display string, if one was recorded.
    #[must_use]
    pub fn deadline(&self) -> Option<&str> {
        self.deadline.as_deref()
    }

    /// Returns the parsed deadline, or `None` when absent or malformed.
    #[must_use]
    pub const fn deadline_date(&self) -> Option<NaiveDate> {
        self.deadline_date
    }

    /// Returns the status derived at projection time.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns whether the assignment is completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the recorded completion date string.
    #[must_use]
    pub fn completion_date(&self) -> Option<&str> {
        self.completion_date.as_deref()
    }

    /// Returns the parsed completion date.
    #[must_use]
    pub const fn completed_on(&self) -> Option<NaiveDate> {
        self.completed_on
    }

    /// Returns the metadata of the originating record.
    #[must_use]
    pub const fn source(&self) -> &SourceRecord {
        &self.source
    }

    /// Returns the agenda item position inside the source record.
    #[must_use]
    pub const fn agenda_item_index(&self) -> usize {
        self.agenda_item_index
    }

    /// Returns the assignment position inside the agenda item.
    #[must_use]
    pub const fn assignment_index(&self) -> usize {
        self.assignment_index
    }

    /// Returns the assignment identifier inside the agenda item.
    #[must_use]
    pub const fn assignment_id(&self) -> &AssignmentId {
        &self.assignment_id
    }
}

/// Tasks sharing a grouping key, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskGroup {
    /// Grouping key.
    pub key: String,
    /// Tasks in input order.
    pub tasks: Vec<Task>,
}

/// Flattens meeting records into tasks, one per assignment.
///
/// Records without agenda items or assignments contribute nothing. Unsaved
/// records use `draft-{position}` in place of their id. A composite id that
/// repeats within one call receives a `#n` suffix.
#[must_use]
pub fn project_all(records: &[MeetingRecord], today: NaiveDate) -> Vec<Task> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut tasks = Vec::new();

    for (position, record) in records.iter().enumerate() {
        let record_key = record
            .id
            .as_ref()
            .map_or_else(|| format!("draft-{position}"), ToString::to_string);
        let source = SourceRecord::from_record(record);

        for (item_index, item) in record.agenda.iter().enumerate() {
            for (assignment_index, assignment) in item.assignments.iter().enumerate() {
                let id = unique_task_id(
                    &mut seen,
                    format!("{record_key}:{item_index}:{}", assignment.id),
                );
                tasks.push(Task::from_assignment(
                    id,
                    source.clone(),
                    (item_index, assignment_index, &item.description),
                    assignment,
                    today,
                ));
            }
        }
    }

    tracing::debug!(
        records = records.len(),
        tasks = tasks.len(),
        %today,
        "projected meeting records into tasks"
    );
    tasks
}

fn unique_task_id(seen: &mut HashMap<String, usize>, base: String) -> TaskId {
    match seen.entry(base) {
        Entry::Vacant(entry) => {
            let id = TaskId(entry.key().clone());
            entry.insert(1);
            id
        }
        Entry::Occupied(mut entry) => {
            let occurrence = entry.get().saturating_add(1);
            entry.insert(occurrence);
            TaskId(format!("{}#{occurrence}", entry.key()))
        }
    }
}

/// Orders two tasks for the deadline panel.
///
/// Open tasks come first, by deadline ascending with missing deadlines last.
/// Completed tasks follow, most recently completed first with missing
/// completion dates last.
#[must_use]
pub fn compare_default(left: &Task, right: &Task) -> Ordering {
    left.completed.cmp(&right.completed).then_with(|| {
        if left.completed {
            missing_last(left.completed_on, right.completed_on, |a, b| b.cmp(a))
        } else {
            missing_last(left.deadline_date, right.deadline_date, Ord::cmp)
        }
    })
}

/// Sorts tasks with [`compare_default`]. Ties keep their input order.
#[must_use]
pub fn sort_default(mut tasks: Vec<Task>) -> Vec<Task> {
    tasks.sort_by(compare_default);
    tasks
}

fn missing_last(
    left: Option<NaiveDate>,
    right: Option<NaiveDate>,
    compare: impl Fn(&NaiveDate, &NaiveDate) -> Ordering,
) -> Ordering {
    match (left, right) {
        (Some(a), Some(b)) => compare(&a, &b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Groups tasks by responsible party.
///
/// Names are compared after trimming; blank names fall under
/// [`TrackingConfig::unassigned_label`].
#[must_use]
pub fn group_by_responsible(tasks: &[Task], config: &TrackingConfig) -> Vec<TaskGroup> {
    group_by_key(tasks, |task| {
        label_or(task.responsible.trim(), &config.unassigned_label)
    })
}

/// Groups tasks by the project ("empreendimento") of their source record.
#[must_use]
pub fn group_by_project(tasks: &[Task], config: &TrackingConfig) -> Vec<TaskGroup> {
    group_by_key(tasks, |task| {
        label_or(task.source.empreendimento.trim(), &config.no_project_label)
    })
}

/// Groups tasks by deadline month (`YYYY-MM`).
#[must_use]
pub fn group_by_month(tasks: &[Task], config: &TrackingConfig) -> Vec<TaskGroup> {
    group_by_key(tasks, |task| {
        task.deadline_date.map_or_else(
            || config.no_deadline_label.clone(),
            |date| date.format("%Y-%m").to_string(),
        )
    })
}

/// Groups tasks by derived status.
#[must_use]
pub fn group_by_status(tasks: &[Task]) -> Vec<TaskGroup> {
    group_by_key(tasks, |task| task.status.as_str().to_owned())
}

fn label_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_owned()
    } else {
        value.to_owned()
    }
}

fn group_by_key(tasks: &[Task], key_of: impl Fn(&Task) -> String) -> Vec<TaskGroup> {
    let mut groups: Vec<TaskGroup> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for task in tasks {
        match positions.entry(key_of(task)) {
            Entry::Occupied(entry) => {
                if let Some(group) = groups.get_mut(*entry.get()) {
                    group.tasks.push(task.clone());
                }
            }
            Entry::Vacant(entry) => {
                let key = entry.key().clone();
                entry.insert(groups.len());
                groups.push(TaskGroup {
                    key,
                    tasks: vec![task.clone()],
                });
            }
        }
    }
    groups
}

/// Describes how to write a completion toggle back to the source record.
///
/// The task itself is not modified. Completing stamps `today` in the
/// configured format; reopening clears the completion date.
#[must_use]
pub fn completion_update(
    task: &Task,
    completed: bool,
    today: NaiveDate,
    config: &TrackingConfig,
) -> CompletionUpdate {
    CompletionUpdate {
        record_id: task.source.record_id.clone(),
        agenda_item_index: task.agenda_item_index,
        assignment_index: task.assignment_index,
        assignment_id: task.assignment_id.clone(),
        completed,
        completion_date: completed.then(|| config.completion_date_format.format(today)),
    }
}
