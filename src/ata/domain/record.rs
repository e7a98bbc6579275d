//! Meeting record document and its nested agenda structure.

use super::{AssignmentId, AtaDomainError, AtaId, CompletionUpdate};
use serde::{Deserialize, Serialize};

/// A meeting-minutes record ("ata").
///
/// The record is the unit of persistence: agenda items and assignments are
/// only ever written as part of the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingRecord {
    /// Store identifier, absent until the record is first saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AtaId>,
    /// Project or site ("empreendimento") the meeting belongs to.
    #[serde(default)]
    pub empreendimento: String,
    /// Meeting title.
    #[serde(default)]
    pub title: String,
    /// Meeting subject.
    #[serde(default)]
    pub subject: String,
    /// Meeting date in `DD/MM/YYYY` format.
    #[serde(default)]
    pub date: String,
    /// Discussion topics in agenda order.
    #[serde(default)]
    pub agenda: Vec<AgendaItem>,
}

impl MeetingRecord {
    /// Creates an unsaved record with a title and meeting date.
    #[must_use]
    pub fn new(title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id: None,
            empreendimento: String::new(),
            title: title.into(),
            subject: String::new(),
            date: date.into(),
            agenda: Vec::new(),
        }
    }

    /// Sets the store identifier.
    #[must_use]
    pub fn with_id(mut self, id: AtaId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the project or site name.
    #[must_use]
    pub fn with_empreendimento(mut self, empreendimento: impl Into<String>) -> Self {
        self.empreendimento = empreendimento.into();
        self
    }

    /// Sets the meeting subject.
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Appends an agenda item.
    #[must_use]
    pub fn with_agenda_item(mut self, item: AgendaItem) -> Self {
        self.agenda.push(item);
        self
    }

    /// Returns a copy of this record with one assignment's completion state
    /// replaced according to `update`.
    ///
    /// The receiver is left untouched so callers can keep it for rollback.
    ///
    /// # Errors
    ///
    /// Returns [`AtaDomainError::RecordMismatch`] when the update was derived
    /// from another record, [`AtaDomainError::AgendaItemNotFound`] when the
    /// agenda index is out of range, and
    /// [`AtaDomainError::AssignmentNotFound`] when the assignment at the
    /// update's position is missing or carries another identifier.
    pub fn with_completion(&self, update: &CompletionUpdate) -> Result<Self, AtaDomainError> {
        if self.id != update.record_id {
            return Err(AtaDomainError::RecordMismatch {
                expected: id_label(update.record_id.as_ref()),
                found: id_label(self.id.as_ref()),
            });
        }

        let mut updated = self.clone();
        let item = updated
            .agenda
            .get_mut(update.agenda_item_index)
            .ok_or(AtaDomainError::AgendaItemNotFound {
                index: update.agenda_item_index,
            })?;
        let assignment = item
            .assignment_at_mut(update.assignment_index, &update.assignment_id)
            .ok_or_else(|| AtaDomainError::AssignmentNotFound {
                agenda_item_index: update.agenda_item_index,
                assignment_id: update.assignment_id.clone(),
            })?;
        assignment.completed = update.completed;
        assignment.completion_date.clone_from(&update.completion_date);
        Ok(updated)
    }
}

/// One discussion topic ("pauta") within a meeting record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaItem {
    /// Sequence label shown next to the topic, such as `"1"` or `"2.a"`.
    #[serde(default)]
    pub label: String,
    /// Free-text description shared by every assignment of the topic.
    #[serde(default)]
    pub description: String,
    /// Responsible parties ("responsáveis") and their deadlines.
    #[serde(default)]
    pub assignments: Vec<Assignment>,
}

impl AgendaItem {
    /// Creates an agenda item without assignments.
    #[must_use]
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
            assignments: Vec::new(),
        }
    }

    /// Appends an assignment.
    #[must_use]
    pub fn with_assignment(mut self, assignment: Assignment) -> Self {
        self.assignments.push(assignment);
        self
    }

    fn assignment_at_mut(&mut self, index: usize, id: &AssignmentId) -> Option<&mut Assignment> {
        self.assignments
            .get_mut(index)
            .filter(|assignment| &assignment.id == id)
    }
}

/// A (person, deadline, completion) entry attached to an agenda item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Identifier unique within the agenda item.
    pub id: AssignmentId,
    /// Free-text name of the responsible party.
    #[serde(default)]
    pub responsible: String,
    /// Deadline in `DD/MM/YYYY` format; `None` or empty means no deadline.
    #[serde(default)]
    pub deadline: Option<String>,
    /// Whether the assignment has been completed.
    #[serde(default)]
    pub completed: bool,
    /// Date the assignment was completed.
    #[serde(default)]
    pub completion_date: Option<String>,
}

impl Assignment {
    /// Creates an open assignment without a deadline.
    #[must_use]
    pub fn new(id: AssignmentId, responsible: impl Into<String>) -> Self {
        Self {
            id,
            responsible: responsible.into(),
            deadline: None,
            completed: false,
            completion_date: None,
        }
    }

    /// Sets the deadline string.
    #[must_use]
    pub fn with_deadline(mut self, deadline: impl Into<String>) -> Self {
        self.deadline = Some(deadline.into());
        self
    }

    /// Marks the assignment as completed on the given date.
    #[must_use]
    pub fn completed_on(mut self, completion_date: impl Into<String>) -> Self {
        self.completed = true;
        self.completion_date = Some(completion_date.into());
        self
    }

    /// Returns the deadline string when it is present and not blank.
    #[must_use]
    pub fn deadline_text(&self) -> Option<&str> {
        self.deadline
            .as_deref()
            .map(str::trim)
            .filter(|deadline| !deadline.is_empty())
    }
}

fn id_label(id: Option<&AtaId>) -> String {
    id.map_or_else(|| "<unsaved>".to_owned(), ToString::to_string)
}
