//! Error types for meeting record construction and write-back.

use super::AssignmentId;
use thiserror::Error;

/// Errors returned by meeting record domain operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AtaDomainError {
    /// An identifier was empty after trimming.
    #[error("identifier must not be empty")]
    EmptyIdentifier,

    /// A completion update targeted a different record.
    #[error("completion update targets record '{expected}' but was applied to '{found}'")]
    RecordMismatch {
        /// Record the update was derived from.
        expected: String,
        /// Record the update was applied to.
        found: String,
    },

    /// The agenda item index is out of range for the record.
    #[error("agenda item {index} does not exist")]
    AgendaItemNotFound {
        /// Requested agenda item position.
        index: usize,
    },

    /// The agenda item has no assignment with the identifier at the expected
    /// position.
    #[error("assignment '{assignment_id}' not found in agenda item {agenda_item_index}")]
    AssignmentNotFound {
        /// Agenda item that was searched.
        agenda_item_index: usize,
        /// Missing assignment identifier.
        assignment_id: AssignmentId,
    },
}
