//! Write-back delta for toggling an assignment's completion state.

use super::{AssignmentId, AtaId};
use serde::{Deserialize, Serialize};

/// Change to apply to one assignment inside a meeting record.
///
/// Produced from a derived task and applied with
/// [`MeetingRecord::with_completion`](super::MeetingRecord::with_completion).
/// Status is not part of the delta; it is re-derived on the next projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionUpdate {
    /// Record that owns the assignment.
    pub record_id: Option<AtaId>,
    /// Position of the agenda item within the record.
    pub agenda_item_index: usize,
    /// Position of the assignment within the agenda item.
    pub assignment_index: usize,
    /// Assignment to update; must match the one at `assignment_index`.
    pub assignment_id: AssignmentId,
    /// New completion flag.
    pub completed: bool,
    /// Completion date to store, cleared when reopening.
    pub completion_date: Option<String>,
}
