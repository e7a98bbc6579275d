//! Task derivation and aggregation over meeting records.
//!
//! - [`date`]: conversions between `DD/MM/YYYY` and ISO dates
//! - [`status`]: task and project status rules
//! - [`projector`]: flattening, ordering, grouping and write-back deltas
//! - [`summary`]: dashboard counters and deadline windows
//!
//! Everything here is synchronous and pure; "today" is always passed in.

pub mod date;
pub mod projector;
pub mod status;
pub mod summary;

pub use projector::{
    SourceRecord, Task, TaskGroup, TaskId, compare_default, completion_update, group_by_month,
    group_by_project, group_by_responsible, group_by_status, project_all, sort_default,
};
pub use status::{ParseStatusError, ProjectStatus, TaskStatus, classify_project, classify_task};
pub use summary::{TaskSummary, due_within};

#[cfg(test)]
mod tests;
