//! Domain model for meeting-minutes records.
//!
//! A record owns its agenda items, which own their assignments. Derived
//! task views never mutate a record in place; they produce a
//! [`CompletionUpdate`] that is applied copy-on-write.

mod completion;
mod error;
mod ids;
mod record;

pub use completion::CompletionUpdate;
pub use error::AtaDomainError;
pub use ids::{AssignmentId, AtaId};
pub use record::{AgendaItem, Assignment, MeetingRecord};
