//! Error types for deliverable validation.

use crate::deadline::ProjectStatus;
use thiserror::Error;

/// Errors returned while constructing or editing deliverables.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// The deliverable name is empty after trimming.
    #[error("deliverable name must not be empty")]
    EmptyName,

    /// The deadline is missing or not a valid `DD/MM/YYYY` date.
    #[error("invalid deadline '{0}', expected DD/MM/YYYY")]
    InvalidDeadline(String),

    /// A derived-only status was supplied as an explicit status.
    #[error("status '{0}' is derived and cannot be set explicitly")]
    DerivedStatus(ProjectStatus),

    /// The identifier is empty after trimming.
    #[error("project identifier must not be empty")]
    EmptyIdentifier,
}
