//! Identifier types for meeting records and their assignments.

use super::AtaDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of a persisted meeting record.
///
/// Document stores hand out opaque string keys, so the identifier wraps a
/// trimmed, non-empty string rather than a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AtaId(String);

impl AtaId {
    /// Creates a validated record identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AtaDomainError::EmptyIdentifier`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, AtaDomainError> {
        non_blank(value.into()).map(Self)
    }

    /// Creates a fresh random identifier for a record being saved.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AtaId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for AtaId {
    type Error = AtaDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AtaId> for String {
    fn from(id: AtaId) -> Self {
        id.0
    }
}

impl fmt::Display for AtaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of one responsible-party entry inside an agenda item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AssignmentId(String);

impl AssignmentId {
    /// Creates a validated assignment identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AtaDomainError::EmptyIdentifier`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, AtaDomainError> {
        non_blank(value.into()).map(Self)
    }

    /// Creates a fresh random assignment identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AssignmentId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for AssignmentId {
    type Error = AtaDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AssignmentId> for String {
    fn from(id: AssignmentId) -> Self {
        id.0
    }
}

impl fmt::Display for AssignmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn non_blank(raw: String) -> Result<String, AtaDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AtaDomainError::EmptyIdentifier);
    }
    Ok(trimmed.to_owned())
}
