//! Project deliverable ("entregável") records.

use super::{ProjectDomainError, ProjectId};
use crate::deadline::{
    date::parse_display_date,
    status::{ProjectStatus, classify_project},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A standalone deliverable tracked against a single deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Projeto {
    id: ProjectId,
    name: String,
    empreendimento: String,
    responsible: String,
    deadline: String,
    status: ProjectStatus,
}

/// Parameter object for creating a deliverable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProjeto {
    /// Deliverable name.
    pub name: String,
    /// Project or site the deliverable belongs to.
    pub empreendimento: String,
    /// Responsible party.
    pub responsible: String,
    /// Deadline in `DD/MM/YYYY` format.
    pub deadline: String,
    /// Initial explicit status.
    pub status: ProjectStatus,
}

impl Projeto {
    /// Creates a deliverable with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyName`] for a blank name,
    /// [`ProjectDomainError::InvalidDeadline`] when the deadline is not a
    /// valid `DD/MM/YYYY` date, and [`ProjectDomainError::DerivedStatus`]
    /// when the initial status is `overdue`.
    pub fn new(params: NewProjeto) -> Result<Self, ProjectDomainError> {
        Self::with_id(ProjectId::generate(), params)
    }

    /// Creates a deliverable with a known identifier.
    ///
    /// # Errors
    ///
    /// Same as [`Projeto::new`].
    pub fn with_id(id: ProjectId, params: NewProjeto) -> Result<Self, ProjectDomainError> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(ProjectDomainError::EmptyName);
        }
        let deadline = validated_deadline(&params.deadline)?;
        ensure_explicit(params.status)?;

        Ok(Self {
            id,
            name: name.to_owned(),
            empreendimento: params.empreendimento.trim().to_owned(),
            responsible: params.responsible.trim().to_owned(),
            deadline,
            status: params.status,
        })
    }

    /// Returns the deliverable identifier.
    #[must_use]
    pub const fn id(&self) -> &ProjectId {
        &self.id
    }

    /// Returns the deliverable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the project or site name.
    #[must_use]
    pub fn empreendimento(&self) -> &str {
        &self.empreendimento
    }

    /// Returns the responsible party.
    #[must_use]
    pub fn responsible(&self) -> &str {
        &self.responsible
    }

    /// Returns the deadline in `DD/MM/YYYY` format.
    #[must_use]
    pub fn deadline(&self) -> &str {
        &self.deadline
    }

    /// Returns the parsed deadline.
    #[must_use]
    pub fn deadline_date(&self) -> Option<NaiveDate> {
        parse_display_date(&self.deadline)
    }

    /// Returns the status as last set by a user.
    #[must_use]
    pub const fn explicit_status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns the status shown to users on `today`.
    #[must_use]
    pub fn effective_status(&self, today: NaiveDate) -> ProjectStatus {
        classify_project(self.status, self.deadline_date(), today)
    }

    /// Sets a new explicit status.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::DerivedStatus`] for `overdue`, which is
    /// only ever derived.
    pub fn set_status(&mut self, status: ProjectStatus) -> Result<(), ProjectDomainError> {
        ensure_explicit(status)?;
        self.status = status;
        Ok(())
    }

    /// Moves the deadline.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidDeadline`] when the value is not
    /// a valid `DD/MM/YYYY` date.
    pub fn reschedule(&mut self, deadline: &str) -> Result<(), ProjectDomainError> {
        self.deadline = validated_deadline(deadline)?;
        Ok(())
    }
}

fn validated_deadline(raw: &str) -> Result<String, ProjectDomainError> {
    let trimmed = raw.trim();
    if parse_display_date(trimmed).is_none() {
        return Err(ProjectDomainError::InvalidDeadline(raw.to_owned()));
    }
    Ok(trimmed.to_owned())
}

fn ensure_explicit(status: ProjectStatus) -> Result<(), ProjectDomainError> {
    if status == ProjectStatus::Overdue {
        return Err(ProjectDomainError::DerivedStatus(status));
    }
    Ok(())
}
