//! Configuration for task projection, grouping and write-back.

use crate::deadline::date::{format_display, format_input};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Format used when writing an assignment's completion date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionDateFormat {
    /// `DD/MM/YYYY`, matching the rest of the record.
    #[default]
    Display,
    /// ISO `YYYY-MM-DD`.
    Iso,
}

impl CompletionDateFormat {
    /// Formats `date` in this format.
    #[must_use]
    pub fn format(self, date: NaiveDate) -> String {
        match self {
            Self::Display => format_display(date),
            Self::Iso => format_input(date),
        }
    }
}

/// Tunables for the deadline tracking views.
///
/// # Examples
///
/// ```
/// use atas::config::{CompletionDateFormat, TrackingConfig};
///
/// let config = TrackingConfig::default();
/// assert_eq!(config.unassigned_label, "unassigned");
/// assert_eq!(config.completion_date_format, CompletionDateFormat::Display);
///
/// let parsed = TrackingConfig::from_json_str(r#"{"upcoming_window_days": 14}"#)
///     .unwrap_or_default();
/// assert_eq!(parsed.upcoming_window_days, 14);
/// assert_eq!(parsed.unassigned_label, "unassigned");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    /// Group key for tasks whose responsible name is blank.
    pub unassigned_label: String,
    /// Group key for tasks whose record has no project name.
    pub no_project_label: String,
    /// Group key for tasks without a parseable deadline when grouping by
    /// month.
    pub no_deadline_label: String,
    /// Format written to `completion_date` when a task is completed.
    pub completion_date_format: CompletionDateFormat,
    /// Number of days ahead considered "coming up" on the deadline panel.
    pub upcoming_window_days: u32,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            unassigned_label: "unassigned".to_owned(),
            no_project_label: "no project".to_owned(),
            no_deadline_label: "no deadline".to_owned(),
            completion_date_format: CompletionDateFormat::Display,
            upcoming_window_days: 7,
        }
    }
}

impl TrackingConfig {
    /// Creates a configuration with Portuguese group labels.
    #[must_use]
    pub fn portuguese() -> Self {
        Self {
            unassigned_label: "Não atribuído".to_owned(),
            no_project_label: "Sem empreendimento".to_owned(),
            no_deadline_label: "Sem prazo".to_owned(),
            ..Self::default()
        }
    }

    /// Parses a configuration from JSON, filling omitted fields with
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] when the document is not
    /// valid JSON or a field has the wrong type.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
