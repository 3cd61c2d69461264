//! Validation issue and result types.

use serde::{Deserialize, Serialize};

/// Field name used for the synthetic "nothing to validate" error.
pub const FIELD_ACTIVITY: &str = "activity";

/// Message of the synthetic "nothing to validate" error.
pub const NO_ACTIVITY_MESSAGE: &str = "No activity loaded";

/// Whether an issue blocks publishing or is informational.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValidationSeverity {
    Error,
    Warning,
}

/// A single field-level finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: ValidationSeverity,
    pub field: String,
    pub message: String,
}

impl Issue {
    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ValidationSeverity::Error,
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ValidationSeverity::Warning,
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Verdict for one activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<Issue>,
    pub warnings: Vec<Issue>,
}

impl ValidationResult {
    /// Build a result from collected issues; valid iff there are no errors.
    pub fn from_issues(errors: Vec<Issue>, warnings: Vec<Issue>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// The result reported when no activity is loaded.
    pub fn no_activity() -> Self {
        Self {
            is_valid: false,
            errors: vec![Issue::error(FIELD_ACTIVITY, NO_ACTIVITY_MESSAGE)],
            warnings: Vec::new(),
        }
    }

    pub fn issue_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }
}
