//! Validation finding model.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        })
    }
}

/// One finding. `line`/`column` are 1-based; `code` is a stable machine
/// identifier (real Dart lint names where one exists).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DartValidationError {
    pub line: usize,
    pub column: usize,
    pub message: String,
    pub severity: Severity,
    pub code: String,
}

impl DartValidationError {
    pub fn new(
        line: usize,
        column: usize,
        message: impl Into<String>,
        severity: Severity,
        code: impl Into<String>,
    ) -> Self {
        Self {
            line,
            column,
            message: message.into(),
            severity,
            code: code.into(),
        }
    }
}

/// Result of one [`crate::validate`] call. Created fresh per call; never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DartValidationResult {
    pub is_valid: bool,
    pub errors: Vec<DartValidationError>,
    pub warnings: Vec<DartValidationError>,
    pub formatted_code: String,
}
