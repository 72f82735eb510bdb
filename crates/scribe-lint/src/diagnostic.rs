//! Diagnostics data model.
//!
//! Diagnostics are derived from a text snapshot and recomputed wholesale on every lint pass.
//! Hosts render them as underlines, gutter markers or a problems list.

use serde::{Deserialize, Serialize};

/// Diagnostic severity levels, ordered `Hint < Warning < Error`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Style suggestions.
    #[default]
    Hint,
    /// Likely mistakes.
    Warning,
    /// Structural problems.
    Error,
}

/// A single positional finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, in `char`s from the start of the line.
    pub column: usize,
    /// How serious the finding is.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Stable identifier of the heuristic that produced this diagnostic (see [`crate::rules`]).
    pub rule: String,
}

impl Diagnostic {
    /// Create a diagnostic at a 1-based position.
    pub fn new(
        line: usize,
        column: usize,
        severity: Severity,
        rule: &str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            line,
            column,
            severity,
            message: message.into(),
            rule: rule.to_string(),
        }
    }

    /// An [`Severity::Error`] diagnostic.
    pub fn error(line: usize, column: usize, rule: &str, message: impl Into<String>) -> Self {
        Self::new(line, column, Severity::Error, rule, message)
    }

    /// A [`Severity::Warning`] diagnostic.
    pub fn warning(line: usize, column: usize, rule: &str, message: impl Into<String>) -> Self {
        Self::new(line, column, Severity::Warning, rule, message)
    }

    /// A [`Severity::Hint`] diagnostic.
    pub fn hint(line: usize, column: usize, rule: &str, message: impl Into<String>) -> Self {
        Self::new(line, column, Severity::Hint, rule, message)
    }
}
