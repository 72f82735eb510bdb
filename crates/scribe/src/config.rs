use crate::error::AnalysisError;
use scribe_highlight::OffsetEncoding;
use scribe_lint::Severity;
use serde::{Deserialize, Serialize};

/// Host-tunable analysis settings. Every field has a default, so partial documents load fine.
///
/// ```
/// use scribe::{AnalyzerConfig, OffsetEncoding, Severity};
///
/// let config = AnalyzerConfig::from_yaml("offset_encoding: utf16\nmin_severity: warning\n").unwrap();
/// assert_eq!(config.offset_encoding, OffsetEncoding::Utf16);
/// assert_eq!(config.min_severity, Severity::Warning);
/// assert_eq!(config.max_diagnostics, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Unit of span offsets and diagnostic columns.
    pub offset_encoding: OffsetEncoding,
    /// Diagnostics below this severity are dropped.
    pub min_severity: Severity,
    /// Keep at most this many diagnostics (in report order).
    pub max_diagnostics: Option<usize>,
}

impl AnalyzerConfig {
    /// Load from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, AnalysisError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, AnalysisError> {
        Ok(serde_json::from_str(json)?)
    }
}
