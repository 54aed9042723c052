//! Report style value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// How listings and resolution results are rendered
///
/// Not to be confused with a coverage output format: this only controls
/// how the tool reports what it found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStyle {
    /// Human readable text (default)
    #[default]
    Text,
    /// JSON output
    Json,
}

impl fmt::Display for ReportStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportStyle::Text => write!(f, "text"),
            ReportStyle::Json => write!(f, "json"),
        }
    }
}
