//! Diagnostic view of a registered delegate

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::traits::CoverageResponseDelegate;

/// Snapshot of one registered delegate, available or not
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegateSummary {
    pub id: String,
    pub available: bool,
    pub priority: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Declared formats, sorted and deduplicated
    pub formats: Vec<String>,
}

impl DelegateSummary {
    pub fn from_delegate(delegate: &dyn CoverageResponseDelegate) -> Self {
        let formats: BTreeSet<String> = delegate.output_formats().into_iter().collect();
        Self {
            id: delegate.id().to_string(),
            available: delegate.is_available(),
            priority: delegate.priority(),
            description: delegate.description(),
            formats: formats.into_iter().collect(),
        }
    }
}
