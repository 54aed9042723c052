//! Output formatter trait

use serde::Serialize;
use wcs_domain::{CoverageResponseDelegate, DelegateSummary};

/// Outcome of a successful `resolve` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDelegate {
    /// Format as requested
    pub format: String,
    /// Id of the delegate that will encode it
    pub delegate: String,
    pub mime_type: Option<String>,
    pub extension: Option<String>,
}

impl ResolvedDelegate {
    pub fn new(format: &str, delegate: &dyn CoverageResponseDelegate) -> Self {
        Self {
            format: format.to_string(),
            delegate: delegate.id().to_string(),
            mime_type: delegate.mime_type(format),
            extension: delegate.file_extension(format),
        }
    }
}

/// Trait for formatting delegate reports
pub trait ReportFormatter {
    /// Format the supported output format listing
    fn format_formats(&self, formats: &[String]) -> String;

    /// Format the registered delegate listing
    fn format_delegates(&self, delegates: &[DelegateSummary]) -> String;

    /// Format a resolution result
    fn format_resolution(&self, resolved: &ResolvedDelegate) -> String;
}
