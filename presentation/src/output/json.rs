//! JSON output formatter

use crate::output::formatter::{ReportFormatter, ResolvedDelegate};
use serde::Serialize;
use wcs_domain::DelegateSummary;

/// Formats reports as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_formats(&self, formats: &[String]) -> String {
        Self::to_json(formats)
    }

    fn format_delegates(&self, delegates: &[DelegateSummary]) -> String {
        Self::to_json(delegates)
    }

    fn format_resolution(&self, resolved: &ResolvedDelegate) -> String {
        Self::to_json(resolved)
    }
}
