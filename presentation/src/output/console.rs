//! Console output formatter for delegate reports

use crate::output::formatter::{ReportFormatter, ResolvedDelegate};
use colored::Colorize;
use wcs_domain::DelegateSummary;

/// Formats delegate reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Enable or disable ANSI colors for all console output
    pub fn set_color(enabled: bool) {
        colored::control::set_override(enabled);
    }

    /// Format the supported output formats, one per line
    pub fn format_formats(formats: &[String]) -> String {
        if formats.is_empty() {
            return format!("{}", "No output formats available".yellow());
        }

        let mut output = Self::section_header(&format!("Output formats ({})", formats.len()));
        for format in formats {
            output.push_str(&format!("  {}\n", format));
        }
        output
    }

    /// Format registered delegates with their availability
    pub fn format_delegates(delegates: &[DelegateSummary]) -> String {
        if delegates.is_empty() {
            return format!("{}", "No delegates registered".yellow());
        }

        let mut output = Self::section_header(&format!("Delegates ({})", delegates.len()));
        for delegate in delegates {
            let marker = if delegate.available {
                "[x]".green().bold()
            } else {
                "[ ]".red().bold()
            };
            output.push_str(&format!(
                "  {} {} {}\n",
                marker,
                delegate.id.bold(),
                format!("(priority {})", delegate.priority).dimmed()
            ));
            if let Some(description) = &delegate.description {
                output.push_str(&format!("      {}\n", description.dimmed()));
            }
            output.push_str(&format!("      {}\n", delegate.formats.join(", ")));
        }
        output
    }

    /// Format a resolution result
    pub fn format_resolution(resolved: &ResolvedDelegate) -> String {
        let mut output = format!(
            "{} {} {}\n",
            resolved.format.cyan().bold(),
            "->".dimmed(),
            resolved.delegate.bold()
        );
        if let Some(mime) = &resolved.mime_type {
            output.push_str(&format!("  {} {}\n", "MIME type:".cyan(), mime));
        }
        if let Some(ext) = &resolved.extension {
            output.push_str(&format!("  {} .{}\n", "Extension:".cyan(), ext));
        }
        output
    }

    fn section_header(title: &str) -> String {
        format!("{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }
}

impl ReportFormatter for ConsoleFormatter {
    fn format_formats(&self, formats: &[String]) -> String {
        Self::format_formats(formats)
    }

    fn format_delegates(&self, delegates: &[DelegateSummary]) -> String {
        Self::format_delegates(delegates)
    }

    fn format_resolution(&self, resolved: &ResolvedDelegate) -> String {
        Self::format_resolution(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_formats_lists_each() {
        let output =
            ConsoleFormatter::format_formats(&["ArcGrid".to_string(), "image/png".to_string()]);

        assert!(output.contains("Output formats (2)"));
        assert!(output.contains("  ArcGrid\n"));
        assert!(output.contains("  image/png\n"));
    }

    #[test]
    fn test_format_formats_empty() {
        assert!(ConsoleFormatter::format_formats(&[]).contains("No output formats available"));
    }

    #[test]
    fn test_format_delegates() {
        let delegates = vec![DelegateSummary {
            id: "netcdf".to_string(),
            available: false,
            priority: 0,
            description: Some("NetCDF via nccopy".to_string()),
            formats: vec!["NetCDF".to_string(), "application/x-netcdf".to_string()],
        }];

        let output = ConsoleFormatter::format_delegates(&delegates);
        assert!(output.contains("netcdf"));
        assert!(output.contains("NetCDF, application/x-netcdf"));
        assert!(output.contains("NetCDF via nccopy"));
    }

    #[test]
    fn test_format_resolution() {
        let resolved = ResolvedDelegate {
            format: "image/png".to_string(),
            delegate: "image".to_string(),
            mime_type: Some("image/png".to_string()),
            extension: Some("png".to_string()),
        };

        let output = ConsoleFormatter::format_resolution(&resolved);
        assert!(output.contains("image/png"));
        assert!(output.contains(".png"));
    }
}
