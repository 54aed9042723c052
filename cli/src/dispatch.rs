//! Command dispatch and exit status mapping

use wcs_application::{DelegateFinder, FindDelegateError};
use wcs_domain::ReportStyle;
use wcs_presentation::{Command, ConsoleFormatter, JsonFormatter, ReportFormatter, ResolvedDelegate};

/// Exit code for a format no delegate can produce
pub const EXIT_UNSUPPORTED: u8 = 2;

/// Exit code for construction and registry failures
pub const EXIT_FAULT: u8 = 1;

/// What a successfully dispatched command produced
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Report for stdout
    Report(String),
    /// Client error message for stderr
    Unsupported(String),
}

pub fn formatter(style: ReportStyle) -> &'static dyn ReportFormatter {
    match style {
        ReportStyle::Text => &ConsoleFormatter,
        ReportStyle::Json => &JsonFormatter,
    }
}

/// Run a command against the finder
///
/// An unknown output format is an [`Outcome::Unsupported`]; anything else
/// that goes wrong is a server fault and comes back as an error.
pub fn execute(
    command: Command,
    finder: &DelegateFinder,
    formatter: &dyn ReportFormatter,
) -> Result<Outcome, FindDelegateError> {
    let report = match command {
        Command::Formats => formatter.format_formats(&finder.output_formats()?),
        Command::Delegates => formatter.format_delegates(&finder.describe()?),
        Command::Resolve { format } => match finder.require_encoder(&format) {
            Ok(delegate) => {
                formatter.format_resolution(&ResolvedDelegate::new(&format, delegate.as_ref()))
            }
            Err(e) if e.is_client_error() => return Ok(Outcome::Unsupported(e.to_string())),
            Err(e) => return Err(e),
        },
    };
    Ok(Outcome::Report(report))
}

pub fn exit_status(result: &Result<Outcome, FindDelegateError>) -> u8 {
    match result {
        Ok(Outcome::Report(_)) => 0,
        Ok(Outcome::Unsupported(_)) => EXIT_UNSUPPORTED,
        Err(_) => EXIT_FAULT,
    }
}
