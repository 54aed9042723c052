//! Presentation layer for wcs-delegates
//!
//! This crate contains CLI definitions and output formatters.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, StyleArg};
pub use output::console::ConsoleFormatter;
pub use output::formatter::{ReportFormatter, ResolvedDelegate};
pub use output::json::JsonFormatter;
