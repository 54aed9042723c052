//! Output formatting
//!
//! - [`console::ConsoleFormatter`] — colored text for terminals
//! - [`json::JsonFormatter`] — machine readable JSON

pub mod console;
pub mod formatter;
pub mod json;
