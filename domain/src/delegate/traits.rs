//! Coverage response delegate capability
//!
//! [`CoverageResponseDelegate`] is the contract every output encoder
//! implements. Delegates are registered once (at startup or when a plugin
//! manifest is loaded) and queried many times; a successful resolution never
//! hands out the registered object itself but a fresh instance obtained from
//! [`CoverageResponseDelegate::instantiate`].

use std::fmt;

use thiserror::Error;

/// Boxed error used as the underlying cause of a construction failure
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A delegate matched a request but could not be constructed
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ConstructionError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl ConstructionError {
    /// Create a construction error without an underlying cause
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Create a construction error wrapping the underlying cause
    pub fn with_source(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Output-format delegate for coverage responses
///
/// Implementations must keep every query method pure: `is_available`,
/// `can_produce` and `output_formats` are called on every resolution and
/// listing, possibly from several threads at once.
pub trait CoverageResponseDelegate: Send + Sync + fmt::Debug {
    /// Stable identifier of this delegate variant
    ///
    /// Examples: "geotiff", "image", "arcgrid", "plugin:grib2"
    fn id(&self) -> &str;

    /// Ordering hint for registries (higher = consulted first)
    fn priority(&self) -> i32 {
        0
    }

    /// Short human readable description, shown in delegate listings
    fn description(&self) -> Option<String> {
        None
    }

    /// Whether the runtime dependencies of this delegate are satisfied
    ///
    /// An unavailable delegate is never resolved nor listed, even when it
    /// claims the requested format.
    fn is_available(&self) -> bool {
        true
    }

    /// Every format identifier (names and MIME types) this delegate supports
    fn output_formats(&self) -> Vec<String>;

    /// Check if this delegate claims the given format identifier
    ///
    /// Identifiers are compared ASCII case-insensitively.
    fn can_produce(&self, format: &str) -> bool {
        self.output_formats()
            .iter()
            .any(|f| f.eq_ignore_ascii_case(format))
    }

    /// MIME type written for the given format, if produced by this delegate
    fn mime_type(&self, _format: &str) -> Option<String> {
        None
    }

    /// Suggested file extension (without the dot) for the given format
    fn file_extension(&self, _format: &str) -> Option<String> {
        None
    }

    /// Construct a fresh instance of this delegate variant
    fn instantiate(&self) -> Result<Box<dyn CoverageResponseDelegate>, ConstructionError>;
}
