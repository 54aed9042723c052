//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Delegate id cannot be empty")]
    EmptyDelegateId,

    #[error("Delegate '{0}' declares no output formats")]
    NoFormats(String),

    #[error("Format name cannot be empty")]
    EmptyFormatName,

    #[error("MIME type cannot be empty for format '{0}'")]
    EmptyMimeType(String),
}
