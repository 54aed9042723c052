//! Domain layer for wcs-delegates
//!
//! This crate contains the core capability contract, value objects and
//! domain errors. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! ## Coverage Response Delegate
//!
//! A delegate is a plugin that writes `GetCoverage` results in one or more
//! output encodings (GeoTIFF, PNG, ArcGrid, ...). Every delegate reports:
//!
//! - **Availability**: whether its runtime dependencies are present
//! - **Capability**: which format identifiers it can produce
//! - **Construction**: a factory for fresh instances, handed out per resolution
//!
//! ## Format Descriptor
//!
//! A format is identified by a short name (`"GeoTIFF"`) or a MIME type
//! (`"image/tiff"`); both are matched ASCII case-insensitively.

pub mod config;
pub mod core;
pub mod delegate;

// Re-export commonly used types
pub use config::ReportStyle;
pub use core::error::DomainError;
pub use delegate::{
    descriptor::{FormatDescriptor, FormatTable},
    summary::DelegateSummary,
    traits::{ConstructionError, CoverageResponseDelegate},
};
