//! Coverage response delegate domain module
//!
//! This module defines the capability contract for **output-format delegates**:
//! plugins that encode coverage (raster) query results into a specific
//! encoding such as GeoTIFF, PNG or ArcGrid.
//!
//! # Overview
//!
//! ```text
//! ┌──────────────────┐   current_delegates()   ┌──────────────────┐
//! │ DelegateRegistry │────────────────────────▶│ DelegateFinder   │
//! │ (live, mutable)  │                         │ (stateless)      │
//! └──────────────────┘                         └────────┬─────────┘
//!                                                       │ first available
//!                                                       │ + can_produce(F)
//!                                                       ▼
//!                                              instantiate() → fresh delegate
//! ```
//!
//! The registry port and the finder live in the application layer; this
//! module only holds the pure definitions.
//!
//! # Key Types
//!
//! - [`CoverageResponseDelegate`] — the capability trait every encoder implements
//! - [`ConstructionError`] — a matching delegate could not be instantiated
//! - [`FormatDescriptor`] / [`FormatTable`] — declared formats with MIME type and extension
//! - [`DelegateSummary`] — serializable diagnostic view of a registered delegate

pub mod descriptor;
pub mod summary;
pub mod traits;

pub use descriptor::{FormatDescriptor, FormatTable};
pub use summary::DelegateSummary;
pub use traits::{ConstructionError, CoverageResponseDelegate};
