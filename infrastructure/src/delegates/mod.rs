//! Coverage response delegate implementations
//!
//! ## Built-in delegates
//!
//! | Delegate | Formats | Availability |
//! |----------|---------|--------------|
//! | [`GeoTiffDelegate`] | GeoTIFF | always |
//! | [`ImageDelegate`] | PNG, JPEG, GIF, TIFF, BMP | always |
//! | [`ArcGridDelegate`] | ArcGrid, ArcGrid-GZIP | always |
//! | [`NetCdfDelegate`] | NetCDF | NetCDF tool found on `PATH` |
//!
//! ## Plugin delegates
//!
//! [`CommandDelegate`] wraps an external encoder declared by a plugin
//! manifest (see [`crate::plugins`]).

pub mod arcgrid;
pub mod command;
pub mod geotiff;
pub mod image;
pub mod netcdf;

pub use arcgrid::ArcGridDelegate;
pub use command::CommandDelegate;
pub use geotiff::GeoTiffDelegate;
pub use image::ImageDelegate;
pub use netcdf::NetCdfDelegate;

use std::sync::Arc;

use wcs_domain::{CoverageResponseDelegate, FormatTable};

/// Default NetCDF tool probed for availability
pub const DEFAULT_NETCDF_COMMAND: &str = "nccopy";

/// Create the built-in delegates in their default registration order
pub fn builtin_delegates(netcdf_command: &str) -> Vec<Arc<dyn CoverageResponseDelegate>> {
    vec![
        Arc::new(GeoTiffDelegate::new()),
        Arc::new(ImageDelegate::new()),
        Arc::new(ArcGridDelegate::new()),
        Arc::new(NetCdfDelegate::new(netcdf_command)),
    ]
}

fn table_mime_type(table: &FormatTable, format: &str) -> Option<String> {
    table.find(format).map(|d| d.mime_type.clone())
}

fn table_extension(table: &FormatTable, format: &str) -> Option<String> {
    table
        .find(format)
        .filter(|d| !d.extension.is_empty())
        .map(|d| d.extension.clone())
}
