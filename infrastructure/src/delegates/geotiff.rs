//! GeoTIFF delegate

use wcs_domain::{ConstructionError, CoverageResponseDelegate, FormatDescriptor, FormatTable};

/// Writes coverages as GeoTIFF
#[derive(Debug, Clone)]
pub struct GeoTiffDelegate {
    formats: FormatTable,
}

impl GeoTiffDelegate {
    pub fn new() -> Self {
        Self {
            formats: FormatTable::new().with(
                FormatDescriptor::new("GeoTIFF", "image/tiff;subtype=\"geotiff\"", "tif")
                    .with_alias("image/geotiff"),
            ),
        }
    }
}

impl Default for GeoTiffDelegate {
    fn default() -> Self {
        Self::new()
    }
}

impl CoverageResponseDelegate for GeoTiffDelegate {
    fn id(&self) -> &str {
        "geotiff"
    }

    fn output_formats(&self) -> Vec<String> {
        self.formats.identifiers()
    }

    fn can_produce(&self, format: &str) -> bool {
        self.formats.find(format).is_some()
    }

    fn mime_type(&self, format: &str) -> Option<String> {
        super::table_mime_type(&self.formats, format)
    }

    fn file_extension(&self, format: &str) -> Option<String> {
        super::table_extension(&self.formats, format)
    }

    fn instantiate(&self) -> Result<Box<dyn CoverageResponseDelegate>, ConstructionError> {
        Ok(Box::new(Self::new()))
    }
}
