//! Plain image delegate (PNG, JPEG, GIF, TIFF, BMP)

use wcs_domain::{ConstructionError, CoverageResponseDelegate, FormatDescriptor, FormatTable};

/// Writes coverages as rendered raster images
#[derive(Debug, Clone)]
pub struct ImageDelegate {
    formats: FormatTable,
}

impl ImageDelegate {
    pub fn new() -> Self {
        Self {
            formats: FormatTable::new()
                .with(FormatDescriptor::new("PNG", "image/png", "png"))
                .with(FormatDescriptor::new("JPEG", "image/jpeg", "jpg"))
                .with(FormatDescriptor::new("GIF", "image/gif", "gif"))
                .with(FormatDescriptor::new("TIFF", "image/tiff", "tif"))
                .with(FormatDescriptor::new("BMP", "image/bmp", "bmp")),
        }
    }
}

impl Default for ImageDelegate {
    fn default() -> Self {
        Self::new()
    }
}

impl CoverageResponseDelegate for ImageDelegate {
    fn id(&self) -> &str {
        "image"
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_formats() {
        let delegate = ImageDelegate::new();

        for format in ["PNG", "image/png", "jpeg", "image/gif", "TIFF", "image/bmp"] {
            assert!(delegate.can_produce(format), "{} should be produced", format);
        }
        assert!(!delegate.can_produce("GeoTIFF"));
        assert_eq!(delegate.output_formats().len(), 10);
    }

    #[test]
    fn test_image_extension() {
        let delegate = ImageDelegate::new();

        assert_eq!(delegate.file_extension("image/jpeg").as_deref(), Some("jpg"));
        assert_eq!(delegate.mime_type("bmp").as_deref(), Some("image/bmp"));
    }
}
