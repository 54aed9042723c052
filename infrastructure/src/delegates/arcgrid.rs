//! ESRI ArcGrid ASCII delegate

use wcs_domain::{ConstructionError, CoverageResponseDelegate, FormatDescriptor, FormatTable};

/// Writes coverages as ArcGrid ASCII, optionally gzipped
#[derive(Debug, Clone)]
pub struct ArcGridDelegate {
    formats: FormatTable,
}

impl ArcGridDelegate {
    pub fn new() -> Self {
        Self {
            formats: FormatTable::new()
                .with(FormatDescriptor::new("ArcGrid", "text/plain", "asc"))
                .with(FormatDescriptor::new(
                    "ArcGrid-GZIP",
                    "application/x-gzip",
                    "asc.gz",
                )),
        }
    }
}

impl Default for ArcGridDelegate {
    fn default() -> Self {
        Self::new()
    }
}

impl CoverageResponseDelegate for ArcGridDelegate {
    fn id(&self) -> &str {
        "arcgrid"
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
    fn test_arcgrid_gzip_variant() {
        let delegate = ArcGridDelegate::new();

        assert!(delegate.can_produce("arcgrid-gzip"));
        assert_eq!(delegate.file_extension("ArcGrid-GZIP").as_deref(), Some("asc.gz"));
        assert_eq!(delegate.mime_type("ArcGrid").as_deref(), Some("text/plain"));
    }
}
