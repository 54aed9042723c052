//! NetCDF delegate
//!
//! NetCDF output needs the NetCDF command line tools. The delegate probes
//! the configured tool on `PATH` when it is created and reports itself
//! unavailable when the tool is missing. A fresh instance probes again, so
//! a tool uninstalled after registration surfaces as a construction error.

use std::path::PathBuf;

use wcs_domain::{ConstructionError, CoverageResponseDelegate, FormatDescriptor, FormatTable};

/// Writes coverages as NetCDF through the NetCDF tools
#[derive(Debug, Clone)]
pub struct NetCdfDelegate {
    command: String,
    binary: Option<PathBuf>,
    formats: FormatTable,
}

impl NetCdfDelegate {
    /// Create a delegate backed by `command`, probing it on `PATH`
    pub fn new(command: impl Into<String>) -> Self {
        let command = command.into();
        let binary = which::which(&command).ok();
        if binary.is_none() {
            tracing::debug!(command = %command, "NetCDF tool not found, delegate unavailable");
        }
        Self::with_binary(command, binary)
    }

    fn with_binary(command: String, binary: Option<PathBuf>) -> Self {
        Self {
            command,
            binary,
            formats: FormatTable::new().with(FormatDescriptor::new(
                "NetCDF",
                "application/x-netcdf",
                "nc",
            )),
        }
    }
}

impl CoverageResponseDelegate for NetCdfDelegate {
    fn id(&self) -> &str {
        "netcdf"
    }

    fn description(&self) -> Option<String> {
        Some(format!("NetCDF via {}", self.command))
    }

    fn is_available(&self) -> bool {
        self.binary.is_some()
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
        let binary = which::which(&self.command).map_err(|e| {
            ConstructionError::with_source(
                format!("Can't create the encoder netcdf: '{}' not found", self.command),
                e,
            )
        })?;
        Ok(Box::new(Self::with_binary(self.command.clone(), Some(binary))))
    }
}
