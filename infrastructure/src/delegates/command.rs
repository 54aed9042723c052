//! External command delegate
//!
//! A [`CommandDelegate`] is declared by a plugin manifest and hands the
//! actual encoding to an external program. It is available only while that
//! program can be found on `PATH`.
//!
//! # Example Manifest
//!
//! ```toml
//! id = "grib2"
//! command = "wgrib2"
//! priority = 10
//!
//! [[formats]]
//! name = "GRIB2"
//! mime_type = "application/x-grib2"
//! extension = "grb2"
//! ```

use std::path::PathBuf;

use wcs_domain::{ConstructionError, CoverageResponseDelegate, FormatTable};

/// Delegate backed by an external encoder program
#[derive(Debug, Clone)]
pub struct CommandDelegate {
    id: String,
    description: String,
    command: String,
    priority: i32,
    formats: FormatTable,
    binary: Option<PathBuf>,
}

impl CommandDelegate {
    /// Create a delegate, probing `command` on `PATH`
    pub fn new(id: impl Into<String>, command: impl Into<String>, formats: FormatTable) -> Self {
        let command = command.into();
        let binary = which::which(&command).ok();
        Self {
            id: id.into(),
            description: String::new(),
            command,
            priority: 0,
            formats,
            binary,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

}

impl CoverageResponseDelegate for CommandDelegate {
    fn id(&self) -> &str {
        &self.id
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn description(&self) -> Option<String> {
        if self.description.trim().is_empty() {
            Some(format!("External command '{}'", self.command))
        } else {
            Some(self.description.clone())
        }
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
                format!(
                    "Can't create the encoder {}: command '{}' not found",
                    self.id, self.command
                ),
                e,
            )
        })?;

        let mut fresh = self.clone();
        fresh.binary = Some(binary);
        Ok(Box::new(fresh))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wcs_domain::FormatDescriptor;

    fn grib_formats() -> FormatTable {
        FormatTable::new().with(FormatDescriptor::new("GRIB2", "application/x-grib2", "grb2"))
    }

    #[test]
    fn test_missing_command_unavailable() {
        let delegate = CommandDelegate::new(
            "grib2",
            "wcs-delegates-test-missing-wgrib2",
            grib_formats(),
        )
        .with_priority(10);

        assert!(!delegate.is_available());
        assert_eq!(delegate.priority(), 10);
        assert!(delegate.can_produce("grib2"));
        assert_eq!(
            delegate.description().as_deref(),
            Some("External command 'wcs-delegates-test-missing-wgrib2'")
        );

        let err = delegate.instantiate().unwrap_err();
        assert!(err.message().contains("Can't create the encoder grib2"));
    }

    #[cfg(unix)]
    #[test]
    fn test_instantiate_copies_declaration() {
        let delegate = CommandDelegate::new("grib2", "sh", grib_formats())
            .with_description("GRIB2 through a shell wrapper")
            .with_priority(3);

        assert!(delegate.is_available());
        let fresh = delegate.instantiate().unwrap();
        assert_eq!(fresh.id(), "grib2");
        assert_eq!(fresh.priority(), 3);
        assert_eq!(
            fresh.description().as_deref(),
            Some("GRIB2 through a shell wrapper")
        );
        assert_eq!(fresh.mime_type("GRIB2").as_deref(), Some("application/x-grib2"));
        assert_eq!(fresh.file_extension("application/x-grib2").as_deref(), Some("grb2"));
    }
}
