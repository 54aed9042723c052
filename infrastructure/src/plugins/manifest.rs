//! Delegate manifest format

use std::path::Path;

use serde::{Deserialize, Serialize};
use wcs_domain::{DomainError, FormatDescriptor, FormatTable};

use super::PluginError;
use crate::delegates::CommandDelegate;

/// Raw plugin manifest as written on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelegateManifest {
    /// Delegate id, unique across the plugin directory
    pub id: String,
    #[serde(default)]
    pub description: String,
    /// Encoder program, looked up on `PATH`
    pub command: String,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub formats: Vec<FormatDescriptor>,
}

impl DelegateManifest {
    /// Parse a manifest; `path` is only used for error reporting
    pub fn parse(content: &str, path: &Path) -> Result<Self, PluginError> {
        toml::from_str(content).map_err(|source| PluginError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self, path: &Path) -> Result<(), PluginError> {
        let invalid = |source: DomainError| PluginError::Invalid {
            path: path.to_path_buf(),
            source,
        };

        if self.id.trim().is_empty() {
            return Err(invalid(DomainError::EmptyDelegateId));
        }
        if self.command.trim().is_empty() {
            return Err(PluginError::EmptyCommand {
                path: path.to_path_buf(),
            });
        }
        self.format_table().validate(&self.id).map_err(invalid)
    }

    fn format_table(&self) -> FormatTable {
        self.formats.iter().cloned().collect()
    }

    /// Validate and build the delegate declared by this manifest
    pub fn into_delegate(self, path: &Path) -> Result<CommandDelegate, PluginError> {
        self.validate(path)?;
        let formats = self.format_table();
        Ok(CommandDelegate::new(self.id.trim(), self.command.trim(), formats)
            .with_description(self.description)
            .with_priority(self.priority))
    }
}
