//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wcs_domain::ReportStyle;

use crate::delegates::DEFAULT_NETCDF_COMMAND;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("netcdf_command cannot be empty")]
    EmptyNetcdfCommand,

    #[error("disabled delegate id cannot be empty")]
    EmptyDisabledId,

    #[error("plugin_dir cannot be empty")]
    EmptyPluginDir,
}

/// Raw delegate configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDelegatesConfig {
    /// Register the built-in delegates
    pub builtin: bool,
    /// Delegate ids hidden by the extension filter
    pub disabled: Vec<String>,
    /// Directory holding plugin manifests (`*.toml`)
    pub plugin_dir: Option<PathBuf>,
    /// NetCDF tool probed for the netcdf delegate
    pub netcdf_command: String,
}

impl Default for FileDelegatesConfig {
    fn default() -> Self {
        Self {
            builtin: true,
            disabled: Vec::new(),
            plugin_dir: None,
            netcdf_command: DEFAULT_NETCDF_COMMAND.to_string(),
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Report style (uses domain type)
    pub style: ReportStyle,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            style: ReportStyle::default(),
            color: true,
        }
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Filter directive used when no `-v` flag is given (e.g., "info")
    pub level: Option<String>,
    /// Write logs to this file instead of stderr
    pub file: Option<String>,
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub delegates: FileDelegatesConfig,
    pub output: FileOutputConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.delegates.netcdf_command.trim().is_empty() {
            return Err(ConfigValidationError::EmptyNetcdfCommand);
        }

        if self.delegates.disabled.iter().any(|id| id.trim().is_empty()) {
            return Err(ConfigValidationError::EmptyDisabledId);
        }

        if let Some(dir) = &self.delegates.plugin_dir {
            if dir.as_os_str().is_empty() {
                return Err(ConfigValidationError::EmptyPluginDir);
            }
        }

        Ok(())
    }
}
