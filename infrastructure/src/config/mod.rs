//! Configuration file loading for wcs-delegates
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `WCS_DELEGATES_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./wcs-delegates.toml` or `./.wcs-delegates.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/wcs-delegates/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileDelegatesConfig, FileLoggingConfig, FileOutputConfig,
};
pub use loader::ConfigLoader;
