//! Plugin manifests
//!
//! External delegates are declared by TOML manifests in a plugin directory.
//! The [`PluginLoader`] scans the directory, validates each manifest and
//! swaps the resulting [`CommandDelegate`](crate::delegates::CommandDelegate)s
//! into the registry, so delegates can be added or removed without
//! restarting.
//!
//! ```text
//! plugins/
//! ├── grib2.toml     → CommandDelegate "grib2"
//! ├── jp2k.toml      → CommandDelegate "jp2k"
//! └── broken.toml    → rejected (logged, reported)
//! ```

mod loader;
mod manifest;

pub use loader::{PluginLoader, ScanReport, SyncReport};
pub use manifest::DelegateManifest;

use std::path::PathBuf;

use thiserror::Error;
use wcs_application::RegistryError;
use wcs_domain::DomainError;

/// Error type for plugin manifest handling
#[derive(Debug, Error)]
pub enum PluginError {
    #[error("Invalid plugin directory pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Failed to read manifest {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid manifest {}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: DomainError,
    },

    #[error("Manifest {} declares no command", .path.display())]
    EmptyCommand { path: PathBuf },

    #[error("Manifest {} redeclares delegate '{id}'", .path.display())]
    DuplicateId { path: PathBuf, id: String },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}
