//! Infrastructure layer for wcs-delegates
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the live delegate registry, the built-in
//! delegates, plugin manifest loading and configuration file loading.

pub mod config;
pub mod delegates;
pub mod plugins;
pub mod registry;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileDelegatesConfig, FileLoggingConfig,
    FileOutputConfig,
};
pub use delegates::{
    ArcGridDelegate, CommandDelegate, GeoTiffDelegate, ImageDelegate, NetCdfDelegate,
    builtin_delegates,
};
pub use plugins::{DelegateManifest, PluginError, PluginLoader, ScanReport, SyncReport};
pub use registry::{ExtensionRegistry, Origin, RegistryStats, build_registry};
