//! Delegate registry adapter
//!
//! - [`ExtensionRegistry`] — live registry implementing the
//!   [`DelegateRegistry`](wcs_application::DelegateRegistry) port
//! - [`build_registry`] — registry assembled from the `[delegates]` config

mod extension_registry;

pub use extension_registry::{ExtensionRegistry, Origin, RegistryStats};

use crate::config::FileDelegatesConfig;
use crate::delegates::builtin_delegates;
use crate::plugins::{PluginError, PluginLoader};

/// Build a registry from configuration
///
/// Registers the built-in delegates (unless disabled as a group), applies the
/// extension filter and loads the plugin directory if one is configured.
/// Invalid manifests are logged and skipped.
pub fn build_registry(config: &FileDelegatesConfig) -> Result<ExtensionRegistry, PluginError> {
    let mut registry = ExtensionRegistry::new();

    if config.builtin {
        for delegate in builtin_delegates(&config.netcdf_command) {
            registry = registry.register_arc(delegate);
        }
    }

    for id in &config.disabled {
        registry.disable(id)?;
    }

    if let Some(dir) = &config.plugin_dir {
        let report = PluginLoader::sync(&registry, dir)?;
        tracing::info!(
            dir = %dir.display(),
            loaded = report.loaded.len(),
            rejected = report.rejected.len(),
            "Loaded plugin delegates"
        );
    }

    tracing::debug!(delegates = registry.len(), "Built delegate registry");
    Ok(registry)
}
