//! Plugin directory loader

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use glob::{Pattern, glob};
use wcs_domain::CoverageResponseDelegate;

use super::PluginError;
use super::manifest::DelegateManifest;
use crate::delegates::CommandDelegate;
use crate::registry::ExtensionRegistry;

/// Result of scanning a plugin directory
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Delegates built from valid manifests, in path order
    pub delegates: Vec<CommandDelegate>,
    /// Manifests that could not be loaded
    pub rejected: Vec<PluginError>,
}

/// Result of synchronizing a registry with a plugin directory
#[derive(Debug, Default)]
pub struct SyncReport {
    /// Ids of the plugin delegates now registered
    pub loaded: Vec<String>,
    /// Number of previously registered plugin delegates that were dropped
    pub dropped: usize,
    pub rejected: Vec<PluginError>,
}

/// Loads delegate manifests (`*.toml`) from a plugin directory
pub struct PluginLoader;

impl PluginLoader {
    /// Load and validate a single manifest
    pub fn load_manifest(path: &Path) -> Result<CommandDelegate, PluginError> {
        let content = std::fs::read_to_string(path).map_err(|source| PluginError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        DelegateManifest::parse(&content, path)?.into_delegate(path)
    }

    /// Scan `dir` for manifests
    ///
    /// Manifests are read in path order. Invalid manifests and manifests
    /// redeclaring an id already seen are skipped and reported. A missing
    /// directory yields an empty report. Glob metacharacters in `dir` itself
    /// are matched literally.
    pub fn scan(dir: &Path) -> Result<ScanReport, PluginError> {
        let pattern = Path::new(&Pattern::escape(&dir.to_string_lossy())).join("*.toml");
        let mut report = ScanReport::default();
        let mut seen = HashSet::new();

        for entry in glob(&pattern.to_string_lossy())? {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping unreadable plugin entry");
                    continue;
                }
            };

            match Self::load_manifest(&path) {
                Ok(delegate) if !seen.insert(delegate.id().to_string()) => {
                    let error = PluginError::DuplicateId {
                        id: delegate.id().to_string(),
                        path,
                    };
                    tracing::warn!(error = %error, "Rejected plugin manifest");
                    report.rejected.push(error);
                }
                Ok(delegate) => {
                    tracing::debug!(
                        delegate = delegate.id(),
                        path = %path.display(),
                        available = delegate.is_available(),
                        "Loaded plugin manifest"
                    );
                    report.delegates.push(delegate);
                }
                Err(error) => {
                    tracing::warn!(error = %error, "Rejected plugin manifest");
                    report.rejected.push(error);
                }
            }
        }

        Ok(report)
    }

    /// Scan `dir` and replace the plugin delegates of `registry` with the result
    pub fn sync(registry: &ExtensionRegistry, dir: &Path) -> Result<SyncReport, PluginError> {
        let ScanReport { delegates, rejected } = Self::scan(dir)?;

        let loaded = delegates.iter().map(|d| d.id().to_string()).collect();
        let delegates: Vec<Arc<dyn CoverageResponseDelegate>> = delegates
            .into_iter()
            .map(|d| Arc::new(d) as Arc<dyn CoverageResponseDelegate>)
            .collect();
        let dropped = registry.replace_plugins(delegates)?;

        Ok(SyncReport {
            loaded,
            dropped,
            rejected,
        })
    }
}
