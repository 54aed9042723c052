//! Extension Registry
//!
//! The [`ExtensionRegistry`] holds the live set of coverage response
//! delegates and implements [`DelegateRegistry`]. Delegates can be added,
//! removed, hidden by the extension filter or swapped in bulk (plugin
//! reload) at any time, including while other threads resolve formats.
//!
//! # Usage
//!
//! ```ignore
//! use wcs_infrastructure::registry::ExtensionRegistry;
//! use wcs_infrastructure::delegates::{GeoTiffDelegate, ImageDelegate};
//!
//! let registry = ExtensionRegistry::new()
//!     .register(GeoTiffDelegate::new())
//!     .register(ImageDelegate::new());
//!
//! // Hide a delegate without unregistering it
//! registry.disable("image")?;
//!
//! let delegates = registry.current_delegates()?;
//! assert_eq!(delegates.len(), 1);
//! ```
//!
//! # Ordering
//!
//! Snapshots are ordered by descending [`priority`], then by registration
//! order. The finder treats this order as the tie-break when several
//! delegates produce the same format.
//!
//! [`priority`]: CoverageResponseDelegate::priority

use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock};

use wcs_application::ports::delegate_registry::{DelegateRegistry, RegistryError};
use wcs_domain::CoverageResponseDelegate;

/// Where a registered delegate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Compiled-in delegate
    Builtin,
    /// Delegate declared by a plugin manifest
    Plugin,
}

#[derive(Debug)]
struct Entry {
    delegate: Arc<dyn CoverageResponseDelegate>,
    origin: Origin,
}

#[derive(Debug, Default)]
struct State {
    entries: Vec<Entry>,
    disabled: HashSet<String>,
}

/// Live, thread-safe registry of coverage response delegates
#[derive(Debug, Default)]
pub struct ExtensionRegistry {
    state: RwLock<State>,
}

impl ExtensionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a built-in delegate
    pub fn register<D: CoverageResponseDelegate + 'static>(self, delegate: D) -> Self {
        self.register_arc(Arc::new(delegate))
    }

    /// Register a built-in delegate (Arc version)
    pub fn register_arc(mut self, delegate: Arc<dyn CoverageResponseDelegate>) -> Self {
        let state = self
            .state
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        state.entries.push(Entry {
            delegate,
            origin: Origin::Builtin,
        });
        self
    }

    /// Register a delegate on a shared registry
    pub fn add(
        &self,
        delegate: Arc<dyn CoverageResponseDelegate>,
        origin: Origin,
    ) -> Result<(), RegistryError> {
        tracing::debug!(delegate = delegate.id(), ?origin, "Registered delegate");
        self.write()?.entries.push(Entry { delegate, origin });
        Ok(())
    }

    /// Remove every delegate registered under `id`
    ///
    /// Returns `true` if at least one delegate was removed.
    pub fn unregister(&self, id: &str) -> Result<bool, RegistryError> {
        let mut state = self.write()?;
        let before = state.entries.len();
        state.entries.retain(|e| e.delegate.id() != id);
        let removed = state.entries.len() != before;
        if removed {
            tracing::debug!(delegate = id, "Unregistered delegate");
        }
        Ok(removed)
    }

    /// Hide delegates with this id from queries without unregistering them
    ///
    /// Returns `true` if the id was not already disabled.
    pub fn disable(&self, id: &str) -> Result<bool, RegistryError> {
        Ok(self.write()?.disabled.insert(id.to_string()))
    }

    /// Make a disabled id visible again
    pub fn enable(&self, id: &str) -> Result<bool, RegistryError> {
        Ok(self.write()?.disabled.remove(id))
    }

    /// Atomically replace all plugin delegates, keeping built-ins
    ///
    /// Returns the number of plugin delegates that were dropped.
    pub fn replace_plugins(
        &self,
        delegates: Vec<Arc<dyn CoverageResponseDelegate>>,
    ) -> Result<usize, RegistryError> {
        let mut state = self.write()?;
        let before = state.entries.len();
        state.entries.retain(|e| e.origin == Origin::Builtin);
        let dropped = before - state.entries.len();
        let loaded = delegates.len();
        state
            .entries
            .extend(delegates.into_iter().map(|delegate| Entry {
                delegate,
                origin: Origin::Plugin,
            }));
        tracing::info!(dropped, loaded, "Replaced plugin delegates");
        Ok(dropped)
    }

    /// Ids of all registered delegates in registration order (disabled included)
    pub fn ids(&self) -> Result<Vec<String>, RegistryError> {
        Ok(self
            .read()?
            .entries
            .iter()
            .map(|e| e.delegate.id().to_string())
            .collect())
    }

    /// Number of registered delegates (disabled included)
    pub fn len(&self) -> usize {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get statistics about registered delegates
    pub fn stats(&self) -> Result<RegistryStats, RegistryError> {
        let state = self.read()?;
        let plugins = state
            .entries
            .iter()
            .filter(|e| e.origin == Origin::Plugin)
            .count();

        Ok(RegistryStats {
            total_delegates: state.entries.len(),
            builtin_delegates: state.entries.len() - plugins,
            plugin_delegates: plugins,
            disabled_ids: state.disabled.len(),
        })
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, State>, RegistryError> {
        self.state.read().map_err(|_| RegistryError::Poisoned)
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, State>, RegistryError> {
        self.state.write().map_err(|_| RegistryError::Poisoned)
    }
}

/// Statistics about the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryStats {
    pub total_delegates: usize,
    pub builtin_delegates: usize,
    pub plugin_delegates: usize,
    pub disabled_ids: usize,
}

impl DelegateRegistry for ExtensionRegistry {
    fn current_delegates(&self) -> Result<Vec<Arc<dyn CoverageResponseDelegate>>, RegistryError> {
        let mut snapshot: Vec<Arc<dyn CoverageResponseDelegate>> = {
            let state = self.read()?;
            state
                .entries
                .iter()
                .filter(|e| !state.disabled.contains(e.delegate.id()))
                .map(|e| Arc::clone(&e.delegate))
                .collect()
        };

        // Stable sort keeps registration order among equal priorities
        snapshot.sort_by_key(|d| std::cmp::Reverse(d.priority()));
        tracing::trace!(delegates = snapshot.len(), "Registry snapshot");
        Ok(snapshot)
    }
}
