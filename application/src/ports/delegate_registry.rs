//! Delegate Registry port
//!
//! Defines the interface the finder uses to read the live set of
//! registered coverage response delegates.

use std::sync::Arc;

use thiserror::Error;
use wcs_domain::CoverageResponseDelegate;

/// Error type for registry queries
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The registry backend cannot be queried right now
    #[error("Registry unavailable: {0}")]
    Unavailable(String),

    /// A writer panicked while holding the registry lock
    #[error("Registry lock poisoned")]
    Poisoned,
}

/// Port for reading registered delegates
///
/// Implementations live in the infrastructure layer. The member set may
/// change at any time (plugins loaded, unloaded or filtered), so callers
/// must query on every use and never cache the result.
pub trait DelegateRegistry: Send + Sync {
    /// Snapshot of the currently registered delegates
    ///
    /// The returned order is authoritative: it is the tie-break order when
    /// several delegates can produce the same format. The snapshot stays
    /// valid even if the registry is modified while the caller iterates.
    fn current_delegates(&self) -> Result<Vec<Arc<dyn CoverageResponseDelegate>>, RegistryError>;
}
