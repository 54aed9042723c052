//! Find Delegate use case.
//!
//! Locates the coverage response delegate for a requested output format and
//! lists every format the currently available delegates can produce.
//!
//! The registry is queried on every call: its content is subject to dynamic
//! extension filters and plugin (un)loading, so nothing is cached here.

use std::collections::BTreeSet;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};
use wcs_domain::{ConstructionError, CoverageResponseDelegate, DelegateSummary};

use crate::ports::delegate_registry::{DelegateRegistry, RegistryError};

/// Errors that can occur while finding a delegate.
#[derive(Error, Debug)]
pub enum FindDelegateError {
    /// A delegate matched the format but could not be instantiated
    #[error("Can't create the encoder {delegate} for output format '{format}'")]
    Construction {
        delegate: String,
        format: String,
        #[source]
        source: ConstructionError,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// No available delegate produces the format (only from `require_encoder`)
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}

impl FindDelegateError {
    /// Check if this error should be blamed on the request rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(self, FindDelegateError::UnsupportedFormat(_))
    }
}

/// Use case for locating output-format delegates.
///
/// Holds nothing but the registry reference, so it is cheap to clone and
/// safe to share between threads.
#[derive(Clone)]
pub struct DelegateFinder {
    registry: Arc<dyn DelegateRegistry>,
}

impl DelegateFinder {
    pub fn new(registry: Arc<dyn DelegateRegistry>) -> Self {
        Self { registry }
    }

    /// Locate a delegate for a specific output format.
    ///
    /// Walks the registry in order and instantiates the first delegate that is
    /// available and can produce `format`. Returns `Ok(None)` when nothing
    /// matches. If the matching delegate fails to construct, the error is
    /// returned as-is; later candidates are not tried.
    pub fn encoder_for(
        &self,
        format: &str,
    ) -> Result<Option<Box<dyn CoverageResponseDelegate>>, FindDelegateError> {
        let delegates = self.registry.current_delegates()?;

        let Some(delegate) = delegates
            .iter()
            .find(|d| d.is_available() && d.can_produce(format))
        else {
            debug!(format, candidates = delegates.len(), "No delegate produces format");
            return Ok(None);
        };

        match delegate.instantiate() {
            Ok(instance) => {
                debug!(format, delegate = delegate.id(), "Resolved output format delegate");
                Ok(Some(instance))
            }
            Err(source) => {
                warn!(
                    format,
                    delegate = delegate.id(),
                    error = %source,
                    "Failed to construct output format delegate"
                );
                Err(FindDelegateError::Construction {
                    delegate: delegate.id().to_string(),
                    format: format.to_string(),
                    source,
                })
            }
        }
    }

    /// Like [`encoder_for`](Self::encoder_for), but an unknown format is an error.
    pub fn require_encoder(
        &self,
        format: &str,
    ) -> Result<Box<dyn CoverageResponseDelegate>, FindDelegateError> {
        self.encoder_for(format)?
            .ok_or_else(|| FindDelegateError::UnsupportedFormat(format.to_string()))
    }

    /// Every output format produced by the available delegates, sorted and deduplicated.
    pub fn output_formats(&self) -> Result<Vec<String>, FindDelegateError> {
        let formats: BTreeSet<String> = self
            .registry
            .current_delegates()?
            .iter()
            .filter(|d| d.is_available())
            .flat_map(|d| d.output_formats())
            .collect();

        Ok(formats.into_iter().collect())
    }

    /// Summaries of all registered delegates, including unavailable ones, in registry order.
    pub fn describe(&self) -> Result<Vec<DelegateSummary>, FindDelegateError> {
        Ok(self
            .registry
            .current_delegates()?
            .iter()
            .map(|d| DelegateSummary::from_delegate(d.as_ref()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::RwLock;

    /// A mock delegate for testing
    #[derive(Debug, Clone)]
    struct MockDelegate {
        id: String,
        available: bool,
        formats: Vec<String>,
        broken: bool,
        constructed: Arc<AtomicUsize>,
    }

    impl MockDelegate {
        fn new(id: &str, available: bool, formats: &[&str]) -> Self {
            Self {
                id: id.to_string(),
                available,
                formats: formats.iter().map(|f| f.to_string()).collect(),
                broken: false,
                constructed: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn broken(mut self) -> Self {
            self.broken = true;
            self
        }
    }

    impl CoverageResponseDelegate for MockDelegate {
        fn id(&self) -> &str {
            &self.id
        }

        fn is_available(&self) -> bool {
            self.available
        }

        fn output_formats(&self) -> Vec<String> {
            self.formats.clone()
        }

        fn instantiate(&self) -> Result<Box<dyn CoverageResponseDelegate>, ConstructionError> {
            if self.broken {
                let cause = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no access");
                return Err(ConstructionError::with_source(
                    format!("Can't create the encoder {}", self.id),
                    cause,
                ));
            }
            self.constructed.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(self.clone()))
        }
    }

    /// A mock registry that counts queries
    #[derive(Default)]
    struct MockRegistry {
        delegates: RwLock<Vec<Arc<dyn CoverageResponseDelegate>>>,
        queries: AtomicUsize,
        offline: bool,
    }

    impl MockRegistry {
        fn with(delegates: Vec<MockDelegate>) -> Self {
            let registry = Self::default();
            for d in delegates {
                registry.push(d);
            }
            registry
        }

        fn push(&self, delegate: MockDelegate) {
            self.delegates.write().unwrap().push(Arc::new(delegate));
        }
    }

    impl DelegateRegistry for MockRegistry {
        fn current_delegates(
            &self,
        ) -> Result<Vec<Arc<dyn CoverageResponseDelegate>>, RegistryError> {
            self.queries.fetch_add(1, Ordering::SeqCst);
            if self.offline {
                return Err(RegistryError::Unavailable("plugin directory offline".into()));
            }
            Ok(self.delegates.read().unwrap().clone())
        }
    }

    fn finder(registry: MockRegistry) -> (DelegateFinder, Arc<MockRegistry>) {
        let registry = Arc::new(registry);
        (DelegateFinder::new(registry.clone()), registry)
    }

    fn abc_registry() -> MockRegistry {
        MockRegistry::with(vec![
            MockDelegate::new("a", true, &["image/png", "image/tiff"]),
            MockDelegate::new("b", true, &["image/jpeg"]),
            MockDelegate::new("c", false, &["image/bmp"]),
        ])
    }

    #[test]
    fn test_resolve_abc_scenario() {
        let (finder, _) = finder(abc_registry());

        let jpeg = finder.encoder_for("image/jpeg").unwrap().unwrap();
        assert_eq!(jpeg.id(), "b");

        assert!(finder.encoder_for("image/bmp").unwrap().is_none());

        assert_eq!(
            finder.output_formats().unwrap(),
            vec!["image/jpeg", "image/png", "image/tiff"]
        );
    }

    #[test]
    fn test_unknown_format_is_not_found() {
        let (finder, _) = finder(abc_registry());

        assert!(finder.encoder_for("application/x-netcdf").unwrap().is_none());
        assert!(finder.encoder_for("").unwrap().is_none());
        assert!(finder.encoder_for("not a / format").unwrap().is_none());
    }

    #[test]
    fn test_empty_registry() {
        let (finder, _) = finder(MockRegistry::default());

        assert!(finder.encoder_for("image/png").unwrap().is_none());
        assert!(finder.output_formats().unwrap().is_empty());
        assert!(finder.describe().unwrap().is_empty());
    }

    #[test]
    fn test_first_match_wins() {
        let (finder, _) = finder(MockRegistry::with(vec![
            MockDelegate::new("d", true, &["image/png"]),
            MockDelegate::new("e", true, &["image/png", "image/gif"]),
        ]));

        for _ in 0..3 {
            assert_eq!(finder.encoder_for("image/png").unwrap().unwrap().id(), "d");
        }
        assert_eq!(finder.encoder_for("image/gif").unwrap().unwrap().id(), "e");
    }

    #[test]
    fn test_unavailable_skipped_even_when_first() {
        let (finder, _) = finder(MockRegistry::with(vec![
            MockDelegate::new("offline", false, &["image/png"]),
            MockDelegate::new("online", true, &["image/png"]),
        ]));

        assert_eq!(finder.encoder_for("image/png").unwrap().unwrap().id(), "online");
    }

    #[test]
    fn test_resolved_instance_has_same_capability() {
        let (finder, _) = finder(abc_registry());

        let png = finder.encoder_for("image/png").unwrap().unwrap();
        assert_eq!(png.output_formats(), vec!["image/png", "image/tiff"]);
        assert!(png.can_produce("image/tiff"));
        assert!(!png.can_produce("image/jpeg"));
    }

    #[test]
    fn test_each_resolution_constructs_fresh_instance() {
        let delegate = MockDelegate::new("a", true, &["image/png"]);
        let counter = delegate.constructed.clone();
        let (finder, _) = finder(MockRegistry::with(vec![delegate]));

        finder.encoder_for("image/png").unwrap().unwrap();
        finder.encoder_for("image/png").unwrap().unwrap();

        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_registry_queried_on_every_call() {
        let (finder, registry) = finder(MockRegistry::default());

        assert!(finder.encoder_for("image/png").unwrap().is_none());

        registry.push(MockDelegate::new("late", true, &["image/png"]));

        assert_eq!(finder.encoder_for("image/png").unwrap().unwrap().id(), "late");
        assert_eq!(finder.output_formats().unwrap(), vec!["image/png"]);
        assert_eq!(registry.queries.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_construction_failure_does_not_fall_through() {
        let fallback = MockDelegate::new("g", true, &["image/png"]);
        let fallback_counter = fallback.constructed.clone();
        let (finder, _) = finder(MockRegistry::with(vec![
            MockDelegate::new("f", true, &["image/png"]).broken(),
            fallback,
        ]));

        let err = finder.encoder_for("image/png").unwrap_err();
        match &err {
            FindDelegateError::Construction {
                delegate, format, ..
            } => {
                assert_eq!(delegate, "f");
                assert_eq!(format, "image/png");
            }
            other => panic!("Expected construction error, got {:?}", other),
        }
        assert!(!err.is_client_error());
        assert!(err.source().is_some());
        assert!(err.to_string().contains("Can't create the encoder f"));
        assert_eq!(fallback_counter.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_broken_delegate_does_not_affect_other_formats() {
        let (finder, _) = finder(MockRegistry::with(vec![
            MockDelegate::new("f", true, &["image/png"]).broken(),
            MockDelegate::new("g", true, &["image/gif"]),
        ]));

        assert_eq!(finder.encoder_for("image/gif").unwrap().unwrap().id(), "g");
        assert_eq!(finder.output_formats().unwrap(), vec!["image/gif", "image/png"]);
    }

    #[test]
    fn test_require_encoder() {
        let (finder, _) = finder(abc_registry());

        assert_eq!(finder.require_encoder("image/tiff").unwrap().id(), "a");

        let err = finder.require_encoder("image/bmp").unwrap_err();
        assert!(err.is_client_error());
        assert_eq!(err.to_string(), "Unsupported output format: image/bmp");
    }

    #[test]
    fn test_registry_failure_passes_through() {
        let (finder, _) = finder(MockRegistry {
            offline: true,
            ..Default::default()
        });

        let err = finder.encoder_for("image/png").unwrap_err();
        assert!(matches!(
            err,
            FindDelegateError::Registry(RegistryError::Unavailable(_))
        ));
        assert_eq!(err.to_string(), "Registry unavailable: plugin directory offline");
        assert!(matches!(
            finder.output_formats(),
            Err(FindDelegateError::Registry(_))
        ));
    }

    #[test]
    fn test_output_formats_sorted_and_deduplicated() {
        let (finder, _) = finder(MockRegistry::with(vec![
            MockDelegate::new("x", true, &["image/tiff", "GeoTIFF", "image/png"]),
            MockDelegate::new("y", true, &["image/png", "ArcGrid", "image/tiff"]),
            MockDelegate::new("z", false, &["AAA"]),
        ]));

        let formats = finder.output_formats().unwrap();
        assert_eq!(formats, vec!["ArcGrid", "GeoTIFF", "image/png", "image/tiff"]);
    }

    #[test]
    fn test_output_formats_empty_when_nothing_available() {
        let (finder, _) = finder(MockRegistry::with(vec![
            MockDelegate::new("c", false, &["image/bmp"]),
            MockDelegate::new("n", false, &["NetCDF"]),
        ]));

        assert!(finder.output_formats().unwrap().is_empty());
    }

    #[test]
    fn test_describe_includes_unavailable_in_order() {
        let (finder, _) = finder(abc_registry());

        let summaries = finder.describe().unwrap();
        let ids: Vec<_> = summaries.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert!(!summaries[2].available);
        assert_eq!(summaries[2].formats, vec!["image/bmp"]);
    }

    #[test]
    fn test_concurrent_resolution_while_registering() {
        let (finder, registry) = finder(MockRegistry::with(vec![MockDelegate::new(
            "a",
            true,
            &["image/png"],
        )]));

        std::thread::scope(|scope| {
            for _ in 0..4 {
                let finder = finder.clone();
                scope.spawn(move || {
                    for _ in 0..200 {
                        let resolved = finder.encoder_for("image/png").unwrap().unwrap();
                        assert_eq!(resolved.id(), "a");
                        let formats = finder.output_formats().unwrap();
                        let mut deduped = formats.clone();
                        deduped.dedup();
                        assert_eq!(formats, deduped);
                    }
                });
            }

            let registry = registry.clone();
            scope.spawn(move || {
                for i in 0..50 {
                    registry.push(MockDelegate::new(&format!("extra-{i}"), true, &["image/png"]));
                }
            });
        });

        assert_eq!(finder.describe().unwrap().len(), 51);
    }
}
