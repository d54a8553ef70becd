//! Tiered location resolution
//!
//! A free-text location is resolved by trying an ordered list of resolver
//! strategies in sequence: the primary geocoder service, public Nominatim,
//! and finally a deterministic pseudo-geocoder. The pipeline never fails;
//! every input produces some coordinate, real or synthetic.

pub mod nominatim;
pub mod pseudo;
pub mod service;

pub use nominatim::NominatimResolver;
pub use pseudo::{pseudo_geocode, PseudoResolver};
pub use service::ServiceResolver;

use crate::core::config::GeocoderConfig;
use crate::core::geo::LatLng;
use async_trait::async_trait;
use lru::LruCache;
use once_cell::sync::Lazy;
use std::num::NonZeroUsize;
use std::sync::Mutex;

/// Shared async HTTP client with a custom User-Agent so that public services
/// (e.g. Nominatim) don't reject the request. Building the client once avoids
/// the cost of TLS and connection pool setup for every query.
pub(crate) static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .user_agent("sentinel-map/0.1 (+https://github.com/example/sentinel-map)")
        .build()
        .expect("failed to build reqwest async client")
});

/// A resolved location: coordinates plus an optional display name
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub coords: LatLng,
    pub label: Option<String>,
}

impl ResolvedLocation {
    pub fn new(coords: LatLng) -> Self {
        Self {
            coords,
            label: None,
        }
    }

    pub fn with_label(mut self, label: String) -> Self {
        self.label = Some(label);
        self
    }
}

/// Trait representing one tier of the location fallback chain.
///
/// A miss (network error, timeout, malformed payload, no result) is reported
/// as `None`; resolvers log the cause themselves and never surface errors.
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Short name used in log output
    fn name(&self) -> &'static str;

    /// Attempt to resolve `query` to a coordinate
    async fn resolve(&self, query: &str) -> Option<ResolvedLocation>;

    /// Whether successful results should be memoized by the pipeline
    fn cacheable(&self) -> bool {
        true
    }
}

/// Ordered resolver chain with a small cache of remote resolutions
pub struct GeocodePipeline {
    resolvers: Vec<Box<dyn Resolver>>,
    cache: Mutex<LruCache<String, ResolvedLocation>>,
}

impl GeocodePipeline {
    /// Builds the standard three-tier chain from configuration
    pub fn new(config: &GeocoderConfig) -> Self {
        Self::with_resolvers(
            vec![
                Box::new(ServiceResolver::new(
                    config.service_endpoint.clone(),
                    config.service_timeout,
                )),
                Box::new(NominatimResolver::new(
                    config.nominatim_endpoint.clone(),
                    config.nominatim_min_interval,
                )),
                Box::new(PseudoResolver),
            ],
            config.cache_size,
        )
    }

    /// Builds a pipeline from a custom resolver list
    pub fn with_resolvers(resolvers: Vec<Box<dyn Resolver>>, cache_size: usize) -> Self {
        let capacity = NonZeroUsize::new(cache_size).unwrap_or(NonZeroUsize::new(128).unwrap());
        Self {
            resolvers,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Resolves free-text to a coordinate. Never fails: when every tier
    /// misses (or the input is blank), the pseudo-geocoder supplies a
    /// synthetic but valid-range coordinate.
    pub async fn resolve(&self, text: &str) -> ResolvedLocation {
        let query = text.trim();

        if !query.is_empty() {
            if let Some(hit) = self.cached(query) {
                log::debug!("geocode cache hit for {:?}", query);
                return hit;
            }

            for resolver in &self.resolvers {
                match resolver.resolve(query).await {
                    Some(location) => {
                        log::info!("resolved {:?} via {}", query, resolver.name());
                        if resolver.cacheable() {
                            self.remember(query, &location);
                        }
                        return location;
                    }
                    None => {
                        log::warn!("resolver {} missed for {:?}", resolver.name(), query);
                    }
                }
            }
        }

        // Terminal fallback for blank input or a chain without a pseudo tier
        ResolvedLocation::new(pseudo_geocode(query))
    }

    fn cached(&self, query: &str) -> Option<ResolvedLocation> {
        self.cache.lock().ok()?.get(query).cloned()
    }

    fn remember(&self, query: &str, location: &ResolvedLocation) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.put(query.to_string(), location.clone());
        }
    }
}
