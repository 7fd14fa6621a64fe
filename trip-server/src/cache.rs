//! Caching layer for geocoding responses.
//!
//! Geocoding is the hottest provider call (every plan makes two) and the
//! same addresses repeat across requests, so responses are cached by
//! normalized address. Routes and nearby searches are pair-keyed and
//! rarely repeat within a TTL window; they go straight through.

use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::Coordinate;
use crate::geo::{GeoError, GeoProvider, GeocodedPlace, Place, PoiCategory, RouteSummary};

/// Configuration for the geocode cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(15 * 60),
            max_capacity: 1000,
        }
    }
}

/// A geo provider with cached geocoding.
///
/// Wraps any [`GeoProvider`] and implements the same trait, so callers
/// are oblivious to the cache.
pub struct CachedGeoProvider<P> {
    inner: P,
    geocodes: MokaCache<String, GeocodedPlace>,
}

impl<P: GeoProvider> CachedGeoProvider<P> {
    /// Create a new cached provider.
    pub fn new(inner: P, config: &CacheConfig) -> Self {
        let geocodes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { inner, geocodes }
    }

    /// Cache key: trimmed, lowercased address.
    fn normalize(address: &str) -> String {
        address.trim().to_lowercase()
    }

    /// Number of cached geocodes (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.geocodes.entry_count()
    }

    /// Drop all cached entries.
    pub fn invalidate_all(&self) {
        self.geocodes.invalidate_all();
    }
}

impl<P: GeoProvider> GeoProvider for CachedGeoProvider<P> {
    async fn geocode(&self, address: &str) -> Result<GeocodedPlace, GeoError> {
        let cache_key = Self::normalize(address);

        if let Some(hit) = self.geocodes.get(&cache_key).await {
            return Ok(hit);
        }

        let place = self.inner.geocode(address).await?;
        self.geocodes.insert(cache_key, place.clone()).await;
        Ok(place)
    }

    async fn reverse_city(&self, at: Coordinate) -> Option<String> {
        self.inner.reverse_city(at).await
    }

    async fn route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<RouteSummary, GeoError> {
        self.inner.route(origin, destination).await
    }

    async fn nearby(
        &self,
        at: Coordinate,
        category: PoiCategory,
        radius_meters: u32,
    ) -> Result<Option<Place>, GeoError> {
        self.inner.nearby(at, category, radius_meters).await
    }
}
