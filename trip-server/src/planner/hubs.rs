//! Hub resolution.
//!
//! Finds the transport hub a trip should be routed through: a canonical
//! terminus for well-known cities (fast path, no live search), otherwise
//! the best station found by concurrent nearby searches. Individual
//! search failures degrade to "that hub type unavailable"; only when
//! every avenue fails does resolution return the sentinel hub.

use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::{Coordinate, Hub, HubKind, haversine_km};
use crate::geo::{GeoProvider, PoiCategory};

use super::config::PlannerConfig;

/// Whether a hub is wanted for a local or an intercity trip.
///
/// Drives the selection policy: intercity trips want a railway station
/// whatever else is nearby; local trips prefer the metro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripType {
    Local,
    Intercity,
}

/// Static table of canonical termini for well-known cities.
///
/// Immutable after construction and shared read-only across requests.
/// Lookup is by lowercased city name.
#[derive(Debug, Clone, Default)]
pub struct HubDirectory {
    entries: HashMap<String, (String, Coordinate)>,
}

impl HubDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a city's canonical terminus.
    ///
    /// Entries with out-of-range coordinates are ignored.
    pub fn add(mut self, city: &str, hub_name: &str, lat: f64, lng: f64) -> Self {
        if let Ok(coordinates) = Coordinate::new(lat, lng) {
            self.entries
                .insert(city.to_lowercase(), (hub_name.to_string(), coordinates));
        }
        self
    }

    /// Look up a city's terminus.
    pub fn lookup(&self, city: &str) -> Option<(&str, Coordinate)> {
        self.entries
            .get(&city.to_lowercase())
            .map(|(name, coords)| (name.as_str(), *coords))
    }

    /// Number of cities in the directory.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the directory has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The default directory: major Indian cities and their rail termini.
pub fn india_termini() -> HubDirectory {
    HubDirectory::new()
        .add("Delhi", "New Delhi Railway Station", 28.6139, 77.2090)
        .add("Agra", "Agra Cantt Railway Station", 27.1767, 78.0081)
        .add("Mumbai", "Mumbai Central", 18.9696, 72.8193)
        .add("Chennai", "Chennai Central", 13.0827, 80.2757)
        .add("Kolkata", "Howrah Junction", 22.5833, 88.3426)
        .add("Jaipur", "Jaipur Junction", 26.9196, 75.7880)
        .add("Lucknow", "Lucknow Charbagh", 26.8310, 80.9215)
}

/// Resolves the best transport hub near a point.
pub struct HubResolver<'a, P: GeoProvider> {
    provider: &'a P,
    directory: &'a HubDirectory,
    config: &'a PlannerConfig,
}

impl<'a, P: GeoProvider> HubResolver<'a, P> {
    /// Create a new resolver.
    pub fn new(provider: &'a P, directory: &'a HubDirectory, config: &'a PlannerConfig) -> Self {
        Self {
            provider,
            directory,
            config,
        }
    }

    /// Find the best hub near `at` for the given trip type.
    ///
    /// `known_city` skips the reverse-geocode step when the caller already
    /// extracted a city from geocoding context.
    ///
    /// Never fails: provider errors degrade to missing candidates, and
    /// when nothing at all is found the sentinel hub is returned. Callers
    /// must check [`Hub::is_usable`] before routing to the result.
    pub async fn find_nearest(
        &self,
        at: Coordinate,
        trip_type: TripType,
        known_city: Option<&str>,
    ) -> Hub {
        // Fast path: well-known city, no live search needed.
        let city = match known_city {
            Some(c) => Some(c.to_string()),
            None => self.provider.reverse_city(at).await,
        };
        if let Some(city) = city {
            if let Some((name, coordinates)) = self.directory.lookup(&city) {
                debug!(%city, hub = name, "predefined hub fast path");
                return Hub::new(
                    name,
                    coordinates,
                    haversine_km(at, coordinates),
                    HubKind::Predefined,
                );
            }
        }

        // Concurrent searches with independent failure handling: one
        // category timing out must not delay or sink the others.
        let (railway, metro, bus) = tokio::join!(
            self.search(at, PoiCategory::Railway, self.config.railway_radius_m),
            self.search(at, PoiCategory::Metro, self.config.metro_radius_m),
            self.search(at, PoiCategory::Bus, self.config.bus_radius_m),
        );

        self.select(at, trip_type, railway, metro, bus)
    }

    /// One category search, bounded by the per-query deadline.
    ///
    /// Errors and timeouts degrade to `None`.
    async fn search(&self, at: Coordinate, category: PoiCategory, radius_m: u32) -> Option<Hub> {
        let deadline = Duration::from_secs(self.config.provider_timeout_secs);

        match tokio::time::timeout(deadline, self.provider.nearby(at, category, radius_m)).await {
            Ok(Ok(Some(place))) => {
                let distance_km = haversine_km(at, place.coordinates);
                Some(Hub::new(
                    place.name,
                    place.coordinates,
                    distance_km,
                    match category {
                        PoiCategory::Railway => HubKind::Railway,
                        PoiCategory::Metro => HubKind::Metro,
                        PoiCategory::Bus => HubKind::Bus,
                    },
                ))
            }
            Ok(Ok(None)) => None,
            Ok(Err(e)) => {
                warn!(?category, error = %e, "nearby hub search failed");
                None
            }
            Err(_) => {
                warn!(?category, "nearby hub search timed out");
                None
            }
        }
    }

    /// Apply the selection policy over whatever the searches found.
    fn select(
        &self,
        at: Coordinate,
        trip_type: TripType,
        railway: Option<Hub>,
        metro: Option<Hub>,
        bus: Option<Hub>,
    ) -> Hub {
        match trip_type {
            // A long-distance trip needs rail access; take the railway
            // station over anything nearer.
            TripType::Intercity => match railway {
                Some(hub) => hub,
                None => Self::closest(vec![metro, bus], at),
            },
            // Local trips ride the metro when it's close enough.
            TripType::Local => match metro {
                Some(hub) if hub.distance_km <= self.config.local_metro_max_km => hub,
                metro => Self::closest(vec![railway, metro, bus], at),
            },
        }
    }

    /// Nearest of the found candidates, or the sentinel when none exist.
    fn closest(candidates: Vec<Option<Hub>>, at: Coordinate) -> Hub {
        candidates
            .into_iter()
            .flatten()
            .min_by(|a, b| a.distance_km.total_cmp(&b.distance_km))
            .unwrap_or_else(|| {
                Hub::not_found(at, "no transport hubs found within search radius")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::MockGeoProvider;

    fn coord(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng).unwrap()
    }

    fn config() -> PlannerConfig {
        PlannerConfig::default()
    }

    #[test]
    fn directory_lookup_is_case_insensitive() {
        let directory = india_termini();

        let (name, _) = directory.lookup("delhi").unwrap();
        assert_eq!(name, "New Delhi Railway Station");

        let (name, _) = directory.lookup("AGRA").unwrap();
        assert_eq!(name, "Agra Cantt Railway Station");

        assert!(directory.lookup("Springfield").is_none());
    }

    #[test]
    fn directory_ignores_invalid_coordinates() {
        let directory = HubDirectory::new().add("Broken", "Nowhere Station", 95.0, 200.0);
        assert!(directory.is_empty());
    }

    #[tokio::test]
    async fn known_city_uses_fast_path_without_searching() {
        // Searches would fail loudly; the fast path must never reach them.
        let provider = MockGeoProvider::new().with_failing_nearby();
        let directory = india_termini();
        let cfg = config();
        let resolver = HubResolver::new(&provider, &directory, &cfg);

        let at = coord(28.65, 77.19);
        let hub = resolver
            .find_nearest(at, TripType::Intercity, Some("Delhi"))
            .await;

        assert_eq!(hub.kind, HubKind::Predefined);
        assert_eq!(hub.name, "New Delhi Railway Station");
        assert!(hub.distance_km > 0.0);
    }

    #[tokio::test]
    async fn reverse_geocoded_city_uses_fast_path() {
        let at = coord(28.6139, 77.2090);
        // Registering the place also registers its city for reverse lookup.
        let provider = MockGeoProvider::new()
            .with_place("Delhi", at, Some("Delhi"))
            .with_failing_nearby();
        let directory = india_termini();
        let cfg = config();
        let resolver = HubResolver::new(&provider, &directory, &cfg);

        let hub = resolver.find_nearest(at, TripType::Intercity, None).await;

        assert_eq!(hub.kind, HubKind::Predefined);
    }

    #[tokio::test]
    async fn intercity_prefers_railway_over_nearer_metro() {
        let at = coord(28.6139, 77.2090);
        let provider = MockGeoProvider::new()
            .with_poi(PoiCategory::Railway, "Ghaziabad Junction", coord(28.68, 77.25))
            .with_poi(PoiCategory::Metro, "Rajiv Chowk", coord(28.6328, 77.2197));
        let directory = HubDirectory::new();
        let cfg = config();
        let resolver = HubResolver::new(&provider, &directory, &cfg);

        let hub = resolver.find_nearest(at, TripType::Intercity, None).await;

        assert_eq!(hub.kind, HubKind::Railway);
        assert_eq!(hub.name, "Ghaziabad Junction");
    }

    #[tokio::test]
    async fn local_prefers_nearby_metro() {
        let at = coord(28.6139, 77.2090);
        let provider = MockGeoProvider::new()
            .with_poi(PoiCategory::Railway, "Old Delhi Junction", coord(28.66, 77.23))
            .with_poi(PoiCategory::Metro, "Rajiv Chowk", coord(28.6328, 77.2197));
        let directory = HubDirectory::new();
        let cfg = config();
        let resolver = HubResolver::new(&provider, &directory, &cfg);

        let hub = resolver.find_nearest(at, TripType::Local, None).await;

        assert_eq!(hub.kind, HubKind::Metro);
    }

    #[tokio::test]
    async fn local_falls_back_to_closest_found() {
        let at = coord(28.6139, 77.2090);
        // No metro; bus terminal closer than railway.
        let provider = MockGeoProvider::new()
            .with_poi(PoiCategory::Railway, "Far Junction", coord(28.70, 77.28))
            .with_poi(PoiCategory::Bus, "ISBT", coord(28.62, 77.22));
        let directory = HubDirectory::new();
        let cfg = config();
        let resolver = HubResolver::new(&provider, &directory, &cfg);

        let hub = resolver.find_nearest(at, TripType::Local, None).await;

        assert_eq!(hub.kind, HubKind::Bus);
        assert_eq!(hub.name, "ISBT");
    }

    #[tokio::test]
    async fn all_searches_failing_returns_sentinel() {
        let at = coord(28.6139, 77.2090);
        let provider = MockGeoProvider::new().with_failing_nearby();
        let directory = HubDirectory::new();
        let cfg = config();
        let resolver = HubResolver::new(&provider, &directory, &cfg);

        let hub = resolver.find_nearest(at, TripType::Intercity, None).await;

        assert!(!hub.is_usable());
        assert_eq!(hub.kind, HubKind::None);
        assert_eq!(hub.distance_km, 0.0);
        assert!(hub.note.is_some());
    }

    #[tokio::test]
    async fn nothing_within_radius_returns_sentinel() {
        let at = coord(28.6139, 77.2090);
        // A railway station 100+ km away is outside every search radius.
        let provider =
            MockGeoProvider::new().with_poi(PoiCategory::Railway, "Distant", coord(29.7, 78.2));
        let directory = HubDirectory::new();
        let cfg = config();
        let resolver = HubResolver::new(&provider, &directory, &cfg);

        let hub = resolver.find_nearest(at, TripType::Intercity, None).await;

        assert!(!hub.is_usable());
    }
}
