//! Mock geo provider for testing without network access.
//!
//! Programmable places, routes and POI tables, plus failure injection
//! for exercising the planner's degraded paths. Routes that have not
//! been programmed fail with `NoRoute`, which drives callers onto their
//! haversine fallback exactly as a provider outage would.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::{Coordinate, haversine_km};

use super::error::GeoError;
use super::provider::{GeoProvider, GeocodedPlace, Place, PoiCategory, RouteSummary};

/// Coordinate key with ~1m resolution, so f64 positions can index a map.
type CoordKey = (i64, i64);

fn key(c: Coordinate) -> CoordKey {
    ((c.lat() * 1e5).round() as i64, (c.lng() * 1e5).round() as i64)
}

/// In-memory geo provider.
///
/// Built up with the `with_*` methods before use; immutable afterwards
/// apart from call counters.
#[derive(Debug, Default)]
pub struct MockGeoProvider {
    places: HashMap<String, GeocodedPlace>,
    cities: HashMap<CoordKey, String>,
    routes: HashMap<(CoordKey, CoordKey), RouteSummary>,
    pois: HashMap<PoiCategory, Vec<Place>>,
    fail_nearby: bool,
    geocode_calls: AtomicUsize,
}

impl MockGeoProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Program a geocoding result for an address.
    pub fn with_place(
        mut self,
        address: &str,
        coordinates: Coordinate,
        city: Option<&str>,
    ) -> Self {
        self.places.insert(
            address.trim().to_lowercase(),
            GeocodedPlace {
                coordinates,
                formatted_address: address.to_string(),
                city: city.map(str::to_string),
            },
        );
        if let Some(city) = city {
            self.cities.insert(key(coordinates), city.to_string());
        }
        self
    }

    /// Program a route (stored in both directions).
    pub fn with_route(mut self, from: Coordinate, to: Coordinate, distance_km: f64) -> Self {
        let summary = RouteSummary {
            distance_meters: distance_km * 1000.0,
            duration_seconds: distance_km / 40.0 * 3600.0,
            geometry: Some("mock-polyline".to_string()),
        };
        self.routes.insert((key(from), key(to)), summary.clone());
        self.routes.insert((key(to), key(from)), summary);
        self
    }

    /// Add a POI candidate for a category.
    pub fn with_poi(mut self, category: PoiCategory, name: &str, coordinates: Coordinate) -> Self {
        self.pois.entry(category).or_default().push(Place {
            name: name.to_string(),
            coordinates,
            address: name.to_string(),
        });
        self
    }

    /// Make every nearby search fail.
    pub fn with_failing_nearby(mut self) -> Self {
        self.fail_nearby = true;
        self
    }

    /// How many geocode calls reached the provider (cache tests).
    pub fn geocode_call_count(&self) -> usize {
        self.geocode_calls.load(Ordering::Relaxed)
    }
}

impl GeoProvider for MockGeoProvider {
    async fn geocode(&self, address: &str) -> Result<GeocodedPlace, GeoError> {
        self.geocode_calls.fetch_add(1, Ordering::Relaxed);
        self.places
            .get(&address.trim().to_lowercase())
            .cloned()
            .ok_or_else(|| GeoError::NotFound {
                query: address.to_string(),
            })
    }

    async fn reverse_city(&self, at: Coordinate) -> Option<String> {
        self.cities.get(&key(at)).cloned()
    }

    async fn route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<RouteSummary, GeoError> {
        self.routes
            .get(&(key(origin), key(destination)))
            .cloned()
            .ok_or(GeoError::NoRoute)
    }

    async fn nearby(
        &self,
        at: Coordinate,
        category: PoiCategory,
        radius_meters: u32,
    ) -> Result<Option<Place>, GeoError> {
        if self.fail_nearby {
            return Err(GeoError::ApiError {
                status: 503,
                message: "mock nearby search failure".to_string(),
            });
        }

        Ok(self
            .pois
            .get(&category)
            .and_then(|candidates| {
                candidates
                    .iter()
                    .min_by(|a, b| {
                        haversine_km(at, a.coordinates).total_cmp(&haversine_km(at, b.coordinates))
                    })
                    .filter(|place| haversine_km(at, place.coordinates) * 1000.0 <= f64::from(radius_meters))
            })
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng).unwrap()
    }

    #[tokio::test]
    async fn geocode_programmed_place() {
        let provider =
            MockGeoProvider::new().with_place("Delhi", coord(28.6139, 77.2090), Some("Delhi"));

        let place = provider.geocode("delhi").await.unwrap();
        assert_eq!(place.city.as_deref(), Some("Delhi"));
        assert_eq!(provider.geocode_call_count(), 1);
    }

    #[tokio::test]
    async fn geocode_unknown_address_not_found() {
        let provider = MockGeoProvider::new();
        let result = provider.geocode("Atlantis").await;
        assert!(matches!(result, Err(GeoError::NotFound { .. })));
    }

    #[tokio::test]
    async fn unprogrammed_route_fails() {
        let provider = MockGeoProvider::new();
        let result = provider
            .route(coord(28.0, 77.0), coord(27.0, 78.0))
            .await;
        assert!(matches!(result, Err(GeoError::NoRoute)));
    }

    #[tokio::test]
    async fn route_is_symmetric() {
        let a = coord(28.0, 77.0);
        let b = coord(27.0, 78.0);
        let provider = MockGeoProvider::new().with_route(a, b, 180.0);

        assert_eq!(provider.route(a, b).await.unwrap().distance_meters, 180_000.0);
        assert_eq!(provider.route(b, a).await.unwrap().distance_meters, 180_000.0);
    }

    #[tokio::test]
    async fn nearby_picks_closest_within_radius() {
        let at = coord(28.6139, 77.2090);
        let provider = MockGeoProvider::new()
            .with_poi(PoiCategory::Metro, "Far Metro", coord(28.70, 77.30))
            .with_poi(PoiCategory::Metro, "Near Metro", coord(28.62, 77.21));

        let found = provider
            .nearby(at, PoiCategory::Metro, 5_000)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.name, "Near Metro");
    }

    #[tokio::test]
    async fn nearby_outside_radius_is_none() {
        let at = coord(28.6139, 77.2090);
        let provider =
            MockGeoProvider::new().with_poi(PoiCategory::Bus, "Distant Terminal", coord(29.0, 78.0));

        let found = provider.nearby(at, PoiCategory::Bus, 5_000).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn failing_nearby_errors() {
        let provider = MockGeoProvider::new().with_failing_nearby();
        let result = provider
            .nearby(coord(28.0, 77.0), PoiCategory::Railway, 10_000)
            .await;
        assert!(result.is_err());
    }
}
