//! Geo provider contract.

use std::future::Future;

use crate::domain::Coordinate;

use super::error::GeoError;

/// Category of transport POI for nearby search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoiCategory {
    Railway,
    Metro,
    Bus,
}

impl PoiCategory {
    /// Search keyword sent to the provider.
    pub fn keyword(self) -> &'static str {
        match self {
            PoiCategory::Railway => "railway station",
            PoiCategory::Metro => "metro station",
            PoiCategory::Bus => "bus terminal",
        }
    }
}

/// A geocoded address.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedPlace {
    pub coordinates: Coordinate,
    pub formatted_address: String,
    /// City extracted from the geocoder's place context, when available.
    pub city: Option<String>,
}

/// A direct route between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSummary {
    pub distance_meters: f64,
    pub duration_seconds: f64,
    /// Opaque encoded geometry. Stored on legs, never interpreted.
    pub geometry: Option<String>,
}

/// A point of interest returned by nearby search.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub name: String,
    pub coordinates: Coordinate,
    pub address: String,
}

/// The contract the planner needs from a mapping service.
///
/// Consumed generically (`TripPlanner<P: GeoProvider>`) so the backing
/// service is swappable: Mapbox in production, an in-memory mock in tests.
/// Every method is an I/O boundary; callers bound each call with a timeout
/// and treat individual failures as degraded data, not fatal errors,
/// except where documented otherwise.
pub trait GeoProvider: Send + Sync {
    /// Resolve a free-text address to coordinates.
    ///
    /// Fails with [`GeoError::NotFound`] when the provider has no match;
    /// this is the one provider failure that aborts a whole plan.
    fn geocode(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<GeocodedPlace, GeoError>> + Send;

    /// Best-effort lookup of the city containing a point.
    ///
    /// Returns `None` on any failure; callers must not treat absence as
    /// an error.
    fn reverse_city(&self, at: Coordinate) -> impl Future<Output = Option<String>> + Send;

    /// Direct route between two points.
    ///
    /// Fails with [`GeoError::NoRoute`] when the provider returns none.
    fn route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> impl Future<Output = Result<RouteSummary, GeoError>> + Send;

    /// Nearest POI of a category within a radius.
    ///
    /// `Ok(None)` means "nothing found within the radius" and is not an
    /// error.
    fn nearby(
        &self,
        at: Coordinate,
        category: PoiCategory,
        radius_meters: u32,
    ) -> impl Future<Output = Result<Option<Place>, GeoError>> + Send;
}
