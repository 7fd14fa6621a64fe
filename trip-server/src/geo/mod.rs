//! Geo provider adapter.
//!
//! This module provides the contract the planner needs from a mapping
//! service (geocoding, routing, nearby search) and a Mapbox-backed
//! implementation of it. The backing service is a configuration detail:
//! the planner consumes the [`GeoProvider`] trait generically, so swapping
//! providers never forks the core logic.

mod error;
mod mapbox;
mod mock;
mod provider;
mod types;

pub use error::GeoError;
pub use mapbox::{MapboxClient, MapboxConfig};
pub use mock::MockGeoProvider;
pub use provider::{GeoProvider, GeocodedPlace, Place, PoiCategory, RouteSummary};
pub use types::{ContextEntry, DirectionsResponse, DirectionsRoute, GeocodeFeature, GeocodeResponse};
