//! Mapbox wire types.
//!
//! Raw response shapes for the Geocoding v5 and Directions v5 APIs.
//! Only the fields the planner consumes are modelled; everything else in
//! the responses is ignored during deserialization.

use serde::Deserialize;

use crate::domain::{Coordinate, InvalidCoordinate};

/// Geocoding v5 response: a list of candidate features.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub features: Vec<GeocodeFeature>,
}

/// One geocoding candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeFeature {
    /// Short name of the place ("Agra Cantt").
    pub text: String,
    /// Full formatted address.
    pub place_name: String,
    /// Position as [longitude, latitude].
    pub center: [f64; 2],
    #[serde(default)]
    pub context: Vec<ContextEntry>,
}

/// An entry in a feature's place hierarchy.
#[derive(Debug, Clone, Deserialize)]
pub struct ContextEntry {
    pub id: String,
    pub text: String,
}

impl GeocodeFeature {
    /// The feature's position as a validated coordinate.
    ///
    /// Mapbox orders `center` as [lng, lat].
    pub fn coordinate(&self) -> Result<Coordinate, InvalidCoordinate> {
        Coordinate::new(self.center[1], self.center[0])
    }

    /// The city from the place hierarchy, when present.
    pub fn city(&self) -> Option<String> {
        self.context
            .iter()
            .find(|c| c.id.starts_with("place.") || c.id.starts_with("locality."))
            .map(|c| c.text.clone())
    }
}

/// Directions v5 response.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    pub code: String,
    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,
}

/// One route alternative.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsRoute {
    /// Distance in metres.
    pub distance: f64,
    /// Duration in seconds.
    pub duration: f64,
    /// Encoded polyline; opaque to this crate.
    pub geometry: Option<String>,
}
