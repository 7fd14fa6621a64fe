//! Geographic coordinate type and great-circle distance.

use std::fmt;

/// Error returned when constructing an out-of-range coordinate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinate: {reason}")]
pub struct InvalidCoordinate {
    reason: &'static str,
}

/// A validated geographic coordinate (WGS84 degrees).
///
/// Latitude is within [-90, 90] and longitude within [-180, 180] by
/// construction, so downstream code never needs to re-check ranges.
///
/// # Examples
///
/// ```
/// use trip_server::domain::Coordinate;
///
/// let delhi = Coordinate::new(28.6139, 77.2090).unwrap();
/// assert_eq!(delhi.lat(), 28.6139);
///
/// // Out-of-range latitude is rejected
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    /// Construct a coordinate, validating the degree ranges.
    pub fn new(lat: f64, lng: f64) -> Result<Self, InvalidCoordinate> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(InvalidCoordinate {
                reason: "latitude and longitude must be finite",
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidCoordinate {
                reason: "latitude must be within [-90, 90]",
            });
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(InvalidCoordinate {
                reason: "longitude must be within [-180, 180]",
            });
        }
        Ok(Coordinate { lat, lng })
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate({}, {})", self.lat, self.lng)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Great-circle distance between two coordinates in kilometres.
///
/// Standard haversine formula with a mean Earth radius of 6371 km.
/// Total for valid coordinates: never fails, never returns a negative.
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    const EARTH_RADIUS_KM: f64 = 6371.0;

    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng).unwrap()
    }

    #[test]
    fn valid_coordinates() {
        assert!(Coordinate::new(0.0, 0.0).is_ok());
        assert!(Coordinate::new(28.6139, 77.2090).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(Coordinate::new(90.0, 180.0).is_ok());
    }

    #[test]
    fn reject_out_of_range() {
        assert!(Coordinate::new(90.1, 0.0).is_err());
        assert!(Coordinate::new(-90.1, 0.0).is_err());
        assert!(Coordinate::new(0.0, 180.1).is_err());
        assert!(Coordinate::new(0.0, -180.1).is_err());
    }

    #[test]
    fn reject_non_finite() {
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn haversine_zero_for_same_point() {
        let p = coord(28.6139, 77.2090);
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn haversine_delhi_to_agra() {
        // Straight-line distance between central Delhi and Agra is ~178 km.
        let delhi = coord(28.6139, 77.2090);
        let agra = coord(27.1767, 78.0081);
        let d = haversine_km(delhi, agra);
        assert!((170.0..190.0).contains(&d), "got {d}");
    }

    #[test]
    fn haversine_short_hop() {
        // India Gate to Connaught Place is roughly 3 km.
        let india_gate = coord(28.6129, 77.2295);
        let connaught_place = coord(28.6315, 77.2167);
        let d = haversine_km(india_gate, connaught_place);
        assert!((2.0..4.0).contains(&d), "got {d}");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: distance is symmetric.
        #[test]
        fn symmetric(
            lat1 in -90.0f64..90.0,
            lng1 in -180.0f64..180.0,
            lat2 in -90.0f64..90.0,
            lng2 in -180.0f64..180.0,
        ) {
            let a = Coordinate::new(lat1, lng1).unwrap();
            let b = Coordinate::new(lat2, lng2).unwrap();
            let ab = haversine_km(a, b);
            let ba = haversine_km(b, a);
            prop_assert!((ab - ba).abs() < 1e-9);
        }

        /// Property: distance is non-negative and bounded by half the
        /// Earth's circumference.
        #[test]
        fn non_negative_and_bounded(
            lat1 in -90.0f64..90.0,
            lng1 in -180.0f64..180.0,
            lat2 in -90.0f64..90.0,
            lng2 in -180.0f64..180.0,
        ) {
            let a = Coordinate::new(lat1, lng1).unwrap();
            let b = Coordinate::new(lat2, lng2).unwrap();
            let d = haversine_km(a, b);
            prop_assert!(d >= 0.0);
            prop_assert!(d <= 6371.0 * std::f64::consts::PI + 1.0);
        }
    }
}
