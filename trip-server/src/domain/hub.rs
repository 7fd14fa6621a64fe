//! Transport hub type.

use super::Coordinate;

/// Where a resolved hub came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HubKind {
    /// Canonical terminus for a well-known city, from the static table.
    Predefined,
    /// Found by a nearby railway station search.
    Railway,
    /// Found by a nearby metro station search.
    Metro,
    /// Found by a nearby bus terminal search.
    Bus,
    /// Sentinel: no hub could be found.
    None,
}

/// A transport interchange near a query point.
///
/// Created transiently per request by hub resolution; never persisted.
///
/// # Invariants
///
/// - `distance_km >= 0`
/// - `kind == HubKind::None` only for the "no hub found" sentinel, which
///   carries distance 0 and a diagnostic note instead of a usable location
#[derive(Debug, Clone, PartialEq)]
pub struct Hub {
    pub name: String,
    pub coordinates: Coordinate,
    /// Straight-line distance from the query point in kilometres.
    pub distance_km: f64,
    pub kind: HubKind,
    /// Diagnostic message, set on the sentinel only.
    pub note: Option<String>,
}

impl Hub {
    /// Construct a usable hub.
    pub fn new(
        name: impl Into<String>,
        coordinates: Coordinate,
        distance_km: f64,
        kind: HubKind,
    ) -> Self {
        Hub {
            name: name.into(),
            coordinates,
            distance_km: distance_km.max(0.0),
            kind,
            note: None,
        }
    }

    /// The "no hub found" sentinel.
    ///
    /// Callers must treat this as "skip the dependent leg", never as a
    /// destination to route to.
    pub fn not_found(coordinates: Coordinate, message: impl Into<String>) -> Self {
        Hub {
            name: "No suitable hub found".to_string(),
            coordinates,
            distance_km: 0.0,
            kind: HubKind::None,
            note: Some(message.into()),
        }
    }

    /// False only for the sentinel.
    pub fn is_usable(&self) -> bool {
        self.kind != HubKind::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord() -> Coordinate {
        Coordinate::new(28.6139, 77.2090).unwrap()
    }

    #[test]
    fn usable_hub() {
        let hub = Hub::new("New Delhi Railway Station", coord(), 2.5, HubKind::Railway);
        assert!(hub.is_usable());
        assert_eq!(hub.distance_km, 2.5);
        assert!(hub.note.is_none());
    }

    #[test]
    fn sentinel_hub() {
        let hub = Hub::not_found(coord(), "all searches failed");
        assert!(!hub.is_usable());
        assert_eq!(hub.distance_km, 0.0);
        assert_eq!(hub.kind, HubKind::None);
        assert_eq!(hub.note.as_deref(), Some("all searches failed"));
    }

    #[test]
    fn negative_distance_clamped() {
        let hub = Hub::new("X", coord(), -1.0, HubKind::Bus);
        assert_eq!(hub.distance_km, 0.0);
    }
}
