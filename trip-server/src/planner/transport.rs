//! Transport mode selection.
//!
//! The decision table mapping a leg's distance and the user's preference
//! to a transport mode. This is the policy core of the planner; bands are
//! half-open on the lower bound ([lo, hi)) and applied uniformly for
//! every leg in the system.

use crate::domain::{Preference, TransportMode};

/// Pick the transport mode for a single leg.
///
/// | Distance band | time    | cost           | comfort |
/// |---------------|---------|----------------|---------|
/// | < 1 km        | Walk    | Walk           | Walk    |
/// | 1–4 km        | E-Rick. | Cycle / E-Rick.| Auto    |
/// | 4–15 km       | Metro   | E-Rickshaw     | Auto    |
/// | 15–30 km      | Cab     | Metro          | Cab     |
/// | ≥ 30 km       | Train   | Train          | Train   |
///
/// The cost column refines its 1–4 km band: below 3 km a cycle beats an
/// e-rickshaw on fare.
pub fn select_transport(distance_km: f64, preference: Preference) -> TransportMode {
    if distance_km < 1.0 {
        return TransportMode::Walk;
    }
    if distance_km < 4.0 {
        return match preference {
            Preference::Comfort => TransportMode::Auto,
            Preference::Cost if distance_km < 3.0 => TransportMode::Cycle,
            _ => TransportMode::ERickshaw,
        };
    }
    if distance_km < 15.0 {
        return match preference {
            Preference::Cost => TransportMode::ERickshaw,
            Preference::Comfort => TransportMode::Auto,
            Preference::Time => TransportMode::Metro,
        };
    }
    if distance_km < 30.0 {
        return match preference {
            Preference::Cost => TransportMode::Metro,
            _ => TransportMode::Cab,
        };
    }
    TransportMode::Train
}

#[cfg(test)]
mod tests {
    use super::*;
    use TransportMode::*;

    #[test]
    fn sub_kilometre_is_always_a_walk() {
        for p in [Preference::Time, Preference::Cost, Preference::Comfort] {
            assert_eq!(select_transport(0.0, p), Walk);
            assert_eq!(select_transport(0.99, p), Walk);
        }
    }

    #[test]
    fn time_column() {
        assert_eq!(select_transport(2.0, Preference::Time), ERickshaw);
        assert_eq!(select_transport(8.0, Preference::Time), Metro);
        assert_eq!(select_transport(20.0, Preference::Time), Cab);
        assert_eq!(select_transport(35.0, Preference::Time), Train);
    }

    #[test]
    fn cost_column() {
        assert_eq!(select_transport(2.0, Preference::Cost), Cycle);
        assert_eq!(select_transport(3.5, Preference::Cost), ERickshaw);
        assert_eq!(select_transport(8.0, Preference::Cost), ERickshaw);
        assert_eq!(select_transport(20.0, Preference::Cost), Metro);
        assert_eq!(select_transport(35.0, Preference::Cost), Train);
    }

    #[test]
    fn comfort_column() {
        assert_eq!(select_transport(2.0, Preference::Comfort), Auto);
        assert_eq!(select_transport(8.0, Preference::Comfort), Auto);
        assert_eq!(select_transport(20.0, Preference::Comfort), Cab);
        assert_eq!(select_transport(35.0, Preference::Comfort), Train);
    }

    #[test]
    fn band_boundaries_are_half_open() {
        // Exactly 1 km leaves the walk band
        assert_eq!(select_transport(1.0, Preference::Time), ERickshaw);
        // Exactly 4 km enters the 4-15 band
        assert_eq!(select_transport(4.0, Preference::Time), Metro);
        // Exactly 15 km enters the 15-30 band
        assert_eq!(select_transport(15.0, Preference::Time), Cab);
        // Exactly 30 km is a train
        assert_eq!(select_transport(30.0, Preference::Time), Train);
    }

    #[test]
    fn three_km_time_scenario() {
        // India Gate to Connaught Place, ~3 km, optimizing for time.
        assert_eq!(select_transport(3.0, Preference::Time), ERickshaw);
    }
}
