//! Cost and duration estimation.
//!
//! Pure functions over the per-mode policy constants. Neither consults a
//! provider; routed durations from the mapping service reflect driving
//! profiles, not metro or rail timetables, so legs are estimated from
//! mode average speeds instead.

use crate::domain::{Measurement, TransportMode};

/// Estimated fare for a leg, in whole rupees.
///
/// Flat base plus per-km rate, rounded. Walk and Cycle are always free.
pub fn estimate_cost(distance_km: f64, mode: TransportMode) -> u32 {
    let fare = mode.base_fare() + mode.per_km_rate() * distance_km;
    fare.round().max(0.0) as u32
}

/// Estimated travel time for a leg.
///
/// Minutes are rounded from distance over average speed and floored at
/// 1 minute, so sub-kilometre legs never render as "0 mins".
pub fn estimate_duration(distance_km: f64, mode: TransportMode) -> Measurement {
    let minutes = (distance_km / mode.speed_kmh() * 60.0).round().max(1.0) as u64;
    Measurement::duration_mins(minutes)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: free modes cost zero at any distance.
        #[test]
        fn free_modes_cost_nothing(d in 0.0f64..10_000.0) {
            prop_assert_eq!(estimate_cost(d, TransportMode::Walk), 0);
            prop_assert_eq!(estimate_cost(d, TransportMode::Cycle), 0);
        }

        /// Property: durations are at least one minute and text agrees
        /// with value.
        #[test]
        fn duration_floor_and_consistency(d in 0.0f64..10_000.0) {
            for mode in TransportMode::ALL {
                let m = estimate_duration(d, mode);
                prop_assert!(m.value() >= 60.0);
                // value is whole minutes in seconds
                prop_assert_eq!(m.value() % 60.0, 0.0);
            }
        }
    }
}
