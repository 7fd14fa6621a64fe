//! Transport modes and their policy constants.
//!
//! Each mode carries two static constants used throughout the planner:
//! an average speed and a fare model (flat base plus per-km rate).
//! These are policy data, not computed values; changing a fare means
//! changing a number here and nowhere else.

use std::fmt;

/// A mode of transport for one leg of a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportMode {
    Walk,
    Cycle,
    ERickshaw,
    Auto,
    Metro,
    Bus,
    Cab,
    Train,
}

impl TransportMode {
    /// All modes, ordered by average speed.
    pub const ALL: [TransportMode; 8] = [
        TransportMode::Walk,
        TransportMode::Cycle,
        TransportMode::ERickshaw,
        TransportMode::Auto,
        TransportMode::Bus,
        TransportMode::Metro,
        TransportMode::Cab,
        TransportMode::Train,
    ];

    /// Average speed in km/h, used for duration estimates.
    pub fn speed_kmh(self) -> f64 {
        match self {
            TransportMode::Walk => 5.0,
            TransportMode::Cycle => 10.0,
            TransportMode::ERickshaw => 15.0,
            TransportMode::Auto => 25.0,
            TransportMode::Bus => 30.0,
            TransportMode::Metro => 35.0,
            TransportMode::Cab => 40.0,
            TransportMode::Train => 80.0,
        }
    }

    /// Flat fare component in rupees.
    pub fn base_fare(self) -> f64 {
        match self {
            TransportMode::Walk | TransportMode::Cycle => 0.0,
            TransportMode::ERickshaw => 20.0,
            TransportMode::Bus => 15.0,
            TransportMode::Metro => 40.0,
            TransportMode::Auto => 50.0,
            TransportMode::Cab | TransportMode::Train => 200.0,
        }
    }

    /// Per-kilometre fare component in rupees.
    pub fn per_km_rate(self) -> f64 {
        match self {
            TransportMode::Train => 0.5,
            _ => 0.0,
        }
    }

    /// True for modes that never cost anything.
    pub fn is_free(self) -> bool {
        matches!(self, TransportMode::Walk | TransportMode::Cycle)
    }

    /// Name shown to the user.
    pub fn display_name(self) -> &'static str {
        match self {
            TransportMode::Walk => "Walk",
            TransportMode::Cycle => "Cycle",
            TransportMode::ERickshaw => "E-Rickshaw",
            TransportMode::Auto => "Auto",
            TransportMode::Metro => "Metro",
            TransportMode::Bus => "Bus",
            TransportMode::Cab => "Cab",
            TransportMode::Train => "Train",
        }
    }

    /// Name with an article, for instruction sentences ("take an auto").
    pub fn with_article(self) -> &'static str {
        match self {
            TransportMode::Walk => "a walk",
            TransportMode::Cycle => "a cycle",
            TransportMode::ERickshaw => "an e-rickshaw",
            TransportMode::Auto => "an auto",
            TransportMode::Metro => "the metro",
            TransportMode::Bus => "a bus",
            TransportMode::Cab => "a cab",
            TransportMode::Train => "the train",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
