//! Trip and leg types.
//!
//! A `Trip` is an ordered sequence of legs plus totals. Totals are
//! computed once at construction by summing the legs' numeric values, so
//! the aggregate invariant (total == sum of parts) holds by construction
//! and cannot drift from a separate computation.

use tracing::warn;

use super::measure;
use super::{DomainError, Measurement, Preference, TransportMode};

/// One contiguous mode-of-transport portion of a trip.
///
/// Immutable once constructed. Order within a trip is chronological
/// travel order.
#[derive(Debug, Clone)]
pub struct Leg {
    /// Display name of where this leg starts.
    pub from: String,
    /// Display name of where this leg ends.
    pub to: String,
    pub mode: TransportMode,
    pub distance: Measurement,
    pub duration: Measurement,
    /// Fare in whole rupees.
    pub cost: u32,
    /// Human-readable instruction ("Take the metro from X to Y").
    pub instructions: String,
    /// Opaque route geometry from the provider, passed through untouched.
    pub geometry: Option<String>,
}

/// A complete trip from source to destination.
///
/// # Invariants
///
/// - At least one leg
/// - `total_distance().value()` equals the sum of leg distance values
///   (likewise duration and cost)
#[derive(Debug, Clone)]
pub struct Trip {
    start: String,
    end: String,
    preference: Preference,
    legs: Vec<Leg>,
    total_distance: Measurement,
    total_duration: Measurement,
    total_cost: u32,
}

impl Trip {
    /// Construct a trip from ordered legs, computing totals.
    ///
    /// A leg whose distance value is broken (non-finite or negative)
    /// contributes the number parsed from its display text instead; this
    /// degraded path is logged, not hidden.
    ///
    /// # Errors
    ///
    /// Returns `Err(DomainError::EmptyTrip)` if `legs` is empty.
    pub fn from_legs(
        start: impl Into<String>,
        end: impl Into<String>,
        preference: Preference,
        legs: Vec<Leg>,
    ) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyTrip);
        }

        let mut meters = 0.0;
        for leg in &legs {
            let value = leg.distance.value();
            if value.is_finite() && value >= 0.0 {
                meters += value;
            } else {
                let fallback = measure::leading_number(leg.distance.text())
                    .map(|km| km * 1000.0)
                    .unwrap_or(0.0);
                warn!(
                    from = %leg.from,
                    to = %leg.to,
                    "leg distance value unusable; falling back to display text"
                );
                meters += fallback;
            }
        }

        let seconds: f64 = legs.iter().map(|l| l.duration.value()).sum();
        let total_cost: u32 = legs.iter().map(|l| l.cost).sum();

        Ok(Trip {
            start: start.into(),
            end: end.into(),
            preference,
            legs,
            total_distance: Measurement::from_meters(meters),
            total_duration: Measurement::from_seconds(seconds),
            total_cost,
        })
    }

    /// Display name of the trip's starting point.
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Display name of the trip's destination.
    pub fn end(&self) -> &str {
        &self.end
    }

    /// The preference the trip was planned under.
    pub fn preference(&self) -> Preference {
        self.preference
    }

    /// All legs in travel order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    pub fn total_distance(&self) -> &Measurement {
        &self.total_distance
    }

    pub fn total_duration(&self) -> &Measurement {
        &self.total_duration
    }

    /// Total fare in whole rupees.
    pub fn total_cost(&self) -> u32 {
        self.total_cost
    }

    /// Total fare with the currency prefix, as shown to the user.
    pub fn total_cost_text(&self) -> String {
        format!("₹{}", self.total_cost)
    }
}
