//! Trip segmentation.
//!
//! The core planning algorithm: geocode both ends, classify the trip by
//! direct distance, route long journeys through hubs, and annotate every
//! leg with mode, distance, duration, cost and instructions.
//!
//! Failure policy: geocoding either address is the only fatal error.
//! Everything downstream degrades. A failed route lookup falls back to
//! great-circle distance for that leg only; failed hub resolution
//! collapses the trip to a single direct leg. A plan never comes back
//! with zero legs.

use futures::future::join_all;
use tracing::{debug, warn};

use crate::domain::{
    Coordinate, DomainError, Leg, Measurement, Preference, TransportMode, Trip, haversine_km,
};
use crate::geo::{GeoError, GeoProvider, GeocodedPlace, RouteSummary};

use super::config::PlannerConfig;
use super::estimate::{estimate_cost, estimate_duration};
use super::hubs::{HubDirectory, HubResolver, TripType};
use super::transport::select_transport;

/// Error from trip planning.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// An address could not be geocoded. Fatal to the whole request;
    /// carries which address failed so the user is told what to fix.
    #[error("could not locate \"{address}\": {source}")]
    Geocode {
        address: String,
        #[source]
        source: GeoError,
    },

    /// Domain invariant violation while assembling the trip.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Request for a trip plan.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub source: String,
    pub destination: String,
    pub preference: Preference,
}

impl PlanRequest {
    /// Create a new plan request.
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<String>,
        preference: Preference,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            preference,
        }
    }
}

/// How a trip gets segmented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TripClass {
    /// Single direct leg, short-hop modes.
    Short,
    /// Single direct leg, full mode table.
    Local,
    /// Routed through hubs: access leg, hub-to-hub leg, access leg.
    Intercity,
}

/// How a pending leg's mode gets decided once its distance is known.
#[derive(Debug, Clone, Copy)]
enum ModeRule {
    /// The preference-adjusted distance table.
    ByTable,
    /// Train for rail-worthy distances, otherwise a road coach or cab.
    HubToHub,
}

/// A leg awaiting its route lookup.
struct PendingLeg {
    from: String,
    to: String,
    origin: Coordinate,
    dest: Coordinate,
    rule: ModeRule,
}

/// The trip segmentation engine.
pub struct TripPlanner<'a, P: GeoProvider> {
    provider: &'a P,
    directory: &'a HubDirectory,
    config: &'a PlannerConfig,
}

impl<'a, P: GeoProvider> TripPlanner<'a, P> {
    /// Create a new planner.
    pub fn new(provider: &'a P, directory: &'a HubDirectory, config: &'a PlannerConfig) -> Self {
        Self {
            provider,
            directory,
            config,
        }
    }

    /// Plan a trip from source to destination.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Geocode`] when either address cannot be
    /// resolved. Provider failures after geocoding degrade the plan
    /// instead of failing it.
    pub async fn plan(&self, request: &PlanRequest) -> Result<Trip, PlanError> {
        // Geocode both ends concurrently; no data dependency between them.
        let (source, destination) = tokio::join!(
            self.provider.geocode(&request.source),
            self.provider.geocode(&request.destination),
        );
        let source = source.map_err(|e| PlanError::Geocode {
            address: request.source.clone(),
            source: e,
        })?;
        let destination = destination.map_err(|e| PlanError::Geocode {
            address: request.destination.clone(),
            source: e,
        })?;

        let (direct_km, direct_route) = self
            .route_or_haversine(source.coordinates, destination.coordinates)
            .await;

        let class = self.classify(direct_km, &source, &destination);
        debug!(?class, direct_km, "classified trip");

        let mut legs = match class {
            TripClass::Short | TripClass::Local => {
                let mode = select_transport(direct_km, request.preference);
                vec![self.build_leg(
                    &request.source,
                    &request.destination,
                    mode,
                    direct_km,
                    direct_route.clone(),
                )]
            }
            TripClass::Intercity => self.intercity_legs(request, &source, &destination).await,
        };

        // A trip must never come back with zero legs. If hub resolution
        // failed wholesale, cover the whole trip with one direct leg.
        if legs.is_empty() {
            warn!(
                source = %request.source,
                destination = %request.destination,
                "segmentation produced no legs; synthesizing a direct leg"
            );
            let mode = select_transport(direct_km, request.preference);
            legs.push(self.build_leg(
                &request.source,
                &request.destination,
                mode,
                direct_km,
                direct_route,
            ));
        }

        Ok(Trip::from_legs(
            request.source.clone(),
            request.destination.clone(),
            request.preference,
            legs,
        )?)
    }

    /// Decide the segmentation strategy.
    fn classify(
        &self,
        direct_km: f64,
        source: &GeocodedPlace,
        destination: &GeocodedPlace,
    ) -> TripClass {
        if direct_km <= self.config.short_max_km {
            return TripClass::Short;
        }
        if direct_km > self.config.intercity_min_km {
            return TripClass::Intercity;
        }
        // City extraction is best-effort; only trust a mismatch when both
        // ends carry one.
        if let (Some(a), Some(b)) = (&source.city, &destination.city) {
            if !a.eq_ignore_ascii_case(b) {
                return TripClass::Intercity;
            }
        }
        TripClass::Local
    }

    /// Build the hub-routed legs for an intercity trip.
    ///
    /// Returns an empty list when no usable hub exists on either end;
    /// the caller falls back to a direct leg.
    async fn intercity_legs(
        &self,
        request: &PlanRequest,
        source: &GeocodedPlace,
        destination: &GeocodedPlace,
    ) -> Vec<Leg> {
        let resolver = HubResolver::new(self.provider, self.directory, self.config);

        let (source_hub, dest_hub) = tokio::join!(
            resolver.find_nearest(
                source.coordinates,
                TripType::Intercity,
                source.city.as_deref()
            ),
            resolver.find_nearest(
                destination.coordinates,
                TripType::Intercity,
                destination.city.as_deref()
            ),
        );

        if !source_hub.is_usable() || !dest_hub.is_usable() {
            warn!("no usable hub on one or both ends; trip will use a direct leg");
            return Vec::new();
        }

        let mut pending = Vec::with_capacity(3);

        // Access legs within walking distance of the hub are dropped;
        // the traveller is effectively already there.
        if source_hub.distance_km > self.config.hub_leg_min_km {
            pending.push(PendingLeg {
                from: request.source.clone(),
                to: source_hub.name.clone(),
                origin: source.coordinates,
                dest: source_hub.coordinates,
                rule: ModeRule::ByTable,
            });
        } else {
            debug!(hub = %source_hub.name, "source is at its hub; omitting access leg");
        }

        pending.push(PendingLeg {
            from: source_hub.name.clone(),
            to: dest_hub.name.clone(),
            origin: source_hub.coordinates,
            dest: dest_hub.coordinates,
            rule: ModeRule::HubToHub,
        });

        if dest_hub.distance_km > self.config.hub_leg_min_km {
            pending.push(PendingLeg {
                from: dest_hub.name.clone(),
                to: request.destination.clone(),
                origin: dest_hub.coordinates,
                dest: destination.coordinates,
                rule: ModeRule::ByTable,
            });
        } else {
            debug!(hub = %dest_hub.name, "destination is at its hub; omitting access leg");
        }

        // Route lookups are independent across legs: fetch them
        // concurrently, keep travel order from the pending list.
        let routes = join_all(
            pending
                .iter()
                .map(|leg| self.route_or_haversine(leg.origin, leg.dest)),
        )
        .await;

        pending
            .into_iter()
            .zip(routes)
            .map(|(leg, (km, route))| {
                let mode = match leg.rule {
                    ModeRule::ByTable => select_transport(km, request.preference),
                    ModeRule::HubToHub => self.hub_to_hub_mode(km, request.preference),
                };
                self.build_leg(&leg.from, &leg.to, mode, km, route)
            })
            .collect()
    }

    /// Mode for the hub-to-hub leg.
    fn hub_to_hub_mode(&self, distance_km: f64, preference: Preference) -> TransportMode {
        if distance_km >= self.config.hub_train_min_km {
            TransportMode::Train
        } else if preference == Preference::Cost {
            TransportMode::Bus
        } else {
            TransportMode::Cab
        }
    }

    /// Routed distance between two points, or great-circle distance when
    /// the provider has no route. Degrades this lookup only; never fails.
    async fn route_or_haversine(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> (f64, Option<RouteSummary>) {
        match self.provider.route(origin, destination).await {
            Ok(summary) => (summary.distance_meters / 1000.0, Some(summary)),
            Err(e) => {
                warn!(error = %e, "route lookup failed; using great-circle distance");
                (haversine_km(origin, destination), None)
            }
        }
    }

    /// Assemble one leg from its resolved distance and optional route.
    fn build_leg(
        &self,
        from: &str,
        to: &str,
        mode: TransportMode,
        distance_km: f64,
        route: Option<RouteSummary>,
    ) -> Leg {
        let distance = match &route {
            Some(summary) => Measurement::from_meters(summary.distance_meters),
            None => Measurement::distance_km(distance_km),
        };

        Leg {
            from: from.to_string(),
            to: to.to_string(),
            mode,
            distance,
            duration: estimate_duration(distance_km, mode),
            cost: estimate_cost(distance_km, mode),
            instructions: instructions_for(mode, from, to),
            geometry: route.and_then(|r| r.geometry),
        }
    }
}

/// Instruction sentence for a leg.
fn instructions_for(mode: TransportMode, from: &str, to: &str) -> String {
    match mode {
        TransportMode::Walk => format!("Walk from {from} to {to}"),
        TransportMode::Train => format!("Board the train from {from} to {to}"),
        mode => format!("Take {} from {from} to {to}", mode.with_article()),
    }
}
