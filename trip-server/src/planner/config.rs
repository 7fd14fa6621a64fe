//! Planner configuration.

/// Policy thresholds for trip segmentation and hub resolution.
///
/// Every distance-shaped decision in the planner reads from here, so the
/// policy lives in exactly one place.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Direct distance (km) at or below which a trip is a single short leg.
    pub short_max_km: f64,

    /// Direct distance (km) above which a trip is segmented as intercity.
    pub intercity_min_km: f64,

    /// Hub access legs at or below this distance (km) are omitted;
    /// the traveller is effectively already at the hub.
    pub hub_leg_min_km: f64,

    /// Hub-to-hub distance (km) below which the middle leg is downgraded
    /// from Train to a road mode.
    pub hub_train_min_km: f64,

    /// Local trips prefer a metro hub found within this distance (km).
    pub local_metro_max_km: f64,

    /// Search radius for nearby railway stations (metres).
    pub railway_radius_m: u32,

    /// Search radius for nearby metro stations (metres).
    pub metro_radius_m: u32,

    /// Search radius for nearby bus terminals (metres).
    pub bus_radius_m: u32,

    /// Deadline for each individual provider sub-query (seconds).
    pub provider_timeout_secs: u64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            short_max_km: 5.0,
            intercity_min_km: 50.0,
            hub_leg_min_km: 0.5,
            hub_train_min_km: 50.0,
            local_metro_max_km: 5.0,
            railway_radius_m: 12_000,
            metro_radius_m: 5_000,
            bus_radius_m: 8_000,
            provider_timeout_secs: 10,
        }
    }
}
