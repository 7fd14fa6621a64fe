//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedGeoProvider;
use crate::geo::MapboxClient;
use crate::planner::{HubDirectory, PlannerConfig};

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Geo provider with cached geocoding
    pub geo: Arc<CachedGeoProvider<MapboxClient>>,

    /// Predefined city terminus table
    pub hubs: Arc<HubDirectory>,

    /// Planner policy configuration
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        geo: CachedGeoProvider<MapboxClient>,
        hubs: HubDirectory,
        config: PlannerConfig,
    ) -> Self {
        Self {
            geo: Arc::new(geo),
            hubs: Arc::new(hubs),
            config: Arc::new(config),
        }
    }
}
