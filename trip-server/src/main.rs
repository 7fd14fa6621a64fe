use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use trip_server::cache::{CacheConfig, CachedGeoProvider};
use trip_server::geo::{MapboxClient, MapboxConfig};
use trip_server::planner::{PlannerConfig, india_termini};
use trip_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Get credentials from environment
    let access_token = std::env::var("MAPBOX_ACCESS_TOKEN").unwrap_or_else(|_| {
        eprintln!("Warning: MAPBOX_ACCESS_TOKEN not set. Provider calls will fail.");
        String::new()
    });

    // Create the Mapbox-backed provider with cached geocoding
    let geo_config = MapboxConfig::new(&access_token);
    let client = MapboxClient::new(geo_config).expect("Failed to create Mapbox client");
    let geo = CachedGeoProvider::new(client, &CacheConfig::default());

    // Predefined city termini and planner policy
    let hubs = india_termini();
    let config = PlannerConfig::default();

    // Build app state
    let state = AppState::new(geo, hubs, config);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Trip Planner listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health     - Health check");
    println!("  POST /trip/plan  - Plan a trip");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
