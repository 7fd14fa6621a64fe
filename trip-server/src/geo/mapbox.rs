//! Mapbox-backed geo provider.
//!
//! Wraps the Mapbox Geocoding v5 and Directions v5 APIs. Handles token
//! authentication, bounded concurrency, and conversion to the provider
//! contract types.

use std::sync::Arc;

use reqwest::Url;
use serde::de::DeserializeOwned;
use tokio::sync::Semaphore;
use tracing::debug;

use crate::domain::{Coordinate, haversine_km};

use super::error::GeoError;
use super::provider::{GeoProvider, GeocodedPlace, Place, PoiCategory, RouteSummary};
use super::types::{DirectionsResponse, GeocodeResponse};

/// Default base URL for the Geocoding v5 API.
const DEFAULT_GEOCODING_URL: &str = "https://api.mapbox.com/geocoding/v5/mapbox.places";

/// Default base URL for the Directions v5 API (driving profile).
const DEFAULT_DIRECTIONS_URL: &str = "https://api.mapbox.com/directions/v5/mapbox/driving";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Configuration for the Mapbox client.
#[derive(Debug, Clone)]
pub struct MapboxConfig {
    /// Access token for authentication
    pub access_token: String,
    /// Base URL for geocoding (overridable for testing)
    pub geocoding_url: String,
    /// Base URL for directions (overridable for testing)
    pub directions_url: String,
    /// ISO country code appended to geocoding queries
    pub country: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl MapboxConfig {
    /// Create a new config with the given access token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            geocoding_url: DEFAULT_GEOCODING_URL.to_string(),
            directions_url: DEFAULT_DIRECTIONS_URL.to_string(),
            country: "IN".to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 10,
        }
    }

    /// Set a custom geocoding base URL (for testing).
    pub fn with_geocoding_url(mut self, url: impl Into<String>) -> Self {
        self.geocoding_url = url.into();
        self
    }

    /// Set a custom directions base URL (for testing).
    pub fn with_directions_url(mut self, url: impl Into<String>) -> Self {
        self.directions_url = url.into();
        self
    }

    /// Set the country filter.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Mapbox API client.
///
/// Uses a semaphore to limit concurrent requests and avoid rate limiting.
#[derive(Debug, Clone)]
pub struct MapboxClient {
    http: reqwest::Client,
    config: MapboxConfig,
    semaphore: Arc<Semaphore>,
}

impl MapboxClient {
    /// Create a new Mapbox client with the given configuration.
    pub fn new(config: MapboxConfig) -> Result<Self, GeoError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        let semaphore = Arc::new(Semaphore::new(config.max_concurrent));

        Ok(Self {
            http,
            config,
            semaphore,
        })
    }

    /// Build a geocoding URL with the search text as a path segment.
    fn geocode_url(&self, query: &str) -> Result<Url, GeoError> {
        let mut url = Url::parse(&self.config.geocoding_url).map_err(|e| GeoError::ApiError {
            status: 0,
            message: format!("invalid geocoding base URL: {e}"),
        })?;
        url.path_segments_mut()
            .map_err(|_| GeoError::ApiError {
                status: 0,
                message: "geocoding base URL cannot have segments appended".to_string(),
            })?
            .push(&format!("{query}.json"));
        url.query_pairs_mut()
            .append_pair("access_token", &self.config.access_token);
        Ok(url)
    }

    /// Build a directions URL with the coordinate pair in the path.
    fn directions_url(&self, origin: Coordinate, destination: Coordinate) -> Result<Url, GeoError> {
        let coords = format!(
            "{},{};{},{}",
            origin.lng(),
            origin.lat(),
            destination.lng(),
            destination.lat()
        );
        let mut url = Url::parse(&self.config.directions_url).map_err(|e| GeoError::ApiError {
            status: 0,
            message: format!("invalid directions base URL: {e}"),
        })?;
        url.path_segments_mut()
            .map_err(|_| GeoError::ApiError {
                status: 0,
                message: "directions base URL cannot have segments appended".to_string(),
            })?
            .push(&coords);
        url.query_pairs_mut()
            .append_pair("access_token", &self.config.access_token)
            .append_pair("overview", "full")
            .append_pair("geometries", "polyline");
        Ok(url)
    }

    /// Send a GET request and decode the JSON body.
    ///
    /// Maps the provider's auth/rate-limit statuses to their dedicated
    /// error variants; captures a body prefix on parse failures.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, GeoError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| GeoError::ApiError {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let response = self.http.get(url).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(GeoError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeoError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeoError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| GeoError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }

    /// Append the country name when the caller didn't include it.
    ///
    /// Matches the behaviour users of the original service relied on:
    /// bare city names like "Agra" resolve inside India rather than to
    /// same-named places elsewhere.
    fn format_address(&self, address: &str) -> String {
        if address.trim_end().ends_with("India") {
            address.to_string()
        } else {
            format!("{address}, India")
        }
    }
}

impl GeoProvider for MapboxClient {
    async fn geocode(&self, address: &str) -> Result<GeocodedPlace, GeoError> {
        let mut url = self.geocode_url(&self.format_address(address))?;
        url.query_pairs_mut()
            .append_pair("country", &self.config.country)
            .append_pair("limit", "1");

        let response: GeocodeResponse = self.get_json(url).await?;

        let feature = response.features.first().ok_or_else(|| GeoError::NotFound {
            query: address.to_string(),
        })?;

        let coordinates = feature.coordinate().map_err(|e| GeoError::Json {
            message: e.to_string(),
            body: None,
        })?;

        Ok(GeocodedPlace {
            coordinates,
            formatted_address: feature.place_name.clone(),
            city: feature.city(),
        })
    }

    async fn reverse_city(&self, at: Coordinate) -> Option<String> {
        let url = match self.geocode_url(&format!("{},{}", at.lng(), at.lat())) {
            Ok(mut url) => {
                url.query_pairs_mut()
                    .append_pair("types", "place")
                    .append_pair("limit", "1");
                url
            }
            Err(e) => {
                debug!(error = %e, "reverse geocode URL construction failed");
                return None;
            }
        };

        match self.get_json::<GeocodeResponse>(url).await {
            Ok(response) => response.features.first().map(|f| f.text.clone()),
            Err(e) => {
                debug!(error = %e, "reverse geocode failed");
                None
            }
        }
    }

    async fn route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<RouteSummary, GeoError> {
        let url = self.directions_url(origin, destination)?;

        let response: DirectionsResponse = self.get_json(url).await?;

        if response.code != "Ok" {
            return Err(GeoError::NoRoute);
        }

        let route = response.routes.first().ok_or(GeoError::NoRoute)?;

        Ok(RouteSummary {
            distance_meters: route.distance,
            duration_seconds: route.duration,
            geometry: route.geometry.clone(),
        })
    }

    async fn nearby(
        &self,
        at: Coordinate,
        category: PoiCategory,
        radius_meters: u32,
    ) -> Result<Option<Place>, GeoError> {
        let mut url = self.geocode_url(category.keyword())?;
        url.query_pairs_mut()
            .append_pair("proximity", &format!("{},{}", at.lng(), at.lat()))
            .append_pair("types", "poi")
            .append_pair("country", &self.config.country)
            .append_pair("limit", "5");

        let response: GeocodeResponse = self.get_json(url).await?;

        // The keyword search has no radius parameter; rank candidates by
        // great-circle distance and enforce the radius ourselves.
        let nearest = response
            .features
            .iter()
            .filter_map(|f| {
                let coords = f.coordinate().ok()?;
                Some((f, coords, haversine_km(at, coords)))
            })
            .min_by(|a, b| a.2.total_cmp(&b.2));

        Ok(nearest
            .filter(|(_, _, km)| km * 1000.0 <= f64::from(radius_meters))
            .map(|(feature, coordinates, _)| Place {
                name: feature.text.clone(),
                coordinates,
                address: feature.place_name.clone(),
            }))
    }
}
