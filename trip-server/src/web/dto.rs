//! Request/response DTOs for the HTTP API.
//!
//! The response shape mirrors what existing clients of the service
//! consume: camelCase totals, `{text, value}` measurement objects, and a
//! currency-prefixed cost string.

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::{Leg, Measurement, Trip};
use crate::planner::PlanError;

/// Request body for POST /trip/plan.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanTripRequest {
    pub source: String,
    pub destination: String,
    /// Optional; defaults to "time". Synonyms ("balanced", "price") are
    /// normalized at this boundary.
    pub preference: Option<String>,
}

/// A `{text, value}` measurement as clients expect it.
#[derive(Debug, Clone, Serialize)]
pub struct MeasurementDto {
    pub text: String,
    pub value: f64,
}

impl From<&Measurement> for MeasurementDto {
    fn from(m: &Measurement) -> Self {
        Self {
            text: m.text().to_string(),
            value: m.value(),
        }
    }
}

/// One leg of the planned trip.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegDto {
    pub from: String,
    pub to: String,
    pub mode: String,
    pub distance: MeasurementDto,
    pub duration: MeasurementDto,
    pub cost: u32,
    pub instructions: String,
    pub map_data: Option<String>,
}

impl From<&Leg> for LegDto {
    fn from(leg: &Leg) -> Self {
        Self {
            from: leg.from.clone(),
            to: leg.to.clone(),
            mode: leg.mode.display_name().to_string(),
            distance: MeasurementDto::from(&leg.distance),
            duration: MeasurementDto::from(&leg.duration),
            cost: leg.cost,
            instructions: leg.instructions.clone(),
            map_data: leg.geometry.clone(),
        }
    }
}

/// Response body for POST /trip/plan.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanTripResponse {
    pub success: bool,
    pub start: String,
    pub end: String,
    pub preference: String,
    pub total_distance: MeasurementDto,
    pub total_duration: MeasurementDto,
    pub total_cost: String,
    pub segments: Vec<LegDto>,
}

impl PlanTripResponse {
    /// Build the response from a planned trip.
    pub fn from_trip(trip: &Trip) -> Self {
        Self {
            success: true,
            start: trip.start().to_string(),
            end: trip.end().to_string(),
            preference: trip.preference().to_string(),
            total_distance: MeasurementDto::from(trip.total_distance()),
            total_duration: MeasurementDto::from(trip.total_duration()),
            total_cost: trip.total_cost_text(),
            segments: trip.legs().iter().map(LegDto::from).collect(),
        }
    }
}

/// Error body returned for failed requests.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::Geocode { .. } => AppError::NotFound {
                message: e.to_string(),
            },
            PlanError::Domain(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        error!(%status, %message, "request failed");

        let body = Json(ErrorResponse {
            success: false,
            error: message,
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Preference, TransportMode};

    fn sample_trip() -> Trip {
        Trip::from_legs(
            "India Gate, Delhi",
            "Connaught Place, Delhi",
            Preference::Time,
            vec![Leg {
                from: "India Gate, Delhi".into(),
                to: "Connaught Place, Delhi".into(),
                mode: TransportMode::ERickshaw,
                distance: Measurement::distance_km(3.0),
                duration: Measurement::duration_mins(12),
                cost: 20,
                instructions: "Take an e-rickshaw from India Gate, Delhi to Connaught Place, Delhi"
                    .into(),
                geometry: Some("abc123".into()),
            }],
        )
        .unwrap()
    }

    #[test]
    fn response_shape_matches_clients() {
        let response = PlanTripResponse::from_trip(&sample_trip());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["start"], "India Gate, Delhi");
        assert_eq!(json["preference"], "time");
        assert_eq!(json["totalDistance"]["value"], 3000.0);
        assert_eq!(json["totalDistance"]["text"], "3.0 km");
        assert_eq!(json["totalDuration"]["text"], "12 mins");
        assert_eq!(json["totalCost"], "₹20");

        let seg = &json["segments"][0];
        assert_eq!(seg["mode"], "E-Rickshaw");
        assert_eq!(seg["cost"], 20);
        assert_eq!(seg["mapData"], "abc123");
    }

    #[test]
    fn request_parses_with_and_without_preference() {
        let req: PlanTripRequest =
            serde_json::from_str(r#"{"source": "A", "destination": "B"}"#).unwrap();
        assert!(req.preference.is_none());

        let req: PlanTripRequest = serde_json::from_str(
            r#"{"source": "A", "destination": "B", "preference": "comfort"}"#,
        )
        .unwrap();
        assert_eq!(req.preference.as_deref(), Some("comfort"));
    }

    #[test]
    fn geocode_errors_map_to_not_found() {
        let err = PlanError::Geocode {
            address: "Atlantis".into(),
            source: crate::geo::GeoError::NotFound {
                query: "Atlantis".into(),
            },
        };
        assert!(matches!(AppError::from(err), AppError::NotFound { .. }));
    }

    #[test]
    fn error_body_shape() {
        let body = ErrorResponse {
            success: false,
            error: "could not locate \"Atlantis\"".into(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], false);
        assert!(json["error"].as_str().unwrap().contains("Atlantis"));
    }
}
