//! Geo provider error types.

use std::fmt;

/// Errors from a geo provider.
#[derive(Debug)]
pub enum GeoError {
    /// HTTP request failed (network error, connection refused, etc.)
    Http(reqwest::Error),

    /// Request exceeded its deadline
    Timeout,

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// Provider returned an error status code
    ApiError { status: u16, message: String },

    /// No geocoding match for the query
    NotFound { query: String },

    /// Provider returned no route between the points
    NoRoute,

    /// Rate limited by the provider
    RateLimited,

    /// Invalid or missing access token
    Unauthorized,
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::Http(e) => write!(f, "HTTP error: {e}"),
            GeoError::Timeout => write!(f, "request timed out"),
            GeoError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            GeoError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            GeoError::NotFound { query } => write!(f, "no match for \"{query}\""),
            GeoError::NoRoute => write!(f, "no route found between the points"),
            GeoError::RateLimited => write!(f, "rate limited by the geo provider"),
            GeoError::Unauthorized => write!(f, "unauthorized (invalid access token)"),
        }
    }
}

impl std::error::Error for GeoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeoError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GeoError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GeoError::Timeout
        } else {
            GeoError::Http(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GeoError::NotFound {
            query: "Atlantis".into(),
        };
        assert_eq!(err.to_string(), "no match for \"Atlantis\"");

        let err = GeoError::ApiError {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = GeoError::Json {
            message: "expected array".into(),
            body: Some("{}".into()),
        };
        assert!(err.to_string().contains("JSON parse error"));
        assert!(err.to_string().contains("expected array"));

        assert_eq!(GeoError::NoRoute.to_string(), "no route found between the points");
    }
}
