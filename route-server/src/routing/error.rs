//! Routing client error types.

use super::convert::ConversionError;

/// Errors from the OpenRouteService HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON deserialization failed
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Rate limited by the API
    #[error("rate limited by the directions API")]
    RateLimited,

    /// Invalid API key or unauthorized
    #[error("unauthorized (check ORS_API_KEY)")]
    Unauthorized,

    /// Response parsed but held no usable route
    #[error("unusable directions response: {0}")]
    Convert(#[from] ConversionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RoutingError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = RoutingError::Unauthorized;
        assert_eq!(err.to_string(), "unauthorized (check ORS_API_KEY)");

        let err = RoutingError::from(ConversionError::NoRoute);
        assert_eq!(
            err.to_string(),
            "unusable directions response: directions response contained no route"
        );
    }
}
