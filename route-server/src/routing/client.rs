//! OpenRouteService HTTP client.
//!
//! Provides an async method for fetching a driving route between two
//! points. Handles authentication, concurrency limiting and conversion
//! to domain types.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::json;
use tokio::sync::Semaphore;

use crate::domain::Coordinate;

use super::convert::{DrivenRoute, convert_directions};
use super::error::RoutingError;
use super::types::DirectionsResponse;

/// Default base URL for the driving-car directions endpoint.
const DEFAULT_BASE_URL: &str = "https://api.openrouteservice.org/v2/directions/driving-car";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Configuration for the routing client.
#[derive(Debug, Clone)]
pub struct OrsConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the API (defaults to production OpenRouteService)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl OrsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 15,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
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

/// OpenRouteService directions client.
///
/// Uses a semaphore to limit concurrent requests and stay inside the
/// free-tier rate limits.
#[derive(Debug, Clone)]
pub struct OrsClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl OrsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: OrsConfig) -> Result<Self, RoutingError> {
        let mut headers = HeaderMap::new();

        // ORS takes the raw API key in the Authorization header
        let api_key = HeaderValue::from_str(&config.api_key).map_err(|_| RoutingError::Api {
            status: 0,
            message: "Invalid API key format".to_string(),
        })?;
        headers.insert("Authorization", api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Fetch a driving route from `start` to `end`.
    ///
    /// Returns the recommended route's geometry and its total distance
    /// in miles.
    pub async fn directions(
        &self,
        start: &Coordinate,
        end: &Coordinate,
    ) -> Result<DrivenRoute, RoutingError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| RoutingError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let body = json!({
            "coordinates": [
                [start.lon, start.lat],
                [end.lon, end.lat],
            ]
        });

        let response = self.http.post(&self.base_url).json(&body).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(RoutingError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(RoutingError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RoutingError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let directions: DirectionsResponse =
            serde_json::from_str(&body).map_err(|e| RoutingError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        Ok(convert_directions(&directions)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = OrsConfig::new("test-key")
            .with_base_url("http://localhost:8080")
            .with_max_concurrent(10)
            .with_timeout(60);

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.max_concurrent, 10);
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn config_defaults() {
        let config = OrsConfig::new("test-key");

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.max_concurrent, DEFAULT_MAX_CONCURRENT);
        assert_eq!(config.timeout_secs, 15);
    }

    #[test]
    fn client_creation() {
        let config = OrsConfig::new("test-key");
        assert!(OrsClient::new(config).is_ok());
    }

    #[test]
    fn client_rejects_unprintable_api_key() {
        let config = OrsConfig::new("bad\nkey");
        assert!(OrsClient::new(config).is_err());
    }

    // Integration tests would go here, but require a real API key
    // and would make actual HTTP requests. They should be marked
    // with #[ignore] and run separately.
}
