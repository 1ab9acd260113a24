//! Caching layer for directions responses.
//!
//! The upstream directions API is the slow, rate-limited part of a
//! request, so routes are cached per origin/destination pair; the fuel
//! plan itself is cheap and is recomputed per request (it also depends
//! on mpg and tank size, which deliberately stay out of the cache key).
//!
//! Coordinate quantization (1e-5 degree, roughly a meter) makes the
//! float endpoints hashable and lets near-identical requests share an
//! entry.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::Coordinate;
use crate::routing::{DrivenRoute, OrsClient, RoutingError};

/// Quantization factor: 1e-5 degrees per step.
const QUANTIZE_STEPS_PER_DEGREE: f64 = 100_000.0;

/// Cache key for routes: quantized (start, end) endpoints as
/// (lon, lat, lon, lat) in 1e-5-degree steps.
type RouteKey = (i64, i64, i64, i64);

/// Cached route entry.
type RouteEntry = Arc<DrivenRoute>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(600),
            max_capacity: 1000,
        }
    }
}

/// Quantize a coordinate to 1e-5-degree steps.
fn quantize(coordinate: &Coordinate) -> (i64, i64) {
    (
        (coordinate.lon * QUANTIZE_STEPS_PER_DEGREE).round() as i64,
        (coordinate.lat * QUANTIZE_STEPS_PER_DEGREE).round() as i64,
    )
}

/// Cache for directions responses.
pub struct RouteCache {
    routes: MokaCache<RouteKey, RouteEntry>,
}

impl RouteCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { routes }
    }

    /// Compute the cache key for an origin/destination pair.
    fn key(start: &Coordinate, end: &Coordinate) -> RouteKey {
        let (slon, slat) = quantize(start);
        let (elon, elat) = quantize(end);
        (slon, slat, elon, elat)
    }

    /// Get a cached route.
    pub async fn get(&self, start: &Coordinate, end: &Coordinate) -> Option<RouteEntry> {
        self.routes.get(&Self::key(start, end)).await
    }

    /// Insert a route into the cache.
    pub async fn insert(&self, start: &Coordinate, end: &Coordinate, entry: RouteEntry) {
        self.routes.insert(Self::key(start, end), entry).await;
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.routes.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.routes.invalidate_all();
    }
}

/// Routing client with caching.
///
/// Wraps an [`OrsClient`] and caches directions responses.
pub struct CachedRoutingClient {
    client: OrsClient,
    cache: RouteCache,
}

impl CachedRoutingClient {
    /// Create a new cached client.
    pub fn new(client: OrsClient, cache_config: &CacheConfig) -> Self {
        Self {
            client,
            cache: RouteCache::new(cache_config),
        }
    }

    /// Fetch a driving route, using the cache if available.
    pub async fn get_route(
        &self,
        start: &Coordinate,
        end: &Coordinate,
    ) -> Result<Arc<DrivenRoute>, RoutingError> {
        // Try cache first
        if let Some(cached) = self.cache.get(start, end).await {
            return Ok(cached);
        }

        // Fetch from the API
        let route = self.client.directions(start, end).await?;

        // Cache and return
        let entry = Arc::new(route);
        self.cache.insert(start, end, entry.clone()).await;

        Ok(entry)
    }

    /// Access the underlying client for operations that bypass cache.
    pub fn client(&self) -> &OrsClient {
        &self.client
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }
}
