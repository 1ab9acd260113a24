//! Wire types for the OpenRouteService directions response.
//!
//! These mirror the GeoJSON payload shape; conversion to domain types
//! happens in [`super::convert`].

use serde::Deserialize;

/// Top-level directions response (a GeoJSON FeatureCollection).
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    /// Route alternatives; the first is the recommended route.
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// One route alternative.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    pub properties: Properties,
    pub geometry: Geometry,
}

/// Route-level properties.
#[derive(Debug, Clone, Deserialize)]
pub struct Properties {
    pub summary: Summary,
}

/// Distance/duration summary for a route.
#[derive(Debug, Clone, Deserialize)]
pub struct Summary {
    /// Route length in meters.
    pub distance: f64,

    /// Driving time in seconds.
    #[serde(default)]
    pub duration: f64,
}

/// GeoJSON geometry: a LineString of `[lon, lat]` pairs.
#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,

    pub coordinates: Vec<[f64; 2]>,
}
