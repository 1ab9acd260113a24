//! OpenRouteService directions client.
//!
//! This module provides an HTTP client for the OpenRouteService
//! driving-car directions API, which turns an origin/destination pair
//! into a drivable route.
//!
//! Key characteristics of the API:
//! - Authenticated by an API key sent in the `Authorization` header
//! - Responds with GeoJSON: plain `[lon, lat]` coordinate pairs, no
//!   compact polyline encoding to decompress
//! - Distances are reported in meters; the planner works in miles

mod client;
mod convert;
mod error;
mod types;

pub use client::{OrsClient, OrsConfig};
pub use convert::{ConversionError, DrivenRoute, convert_directions};
pub use error::RoutingError;
pub use types::{DirectionsResponse, Feature, Geometry, Properties, Summary};
