//! Conversion from wire types to the domain route.

use crate::domain::{Coordinate, RoutePath};

use super::types::DirectionsResponse;

/// Miles per meter.
const METERS_TO_MILES: f64 = 0.000621371;

/// Errors converting a directions response into a domain route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The response contained no route features
    #[error("directions response contained no route")]
    NoRoute,

    /// The route geometry had no coordinates
    #[error("route geometry was empty")]
    EmptyGeometry,
}

/// A drivable route as the planner consumes it.
#[derive(Debug, Clone, PartialEq)]
pub struct DrivenRoute {
    /// The route geometry in traversal order.
    pub path: RoutePath,

    /// Total driving distance in miles.
    pub distance_miles: f64,
}

/// Convert a directions response into a [`DrivenRoute`].
///
/// Takes the first (recommended) route alternative and converts its
/// meter distance to miles.
pub fn convert_directions(response: &DirectionsResponse) -> Result<DrivenRoute, ConversionError> {
    let feature = response.features.first().ok_or(ConversionError::NoRoute)?;

    let coords: Vec<Coordinate> = feature
        .geometry
        .coordinates
        .iter()
        .map(|&[lon, lat]| Coordinate::new(lon, lat))
        .collect();
    let path = RoutePath::new(coords).map_err(|_| ConversionError::EmptyGeometry)?;

    Ok(DrivenRoute {
        path,
        distance_miles: feature.properties.summary.distance * METERS_TO_MILES,
    })
}
