//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{RefuelStop, RoutePath, TripPlan, round2};
use crate::routing::DrivenRoute;

/// Request to optimize a route.
///
/// Coordinates are `[longitude, latitude]` pairs, matching the
/// directions provider's convention.
#[derive(Debug, Deserialize)]
pub struct OptimizeRouteRequest {
    /// Trip origin
    pub start_coords: [f64; 2],

    /// Trip destination
    pub end_coords: [f64; 2],

    /// Fuel economy in miles per gallon (must be > 0)
    #[serde(default = "default_mpg")]
    pub mpg: f64,

    /// Tank capacity in gallons (must be > 0)
    #[serde(default = "default_tank_size")]
    pub tank_size: f64,
}

fn default_mpg() -> f64 {
    25.0
}

fn default_tank_size() -> f64 {
    15.0
}

/// A refuel stop in the response.
#[derive(Debug, Serialize)]
pub struct FuelStopResult {
    /// Station display name
    pub station: String,

    /// Stop latitude
    pub lat: f64,

    /// Stop longitude
    pub lng: f64,

    /// Gallons purchased at this stop
    pub gallons_filled: f64,

    /// Unit price at this stop
    pub price_per_gallon: f64,

    /// Cost of this stop
    pub cost: f64,
}

impl FuelStopResult {
    /// Create from a domain RefuelStop.
    pub fn from_stop(stop: &RefuelStop) -> Self {
        Self {
            station: stop.station_name.clone(),
            lat: stop.location.lat,
            lng: stop.location.lon,
            gallons_filled: stop.gallons_filled,
            price_per_gallon: stop.price_per_unit,
            cost: stop.cost,
        }
    }
}

/// Route geometry echoed back for map display.
#[derive(Debug, Serialize)]
pub struct GeometryResult {
    /// Always "LineString"
    #[serde(rename = "type")]
    pub kind: &'static str,

    /// `[lon, lat]` pairs in traversal order
    pub coordinates: Vec<[f64; 2]>,
}

impl GeometryResult {
    /// Create from a domain route path.
    pub fn from_path(path: &RoutePath) -> Self {
        Self {
            kind: "LineString",
            coordinates: path.coords().iter().map(|c| [c.lon, c.lat]).collect(),
        }
    }
}

/// Response for route optimization.
#[derive(Debug, Serialize)]
pub struct OptimizeRouteResponse {
    /// Total driving distance in miles
    pub total_distance_miles: f64,

    /// Refuel stops in route order
    pub fuel_stops: Vec<FuelStopResult>,

    /// Total fuel cost for the trip
    pub total_fuel_cost: f64,

    /// Whole-trip fuel consumption in gallons
    pub total_gallons_used: f64,

    /// Route geometry for map display
    pub route_geometry: GeometryResult,
}

impl OptimizeRouteResponse {
    /// Assemble the response from the fetched route and the computed
    /// plan.
    pub fn from_parts(route: &DrivenRoute, plan: &TripPlan) -> Self {
        Self {
            total_distance_miles: round2(route.distance_miles),
            fuel_stops: plan.stops.iter().map(FuelStopResult::from_stop).collect(),
            total_fuel_cost: plan.total_cost,
            total_gallons_used: plan.total_fuel_used,
            route_geometry: GeometryResult::from_path(&route.path),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinate;

    #[test]
    fn request_defaults() {
        let req: OptimizeRouteRequest = serde_json::from_str(
            r#"{"start_coords": [-94.5786, 39.0997], "end_coords": [-97.5164, 35.4676]}"#,
        )
        .unwrap();

        assert_eq!(req.start_coords, [-94.5786, 39.0997]);
        assert_eq!(req.mpg, 25.0);
        assert_eq!(req.tank_size, 15.0);
    }

    #[test]
    fn request_explicit_params() {
        let req: OptimizeRouteRequest = serde_json::from_str(
            r#"{
                "start_coords": [0.0, 0.0],
                "end_coords": [1.0, 1.0],
                "mpg": 8.5,
                "tank_size": 120.0
            }"#,
        )
        .unwrap();

        assert_eq!(req.mpg, 8.5);
        assert_eq!(req.tank_size, 120.0);
    }

    #[test]
    fn request_missing_endpoints_is_rejected() {
        let result = serde_json::from_str::<OptimizeRouteRequest>(r#"{"mpg": 25.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn response_serialization() {
        let route = DrivenRoute {
            path: RoutePath::new(vec![
                Coordinate::new(-94.5786, 39.0997),
                Coordinate::new(-97.5164, 35.4676),
            ])
            .unwrap(),
            distance_miles: 400.004,
        };
        let plan = TripPlan {
            stops: vec![RefuelStop {
                station_name: "Pilot #42".to_string(),
                location: Coordinate::new(-97.5164, 35.4676),
                gallons_filled: 15.0,
                price_per_unit: 3.10,
                cost: 46.5,
            }],
            total_cost: 46.5,
            total_fuel_used: 16.0,
        };

        let response = OptimizeRouteResponse::from_parts(&route, &plan);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["total_distance_miles"], 400.0);
        assert_eq!(json["total_fuel_cost"], 46.5);
        assert_eq!(json["total_gallons_used"], 16.0);
        assert_eq!(json["fuel_stops"][0]["station"], "Pilot #42");
        assert_eq!(json["fuel_stops"][0]["lat"], 35.4676);
        assert_eq!(json["fuel_stops"][0]["lng"], -97.5164);
        assert_eq!(json["fuel_stops"][0]["price_per_gallon"], 3.10);
        assert_eq!(json["route_geometry"]["type"], "LineString");
        assert_eq!(json["route_geometry"]["coordinates"][0][0], -94.5786);
    }
}
