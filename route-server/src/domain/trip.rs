//! Trip parameters and planning output.

use super::Coordinate;

/// Error returned when trip parameters fail validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid trip parameters: {reason}")]
pub struct InvalidTripParams {
    reason: &'static str,
}

/// Validated vehicle parameters for a planning run.
///
/// Fuel economy and tank capacity are guaranteed positive and finite
/// by construction, so the planner never divides by zero or computes a
/// degenerate range.
///
/// # Examples
///
/// ```
/// use route_server::domain::TripParams;
///
/// let params = TripParams::new(25.0, 15.0).unwrap();
/// assert_eq!(params.max_range(), 375.0);
///
/// assert!(TripParams::new(0.0, 15.0).is_err());
/// assert!(TripParams::new(25.0, -1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripParams {
    mpg: f64,
    tank_size: f64,
}

impl TripParams {
    /// Validate fuel economy (miles per gallon) and tank capacity
    /// (gallons). Both must be positive finite numbers.
    pub fn new(mpg: f64, tank_size: f64) -> Result<Self, InvalidTripParams> {
        if !mpg.is_finite() || mpg <= 0.0 {
            return Err(InvalidTripParams {
                reason: "mpg must be a positive finite number",
            });
        }
        if !tank_size.is_finite() || tank_size <= 0.0 {
            return Err(InvalidTripParams {
                reason: "tank_size must be a positive finite number",
            });
        }

        Ok(Self { mpg, tank_size })
    }

    /// Fuel economy in miles per gallon.
    pub fn mpg(&self) -> f64 {
        self.mpg
    }

    /// Tank capacity in gallons.
    pub fn tank_size(&self) -> f64 {
        self.tank_size
    }

    /// Miles the vehicle can travel on a full tank.
    pub fn max_range(&self) -> f64 {
        self.mpg * self.tank_size
    }
}

/// A single refuel event along the route.
///
/// Immutable once produced; owns its data with no references back into
/// the station index or route.
#[derive(Debug, Clone, PartialEq)]
pub struct RefuelStop {
    /// Display name of the chosen station.
    pub station_name: String,

    /// Where the stop happens.
    pub location: Coordinate,

    /// Gallons purchased, rounded to 2 decimal places.
    pub gallons_filled: f64,

    /// Unit price at the chosen station, rounded to 2 decimal places.
    pub price_per_unit: f64,

    /// Cost of this stop, rounded to 2 decimal places.
    pub cost: f64,
}

/// The complete output of a planning run: refuel stops in
/// route-traversal order plus trip totals.
///
/// `total_fuel_used` is the whole-trip theoretical consumption
/// (distance / mpg), computed independently of the per-stop gallon
/// sums; the two figures can legitimately diverge.
#[derive(Debug, Clone, PartialEq)]
pub struct TripPlan {
    /// Refuel stops in route order.
    pub stops: Vec<RefuelStop>,

    /// Sum of stop costs, rounded to 2 decimal places.
    pub total_cost: f64,

    /// Whole-trip fuel consumption in gallons, rounded to 2 decimal
    /// places.
    pub total_fuel_used: f64,
}

/// Round to 2 decimal places, the precision used for money and gallons
/// in responses.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
