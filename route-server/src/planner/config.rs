//! Planner configuration.

/// Configuration parameters for fuel stop planning.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// How far from a refuel checkpoint a station may be and still
    /// count as a candidate (miles).
    pub buffer_miles: f64,

    /// Price per gallon charged when no station is within the buffer.
    pub fallback_price: f64,

    /// Station name used when no station is within the buffer.
    pub fallback_station_name: String,
}

impl PlannerConfig {
    /// Create a configuration with the given parameters.
    pub fn new(
        buffer_miles: f64,
        fallback_price: f64,
        fallback_station_name: impl Into<String>,
    ) -> Self {
        Self {
            buffer_miles,
            fallback_price,
            fallback_station_name: fallback_station_name.into(),
        }
    }

    /// Set the candidate search radius.
    pub fn with_buffer_miles(mut self, miles: f64) -> Self {
        self.buffer_miles = miles;
        self
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            buffer_miles: 10.0,
            fallback_price: 3.50,
            fallback_station_name: "Generic Station".to_string(),
        }
    }
}
