//! The fuel stop planning algorithm.

use tracing::debug;

use crate::domain::{Coordinate, RefuelStop, RoutePath, TripParams, TripPlan, round2};
use crate::stations::{Station, StationIndex};

use super::config::PlannerConfig;

/// Plans refuel stops along a route.
///
/// Borrows the station index and configuration, so one index serves
/// arbitrarily many concurrent planning calls; each call is pure
/// computation over its own inputs and fully deterministic.
pub struct StopPlanner<'a> {
    stations: &'a StationIndex,
    config: &'a PlannerConfig,
}

impl<'a> StopPlanner<'a> {
    /// Create a planner over the given station index and configuration.
    pub fn new(stations: &'a StationIndex, config: &'a PlannerConfig) -> Self {
        Self { stations, config }
    }

    /// Plan the refuel stops for a trip.
    ///
    /// The vehicle starts with a full tank, so a trip that fits within
    /// one tank needs no stops; otherwise one stop is planned at each
    /// point where the tank would run dry. At each checkpoint the
    /// cheapest station within the configured buffer wins; if none is
    /// within reach, a synthetic fallback station at the checkpoint is
    /// used so the plan is always complete.
    ///
    /// Never fails for a well-formed route, a non-negative distance
    /// and valid [`TripParams`].
    pub fn plan(&self, path: &RoutePath, distance_miles: f64, params: &TripParams) -> TripPlan {
        let max_range = params.max_range();
        let refuels = ((distance_miles / max_range).ceil() as i64 - 1).max(0) as usize;

        debug!(distance_miles, max_range, refuels, "planning fuel stops");

        let mut stops = Vec::with_capacity(refuels);
        let mut total_cost = 0.0;
        let mut remaining_distance = distance_miles;

        for stop_index in 1..=refuels {
            let target_distance = stop_index as f64 * max_range;
            let checkpoint = path.coordinate_at_distance(target_distance);

            let (station_name, location, unit_price) =
                match self.cheapest_near(&checkpoint) {
                    Some(station) => (station.name.clone(), station.location, station.price),
                    None => {
                        debug!(stop_index, %checkpoint, "no station within buffer, using fallback");
                        (
                            self.config.fallback_station_name.clone(),
                            checkpoint,
                            self.config.fallback_price,
                        )
                    }
                };

            // Gallons are derived from the total distance still ahead,
            // with the remaining distance decremented by a full tank's
            // range per stop rather than by the fuel actually used.
            let fuel_needed = params.tank_size().min(remaining_distance / params.mpg());
            let cost = fuel_needed * unit_price;

            total_cost += cost;
            remaining_distance -= max_range;

            stops.push(RefuelStop {
                station_name,
                location,
                gallons_filled: round2(fuel_needed),
                price_per_unit: round2(unit_price),
                cost: round2(cost),
            });
        }

        TripPlan {
            stops,
            total_cost: round2(total_cost),
            // Whole-trip theoretical consumption, independent of the
            // per-stop gallon sum.
            total_fuel_used: round2(distance_miles / params.mpg()),
        }
    }

    /// The cheapest station within the buffer of a checkpoint.
    ///
    /// Ties go to the first minimal element in index order (a
    /// strict-less scan; `Iterator::min_by` would keep the last).
    fn cheapest_near(&self, checkpoint: &Coordinate) -> Option<&Station> {
        let candidates = self.stations.nearby(checkpoint, self.config.buffer_miles);

        let mut cheapest: Option<&Station> = None;
        for candidate in candidates {
            if cheapest.is_none_or(|best| candidate.price < best.price) {
                cheapest = Some(candidate);
            }
        }
        cheapest
    }
}
