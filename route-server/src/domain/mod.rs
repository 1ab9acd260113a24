//! Domain types for the fuel route optimizer.
//!
//! This module contains the core value types the planner operates on.
//! Types that carry invariants (a route must be non-empty, trip
//! parameters must be positive) enforce them at construction time, so
//! code that receives these types can trust their validity.

mod coordinate;
mod route;
mod trip;

pub use coordinate::Coordinate;
pub use route::{EmptyRoute, RoutePath};
pub use trip::{InvalidTripParams, RefuelStop, TripParams, TripPlan, round2};
