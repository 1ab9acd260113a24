//! Fuel stop planner.
//!
//! This module implements the core algorithm that answers: "given this
//! route and this vehicle, where should I refuel and what will it
//! cost?" It walks the route one full tank at a time, samples the
//! coordinate where the tank would run dry, and buys fuel at the
//! cheapest station within reach of that point.

mod config;
mod stops;

pub use config::PlannerConfig;
pub use stops::StopPlanner;
