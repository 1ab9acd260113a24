//! Fuel route optimizer server.
//!
//! A web application that answers: "given this driving route and this
//! vehicle, where should I refuel and what will the fuel cost?"

pub mod cache;
pub mod domain;
pub mod planner;
pub mod routing;
pub mod stations;
pub mod web;
