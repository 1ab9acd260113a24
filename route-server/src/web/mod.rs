//! Web layer for the fuel route optimizer.
//!
//! Provides the HTTP endpoint that takes an origin/destination pair
//! and vehicle parameters and responds with the optimized fuel plan.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
