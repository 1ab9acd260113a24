//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedRoutingClient;
use crate::planner::PlannerConfig;
use crate::stations::StationIndex;

/// Shared application state.
///
/// Contains all the services needed to handle requests. The station
/// index is built once at startup and never mutated, so it needs no
/// lock.
#[derive(Clone)]
pub struct AppState {
    /// Cached directions client
    pub routing: Arc<CachedRoutingClient>,

    /// Immutable fuel station index
    pub stations: Arc<StationIndex>,

    /// Fuel stop planner configuration
    pub planner_config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        routing: CachedRoutingClient,
        stations: StationIndex,
        planner_config: PlannerConfig,
    ) -> Self {
        Self {
            routing: Arc::new(routing),
            stations: Arc::new(stations),
            planner_config: Arc::new(planner_config),
        }
    }
}
