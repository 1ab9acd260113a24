//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use crate::domain::Coordinate;
use crate::planner::StopPlanner;
use crate::routing::{ConversionError, RoutingError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/optimize-route", post(optimize_route))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Optimize a route: fetch directions, plan fuel stops, return both.
async fn optimize_route(
    State(state): State<AppState>,
    Json(req): Json<OptimizeRouteRequest>,
) -> Result<Json<OptimizeRouteResponse>, AppError> {
    // Validate trip parameters before the planner ever sees them
    let params = crate::domain::TripParams::new(req.mpg, req.tank_size).map_err(|e| {
        AppError::BadRequest {
            message: e.to_string(),
        }
    })?;

    let start = Coordinate::new(req.start_coords[0], req.start_coords[1]);
    let end = Coordinate::new(req.end_coords[0], req.end_coords[1]);

    // Fetch the route (cached per endpoint pair)
    let route = state.routing.get_route(&start, &end).await?;

    // Plan fuel stops
    let planner = StopPlanner::new(&state.stations, &state.planner_config);
    let plan = planner.plan(&route.path, route.distance_miles, &params);

    Ok(Json(OptimizeRouteResponse::from_parts(&route, &plan)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<RoutingError> for AppError {
    fn from(e: RoutingError) -> Self {
        match e {
            RoutingError::Convert(ConversionError::NoRoute) => AppError::NotFound {
                message: "no drivable route between those points".to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        // Log errors to stderr for debugging
        eprintln!("[{status}] {message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_route_maps_to_not_found() {
        let err = AppError::from(RoutingError::Convert(ConversionError::NoRoute));
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[test]
    fn rate_limit_maps_to_internal() {
        let err = AppError::from(RoutingError::RateLimited);
        assert!(matches!(err, AppError::Internal { .. }));
    }
}
