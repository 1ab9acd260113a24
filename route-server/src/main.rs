use std::net::SocketAddr;

use route_server::cache::{CacheConfig, CachedRoutingClient};
use route_server::planner::PlannerConfig;
use route_server::routing::{OrsClient, OrsConfig};
use route_server::stations::StationIndex;
use route_server::web::{AppState, create_router};

/// Default location of the fuel price feed.
const DEFAULT_FUEL_PRICES_CSV: &str = "data/fuel-prices.csv";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Get the routing API key from the environment
    let api_key = std::env::var("ORS_API_KEY").unwrap_or_else(|_| {
        eprintln!("Warning: ORS_API_KEY not set. Directions requests will fail.");
        String::new()
    });

    // Create the directions client
    let ors_config = OrsConfig::new(&api_key);
    let ors_client = OrsClient::new(ors_config).expect("Failed to create directions client");

    // Create cached client
    let cache_config = CacheConfig::default();
    let cached_routing = CachedRoutingClient::new(ors_client, &cache_config);

    // Load the fuel price feed (fail fast if unreadable)
    let csv_path =
        std::env::var("FUEL_PRICES_CSV").unwrap_or_else(|_| DEFAULT_FUEL_PRICES_CSV.to_string());
    println!("Loading fuel prices from {csv_path}...");
    let stations = StationIndex::from_csv(&csv_path).expect("Failed to load fuel price data");
    println!("Loaded {} fuel stations", stations.len());

    // Build app state
    let state = AppState::new(cached_routing, stations, PlannerConfig::default());

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));
    println!("Fuel Route Optimizer listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health          - Health check");
    println!("  POST /optimize-route  - Plan refuel stops for a trip");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
