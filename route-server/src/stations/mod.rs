//! Fuel station data: CSV ingestion and proximity lookup.
//!
//! The index is built once at startup and then shared read-only
//! across all planning requests; nothing mutates it after
//! construction, so concurrent lookups need no locking.

mod error;
mod index;
mod loader;

pub use error::StationError;
pub use index::{Station, StationIndex};
pub use loader::load_stations;
