//! CSV ingestion for fuel station data.
//!
//! The source is a price feed with one row per truck stop. Rows whose
//! numeric fields fail to parse are dropped individually; a bad row is
//! a fact about that row, not a reason to abort the load.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;

use crate::domain::Coordinate;

use super::error::StationError;
use super::index::Station;

/// One row of the price feed. Field names match the CSV headers.
#[derive(Debug, Deserialize)]
struct StationRecord {
    truckstop_name: String,
    retail_price: f64,
    latitude: f64,
    longitude: f64,
}

/// Load stations from a CSV file on disk.
pub fn load_stations(path: impl AsRef<Path>) -> Result<Vec<Station>, StationError> {
    let file = std::fs::File::open(path.as_ref())?;
    load_stations_from_reader(file)
}

/// Load stations from any reader (file, in-memory buffer, ...).
///
/// Returns every usable record. A record is dropped if its numeric
/// fields do not parse, or if its price is non-positive or non-finite;
/// dropped records are counted and logged once at warn level. Zero
/// usable records is not an error, just an empty index.
pub fn load_stations_from_reader<R: Read>(reader: R) -> Result<Vec<Station>, StationError> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let mut stations = Vec::new();
    let mut skipped = 0usize;

    for result in csv_reader.deserialize::<StationRecord>() {
        match result {
            Ok(record) if record.retail_price.is_finite() && record.retail_price > 0.0 => {
                stations.push(Station {
                    name: record.truckstop_name,
                    price: record.retail_price,
                    location: Coordinate::new(record.longitude, record.latitude),
                });
            }
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::warn!(skipped, loaded = stations.len(), "dropped unusable station records");
    }

    Ok(stations)
}
