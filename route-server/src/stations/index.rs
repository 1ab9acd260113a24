//! In-memory station index with proximity lookup.

use std::path::Path;

use crate::domain::Coordinate;

use super::error::StationError;
use super::loader::load_stations;

/// A fuel station from the price feed.
///
/// The price is guaranteed positive and finite by the loader; records
/// failing that invariant never make it into the index.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Display name (e.g. the truck stop brand and number).
    pub name: String,

    /// Retail price per gallon.
    pub price: f64,

    /// Where the station is.
    pub location: Coordinate,
}

/// An immutable collection of stations, queried by proximity.
///
/// Built once per process and shared behind an `Arc`; it exposes no
/// mutation, so arbitrarily many planning calls can query it
/// concurrently without locks.
#[derive(Debug, Clone, Default)]
pub struct StationIndex {
    stations: Vec<Station>,
}

impl StationIndex {
    /// Build an index from already-loaded stations.
    pub fn new(stations: Vec<Station>) -> Self {
        Self { stations }
    }

    /// Build an index straight from a CSV price feed.
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self, StationError> {
        Ok(Self::new(load_stations(path)?))
    }

    /// Every station within `radius_miles` great-circle distance of
    /// `point`.
    ///
    /// The result preserves load order but carries no ordering
    /// contract; callers sort or scan as they need. Empty is a valid,
    /// non-error outcome.
    pub fn nearby(&self, point: &Coordinate, radius_miles: f64) -> Vec<&Station> {
        self.stations
            .iter()
            .filter(|s| s.location.distance_to(point) <= radius_miles)
            .collect()
    }

    /// Number of stations in the index.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Whether the index holds no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(name: &str, price: f64, lon: f64, lat: f64) -> Station {
        Station {
            name: name.to_string(),
            price,
            location: Coordinate::new(lon, lat),
        }
    }

    #[test]
    fn nearby_filters_by_radius() {
        // ~69.1 miles per degree of latitude.
        let index = StationIndex::new(vec![
            station("Close", 3.10, 0.0, 0.05),
            station("Far", 3.00, 0.0, 1.0),
        ]);

        let origin = Coordinate::new(0.0, 0.0);
        let found = index.nearby(&origin, 10.0);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Close");
    }

    #[test]
    fn nearby_includes_station_exactly_at_point() {
        let index = StationIndex::new(vec![station("Here", 3.10, -94.5, 39.1)]);

        let found = index.nearby(&Coordinate::new(-94.5, 39.1), 0.0);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn empty_index_always_returns_empty() {
        let index = StationIndex::default();

        assert!(index.is_empty());
        assert!(index.nearby(&Coordinate::new(0.0, 0.0), 1_000.0).is_empty());
    }

    #[test]
    fn nearby_preserves_load_order() {
        let index = StationIndex::new(vec![
            station("First", 3.40, 0.0, 0.01),
            station("Second", 3.40, 0.0, 0.02),
            station("Third", 3.40, 0.0, 0.03),
        ]);

        let found = index.nearby(&Coordinate::new(0.0, 0.0), 10.0);
        let names: Vec<&str> = found.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn from_csv_roundtrip() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "truckstop_name,retail_price,latitude,longitude\n\
             Pilot #42,3.15,39.0997,-94.5786\n\
             broken,row,here,\n"
        )
        .unwrap();

        let index = StationIndex::from_csv(file.path()).unwrap();
        assert_eq!(index.len(), 1);
    }
}
