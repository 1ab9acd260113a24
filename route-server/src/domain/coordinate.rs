//! Geographic coordinates and great-circle distance.

use std::fmt;

/// Mean Earth radius in miles, used by the haversine formula.
const EARTH_RADIUS_MILES: f64 = 3958.8;

/// A geographic point as a (longitude, latitude) pair in decimal degrees.
///
/// Stored longitude-first to match the GeoJSON convention used by the
/// routing provider. Plain degree values are accepted unchecked: the
/// haversine formula is total over all real inputs.
///
/// # Examples
///
/// ```
/// use route_server::domain::Coordinate;
///
/// let kansas_city = Coordinate::new(-94.5786, 39.0997);
/// assert_eq!(kansas_city.distance_to(&kansas_city), 0.0);
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// Latitude in decimal degrees.
    pub lat: f64,
}

impl Coordinate {
    /// Create a coordinate from longitude and latitude in degrees.
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Great-circle distance to another coordinate, in miles.
    ///
    /// Uses the haversine formula. Symmetric up to floating-point
    /// rounding; no side effects.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_MILES * c
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate({}, {})", self.lon, self.lat)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lon, self.lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_self_is_zero() {
        let a = Coordinate::new(-0.1276, 51.5072);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn known_distance_la_to_nyc() {
        // Los Angeles to New York, commonly cited as ~2,445 miles
        // great-circle.
        let la = Coordinate::new(-118.2437, 34.0522);
        let nyc = Coordinate::new(-74.0060, 40.7128);

        let d = la.distance_to(&nyc);
        assert!((d - 2445.0).abs() < 5.0, "got {d}");
    }

    #[test]
    fn one_degree_of_latitude() {
        // One degree of latitude is ~69.1 miles on a 3958.8-mile sphere.
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 1.0);

        let d = a.distance_to(&b);
        assert!((d - 69.09).abs() < 0.1, "got {d}");
    }

    #[test]
    fn symmetric() {
        let a = Coordinate::new(-94.5786, 39.0997);
        let b = Coordinate::new(-104.9903, 39.7392);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-9);
    }

    #[test]
    fn antimeridian_does_not_blow_up() {
        let a = Coordinate::new(179.9, 0.0);
        let b = Coordinate::new(-179.9, 0.0);

        let d = a.distance_to(&b);
        assert!(d.is_finite());
        // 0.2 degrees of longitude at the equator, ~13.8 miles.
        assert!(d < 20.0, "got {d}");
    }

    #[test]
    fn display() {
        let a = Coordinate::new(-94.5, 39.1);
        assert_eq!(format!("{}", a), "(-94.5, 39.1)");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_coordinate() -> impl Strategy<Value = Coordinate> {
        (-180.0f64..180.0, -90.0f64..90.0).prop_map(|(lon, lat)| Coordinate::new(lon, lat))
    }

    proptest! {
        /// distance(a, a) is always zero.
        #[test]
        fn self_distance_zero(a in any_coordinate()) {
            prop_assert_eq!(a.distance_to(&a), 0.0);
        }

        /// distance(a, b) == distance(b, a) within tolerance.
        #[test]
        fn symmetry(a in any_coordinate(), b in any_coordinate()) {
            let ab = a.distance_to(&b);
            let ba = b.distance_to(&a);
            prop_assert!((ab - ba).abs() < 1e-6);
        }

        /// Distance is non-negative and finite for all degree inputs.
        #[test]
        fn total_and_non_negative(a in any_coordinate(), b in any_coordinate()) {
            let d = a.distance_to(&b);
            prop_assert!(d.is_finite());
            prop_assert!(d >= 0.0);
        }

        /// No two points on Earth are more than half the circumference apart.
        #[test]
        fn bounded_by_half_circumference(a in any_coordinate(), b in any_coordinate()) {
            let d = a.distance_to(&b);
            prop_assert!(d <= std::f64::consts::PI * 3958.8 + 1e-6);
        }
    }
}
