//! Route geometry and sampling.

use super::Coordinate;

/// Error returned when constructing a route from no coordinates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("route must contain at least one coordinate")]
pub struct EmptyRoute;

/// An ordered driving path from origin to destination.
///
/// Guaranteed non-empty by construction, so sampling always has a
/// coordinate to fall back to. Produced from the routing provider's
/// geometry; consumed read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePath {
    coords: Vec<Coordinate>,
}

impl RoutePath {
    /// Create a route from coordinates in traversal order.
    ///
    /// Rejects an empty sequence; a single-point route is accepted
    /// (degenerate, but sampling it is well-defined).
    pub fn new(coords: Vec<Coordinate>) -> Result<Self, EmptyRoute> {
        if coords.is_empty() {
            return Err(EmptyRoute);
        }
        Ok(Self { coords })
    }

    /// The coordinates in traversal order.
    pub fn coords(&self) -> &[Coordinate] {
        &self.coords
    }

    /// Number of coordinates in the route.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// A route is never empty, but clippy expects this alongside `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The coordinate at a target cumulative distance along the route.
    ///
    /// Walks consecutive coordinate pairs accumulating haversine
    /// segment lengths and returns the *second endpoint* of the first
    /// segment at which the accumulated distance reaches or exceeds
    /// `target_miles`. This deliberately snaps forward to the next
    /// route vertex rather than interpolating within the segment; the
    /// overshoot affects which stations count as nearby and callers
    /// depend on it.
    ///
    /// A target at or below zero returns the first coordinate. A
    /// target beyond the route's total length (or a route with fewer
    /// than two points) returns the final coordinate.
    pub fn coordinate_at_distance(&self, target_miles: f64) -> Coordinate {
        if target_miles <= 0.0 {
            return self.coords[0];
        }

        let mut accumulated = 0.0;
        for pair in self.coords.windows(2) {
            accumulated += pair[0].distance_to(&pair[1]);
            if accumulated >= target_miles {
                return pair[1];
            }
        }

        self.coords[self.coords.len() - 1]
    }
}
