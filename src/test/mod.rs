//! Shared test fixtures.

pub(crate) mod properties;

use crate::geometry::Coord;

/// Coordinate literal for tests.
pub(crate) fn c(x: f64, y: f64) -> Coord {
    Coord::new(x, y).unwrap()
}
