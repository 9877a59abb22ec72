use crate::geometry::{
    Coord, Geometry, LinearRing, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};

/// Determine the length of a geometry using the [haversine formula].
///
/// Line kinds measure their open paths; polygon kinds measure the
/// perimeter of every ring, holes included. A part with fewer than two
/// vertices contributes 0.
///
/// # Units
///
/// - return value: meters
///
/// [haversine formula]: https://en.wikipedia.org/wiki/Haversine_formula
pub trait HaversineLength {
    fn haversine_length(&self) -> f64;
}

fn path_length(coords: &[Coord]) -> f64 {
    coords
        .windows(2)
        .map(|pair| pair[0].haversine_distance(&pair[1]))
        .sum()
}

/// Perimeter of a ring, closing the loop if the ring is stored open.
fn ring_length(ring: &LinearRing) -> f64 {
    let coords = ring.coords();
    let mut length = path_length(coords);
    if !ring.is_closed() {
        if let [first, .., last] = coords {
            length += last.haversine_distance(first);
        }
    }
    length
}

/// Implementation where the result is zero.
macro_rules! zero_impl {
    ($type:ty) => {
        impl HaversineLength for $type {
            fn haversine_length(&self) -> f64 {
                0.0
            }
        }
    };
}

zero_impl!(Point);
zero_impl!(MultiPoint);

impl HaversineLength for LineString {
    fn haversine_length(&self) -> f64 {
        path_length(self.coords())
    }
}

impl HaversineLength for MultiLineString {
    fn haversine_length(&self) -> f64 {
        self.lines().iter().map(|line| path_length(line)).sum()
    }
}

impl HaversineLength for Polygon {
    fn haversine_length(&self) -> f64 {
        self.rings().iter().map(ring_length).sum()
    }
}

impl HaversineLength for MultiPolygon {
    fn haversine_length(&self) -> f64 {
        self.polygons()
            .iter()
            .flatten()
            .map(ring_length)
            .sum()
    }
}

impl HaversineLength for Geometry {
    fn haversine_length(&self) -> f64 {
        match self {
            Self::Point(g) => g.haversine_length(),
            Self::MultiPoint(g) => g.haversine_length(),
            Self::LineString(g) => g.haversine_length(),
            Self::MultiLineString(g) => g.haversine_length(),
            Self::Polygon(g) => g.haversine_length(),
            Self::MultiPolygon(g) => g.haversine_length(),
        }
    }
}
