use crate::geometry::{
    Coord, Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};

/// Extract the ordered vertex list of a geometry.
///
/// The result is deterministic and order-preserving: parts in part order,
/// rings in ring order (exterior first, holes after), vertices as stored.
/// Closing duplicates of rings are kept.
pub trait Explode {
    fn explode(&self) -> Vec<Coord>;
}

impl Explode for Point {
    fn explode(&self) -> Vec<Coord> {
        vec![self.coord()]
    }
}

impl Explode for MultiPoint {
    fn explode(&self) -> Vec<Coord> {
        self.coords().to_vec()
    }
}

impl Explode for LineString {
    fn explode(&self) -> Vec<Coord> {
        self.coords().to_vec()
    }
}

impl Explode for MultiLineString {
    fn explode(&self) -> Vec<Coord> {
        self.lines().iter().flatten().copied().collect()
    }
}

impl Explode for Polygon {
    fn explode(&self) -> Vec<Coord> {
        self.rings()
            .iter()
            .flat_map(|ring| ring.coords())
            .copied()
            .collect()
    }
}

impl Explode for MultiPolygon {
    fn explode(&self) -> Vec<Coord> {
        self.polygons()
            .iter()
            .flatten()
            .flat_map(|ring| ring.coords())
            .copied()
            .collect()
    }
}

impl Explode for Geometry {
    fn explode(&self) -> Vec<Coord> {
        match self {
            Self::Point(g) => g.explode(),
            Self::MultiPoint(g) => g.explode(),
            Self::LineString(g) => g.explode(),
            Self::MultiLineString(g) => g.explode(),
            Self::Polygon(g) => g.explode(),
            Self::MultiPolygon(g) => g.explode(),
        }
    }
}
