use itertools::Itertools;

use crate::geometry::{
    Coord, Geometry, LinearRing, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};

/// Encode a geometry as Well-Known Text.
///
/// Coordinates are rendered lon-first in their natural decimal form and
/// lists are comma-joined without spaces, e.g. `MULTIPOINT(1 2,3 4)`.
pub trait ToWkt {
    fn to_wkt(&self) -> String;
}

fn coord_to_wkt(coord: &Coord) -> String {
    format!("{} {}", coord.x(), coord.y())
}

fn coords_to_wkt(coords: &[Coord]) -> String {
    coords.iter().map(coord_to_wkt).join(",")
}

fn ring_to_wkt(ring: &LinearRing) -> String {
    format!("({})", coords_to_wkt(ring.coords()))
}

fn rings_to_wkt(rings: &[LinearRing]) -> String {
    rings.iter().map(ring_to_wkt).join(",")
}

impl ToWkt for Point {
    fn to_wkt(&self) -> String {
        format!("POINT({})", coord_to_wkt(&self.coord()))
    }
}

impl ToWkt for MultiPoint {
    fn to_wkt(&self) -> String {
        format!("MULTIPOINT({})", coords_to_wkt(self.coords()))
    }
}

impl ToWkt for LineString {
    fn to_wkt(&self) -> String {
        format!("LINESTRING({})", coords_to_wkt(self.coords()))
    }
}

impl ToWkt for MultiLineString {
    fn to_wkt(&self) -> String {
        let lines = self
            .lines()
            .iter()
            .map(|line| format!("({})", coords_to_wkt(line)))
            .join(",");
        format!("MULTILINESTRING({lines})")
    }
}

impl ToWkt for Polygon {
    fn to_wkt(&self) -> String {
        format!("POLYGON({})", rings_to_wkt(self.rings()))
    }
}

impl ToWkt for MultiPolygon {
    fn to_wkt(&self) -> String {
        let polygons = self
            .polygons()
            .iter()
            .map(|rings| format!("({})", rings_to_wkt(rings)))
            .join(",");
        format!("MULTIPOLYGON({polygons})")
    }
}

impl ToWkt for Geometry {
    fn to_wkt(&self) -> String {
        match self {
            Self::Point(g) => g.to_wkt(),
            Self::MultiPoint(g) => g.to_wkt(),
            Self::LineString(g) => g.to_wkt(),
            Self::MultiLineString(g) => g.to_wkt(),
            Self::Polygon(g) => g.to_wkt(),
            Self::MultiPolygon(g) => g.to_wkt(),
        }
    }
}
