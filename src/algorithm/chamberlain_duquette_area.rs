use crate::geometry::{
    Coord, Geometry, LinearRing, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};

/// WGS84 equatorial radius in meters, the radius the Chamberlain-Duquette
/// ring formula is conventionally evaluated with.
const EQUATORIAL_RADIUS_METERS: f64 = 6_378_137.0;

/// Calculate the unsigned approximate geodesic area of a geometry.
///
/// Uses the ring-area approximation of Chamberlain and Duquette, "Some
/// Algorithms for Polygons on a Sphere" (JPL Publication 07-03, 2007),
/// with the WGS84 equatorial radius of 6 378 137 m. Holes are subtracted
/// from the exterior ring's area; multi-part areas simply add, without any
/// overlap handling. Rings with fewer than three distinct vertices have
/// area 0, and so does every non-areal geometry kind.
///
/// # Units
///
/// - return value: meters²
pub trait ChamberlainDuquetteArea {
    fn chamberlain_duquette_area(&self) -> f64;
}

fn ring_area(ring: &LinearRing) -> f64 {
    // Work on the unique vertex cycle: collapse consecutive repeats, then
    // drop the closing duplicate.
    let mut coords: Vec<Coord> = ring.coords().to_vec();
    coords.dedup();
    if coords.len() >= 2 && coords.first() == coords.last() {
        coords.pop();
    }

    let mut distinct: Vec<Coord> = Vec::with_capacity(coords.len());
    for coord in &coords {
        if !distinct.contains(coord) {
            distinct.push(*coord);
        }
    }
    if distinct.len() < 3 {
        return 0.0;
    }

    let n = coords.len();
    let mut total = 0.0;
    for i in 0..n {
        let p1 = coords[i];
        let p2 = coords[(i + 1) % n];
        let p3 = coords[(i + 2) % n];
        total += (p3.x().to_radians() - p1.x().to_radians()) * p2.y().to_radians().sin();
    }
    (total * EQUATORIAL_RADIUS_METERS * EQUATORIAL_RADIUS_METERS / 2.0).abs()
}

fn polygon_area(rings: &[LinearRing]) -> f64 {
    let Some((exterior, holes)) = rings.split_first() else {
        return 0.0;
    };
    let holes: f64 = holes.iter().map(ring_area).sum();
    (ring_area(exterior) - holes).max(0.0)
}

/// Implementation where the result is zero.
macro_rules! zero_impl {
    ($type:ty) => {
        impl ChamberlainDuquetteArea for $type {
            fn chamberlain_duquette_area(&self) -> f64 {
                0.0
            }
        }
    };
}

zero_impl!(Point);
zero_impl!(MultiPoint);
zero_impl!(LineString);
zero_impl!(MultiLineString);

impl ChamberlainDuquetteArea for Polygon {
    fn chamberlain_duquette_area(&self) -> f64 {
        polygon_area(self.rings())
    }
}

impl ChamberlainDuquetteArea for MultiPolygon {
    fn chamberlain_duquette_area(&self) -> f64 {
        self.polygons().iter().map(|rings| polygon_area(rings)).sum()
    }
}

impl ChamberlainDuquetteArea for Geometry {
    fn chamberlain_duquette_area(&self) -> f64 {
        match self {
            Self::Point(g) => g.chamberlain_duquette_area(),
            Self::MultiPoint(g) => g.chamberlain_duquette_area(),
            Self::LineString(g) => g.chamberlain_duquette_area(),
            Self::MultiLineString(g) => g.chamberlain_duquette_area(),
            Self::Polygon(g) => g.chamberlain_duquette_area(),
            Self::MultiPolygon(g) => g.chamberlain_duquette_area(),
        }
    }
}
