//! The feature data model: coordinates, rings, the six geometry kinds and
//! the closed [`Geometry`] sum type.

pub(crate) mod coord;
#[allow(clippy::module_inception)]
mod geometry;
mod line_string;
mod linear_ring;
mod multi_line_string;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;

pub use coord::Coord;
pub use geometry::Geometry;
pub use line_string::LineString;
pub use linear_ring::LinearRing;
pub use multi_line_string::MultiLineString;
pub use multi_point::MultiPoint;
pub use multi_polygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;
