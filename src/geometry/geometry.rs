use crate::geometry::{LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};
use crate::trait_::{Feature, Properties};

/// The closed sum type over the six geometry kinds.
///
/// Every codec and algorithm trait is implemented on this enum by
/// exhaustive matching, so a new kind forces every operation site to be
/// updated at compile time.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    MultiPoint(MultiPoint),
    LineString(LineString),
    MultiLineString(MultiLineString),
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
}

impl Feature for Geometry {
    fn geometry_type(&self) -> &'static str {
        match self {
            Self::Point(g) => g.geometry_type(),
            Self::MultiPoint(g) => g.geometry_type(),
            Self::LineString(g) => g.geometry_type(),
            Self::MultiLineString(g) => g.geometry_type(),
            Self::Polygon(g) => g.geometry_type(),
            Self::MultiPolygon(g) => g.geometry_type(),
        }
    }

    fn properties(&self) -> &Properties {
        match self {
            Self::Point(g) => g.properties(),
            Self::MultiPoint(g) => g.properties(),
            Self::LineString(g) => g.properties(),
            Self::MultiLineString(g) => g.properties(),
            Self::Polygon(g) => g.properties(),
            Self::MultiPolygon(g) => g.properties(),
        }
    }

    fn properties_mut(&mut self) -> &mut Properties {
        match self {
            Self::Point(g) => g.properties_mut(),
            Self::MultiPoint(g) => g.properties_mut(),
            Self::LineString(g) => g.properties_mut(),
            Self::MultiLineString(g) => g.properties_mut(),
            Self::Polygon(g) => g.properties_mut(),
            Self::MultiPolygon(g) => g.properties_mut(),
        }
    }
}

impl From<Point> for Geometry {
    fn from(value: Point) -> Self {
        Self::Point(value)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(value: MultiPoint) -> Self {
        Self::MultiPoint(value)
    }
}

impl From<LineString> for Geometry {
    fn from(value: LineString) -> Self {
        Self::LineString(value)
    }
}

impl From<MultiLineString> for Geometry {
    fn from(value: MultiLineString) -> Self {
        Self::MultiLineString(value)
    }
}

impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Self::Polygon(value)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(value: MultiPolygon) -> Self {
        Self::MultiPolygon(value)
    }
}
