use crate::feature_collection::FeatureCollection;
use crate::geometry::{LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};
use crate::Feature;

/// Decompose a multi-part geometry into one single-part feature per part.
///
/// Every produced feature carries its own deep copy of the source's
/// properties; mutating one flattened feature's properties does not affect
/// another's, nor the source's.
pub trait Flatten {
    fn flatten(&self) -> FeatureCollection;
}

impl Flatten for MultiPoint {
    fn flatten(&self) -> FeatureCollection {
        self.coords()
            .iter()
            .map(|&coord| Point::with_properties(coord, self.properties().clone()).into())
            .collect()
    }
}

impl Flatten for MultiLineString {
    fn flatten(&self) -> FeatureCollection {
        self.lines()
            .iter()
            .map(|line| LineString::with_properties(line.clone(), self.properties().clone()).into())
            .collect()
    }
}

impl Flatten for MultiPolygon {
    fn flatten(&self) -> FeatureCollection {
        self.polygons()
            .iter()
            .map(|rings| Polygon::with_properties(rings.clone(), self.properties().clone()).into())
            .collect()
    }
}
