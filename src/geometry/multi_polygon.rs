use crate::geometry::{LinearRing, MultiLineString};
use crate::trait_::{Feature, Properties};

/// An ordered collection of polygon parts, each a ring list with the
/// exterior first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPolygon {
    polygons: Vec<Vec<LinearRing>>,
    properties: Properties,
}

impl MultiPolygon {
    pub fn new(polygons: Vec<Vec<LinearRing>>) -> Self {
        Self::with_properties(polygons, Properties::new())
    }

    pub fn with_properties(polygons: Vec<Vec<LinearRing>>, properties: Properties) -> Self {
        Self {
            polygons,
            properties,
        }
    }

    pub fn polygons(&self) -> &[Vec<LinearRing>] {
        &self.polygons
    }

    pub fn polygons_mut(&mut self) -> &mut Vec<Vec<LinearRing>> {
        &mut self.polygons
    }

    /// Number of polygon parts.
    pub fn num_polygons(&self) -> usize {
        self.polygons.len()
    }

    /// Project every part to its exterior ring, dropping all holes.
    ///
    /// This is a lossy, one-way conversion; parts without any ring are
    /// skipped. The properties are copied into the result.
    pub fn to_multi_line_string(&self) -> MultiLineString {
        let lines = self
            .polygons
            .iter()
            .filter_map(|rings| rings.first())
            .map(|exterior| exterior.coords().to_vec())
            .collect();
        MultiLineString::with_properties(lines, self.properties.clone())
    }
}

impl Feature for MultiPolygon {
    fn geometry_type(&self) -> &'static str {
        "MultiPolygon"
    }

    fn properties(&self) -> &Properties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }
}
