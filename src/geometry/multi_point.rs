use crate::geometry::Coord;
use crate::trait_::{Feature, Properties};

/// An ordered collection of positions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPoint {
    coords: Vec<Coord>,
    properties: Properties,
}

impl MultiPoint {
    pub fn new(coords: Vec<Coord>) -> Self {
        Self::with_properties(coords, Properties::new())
    }

    pub fn with_properties(coords: Vec<Coord>, properties: Properties) -> Self {
        Self { coords, properties }
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    pub fn coords_mut(&mut self) -> &mut Vec<Coord> {
        &mut self.coords
    }

    /// Number of points.
    pub fn num_points(&self) -> usize {
        self.coords.len()
    }
}

impl Feature for MultiPoint {
    fn geometry_type(&self) -> &'static str {
        "MultiPoint"
    }

    fn properties(&self) -> &Properties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }
}
