use crate::geometry::Coord;
use crate::trait_::{Feature, Properties};

/// A single position.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    coord: Coord,
    properties: Properties,
}

impl Point {
    pub fn new(coord: Coord) -> Self {
        Self::with_properties(coord, Properties::new())
    }

    pub fn with_properties(coord: Coord, properties: Properties) -> Self {
        Self { coord, properties }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn coord_mut(&mut self) -> &mut Coord {
        &mut self.coord
    }
}

impl Feature for Point {
    fn geometry_type(&self) -> &'static str {
        "Point"
    }

    fn properties(&self) -> &Properties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }
}
