use crate::geometry::Coord;
use crate::trait_::{Feature, Properties};

/// An ordered collection of line parts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiLineString {
    lines: Vec<Vec<Coord>>,
    properties: Properties,
}

impl MultiLineString {
    pub fn new(lines: Vec<Vec<Coord>>) -> Self {
        Self::with_properties(lines, Properties::new())
    }

    pub fn with_properties(lines: Vec<Vec<Coord>>, properties: Properties) -> Self {
        Self { lines, properties }
    }

    pub fn lines(&self) -> &[Vec<Coord>] {
        &self.lines
    }

    pub fn lines_mut(&mut self) -> &mut Vec<Vec<Coord>> {
        &mut self.lines
    }

    /// Number of line parts.
    pub fn num_lines(&self) -> usize {
        self.lines.len()
    }
}

impl Feature for MultiLineString {
    fn geometry_type(&self) -> &'static str {
        "MultiLineString"
    }

    fn properties(&self) -> &Properties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }
}
