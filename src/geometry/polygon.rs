use crate::geometry::LinearRing;
use crate::trait_::{Feature, Properties};

/// A surface bounded by one exterior ring and zero or more interior rings
/// (holes).
///
/// The first ring is the exterior; every further ring is a hole. Ring
/// closure and winding are not validated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    rings: Vec<LinearRing>,
    properties: Properties,
}

impl Polygon {
    pub fn new(rings: Vec<LinearRing>) -> Self {
        Self::with_properties(rings, Properties::new())
    }

    pub fn with_properties(rings: Vec<LinearRing>, properties: Properties) -> Self {
        Self { rings, properties }
    }

    pub fn rings(&self) -> &[LinearRing] {
        &self.rings
    }

    pub fn rings_mut(&mut self) -> &mut Vec<LinearRing> {
        &mut self.rings
    }

    /// The exterior ring, if any ring is present.
    pub fn exterior(&self) -> Option<&LinearRing> {
        self.rings.first()
    }

    /// The interior rings (holes).
    pub fn interiors(&self) -> &[LinearRing] {
        self.rings.get(1..).unwrap_or(&[])
    }
}

impl Feature for Polygon {
    fn geometry_type(&self) -> &'static str {
        "Polygon"
    }

    fn properties(&self) -> &Properties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::polygon::{inner_square, unit_square};

    #[test]
    fn exterior_and_interiors() {
        let polygon = Polygon::new(vec![unit_square(), inner_square()]);
        assert_eq!(polygon.exterior(), Some(&unit_square()));
        assert_eq!(polygon.interiors(), &[inner_square()]);

        let empty = Polygon::new(vec![]);
        assert_eq!(empty.exterior(), None);
        assert!(empty.interiors().is_empty());
    }
}
