use crate::geometry::Coord;

/// An ordered vertex sequence bounding a polygon exterior or hole.
///
/// A valid ring has at least four vertices with the first equal to the
/// last. Closure is not enforced; it stays the caller's responsibility,
/// with [`LinearRing::close`] as a convenience.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinearRing(pub Vec<Coord>);

impl LinearRing {
    pub fn new(coords: Vec<Coord>) -> Self {
        Self(coords)
    }

    pub fn coords(&self) -> &[Coord] {
        &self.0
    }

    pub fn coords_mut(&mut self) -> &mut Vec<Coord> {
        &mut self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the first and last vertices coincide. Rings with fewer than
    /// two vertices count as closed.
    pub fn is_closed(&self) -> bool {
        self.0.len() < 2 || self.0.first() == self.0.last()
    }

    /// Append a copy of the first vertex if the ring is open.
    pub fn close(&mut self) {
        if !self.is_closed() {
            let first = self.0[0];
            self.0.push(first);
        }
    }
}

impl From<Vec<Coord>> for LinearRing {
    fn from(coords: Vec<Coord>) -> Self {
        Self(coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::c;

    #[test]
    fn close_open_ring() {
        let mut ring = LinearRing::new(vec![c(0., 0.), c(0., 1.), c(1., 1.)]);
        assert!(!ring.is_closed());
        ring.close();
        assert!(ring.is_closed());
        assert_eq!(ring.len(), 4);
        assert_eq!(ring.coords().first(), ring.coords().last());
    }

    #[test]
    fn close_is_idempotent() {
        let mut ring = LinearRing::new(vec![c(0., 0.), c(0., 1.), c(1., 1.), c(0., 0.)]);
        assert!(ring.is_closed());
        ring.close();
        assert_eq!(ring.len(), 4);
    }
}
