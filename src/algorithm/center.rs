use crate::algorithm::Explode;
use crate::error::{GeoFeatureError, Result};
use crate::geometry::Coord;

/// Compute the center of a geometry.
///
/// The center is the unweighted arithmetic mean of the exploded vertices,
/// not a planar or spherical centroid. Closing ring duplicates count like
/// any other vertex.
pub trait Center {
    /// Errors with [`GeoFeatureError::Degenerate`] when the geometry has no
    /// vertices; the mean is undefined there and must never surface as NaN.
    fn center(&self) -> Result<Coord>;
}

impl<T: Explode> Center for T {
    fn center(&self) -> Result<Coord> {
        let vertices = self.explode();
        if vertices.is_empty() {
            return Err(GeoFeatureError::Degenerate(
                "center of a geometry without vertices",
            ));
        }
        let n = vertices.len() as f64;
        let (x_sum, y_sum) = vertices
            .iter()
            .fold((0.0, 0.0), |(x, y), c| (x + c.x(), y + c.y()));
        Coord::new(x_sum / n, y_sum / n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{MultiPoint, Polygon};
    use crate::test::c;
    use crate::test::polygon::unit_square;

    #[test]
    fn mean_of_vertices() {
        let multi_point = MultiPoint::new(vec![c(0., 0.), c(2., 2.)]);
        assert_eq!(multi_point.center().unwrap(), c(1., 1.));
    }

    #[test]
    fn closed_ring_counts_its_duplicate_vertex() {
        // unit_square is (0 0, 0 1, 1 1, 1 0, 0 0): five vertices, sums 2/2.
        let polygon = Polygon::new(vec![unit_square()]);
        assert_eq!(polygon.center().unwrap(), c(0.4, 0.4));
    }

    #[test]
    fn zero_vertices_is_an_error() {
        let empty = MultiPoint::new(vec![]);
        assert!(matches!(
            empty.center(),
            Err(GeoFeatureError::Degenerate(_))
        ));
    }
}
