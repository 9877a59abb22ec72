use crate::geometry::{MultiLineString, MultiPoint, MultiPolygon};
use crate::Feature;

/// Concatenate two same-kind multi-part geometries.
///
/// The result's parts are `self`'s parts followed by `other`'s, in order.
/// The result's properties are a deep copy of `self`'s only; `other`'s
/// properties are discarded, and later mutation of either source leaves
/// the result untouched.
pub trait Union {
    fn union(&self, other: &Self) -> Self;
}

impl Union for MultiPoint {
    fn union(&self, other: &Self) -> Self {
        let coords = [self.coords(), other.coords()].concat();
        Self::with_properties(coords, self.properties().clone())
    }
}

impl Union for MultiLineString {
    fn union(&self, other: &Self) -> Self {
        let lines = [self.lines(), other.lines()].concat();
        Self::with_properties(lines, self.properties().clone())
    }
}

impl Union for MultiPolygon {
    fn union(&self, other: &Self) -> Self {
        let polygons = [self.polygons(), other.polygons()].concat();
        Self::with_properties(polygons, self.properties().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::c;
    use crate::test::polygon::{shifted_square, unit_square};
    use crate::test::properties::properties;
    use serde_json::json;

    #[test]
    fn multi_polygon_parts_concatenate_in_order() {
        let a = MultiPolygon::new(vec![vec![unit_square()]]);
        let b = MultiPolygon::new(vec![vec![shifted_square()]]);

        let union = a.union(&b);
        assert_eq!(
            union.polygons(),
            &[vec![unit_square()], vec![shifted_square()]]
        );
    }

    #[test]
    fn part_counts_add() {
        let a = MultiPoint::new(vec![c(1., 2.), c(3., 4.)]);
        let b = MultiPoint::new(vec![c(5., 6.)]);
        assert_eq!(
            a.union(&b).num_points(),
            a.num_points() + b.num_points()
        );
        assert_eq!(b.union(&a).coords()[0], c(5., 6.));
    }

    #[test]
    fn properties_come_from_self_only() {
        let mut b_properties = properties();
        b_properties.insert("side".into(), json!("other"));

        let a = MultiLineString::with_properties(vec![vec![c(1., 2.), c(3., 4.)]], properties());
        let b = MultiLineString::with_properties(vec![vec![c(5., 6.), c(7., 8.)]], b_properties);

        let union = a.union(&b);
        assert_eq!(union.properties(), a.properties());
        assert!(!union.properties().contains_key("side"));
    }

    #[test]
    fn properties_are_deep_copied() {
        let mut a = MultiPoint::with_properties(vec![c(1., 2.)], properties());
        let union = a.union(&MultiPoint::new(vec![c(3., 4.)]));

        a.properties_mut().insert("mutated".into(), json!(true));
        assert!(!union.properties().contains_key("mutated"));
    }
}
