//! An ordered container of heterogeneous features.

use crate::geometry::Geometry;

/// An ordered sequence of features of mixed geometry kind.
///
/// Produced by [`Flatten`] and usable as a generic container. Each element
/// is individually valid; the collection adds no invariants of its own.
///
/// [`Flatten`]: crate::algorithm::Flatten
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureCollection {
    features: Vec<Geometry>,
}

impl FeatureCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn features(&self) -> &[Geometry] {
        &self.features
    }

    pub fn features_mut(&mut self) -> &mut Vec<Geometry> {
        &mut self.features
    }

    pub fn push(&mut self, feature: impl Into<Geometry>) {
        self.features.push(feature.into());
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Geometry> {
        self.features.iter()
    }
}

impl From<Vec<Geometry>> for FeatureCollection {
    fn from(features: Vec<Geometry>) -> Self {
        Self { features }
    }
}

impl FromIterator<Geometry> for FeatureCollection {
    fn from_iter<T: IntoIterator<Item = Geometry>>(iter: T) -> Self {
        Self {
            features: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for FeatureCollection {
    type Item = Geometry;
    type IntoIter = std::vec::IntoIter<Geometry>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.into_iter()
    }
}

impl<'a> IntoIterator for &'a FeatureCollection {
    type Item = &'a Geometry;
    type IntoIter = std::slice::Iter<'a, Geometry>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}
