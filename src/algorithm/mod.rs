//! Geometric operations implemented on the feature model.

/// Compute the mean-vertex center of a geometry.
pub mod center;
pub use center::Center;

/// Calculate the unsigned approximate geodesic area of a geometry.
pub mod chamberlain_duquette_area;
pub use chamberlain_duquette_area::ChamberlainDuquetteArea;

/// Extract the ordered vertex list of a geometry.
pub mod explode;
pub use explode::Explode;

/// Decompose multi-part geometries into single-part features.
pub mod flatten;
pub use flatten::Flatten;

/// Determine the length of a geometry using the haversine formula.
pub mod haversine_length;
pub use haversine_length::HaversineLength;

/// Concatenate same-kind multi-part geometries.
pub mod union;
pub use union::Union;
