//! Vector geographic features (points, lines, polygons and their
//! multi-part variants), converted between an in-memory model, Well-Known
//! Text and GeoJSON `Feature` documents, plus a small set of spherical
//! measures over them.
//!
//! The model lives in [`geometry`]; the codecs in [`io::wkt`] and
//! [`io::geojson`]; the operations (vertex explosion, mean-vertex center,
//! haversine length, Chamberlain-Duquette area, multi-part union and
//! flatten) in [`algorithm`].
//!
//! ```
//! use geofeature::algorithm::HaversineLength;
//! use geofeature::io::wkt::{FromWkt, ToWkt};
//! use geofeature::geometry::LineString;
//!
//! # fn main() -> geofeature::error::Result<()> {
//! let line = LineString::from_wkt("LINESTRING(1 2,3 4)")?;
//! assert_eq!(line.to_wkt(), "LINESTRING(1 2,3 4)");
//! assert_eq!(line.haversine_length().round(), 314_283.0);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use trait_::{Feature, Properties};

pub mod algorithm;
pub mod error;
pub mod feature_collection;
pub mod geometry;
pub mod io;
#[cfg(test)]
pub(crate) mod test;
pub mod trait_;
