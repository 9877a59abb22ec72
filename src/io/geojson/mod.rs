//! Read and write features encoded as [GeoJSON] documents.
//!
//! [GeoJSON]: https://geojson.org/

mod reader;
mod writer;

pub use reader::FromGeoJson;
pub use writer::ToGeoJson;
