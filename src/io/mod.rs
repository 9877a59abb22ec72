//! Reading and writing the textual geometry formats.

pub mod display;
pub mod geojson;
pub mod wkt;
