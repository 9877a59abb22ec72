//! Read and write geometries encoded as [Well-Known Text].
//!
//! [Well-Known Text]: https://en.wikipedia.org/wiki/Well-known_text_representation_of_geometry

mod reader;
mod writer;

pub use reader::FromWkt;
pub use writer::ToWkt;
