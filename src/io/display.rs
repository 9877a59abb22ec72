//! `Display` renders every geometry as its WKT text.

use std::fmt;

use crate::geometry::{
    Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};
use crate::io::wkt::ToWkt;

macro_rules! impl_display {
    ($($type:ty),* $(,)?) => {
        $(
            impl fmt::Display for $type {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.to_wkt())
                }
            }
        )*
    };
}

impl_display!(
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    Geometry,
);

#[cfg(test)]
mod tests {
    use crate::geometry::{Geometry, MultiPoint, Point};
    use crate::test::c;

    #[test]
    fn renders_as_wkt() {
        assert_eq!(Point::new(c(1., 2.)).to_string(), "POINT(1 2)");
        assert_eq!(
            MultiPoint::new(vec![c(1., 2.), c(3., 4.)]).to_string(),
            "MULTIPOINT(1 2,3 4)"
        );
        let geometry: Geometry = Point::new(c(1., 2.)).into();
        assert_eq!(geometry.to_string(), "POINT(1 2)");
    }
}
