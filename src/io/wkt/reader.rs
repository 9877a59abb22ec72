use crate::error::{GeoFeatureError, Result};
use crate::geometry::{
    Coord, Geometry, LinearRing, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};

/// Decode a geometry from Well-Known Text.
///
/// The keyword is matched case-sensitively and must be followed by a
/// parenthesized body. Whitespace around tokens is insignificant; commas
/// are the only separators. Malformed input fails with
/// [`GeoFeatureError::Format`] quoting the offending fragment.
pub trait FromWkt: Sized {
    fn from_wkt(wkt: &str) -> Result<Self>;
}

/// Strip `TAG(...)` down to the body between the outermost parentheses.
fn tagged_body<'a>(wkt: &'a str, tag: &'static str) -> Result<&'a str> {
    let trimmed = wkt.trim();
    let rest = trimmed.strip_prefix(tag).ok_or_else(|| {
        GeoFeatureError::Format(format!("expected `{tag}(...)`, got `{trimmed}`"))
    })?;
    let rest = rest.trim();
    rest.strip_prefix('(')
        .and_then(|body| body.strip_suffix(')'))
        .ok_or_else(|| {
            GeoFeatureError::Format(format!("`{tag}` body must be parenthesized: `{rest}`"))
        })
}

/// Split on commas at bracket depth zero, rejecting unbalanced parentheses.
fn split_top_level(body: &str) -> Result<Vec<&str>> {
    let mut parts = Vec::new();
    let mut depth = 0u32;
    let mut start = 0;
    for (idx, ch) in body.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    GeoFeatureError::Format(format!("unbalanced `)` at byte {idx} in `{body}`"))
                })?;
            }
            ',' if depth == 0 => {
                parts.push(&body[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(GeoFeatureError::Format(format!(
            "unbalanced `(` in `{body}`"
        )));
    }
    parts.push(&body[start..]);
    Ok(parts)
}

fn strip_parens(part: &str) -> Result<&str> {
    let trimmed = part.trim();
    trimmed
        .strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .ok_or_else(|| {
            GeoFeatureError::Format(format!("expected parenthesized list, got `{trimmed}`"))
        })
}

fn parse_coord(token: &str) -> Result<Coord> {
    let mut fields = token.split_whitespace();
    let (Some(x), Some(y), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(GeoFeatureError::Format(format!(
            "coordinate must be two numeric fields: `{}`",
            token.trim()
        )));
    };
    let x: f64 = x
        .parse()
        .map_err(|_| GeoFeatureError::Format(format!("invalid number `{x}`")))?;
    let y: f64 = y
        .parse()
        .map_err(|_| GeoFeatureError::Format(format!("invalid number `{y}`")))?;
    Coord::new(x, y)
}

fn parse_coords(body: &str) -> Result<Vec<Coord>> {
    split_top_level(body)?.into_iter().map(parse_coord).collect()
}

fn parse_ring(part: &str) -> Result<LinearRing> {
    Ok(LinearRing::new(parse_coords(strip_parens(part)?)?))
}

fn parse_rings(body: &str) -> Result<Vec<LinearRing>> {
    split_top_level(body)?.into_iter().map(parse_ring).collect()
}

impl FromWkt for Point {
    fn from_wkt(wkt: &str) -> Result<Self> {
        let body = tagged_body(wkt, "POINT")?;
        Ok(Point::new(parse_coord(body)?))
    }
}

impl FromWkt for MultiPoint {
    fn from_wkt(wkt: &str) -> Result<Self> {
        let body = tagged_body(wkt, "MULTIPOINT")?;
        let coords = split_top_level(body)?
            .into_iter()
            .map(|token| {
                // Both MULTIPOINT(1 2,3 4) and MULTIPOINT((1 2),(3 4)) circulate.
                let token = token.trim();
                if token.starts_with('(') {
                    parse_coord(strip_parens(token)?)
                } else {
                    parse_coord(token)
                }
            })
            .collect::<Result<_>>()?;
        Ok(MultiPoint::new(coords))
    }
}

impl FromWkt for LineString {
    fn from_wkt(wkt: &str) -> Result<Self> {
        let body = tagged_body(wkt, "LINESTRING")?;
        Ok(LineString::new(parse_coords(body)?))
    }
}

impl FromWkt for MultiLineString {
    fn from_wkt(wkt: &str) -> Result<Self> {
        let body = tagged_body(wkt, "MULTILINESTRING")?;
        let lines = split_top_level(body)?
            .into_iter()
            .map(|part| parse_coords(strip_parens(part)?))
            .collect::<Result<_>>()?;
        Ok(MultiLineString::new(lines))
    }
}

impl FromWkt for Polygon {
    fn from_wkt(wkt: &str) -> Result<Self> {
        let body = tagged_body(wkt, "POLYGON")?;
        Ok(Polygon::new(parse_rings(body)?))
    }
}

impl FromWkt for MultiPolygon {
    fn from_wkt(wkt: &str) -> Result<Self> {
        let body = tagged_body(wkt, "MULTIPOLYGON")?;
        let polygons = split_top_level(body)?
            .into_iter()
            .map(|part| parse_rings(strip_parens(part)?))
            .collect::<Result<_>>()?;
        Ok(MultiPolygon::new(polygons))
    }
}

impl FromWkt for Geometry {
    fn from_wkt(wkt: &str) -> Result<Self> {
        let trimmed = wkt.trim_start();
        if trimmed.starts_with("MULTIPOINT") {
            MultiPoint::from_wkt(wkt).map(Self::MultiPoint)
        } else if trimmed.starts_with("MULTILINESTRING") {
            MultiLineString::from_wkt(wkt).map(Self::MultiLineString)
        } else if trimmed.starts_with("MULTIPOLYGON") {
            MultiPolygon::from_wkt(wkt).map(Self::MultiPolygon)
        } else if trimmed.starts_with("POINT") {
            Point::from_wkt(wkt).map(Self::Point)
        } else if trimmed.starts_with("LINESTRING") {
            LineString::from_wkt(wkt).map(Self::LineString)
        } else if trimmed.starts_with("POLYGON") {
            Polygon::from_wkt(wkt).map(Self::Polygon)
        } else {
            Err(GeoFeatureError::Format(format!(
                "unknown WKT keyword in `{trimmed}`"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::wkt::ToWkt;
    use crate::test::c;
    use crate::test::polygon::{inner_square, unit_square};

    #[test]
    fn point_round_trip() {
        let point = Point::from_wkt("POINT(1 2)").unwrap();
        assert_eq!(point.coord(), c(1., 2.));
        assert_eq!(point.to_wkt(), "POINT(1 2)");
    }

    #[test]
    fn every_kind_round_trips() {
        let texts = [
            "POINT(1 2)",
            "MULTIPOINT(1 2,3 4)",
            "LINESTRING(1 2,3 4,5 6)",
            "MULTILINESTRING((1 2,3 4),(5 6,7 8))",
            "POLYGON((0 0,0 1,1 1,1 0,0 0),(0.25 0.25,0.25 0.75,0.75 0.75,0.75 0.25,0.25 0.25))",
            "MULTIPOLYGON(((0 0,0 1,1 1,1 0,0 0)),((2 0,2 1,3 1,3 0,2 0)))",
        ];
        for text in texts {
            let geometry = Geometry::from_wkt(text).unwrap();
            assert_eq!(geometry.to_wkt(), text, "round trip of `{text}`");
        }
    }

    #[test]
    fn whitespace_between_tokens_is_insignificant() {
        let multi_point = MultiPoint::from_wkt("MULTIPOINT( 1 2 ,  3   4 )").unwrap();
        assert_eq!(multi_point.coords(), &[c(1., 2.), c(3., 4.)]);

        let point = Point::from_wkt("  POINT ( 1   2 )  ").unwrap();
        assert_eq!(point.coord(), c(1., 2.));
    }

    #[test]
    fn parenthesized_multi_point_form() {
        let multi_point = MultiPoint::from_wkt("MULTIPOINT((1 2),(3 4))").unwrap();
        assert_eq!(multi_point.coords(), &[c(1., 2.), c(3., 4.)]);
    }

    #[test]
    fn polygon_rings_are_separated() {
        let polygon = Polygon::from_wkt(
            "POLYGON((0 0,0 1,1 1,1 0,0 0),(0.25 0.25,0.25 0.75,0.75 0.75,0.75 0.25,0.25 0.25))",
        )
        .unwrap();
        assert_eq!(polygon.rings(), &[unit_square(), inner_square()]);
    }

    #[test]
    fn keyword_is_exact_and_case_sensitive() {
        assert!(matches!(
            Point::from_wkt("point(1 2)"),
            Err(GeoFeatureError::Format(_))
        ));
        assert!(matches!(
            Point::from_wkt("LINESTRING(1 2,3 4)"),
            Err(GeoFeatureError::Format(_))
        ));
        // A MULTIPOINT is not a POINT even though the keywords share a suffix.
        assert!(Point::from_wkt("MULTIPOINT(1 2)").is_err());
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert!(matches!(
            Point::from_wkt("POINT(1 2"),
            Err(GeoFeatureError::Format(_))
        ));
        assert!(matches!(
            Polygon::from_wkt("POLYGON((0 0,0 1,1 1)"),
            Err(GeoFeatureError::Format(_))
        ));
        assert!(matches!(
            Point::from_wkt("POINT(1 2 3)"),
            Err(GeoFeatureError::Format(_))
        ));
        assert!(matches!(
            Point::from_wkt("POINT(a 2)"),
            Err(GeoFeatureError::Format(_))
        ));
        assert!(matches!(
            LineString::from_wkt("LINESTRING()"),
            Err(GeoFeatureError::Format(_))
        ));
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        assert!(matches!(
            Point::from_wkt("POINT(181 2)"),
            Err(GeoFeatureError::OutOfRange { .. })
        ));
    }

    #[test]
    fn enum_dispatches_on_the_keyword() {
        assert!(matches!(
            Geometry::from_wkt("MULTIPOINT(1 2)").unwrap(),
            Geometry::MultiPoint(_)
        ));
        assert!(matches!(
            Geometry::from_wkt("POINT(1 2)").unwrap(),
            Geometry::Point(_)
        ));
        assert!(matches!(
            Geometry::from_wkt("CIRCLE(1 2)"),
            Err(GeoFeatureError::Format(_))
        ));
    }
}
