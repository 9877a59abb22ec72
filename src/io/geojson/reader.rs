use serde::Deserialize;
use serde_json::Value;

use crate::error::{GeoFeatureError, Result};
use crate::geometry::{
    Coord, Geometry, LinearRing, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
use crate::trait_::Properties;

/// Decode a feature from a GeoJSON `Feature` document.
///
/// The document's `geometry.type` must match the target kind exactly,
/// otherwise decoding fails with [`GeoFeatureError::IncorrectType`].
/// Missing or `null` properties default to an empty map. Coordinate trees
/// are validated before any geometry is built; leaves must be
/// two-element numeric arrays.
pub trait FromGeoJson: Sized {
    fn from_geojson(value: &Value) -> Result<Self>;

    fn from_geojson_str(geojson: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(geojson)?;
        Self::from_geojson(&value)
    }
}

/// Typed intermediate for the decode boundary; shape mismatches fail here
/// instead of deep inside coordinate conversion.
#[derive(Deserialize)]
struct FeatureDoc {
    geometry: GeometryDoc,
    #[serde(default)]
    properties: Option<Properties>,
}

#[derive(Deserialize)]
struct GeometryDoc {
    #[serde(rename = "type")]
    kind: String,
    coordinates: Value,
}

fn decode_feature(value: &Value, expected: &'static str) -> Result<(Value, Properties)> {
    let doc: FeatureDoc = serde_json::from_value(value.clone())?;
    if doc.geometry.kind != expected {
        return Err(GeoFeatureError::IncorrectType {
            expected,
            actual: doc.geometry.kind,
        });
    }
    Ok((doc.geometry.coordinates, doc.properties.unwrap_or_default()))
}

fn coord_from_value(value: &Value) -> Result<Coord> {
    let pair = value.as_array().ok_or_else(|| {
        GeoFeatureError::Format(format!("coordinate must be an array, got {value}"))
    })?;
    let [x, y] = pair.as_slice() else {
        return Err(GeoFeatureError::Format(format!(
            "coordinate must have exactly two elements, got {value}"
        )));
    };
    let (Some(x), Some(y)) = (x.as_f64(), y.as_f64()) else {
        return Err(GeoFeatureError::Format(format!(
            "coordinate elements must be numbers, got {value}"
        )));
    };
    Coord::new(x, y)
}

fn array_of<'a>(value: &'a Value, what: &str) -> Result<&'a Vec<Value>> {
    value.as_array().ok_or_else(|| {
        GeoFeatureError::Format(format!("{what} must be an array, got {value}"))
    })
}

fn coords_from_value(value: &Value) -> Result<Vec<Coord>> {
    array_of(value, "coordinate list")?
        .iter()
        .map(coord_from_value)
        .collect()
}

fn rings_from_value(value: &Value) -> Result<Vec<LinearRing>> {
    array_of(value, "ring list")?
        .iter()
        .map(|ring| Ok(LinearRing::new(coords_from_value(ring)?)))
        .collect()
}

impl FromGeoJson for Point {
    fn from_geojson(value: &Value) -> Result<Self> {
        let (coordinates, properties) = decode_feature(value, "Point")?;
        Ok(Point::with_properties(
            coord_from_value(&coordinates)?,
            properties,
        ))
    }
}

impl FromGeoJson for MultiPoint {
    fn from_geojson(value: &Value) -> Result<Self> {
        let (coordinates, properties) = decode_feature(value, "MultiPoint")?;
        Ok(MultiPoint::with_properties(
            coords_from_value(&coordinates)?,
            properties,
        ))
    }
}

impl FromGeoJson for LineString {
    fn from_geojson(value: &Value) -> Result<Self> {
        let (coordinates, properties) = decode_feature(value, "LineString")?;
        Ok(LineString::with_properties(
            coords_from_value(&coordinates)?,
            properties,
        ))
    }
}

impl FromGeoJson for MultiLineString {
    fn from_geojson(value: &Value) -> Result<Self> {
        let (coordinates, properties) = decode_feature(value, "MultiLineString")?;
        let lines = array_of(&coordinates, "line list")?
            .iter()
            .map(coords_from_value)
            .collect::<Result<_>>()?;
        Ok(MultiLineString::with_properties(lines, properties))
    }
}

impl FromGeoJson for Polygon {
    fn from_geojson(value: &Value) -> Result<Self> {
        let (coordinates, properties) = decode_feature(value, "Polygon")?;
        Ok(Polygon::with_properties(
            rings_from_value(&coordinates)?,
            properties,
        ))
    }
}

impl FromGeoJson for MultiPolygon {
    fn from_geojson(value: &Value) -> Result<Self> {
        let (coordinates, properties) = decode_feature(value, "MultiPolygon")?;
        let polygons = array_of(&coordinates, "polygon list")?
            .iter()
            .map(rings_from_value)
            .collect::<Result<_>>()?;
        Ok(MultiPolygon::with_properties(polygons, properties))
    }
}

impl FromGeoJson for Geometry {
    fn from_geojson(value: &Value) -> Result<Self> {
        let kind = value
            .pointer("/geometry/type")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                GeoFeatureError::Format("feature document has no geometry.type".to_string())
            })?;
        match kind {
            "Point" => Point::from_geojson(value).map(Self::Point),
            "MultiPoint" => MultiPoint::from_geojson(value).map(Self::MultiPoint),
            "LineString" => LineString::from_geojson(value).map(Self::LineString),
            "MultiLineString" => MultiLineString::from_geojson(value).map(Self::MultiLineString),
            "Polygon" => Polygon::from_geojson(value).map(Self::Polygon),
            "MultiPolygon" => MultiPolygon::from_geojson(value).map(Self::MultiPolygon),
            other => Err(GeoFeatureError::Format(format!(
                "unsupported geometry type `{other}`"
            ))),
        }
    }
}
