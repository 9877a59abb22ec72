use serde_json::{json, Value};

use crate::feature_collection::FeatureCollection;
use crate::geometry::{
    Coord, Geometry, LinearRing, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
use crate::trait_::{Feature, Properties};

/// Encode a feature as a GeoJSON document.
///
/// Geometries become `Feature` documents with the properties inline;
/// [`FeatureCollection`] becomes a `FeatureCollection` document. The
/// innermost coordinate arrays are `[longitude, latitude]`.
pub trait ToGeoJson {
    fn to_geojson(&self) -> Value;
}

fn coord_to_value(coord: &Coord) -> Value {
    json!([coord.x(), coord.y()])
}

fn coords_to_value(coords: &[Coord]) -> Value {
    Value::Array(coords.iter().map(coord_to_value).collect())
}

fn rings_to_value(rings: &[LinearRing]) -> Value {
    Value::Array(rings.iter().map(|ring| coords_to_value(ring.coords())).collect())
}

fn feature_to_value(geometry_type: &str, coordinates: Value, properties: &Properties) -> Value {
    json!({
        "type": "Feature",
        "geometry": {
            "type": geometry_type,
            "coordinates": coordinates,
        },
        "properties": properties,
    })
}

impl ToGeoJson for Point {
    fn to_geojson(&self) -> Value {
        feature_to_value(
            self.geometry_type(),
            coord_to_value(&self.coord()),
            self.properties(),
        )
    }
}

impl ToGeoJson for MultiPoint {
    fn to_geojson(&self) -> Value {
        feature_to_value(
            self.geometry_type(),
            coords_to_value(self.coords()),
            self.properties(),
        )
    }
}

impl ToGeoJson for LineString {
    fn to_geojson(&self) -> Value {
        feature_to_value(
            self.geometry_type(),
            coords_to_value(self.coords()),
            self.properties(),
        )
    }
}

impl ToGeoJson for MultiLineString {
    fn to_geojson(&self) -> Value {
        let coordinates = Value::Array(
            self.lines()
                .iter()
                .map(|line| coords_to_value(line))
                .collect(),
        );
        feature_to_value(self.geometry_type(), coordinates, self.properties())
    }
}

impl ToGeoJson for Polygon {
    fn to_geojson(&self) -> Value {
        feature_to_value(
            self.geometry_type(),
            rings_to_value(self.rings()),
            self.properties(),
        )
    }
}

impl ToGeoJson for MultiPolygon {
    fn to_geojson(&self) -> Value {
        let coordinates = Value::Array(
            self.polygons()
                .iter()
                .map(|rings| rings_to_value(rings))
                .collect(),
        );
        feature_to_value(self.geometry_type(), coordinates, self.properties())
    }
}

impl ToGeoJson for Geometry {
    fn to_geojson(&self) -> Value {
        match self {
            Self::Point(g) => g.to_geojson(),
            Self::MultiPoint(g) => g.to_geojson(),
            Self::LineString(g) => g.to_geojson(),
            Self::MultiLineString(g) => g.to_geojson(),
            Self::Polygon(g) => g.to_geojson(),
            Self::MultiPolygon(g) => g.to_geojson(),
        }
    }
}

impl ToGeoJson for FeatureCollection {
    fn to_geojson(&self) -> Value {
        json!({
            "type": "FeatureCollection",
            "features": self.iter().map(ToGeoJson::to_geojson).collect::<Vec<_>>(),
        })
    }
}
