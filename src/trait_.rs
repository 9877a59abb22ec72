use serde_json::{Map, Value};

/// The property map carried by every feature: string keys, arbitrary JSON
/// values, insertion order irrelevant.
pub type Properties = Map<String, Value>;

/// The contract shared by every geometry kind.
///
/// A feature is a geometry together with a property map. The codec traits
/// ([`ToWkt`], [`FromWkt`], [`ToGeoJson`], [`FromGeoJson`]) and the algorithm
/// traits ([`Explode`], [`Center`], ...) build on this.
///
/// [`ToWkt`]: crate::io::wkt::ToWkt
/// [`FromWkt`]: crate::io::wkt::FromWkt
/// [`ToGeoJson`]: crate::io::geojson::ToGeoJson
/// [`FromGeoJson`]: crate::io::geojson::FromGeoJson
/// [`Explode`]: crate::algorithm::Explode
/// [`Center`]: crate::algorithm::Center
pub trait Feature {
    /// The GeoJSON `geometry.type` tag of this feature, e.g. `"MultiPoint"`.
    fn geometry_type(&self) -> &'static str;

    /// The feature's property map.
    fn properties(&self) -> &Properties;

    /// Mutable access to the feature's property map.
    fn properties_mut(&mut self) -> &mut Properties;
}
