use crate::error::{GeoFeatureError, Result};

/// Mean Earth radius in meters, used for great-circle distances.
const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A single longitude/latitude pair.
///
/// `x` is the longitude and `y` the latitude, matching the X-Y order both
/// WKT and GeoJSON use on the wire. Construction validates the WGS84
/// domain, so a `Coord` held by any geometry is always finite and in
/// range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    x: f64,
    y: f64,
}

impl Coord {
    /// Create a coordinate from a longitude and a latitude.
    ///
    /// Returns [`GeoFeatureError::OutOfRange`] when either value is
    /// non-finite, the longitude is outside `[-180, 180]` or the latitude
    /// is outside `[-90, 90]`.
    pub fn new(x: f64, y: f64) -> Result<Self> {
        if !x.is_finite() || !y.is_finite() || !(-180.0..=180.0).contains(&x) || !(-90.0..=90.0).contains(&y)
        {
            return Err(GeoFeatureError::OutOfRange { lon: x, lat: y });
        }
        Ok(Self { x, y })
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// The longitude, an alias of [`Coord::x`].
    pub fn lng(&self) -> f64 {
        self.x
    }

    /// The latitude, an alias of [`Coord::y`].
    pub fn lat(&self) -> f64 {
        self.y
    }

    /// Great-circle distance to `other` using the [haversine formula].
    ///
    /// # Units
    ///
    /// - return value: meters
    ///
    /// *Note*: this implementation uses a mean earth radius of 6371 km.
    ///
    /// [haversine formula]: https://en.wikipedia.org/wiki/Haversine_formula
    pub fn haversine_distance(&self, other: &Coord) -> f64 {
        let lat1 = self.y.to_radians();
        let lat2 = other.y.to_radians();
        let d_lat = (other.y - self.y).to_radians();
        let d_lng = (other.x - self.x).to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_METERS * a.sqrt().atan2((1.0 - a).sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn valid_domain() {
        assert!(Coord::new(-180.0, -90.0).is_ok());
        assert!(Coord::new(180.0, 90.0).is_ok());
        assert!(Coord::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(
            Coord::new(180.1, 0.0),
            Err(GeoFeatureError::OutOfRange { .. })
        ));
        assert!(matches!(
            Coord::new(0.0, -90.5),
            Err(GeoFeatureError::OutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_non_finite() {
        assert!(Coord::new(f64::NAN, 0.0).is_err());
        assert!(Coord::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn haversine_distance_meters() {
        let a = Coord::new(1.0, 2.0).unwrap();
        let b = Coord::new(3.0, 4.0).unwrap();
        assert_relative_eq!(a.haversine_distance(&b), 314_283.26, epsilon = 1.0);
        // Symmetric, and zero to itself.
        assert_relative_eq!(a.haversine_distance(&b), b.haversine_distance(&a));
        assert_eq!(a.haversine_distance(&a), 0.0);
    }
}
