// Geodesic point module: Contains the (longitude, latitude) coordinate used by every query
// Angles are stored in degrees and converted to unit vectors for great-circle math

use std::hash::{Hash, Hasher};

use anyhow::ensure;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::config::EARTH_MEAN_RADIUS_METERS;
use crate::Result;

/// A point on the earth surface in degrees
///
/// Longitude lies in [-180, 180] and latitude in [-90, 90]. Equality and hashing
/// compare the exact stored values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeodesicPoint {
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
}

impl GeodesicPoint {
    /// Create a point without range checks
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self { longitude, latitude }
    }

    /// Create a point, rejecting non-finite or out-of-range coordinates
    pub fn validated(longitude: f64, latitude: f64) -> Result<Self> {
        ensure!(
            longitude.is_finite() && latitude.is_finite(),
            "coordinates must be finite, got ({longitude}, {latitude})"
        );
        ensure!(
            (-180.0..=180.0).contains(&longitude),
            "longitude {longitude} is outside [-180, 180]"
        );
        ensure!(
            (-90.0..=90.0).contains(&latitude),
            "latitude {latitude} is outside [-90, 90]"
        );
        Ok(Self::new(longitude, latitude))
    }

    /// GeoJSON position `[longitude, latitude]`
    pub fn position(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }

    /// Unit vector of this point on the sphere (x towards 0°E, z towards the north pole)
    pub fn to_cartesian(&self) -> Vector3<f64> {
        let lat = self.latitude.to_radians();
        let lon = self.longitude.to_radians();
        Vector3::new(lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin())
    }

    /// Convert a (not necessarily normalized) cartesian vector back to degrees
    pub fn from_cartesian(cartesian: &Vector3<f64>) -> Self {
        let unit = cartesian.normalize();
        Self::new(
            unit.y.atan2(unit.x).to_degrees(),
            unit.z.clamp(-1.0, 1.0).asin().to_degrees(),
        )
    }

    /// Great-circle distance to another point in meters
    pub fn distance(&self, other: &GeodesicPoint) -> f64 {
        central_angle(&self.to_cartesian(), &other.to_cartesian()) * EARTH_MEAN_RADIUS_METERS
    }
}

impl From<[f64; 2]> for GeodesicPoint {
    fn from(position: [f64; 2]) -> Self {
        Self::new(position[0], position[1])
    }
}

impl From<(f64, f64)> for GeodesicPoint {
    fn from((longitude, latitude): (f64, f64)) -> Self {
        Self::new(longitude, latitude)
    }
}

// Coordinates are finite once validated, so equality is reflexive.
impl Eq for GeodesicPoint {}

impl Hash for GeodesicPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // 0.0 and -0.0 compare equal and must hash alike
        fn bits(value: f64) -> u64 {
            if value == 0.0 { 0 } else { value.to_bits() }
        }
        bits(self.longitude).hash(state);
        bits(self.latitude).hash(state);
    }
}

/// Angle in radians between two unit vectors
///
/// `atan2` of the cross and dot products stays accurate for both tiny and
/// near-antipodal separations, unlike `acos` of the dot product.
pub(crate) fn central_angle(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    a.cross(b).norm().atan2(a.dot(b))
}
