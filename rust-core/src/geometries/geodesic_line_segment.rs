use serde::{Deserialize, Serialize};

use crate::geometries::geodesic_bounding_box::GeodesicBoundingBox;
use crate::geometries::geodesic_distance::distance_to_segment;
use crate::geometries::geodesic_point::GeodesicPoint;

/// Shortest great-circle arc between two points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeodesicLineSegment {
    pub start: GeodesicPoint,
    pub end: GeodesicPoint,
}

impl GeodesicLineSegment {
    pub fn new(start: GeodesicPoint, end: GeodesicPoint) -> Self {
        Self { start, end }
    }

    /// Arc length in meters
    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }

    /// Box spanned by the two endpoints
    pub fn bounding_box(&self) -> GeodesicBoundingBox {
        GeodesicBoundingBox::new(
            self.start.longitude.min(self.end.longitude),
            self.start.latitude.min(self.end.latitude),
            self.start.longitude.max(self.end.longitude),
            self.start.latitude.max(self.end.latitude),
        )
    }

    /// Distance in meters from a point to the nearest point on the arc
    pub fn distance(&self, point: &GeodesicPoint) -> f64 {
        distance_to_segment(point, self)
    }
}
