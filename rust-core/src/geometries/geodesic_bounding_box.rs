// Geodesic bounding box module: Contains the (longitude, latitude) axis-aligned bounding box
// This module provides overlap, containment and merge algebra used by every geometry

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::geometries::geodesic_line_segment::GeodesicLineSegment;
use crate::geometries::geodesic_point::GeodesicPoint;

/// Axis-aligned region in (longitude, latitude) space
///
/// A box is always a single non-wrapping rectangle with `min <= max` on both axes.
/// Operations never mutate a box; they return new instances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeodesicBoundingBox {
    min_longitude: f64,
    min_latitude: f64,
    max_longitude: f64,
    max_latitude: f64,
}

impl GeodesicBoundingBox {
    /// Create a bounding box from its four bounds
    ///
    /// # Panics
    /// This function will panic in debug mode if a minimum bound exceeds its maximum
    pub fn new(min_longitude: f64, min_latitude: f64, max_longitude: f64, max_latitude: f64) -> Self {
        debug_assert!(
            min_longitude <= max_longitude && min_latitude <= max_latitude,
            "Minimum bounds must be less than or equal to maximum bounds"
        );
        Self {
            min_longitude,
            min_latitude,
            max_longitude,
            max_latitude,
        }
    }

    /// Create the smallest bounding box containing every point
    ///
    /// # Returns
    /// * `Some(GeodesicBoundingBox)` if there are points to bound
    /// * `None` if the iterator is empty
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a GeodesicPoint>,
    {
        let mut points_iter = points.into_iter();
        let first = points_iter.next()?;

        let initial = Self::new(first.longitude, first.latitude, first.longitude, first.latitude);
        Some(points_iter.fold(initial, |bbox, point| Self {
            min_longitude: bbox.min_longitude.min(point.longitude),
            min_latitude: bbox.min_latitude.min(point.latitude),
            max_longitude: bbox.max_longitude.max(point.longitude),
            max_latitude: bbox.max_latitude.max(point.latitude),
        }))
    }

    pub fn min_longitude(&self) -> f64 {
        self.min_longitude
    }

    pub fn min_latitude(&self) -> f64 {
        self.min_latitude
    }

    pub fn max_longitude(&self) -> f64 {
        self.max_longitude
    }

    pub fn max_latitude(&self) -> f64 {
        self.max_latitude
    }

    /// Width of the box in degrees of longitude
    pub fn longitude_delta(&self) -> f64 {
        self.max_longitude - self.min_longitude
    }

    /// Height of the box in degrees of latitude
    pub fn latitude_delta(&self) -> f64 {
        self.max_latitude - self.min_latitude
    }

    /// Midpoint of the bounds on both axes
    pub fn centroid(&self) -> GeodesicPoint {
        GeodesicPoint::new(
            (self.min_longitude + self.max_longitude) / 2.0,
            (self.min_latitude + self.max_latitude) / 2.0,
        )
    }

    /// The four corners: (min, min), (min, max), (max, max), (max, min)
    pub fn points(&self) -> [GeodesicPoint; 4] {
        [
            GeodesicPoint::new(self.min_longitude, self.min_latitude),
            GeodesicPoint::new(self.min_longitude, self.max_latitude),
            GeodesicPoint::new(self.max_longitude, self.max_latitude),
            GeodesicPoint::new(self.max_longitude, self.min_latitude),
        ]
    }

    /// The four edges joining consecutive corners, closing back on the first corner
    pub fn segments(&self) -> [GeodesicLineSegment; 4] {
        let [a, b, c, d] = self.points();
        [
            GeodesicLineSegment::new(a, b),
            GeodesicLineSegment::new(b, c),
            GeodesicLineSegment::new(c, d),
            GeodesicLineSegment::new(d, a),
        ]
    }

    /// Check if a point lies inside the box, both axes widened by `tolerance` degrees
    ///
    /// Bounds are inclusive.
    pub fn contains(&self, point: &GeodesicPoint, tolerance: f64) -> bool {
        point.longitude >= self.min_longitude - tolerance
            && point.longitude <= self.max_longitude + tolerance
            && point.latitude >= self.min_latitude - tolerance
            && point.latitude <= self.max_latitude + tolerance
    }

    /// Check if this box completely contains another box
    pub fn contains_bounding_box(&self, other: &GeodesicBoundingBox) -> bool {
        self.min_longitude <= other.min_longitude
            && self.max_longitude >= other.max_longitude
            && self.min_latitude <= other.min_latitude
            && self.max_latitude >= other.max_latitude
    }

    /// Check if the two boxes intersect, each widened by `tolerance` degrees
    ///
    /// Boxes touching at an edge overlap. Works on the stored rectangles; no
    /// antimeridian wraparound is considered.
    pub fn overlaps(&self, other: &GeodesicBoundingBox, tolerance: f64) -> bool {
        let margin = 2.0 * tolerance;
        self.min_longitude <= other.max_longitude + margin
            && self.max_longitude + margin >= other.min_longitude
            && self.min_latitude <= other.max_latitude + margin
            && self.max_latitude + margin >= other.min_latitude
    }

    /// Check if either axis has zero extent
    pub fn is_degenerate(&self) -> bool {
        self.min_longitude == self.max_longitude || self.min_latitude == self.max_latitude
    }

    /// Widen every degenerate axis by `minimum_adjustment` on both sides
    ///
    /// Axes with a non-zero extent are left untouched.
    pub fn valid_bounding_box(&self, minimum_adjustment: f64) -> GeodesicBoundingBox {
        let mut adjusted = *self;

        if self.min_longitude == self.max_longitude {
            debug!("Widening zero-width longitude span at {}", self.min_longitude);
            adjusted.min_longitude -= minimum_adjustment;
            adjusted.max_longitude += minimum_adjustment;
        }

        if self.min_latitude == self.max_latitude {
            debug!("Widening zero-height latitude span at {}", self.min_latitude);
            adjusted.min_latitude -= minimum_adjustment;
            adjusted.max_latitude += minimum_adjustment;
        }

        adjusted
    }

    /// Expand the box by a margin in all directions
    pub fn expand(&self, margin: f64) -> GeodesicBoundingBox {
        Self::new(
            self.min_longitude - margin,
            self.min_latitude - margin,
            self.max_longitude + margin,
            self.max_latitude + margin,
        )
    }

    /// Smallest box containing both boxes
    pub fn union(&self, other: &GeodesicBoundingBox) -> GeodesicBoundingBox {
        Self {
            min_longitude: self.min_longitude.min(other.min_longitude),
            min_latitude: self.min_latitude.min(other.min_latitude),
            max_longitude: self.max_longitude.max(other.max_longitude),
            max_latitude: self.max_latitude.max(other.max_latitude),
        }
    }

    /// Smallest box enclosing every input box
    ///
    /// # Returns
    /// * `None` for an empty slice
    /// * the single box unchanged for a one-element slice
    /// * the min/max union of all bounds otherwise
    pub fn best(boxes: &[GeodesicBoundingBox]) -> Option<GeodesicBoundingBox> {
        let (first, rest) = boxes.split_first()?;
        trace!("Merging {} bounding boxes", boxes.len());

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            Some(
                rest.par_iter()
                    .fold(|| *first, |acc, bbox| acc.union(bbox))
                    .reduce(|| *first, |a, b| a.union(&b)),
            )
        }
        #[cfg(not(feature = "parallel"))]
        {
            Some(rest.iter().fold(*first, |acc, bbox| acc.union(bbox)))
        }
    }
}
