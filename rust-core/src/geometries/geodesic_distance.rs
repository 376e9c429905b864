// Geodesic distance module: Contains the point-to-feature distance engine shared by all geometries
// Distances are great-circle distances in meters on a sphere of radius EARTH_MEAN_RADIUS_METERS

use crate::config::{EARTH_MEAN_RADIUS_METERS, GEODESIC_TOLERANCE};
use crate::geometries::geodesic_line_segment::GeodesicLineSegment;
use crate::geometries::geodesic_point::{central_angle, GeodesicPoint};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Subtract a tolerance from a raw distance, never going below zero
///
/// Callers treat a result of `0.0` as "within tolerance of the geometry".
pub fn apply_tolerance(raw_distance: f64, tolerance: f64) -> f64 {
    (raw_distance - tolerance).max(0.0)
}

/// Smallest value of a sequence of distances, `f64::INFINITY` when empty
pub fn min_distance<I>(distances: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    distances.into_iter().fold(f64::INFINITY, f64::min)
}

/// Distance in meters from a point to the nearest point of a great-circle arc
///
/// Uses the cross-track distance when the point projects inside the arc and the
/// nearer endpoint otherwise. The result never exceeds either endpoint distance,
/// so a point on a vertex is exactly zero.
pub fn distance_to_segment(point: &GeodesicPoint, segment: &GeodesicLineSegment) -> f64 {
    let p = point.to_cartesian();
    let a = segment.start.to_cartesian();
    let b = segment.end.to_cartesian();

    let endpoint_angle = central_angle(&p, &a).min(central_angle(&p, &b));

    // Zero-length or antipodal arcs have no unique great circle
    let normal = a.cross(&b);
    let normal_length = normal.norm();
    if normal_length < GEODESIC_TOLERANCE {
        return endpoint_angle * EARTH_MEAN_RADIUS_METERS;
    }
    let normal = normal / normal_length;

    let offset = p.dot(&normal);
    let projected = p - normal * offset;
    if projected.norm() < GEODESIC_TOLERANCE {
        // The point is a pole of the arc's great circle
        return endpoint_angle * EARTH_MEAN_RADIUS_METERS;
    }

    let within_arc =
        a.cross(&projected).dot(&normal) >= 0.0 && projected.cross(&b).dot(&normal) >= 0.0;

    let angle = if within_arc {
        offset.abs().min(1.0).asin().min(endpoint_angle)
    } else {
        endpoint_angle
    };

    angle * EARTH_MEAN_RADIUS_METERS
}

/// Distance in meters to the nearest point of a set
pub fn distance_to_points(point: &GeodesicPoint, points: &[GeodesicPoint]) -> f64 {
    #[cfg(feature = "parallel")]
    let distances = points.par_iter().map(|other| point.distance(other));
    #[cfg(not(feature = "parallel"))]
    let distances = points.iter().map(|other| point.distance(other));

    distances.reduce_min()
}

/// Distance in meters to an open polyline, checking every consecutive vertex pair
pub fn distance_to_line(point: &GeodesicPoint, line: &[GeodesicPoint]) -> f64 {
    if line.len() < 2 {
        return distance_to_points(point, line);
    }

    #[cfg(feature = "parallel")]
    let distances = line
        .par_windows(2)
        .map(|pair| distance_to_segment(point, &GeodesicLineSegment::new(pair[0], pair[1])));
    #[cfg(not(feature = "parallel"))]
    let distances = line
        .windows(2)
        .map(|pair| distance_to_segment(point, &GeodesicLineSegment::new(pair[0], pair[1])));

    distances.reduce_min()
}

/// Distance in meters to a ring, whose last vertex connects back to its first
pub fn distance_to_ring(point: &GeodesicPoint, ring: &[GeodesicPoint]) -> f64 {
    let open = distance_to_line(point, ring);
    match (ring.first(), ring.last()) {
        (Some(first), Some(last)) if first != last => {
            open.min(distance_to_segment(point, &GeodesicLineSegment::new(*last, *first)))
        }
        _ => open,
    }
}

/// Ray-casting point-in-ring test on (longitude, latitude)
pub fn ring_contains(ring: &[GeodesicPoint], point: &GeodesicPoint) -> bool {
    let mut inside = false;
    let n = ring.len();

    for i in 0..n {
        let v1 = ring[i];
        let v2 = ring[(i + 1) % n];

        if ((v1.latitude > point.latitude) != (v2.latitude > point.latitude))
            && (point.longitude
                < (v2.longitude - v1.longitude) * (point.latitude - v1.latitude)
                    / (v2.latitude - v1.latitude)
                    + v1.longitude)
        {
            inside = !inside;
        }
    }

    inside
}

/// Check if a point lies inside the exterior ring and outside every hole
pub fn polygon_contains(rings: &[Vec<GeodesicPoint>], point: &GeodesicPoint) -> bool {
    match rings.split_first() {
        Some((exterior, holes)) => {
            ring_contains(exterior, point) && !holes.iter().any(|hole| ring_contains(hole, point))
        }
        None => false,
    }
}

/// Distance in meters to a polygon: zero inside, otherwise the nearest ring boundary
pub fn distance_to_polygon(point: &GeodesicPoint, rings: &[Vec<GeodesicPoint>]) -> f64 {
    if polygon_contains(rings, point) {
        return 0.0;
    }
    min_distance(rings.iter().map(|ring| distance_to_ring(point, ring)))
}

/// Total arc length in meters of a polyline
pub fn line_length(line: &[GeodesicPoint]) -> f64 {
    line.windows(2).map(|pair| pair[0].distance(&pair[1])).sum()
}

/// Minimum reduction over sequential or parallel distance iterators
trait ReduceMin {
    fn reduce_min(self) -> f64;
}

#[cfg(not(feature = "parallel"))]
impl<I: Iterator<Item = f64>> ReduceMin for I {
    fn reduce_min(self) -> f64 {
        min_distance(self)
    }
}

#[cfg(feature = "parallel")]
impl<I: ParallelIterator<Item = f64>> ReduceMin for I {
    fn reduce_min(self) -> f64 {
        self.reduce(|| f64::INFINITY, f64::min)
    }
}
