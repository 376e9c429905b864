// Geometries module: Contains the geodesic geometry types and the algebra shared by all of them
// This module provides bounding-box merging and great-circle distance queries on (longitude, latitude) data

// ======================== MODULE DECLARATIONS ========================
pub mod coordinates;
pub mod geodesic_bounding_box;
pub mod geodesic_distance;
pub mod geodesic_line_segment;
pub mod geodesic_point;
pub mod geometry;

mod _tests_geometry;

// ======================== COORDINATE PRIMITIVES ========================
pub use geodesic_point::GeodesicPoint; // struct - (longitude, latitude) in degrees
// GeodesicPoint impl methods:
//   new(longitude: f64, latitude: f64) -> Self               - creates point without range checks
//   validated(longitude: f64, latitude: f64) -> Result<Self> - creates point, rejecting out-of-range values
//   position(&self) -> [f64; 2]                              - returns GeoJSON position
//   to_cartesian(&self) -> Vector3<f64>                      - returns unit vector on the sphere
//   distance(&self, other: &GeodesicPoint) -> f64            - great-circle distance in meters

pub use geodesic_line_segment::GeodesicLineSegment; // struct - great-circle arc between two points
// GeodesicLineSegment impl methods:
//   new(start, end) -> Self                                  - creates segment
//   length(&self) -> f64                                     - arc length in meters
//   bounding_box(&self) -> GeodesicBoundingBox               - box spanned by the endpoints
//   distance(&self, point: &GeodesicPoint) -> f64            - distance to the nearest point on the arc

pub use coordinates::{
    Coordinates, // enum - typed GeoJSON coordinate tree, serializes to nested arrays
    Position,    // type - [longitude, latitude]
};

// ======================== BOUNDING BOX ALGEBRA ========================
pub use geodesic_bounding_box::GeodesicBoundingBox; // struct - non-wrapping (longitude, latitude) rectangle
// GeodesicBoundingBox impl methods:
//   new(min_lon, min_lat, max_lon, max_lat) -> Self          - creates box from bounds
//   from_points(points) -> Option<Self>                      - min/max fold, None when empty
//   longitude_delta / latitude_delta(&self) -> f64           - extent per axis
//   centroid(&self) -> GeodesicPoint                         - midpoint of the bounds
//   points(&self) -> [GeodesicPoint; 4]                      - corners (min,min) (min,max) (max,max) (max,min)
//   segments(&self) -> [GeodesicLineSegment; 4]              - edges between consecutive corners
//   contains(&self, point, tolerance) -> bool                - inclusive point test with degree margin
//   overlaps(&self, other, tolerance) -> bool                - inclusive box intersection with degree margin
//   valid_bounding_box(&self, minimum_adjustment) -> Self    - widens degenerate axes
//   union(&self, other) -> Self                              - min/max union of two boxes
//   best(boxes: &[Self]) -> Option<Self>                     - min/max union of many boxes, None when empty

// ======================== DISTANCE ENGINE ========================
pub use geodesic_distance::{
    apply_tolerance,     // fn(raw: f64, tolerance: f64) -> f64 - subtracts tolerance, clamps at zero
    distance_to_line,    // fn(point, line: &[GeodesicPoint]) -> f64 - nearest segment of a polyline
    distance_to_polygon, // fn(point, rings: &[Vec<GeodesicPoint>]) -> f64 - zero inside, else nearest ring
    distance_to_ring,    // fn(point, ring: &[GeodesicPoint]) -> f64 - nearest segment of a closed ring
    distance_to_segment, // fn(point, segment: &GeodesicLineSegment) -> f64 - cross-track or endpoint distance
    polygon_contains,    // fn(rings, point) -> bool - inside exterior and outside every hole
};

// ======================== GEOMETRY VARIANTS ========================
pub use geometry::{
    CoordinatesGeometry, // trait - bounding_box, points, coordinates, distance for leaf geometries
    Geometry,            // enum - any geometry kind, including collections
    GeometryCollection,  // struct - possibly empty list of geometries
    GeometryKind,        // enum - GeoJSON type tag
    LineString,          // struct - two or more points
    MultiLineString,     // struct - one or more line strings
    MultiPoint,          // struct - one or more points
    MultiPolygon,        // struct - one or more polygons
    Point,               // struct - single point
    Polygon,             // struct - exterior ring plus holes
};
// Geometry impl methods:
//   kind(&self) -> GeometryKind                              - GeoJSON type tag
//   bounding_box(&self) -> Option<GeodesicBoundingBox>       - None only for an empty collection
//   points(&self) -> Vec<GeodesicPoint>                      - owned points, concatenated for collections
//   geometries(&self) -> Vec<&Geometry>                      - [self] for leaves, flattened leaves for collections
//   coordinates(&self) -> Option<Coordinates>                - None for collections
//   distance(&self, point, tolerance) -> Option<f64>         - minimum over leaves, None without leaves
