// Coordinates module: Contains the typed GeoJSON coordinate tree of each geometry kind
// Serializes to the nested numeric arrays of the GeoJSON coordinate grammar

use serde::Serialize;

use crate::geometries::geodesic_point::GeodesicPoint;

/// GeoJSON position `[longitude, latitude]`
pub type Position = [f64; 2];

/// Coordinate tree of a leaf geometry
///
/// Each variant nests one level deeper than its singular form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Coordinates {
    Point(Position),
    MultiPoint(Vec<Position>),
    LineString(Vec<Position>),
    MultiLineString(Vec<Vec<Position>>),
    Polygon(Vec<Vec<Position>>),
    MultiPolygon(Vec<Vec<Vec<Position>>>),
}

pub(crate) fn positions(points: &[GeodesicPoint]) -> Vec<Position> {
    points.iter().map(GeodesicPoint::position).collect()
}

pub(crate) fn ring_positions(rings: &[Vec<GeodesicPoint>]) -> Vec<Vec<Position>> {
    rings.iter().map(|ring| positions(ring)).collect()
}
