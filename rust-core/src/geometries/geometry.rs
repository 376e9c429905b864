use anyhow::{bail, ensure};
use log::{debug, trace};

use crate::geometries::coordinates::{positions, ring_positions, Coordinates};
use crate::geometries::geodesic_bounding_box::GeodesicBoundingBox;
use crate::geometries::geodesic_distance::{
    apply_tolerance, distance_to_line, distance_to_points, distance_to_polygon, line_length,
    min_distance, polygon_contains,
};
use crate::geometries::geodesic_point::GeodesicPoint;
use crate::Result;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// GeoJSON geometry type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryKind {
    /// GeoJSON `type` member
    pub fn name(&self) -> &'static str {
        match self {
            GeometryKind::Point => "Point",
            GeometryKind::MultiPoint => "MultiPoint",
            GeometryKind::LineString => "LineString",
            GeometryKind::MultiLineString => "MultiLineString",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPolygon => "MultiPolygon",
            GeometryKind::GeometryCollection => "GeometryCollection",
        }
    }
}

/// Capabilities shared by every geometry that owns coordinates (all kinds but collections)
pub trait CoordinatesGeometry: std::fmt::Debug {
    fn kind(&self) -> GeometryKind;

    /// Bounding box of the owned points, computed at construction
    fn bounding_box(&self) -> GeodesicBoundingBox;

    /// Every owned point, in coordinate order
    fn points(&self) -> Vec<GeodesicPoint>;

    /// Typed GeoJSON coordinate tree
    fn coordinates(&self) -> Coordinates;

    /// Great-circle distance in meters to the nearest feature, minus `tolerance`, never below zero
    fn distance(&self, point: &GeodesicPoint, tolerance: f64) -> f64;

    /// Distance with zero tolerance
    fn distance_to(&self, point: &GeodesicPoint) -> f64 {
        self.distance(point, 0.0)
    }
}

fn bounding_box_of(points: &[GeodesicPoint]) -> Result<GeodesicBoundingBox> {
    GeodesicBoundingBox::from_points(points)
        .ok_or_else(|| anyhow::anyhow!("cannot bound an empty point set"))
}

fn best_of<I>(boxes: I) -> Option<GeodesicBoundingBox>
where
    I: IntoIterator<Item = Option<GeodesicBoundingBox>>,
{
    let boxes: Vec<GeodesicBoundingBox> = boxes.into_iter().flatten().collect();
    GeodesicBoundingBox::best(&boxes)
}

fn validate_ring(ring: &[GeodesicPoint]) -> Result<()> {
    ensure!(ring.len() >= 4, "a linear ring requires at least four points, got {}", ring.len());
    ensure!(ring.first() == ring.last(), "a linear ring must end on its first point");
    Ok(())
}

/// Single position
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    point: GeodesicPoint,
}

impl Point {
    pub fn new(point: GeodesicPoint) -> Self {
        Self { point }
    }

    pub fn point(&self) -> GeodesicPoint {
        self.point
    }
}

impl CoordinatesGeometry for Point {
    fn kind(&self) -> GeometryKind {
        GeometryKind::Point
    }

    fn bounding_box(&self) -> GeodesicBoundingBox {
        let GeodesicPoint { longitude, latitude } = self.point;
        GeodesicBoundingBox::new(longitude, latitude, longitude, latitude)
    }

    fn points(&self) -> Vec<GeodesicPoint> {
        vec![self.point]
    }

    fn coordinates(&self) -> Coordinates {
        Coordinates::Point(self.point.position())
    }

    fn distance(&self, point: &GeodesicPoint, tolerance: f64) -> f64 {
        apply_tolerance(self.point.distance(point), tolerance)
    }
}

/// Unordered set of positions
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint {
    points: Vec<GeodesicPoint>,
    bounding_box: GeodesicBoundingBox,
}

impl MultiPoint {
    pub fn new(points: Vec<GeodesicPoint>) -> Result<Self> {
        ensure!(!points.is_empty(), "a multi point requires at least one point");
        let bounding_box = bounding_box_of(&points)?;
        Ok(Self { points, bounding_box })
    }
}

impl CoordinatesGeometry for MultiPoint {
    fn kind(&self) -> GeometryKind {
        GeometryKind::MultiPoint
    }

    fn bounding_box(&self) -> GeodesicBoundingBox {
        self.bounding_box
    }

    fn points(&self) -> Vec<GeodesicPoint> {
        self.points.clone()
    }

    fn coordinates(&self) -> Coordinates {
        Coordinates::MultiPoint(positions(&self.points))
    }

    fn distance(&self, point: &GeodesicPoint, tolerance: f64) -> f64 {
        apply_tolerance(distance_to_points(point, &self.points), tolerance)
    }
}

/// Polyline of two or more positions
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    points: Vec<GeodesicPoint>,
    bounding_box: GeodesicBoundingBox,
}

impl LineString {
    pub fn new(points: Vec<GeodesicPoint>) -> Result<Self> {
        if points.len() < 2 {
            debug!("Rejecting line string with {} points", points.len());
            bail!("a line string requires at least two points, got {}", points.len());
        }
        let bounding_box = bounding_box_of(&points)?;
        Ok(Self { points, bounding_box })
    }

    /// Arc length in meters
    pub fn length(&self) -> f64 {
        line_length(&self.points)
    }
}

impl CoordinatesGeometry for LineString {
    fn kind(&self) -> GeometryKind {
        GeometryKind::LineString
    }

    fn bounding_box(&self) -> GeodesicBoundingBox {
        self.bounding_box
    }

    fn points(&self) -> Vec<GeodesicPoint> {
        self.points.clone()
    }

    fn coordinates(&self) -> Coordinates {
        Coordinates::LineString(positions(&self.points))
    }

    fn distance(&self, point: &GeodesicPoint, tolerance: f64) -> f64 {
        apply_tolerance(distance_to_line(point, &self.points), tolerance)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineString {
    line_strings: Vec<LineString>,
    bounding_box: GeodesicBoundingBox,
}

impl MultiLineString {
    pub fn new(line_strings: Vec<LineString>) -> Result<Self> {
        ensure!(!line_strings.is_empty(), "a multi line string requires at least one line string");
        let bounding_box = best_of(line_strings.iter().map(|line| Some(line.bounding_box)))
            .ok_or_else(|| anyhow::anyhow!("cannot bound an empty multi line string"))?;
        Ok(Self { line_strings, bounding_box })
    }

    pub fn line_strings(&self) -> &[LineString] {
        &self.line_strings
    }

    /// Summed arc length in meters
    pub fn length(&self) -> f64 {
        self.line_strings.iter().map(LineString::length).sum()
    }
}

impl CoordinatesGeometry for MultiLineString {
    fn kind(&self) -> GeometryKind {
        GeometryKind::MultiLineString
    }

    fn bounding_box(&self) -> GeodesicBoundingBox {
        self.bounding_box
    }

    fn points(&self) -> Vec<GeodesicPoint> {
        self.line_strings.iter().flat_map(|line| line.points.iter().copied()).collect()
    }

    fn coordinates(&self) -> Coordinates {
        Coordinates::MultiLineString(
            self.line_strings.iter().map(|line| positions(&line.points)).collect(),
        )
    }

    fn distance(&self, point: &GeodesicPoint, tolerance: f64) -> f64 {
        min_distance(self.line_strings.iter().map(|line| line.distance(point, tolerance)))
    }
}

/// Exterior ring followed by zero or more holes
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    rings: Vec<Vec<GeodesicPoint>>,
    bounding_box: GeodesicBoundingBox,
}

impl Polygon {
    pub fn new(rings: Vec<Vec<GeodesicPoint>>) -> Result<Self> {
        ensure!(!rings.is_empty(), "a polygon requires an exterior ring");
        for ring in &rings {
            if let Err(error) = validate_ring(ring) {
                debug!("Rejecting polygon ring: {error}");
                return Err(error);
            }
        }
        let bounding_box = GeodesicBoundingBox::from_points(rings.iter().flatten())
            .ok_or_else(|| anyhow::anyhow!("cannot bound an empty polygon"))?;
        Ok(Self { rings, bounding_box })
    }

    pub fn exterior(&self) -> &[GeodesicPoint] {
        &self.rings[0]
    }

    pub fn holes(&self) -> &[Vec<GeodesicPoint>] {
        &self.rings[1..]
    }

    pub fn rings(&self) -> &[Vec<GeodesicPoint>] {
        &self.rings
    }

    /// Check if a point lies inside the exterior ring and outside every hole
    pub fn contains(&self, point: &GeodesicPoint) -> bool {
        polygon_contains(&self.rings, point)
    }

    /// Summed arc length of every ring in meters
    pub fn perimeter(&self) -> f64 {
        self.rings.iter().map(|ring| line_length(ring)).sum()
    }
}

impl CoordinatesGeometry for Polygon {
    fn kind(&self) -> GeometryKind {
        GeometryKind::Polygon
    }

    fn bounding_box(&self) -> GeodesicBoundingBox {
        self.bounding_box
    }

    fn points(&self) -> Vec<GeodesicPoint> {
        self.rings.iter().flatten().copied().collect()
    }

    fn coordinates(&self) -> Coordinates {
        Coordinates::Polygon(ring_positions(&self.rings))
    }

    fn distance(&self, point: &GeodesicPoint, tolerance: f64) -> f64 {
        apply_tolerance(distance_to_polygon(point, &self.rings), tolerance)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
    bounding_box: GeodesicBoundingBox,
}

impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>) -> Result<Self> {
        ensure!(!polygons.is_empty(), "a multi polygon requires at least one polygon");
        let bounding_box = best_of(polygons.iter().map(|polygon| Some(polygon.bounding_box)))
            .ok_or_else(|| anyhow::anyhow!("cannot bound an empty multi polygon"))?;
        Ok(Self { polygons, bounding_box })
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn contains(&self, point: &GeodesicPoint) -> bool {
        self.polygons.iter().any(|polygon| polygon.contains(point))
    }
}

impl CoordinatesGeometry for MultiPolygon {
    fn kind(&self) -> GeometryKind {
        GeometryKind::MultiPolygon
    }

    fn bounding_box(&self) -> GeodesicBoundingBox {
        self.bounding_box
    }

    fn points(&self) -> Vec<GeodesicPoint> {
        self.polygons.iter().flat_map(|polygon| polygon.points()).collect()
    }

    fn coordinates(&self) -> Coordinates {
        Coordinates::MultiPolygon(
            self.polygons.iter().map(|polygon| ring_positions(&polygon.rings)).collect(),
        )
    }

    fn distance(&self, point: &GeodesicPoint, tolerance: f64) -> f64 {
        #[cfg(feature = "parallel")]
        {
            self.polygons
                .par_iter()
                .map(|polygon| polygon.distance(point, tolerance))
                .reduce(|| f64::INFINITY, f64::min)
        }
        #[cfg(not(feature = "parallel"))]
        {
            min_distance(self.polygons.iter().map(|polygon| polygon.distance(point, tolerance)))
        }
    }
}

/// Heterogeneous list of geometries, possibly empty
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryCollection {
    geometries: Vec<Geometry>,
    bounding_box: Option<GeodesicBoundingBox>,
}

impl GeometryCollection {
    pub fn new(geometries: Vec<Geometry>) -> Self {
        let bounding_box = best_of(geometries.iter().map(Geometry::bounding_box));
        Self { geometries, bounding_box }
    }

    /// Direct children, without flattening
    pub fn children(&self) -> &[Geometry] {
        &self.geometries
    }

    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }
}

/// Any geometry kind
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    MultiPoint(MultiPoint),
    LineString(LineString),
    MultiLineString(MultiLineString),
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    pub fn kind(&self) -> GeometryKind {
        match self.as_coordinates_geometry() {
            Some(geometry) => geometry.kind(),
            None => GeometryKind::GeometryCollection,
        }
    }

    /// The coordinates capability of a leaf geometry, `None` for collections
    pub fn as_coordinates_geometry(&self) -> Option<&dyn CoordinatesGeometry> {
        match self {
            Geometry::Point(geometry) => Some(geometry),
            Geometry::MultiPoint(geometry) => Some(geometry),
            Geometry::LineString(geometry) => Some(geometry),
            Geometry::MultiLineString(geometry) => Some(geometry),
            Geometry::Polygon(geometry) => Some(geometry),
            Geometry::MultiPolygon(geometry) => Some(geometry),
            Geometry::GeometryCollection(_) => None,
        }
    }

    /// Bounding box of the geometry; `None` only for a collection without leaves
    pub fn bounding_box(&self) -> Option<GeodesicBoundingBox> {
        match self {
            Geometry::GeometryCollection(collection) => collection.bounding_box,
            leaf => leaf.as_coordinates_geometry().map(|geometry| geometry.bounding_box()),
        }
    }

    /// Every point of the geometry; collections concatenate their children
    pub fn points(&self) -> Vec<GeodesicPoint> {
        match self {
            Geometry::GeometryCollection(collection) => {
                collection.geometries.iter().flat_map(Geometry::points).collect()
            }
            leaf => leaf.as_coordinates_geometry().map(|geometry| geometry.points()).unwrap_or_default(),
        }
    }

    /// Leaf geometries: `[self]` for leaves, the recursively flattened children for collections
    pub fn geometries(&self) -> Vec<&Geometry> {
        match self {
            Geometry::GeometryCollection(collection) => {
                collection.geometries.iter().flat_map(Geometry::geometries).collect()
            }
            leaf => vec![leaf],
        }
    }

    /// Coordinate tree of a leaf geometry, `None` for collections
    pub fn coordinates(&self) -> Option<Coordinates> {
        self.as_coordinates_geometry().map(|geometry| geometry.coordinates())
    }

    /// Smallest leaf distance in meters minus `tolerance`; `None` when there is no leaf
    pub fn distance(&self, point: &GeodesicPoint, tolerance: f64) -> Option<f64> {
        let leaves = self.geometries();

        #[cfg(feature = "parallel")]
        let distances: Vec<f64> = leaves
            .par_iter()
            .filter_map(|leaf| {
                leaf.as_coordinates_geometry()
                    .map(|geometry| geometry.distance(point, tolerance))
            })
            .collect();
        #[cfg(not(feature = "parallel"))]
        let distances: Vec<f64> = leaves
            .iter()
            .filter_map(|leaf| {
                leaf.as_coordinates_geometry()
                    .map(|geometry| geometry.distance(point, tolerance))
            })
            .collect();

        let distance = distances.into_iter().reduce(f64::min);
        trace!("{} distance to {:?}: {:?}", self.kind().name(), point, distance);
        distance
    }

    /// Distance with zero tolerance
    pub fn distance_to(&self, point: &GeodesicPoint) -> Option<f64> {
        self.distance(point, 0.0)
    }
}

impl From<Point> for Geometry {
    fn from(geometry: Point) -> Self {
        Geometry::Point(geometry)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(geometry: MultiPoint) -> Self {
        Geometry::MultiPoint(geometry)
    }
}

impl From<LineString> for Geometry {
    fn from(geometry: LineString) -> Self {
        Geometry::LineString(geometry)
    }
}

impl From<MultiLineString> for Geometry {
    fn from(geometry: MultiLineString) -> Self {
        Geometry::MultiLineString(geometry)
    }
}

impl From<Polygon> for Geometry {
    fn from(geometry: Polygon) -> Self {
        Geometry::Polygon(geometry)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(geometry: MultiPolygon) -> Self {
        Geometry::MultiPolygon(geometry)
    }
}

impl From<GeometryCollection> for Geometry {
    fn from(geometry: GeometryCollection) -> Self {
        Geometry::GeometryCollection(geometry)
    }
}
