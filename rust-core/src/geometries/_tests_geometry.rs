#[cfg(test)]
mod _tests_geometry {
    use super::super::coordinates::Coordinates;
    use super::super::geodesic_bounding_box::GeodesicBoundingBox;
    use super::super::geodesic_point::GeodesicPoint;
    use super::super::geometry::*;
    use crate::config::EARTH_MEAN_RADIUS_METERS;
    use approx::assert_relative_eq;

    fn p(longitude: f64, latitude: f64) -> GeodesicPoint {
        GeodesicPoint::new(longitude, latitude)
    }

    fn meters_per_degree() -> f64 {
        EARTH_MEAN_RADIUS_METERS * 1.0_f64.to_radians()
    }

    fn square(min: f64, max: f64) -> Vec<GeodesicPoint> {
        vec![p(min, min), p(max, min), p(max, max), p(min, max), p(min, min)]
    }

    fn line() -> LineString {
        LineString::new(vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)]).unwrap()
    }

    fn polygon_with_hole() -> Polygon {
        Polygon::new(vec![square(0.0, 10.0), square(4.0, 6.0)]).unwrap()
    }

    // ==================== Construction ====================

    #[test]
    fn test_construction_rejects_invalid_coordinates() {
        assert!(MultiPoint::new(vec![]).is_err());
        assert!(LineString::new(vec![p(0.0, 0.0)]).is_err());
        assert!(MultiLineString::new(vec![]).is_err());
        assert!(Polygon::new(vec![]).is_err());
        assert!(MultiPolygon::new(vec![]).is_err());

        // Too few points and an unclosed ring
        assert!(Polygon::new(vec![vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 0.0)]]).is_err());
        assert!(Polygon::new(vec![vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)]]).is_err());
    }

    #[test]
    fn test_rejection_message() {
        let error = LineString::new(vec![p(0.0, 0.0)]).unwrap_err();
        assert!(error.to_string().contains("at least two points"));
    }

    // ==================== Bounding Boxes ====================

    #[test]
    fn test_leaf_bounding_boxes() {
        assert_eq!(Point::new(p(3.0, 4.0)).bounding_box(), GeodesicBoundingBox::new(3.0, 4.0, 3.0, 4.0));
        assert_eq!(line().bounding_box(), GeodesicBoundingBox::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(polygon_with_hole().bounding_box(), GeodesicBoundingBox::new(0.0, 0.0, 10.0, 10.0));

        let multi_point = MultiPoint::new(vec![p(-5.0, 2.0), p(3.0, -1.0)]).unwrap();
        assert_eq!(multi_point.bounding_box(), GeodesicBoundingBox::new(-5.0, -1.0, 3.0, 2.0));
    }

    #[test]
    fn test_multi_bounding_boxes_merge_members() {
        let far = LineString::new(vec![p(20.0, 20.0), p(21.0, 25.0)]).unwrap();
        let multi_line = MultiLineString::new(vec![line(), far]).unwrap();
        assert_eq!(multi_line.bounding_box(), GeodesicBoundingBox::new(0.0, 0.0, 21.0, 25.0));

        let other = Polygon::new(vec![square(-3.0, -1.0)]).unwrap();
        let multi_polygon = MultiPolygon::new(vec![polygon_with_hole(), other]).unwrap();
        assert_eq!(multi_polygon.bounding_box(), GeodesicBoundingBox::new(-3.0, -3.0, 10.0, 10.0));
    }

    #[test]
    fn test_collection_bounding_box() {
        let collection = GeometryCollection::new(vec![
            Point::new(p(-8.0, 2.0)).into(),
            line().into(),
            GeometryCollection::new(vec![]).into(),
        ]);
        let geometry = Geometry::from(collection);

        assert_eq!(geometry.bounding_box(), Some(GeodesicBoundingBox::new(-8.0, 0.0, 1.0, 2.0)));
        assert_eq!(Geometry::from(GeometryCollection::new(vec![])).bounding_box(), None);
    }

    // ==================== Points & Geometries ====================

    #[test]
    fn test_points_preserve_order() {
        assert_eq!(line().points(), vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)]);

        let polygon = polygon_with_hole();
        assert_eq!(polygon.points().len(), 10);
        assert_eq!(polygon.points()[5], p(4.0, 4.0));
    }

    #[test]
    fn test_collection_points_concatenate_children() {
        let geometry = Geometry::from(GeometryCollection::new(vec![
            Point::new(p(9.0, 9.0)).into(),
            line().into(),
        ]));

        assert_eq!(geometry.points(), vec![p(9.0, 9.0), p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)]);
    }

    #[test]
    fn test_leaf_geometries_wrap_self() {
        let geometry = Geometry::from(line());
        let leaves = geometry.geometries();

        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves[0], &geometry);
    }

    #[test]
    fn test_collection_geometries_flatten() {
        let nested = GeometryCollection::new(vec![Point::new(p(1.0, 1.0)).into(), line().into()]);
        let geometry = Geometry::from(GeometryCollection::new(vec![
            polygon_with_hole().into(),
            nested.into(),
        ]));

        let kinds: Vec<GeometryKind> = geometry.geometries().iter().map(|leaf| leaf.kind()).collect();
        assert_eq!(kinds, vec![GeometryKind::Polygon, GeometryKind::Point, GeometryKind::LineString]);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Geometry::from(line()).kind().name(), "LineString");
        assert_eq!(Geometry::from(GeometryCollection::new(vec![])).kind().name(), "GeometryCollection");
    }

    #[test]
    fn test_coordinates() {
        assert_eq!(Point::new(p(1.0, 2.0)).coordinates(), Coordinates::Point([1.0, 2.0]));
        assert_eq!(
            line().coordinates(),
            Coordinates::LineString(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]])
        );
        assert_eq!(Geometry::from(GeometryCollection::new(vec![])).coordinates(), None);
    }

    // ==================== Distance ====================

    #[test]
    fn test_point_distance() {
        let point = Point::new(p(0.0, 0.0));

        assert_eq!(point.distance_to(&p(0.0, 0.0)), 0.0);
        assert_relative_eq!(point.distance_to(&p(0.0, 1.0)), meters_per_degree(), max_relative = 1e-9);
    }

    #[test]
    fn test_line_string_vertex_distance_is_zero() {
        let line = line();
        for vertex in line.points() {
            assert_eq!(line.distance(&vertex, 0.0), 0.0);
        }
    }

    #[test]
    fn test_line_string_checks_every_segment() {
        // Nearest feature is the middle of the second segment
        let point = p(1.5, 0.5);
        assert_relative_eq!(line().distance_to(&point), 0.5 * meters_per_degree(), max_relative = 1e-3);
    }

    #[test]
    fn test_tolerance_is_subtracted() {
        let line = line();
        let point = p(0.5, -1.0);
        let raw = line.distance_to(&point);

        assert_relative_eq!(line.distance(&point, 1000.0), raw - 1000.0, max_relative = 1e-12);
        assert_eq!(line.distance(&point, raw * 2.0), 0.0);
    }

    #[test]
    fn test_polygon_interior_is_zero() {
        let polygon = polygon_with_hole();

        assert_eq!(polygon.distance(&p(2.0, 2.0), 0.0), 0.0);
        assert_eq!(polygon.distance(&p(2.0, 2.0), 50.0), 0.0);
        assert!(polygon.contains(&p(2.0, 2.0)));
    }

    #[test]
    fn test_polygon_hole_measures_to_hole_boundary() {
        let polygon = polygon_with_hole();
        let center = p(5.0, 5.0);

        assert!(!polygon.contains(&center));
        let distance = polygon.distance_to(&center);
        assert!(distance > 0.9 * meters_per_degree() && distance < 1.01 * meters_per_degree());
    }

    #[test]
    fn test_polygon_exterior_distance() {
        let polygon = Polygon::new(vec![square(0.0, 1.0)]).unwrap();
        let distance = polygon.distance_to(&p(2.0, 0.5));

        assert_relative_eq!(distance, meters_per_degree(), max_relative = 1e-3);
    }

    #[test]
    fn test_multi_distance_is_minimum_of_members() {
        let near = Polygon::new(vec![square(0.0, 1.0)]).unwrap();
        let far = Polygon::new(vec![square(5.0, 6.0)]).unwrap();
        let multi = MultiPolygon::new(vec![near.clone(), far.clone()]).unwrap();
        let query = p(3.0, 3.0);

        for tolerance in [0.0, 1000.0] {
            let expected = near.distance(&query, tolerance).min(far.distance(&query, tolerance));
            assert_eq!(multi.distance(&query, tolerance), expected);
        }
    }

    #[test]
    fn test_multi_point_distance_matches_points() {
        let points = vec![p(0.0, 0.0), p(2.0, 2.0), p(-3.0, 1.0)];
        let multi = MultiPoint::new(points.clone()).unwrap();
        let query = p(1.8, 2.1);

        let expected = points
            .iter()
            .map(|point| Point::new(*point).distance(&query, 10.0))
            .fold(f64::INFINITY, f64::min);
        assert_eq!(multi.distance(&query, 10.0), expected);
    }

    #[test]
    fn test_collection_distance() {
        let point = Point::new(p(10.0, 10.0));
        let line = line();
        let query = p(9.0, 9.0);
        let geometry = Geometry::from(GeometryCollection::new(vec![
            line.clone().into(),
            GeometryCollection::new(vec![point.clone().into()]).into(),
        ]));

        let expected = line.distance(&query, 5.0).min(point.distance(&query, 5.0));
        assert_eq!(geometry.distance(&query, 5.0), Some(expected));
        assert_eq!(Geometry::from(GeometryCollection::new(vec![])).distance_to(&query), None);
    }
}
