/// Example demonstrating bounding-box merging and distance queries
///
/// Run with `RUST_LOG=trace` to see the merge and distance logging.
use env_logger::Env;
use geodesic_core::config::BOUNDING_BOX_MINIMUM_ADJUSTMENT;
use geodesic_core::{
    Geometry, GeometryCollection, GeodesicBoundingBox, GeodesicPoint, LineString, Point, Polygon,
};

fn main() -> geodesic_core::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    println!("=== Geodesic queries ===\n");

    // A small park, a walking path and a landmark
    let park = Polygon::new(vec![vec![
        GeodesicPoint::validated(-0.17, 51.50)?,
        GeodesicPoint::validated(-0.15, 51.50)?,
        GeodesicPoint::validated(-0.15, 51.51)?,
        GeodesicPoint::validated(-0.17, 51.51)?,
        GeodesicPoint::validated(-0.17, 51.50)?,
    ]])?;
    let path = LineString::new(vec![
        GeodesicPoint::validated(-0.14, 51.50)?,
        GeodesicPoint::validated(-0.12, 51.505)?,
    ])?;
    let landmark = Point::new(GeodesicPoint::validated(-0.1246, 51.5007)?);

    let collection = Geometry::from(GeometryCollection::new(vec![
        park.into(),
        path.into(),
        landmark.into(),
    ]));

    if let Some(bbox) = collection.bounding_box() {
        println!("1. Collection bounding box: {:?}", bbox);
        println!("   Centroid: {:?}", bbox.centroid());
    }

    let query = GeodesicPoint::validated(-0.13, 51.51)?;
    println!("\n2. Distances from {:?}:", query);
    for leaf in collection.geometries() {
        if let Some(distance) = leaf.distance_to(&query) {
            println!("   {:<12} {:>10.1} m", leaf.kind().name(), distance);
        }
    }
    if let Some(distance) = collection.distance(&query, 250.0) {
        println!("   Collection within 250 m tolerance: {}", distance <= 0.0);
    }

    println!("\n3. Repairing a degenerate box:");
    let meridian = GeodesicBoundingBox::new(0.0, 51.0, 0.0, 52.0);
    println!("   Before: {:?}", meridian);
    println!("   After:  {:?}", meridian.valid_bounding_box(BOUNDING_BOX_MINIMUM_ADJUSTMENT));

    Ok(())
}
