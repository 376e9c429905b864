// Constants

// Earth model
pub const EARTH_MEAN_RADIUS_METERS: f64 = 6_371_008.8; // IUGG mean radius, used for all distances

// Tolerances
pub const BOUNDING_BOX_MINIMUM_ADJUSTMENT: f64 = 0.00005; // Degrees added around a degenerate axis
pub const GEODESIC_TOLERANCE: f64 = 1e-12; // Below this a great-circle normal is treated as zero
