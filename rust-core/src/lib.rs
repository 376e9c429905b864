//! Geodesic geometry core
//!
//! Bounding-box algebra and great-circle distance queries for GeoJSON-like geometries
//! (points, line strings, polygons, their multi-forms and collections) located on the
//! curved earth surface.

pub mod config;
pub mod geometries;

pub use geometries::*;

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, anyhow::Error>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
