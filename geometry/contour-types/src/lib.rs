//! Contour and curve primitives for boundary stitching.
//!
//! This crate provides the geometric vocabulary used when bridging mesh
//! boundaries:
//!
//! - [`Contour`] - An ordered, open point sequence describing a boundary
//!   polyline (usually one rim of a surface)
//! - [`Curve`] - Arc-length parameterized curves with cyclic and spanning
//!   sampling
//! - [`Circle`] - A planar circle, the most common closed input curve
//!
//! # Sampling Convention
//!
//! Closed curves are turned into contours by sampling arc-length fractions
//! `i/n` for `i = 0..n`, leaving out the duplicate seam point at `t = 1`.
//! The resulting polyline is *open*: its last point is one step short of
//! its first. Downstream stitching relies on this shape and walks the
//! closing step implicitly.
//!
//! # Example
//!
//! ```
//! use contour_types::{Circle, Contour, Curve, DEFAULT_CURVE_SAMPLES};
//! use nalgebra::{Point3, Vector3};
//!
//! let rim = Circle::new(Point3::origin(), 12.0, Vector3::z()).unwrap();
//! let contour = Contour::from_curve(&rim, DEFAULT_CURVE_SAMPLES);
//!
//! assert_eq!(contour.len(), 100);
//! assert!(!contour.is_closed());
//! ```
//!
//! # Coordinate System
//!
//! Right-handed, `f64` throughout:
//!
//! - X: width (left/right)
//! - Y: depth (front/back)
//! - Z: height (up/down)
//!
//! # Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for all types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![allow(
    clippy::cast_precision_loss,
    clippy::module_name_repetitions,
    clippy::similar_names
)]

mod circle;
mod contour;
mod curve;
mod error;

// Re-export core types
pub use circle::Circle;
pub use contour::Contour;
pub use curve::{Curve, DEFAULT_CURVE_SAMPLES};
pub use error::ContourError;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

/// Result type for contour operations.
pub type Result<T> = std::result::Result<T, ContourError>;

#[cfg(test)]
mod integration_tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Sampling a circle and resampling the resulting contour agree.
    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_curve_and_contour_sampling_agree() {
        let circle = Circle::new(Point3::origin(), 5.0, Vector3::z()).unwrap();
        let contour = Contour::from_curve(&circle, 64);

        // The polyline approximates the circumference from below
        let perimeter = std::f64::consts::TAU * 5.0;
        assert!(contour.arc_length() < perimeter);
        assert!(contour.arc_length() > 0.95 * perimeter);

        // Spanning samples of the contour keep its endpoints
        let spanned = contour.sample_arc_length(16);
        assert_eq!(spanned.len(), 16);
        assert_relative_eq!(spanned[0], contour.points()[0], epsilon = 1e-10);
        assert_relative_eq!(spanned[15], contour.points()[63], epsilon = 1e-10);
    }

    /// Cyclic samples never repeat the seam, spanning samples always do.
    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_sampling_endpoint_conventions() {
        let circle = Circle::new(Point3::origin(), 1.0, Vector3::z()).unwrap();

        let cyclic = circle.sample_cyclic(8);
        assert_eq!(cyclic.len(), 8);
        assert!((cyclic[0] - cyclic[7]).norm() > 0.5);

        let spanning = circle.sample_arc_length(9);
        assert_eq!(spanning.len(), 9);
        assert_relative_eq!(spanning[0], spanning[8], epsilon = 1e-10);
    }
}
