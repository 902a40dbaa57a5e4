//! Arc-length curve abstraction.

use nalgebra::Point3;

/// Default sample count when turning a curve into a contour.
///
/// One hundred points reproduce a closed rim faithfully enough for
/// bridging while keeping downstream meshes small.
pub const DEFAULT_CURVE_SAMPLES: usize = 100;

/// A curve parameterized by normalized arc length.
///
/// The parameter `t ∈ [0, 1]` measures the fraction of total arc length
/// traveled from the curve start, so equal parameter steps yield equally
/// spaced points regardless of the underlying representation.
pub trait Curve {
    /// Evaluate the curve at normalized arc length `t ∈ [0, 1]`.
    ///
    /// Implementations clamp `t` to the valid range.
    fn point_at(&self, t: f64) -> Point3<f64>;

    /// Total arc length of the curve.
    fn arc_length(&self) -> f64;

    /// Whether the curve returns to its start point.
    fn is_closed(&self) -> bool;

    /// Sample `n` points at fractions `i/n` for `i = 0..n`.
    ///
    /// The endpoint at `t = 1.0` is excluded. On a closed curve this
    /// produces one point per step with no duplicate seam point, which is
    /// the form [`Contour::from_curve`](crate::Contour::from_curve) wants.
    ///
    /// `n < 2` yields a degenerate sequence; avoiding that is the caller's
    /// responsibility.
    ///
    /// # Example
    ///
    /// ```
    /// use contour_types::{Circle, Curve};
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let circle = Circle::new(Point3::origin(), 1.0, Vector3::z()).unwrap();
    /// let points = circle.sample_cyclic(4);
    ///
    /// assert_eq!(points.len(), 4);
    /// // Quarter steps around the circle; the seam point is not repeated.
    /// assert!((points[0].x - 1.0).abs() < 1e-10);
    /// assert!((points[1].y - 1.0).abs() < 1e-10);
    /// ```
    fn sample_cyclic(&self, n: usize) -> Vec<Point3<f64>> {
        (0..n)
            .map(|i| self.point_at(i as f64 / n as f64))
            .collect()
    }

    /// Sample `n` points at fractions `i/(n-1)`, endpoints included.
    ///
    /// The first sample sits at `t = 0` and the last at `t = 1`, so open
    /// curves keep both of their ends.
    fn sample_arc_length(&self, n: usize) -> Vec<Point3<f64>> {
        match n {
            0 => Vec::new(),
            1 => vec![self.point_at(0.0)],
            _ => (0..n)
                .map(|i| self.point_at(i as f64 / (n - 1) as f64))
                .collect(),
        }
    }
}
