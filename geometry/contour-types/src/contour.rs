//! Open boundary polylines sampled from closed curves.

use crate::curve::Curve;
use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered sequence of points describing an open boundary polyline.
///
/// Contours are usually produced by sampling a closed curve with
/// [`Contour::from_curve`]: the sample at `t = 1.0` is omitted, so the
/// polyline stops one step short of its start instead of duplicating it.
/// The point order defines the traversal direction. Stitching re-reads a
/// contour through rotated index arrays; the points themselves are never
/// moved or mutated.
///
/// Degenerate contours (fewer than 2 points) are representable. Operations
/// that need at least one segment treat them as zero length; the stitch
/// entry points reject them.
///
/// # Parameterization
///
/// The [`Curve`] impl maps `t ∈ [0, 1]` onto the polyline by arc length:
/// `t = 0` is the first point, `t = 1` the last, and `t = 0.5` the point
/// at half the total arc length.
///
/// # Example
///
/// ```
/// use contour_types::{Contour, Curve};
/// use nalgebra::Point3;
///
/// let contour = Contour::new(vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 0.0),
/// ]);
///
/// assert_eq!(contour.len(), 3);
/// assert!((contour.arc_length() - 2.0).abs() < 1e-10);
/// assert!(!contour.is_closed());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Contour {
    /// The points of the contour, in traversal order.
    points: Vec<Point3<f64>>,
    /// Arc length from the first point to each point.
    cumulative_lengths: Vec<f64>,
    /// Length of the whole polyline.
    total_length: f64,
}

impl Contour {
    /// Create a contour from a point sequence.
    ///
    /// Any point count is accepted, including degenerate ones; see the
    /// type-level docs.
    #[must_use]
    pub fn new(points: Vec<Point3<f64>>) -> Self {
        let (cumulative_lengths, total_length) = compute_cumulative_lengths(&points);

        Self {
            points,
            cumulative_lengths,
            total_length,
        }
    }

    /// Sample a curve into a contour.
    ///
    /// Takes `samples` points at arc-length fractions `i/samples`, leaving
    /// out the endpoint at `t = 1.0`, so a closed curve yields an open
    /// polyline that stops one step short of its seam. See
    /// [`DEFAULT_CURVE_SAMPLES`](crate::DEFAULT_CURVE_SAMPLES) for the
    /// conventional count.
    ///
    /// # Example
    ///
    /// ```
    /// use contour_types::{Circle, Contour};
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let circle = Circle::new(Point3::origin(), 2.0, Vector3::z()).unwrap();
    /// let contour = Contour::from_curve(&circle, 100);
    ///
    /// assert_eq!(contour.len(), 100);
    /// ```
    #[must_use]
    pub fn from_curve<C: Curve + ?Sized>(curve: &C, samples: usize) -> Self {
        Self::new(curve.sample_cyclic(samples))
    }

    /// Number of points in the contour.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the contour has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points of the contour, in traversal order.
    #[must_use]
    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// Get a specific point by index.
    #[must_use]
    pub fn point(&self, index: usize) -> Option<&Point3<f64>> {
        self.points.get(index)
    }

    /// Arithmetic mean of the contour points.
    ///
    /// Returns the origin for an empty contour.
    #[must_use]
    pub fn centroid(&self) -> Point3<f64> {
        if self.points.is_empty() {
            return Point3::origin();
        }

        let sum = self
            .points
            .iter()
            .fold(Point3::origin(), |acc, p| acc + p.coords);
        sum / self.points.len() as f64
    }

    /// Create a copy rotated so that `start` becomes the first point.
    ///
    /// The cyclic order of the points is preserved; `start` is taken
    /// modulo the point count.
    #[must_use]
    pub fn rotated(&self, start: usize) -> Self {
        if self.points.is_empty() {
            return self.clone();
        }

        let start = start % self.points.len();
        let mut points = Vec::with_capacity(self.points.len());
        points.extend_from_slice(&self.points[start..]);
        points.extend_from_slice(&self.points[..start]);
        Self::new(points)
    }

    /// Create a copy with the point order reversed.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self::new(points)
    }

    /// Resample the contour to `n` points with uniform arc-length spacing.
    ///
    /// Both endpoints are kept, so the resampled polyline spans the same
    /// open range as the original. Contours without a segment are returned
    /// unchanged.
    #[must_use]
    pub fn resampled(&self, n: usize) -> Self {
        if self.points.len() < 2 {
            return self.clone();
        }
        Self::new(self.sample_arc_length(n.max(2)))
    }

    /// Find the segment containing the given arc length.
    ///
    /// Returns the segment index and the fraction of the segment already
    /// travelled at `arc`. Requires at least 2 points.
    fn segment_at_arc(&self, arc: f64) -> (usize, f64) {
        let last_segment = self.points.len() - 2;

        if arc <= 0.0 {
            return (0, 0.0);
        }
        if arc >= self.total_length {
            return (last_segment, 1.0);
        }

        // First knot at or past `arc`; its predecessor starts the
        // containing segment.
        let upper = self.cumulative_lengths.partition_point(|&len| len < arc);
        let segment = upper.saturating_sub(1);

        let begin = self.cumulative_lengths[segment];
        let span = self.cumulative_lengths[segment + 1] - begin;
        if span <= 1e-10 {
            return (segment, 0.0);
        }

        (segment, (arc - begin) / span)
    }
}

impl Curve for Contour {
    fn point_at(&self, t: f64) -> Point3<f64> {
        match self.points.len() {
            0 => Point3::origin(),
            1 => self.points[0],
            _ => {
                let arc = t.clamp(0.0, 1.0) * self.total_length;
                let (segment, frac) = self.segment_at_arc(arc);
                let from = self.points[segment];
                let to = self.points[segment + 1];
                from + (to - from) * frac
            }
        }
    }

    fn arc_length(&self) -> f64 {
        self.total_length
    }

    fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() > 1 => (first - last).norm() < 1e-10,
            _ => false,
        }
    }
}

/// Cumulative arc length at each point, plus the total.
fn compute_cumulative_lengths(points: &[Point3<f64>]) -> (Vec<f64>, f64) {
    let mut lengths = Vec::with_capacity(points.len());
    let mut running = 0.0;

    if !points.is_empty() {
        lengths.push(0.0);
    }
    for pair in points.windows(2) {
        running += (pair[1] - pair[0]).norm();
        lengths.push(running);
    }

    (lengths, running)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Circle;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    fn unit_square() -> Contour {
        Contour::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ])
    }

    #[test]
    fn test_contour_creation() {
        let contour = unit_square();
        assert_eq!(contour.len(), 4);
        assert!(!contour.is_empty());
        // Open polyline: three segments, the closing edge is not part of it
        assert_relative_eq!(contour.arc_length(), 3.0, epsilon = 1e-10);
        assert!(!contour.is_closed());
    }

    #[test]
    fn test_degenerate_contours() {
        let empty = Contour::new(Vec::new());
        assert!(empty.is_empty());
        assert_relative_eq!(empty.arc_length(), 0.0);
        assert_eq!(empty.point_at(0.5), Point3::origin());

        let single = Contour::new(vec![Point3::new(1.0, 2.0, 3.0)]);
        assert_eq!(single.len(), 1);
        assert_relative_eq!(single.point_at(0.7).x, 1.0, epsilon = 1e-10);
        assert!(!single.is_closed());
    }

    #[test]
    fn test_point_at_arc_length() {
        let contour = Contour::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
            Point3::new(3.0, 4.0, 0.0),
        ]);

        assert_relative_eq!(contour.arc_length(), 7.0, epsilon = 1e-10);

        // Half the arc length lands past the corner
        let mid = contour.point_at(0.5);
        assert_relative_eq!(mid.x, 3.0, epsilon = 1e-10);
        assert_relative_eq!(mid.y, 0.5, epsilon = 1e-10);

        let end = contour.point_at(1.0);
        assert_relative_eq!(end.y, 4.0, epsilon = 1e-10);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_from_curve_excludes_seam() {
        let circle = Circle::new(Point3::origin(), 1.0, Vector3::z()).unwrap();
        let contour = Contour::from_curve(&circle, 4);

        assert_eq!(contour.len(), 4);
        // Quarter steps starting at angle 0; no repeated seam point
        assert_relative_eq!(contour.points()[0].x, 1.0, epsilon = 1e-10);
        assert_relative_eq!(contour.points()[1].y, 1.0, epsilon = 1e-10);
        assert_relative_eq!(contour.points()[2].x, -1.0, epsilon = 1e-10);
        assert_relative_eq!(contour.points()[3].y, -1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_rotated() {
        let contour = unit_square();
        let rotated = contour.rotated(2);

        assert_eq!(rotated.len(), 4);
        assert_relative_eq!(rotated.points()[0].x, 1.0, epsilon = 1e-10);
        assert_relative_eq!(rotated.points()[0].y, 1.0, epsilon = 1e-10);
        assert_relative_eq!(rotated.points()[2].x, 0.0, epsilon = 1e-10);
        assert_relative_eq!(rotated.points()[2].y, 0.0, epsilon = 1e-10);

        // Rotation index wraps
        let wrapped = contour.rotated(6);
        assert_eq!(wrapped, contour.rotated(2));
    }

    #[test]
    fn test_reversed() {
        let contour = unit_square();
        let reversed = contour.reversed();

        assert_relative_eq!(reversed.points()[0].y, 1.0, epsilon = 1e-10);
        assert_relative_eq!(reversed.points()[3].y, 0.0, epsilon = 1e-10);
        assert_relative_eq!(reversed.arc_length(), contour.arc_length(), epsilon = 1e-10);
    }

    #[test]
    fn test_resampled_uniform_spacing() {
        let contour = Contour::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
        ]);

        let resampled = contour.resampled(11);
        assert_eq!(resampled.len(), 11);

        for (i, p) in resampled.points().iter().enumerate() {
            assert_relative_eq!(p.x, i as f64, epsilon = 1e-10);
        }

        // Endpoints are preserved
        assert_relative_eq!(resampled.points()[0].x, 0.0, epsilon = 1e-10);
        assert_relative_eq!(resampled.points()[10].x, 10.0, epsilon = 1e-10);
    }

    #[test]
    fn test_is_closed_with_duplicate_seam() {
        let closed = Contour::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 1.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
        ]);
        assert!(closed.is_closed());
    }

    #[test]
    fn test_centroid() {
        let contour = unit_square();
        let c = contour.centroid();
        assert_relative_eq!(c.x, 0.5, epsilon = 1e-10);
        assert_relative_eq!(c.y, 0.5, epsilon = 1e-10);
        assert_relative_eq!(c.z, 0.0, epsilon = 1e-10);

        assert_eq!(Contour::new(Vec::new()).centroid(), Point3::origin());
    }
}
