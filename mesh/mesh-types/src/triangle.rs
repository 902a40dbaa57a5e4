//! Triangle primitive used for per-face geometric queries.

use nalgebra::{Point3, Vector3};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A triangle with concrete vertex positions.
///
/// Triangles are produced on the fly from an [`crate::IndexedMesh`] rather
/// than stored, so this type is `Copy` and carries resolved positions.
///
/// Winding is counter-clockwise when viewed from the front (the normal
/// points toward the viewer).
///
/// # Example
///
/// ```
/// use mesh_types::{Point3, Triangle};
///
/// let tri = Triangle::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(2.0, 0.0, 0.0),
///     Point3::new(0.0, 2.0, 0.0),
/// );
/// assert!((tri.area() - 2.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangle {
    /// First vertex.
    pub v0: Point3<f64>,
    /// Second vertex.
    pub v1: Point3<f64>,
    /// Third vertex.
    pub v2: Point3<f64>,
}

impl Triangle {
    /// Triangle from its three corner points.
    #[inline]
    #[must_use]
    pub const fn new(v0: Point3<f64>, v1: Point3<f64>, v2: Point3<f64>) -> Self {
        Self { v0, v1, v2 }
    }

    /// Cross-product normal; its magnitude is twice the triangle's area.
    ///
    /// Points to the front side of the winding by the right-hand rule.
    /// Callers that only compare magnitudes can skip the normalization.
    #[inline]
    #[must_use]
    pub fn area_normal(&self) -> Vector3<f64> {
        let ab = self.v1 - self.v0;
        let ac = self.v2 - self.v0;
        ab.cross(&ac)
    }

    /// Unit face normal, or `None` when the triangle spans no plane.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{Point3, Triangle, Vector3};
    ///
    /// let tri = Triangle::new(
    ///     Point3::new(0.0, 0.0, 1.0),
    ///     Point3::new(3.0, 0.0, 1.0),
    ///     Point3::new(0.0, 3.0, 1.0),
    /// );
    /// assert_eq!(tri.normal(), Some(Vector3::z()));
    /// ```
    #[must_use]
    pub fn normal(&self) -> Option<Vector3<f64>> {
        let scaled = self.area_normal();
        let len_sq = scaled.norm_squared();
        if len_sq <= f64::EPSILON {
            return None;
        }
        Some(scaled / len_sq.sqrt())
    }

    /// Area of the triangle.
    #[inline]
    #[must_use]
    pub fn area(&self) -> f64 {
        0.5 * self.area_normal().norm()
    }

    /// Centroid, the average of the three corners.
    #[inline]
    #[must_use]
    pub fn centroid(&self) -> Point3<f64> {
        let sum = self.v0.coords + self.v1.coords + self.v2.coords;
        Point3::from(sum / 3.0)
    }

    /// Edge lengths in traversal order: `v0`→`v1`, `v1`→`v2`, `v2`→`v0`.
    #[inline]
    #[must_use]
    pub fn edge_lengths(&self) -> [f64; 3] {
        let [a, b, c] = [self.v0, self.v1, self.v2];
        [(b - a).norm(), (c - b).norm(), (a - c).norm()]
    }

    /// Whether the triangle's area falls below `epsilon`.
    ///
    /// Slivers above the threshold still count as valid geometry.
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self, epsilon: f64) -> bool {
        self.area() < epsilon
    }

    /// The three corners as an array.
    #[inline]
    #[must_use]
    pub const fn vertices(&self) -> [Point3<f64>; 3] {
        [self.v0, self.v1, self.v2]
    }
}
