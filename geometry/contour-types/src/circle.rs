//! Planar circles.

use crate::curve::Curve;
use crate::error::ContourError;
use crate::Result;
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A full circle in 3D space.
///
/// The circle lies in the plane through `center` perpendicular to
/// `normal`. Parameterization starts on the in-plane axis least aligned
/// with the normal and runs counter-clockwise when viewed from the
/// normal's tip, so `point_at(0.25)` is a quarter turn from
/// `point_at(0.0)`.
///
/// # Example
///
/// ```
/// use contour_types::{Circle, Curve};
/// use nalgebra::{Point3, Vector3};
///
/// let circle = Circle::new(Point3::origin(), 2.0, Vector3::z()).unwrap();
///
/// assert!(circle.is_closed());
/// assert!((circle.arc_length() - 2.0 * std::f64::consts::TAU).abs() < 1e-10);
///
/// let start = circle.point_at(0.0);
/// assert!((start.x - 2.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Circle {
    center: Point3<f64>,
    radius: f64,
    /// Unit plane normal.
    normal: Vector3<f64>,
    /// In-plane basis, orthonormal with `normal`.
    u: Vector3<f64>,
    v: Vector3<f64>,
}

impl Circle {
    /// Create a circle from center, radius, and plane normal.
    ///
    /// The normal does not need to be unit length.
    ///
    /// # Errors
    ///
    /// Returns [`ContourError::InvalidRadius`] if the radius is not
    /// positive and finite, and [`ContourError::Degenerate`] if the
    /// normal has zero length.
    pub fn new(center: Point3<f64>, radius: f64, normal: Vector3<f64>) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ContourError::InvalidRadius(radius));
        }

        let normal = normal
            .try_normalize(1e-12)
            .ok_or_else(|| ContourError::degenerate("circle normal has zero length"))?;

        let u = in_plane_axis(&normal);
        let v = normal.cross(&u);

        Ok(Self {
            center,
            radius,
            normal,
            u,
            v,
        })
    }

    /// Center of the circle.
    #[must_use]
    pub fn center(&self) -> Point3<f64> {
        self.center
    }

    /// Radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Unit normal of the circle's plane.
    #[must_use]
    pub fn normal(&self) -> Vector3<f64> {
        self.normal
    }
}

impl Curve for Circle {
    fn point_at(&self, t: f64) -> Point3<f64> {
        let angle = std::f64::consts::TAU * t.clamp(0.0, 1.0);
        self.center + (self.u * angle.cos() + self.v * angle.sin()) * self.radius
    }

    fn arc_length(&self) -> f64 {
        std::f64::consts::TAU * self.radius
    }

    fn is_closed(&self) -> bool {
        true
    }
}

/// Unit vector perpendicular to `normal`, chosen deterministically.
///
/// Projects the world axis least aligned with the normal into the plane,
/// so a +Z normal yields +X and sampled rings start on the X axis.
fn in_plane_axis(normal: &Vector3<f64>) -> Vector3<f64> {
    let abs = normal.map(f64::abs);
    let axis = if abs.x <= abs.y && abs.x <= abs.z {
        Vector3::x()
    } else if abs.y <= abs.z {
        Vector3::y()
    } else {
        Vector3::z()
    };

    (axis - normal * axis.dot(normal)).normalize()
}
