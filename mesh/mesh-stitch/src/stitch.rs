//! The stitching pipeline: anchor, align, triangulate, assemble.

use contour_types::Contour;
use mesh_types::IndexedMesh;
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::align::align_contours;
use crate::boundary::boundary_loop;
use crate::correspondence::{AnchorPair, find_anchor};
use crate::error::{StitchError, StitchResult};
use crate::triangulate::bridge_faces;

/// Parameters for contour stitching.
#[derive(Debug, Clone, Default)]
pub struct StitchParams {
    /// Maximum anchor separation. Mutual nearest-neighbor pairs farther
    /// apart than this are rejected. `None` means no distance filtering
    /// (default: `None`).
    pub max_anchor_distance: Option<f64>,
}

impl StitchParams {
    /// Creates new stitch parameters with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum anchor separation.
    #[must_use]
    pub const fn with_max_anchor_distance(mut self, distance: f64) -> Self {
        self.max_anchor_distance = Some(distance);
        self
    }
}

/// A bridge mesh stitched between two contours.
///
/// The vertex buffer holds the first contour's points followed by the
/// second's, both in their input order; faces and rims index into that
/// buffer. `rim_a` and `rim_b` walk each rim starting at its anchor
/// vertex, in the directions the bridge was built with, so downstream
/// consumers can weld or fill against the stitched seam without
/// re-deriving the traversal.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StitchedMesh {
    /// The bridge triangles over the combined vertex buffer.
    pub mesh: IndexedMesh,
    /// First contour's rim in buffer space, anchor first.
    pub rim_a: Vec<u32>,
    /// Second contour's rim in buffer space, anchor first.
    pub rim_b: Vec<u32>,
    /// The mutual nearest-neighbor pair the bridge was anchored on.
    pub anchor: AnchorPair,
    /// Whether the second contour's traversal was reversed.
    pub reversed: bool,
}

/// Stitches two contours into a triangle bridge.
///
/// Runs the full pipeline: find the mutual nearest-neighbor anchor,
/// rotate both rims to start there, probe and fix the relative winding,
/// then triangulate the gap with an advancing front. The result always
/// has `a.len() + b.len()` faces.
///
/// # Arguments
///
/// * `a` - First contour (occupies buffer indices `[0, a.len())`)
/// * `b` - Second contour (occupies buffer indices from `a.len()` up)
/// * `params` - Stitching parameters
///
/// # Returns
///
/// The assembled [`StitchedMesh`]. Inputs are unchanged; failures return
/// no partial mesh.
///
/// # Errors
///
/// * [`StitchError::InsufficientPoints`] if either contour has fewer than
///   2 points.
/// * [`StitchError::NoCorrespondence`] if no anchor pair survives
///   `params.max_anchor_distance`.
///
/// # Example
///
/// ```
/// use contour_types::{Circle, Contour};
/// use mesh_stitch::{StitchParams, stitch_contours};
/// use nalgebra::{Point3, Vector3};
///
/// let lower = Circle::new(Point3::new(0.0, 0.0, 0.0), 5.0, Vector3::z()).unwrap();
/// let upper = Circle::new(Point3::new(0.0, 0.0, 2.0), 5.0, Vector3::z()).unwrap();
///
/// let a = Contour::from_curve(&lower, 64);
/// let b = Contour::from_curve(&upper, 48);
///
/// let stitched = stitch_contours(&a, &b, &StitchParams::default()).unwrap();
/// assert_eq!(stitched.mesh.face_count(), 64 + 48);
/// ```
// Indices are u32; vertex counts past 4 billion are out of scope.
#[allow(clippy::cast_possible_truncation)]
pub fn stitch_contours(
    a: &Contour,
    b: &Contour,
    params: &StitchParams,
) -> StitchResult<StitchedMesh> {
    if a.len() < 2 {
        return Err(StitchError::insufficient_points(2, a.len()));
    }
    if b.len() < 2 {
        return Err(StitchError::insufficient_points(2, b.len()));
    }

    let anchor = find_anchor(a, b, params.max_anchor_distance)?;
    let alignment = align_contours(a, b, &anchor);
    let faces = bridge_faces(a.points(), b.points(), &alignment.order_a, &alignment.order_b);

    let n_a = a.len();
    let vertices = a.points().iter().chain(b.points()).copied().collect();
    let rim_a = alignment.order_a.iter().map(|&i| i as u32).collect();
    let rim_b = alignment
        .order_b
        .iter()
        .map(|&j| (n_a + j) as u32)
        .collect();

    let mesh = IndexedMesh::from_parts(vertices, faces);

    info!(
        "Stitched {} + {} vertex contours into {} bridge faces{}",
        n_a,
        b.len(),
        mesh.face_count(),
        if alignment.reversed {
            " (second rim reversed)"
        } else {
            ""
        }
    );

    Ok(StitchedMesh {
        mesh,
        rim_a,
        rim_b,
        anchor,
        reversed: alignment.reversed,
    })
}

/// Stitches many independent contour pairs in parallel.
///
/// Each pair runs the same pipeline as [`stitch_contours`]; pairs are
/// independent, so the batch is distributed across the rayon thread pool.
/// Results keep the input order, failures stay per-pair.
#[must_use]
pub fn stitch_pairs(
    pairs: &[(Contour, Contour)],
    params: &StitchParams,
) -> Vec<StitchResult<StitchedMesh>> {
    pairs
        .par_iter()
        .map(|(a, b)| stitch_contours(a, b, params))
        .collect()
}

/// Stitches the open rims of two meshes.
///
/// Each mesh must expose exactly one boundary loop; the loops become the
/// contours of a regular stitch. The resulting bridge has its own vertex
/// buffer (rim vertices are copied, not shared), so it can be
/// [`merge`](IndexedMesh::merge)d onto the input meshes afterwards.
///
/// # Errors
///
/// * [`StitchError::UnexpectedLoopCount`] if either mesh does not have
///   exactly one boundary loop.
/// * Any error of [`stitch_contours`] on the extracted rims.
pub fn stitch_boundary_loops(
    mesh_a: &IndexedMesh,
    mesh_b: &IndexedMesh,
    params: &StitchParams,
) -> StitchResult<StitchedMesh> {
    let loop_a = boundary_loop(mesh_a)?;
    let loop_b = boundary_loop(mesh_b)?;
    debug!(
        "Stitching boundary loops of {} and {} vertices",
        loop_a.len(),
        loop_b.len()
    );

    let contour_a = contour_from_loop(mesh_a, &loop_a);
    let contour_b = contour_from_loop(mesh_b, &loop_b);
    stitch_contours(&contour_a, &contour_b, params)
}

/// Resolves a vertex index loop into a contour of positions.
fn contour_from_loop(mesh: &IndexedMesh, loop_vertices: &[u32]) -> Contour {
    Contour::new(
        loop_vertices
            .iter()
            .map(|&v| mesh.vertices[v as usize])
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mesh_types::{Point3, unit_cube};
    use std::f64::consts::TAU;

    fn square(z: f64) -> Contour {
        Contour::new(vec![
            Point3::new(0.0, 0.0, z),
            Point3::new(1.0, 0.0, z),
            Point3::new(1.0, 1.0, z),
            Point3::new(0.0, 1.0, z),
        ])
    }

    fn ring(n: usize, radius: f64, z: f64) -> Contour {
        let points = (0..n)
            .map(|i| {
                let angle = TAU * i as f64 / n as f64;
                Point3::new(radius * angle.cos(), radius * angle.sin(), z)
            })
            .collect();
        Contour::new(points)
    }

    fn jittered_ring(n: usize, radius: f64, z: f64) -> Contour {
        let points = (0..n)
            .map(|i| {
                let angle = TAU * i as f64 / n as f64;
                let r = radius + 0.01 * i as f64;
                Point3::new(r * angle.cos(), r * angle.sin(), z)
            })
            .collect();
        Contour::new(points)
    }

    #[test]
    fn stacked_squares_stitch_into_cube_sides() {
        let stitched = stitch_contours(&square(0.0), &square(1.0), &StitchParams::default())
            .unwrap();

        assert_eq!(stitched.mesh.vertex_count(), 8);
        assert_eq!(stitched.mesh.face_count(), 8);
        assert_eq!(stitched.rim_a, vec![0, 1, 2, 3]);
        assert_eq!(stitched.rim_b, vec![4, 5, 6, 7]);
        assert_eq!(stitched.anchor.index_a, 0);
        assert_eq!(stitched.anchor.index_b, 0);
        assert_relative_eq!(stitched.anchor.distance, 1.0, epsilon = 1e-12);
        assert!(!stitched.reversed);

        // The four unit sides of a cube.
        assert_relative_eq!(stitched.mesh.surface_area(), 4.0, epsilon = 1e-10);
        assert_eq!(
            stitched.mesh.faces,
            vec![
                [0, 4, 1],
                [1, 4, 5],
                [1, 5, 2],
                [2, 5, 6],
                [2, 6, 3],
                [3, 6, 7],
                [3, 7, 0],
                [0, 7, 4],
            ]
        );
    }

    #[test]
    fn uneven_rings_get_full_face_budget() {
        let stitched =
            stitch_contours(&ring(5, 1.0, 0.0), &ring(3, 1.0, 1.0), &StitchParams::default())
                .unwrap();

        assert_eq!(stitched.mesh.face_count(), 8);
        assert_eq!(stitched.rim_a.len(), 5);
        assert_eq!(stitched.rim_b.len(), 3);
        assert_eq!(stitched.mesh.vertex_count(), 8);
    }

    #[test]
    fn short_contours_are_rejected() {
        let point = Contour::new(vec![Point3::new(0.0, 0.0, 0.0)]);
        let err = stitch_contours(&point, &square(1.0), &StitchParams::default()).unwrap_err();
        assert_eq!(err, StitchError::insufficient_points(2, 1));

        let err = stitch_contours(&square(0.0), &point, &StitchParams::default()).unwrap_err();
        assert_eq!(err, StitchError::insufficient_points(2, 1));
    }

    #[test]
    fn anchor_cutoff_fails_distant_contours() {
        let params = StitchParams::new().with_max_anchor_distance(1.0);
        let err = stitch_contours(&square(0.0), &square(100.0), &params).unwrap_err();
        assert_eq!(err, StitchError::NoCorrespondence);

        // The same contours stitch fine without the cutoff.
        assert!(stitch_contours(&square(0.0), &square(100.0), &StitchParams::default()).is_ok());
    }

    #[test]
    fn input_rotation_only_relabels_faces() {
        let a = jittered_ring(12, 2.0, 0.0);
        let b = ring(12, 2.0, 0.5);
        let params = StitchParams::default();

        let base = stitch_contours(&a, &b, &params).unwrap();
        let rotated = stitch_contours(&a.rotated(5), &b, &params).unwrap();

        // Same geometric anchor, relabeled by the input rotation.
        let relabel = |v: u32| if v < 12 { (v + 5) % 12 } else { v };
        let mapped: Vec<[u32; 3]> = rotated
            .mesh
            .faces
            .iter()
            .map(|f| [relabel(f[0]), relabel(f[1]), relabel(f[2])])
            .collect();
        assert_eq!(mapped, base.mesh.faces);
    }

    #[test]
    fn reversed_input_recovers_same_bridge_size() {
        let a = ring(12, 2.0, 0.0);
        let b = ring(12, 2.0, 0.5);

        let forward = stitch_contours(&a, &b, &StitchParams::default()).unwrap();
        let flipped = stitch_contours(&a, &b.reversed(), &StitchParams::default()).unwrap();

        assert!(!forward.reversed);
        assert!(flipped.reversed);
        assert_eq!(flipped.mesh.face_count(), forward.mesh.face_count());
        assert_relative_eq!(
            flipped.mesh.surface_area(),
            forward.mesh.surface_area(),
            epsilon = 1e-10
        );
    }

    #[test]
    fn pairs_match_individual_stitches() {
        let pairs = vec![
            (square(0.0), square(1.0)),
            (ring(5, 1.0, 0.0), ring(3, 1.0, 1.0)),
            (Contour::new(vec![Point3::origin()]), square(2.0)),
        ];

        let results = stitch_pairs(&pairs, &StitchParams::default());
        assert_eq!(results.len(), 3);

        let single = stitch_contours(&pairs[0].0, &pairs[0].1, &StitchParams::default()).unwrap();
        assert_eq!(results[0].as_ref().unwrap().mesh.faces, single.mesh.faces);
        assert_eq!(results[1].as_ref().unwrap().mesh.face_count(), 8);
        assert_eq!(
            results[2].as_ref().unwrap_err(),
            &StitchError::insufficient_points(2, 1)
        );
    }

    #[test]
    fn boundary_loops_of_open_boxes_stitch() {
        let mut lower = unit_cube();
        lower.faces.drain(2..=3);

        let mut upper = unit_cube();
        upper.faces.drain(2..=3);
        for v in &mut upper.vertices {
            v.z += 2.0;
        }

        let stitched =
            stitch_boundary_loops(&lower, &upper, &StitchParams::default()).unwrap();

        assert_eq!(stitched.mesh.vertex_count(), 8);
        assert_eq!(stitched.mesh.face_count(), 8);
        // Four 1 x 2 sides between the rims.
        assert_relative_eq!(stitched.mesh.surface_area(), 8.0, epsilon = 1e-10);
    }

    #[test]
    fn watertight_mesh_cannot_be_rim_stitched() {
        let closed = unit_cube();
        let mut open = unit_cube();
        open.faces.drain(2..=3);

        let err = stitch_boundary_loops(&closed, &open, &StitchParams::default()).unwrap_err();
        assert_eq!(err, StitchError::unexpected_loop_count(1, 0));
    }
}
