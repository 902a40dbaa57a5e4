//! Advancing-front bridge triangulation between two aligned rims.
//!
//! The triangulator walks both rims at once, keeping a current vertex on
//! each side and repeatedly closing the quad gap with the shorter of the
//! two possible diagonals. Every step advances exactly one rim, so a
//! bridge between rims of `nA` and `nB` vertices always has exactly
//! `nA + nB` triangles, regardless of how unequal the counts are.

use nalgebra::Point3;

/// Triangulates the bridge between two rims.
///
/// `order_a` and `order_b` are anchor-first traversal orders indexing into
/// `a_pts` / `b_pts` (see [`align_contours`](crate::align_contours)). Faces
/// are emitted in the stitched buffer space, where the first contour's
/// vertices occupy `[0, nA)` and the second's occupy `[nA, nA + nB)`, both
/// in input order.
///
/// Each step compares the two closing diagonals of the current gap and
/// advances the rim whose diagonal is strictly shorter; ties advance the
/// first rim. A rim that has advanced past its last vertex wraps back to
/// its anchor and only the other rim keeps advancing, fanning the
/// remainder onto the anchor vertex. Thin triangles from unequal vertex
/// counts are kept as-is.
///
/// Empty inputs produce no faces. Order entries must be valid indices into
/// their point slices.
///
/// # Arguments
///
/// * `a_pts` - Vertices of the first contour, in input order
/// * `b_pts` - Vertices of the second contour, in input order
/// * `order_a` - Anchor-first traversal of the first rim
/// * `order_b` - Anchor-first traversal of the second rim
///
/// # Returns
///
/// `order_a.len() + order_b.len()` triangles in stitched buffer space.
#[must_use]
// Indices are u32; vertex counts past 4 billion are out of scope.
#[allow(clippy::cast_possible_truncation)]
pub fn bridge_faces(
    a_pts: &[Point3<f64>],
    b_pts: &[Point3<f64>],
    order_a: &[usize],
    order_b: &[usize],
) -> Vec<[u32; 3]> {
    let n_a = order_a.len();
    let n_b = order_b.len();
    if n_a == 0 || n_b == 0 {
        return Vec::new();
    }

    let mut faces = Vec::with_capacity(n_a + n_b);
    let mut a_steps = 0_usize;
    let mut b_steps = 0_usize;

    while a_steps < n_a || b_steps < n_b {
        let a_cur = order_a[a_steps % n_a];
        let b_cur = order_b[b_steps % n_b];

        let advance_b = if a_steps == n_a {
            true
        } else if b_steps == n_b {
            false
        } else {
            let a_next = order_a[(a_steps + 1) % n_a];
            let b_next = order_b[(b_steps + 1) % n_b];
            let diag_b = (a_pts[a_cur] - b_pts[b_next]).norm_squared();
            let diag_a = (b_pts[b_cur] - a_pts[a_next]).norm_squared();
            // Strict < so ties advance the first rim.
            diag_b < diag_a
        };

        if advance_b {
            let b_next = order_b[(b_steps + 1) % n_b];
            faces.push([
                a_cur as u32,
                (n_a + b_cur) as u32,
                (n_a + b_next) as u32,
            ]);
            b_steps += 1;
        } else {
            let a_next = order_a[(a_steps + 1) % n_a];
            faces.push([a_cur as u32, (n_a + b_cur) as u32, a_next as u32]);
            a_steps += 1;
        }
    }

    faces
}
