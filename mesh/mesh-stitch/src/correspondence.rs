//! Mutual nearest-neighbor anchor search between two contours.
//!
//! The stitch needs one well-founded starting edge between the contours.
//! Rather than trusting index 0 of each input, the anchor is the closest
//! pair of vertices that agree on each other: `A[i]`'s nearest neighbor in
//! B is `B[j]`, and `B[j]`'s nearest neighbor in A is `A[i]`.
//!
//! KD-tree queries keep the search at O((nA + nB) log n).

use contour_types::Contour;
use kiddo::{KdTree, SquaredEuclidean};
use nalgebra::Point3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{StitchError, StitchResult};

/// A pair of mutually-nearest vertices, one from each contour.
///
/// The pair is symmetric by construction: `index_a` is the nearest vertex
/// of A to `B[index_b]` and vice versa.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnchorPair {
    /// Vertex index into the first contour.
    pub index_a: usize,
    /// Vertex index into the second contour.
    pub index_b: usize,
    /// Euclidean distance between the two anchor vertices.
    pub distance: f64,
}

/// Builds a KD-tree over a point sequence.
fn build_kdtree(points: &[Point3<f64>]) -> KdTree<f64, 3> {
    let mut tree: KdTree<f64, 3> = KdTree::new();
    for (i, p) in points.iter().enumerate() {
        tree.add(&[p.x, p.y, p.z], i as u64);
    }
    tree
}

/// Queries the nearest tree entry for every point.
///
/// Returns `(index, squared_distance)` per query point.
fn nearest_indices(queries: &[Point3<f64>], tree: &KdTree<f64, 3>) -> Vec<(usize, f64)> {
    queries
        .iter()
        .map(|p| {
            let nearest = tree.nearest_one::<SquaredEuclidean>(&[p.x, p.y, p.z]);
            #[allow(clippy::cast_possible_truncation)]
            let index = nearest.item as usize;
            (index, nearest.distance)
        })
        .collect()
}

/// Finds the anchor pair joining two contours.
///
/// Collects all mutual nearest-neighbor pairs and picks the one with the
/// smallest separation. Ties are broken toward the lowest `index_a`, which
/// keeps the result deterministic for symmetric inputs.
///
/// # Arguments
///
/// * `a` - First contour
/// * `b` - Second contour
/// * `max_distance` - Optional cutoff; mutual pairs farther apart than this
///   are rejected. `None` disables filtering.
///
/// # Returns
///
/// The selected [`AnchorPair`].
///
/// # Errors
///
/// * [`StitchError::InsufficientPoints`] if either contour is empty.
/// * [`StitchError::NoCorrespondence`] if no mutual pair survives the
///   distance cutoff.
pub fn find_anchor(
    a: &Contour,
    b: &Contour,
    max_distance: Option<f64>,
) -> StitchResult<AnchorPair> {
    if a.is_empty() || b.is_empty() {
        return Err(StitchError::insufficient_points(
            1,
            a.len().min(b.len()),
        ));
    }

    let tree_a = build_kdtree(a.points());
    let tree_b = build_kdtree(b.points());
    let nn_ab = nearest_indices(a.points(), &tree_b);
    let nn_ba = nearest_indices(b.points(), &tree_a);

    let max_dist_sq = max_distance.map_or(f64::MAX, |d| d * d);

    let mut mutual_count = 0_usize;
    let mut best: Option<(usize, usize, f64)> = None;
    for (i, &(j, dist_sq)) in nn_ab.iter().enumerate() {
        if nn_ba[j].0 != i {
            continue;
        }
        mutual_count += 1;
        if dist_sq > max_dist_sq {
            continue;
        }
        // Strict < keeps the first (lowest index_a) pair on ties.
        if best.is_none_or(|(_, _, best_sq)| dist_sq < best_sq) {
            best = Some((i, j, dist_sq));
        }
    }

    debug!(
        "Found {} mutual nearest-neighbor pairs between {} and {} points",
        mutual_count,
        a.len(),
        b.len()
    );

    let (index_a, index_b, dist_sq) = best.ok_or(StitchError::NoCorrespondence)?;
    debug!(
        "Anchor pair ({}, {}), separation {:.6}",
        index_a,
        index_b,
        dist_sq.sqrt()
    );

    Ok(AnchorPair {
        index_a,
        index_b,
        distance: dist_sq.sqrt(),
    })
}
