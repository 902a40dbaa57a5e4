//! Rotation and winding alignment of two contours around an anchor pair.
//!
//! Both contours are re-read through rotated index arrays so that the
//! anchor vertices come first; the underlying point data is never moved.
//! A resampled probe then compares the two traversal directions and
//! reverses the second contour's order when the opposite direction pairs
//! the rims more tightly.

use contour_types::Contour;
use nalgebra::Point3;
use tracing::debug;

use crate::correspondence::AnchorPair;

/// Outcome of rotating and winding-aligning two contours.
///
/// `order_a` and `order_b` index into the original contours; walking them
/// in sequence traverses each rim starting at its anchor vertex, in
/// directions the winding probe judged compatible. The probe sums are kept
/// for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct ContourAlignment {
    /// Traversal order for the first contour, anchor vertex first.
    pub order_a: Vec<usize>,
    /// Traversal order for the second contour, anchor vertex first.
    pub order_b: Vec<usize>,
    /// Whether the second contour's traversal was reversed.
    pub reversed: bool,
    /// Probe mismatch when walking both rims in input direction.
    pub forward_gap: f64,
    /// Probe mismatch when walking the first rim backwards.
    pub reversed_gap: f64,
}

/// Cyclic index order of length `len` starting at `start`.
fn rotated_indices(len: usize, start: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    let start = start % len;
    (0..len).map(|k| (start + k) % len).collect()
}

/// Rotated probe points, resampled to `target` points when counts differ.
///
/// Resampling is uniform over the open rotated polyline with endpoints
/// kept. Probe only; the bridge still consumes original vertices.
fn probe_points(contour: &Contour, order: &[usize], target: usize) -> Vec<Point3<f64>> {
    let rotated: Vec<Point3<f64>> = order.iter().map(|&i| contour.points()[i]).collect();
    if rotated.len() == target {
        return rotated;
    }
    Contour::new(rotated).resampled(target).points().to_vec()
}

/// Aligns two contours around their anchor pair.
///
/// Rotates both index orders so the anchor vertices come first, then runs
/// the winding probe: walk both rims in parallel and sum the pointwise
/// distances, once in input direction and once with the first rim walked
/// backwards. A strictly smaller reversed sum flips the second contour's
/// traversal. The reversal keeps `order_b[0]` (the anchor) fixed and
/// reverses only the remainder, so the starting edge of the bridge is the
/// anchor edge in both directions.
///
/// # Arguments
///
/// * `a` - First contour
/// * `b` - Second contour
/// * `anchor` - Mutual nearest-neighbor pair from
///   [`find_anchor`](crate::find_anchor)
///
/// # Returns
///
/// The [`ContourAlignment`] with both traversal orders and the probe sums.
#[must_use]
pub fn align_contours(a: &Contour, b: &Contour, anchor: &AnchorPair) -> ContourAlignment {
    let order_a = rotated_indices(a.len(), anchor.index_a);
    let mut order_b = rotated_indices(b.len(), anchor.index_b);

    let target = a.len().max(b.len());
    let probe_a = probe_points(a, &order_a, target);
    let probe_b = probe_points(b, &order_b, target);

    let forward_gap: f64 = probe_a
        .iter()
        .zip(&probe_b)
        .map(|(p, q)| (p - q).norm())
        .sum();
    let reversed_gap: f64 = probe_a
        .iter()
        .rev()
        .zip(&probe_b)
        .map(|(p, q)| (p - q).norm())
        .sum();

    let reversed = reversed_gap < forward_gap;
    if reversed && order_b.len() > 1 {
        order_b[1..].reverse();
    }

    debug!(
        "Winding probe: forward {:.6}, reversed {:.6} -> {}",
        forward_gap,
        reversed_gap,
        if reversed { "reversed" } else { "forward" }
    );

    ContourAlignment {
        order_a,
        order_b,
        reversed,
        forward_gap,
        reversed_gap,
    }
}
