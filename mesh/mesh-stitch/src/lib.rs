//! Bridge triangulation between sampled boundary contours.
//!
//! This crate connects two open contours (usually sampled from closed
//! curves, or lifted off a mesh's open rim) with a strip of triangles:
//!
//! 1. **Anchor** - find the mutually-nearest vertex pair between the
//!    contours ([`find_anchor`])
//! 2. **Align** - rotate both traversals to start at the anchor and fix
//!    the relative winding with a resampled probe ([`align_contours`])
//! 3. **Triangulate** - walk both rims with an advancing front, closing
//!    each gap with the shorter diagonal ([`bridge_faces`])
//! 4. **Assemble** - combine both point sets into one vertex buffer and
//!    return the bridge with located rim index arrays ([`stitch_contours`])
//!
//! A bridge between contours of `nA` and `nB` vertices always has exactly
//! `nA + nB` triangles. Mismatched vertex counts are handled by fanning
//! the excess onto the other rim; thin triangles are kept, not filtered.
//!
//! # Example
//!
//! ```
//! use contour_types::{Circle, Contour};
//! use mesh_stitch::{StitchParams, boundary_loops, stitch_contours};
//! use nalgebra::{Point3, Vector3};
//!
//! // Sample two stacked circles into contours.
//! let lower = Circle::new(Point3::new(0.0, 0.0, 0.0), 10.0, Vector3::z()).unwrap();
//! let upper = Circle::new(Point3::new(0.0, 0.0, 4.0), 8.0, Vector3::z()).unwrap();
//! let a = Contour::from_curve(&lower, 32);
//! let b = Contour::from_curve(&upper, 24);
//!
//! // Bridge them.
//! let stitched = stitch_contours(&a, &b, &StitchParams::default()).unwrap();
//! assert_eq!(stitched.mesh.face_count(), 32 + 24);
//! assert_eq!(stitched.rim_a.len(), 32);
//! assert_eq!(stitched.rim_b.len(), 24);
//!
//! // The bridge is an open ribbon: its own boundary is the two rims.
//! let rims = boundary_loops(&stitched.mesh, 2).unwrap();
//! assert_eq!(rims[0].len() + rims[1].len(), 32 + 24);
//! ```
//!
//! # Determinism
//!
//! The pipeline is pure: the same two contours always produce the same
//! bridge. Ties in the anchor search and in the diagonal comparison are
//! broken toward the first contour's lower indices.

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod align;
mod boundary;
mod correspondence;
mod error;
mod stitch;
mod triangulate;

pub use align::{ContourAlignment, align_contours};
pub use boundary::{boundary_loop, boundary_loops};
pub use correspondence::{AnchorPair, find_anchor};
pub use error::{StitchError, StitchResult};
pub use stitch::{StitchParams, StitchedMesh, stitch_boundary_loops, stitch_contours, stitch_pairs};
pub use triangulate::bridge_faces;
