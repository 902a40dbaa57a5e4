//! Core mesh types shared by the contour stitching crates.
//!
//! Two types carry all mesh data in this workspace:
//!
//! - [`IndexedMesh`] - Vertex buffer plus index-triple faces; the output
//!   format of stitching
//! - [`Triangle`] - One face with resolved positions, for per-face math
//!
//! # Conventions
//!
//! Coordinates are `f64` in a right-handed system (X right, Y back,
//! Z up); no unit is assumed. Faces wind counter-clockwise seen from
//! outside, so normals point outward by the right-hand rule.
//!
//! # Example
//!
//! ```
//! use mesh_types::unit_cube;
//!
//! let mut box_mesh = unit_cube();
//! // Drop the two top faces: an open box with a four-vertex rim.
//! box_mesh.faces.drain(2..=3);
//!
//! assert_eq!(box_mesh.face_count(), 10);
//! assert!((box_mesh.surface_area() - 5.0).abs() < 1e-10);
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for all types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod mesh;
mod triangle;

// Re-export core types
pub use mesh::{IndexedMesh, unit_cube};
pub use triangle::Triangle;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
