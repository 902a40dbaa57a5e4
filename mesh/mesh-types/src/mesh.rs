//! Indexed triangle mesh.

use crate::Triangle;
use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh.
///
/// Vertex positions live in one flat buffer and faces reference them by
/// index, so several faces can share a vertex and downstream code can
/// append whole point ranges (a stitched bridge appends one contour after
/// the other and indexes across both).
///
/// # Winding Order
///
/// Faces wind counter-clockwise seen from outside; normals point outward
/// by the right-hand rule.
///
/// # Example
///
/// ```
/// use mesh_types::{IndexedMesh, Point3};
///
/// let mut mesh = IndexedMesh::new();
/// let a = mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
/// let b = mesh.add_vertex(Point3::new(2.0, 0.0, 0.0));
/// let c = mesh.add_vertex(Point3::new(0.0, 2.0, 0.0));
/// mesh.add_face(a, b, c);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert!((mesh.surface_area() - 2.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexedMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3<f64>>,

    /// Faces as index triples into `vertices`, wound counter-clockwise.
    pub faces: Vec<[u32; 3]>,
}

impl IndexedMesh {
    /// An empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// An empty mesh with room for `vertex_count` vertices and
    /// `face_count` faces.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Wraps existing vertex and face buffers as a mesh.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{IndexedMesh, Point3};
    ///
    /// let mesh = IndexedMesh::from_parts(
    ///     vec![
    ///         Point3::new(0.0, 0.0, 0.0),
    ///         Point3::new(1.0, 0.0, 0.0),
    ///         Point3::new(1.0, 1.0, 0.0),
    ///         Point3::new(0.0, 1.0, 0.0),
    ///     ],
    ///     vec![[0, 1, 2], [0, 2, 3]],
    /// );
    /// assert_eq!(mesh.face_count(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Point3<f64>>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Appends a vertex and returns its index.
    // Indices are u32; vertex counts past 4 billion are out of scope.
    #[allow(clippy::cast_possible_truncation)]
    pub fn add_vertex(&mut self, position: Point3<f64>) -> u32 {
        let id = self.vertices.len() as u32;
        self.vertices.push(position);
        id
    }

    /// Appends a face from three vertex indices.
    ///
    /// Indices are not validated against the vertex buffer; callers keep
    /// them in range.
    #[inline]
    pub fn add_face(&mut self, v0: u32, v1: u32, v2: u32) {
        self.faces.push([v0, v1, v2]);
    }

    /// Number of vertices in the mesh.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces in the mesh.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Whether the mesh has no faces.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Resolves one face into a [`Triangle`], `None` when out of range.
    #[must_use]
    pub fn triangle(&self, face_index: usize) -> Option<Triangle> {
        self.faces
            .get(face_index)
            .map(|&face| self.face_triangle(face))
    }

    /// Iterates over all faces as resolved [`Triangle`]s.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.faces.iter().map(|&face| self.face_triangle(face))
    }

    /// Sum of all face areas.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.triangles().map(|t| t.area()).sum()
    }

    /// Appends another mesh's vertices and faces onto this one.
    ///
    /// Face indices of `other` are shifted past this mesh's vertices, so
    /// both parts keep their geometry and stay addressable.
    // Indices are u32; vertex counts past 4 billion are out of scope.
    #[allow(clippy::cast_possible_truncation)]
    pub fn merge(&mut self, other: &Self) {
        let base = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.faces.extend(
            other
                .faces
                .iter()
                .map(|&[a, b, c]| [a + base, b + base, c + base]),
        );
    }

    fn face_triangle(&self, [a, b, c]: [u32; 3]) -> Triangle {
        Triangle::new(
            self.vertices[a as usize],
            self.vertices[b as usize],
            self.vertices[c as usize],
        )
    }
}

/// A closed unit cube from (0,0,0) to (1,1,1).
///
/// Vertices 0-3 are the bottom ring at z=0 and 4-7 the top ring at z=1,
/// both counter-clockwise seen from above. The two top faces sit at face
/// indices 2 and 3, so draining them leaves a box with the top rim open.
///
/// # Example
///
/// ```
/// use mesh_types::unit_cube;
///
/// let cube = unit_cube();
/// assert_eq!(cube.vertex_count(), 8);
/// assert!((cube.surface_area() - 6.0).abs() < 1e-10);
/// ```
#[must_use]
pub fn unit_cube() -> IndexedMesh {
    let vertices = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
        Point3::new(1.0, 0.0, 1.0),
        Point3::new(1.0, 1.0, 1.0),
        Point3::new(0.0, 1.0, 1.0),
    ];

    // Bottom pair, top pair, then front/back/left/right, all CCW from
    // outside.
    let faces = vec![
        [0, 2, 1],
        [0, 3, 2],
        [4, 5, 6],
        [4, 6, 7],
        [0, 1, 5],
        [0, 5, 4],
        [3, 7, 6],
        [3, 6, 2],
        [0, 4, 7],
        [0, 7, 3],
        [1, 2, 6],
        [1, 6, 5],
    ];

    IndexedMesh::from_parts(vertices, faces)
}
