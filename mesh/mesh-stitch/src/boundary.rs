//! Boundary loop extraction from indexed meshes.
//!
//! A boundary edge belongs to exactly one face. Tracing boundary edges
//! through their shared vertices yields the mesh's open rims as ordered
//! vertex loops, which is how meshes enter the stitching pipeline.

use hashbrown::{HashMap, HashSet};
use mesh_types::IndexedMesh;
use tracing::{debug, warn};

use crate::error::{StitchError, StitchResult};

/// Normalize an edge so the smaller index comes first.
fn normalize_edge(v0: u32, v1: u32) -> (u32, u32) {
    if v0 < v1 { (v0, v1) } else { (v1, v0) }
}

/// Collect all edges incident to exactly one face.
///
/// Sorted by vertex index so downstream tracing is deterministic.
fn boundary_edges(mesh: &IndexedMesh) -> Vec<(u32, u32)> {
    let mut edge_faces: HashMap<(u32, u32), u32> = HashMap::new();
    for face in &mesh.faces {
        for k in 0..3 {
            let edge = normalize_edge(face[k], face[(k + 1) % 3]);
            *edge_faces.entry(edge).or_insert(0) += 1;
        }
    }

    let mut edges: Vec<(u32, u32)> = edge_faces
        .iter()
        .filter(|&(_, &count)| count == 1)
        .map(|(&edge, _)| edge)
        .collect();
    edges.sort_unstable();
    edges
}

/// Extracts all boundary loops of a mesh, validating the count.
///
/// Boundary edges are traced into closed vertex loops by walking from
/// vertex to vertex along the boundary. A watertight mesh has no loops;
/// each open rim contributes one.
///
/// # Arguments
///
/// * `mesh` - Mesh to analyze
/// * `expected` - Number of loops the caller requires
///
/// # Returns
///
/// The loops as ordered vertex index sequences, one per rim. Loop order
/// follows the lowest vertex index on each rim; traversal direction is
/// whichever way the trace first walked.
///
/// # Errors
///
/// [`StitchError::UnexpectedLoopCount`] if the mesh does not have exactly
/// `expected` loops.
pub fn boundary_loops(mesh: &IndexedMesh, expected: usize) -> StitchResult<Vec<Vec<u32>>> {
    let edges = boundary_edges(mesh);
    debug!("Found {} boundary edges", edges.len());

    // Vertex adjacency restricted to boundary edges.
    let mut neighbors: HashMap<u32, Vec<u32>> = HashMap::new();
    for &(a, b) in &edges {
        neighbors.entry(a).or_default().push(b);
        neighbors.entry(b).or_default().push(a);
    }

    let mut visited: HashSet<u32> = HashSet::new();
    let mut loops = Vec::new();

    for &(start, _) in &edges {
        if visited.contains(&start) {
            continue;
        }

        let mut chain = Vec::new();
        let mut current = start;
        let mut prev: Option<u32> = None;

        loop {
            visited.insert(current);
            chain.push(current);

            let adjacent = neighbors.get(&current).map(Vec::as_slice).unwrap_or(&[]);

            // Next vertex along the boundary, not the one we came from.
            let next = adjacent
                .iter()
                .find(|&&n| Some(n) != prev && !visited.contains(&n))
                .or_else(|| {
                    // Closing the loop is the only allowed revisit.
                    adjacent
                        .iter()
                        .find(|&&n| n == start && chain.len() > 2)
                });

            match next {
                Some(&n) if n == start => break,
                Some(&n) => {
                    prev = Some(current);
                    current = n;
                }
                None => {
                    warn!("Boundary chain starting at vertex {start} is not closed");
                    break;
                }
            }
        }

        if chain.len() >= 3 {
            loops.push(chain);
        }
    }

    debug!(
        "Detected {} boundary loops, sizes: {:?}",
        loops.len(),
        loops.iter().map(Vec::len).collect::<Vec<_>>()
    );

    if loops.len() != expected {
        return Err(StitchError::unexpected_loop_count(expected, loops.len()));
    }

    Ok(loops)
}

/// Extracts the single boundary loop of a mesh with exactly one open rim.
///
/// # Errors
///
/// [`StitchError::UnexpectedLoopCount`] if the mesh has zero or several
/// boundary loops.
pub fn boundary_loop(mesh: &IndexedMesh) -> StitchResult<Vec<u32>> {
    let mut loops = boundary_loops(mesh, 1)?;
    loops.pop().ok_or(StitchError::UnexpectedLoopCount {
        expected: 1,
        found: 0,
    })
}
