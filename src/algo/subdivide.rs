//! Loop subdivision for triangle meshes.
//!
//! One subdivision step turns each triangle into four by inserting a new
//! "odd" vertex on every edge and smoothing the original "even" vertices,
//! following Loop's stencils (Loop, 1987) with Warren's valence weights.

use std::collections::HashMap;

use nalgebra::{Point3, Vector3};
use rayon::prelude::*;

use crate::error::{MeshError, Result};
use crate::mesh::{edge_key, EdgeKey, EdgeTopology, TriMesh};

/// Perform one Loop subdivision step.
///
/// Pure function of its input: the argument is never mutated, and the
/// result depends only on the input mesh. Every edge gains one new vertex
/// and every face splits into four, so the output satisfies
/// `|V'| = |V| + |E|` and `|F'| = 4 |F|`.
///
/// The per-edge, per-vertex and per-face passes run on the rayon thread
/// pool; use [`subdivide_sequential`] for single-threaded execution. Both
/// produce bit-identical results.
///
/// # Errors
///
/// Fails with [`MeshError::NonManifoldEdge`] if any edge of the input has
/// more than two adjacent faces. The engine does not repair malformed
/// meshes.
///
/// # Vertex rules
///
/// - **Interior odd vertex**: `3/8 (v1 + v2) + 1/8 (v3 + v4)`, where
///   `v3, v4` are the vertices opposite the edge in its two faces.
/// - **Boundary odd vertex**: the midpoint `(v1 + v2) / 2`. Best-effort
///   fallback for open meshes; closed spherical input never takes it.
/// - **Even vertex** of valence `n`: `(1 - nβ) v + β Σ neighbors`, with
///   β = 3/16 for n = 3 and Warren's `(1/n)(5/8 - (3/8 + ¼ cos(2π/n))²)`
///   otherwise. All stencils read pre-subdivision positions only.
pub fn subdivide(mesh: &TriMesh) -> Result<TriMesh> {
    subdivide_impl(mesh, true)
}

/// Perform one Loop subdivision step without using the rayon thread pool.
///
/// Numerically identical to [`subdivide`]; exists for benchmarking and for
/// callers that manage their own parallelism.
pub fn subdivide_sequential(mesh: &TriMesh) -> Result<TriMesh> {
    subdivide_impl(mesh, false)
}

fn subdivide_impl(mesh: &TriMesh, parallel: bool) -> Result<TriMesh> {
    let topology = EdgeTopology::extract(mesh)?;

    // Edge -> index of its odd vertex among the new vertices, assigned in
    // first-seen edge order so the output layout is deterministic.
    let num_original = mesh.num_vertices();
    let odd_slots: HashMap<EdgeKey, usize> = topology
        .keys()
        .iter()
        .enumerate()
        .map(|(slot, &key)| (key, num_original + slot))
        .collect();

    let odd_vertices = odd_vertex_positions(mesh, &topology, parallel)?;
    let even_vertices = even_vertex_positions(mesh, &topology, parallel);
    let faces = retriangulate(mesh.faces(), &odd_slots, parallel)?;

    let mut vertices = even_vertices;
    vertices.extend(odd_vertices);
    TriMesh::new(vertices, faces)
}

/// Positions of the new odd vertices, one per edge, in first-seen edge
/// order.
fn odd_vertex_positions(
    mesh: &TriMesh,
    topology: &EdgeTopology,
    parallel: bool,
) -> Result<Vec<Point3<f64>>> {
    let compute = |&key: &EdgeKey| -> Result<Point3<f64>> {
        // Extraction guarantees the key exists.
        let adjacent = topology.adjacent_faces(key).ok_or_else(|| inconsistent(key))?;
        let (v1, v2) = key;
        let p1 = mesh.vertices()[v1].coords;
        let p2 = mesh.vertices()[v2].coords;

        let position = match adjacent.second {
            Some(second) => {
                let o1 = opposite_vertex(mesh.faces()[adjacent.first], key)
                    .ok_or_else(|| inconsistent(key))?;
                let o2 = opposite_vertex(mesh.faces()[second], key)
                    .ok_or_else(|| inconsistent(key))?;
                let p3 = mesh.vertices()[o1].coords;
                let p4 = mesh.vertices()[o2].coords;
                (p1 + p2) * (3.0 / 8.0) + (p3 + p4) * (1.0 / 8.0)
            }
            // Boundary edge: plain midpoint.
            None => (p1 + p2) * 0.5,
        };

        Ok(Point3::from(position))
    };

    if parallel {
        topology.keys().par_iter().map(compute).collect()
    } else {
        topology.keys().iter().map(compute).collect()
    }
}

/// The vertex of `face` that is not an endpoint of `key`.
fn opposite_vertex(face: [usize; 3], key: EdgeKey) -> Option<usize> {
    face.into_iter().find(|&v| v != key.0 && v != key.1)
}

/// Smoothed positions for the original vertices.
///
/// Reads only the input positions; vertices with no recorded neighbors are
/// left where they are.
fn even_vertex_positions(
    mesh: &TriMesh,
    topology: &EdgeTopology,
    parallel: bool,
) -> Vec<Point3<f64>> {
    let adjacency = topology.vertex_adjacency();
    let vertices = mesh.vertices();

    let compute = |i: usize| -> Point3<f64> {
        let neighbors = &adjacency[i];
        let n = neighbors.len();
        if n == 0 {
            return vertices[i];
        }

        let beta = loop_beta(n);
        let neighbor_sum: Vector3<f64> = neighbors.iter().map(|&j| vertices[j].coords).sum();
        Point3::from(vertices[i].coords * (1.0 - n as f64 * beta) + neighbor_sum * beta)
    };

    if parallel {
        (0..vertices.len()).into_par_iter().map(compute).collect()
    } else {
        (0..vertices.len()).map(compute).collect()
    }
}

/// The Loop β weight for a vertex of valence `n`.
fn loop_beta(n: usize) -> f64 {
    if n == 3 {
        // Exact closed form at the valence-3 singular case.
        3.0 / 16.0
    } else {
        // Warren's weight: β = 1/n (5/8 - (3/8 + 1/4 cos(2π/n))²)
        let n_f = n as f64;
        let inner = 3.0 / 8.0 + 0.25 * (2.0 * std::f64::consts::PI / n_f).cos();
        (1.0 / n_f) * (5.0 / 8.0 - inner * inner)
    }
}

/// Split every face into four, connecting its corners to the odd vertices
/// on its edges. Winding follows the original face.
fn retriangulate(
    faces: &[[usize; 3]],
    odd_slots: &HashMap<EdgeKey, usize>,
    parallel: bool,
) -> Result<Vec<[usize; 3]>> {
    let split = |face: &[usize; 3]| -> Result<[[usize; 3]; 4]> {
        let [v1, v2, v3] = *face;
        let a = odd_vertex_index(odd_slots, v1, v2)?;
        let b = odd_vertex_index(odd_slots, v2, v3)?;
        let c = odd_vertex_index(odd_slots, v3, v1)?;

        Ok([[v1, a, c], [v2, b, a], [v3, c, b], [a, b, c]])
    };

    let quads: Vec<[[usize; 3]; 4]> = if parallel {
        faces.par_iter().map(split).collect::<Result<_>>()?
    } else {
        faces.iter().map(split).collect::<Result<_>>()?
    };

    Ok(quads.into_iter().flatten().collect())
}

/// Look up the odd vertex inserted on edge `(v0, v1)`.
///
/// A miss means the extraction and re-triangulation passes saw different
/// connectivity for the same mesh, which is a defect in the engine, never
/// an input condition.
fn odd_vertex_index(odd_slots: &HashMap<EdgeKey, usize>, v0: usize, v1: usize) -> Result<usize> {
    let key = edge_key(v0, v1);
    odd_slots.get(&key).copied().ok_or_else(|| inconsistent(key))
}

fn inconsistent(key: EdgeKey) -> MeshError {
    MeshError::Inconsistent {
        details: format!("edge ({}, {}) missing from the odd-vertex map", key.0, key.1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::icosahedron;

    fn tetrahedron() -> TriMesh {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 1.0, 0.0),
            Point3::new(0.5, 0.5, 1.0),
        ];
        let faces = vec![[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]];
        TriMesh::new(vertices, faces).unwrap()
    }

    #[test]
    fn test_counts_follow_euler() {
        let mesh = tetrahedron();
        let edges = EdgeTopology::extract(&mesh).unwrap().num_edges();

        let out = subdivide(&mesh).unwrap();
        assert_eq!(out.num_faces(), 4 * mesh.num_faces());
        assert_eq!(out.num_vertices(), mesh.num_vertices() + edges);
    }

    #[test]
    fn test_icosahedron_level_counts() {
        let mut mesh = icosahedron();
        let expected = [(12, 20), (42, 80), (162, 320), (642, 1280), (2562, 5120)];

        assert_eq!(mesh.stats(), expected[0]);
        for &counts in &expected[1..] {
            mesh = subdivide(&mesh).unwrap();
            assert_eq!(mesh.stats(), counts);
        }
    }

    #[test]
    fn test_preserves_manifold_closure() {
        let mut mesh = icosahedron();
        for _ in 0..3 {
            mesh = subdivide(&mesh).unwrap();
            let topo = EdgeTopology::extract(&mesh).unwrap();
            assert!(topo.is_closed());
        }
    }

    #[test]
    fn test_valence_distribution() {
        // The 12 original vertices keep valence 5; every inserted vertex
        // has valence 6.
        let mesh = subdivide(&subdivide(&icosahedron()).unwrap()).unwrap();
        let adjacency = EdgeTopology::extract(&mesh).unwrap().vertex_adjacency();

        for (v, neighbors) in adjacency.iter().enumerate() {
            let expected = if v < 12 { 5 } else { 6 };
            assert_eq!(neighbors.len(), expected, "valence of vertex {}", v);
        }
    }

    #[test]
    fn test_does_not_mutate_input() {
        let mesh = icosahedron();
        let before = mesh.clone();
        let _ = subdivide(&mesh).unwrap();
        assert_eq!(mesh, before);
    }

    #[test]
    fn test_interior_odd_vertex_position() {
        // Two triangles sharing the edge (0, 1):
        // 3/8 ((0,0,0) + (2,0,0)) + 1/8 ((1,2,0) + (1,-2,0)) = (1, 0, 0)
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(1.0, 2.0, 0.0),
            Point3::new(1.0, -2.0, 0.0),
        ];
        let mesh = TriMesh::new(vertices, vec![[0, 1, 2], [1, 0, 3]]).unwrap();

        let topology = EdgeTopology::extract(&mesh).unwrap();
        let odd = odd_vertex_positions(&mesh, &topology, false).unwrap();

        let slot = topology.keys().iter().position(|&k| k == (0, 1)).unwrap();
        assert!((odd[slot] - Point3::new(1.0, 0.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_boundary_odd_vertex_is_midpoint() {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 1.0, 0.0),
        ];
        let mesh = TriMesh::new(vertices, vec![[0, 1, 2]]).unwrap();

        let out = subdivide(&mesh).unwrap();
        assert_eq!(out.stats(), (6, 4));

        // Each odd vertex of an open triangle is a plain edge midpoint.
        let topology = EdgeTopology::extract(&mesh).unwrap();
        for (slot, &(v0, v1)) in topology.keys().iter().enumerate() {
            let midpoint =
                Point3::from((mesh.vertices()[v0].coords + mesh.vertices()[v1].coords) * 0.5);
            assert!((out.vertices()[3 + slot] - midpoint).norm() < 1e-12);
        }
    }

    #[test]
    fn test_loop_beta() {
        assert!((loop_beta(3) - 3.0 / 16.0).abs() < 1e-15);

        // Valence 6 (regular): Warren's weight is 1/16 exactly, since
        // cos(π/3) = 1/2 makes the inner term 1/2.
        assert!((loop_beta(6) - 1.0 / 16.0).abs() < 1e-12);

        // Valence 5 (icosahedron corners) lies strictly between.
        let beta5 = loop_beta(5);
        assert!(beta5 > loop_beta(6) && beta5 < loop_beta(3));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mesh = subdivide(&icosahedron()).unwrap();

        let parallel = subdivide(&mesh).unwrap();
        let sequential = subdivide_sequential(&mesh).unwrap();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_deterministic_across_runs() {
        let a = subdivide(&subdivide(&icosahedron()).unwrap()).unwrap();
        let b = subdivide(&subdivide(&icosahedron()).unwrap()).unwrap();
        assert_eq!(a, b);
    }
}
