//! Edge and vertex adjacency extraction.
//!
//! Edges are not stored in [`TriMesh`]; they are derived on demand by
//! scanning the face list. Each edge is keyed by its canonical form
//! (smaller vertex index first), so the edge between vertices 5 and 2 and
//! the edge between 2 and 5 resolve to the same entry.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::{MeshError, Result};
use crate::mesh::TriMesh;

/// Canonical undirected edge key: smaller vertex index first.
pub type EdgeKey = (usize, usize);

/// Canonicalize a vertex pair into an [`EdgeKey`].
#[inline]
pub fn edge_key(v0: usize, v1: usize) -> EdgeKey {
    if v0 < v1 {
        (v0, v1)
    } else {
        (v1, v0)
    }
}

/// The faces adjacent to one edge.
///
/// A closed manifold mesh has `second = Some(_)` for every edge; an open
/// mesh has boundary edges with a single adjacent face.
#[derive(Debug, Clone, Copy)]
pub struct EdgeFaces {
    /// The first face seen referencing this edge.
    pub first: usize,
    /// The second face, if any.
    pub second: Option<usize>,
}

impl EdgeFaces {
    /// Number of faces adjacent to this edge (1 or 2).
    pub fn count(&self) -> usize {
        if self.second.is_some() {
            2
        } else {
            1
        }
    }
}

/// The edge-adjacency structure of a mesh.
///
/// Keys are stored both in a hash map (for lookup) and in first-seen order
/// (for deterministic iteration): walking faces in order and their edges in
/// winding order yields the same edge sequence on every run, so nothing
/// downstream depends on hash iteration order.
#[derive(Debug, Clone)]
pub struct EdgeTopology {
    map: HashMap<EdgeKey, EdgeFaces>,
    keys: Vec<EdgeKey>,
    num_vertices: usize,
}

impl EdgeTopology {
    /// Extract all edges of a mesh and the faces adjacent to each.
    ///
    /// Fails with [`MeshError::NonManifoldEdge`] if any edge is referenced
    /// by more than two faces. The engine does not process or repair
    /// non-manifold meshes.
    pub fn extract(mesh: &TriMesh) -> Result<Self> {
        let faces = mesh.faces();
        let mut map: HashMap<EdgeKey, EdgeFaces> = HashMap::with_capacity(faces.len() * 3 / 2);
        let mut keys = Vec::with_capacity(faces.len() * 3 / 2);

        for (fi, face) in faces.iter().enumerate() {
            for i in 0..3 {
                let key = edge_key(face[i], face[(i + 1) % 3]);
                match map.entry(key) {
                    Entry::Vacant(slot) => {
                        slot.insert(EdgeFaces { first: fi, second: None });
                        keys.push(key);
                    }
                    Entry::Occupied(mut slot) => {
                        let adjacent = slot.get_mut();
                        if adjacent.second.is_some() {
                            return Err(MeshError::NonManifoldEdge { v0: key.0, v1: key.1 });
                        }
                        adjacent.second = Some(fi);
                    }
                }
            }
        }

        Ok(Self {
            map,
            keys,
            num_vertices: mesh.num_vertices(),
        })
    }

    /// Number of distinct edges.
    pub fn num_edges(&self) -> usize {
        self.keys.len()
    }

    /// Edge keys in first-seen (deterministic) order.
    pub fn keys(&self) -> &[EdgeKey] {
        &self.keys
    }

    /// The faces adjacent to an edge, if the edge exists.
    pub fn adjacent_faces(&self, key: EdgeKey) -> Option<&EdgeFaces> {
        self.map.get(&key)
    }

    /// Iterate over `(edge, adjacent faces)` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (EdgeKey, &EdgeFaces)> + '_ {
        self.keys.iter().map(move |k| (*k, &self.map[k]))
    }

    /// True if every edge has exactly two adjacent faces.
    pub fn is_closed(&self) -> bool {
        self.map.values().all(|e| e.second.is_some())
    }

    /// Neighbor lists for every vertex, derived from the edge set.
    ///
    /// Each undirected edge contributes each endpoint to the other's list
    /// exactly once, so the result is a simple adjacency graph; the list
    /// length is the vertex valence. Neighbors appear in first-seen edge
    /// order.
    pub fn vertex_adjacency(&self) -> Vec<Vec<usize>> {
        let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); self.num_vertices];
        for &(v0, v1) in &self.keys {
            adjacency[v0].push(v1);
            adjacency[v1].push(v0);
        }
        adjacency
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

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

    fn single_triangle() -> TriMesh {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 1.0, 0.0),
        ];
        TriMesh::new(vertices, vec![[0, 1, 2]]).unwrap()
    }

    #[test]
    fn test_edge_key_canonical() {
        assert_eq!(edge_key(2, 5), (2, 5));
        assert_eq!(edge_key(5, 2), (2, 5));
    }

    #[test]
    fn test_tetrahedron_edges() {
        let topo = EdgeTopology::extract(&tetrahedron()).unwrap();
        assert_eq!(topo.num_edges(), 6);
        assert!(topo.is_closed());
        for (_, faces) in topo.iter() {
            assert_eq!(faces.count(), 2);
        }
    }

    #[test]
    fn test_single_triangle_is_open() {
        let topo = EdgeTopology::extract(&single_triangle()).unwrap();
        assert_eq!(topo.num_edges(), 3);
        assert!(!topo.is_closed());
        assert_eq!(topo.adjacent_faces((0, 1)).unwrap().count(), 1);
    }

    #[test]
    fn test_non_manifold_edge_rejected() {
        // Three triangles fanning around the shared edge (0, 1).
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 1.0, 0.0),
            Point3::new(0.5, -1.0, 0.0),
            Point3::new(0.5, 0.0, 1.0),
        ];
        let faces = vec![[0, 1, 2], [0, 1, 3], [0, 1, 4]];
        let mesh = TriMesh::new(vertices, faces).unwrap();

        let err = EdgeTopology::extract(&mesh).unwrap_err();
        assert!(matches!(err, MeshError::NonManifoldEdge { v0: 0, v1: 1 }));
    }

    #[test]
    fn test_vertex_adjacency() {
        let topo = EdgeTopology::extract(&tetrahedron()).unwrap();
        let adjacency = topo.vertex_adjacency();

        // Every tetrahedron vertex neighbors the other three.
        assert_eq!(adjacency.len(), 4);
        for (v, neighbors) in adjacency.iter().enumerate() {
            assert_eq!(neighbors.len(), 3, "vertex {} should have valence 3", v);
            for other in 0..4 {
                if other != v {
                    assert!(neighbors.contains(&other));
                }
            }
        }
    }
}
