//! The face-vertex triangle mesh.

use nalgebra::Point3;

use crate::error::{MeshError, Result};

/// A triangle mesh stored as flat vertex and face arrays.
///
/// Vertices are identified purely by their index into the vertex array, and
/// faces are index triples into that same array. A `TriMesh` is immutable
/// once constructed: subdivision and projection always build a new mesh
/// rather than editing one in place.
///
/// # Example
///
/// ```
/// use sphereloop::mesh::TriMesh;
/// use nalgebra::Point3;
///
/// let vertices = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.5, 1.0, 0.0),
/// ];
/// let mesh = TriMesh::new(vertices, vec![[0, 1, 2]]).unwrap();
/// assert_eq!(mesh.stats(), (3, 1));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TriMesh {
    vertices: Vec<Point3<f64>>,
    faces: Vec<[usize; 3]>,
}

impl TriMesh {
    /// Build a mesh from vertex positions and triangle faces.
    ///
    /// Validates that the mesh has at least one face, that every face index
    /// is in bounds, and that no face repeats a vertex (degenerate triangle).
    pub fn new(vertices: Vec<Point3<f64>>, faces: Vec<[usize; 3]>) -> Result<Self> {
        if faces.is_empty() {
            return Err(MeshError::EmptyMesh);
        }

        for (fi, face) in faces.iter().enumerate() {
            for &vi in face {
                if vi >= vertices.len() {
                    return Err(MeshError::InvalidVertexIndex { face: fi, vertex: vi });
                }
            }
            if face[0] == face[1] || face[1] == face[2] || face[0] == face[2] {
                return Err(MeshError::DegenerateFace { face: fi });
            }
        }

        Ok(Self { vertices, faces })
    }

    /// Build a mesh from arrays already known to be consistent.
    ///
    /// Used by the generator and the projector, whose outputs are valid by
    /// construction.
    pub(crate) fn from_raw(vertices: Vec<Point3<f64>>, faces: Vec<[usize; 3]>) -> Self {
        debug_assert!(!faces.is_empty());
        debug_assert!(faces
            .iter()
            .all(|f| f.iter().all(|&v| v < vertices.len())));
        Self { vertices, faces }
    }

    /// The vertex positions.
    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    /// The triangle faces, as index triples into [`Self::vertices`].
    pub fn faces(&self) -> &[[usize; 3]] {
        &self.faces
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces.
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Vertex and face counts, in that order.
    pub fn stats(&self) -> (usize, usize) {
        (self.vertices.len(), self.faces.len())
    }
}
