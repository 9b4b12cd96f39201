//! Spherical re-projection.

use nalgebra::Point3;

use crate::mesh::TriMesh;

/// Project every vertex of a mesh onto the unit sphere.
///
/// Each position is divided by its own Euclidean norm, returning a new mesh
/// with the same connectivity. This is a geometric heuristic, not part of
/// the canonical Loop limit surface: applying it after every subdivision
/// step yields a more spherical (but different) sequence of meshes than
/// applying it once or never.
///
/// Zero-length positions are not corrected; the resulting NaN coordinates
/// propagate visibly to the caller rather than being clamped.
///
/// # Example
///
/// ```
/// use sphereloop::algo::{project_to_sphere, subdivide};
/// use sphereloop::mesh::icosahedron;
///
/// let mesh = project_to_sphere(&subdivide(&icosahedron()).unwrap());
/// for v in mesh.vertices() {
///     assert!((v.coords.norm() - 1.0).abs() < 1e-12);
/// }
/// ```
pub fn project_to_sphere(mesh: &TriMesh) -> TriMesh {
    let vertices = mesh
        .vertices()
        .iter()
        .map(|v| Point3::from(v.coords / v.coords.norm()))
        .collect();

    TriMesh::from_raw(vertices, mesh.faces().to_vec())
}
