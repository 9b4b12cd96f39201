//! The level-0 base mesh: a regular icosahedron.

use nalgebra::Point3;

use crate::mesh::TriMesh;

/// The 20-face connectivity of the regular icosahedron, matching the
/// vertex order produced by [`icosahedron`]. All faces wind consistently
/// outward.
const ICOSAHEDRON_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Generate a regular icosahedron inscribed in the unit sphere.
///
/// The 12 vertices are the cyclic permutations of `(0, ±1, ±φ)` with
/// φ the golden ratio, rescaled to unit length so every vertex sits at
/// radius 1 (up to floating-point rounding). Deterministic and pure:
/// every call yields the identical mesh.
///
/// # Example
///
/// ```
/// let mesh = sphereloop::mesh::icosahedron();
/// assert_eq!(mesh.stats(), (12, 20));
/// ```
pub fn icosahedron() -> TriMesh {
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;

    let raw = [
        [-1.0, phi, 0.0],
        [1.0, phi, 0.0],
        [-1.0, -phi, 0.0],
        [1.0, -phi, 0.0],
        [0.0, -1.0, phi],
        [0.0, 1.0, phi],
        [0.0, -1.0, -phi],
        [0.0, 1.0, -phi],
        [phi, 0.0, -1.0],
        [phi, 0.0, 1.0],
        [-phi, 0.0, -1.0],
        [-phi, 0.0, 1.0],
    ];

    let vertices = raw
        .iter()
        .map(|&[x, y, z]| {
            let p = Point3::new(x, y, z);
            p / p.coords.norm()
        })
        .collect();

    TriMesh::from_raw(vertices, ICOSAHEDRON_FACES.to_vec())
}
