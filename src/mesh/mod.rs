//! Core mesh data structures.
//!
//! The primary type is [`TriMesh`], a face-vertex triangle mesh: a flat
//! array of vertex positions plus an array of index triples. Vertices and
//! faces carry no identity beyond their index into the per-mesh arrays.
//!
//! Edge adjacency is not stored; [`EdgeTopology`] derives it on demand from
//! the face list, keyed by canonical `(min, max)` vertex pairs.
//!
//! # Construction
//!
//! ```
//! use sphereloop::mesh::{icosahedron, EdgeTopology, TriMesh};
//! use nalgebra::Point3;
//!
//! // From explicit data (validated):
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//! ];
//! let mesh = TriMesh::new(vertices, vec![[0, 1, 2]]).unwrap();
//!
//! // Or the built-in level-0 base mesh:
//! let base = icosahedron();
//! let topology = EdgeTopology::extract(&base).unwrap();
//! assert_eq!(topology.num_edges(), 30);
//! ```

mod icosahedron;
mod topology;
mod trimesh;

pub use icosahedron::icosahedron;
pub use topology::{edge_key, EdgeFaces, EdgeKey, EdgeTopology};
pub use trimesh::TriMesh;
