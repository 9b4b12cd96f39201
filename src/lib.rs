//! # Sphereloop
//!
//! Sphere approximation by Loop subdivision of a regular icosahedron.
//!
//! Sphereloop refines a coarse closed triangle mesh into a progressively
//! smoother approximation of the unit sphere. Starting from the regular
//! icosahedron (12 vertices, 20 faces), each refinement level applies one
//! Loop subdivision step, optionally followed by re-projection onto the
//! unit sphere, and every intermediate mesh is retained.
//!
//! ## Quick Start
//!
//! ```
//! use sphereloop::prelude::*;
//!
//! // Refine for 3 levels, projecting every level onto the unit sphere.
//! let options = RefineOptions::new(3).with_projection(true);
//! let meshes = refine(&options).unwrap();
//!
//! // One mesh per level, coarse to fine.
//! assert_eq!(meshes.len(), 4);
//! assert_eq!(meshes[0].stats(), (12, 20));
//! assert_eq!(meshes[3].stats(), (642, 1280));
//! ```
//!
//! ## Working with a single mesh
//!
//! ```
//! use sphereloop::prelude::*;
//!
//! let base = icosahedron();
//! let next = subdivide(&base).unwrap();
//!
//! // One new vertex per edge, four faces per face.
//! assert_eq!(next.num_vertices(), 12 + 30);
//! assert_eq!(next.num_faces(), 4 * 20);
//! ```
//!
//! ## Topology queries
//!
//! ```
//! use sphereloop::prelude::*;
//!
//! let mesh = icosahedron();
//! let topology = EdgeTopology::extract(&mesh).unwrap();
//!
//! assert_eq!(topology.num_edges(), 30);
//! assert!(topology.is_closed());
//! for neighbors in topology.vertex_adjacency() {
//!     assert_eq!(neighbors.len(), 5);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod error;
pub mod mesh;
pub mod metrics;
pub mod pipeline;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use sphereloop::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algo::{project_to_sphere, subdivide, subdivide_sequential, Progress};
    pub use crate::error::{MeshError, Result};
    pub use crate::mesh::{edge_key, icosahedron, EdgeKey, EdgeTopology, TriMesh};
    pub use crate::pipeline::{refine, refine_with_progress, RefineOptions};
}

// Re-export nalgebra types for convenience
pub use nalgebra;
