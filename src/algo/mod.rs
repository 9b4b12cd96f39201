//! Mesh refinement algorithms.
//!
//! This module contains the two per-level operations of the refinement
//! pipeline:
//!
//! - **Subdivision**: one Loop subdivision step ([`subdivide`])
//! - **Projection**: spherical re-projection ([`project_to_sphere`])
//!
//! plus the [`Progress`] callback used to report per-level progress.

mod progress;
pub mod project;
pub mod subdivide;

pub use progress::Progress;
pub use project::project_to_sphere;
pub use subdivide::{subdivide, subdivide_sequential};
