//! The refinement pipeline: icosahedron → N subdivision levels.

use crate::algo::{project_to_sphere, subdivide, subdivide_sequential, Progress};
use crate::error::{MeshError, Result};
use crate::mesh::{icosahedron, TriMesh};

/// Options for the refinement pipeline.
#[derive(Debug, Clone)]
pub struct RefineOptions {
    /// Number of subdivision levels to apply after the base mesh.
    pub levels: usize,

    /// Whether to re-project every level onto the unit sphere.
    /// If false (the default), only the base icosahedron is unit-radius and
    /// later levels follow the plain Loop scheme.
    pub project_each_step: bool,

    /// Whether to use parallel execution (default: true).
    pub parallel: bool,
}

impl RefineOptions {
    /// Create options with the specified number of levels.
    pub fn new(levels: usize) -> Self {
        Self {
            levels,
            project_each_step: false,
            parallel: true,
        }
    }

    /// Validate externally supplied configuration.
    ///
    /// The configuration surface accepts a signed level count (e.g. from a
    /// command line); negative values are rejected here, before any mesh is
    /// generated.
    pub fn from_config(levels: i64, project_each_step: bool) -> Result<Self> {
        if levels < 0 {
            return Err(MeshError::invalid_param(
                "levels",
                levels,
                "subdivision level count must be non-negative",
            ));
        }
        Ok(Self::new(levels as usize).with_projection(project_each_step))
    }

    /// Set whether to re-project every level onto the unit sphere.
    pub fn with_projection(mut self, project_each_step: bool) -> Self {
        self.project_each_step = project_each_step;
        self
    }

    /// Set whether to use parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Run the refinement pipeline, retaining every intermediate mesh.
///
/// Level 0 is the (optionally projected) icosahedron; level `k + 1` is one
/// Loop subdivision of level `k`, again optionally projected. The returned
/// list has `levels + 1` entries, ordered coarse to fine, each an
/// independently owned immutable mesh.
///
/// `levels == 0` is valid and returns just the base mesh.
///
/// # Example
///
/// ```
/// use sphereloop::pipeline::{refine, RefineOptions};
///
/// let meshes = refine(&RefineOptions::new(2)).unwrap();
/// assert_eq!(meshes.len(), 3);
/// assert_eq!(meshes[2].stats(), (162, 320));
/// ```
pub fn refine(options: &RefineOptions) -> Result<Vec<TriMesh>> {
    refine_with_progress(options, &Progress::none())
}

/// Run the refinement pipeline, reporting per-level progress.
pub fn refine_with_progress(
    options: &RefineOptions,
    progress: &Progress,
) -> Result<Vec<TriMesh>> {
    let finalize = |mesh: TriMesh| -> TriMesh {
        if options.project_each_step {
            project_to_sphere(&mesh)
        } else {
            mesh
        }
    };
    let step: fn(&TriMesh) -> Result<TriMesh> = if options.parallel {
        subdivide
    } else {
        subdivide_sequential
    };

    let mut levels = Vec::with_capacity(options.levels + 1);
    levels.push(finalize(icosahedron()));

    for k in 0..options.levels {
        progress.report(k, options.levels, "Loop subdivision");
        let next = step(&levels[k])?;
        levels.push(finalize(next));
    }
    progress.report(options.levels, options.levels, "Loop subdivision");

    Ok(levels)
}
