//! Mesh quality metrics.
//!
//! Read-only analysis of a mesh against a target sphere: radius statistics
//! quantify how far the refined surface is from the sphere, and the area
//! statistics how evenly the triangles cover it. The subdivision engine
//! itself never consumes these.

use nalgebra::Point3;

use crate::mesh::TriMesh;

/// Quality statistics for one mesh, measured against a target radius.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshMetrics {
    /// Number of vertices.
    pub num_vertices: usize,
    /// Number of faces.
    pub num_faces: usize,
    /// Mean vertex distance from the origin.
    pub mean_radius: f64,
    /// Smallest vertex radius.
    pub min_radius: f64,
    /// Largest vertex radius.
    pub max_radius: f64,
    /// Mean absolute deviation of vertex radii from the target radius.
    pub radius_error: f64,
    /// Standard deviation of vertex radii.
    pub radius_std_dev: f64,
}

/// Compute radius statistics for a mesh against `target_radius`.
pub fn mesh_metrics(mesh: &TriMesh, target_radius: f64) -> MeshMetrics {
    let radii: Vec<f64> = mesh.vertices().iter().map(|v| v.coords.norm()).collect();
    let n = radii.len() as f64;

    let mean_radius = radii.iter().sum::<f64>() / n;
    let min_radius = radii.iter().cloned().fold(f64::INFINITY, f64::min);
    let max_radius = radii.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let radius_error = radii.iter().map(|r| (r - target_radius).abs()).sum::<f64>() / n;
    let variance = radii.iter().map(|r| (r - mean_radius).powi(2)).sum::<f64>() / n;

    MeshMetrics {
        num_vertices: mesh.num_vertices(),
        num_faces: mesh.num_faces(),
        mean_radius,
        min_radius,
        max_radius,
        radius_error,
        radius_std_dev: variance.sqrt(),
    }
}

/// Area of one triangle.
fn face_area(mesh: &TriMesh, face: [usize; 3]) -> f64 {
    let [a, b, c] = face.map(|i| mesh.vertices()[i]);
    triangle_area(a, b, c)
}

fn triangle_area(a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) -> f64 {
    (b - a).cross(&(c - a)).norm() * 0.5
}

/// Total surface area of a mesh.
pub fn surface_area(mesh: &TriMesh) -> f64 {
    mesh.faces().iter().map(|&f| face_area(mesh, f)).sum()
}

/// Smallest and largest face area of a mesh.
pub fn face_area_range(mesh: &TriMesh) -> (f64, f64) {
    let mut min_area = f64::INFINITY;
    let mut max_area = f64::NEG_INFINITY;
    for &face in mesh.faces() {
        let area = face_area(mesh, face);
        min_area = min_area.min(area);
        max_area = max_area.max(area);
    }
    (min_area, max_area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::icosahedron;
    use crate::pipeline::{refine, RefineOptions};

    #[test]
    fn test_icosahedron_metrics() {
        let metrics = mesh_metrics(&icosahedron(), 1.0);
        assert_eq!(metrics.num_vertices, 12);
        assert_eq!(metrics.num_faces, 20);
        assert!((metrics.mean_radius - 1.0).abs() < 1e-12);
        assert!(metrics.radius_error < 1e-12);
        assert!(metrics.radius_std_dev < 1e-12);
    }

    #[test]
    fn test_projected_levels_have_no_radius_error() {
        let meshes = refine(&RefineOptions::new(2).with_projection(true)).unwrap();
        for mesh in &meshes {
            let metrics = mesh_metrics(mesh, 1.0);
            assert!(metrics.radius_error < 1e-12);
            assert!((metrics.max_radius - metrics.min_radius).abs() < 1e-12);
        }
    }

    #[test]
    fn test_projected_area_approaches_sphere() {
        // Inscribed meshes always underestimate the sphere's surface, and
        // the estimate improves with every level.
        let sphere_area = 4.0 * std::f64::consts::PI;
        let meshes = refine(&RefineOptions::new(3).with_projection(true)).unwrap();

        let mut previous = 0.0;
        for mesh in &meshes {
            let area = surface_area(mesh);
            assert!(area < sphere_area);
            assert!(area > previous);
            previous = area;
        }
        assert!(sphere_area - previous < 0.1);
    }

    #[test]
    fn test_face_area_range() {
        let mesh = icosahedron();
        let (min_area, max_area) = face_area_range(&mesh);

        // All 20 faces of a regular icosahedron are congruent.
        assert!(max_area - min_area < 1e-12);
        assert!((surface_area(&mesh) - 20.0 * min_area).abs() < 1e-10);
    }
}
