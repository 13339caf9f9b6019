//! Summary figures for a generated mesh.

use polarmesh_math::hex_signed_volume;
use serde::{Deserialize, Serialize};

use crate::index::RevolutionMode;
use crate::PolarMesh;

/// Statistics about a generated mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshStats {
    /// Wedge or full revolution.
    pub mode: RevolutionMode,
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of hexahedral cells.
    pub cell_count: usize,
    /// Cells along the radius.
    pub radial_cells: usize,
    /// Cells around the angular span.
    pub angular_cells: usize,
    /// Cells along Z.
    pub axial_cells: usize,
    /// Number of boundary patches.
    pub patch_count: usize,
    /// Faces over all boundary patches.
    pub boundary_faces: usize,
    /// Radius of the innermost ring.
    pub inner_radius: f64,
    /// Radius of the outermost ring actually generated.
    pub outer_radius: f64,
    /// Ratio between consecutive ring radii.
    pub growth_ratio: f64,
    /// Smallest cell volume.
    pub min_cell_volume: f64,
    /// Largest cell volume.
    pub max_cell_volume: f64,
    /// Worst in-plane aspect ratio (≥ 1) of radial thickness against arc
    /// length at mid-radius.
    pub max_aspect_ratio: f64,
    /// Bounding box min corner.
    pub bounds_min: [f64; 3],
    /// Bounding box max corner.
    pub bounds_max: [f64; 3],
}

impl MeshStats {
    /// Compute statistics for `mesh`.
    pub fn compute(mesh: &PolarMesh) -> Self {
        let ix = &mesh.indexer;

        let (min_cell_volume, max_cell_volume) = mesh
            .cells
            .iter()
            .map(|c| hex_signed_volume(&c.corners(&mesh.vertices)))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });

        let max_aspect_ratio = mesh
            .radii
            .windows(2)
            .map(|w| {
                let thickness = w[1] - w[0];
                let arc = 0.5 * (w[0] + w[1]) * mesh.delta_theta;
                (thickness / arc).max(arc / thickness)
            })
            .fold(1.0, f64::max);

        let mut bounds_min = [f64::INFINITY; 3];
        let mut bounds_max = [f64::NEG_INFINITY; 3];
        for v in &mesh.vertices {
            for k in 0..3 {
                bounds_min[k] = bounds_min[k].min(v[k]);
                bounds_max[k] = bounds_max[k].max(v[k]);
            }
        }

        let inner_radius = mesh.radii.first().copied().unwrap_or_default();
        let outer_radius = mesh.radii.last().copied().unwrap_or_default();

        Self {
            mode: ix.mode(),
            vertex_count: mesh.vertices.len(),
            cell_count: mesh.cells.len(),
            radial_cells: ix.radial_cells(),
            angular_cells: ix.angular_cells(),
            axial_cells: ix.axial_cells(),
            patch_count: mesh.patches.len(),
            boundary_faces: mesh.patches.iter().map(|p| p.faces.len()).sum(),
            inner_radius,
            outer_radius,
            growth_ratio: 1.0 + mesh.delta_theta,
            min_cell_volume,
            max_cell_volume,
            max_aspect_ratio,
            bounds_min,
            bounds_max,
        }
    }
}
