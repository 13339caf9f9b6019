#![warn(missing_docs)]

//! Structured block-mesh generator for polar wedges and annuli.
//!
//! Rings are spaced geometrically so that cells stay close to square,
//! then swept through the angular span and along Z to produce a vertex
//! lattice, hexahedral blocks with positive-volume winding and named
//! boundary patches that cover the exterior exactly once.
//!
//! # Example
//!
//! ```
//! use polarmesh::{generate, MeshSettings};
//!
//! let mesh = generate(&MeshSettings::quarter_wedge())?;
//! let stats = mesh.stats();
//! assert_eq!(stats.cell_count, 30 * stats.radial_cells);
//! # Ok::<(), polarmesh::MeshError>(())
//! ```

pub mod boundary;
pub mod error;
pub mod index;
pub mod radii;
pub mod settings;
pub mod stats;
pub mod topology;
pub mod validate;

pub use boundary::{build_patches, BoundaryPatch, PatchType};
pub use error::{MeshError, Result};
pub use index::{LatticeIndex, RevolutionMode, VertexIndexer};
pub use radii::radius_sequence;
pub use settings::MeshSettings;
pub use stats::MeshStats;
pub use topology::{build_topology, HexCell, Sweep, Topology};
pub use validate::{check_boundary_partition, check_cell_volumes};

use polarmesh_math::Point3;
use tracing::{debug, info, info_span, warn};

/// A generated mesh: vertices, cells and boundary patches.
#[derive(Debug, Clone)]
pub struct PolarMesh {
    /// Ring radii, innermost first.
    pub radii: Vec<f64>,
    /// Angular step in radians.
    pub delta_theta: f64,
    /// Mapping between lattice positions and vertex indices.
    pub indexer: VertexIndexer,
    /// Vertex coordinates.
    pub vertices: Vec<Point3>,
    /// Hexahedral cells.
    pub cells: Vec<HexCell>,
    /// Boundary patches in output order.
    pub patches: Vec<BoundaryPatch>,
}

impl PolarMesh {
    /// Wedge or full revolution.
    pub fn mode(&self) -> RevolutionMode {
        self.indexer.mode()
    }

    /// Look up a patch by name.
    pub fn patch(&self, name: &str) -> Option<&BoundaryPatch> {
        self.patches.iter().find(|p| p.name == name)
    }

    /// Summary statistics.
    pub fn stats(&self) -> MeshStats {
        MeshStats::compute(self)
    }
}

/// Generate a mesh with the given settings.
///
/// This is the main entry point. It:
/// 1. Validates the settings
/// 2. Places the radial rings
/// 3. Builds the vertex lattice and cells, checking their volumes
/// 4. Attaches boundary patches
/// 5. Checks the boundary partition
pub fn generate(settings: &MeshSettings) -> Result<PolarMesh> {
    settings.validate()?;

    let mode = settings.mode();
    let _span = info_span!("generate", ?mode, angle_deg = settings.angle_deg).entered();

    let delta_theta = settings.delta_theta();
    let radii = radius_sequence(
        settings.inner_radius,
        settings.outer_radius,
        delta_theta,
        settings.max_radial_steps,
    )?;
    debug!(
        delta_theta,
        rings = radii.len(),
        outer = radii.last().copied().unwrap_or_default(),
        "placed radial rings"
    );

    let sweep = Sweep::from_settings(settings);
    let Topology {
        indexer,
        vertices,
        cells,
    } = build_topology(&radii, &sweep)?;

    if settings.axial_patch == PatchType::Empty && settings.axial_divisions > 1 {
        warn!(
            axial_divisions = settings.axial_divisions,
            "empty front/back patches need a single axial cell; the solver will reject this mesh"
        );
    }
    let patches = build_patches(&indexer, settings.axial_patch);

    check_boundary_partition(&cells, &patches)?;

    info!(
        vertices = vertices.len(),
        cells = cells.len(),
        radial_cells = indexer.radial_cells(),
        patches = patches.len(),
        "mesh generated"
    );

    Ok(PolarMesh {
        radii,
        delta_theta,
        indexer,
        vertices,
        cells,
        patches,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_quarter_wedge() {
        let mesh = generate(&MeshSettings::quarter_wedge()).unwrap();
        assert_eq!(mesh.mode(), RevolutionMode::Wedge);
        assert_eq!(mesh.cells.len(), 30 * 70);
        assert!(mesh.patch("symmetryX").is_some());
        assert!(mesh.patch("missing").is_none());
    }

    #[test]
    fn test_generate_full_annulus() {
        let settings = MeshSettings {
            angular_divisions: 72,
            ..MeshSettings::full_annulus()
        };
        let mesh = generate(&settings).unwrap();
        assert_eq!(mesh.mode(), RevolutionMode::Full);
        assert_eq!(mesh.vertices.len(), 2 * 72 * mesh.radii.len());
        assert!(mesh.patch("symmetryX").is_none());
        assert!(mesh.patch("symmetryY").is_none());
    }

    #[test]
    fn test_outer_too_close_to_inner() {
        // First growth step already overshoots, leaving no radial cells.
        let settings = MeshSettings {
            inner_radius: 1.0,
            outer_radius: 1.01,
            ..MeshSettings::quarter_wedge()
        };
        assert!(matches!(
            generate(&settings),
            Err(MeshError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_invalid_settings_produce_no_mesh() {
        let settings = MeshSettings {
            angular_divisions: 0,
            ..MeshSettings::quarter_wedge()
        };
        assert!(generate(&settings).is_err());
    }
}
