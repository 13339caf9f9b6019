//! Vertex lattice and hexahedral cell connectivity.

use polarmesh_math::{polar_point, Point3};
use tracing::debug;

use crate::error::{MeshError, Result};
use crate::index::{LatticeIndex, RevolutionMode, VertexIndexer};
use crate::settings::MeshSettings;
use crate::validate::check_cell_volumes;

/// Angular and axial extent of the lattice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
    /// Wedge or full revolution.
    pub mode: RevolutionMode,
    /// Number of angular cells.
    pub angular_divisions: usize,
    /// Angular step in radians.
    pub delta_theta: f64,
    /// Number of axial cells.
    pub axial_divisions: usize,
    /// Z of axial layer 0.
    pub z_min: f64,
    /// Z of the last axial layer.
    pub z_max: f64,
}

impl Sweep {
    /// Sweep described by validated settings.
    pub fn from_settings(settings: &MeshSettings) -> Self {
        Self {
            mode: settings.mode(),
            angular_divisions: settings.angular_divisions,
            delta_theta: settings.delta_theta(),
            axial_divisions: settings.axial_divisions,
            z_min: settings.z_min,
            z_max: settings.z_max,
        }
    }

    /// Z coordinate of axial layer `z`.
    pub fn layer_z(&self, z: usize) -> f64 {
        self.z_min + z as f64 * (self.z_max - self.z_min) / self.axial_divisions as f64
    }

    /// Angle of angular index `t` in radians.
    pub fn angle(&self, t: usize) -> f64 {
        t as f64 * self.delta_theta
    }
}

/// A hexahedral block: one angular × radial × axial step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexCell {
    /// Corner vertex indices in block ordering.
    pub vertices: [usize; 8],
    /// Subdivisions along the block's local axes. Every generated cell is
    /// a single solver cell.
    pub divisions: [u32; 3],
    /// Lattice position of the cell's lowest (z, t, r) corner.
    pub origin: LatticeIndex,
}

impl HexCell {
    /// Corner coordinates looked up in `vertices`.
    pub fn corners(&self, vertices: &[Point3]) -> [Point3; 8] {
        self.vertices.map(|i| vertices[i])
    }
}

/// Vertices and cells of the lattice, before boundaries are attached.
#[derive(Debug, Clone)]
pub struct Topology {
    /// Index mapping shared by cells and boundary faces.
    pub indexer: VertexIndexer,
    /// Vertex coordinates in flat-index order.
    pub vertices: Vec<Point3>,
    /// Cells, axial layer pair outermost and radial step innermost.
    pub cells: Vec<HexCell>,
}

/// Build vertices and cells for `radii` swept through `sweep`.
///
/// `radii` must be strictly increasing and the angular step positive.
/// Fails with [`MeshError::GeometryInversion`] if any resulting cell has
/// non-positive volume, e.g. an angular step of 180° or more.
pub fn build_topology(radii: &[f64], sweep: &Sweep) -> Result<Topology> {
    if sweep.angular_divisions < 1 {
        return Err(MeshError::invalid("at least one angular cell is required"));
    }
    if radii.len() < 2 {
        return Err(MeshError::invalid(
            "at least one radial cell is required; outer radius is too close to inner radius",
        ));
    }
    if !(sweep.delta_theta.is_finite() && sweep.delta_theta > 0.0) {
        return Err(MeshError::invalid("angular step must be positive"));
    }
    if !radii.windows(2).all(|w| w[0] < w[1]) || !radii.iter().all(|r| r.is_finite()) {
        return Err(MeshError::invalid("radii must be finite and strictly increasing"));
    }
    if sweep.axial_divisions < 1 {
        return Err(MeshError::invalid("at least one axial cell is required"));
    }
    if sweep.mode == RevolutionMode::Full && sweep.angular_divisions < 3 {
        return Err(MeshError::invalid(
            "a full revolution needs at least 3 angular cells",
        ));
    }

    let indexer = VertexIndexer::new(
        sweep.mode,
        sweep.angular_divisions,
        radii.len() - 1,
        sweep.axial_divisions,
    );
    let vertices = build_vertices(radii, sweep, &indexer);
    let cells = build_cells(&indexer);
    check_cell_volumes(&vertices, &cells)?;

    debug!(
        vertices = vertices.len(),
        cells = cells.len(),
        mode = ?sweep.mode,
        "built lattice topology"
    );

    Ok(Topology {
        indexer,
        vertices,
        cells,
    })
}

/// Vertex coordinates, axial layer outermost and radius innermost, so
/// position `i` in the result is flat index `i` of `indexer`.
pub fn build_vertices(radii: &[f64], sweep: &Sweep, indexer: &VertexIndexer) -> Vec<Point3> {
    let mut vertices = Vec::with_capacity(indexer.vertex_count());
    for z in 0..=indexer.axial_cells() {
        let height = sweep.layer_z(z);
        for t in 0..indexer.angular_layers() {
            let angle = sweep.angle(t);
            for &radius in radii {
                vertices.push(polar_point(radius, angle, height));
            }
        }
    }
    vertices
}

/// Hexahedra for every axial layer pair, angular step and radial step.
pub fn build_cells(indexer: &VertexIndexer) -> Vec<HexCell> {
    let mut cells = Vec::with_capacity(indexer.cell_count());
    for z in 0..indexer.axial_cells() {
        for t in 0..indexer.angular_cells() {
            for r in 0..indexer.radial_cells() {
                cells.push(HexCell {
                    vertices: hex_vertices(indexer, z, t, r),
                    divisions: [1, 1, 1],
                    origin: LatticeIndex::new(z, t, r),
                });
            }
        }
    }
    cells
}

/// Corner indices of the cell whose lowest corner is `(z, t, r)`.
///
/// With `t'` the next angle, the lattice corners are
///
/// ```text
/// v0 = (z, t, r)     v1 = (z, t', r)     v2 = (z, t', r+1)     v3 = (z, t, r+1)
/// v4..v7 = v0..v3 one axial layer up
/// ```
///
/// and the block is emitted as `(v0 v3 v2 v1 v4 v7 v6 v5)`: radial first,
/// then angular, then axial, which is right-handed. Listing `v0..v7` as-is
/// would turn every cell inside out.
pub fn hex_vertices(indexer: &VertexIndexer, z: usize, t: usize, r: usize) -> [usize; 8] {
    let tn = indexer.next_angle(t);
    let v0 = indexer.index(z, t, r);
    let v1 = indexer.index(z, tn, r);
    let v2 = indexer.index(z, tn, r + 1);
    let v3 = indexer.index(z, t, r + 1);
    let v4 = indexer.index(z + 1, t, r);
    let v5 = indexer.index(z + 1, tn, r);
    let v6 = indexer.index(z + 1, tn, r + 1);
    let v7 = indexer.index(z + 1, t, r + 1);
    [v0, v3, v2, v1, v4, v7, v6, v5]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use polarmesh_math::{hex_corner_jacobian, hex_signed_volume};
    use std::f64::consts::{FRAC_PI_2, TAU};

    fn wedge_sweep(n_theta: usize, n_axial: usize) -> Sweep {
        Sweep {
            mode: RevolutionMode::Wedge,
            angular_divisions: n_theta,
            delta_theta: FRAC_PI_2 / n_theta as f64,
            axial_divisions: n_axial,
            z_min: 0.0,
            z_max: 1.0,
        }
    }

    fn full_sweep(n_theta: usize) -> Sweep {
        Sweep {
            mode: RevolutionMode::Full,
            angular_divisions: n_theta,
            delta_theta: TAU / n_theta as f64,
            axial_divisions: 1,
            z_min: 0.0,
            z_max: 1.0,
        }
    }

    #[test]
    fn test_single_cell_ordering() {
        let topo = build_topology(&[1.0, 2.0], &wedge_sweep(1, 1)).unwrap();
        // Lattice per layer: (t0,r0)=0 (t0,r1)=1 (t1,r0)=2 (t1,r1)=3; top layer +4.
        assert_eq!(topo.cells.len(), 1);
        assert_eq!(topo.cells[0].vertices, [0, 1, 3, 2, 4, 5, 7, 6]);
        assert_eq!(topo.cells[0].divisions, [1, 1, 1]);
    }

    #[test]
    fn test_vertex_positions() {
        let radii = [1.0, 1.5, 2.25];
        let sweep = wedge_sweep(4, 2);
        let topo = build_topology(&radii, &sweep).unwrap();
        assert_eq!(topo.vertices.len(), 3 * 5 * 3);

        let ix = topo.indexer;
        let p = topo.vertices[ix.index(2, 4, 1)];
        assert!(p.x.abs() < 1e-12);
        assert_relative_eq!(p.y, 1.5, epsilon = 1e-12);
        assert_relative_eq!(p.z, 1.0);

        let q = topo.vertices[ix.index(1, 0, 2)];
        assert_relative_eq!(q.x, 2.25);
        assert_relative_eq!(q.z, 0.5);
    }

    #[test]
    fn test_cells_positive_volume() {
        for topo in [
            build_topology(&[1.0, 1.3, 1.69], &wedge_sweep(6, 2)).unwrap(),
            build_topology(&[1.0, 2.0, 4.0], &full_sweep(5)).unwrap(),
        ] {
            for cell in &topo.cells {
                let corners = cell.corners(&topo.vertices);
                assert!(hex_signed_volume(&corners) > 0.0);
                assert!(hex_corner_jacobian(&corners) > 0.0);
            }
        }
    }

    #[test]
    fn test_full_revolution_closes() {
        let topo = build_topology(&[1.0, 2.0], &full_sweep(4)).unwrap();
        assert_eq!(topo.vertices.len(), 2 * 4 * 2);
        let last = topo.cells.last().unwrap();
        assert_eq!(last.origin, LatticeIndex::new(0, 3, 0));
        // The closing cell reuses the t = 0 vertices.
        let ix = topo.indexer;
        assert_eq!(last.vertices[3], ix.index(0, 0, 0));
        assert_eq!(last.vertices[2], ix.index(0, 0, 1));
    }

    #[test]
    fn test_degenerate_inputs_rejected() {
        assert!(matches!(
            build_topology(&[1.0], &wedge_sweep(4, 1)),
            Err(MeshError::InvalidConfiguration(_))
        ));
        assert!(build_topology(&[1.0, 2.0], &wedge_sweep(0, 1)).is_err());
        assert!(build_topology(&[1.0, 2.0], &wedge_sweep(4, 0)).is_err());
        assert!(build_topology(&[1.0, 2.0], &full_sweep(2)).is_err());
    }

    #[test]
    fn test_bad_step_or_radii_rejected() {
        let backwards = Sweep {
            delta_theta: -0.1,
            ..wedge_sweep(4, 1)
        };
        assert!(matches!(
            build_topology(&[1.0, 1.1, 1.21], &backwards),
            Err(MeshError::InvalidConfiguration(_))
        ));
        let nan_step = Sweep {
            delta_theta: f64::NAN,
            ..wedge_sweep(4, 1)
        };
        assert!(build_topology(&[1.0, 2.0], &nan_step).is_err());

        for radii in [[1.0, 1.0, 2.0], [2.0, 1.5, 1.0], [1.0, f64::NAN, 2.0]] {
            assert!(matches!(
                build_topology(&radii, &wedge_sweep(4, 1)),
                Err(MeshError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn test_folded_cells_reported() {
        // A single 200° step sweeps the cell past the opposite axis.
        let folded = Sweep {
            delta_theta: 200f64.to_radians(),
            ..wedge_sweep(1, 1)
        };
        match build_topology(&[1.0, 2.0], &folded) {
            Err(MeshError::GeometryInversion { cell, volume, .. }) => {
                assert_eq!(cell, 0);
                assert!(volume < 0.0);
            }
            other => panic!("expected inversion, got {other:?}"),
        }
    }
}
