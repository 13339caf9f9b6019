//! Flat vertex numbering for the (axial, angular, radial) lattice.
//!
//! Vertices are stored axial layer first, then angular index, with the
//! radial index varying fastest. A wedge keeps a separate vertex ring at
//! the closing angle; a full revolution does not, and instead wraps the
//! angular index back to 0.

use serde::{Deserialize, Serialize};

/// Whether the angular span closes on itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevolutionMode {
    /// Partial span with distinct start and end planes.
    Wedge,
    /// Complete 360° span; the last angular step connects back to index 0.
    Full,
}

/// Lattice position of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LatticeIndex {
    /// Axial layer, `0..=n_axial`.
    pub z: usize,
    /// Angular index.
    pub t: usize,
    /// Radial index, `0..=n_r`.
    pub r: usize,
}

impl LatticeIndex {
    /// Create a lattice position.
    pub fn new(z: usize, t: usize, r: usize) -> Self {
        Self { z, t, r }
    }
}

/// Bijection between lattice positions and flat vertex indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexIndexer {
    mode: RevolutionMode,
    angular_cells: usize,
    radial_cells: usize,
    axial_cells: usize,
}

impl VertexIndexer {
    /// Create an indexer for `angular_cells × radial_cells × axial_cells`.
    pub fn new(
        mode: RevolutionMode,
        angular_cells: usize,
        radial_cells: usize,
        axial_cells: usize,
    ) -> Self {
        Self {
            mode,
            angular_cells,
            radial_cells,
            axial_cells,
        }
    }

    /// Revolution mode.
    pub fn mode(&self) -> RevolutionMode {
        self.mode
    }

    /// Number of angular cells (n_theta).
    pub fn angular_cells(&self) -> usize {
        self.angular_cells
    }

    /// Number of radial cells (n_r).
    pub fn radial_cells(&self) -> usize {
        self.radial_cells
    }

    /// Number of axial cells (n_axial).
    pub fn axial_cells(&self) -> usize {
        self.axial_cells
    }

    /// Distinct angular vertex positions per axial layer.
    pub fn angular_layers(&self) -> usize {
        match self.mode {
            RevolutionMode::Wedge => self.angular_cells + 1,
            RevolutionMode::Full => self.angular_cells,
        }
    }

    /// Vertices per radial line.
    pub fn radial_layers(&self) -> usize {
        self.radial_cells + 1
    }

    /// Vertices per axial layer.
    pub fn layer_size(&self) -> usize {
        self.angular_layers() * self.radial_layers()
    }

    /// Total number of vertices.
    pub fn vertex_count(&self) -> usize {
        (self.axial_cells + 1) * self.layer_size()
    }

    /// Total number of hexahedral cells.
    pub fn cell_count(&self) -> usize {
        self.axial_cells * self.angular_cells * self.radial_cells
    }

    /// Angular index one step counter-clockwise from `t`.
    ///
    /// In full-revolution mode the step after `n_theta - 1` is `0`.
    pub fn next_angle(&self, t: usize) -> usize {
        match self.mode {
            RevolutionMode::Wedge => t + 1,
            RevolutionMode::Full => (t + 1) % self.angular_cells,
        }
    }

    /// Flat vertex index of `(z, t, r)`.
    ///
    /// In full-revolution mode `t` is reduced modulo `n_theta`, so
    /// `t == n_theta` names the same vertex as `t == 0`.
    pub fn index(&self, z: usize, t: usize, r: usize) -> usize {
        let t = match self.mode {
            RevolutionMode::Wedge => t,
            RevolutionMode::Full => t % self.angular_cells,
        };
        z * self.layer_size() + t * self.radial_layers() + r
    }

    /// Flat vertex index of a lattice position.
    pub fn index_of(&self, at: LatticeIndex) -> usize {
        self.index(at.z, at.t, at.r)
    }

    /// Lattice position of a flat index, if it is in range.
    pub fn lattice(&self, index: usize) -> Option<LatticeIndex> {
        if index >= self.vertex_count() {
            return None;
        }
        let z = index / self.layer_size();
        let rest = index % self.layer_size();
        Some(LatticeIndex {
            z,
            t: rest / self.radial_layers(),
            r: rest % self.radial_layers(),
        })
    }
}
