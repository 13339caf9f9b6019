//! Error types for mesh generation.

use polarmesh_math::Point3;
use thiserror::Error;

/// Errors that can occur while generating a mesh.
#[derive(Error, Debug, Clone)]
pub enum MeshError {
    /// Settings describe a degenerate or impossible domain.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A generated cell has non-positive signed volume.
    #[error("cell {cell} is inverted (signed volume {volume:e}); corners: {corners:?}")]
    GeometryInversion {
        /// Index of the offending cell in the cell list.
        cell: usize,
        /// Signed volume computed for the cell.
        volume: f64,
        /// The eight corner coordinates in block ordering.
        corners: [Point3; 8],
    },

    /// Boundary patches do not partition the exterior surface.
    #[error("boundary patches do not cover the domain exactly once: {0}")]
    BoundaryMismatch(String),
}

impl MeshError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        MeshError::InvalidConfiguration(msg.into())
    }
}

/// Result type for mesh generation.
pub type Result<T> = std::result::Result<T, MeshError>;
