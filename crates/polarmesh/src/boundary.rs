//! Named boundary patches covering the exterior of the lattice.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::index::{RevolutionMode, VertexIndexer};

/// Boundary-condition type of a patch, named as the solver spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PatchType {
    /// Mirror plane.
    SymmetryPlane,
    /// Non-solved direction of a one-cell-thick slab.
    #[default]
    Empty,
    /// Solid wall.
    Wall,
    /// Generic patch with no geometric constraint.
    Patch,
}

impl PatchType {
    /// Keyword used in mesh dictionaries.
    pub fn keyword(&self) -> &'static str {
        match self {
            PatchType::SymmetryPlane => "symmetryPlane",
            PatchType::Empty => "empty",
            PatchType::Wall => "wall",
            PatchType::Patch => "patch",
        }
    }
}

impl fmt::Display for PatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A named group of quadrilateral boundary faces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryPatch {
    /// Patch name.
    pub name: String,
    /// Boundary-condition type.
    pub kind: PatchType,
    /// Faces as four vertex indices each.
    pub faces: Vec<[usize; 4]>,
}

impl BoundaryPatch {
    fn new(name: &str, kind: PatchType, faces: Vec<[usize; 4]>) -> Self {
        Self {
            name: name.to_string(),
            kind,
            faces,
        }
    }
}

/// Patch at the starting angle of a wedge.
pub const SYMMETRY_X: &str = "symmetryX";
/// Patch at the closing angle of a wedge.
pub const SYMMETRY_Y: &str = "symmetryY";
/// Patch on the last axial layer.
pub const FRONT: &str = "front";
/// Patch on axial layer 0.
pub const BACK: &str = "back";
/// Patch on the inner radius.
pub const INNER_WALL: &str = "innerWall";
/// Patch on the outer radius.
pub const OUTER_WALL: &str = "outerWall";

/// Build every boundary patch for the lattice described by `indexer`.
///
/// Order: `symmetryX`, `symmetryY` (wedges only), `front`, `back`,
/// `innerWall`, `outerWall`. `axial_patch` sets the type of `front` and
/// `back`.
pub fn build_patches(indexer: &VertexIndexer, axial_patch: PatchType) -> Vec<BoundaryPatch> {
    let mut patches = Vec::with_capacity(6);

    if indexer.mode() == RevolutionMode::Wedge {
        patches.push(BoundaryPatch::new(
            SYMMETRY_X,
            PatchType::SymmetryPlane,
            angular_plane(indexer, 0),
        ));
        patches.push(BoundaryPatch::new(
            SYMMETRY_Y,
            PatchType::SymmetryPlane,
            angular_plane(indexer, indexer.angular_cells()),
        ));
    }

    patches.push(BoundaryPatch::new(
        FRONT,
        axial_patch,
        axial_plane(indexer, indexer.axial_cells()),
    ));
    patches.push(BoundaryPatch::new(BACK, axial_patch, axial_plane(indexer, 0)));
    patches.push(BoundaryPatch::new(
        INNER_WALL,
        PatchType::Wall,
        radial_surface(indexer, 0),
    ));
    patches.push(BoundaryPatch::new(
        OUTER_WALL,
        PatchType::Wall,
        radial_surface(indexer, indexer.radial_cells()),
    ));

    patches
}

/// Faces of the constant-angle plane at angular index `t`.
fn angular_plane(ix: &VertexIndexer, t: usize) -> Vec<[usize; 4]> {
    let mut faces = Vec::with_capacity(ix.axial_cells() * ix.radial_cells());
    for z in 0..ix.axial_cells() {
        for r in 0..ix.radial_cells() {
            faces.push([
                ix.index(z, t, r),
                ix.index(z, t, r + 1),
                ix.index(z + 1, t, r + 1),
                ix.index(z + 1, t, r),
            ]);
        }
    }
    faces
}

/// Faces of the constant-z plane at axial layer `z`.
fn axial_plane(ix: &VertexIndexer, z: usize) -> Vec<[usize; 4]> {
    let mut faces = Vec::with_capacity(ix.angular_cells() * ix.radial_cells());
    for t in 0..ix.angular_cells() {
        let tn = ix.next_angle(t);
        for r in 0..ix.radial_cells() {
            faces.push([
                ix.index(z, t, r),
                ix.index(z, tn, r),
                ix.index(z, tn, r + 1),
                ix.index(z, t, r + 1),
            ]);
        }
    }
    faces
}

/// Faces of the cylindrical surface at radial index `r`.
fn radial_surface(ix: &VertexIndexer, r: usize) -> Vec<[usize; 4]> {
    let mut faces = Vec::with_capacity(ix.axial_cells() * ix.angular_cells());
    for z in 0..ix.axial_cells() {
        for t in 0..ix.angular_cells() {
            let tn = ix.next_angle(t);
            faces.push([
                ix.index(z, t, r),
                ix.index(z, tn, r),
                ix.index(z + 1, tn, r),
                ix.index(z + 1, t, r),
            ]);
        }
    }
    faces
}
