//! Post-generation consistency checks: cell winding and the boundary
//! partition.

use std::collections::{HashMap, HashSet};

use polarmesh_math::{hex_signed_volume, Point3};

use crate::boundary::BoundaryPatch;
use crate::error::{MeshError, Result};
use crate::topology::HexCell;

/// Local faces of a hexahedron in block ordering.
pub const HEX_FACES: [[usize; 4]; 6] = [
    [0, 4, 7, 3],
    [1, 2, 6, 5],
    [0, 1, 5, 4],
    [3, 7, 6, 2],
    [0, 3, 2, 1],
    [4, 5, 6, 7],
];

fn face_key(face: [usize; 4]) -> [usize; 4] {
    let mut key = face;
    key.sort_unstable();
    key
}

/// Fail with [`MeshError::GeometryInversion`] on the first cell whose
/// signed volume is not strictly positive.
pub fn check_cell_volumes(vertices: &[Point3], cells: &[HexCell]) -> Result<()> {
    for (i, cell) in cells.iter().enumerate() {
        let corners = cell.corners(vertices);
        let volume = hex_signed_volume(&corners);
        if !(volume > 0.0) {
            return Err(MeshError::GeometryInversion {
                cell: i,
                volume,
                corners,
            });
        }
    }
    Ok(())
}

/// Count how many cells use each face.
fn face_usage(cells: &[HexCell]) -> HashMap<[usize; 4], u32> {
    let mut usage = HashMap::with_capacity(cells.len() * 4);
    for cell in cells {
        for local in HEX_FACES {
            let face = local.map(|c| cell.vertices[c]);
            *usage.entry(face_key(face)).or_insert(0) += 1;
        }
    }
    usage
}

/// Check that every exterior face lies in exactly one patch and that
/// patches contain nothing else.
pub fn check_boundary_partition(cells: &[HexCell], patches: &[BoundaryPatch]) -> Result<()> {
    let usage = face_usage(cells);
    if let Some((face, n)) = usage.iter().find(|(_, n)| **n > 2) {
        return Err(MeshError::BoundaryMismatch(format!(
            "face {face:?} is shared by {n} cells"
        )));
    }
    let exterior = usage.values().filter(|n| **n == 1).count();

    let mut claimed: HashSet<[usize; 4]> = HashSet::with_capacity(exterior);
    for patch in patches {
        for face in &patch.faces {
            let key = face_key(*face);
            match usage.get(&key) {
                None => {
                    return Err(MeshError::BoundaryMismatch(format!(
                        "patch {} face {face:?} is not a cell face",
                        patch.name
                    )))
                }
                Some(2) => {
                    return Err(MeshError::BoundaryMismatch(format!(
                        "patch {} face {face:?} is interior",
                        patch.name
                    )))
                }
                Some(_) => {}
            }
            if !claimed.insert(key) {
                return Err(MeshError::BoundaryMismatch(format!(
                    "face {face:?} appears in more than one patch (last seen in {})",
                    patch.name
                )));
            }
        }
    }

    if claimed.len() != exterior {
        return Err(MeshError::BoundaryMismatch(format!(
            "{} of {exterior} exterior faces are not in any patch",
            exterior - claimed.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::{build_patches, PatchType};
    use crate::index::{LatticeIndex, RevolutionMode, VertexIndexer};
    use crate::topology::build_cells;

    fn wedge() -> (VertexIndexer, Vec<HexCell>, Vec<BoundaryPatch>) {
        let ix = VertexIndexer::new(RevolutionMode::Wedge, 3, 2, 2);
        let cells = build_cells(&ix);
        let patches = build_patches(&ix, PatchType::Empty);
        (ix, cells, patches)
    }

    #[test]
    fn test_generated_partition_passes() {
        let (_, cells, patches) = wedge();
        check_boundary_partition(&cells, &patches).unwrap();

        let ix = VertexIndexer::new(RevolutionMode::Full, 6, 3, 1);
        check_boundary_partition(&build_cells(&ix), &build_patches(&ix, PatchType::Empty))
            .unwrap();
    }

    #[test]
    fn test_missing_patch_detected() {
        let (_, cells, mut patches) = wedge();
        patches.pop();
        let err = check_boundary_partition(&cells, &patches).unwrap_err();
        assert!(matches!(err, MeshError::BoundaryMismatch(_)));
    }

    #[test]
    fn test_duplicate_face_detected() {
        let (_, cells, mut patches) = wedge();
        let stolen = patches[0].faces[0];
        patches[1].faces.push(stolen);
        assert!(check_boundary_partition(&cells, &patches).is_err());
    }

    #[test]
    fn test_interior_face_detected() {
        let (ix, cells, mut patches) = wedge();
        // Constant-angle face at t = 1 lies between two cells.
        patches[0].faces.push([
            ix.index(0, 1, 0),
            ix.index(0, 1, 1),
            ix.index(1, 1, 1),
            ix.index(1, 1, 0),
        ]);
        let err = check_boundary_partition(&cells, &patches).unwrap_err();
        assert!(err.to_string().contains("interior"));
    }

    #[test]
    fn test_inverted_cell_reported() {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(0.0, 1.0, 1.0),
        ];
        let good = HexCell {
            vertices: [0, 1, 2, 3, 4, 5, 6, 7],
            divisions: [1, 1, 1],
            origin: LatticeIndex::new(0, 0, 0),
        };
        let bad = HexCell {
            vertices: [0, 3, 2, 1, 4, 7, 6, 5],
            ..good.clone()
        };
        check_cell_volumes(&vertices, std::slice::from_ref(&good)).unwrap();
        match check_cell_volumes(&vertices, &[good, bad]) {
            Err(MeshError::GeometryInversion { cell, volume, corners }) => {
                assert_eq!(cell, 1);
                assert!(volume < 0.0);
                assert_eq!(corners[1], vertices[3]);
            }
            other => panic!("expected inversion, got {other:?}"),
        }
    }
}
