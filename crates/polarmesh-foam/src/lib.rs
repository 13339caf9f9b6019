#![warn(missing_docs)]

//! Mesh dictionary export for polarmesh.
//!
//! Serializes a [`polarmesh::PolarMesh`] as an OpenFOAM `blockMeshDict`
//! and renders its vertex set as an SVG scatter for quick inspection.
//!
//! # Example
//!
//! ```no_run
//! use polarmesh::{generate, MeshSettings};
//! use polarmesh_foam::{DictSettings, LengthUnit, write_block_mesh_dict};
//!
//! let mesh = generate(&MeshSettings::quarter_wedge())?;
//! let settings = DictSettings {
//!     unit: LengthUnit::Millimeters,
//!     ..Default::default()
//! };
//! write_block_mesh_dict(&mesh, &settings, "system/blockMeshDict")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod dict;
pub mod error;
pub mod preview;
pub mod units;

pub use dict::{generate_block_mesh_dict, write_block_mesh_dict, BlockMeshDict, DictSettings};
pub use error::{ExportError, Result};
pub use preview::SvgPreview;
pub use units::LengthUnit;
