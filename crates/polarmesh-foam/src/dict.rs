//! `blockMeshDict` writer.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use polarmesh::PolarMesh;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ExportError, Result};
use crate::units::LengthUnit;

/// Output options for the dictionary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictSettings {
    /// Unit of the vertex coordinates.
    pub unit: LengthUnit,
    /// Decimal places for vertex coordinates.
    pub precision: usize,
}

impl Default for DictSettings {
    fn default() -> Self {
        Self {
            unit: LengthUnit::Millimeters,
            precision: 6,
        }
    }
}

impl DictSettings {
    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        if self.precision == 0 || self.precision > 17 {
            return Err(ExportError::InvalidSettings(
                "precision must be between 1 and 17 decimal places".into(),
            ));
        }
        Ok(())
    }
}

/// A mesh paired with the settings used to print it.
pub struct BlockMeshDict<'a> {
    mesh: &'a PolarMesh,
    settings: &'a DictSettings,
}

impl<'a> BlockMeshDict<'a> {
    /// Prepare `mesh` for writing.
    pub fn new(mesh: &'a PolarMesh, settings: &'a DictSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { mesh, settings })
    }

    /// Write the dictionary to `writer`.
    pub fn write_to(&self, mut writer: impl Write) -> Result<()> {
        self.write_header(&mut writer)?;
        self.write_vertices(&mut writer)?;
        self.write_blocks(&mut writer)?;
        writeln!(writer, "edges\n(\n);\n")?;
        self.write_boundary(&mut writer)?;
        writeln!(writer, "mergePatchPairs\n(\n);")?;
        writer.flush()?;
        Ok(())
    }

    /// Write the dictionary to `path`, creating parent directories.
    pub fn export(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))?;
        info!(
            path = %path.display(),
            cells = self.mesh.cells.len(),
            "wrote blockMeshDict"
        );
        Ok(())
    }

    fn write_header(&self, w: &mut impl Write) -> Result<()> {
        writeln!(w, "FoamFile")?;
        writeln!(w, "{{")?;
        writeln!(w, "    version 2.0;")?;
        writeln!(w, "    format ascii;")?;
        writeln!(w, "    class dictionary;")?;
        writeln!(w, "    object blockMeshDict;")?;
        writeln!(w, "}}\n")?;
        writeln!(
            w,
            "convertToMeters {};\n",
            self.settings.unit.convert_to_meters()
        )?;
        Ok(())
    }

    fn write_vertices(&self, w: &mut impl Write) -> Result<()> {
        let p = self.settings.precision;
        writeln!(w, "vertices\n(")?;
        for v in &self.mesh.vertices {
            writeln!(w, "    ({:.p$} {:.p$} {:.p$})", v.x, v.y, v.z)?;
        }
        writeln!(w, ");\n")?;
        Ok(())
    }

    fn write_blocks(&self, w: &mut impl Write) -> Result<()> {
        writeln!(w, "blocks\n(")?;
        for cell in &self.mesh.cells {
            let [a, b, c, d, e, f, g, h] = cell.vertices;
            let [nx, ny, nz] = cell.divisions;
            writeln!(
                w,
                "    hex ({a} {b} {c} {d} {e} {f} {g} {h}) ({nx} {ny} {nz}) simpleGrading (1 1 1)"
            )?;
        }
        writeln!(w, ");\n")?;
        Ok(())
    }

    fn write_boundary(&self, w: &mut impl Write) -> Result<()> {
        writeln!(w, "boundary\n(")?;
        for patch in &self.mesh.patches {
            writeln!(w, "    {}", patch.name)?;
            writeln!(w, "    {{")?;
            writeln!(w, "        type {};", patch.kind)?;
            writeln!(w, "        faces\n        (")?;
            for [a, b, c, d] in &patch.faces {
                writeln!(w, "            ({a} {b} {c} {d})")?;
            }
            writeln!(w, "        );")?;
            writeln!(w, "    }}")?;
        }
        writeln!(w, ");\n")?;
        Ok(())
    }
}

/// Render `mesh` as `blockMeshDict` text.
pub fn generate_block_mesh_dict(mesh: &PolarMesh, settings: &DictSettings) -> Result<String> {
    let mut buf = Vec::new();
    BlockMeshDict::new(mesh, settings)?.write_to(&mut buf)?;
    String::from_utf8(buf)
        .map_err(|e| ExportError::InvalidSettings(format!("non-UTF-8 output: {e}")))
}

/// Write `mesh` as a `blockMeshDict` at `path`.
pub fn write_block_mesh_dict(
    mesh: &PolarMesh,
    settings: &DictSettings,
    path: impl AsRef<Path>,
) -> Result<()> {
    BlockMeshDict::new(mesh, settings)?.export(path)
}
