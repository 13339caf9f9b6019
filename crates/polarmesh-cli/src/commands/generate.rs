//! polarmesh generate - write a blockMeshDict.

use std::path::Path;

use anyhow::{Context, Result};
use polarmesh::generate;
use polarmesh_foam::{write_block_mesh_dict, LengthUnit, SvgPreview};

use crate::config::MeshArgs;
use crate::Cli;

pub fn run(
    args: &MeshArgs,
    output: &Path,
    unit: Option<LengthUnit>,
    precision: Option<usize>,
    preview: Option<&Path>,
    cli: &Cli,
) -> Result<()> {
    let mut config = args.resolve()?;
    if let Some(unit) = unit {
        config.export.unit = unit;
    }
    if let Some(precision) = precision {
        config.export.precision = precision;
    }

    let mesh = generate(&config.mesh).context("Mesh generation failed")?;
    write_block_mesh_dict(&mesh, &config.export, output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    if let Some(svg) = preview {
        SvgPreview::default()
            .export(&mesh, svg)
            .with_context(|| format!("Failed to write {}", svg.display()))?;
    }

    if !cli.quiet {
        let stats = mesh.stats();
        println!("blockMeshDict written to {}", output.display());
        println!(
            "Total cells: {} ({} radial x {} angular x {} axial)",
            stats.cell_count, stats.radial_cells, stats.angular_cells, stats.axial_cells
        );
        if let Some(svg) = preview {
            println!("Preview written to {}", svg.display());
        }
    }

    Ok(())
}
