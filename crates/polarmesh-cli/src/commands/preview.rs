//! polarmesh preview - plot the vertices as SVG.

use std::path::Path;

use anyhow::{Context, Result};
use polarmesh::generate;
use polarmesh_foam::SvgPreview;

use crate::config::MeshArgs;
use crate::Cli;

pub fn run(args: &MeshArgs, output: &Path, cli: &Cli) -> Result<()> {
    let config = args.resolve()?;
    let mesh = generate(&config.mesh).context("Mesh generation failed")?;

    SvgPreview::default()
        .export(&mesh, output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    if !cli.quiet {
        println!(
            "Plotted {} vertices to {}",
            mesh.indexer.layer_size(),
            output.display()
        );
    }
    Ok(())
}
