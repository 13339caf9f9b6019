//! polarmesh info - report mesh statistics.

use anyhow::{Context, Result};
use polarmesh::{generate, MeshStats, RevolutionMode};

use crate::config::MeshArgs;
use crate::{Cli, OutputFormat};

pub fn run(args: &MeshArgs, format: OutputFormat, cli: &Cli) -> Result<()> {
    let config = args.resolve()?;
    let mesh = generate(&config.mesh).context("Mesh generation failed")?;
    let stats = mesh.stats();

    if cli.quiet {
        return Ok(());
    }
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&stats).context("Failed to encode stats")?;
            println!("{json}");
        }
        OutputFormat::Text => print_text(&stats, config.mesh.angle_deg),
    }
    Ok(())
}

fn print_text(stats: &MeshStats, angle_deg: f64) {
    let mode = match stats.mode {
        RevolutionMode::Wedge => format!("{angle_deg}° wedge"),
        RevolutionMode::Full => "full annulus".to_string(),
    };
    println!("Mesh Information");
    println!("  Shape: {mode}");
    println!("  Vertices: {}", stats.vertex_count);
    println!(
        "  Cells: {} ({} radial x {} angular x {} axial)",
        stats.cell_count, stats.radial_cells, stats.angular_cells, stats.axial_cells
    );
    println!(
        "  Patches: {} ({} boundary faces)",
        stats.patch_count, stats.boundary_faces
    );
    println!(
        "  Radii: {:.6} to {:.6} (growth {:.6})",
        stats.inner_radius, stats.outer_radius, stats.growth_ratio
    );
    println!(
        "  Cell volume: {:.6e} to {:.6e}",
        stats.min_cell_volume, stats.max_cell_volume
    );
    println!("  Max aspect ratio: {:.4}", stats.max_aspect_ratio);
    println!(
        "  Bounds: ({:.3}, {:.3}, {:.3}) to ({:.3}, {:.3}, {:.3})",
        stats.bounds_min[0],
        stats.bounds_min[1],
        stats.bounds_min[2],
        stats.bounds_max[0],
        stats.bounds_max[1],
        stats.bounds_max[2]
    );
}
