//! polarmesh CLI - structured polar meshes for blockMesh
//!
//! Generates wedge and full-annulus `blockMeshDict` files with
//! geometrically graded radial rings.
//!
//! Set `RUST_LOG` to override the `-v` flags, e.g.
//! `RUST_LOG=polarmesh=debug polarmesh generate`.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;

use config::{MeshArgs, Unit};

#[derive(Parser)]
#[command(name = "polarmesh")]
#[command(author, version, about = "Polar wedge and annulus mesh generator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress all non-error output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a blockMeshDict
    Generate {
        #[command(flatten)]
        mesh: MeshArgs,

        /// Output dictionary path
        #[arg(short, long, default_value = "system/blockMeshDict")]
        output: PathBuf,

        /// Length unit of the coordinates
        #[arg(long)]
        unit: Option<Unit>,

        /// Decimal places for vertex coordinates
        #[arg(long)]
        precision: Option<usize>,

        /// Also write an SVG vertex plot
        #[arg(long)]
        preview: Option<PathBuf>,
    },
    /// Print mesh statistics without writing anything
    Info {
        #[command(flatten)]
        mesh: MeshArgs,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },
    /// Write an SVG plot of the vertices
    Preview {
        #[command(flatten)]
        mesh: MeshArgs,

        /// Output SVG path
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Write a settings template
    Init {
        /// Output TOML path
        #[arg(short, long, default_value = "polarmesh.toml")]
        output: PathBuf,

        /// Start from the full-annulus preset
        #[arg(long)]
        full: bool,

        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}

/// How `info` prints its report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON for scripting
    Json,
}

fn init_tracing(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "polarmesh=info,polarmesh_foam=info,polarmesh_cli=info",
            2 => "polarmesh=debug,polarmesh_foam=debug,polarmesh_cli=debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Commands::Generate {
            mesh,
            output,
            unit,
            precision,
            preview,
        } => commands::generate::run(
            mesh,
            output,
            unit.map(Into::into),
            *precision,
            preview.as_deref(),
            &cli,
        ),
        Commands::Info { mesh, format } => commands::info::run(mesh, *format, &cli),
        Commands::Preview { mesh, output } => commands::preview::run(mesh, output, &cli),
        Commands::Init {
            output,
            full,
            force,
        } => commands::init::run(output, *full, *force, &cli),
    };

    if let Err(e) = &result {
        if !cli.quiet {
            eprintln!("Error: {e}");
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {cause}");
            }
        }
        std::process::exit(1);
    }

    Ok(())
}
