//! Settings files and command-line overrides.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use polarmesh::{MeshSettings, PatchType};
use polarmesh_foam::{DictSettings, LengthUnit};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Contents of a `polarmesh.toml` file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseConfig {
    pub mesh: MeshSettings,
    pub export: DictSettings,
}

impl CaseConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse settings")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("In {}", path.display()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize settings")
    }
}

/// Boundary type for the front and back planes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AxialPatch {
    SymmetryPlane,
    Empty,
    Wall,
    Patch,
}

impl From<AxialPatch> for PatchType {
    fn from(value: AxialPatch) -> Self {
        match value {
            AxialPatch::SymmetryPlane => PatchType::SymmetryPlane,
            AxialPatch::Empty => PatchType::Empty,
            AxialPatch::Wall => PatchType::Wall,
            AxialPatch::Patch => PatchType::Patch,
        }
    }
}

/// Length unit of the vertex coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Unit {
    #[value(name = "m", alias = "meters")]
    Meters,
    #[value(name = "cm", alias = "centimeters")]
    Centimeters,
    #[value(name = "mm", alias = "millimeters")]
    Millimeters,
    #[value(name = "um", alias = "micrometers")]
    Micrometers,
}

impl From<Unit> for LengthUnit {
    fn from(value: Unit) -> Self {
        match value {
            Unit::Meters => LengthUnit::Meters,
            Unit::Centimeters => LengthUnit::Centimeters,
            Unit::Millimeters => LengthUnit::Millimeters,
            Unit::Micrometers => LengthUnit::Micrometers,
        }
    }
}

/// Flags shared by every command that builds a mesh.
#[derive(Args, Debug, Clone, Default)]
pub struct MeshArgs {
    /// TOML settings file (see `polarmesh init`)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Radius of the innermost ring
    #[arg(long)]
    pub inner_radius: Option<f64>,

    /// Upper bound for the outermost ring
    #[arg(long)]
    pub outer_radius: Option<f64>,

    /// Angular span in degrees; 360 builds a full annulus
    #[arg(long)]
    pub angle: Option<f64>,

    /// Maximum number of radial growth steps
    #[arg(long)]
    pub max_radial_steps: Option<usize>,

    /// Cells around the angular span
    #[arg(long)]
    pub angular_divisions: Option<usize>,

    /// Cells along Z
    #[arg(long)]
    pub axial_divisions: Option<usize>,

    /// Z of the back plane
    #[arg(long, allow_hyphen_values = true)]
    pub z_min: Option<f64>,

    /// Z of the front plane
    #[arg(long, allow_hyphen_values = true)]
    pub z_max: Option<f64>,

    /// Boundary type of the front and back planes
    #[arg(long)]
    pub axial_patch: Option<AxialPatch>,
}

impl MeshArgs {
    /// Load the settings file, if any, then apply the flags on top.
    pub fn resolve(&self) -> Result<CaseConfig> {
        let mut config = match &self.config {
            Some(path) => CaseConfig::load(path)?,
            None => CaseConfig::default(),
        };
        self.apply(&mut config.mesh);
        debug!(?config, "resolved settings");
        Ok(config)
    }

    fn apply(&self, mesh: &mut MeshSettings) {
        if let Some(v) = self.inner_radius {
            mesh.inner_radius = v;
        }
        if let Some(v) = self.outer_radius {
            mesh.outer_radius = v;
        }
        if let Some(v) = self.angle {
            mesh.angle_deg = v;
        }
        if let Some(v) = self.max_radial_steps {
            mesh.max_radial_steps = v;
        }
        if let Some(v) = self.angular_divisions {
            mesh.angular_divisions = v;
        }
        if let Some(v) = self.axial_divisions {
            mesh.axial_divisions = v;
        }
        if let Some(v) = self.z_min {
            mesh.z_min = v;
        }
        if let Some(v) = self.z_max {
            mesh.z_max = v;
        }
        if let Some(v) = self.axial_patch {
            mesh.axial_patch = v.into();
        }
    }
}
