//! Generation parameters.

use std::f64::consts::{PI, TAU};

use polarmesh_math::Tolerance;
use serde::{Deserialize, Serialize};

use crate::boundary::PatchType;
use crate::error::{MeshError, Result};
use crate::index::RevolutionMode;

/// Parameters describing a wedge or full annulus and its discretization.
///
/// Lengths are in model units (the bundled presets use millimetres).
/// Any subset of fields may be given when deserializing; missing fields
/// take the values of [`MeshSettings::quarter_wedge`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshSettings {
    /// Radius of the innermost vertex ring.
    pub inner_radius: f64,
    /// Upper bound for the outermost ring. The last ring lies at or below it.
    pub outer_radius: f64,
    /// Angular span in degrees, in (0, 360]. 360 produces a full annulus.
    pub angle_deg: f64,
    /// Maximum number of radial growth steps.
    pub max_radial_steps: usize,
    /// Number of cells around the angular span.
    pub angular_divisions: usize,
    /// Number of cells along Z.
    pub axial_divisions: usize,
    /// Z of the back plane.
    pub z_min: f64,
    /// Z of the front plane.
    pub z_max: f64,
    /// Boundary type of the front and back planes.
    pub axial_patch: PatchType,
}

impl Default for MeshSettings {
    fn default() -> Self {
        Self::quarter_wedge()
    }
}

impl MeshSettings {
    /// 90° wedge from 0.5 to 18 with 30 angular cells, one cell thick.
    pub fn quarter_wedge() -> Self {
        Self {
            inner_radius: 0.5,
            outer_radius: 18.0,
            angle_deg: 90.0,
            max_radial_steps: 1000,
            angular_divisions: 30,
            axial_divisions: 1,
            z_min: 0.0,
            z_max: 1.0,
            axial_patch: PatchType::Empty,
        }
    }

    /// Full annulus from 0.1 to 18 with 720 angular cells, one cell thick.
    pub fn full_annulus() -> Self {
        Self {
            inner_radius: 0.1,
            outer_radius: 18.0,
            angle_deg: 360.0,
            max_radial_steps: 3000,
            angular_divisions: 720,
            axial_divisions: 1,
            z_min: 0.0,
            z_max: 1.0,
            axial_patch: PatchType::Empty,
        }
    }

    /// Angular span in radians.
    pub fn angle_rad(&self) -> f64 {
        self.angle_deg.to_radians()
    }

    /// Angular step in radians. Also the radial growth rate per ring.
    pub fn delta_theta(&self) -> f64 {
        self.angle_rad() / self.angular_divisions as f64
    }

    /// Axial step.
    pub fn delta_z(&self) -> f64 {
        (self.z_max - self.z_min) / self.axial_divisions as f64
    }

    /// Wedge or full revolution, derived from the angular span.
    pub fn mode(&self) -> RevolutionMode {
        if Tolerance::DEFAULT.angles_equal(self.angle_rad(), TAU) {
            RevolutionMode::Full
        } else {
            RevolutionMode::Wedge
        }
    }

    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        if !(self.inner_radius.is_finite() && self.inner_radius > 0.0) {
            return Err(MeshError::invalid("inner_radius must be positive"));
        }
        if !(self.outer_radius.is_finite() && self.outer_radius > self.inner_radius) {
            return Err(MeshError::invalid(
                "outer_radius must be greater than inner_radius",
            ));
        }
        let full = self.mode() == RevolutionMode::Full;
        if !(self.angle_deg > 0.0 && (self.angle_deg < 360.0 || full)) {
            return Err(MeshError::invalid(
                "angle_deg must be in (0, 360] degrees",
            ));
        }
        if self.max_radial_steps == 0 {
            return Err(MeshError::invalid("max_radial_steps must be at least 1"));
        }
        if self.angular_divisions == 0 {
            return Err(MeshError::invalid("angular_divisions must be at least 1"));
        }
        if self.axial_divisions == 0 {
            return Err(MeshError::invalid("axial_divisions must be at least 1"));
        }
        if !(self.z_min.is_finite() && self.z_max.is_finite() && self.z_min < self.z_max) {
            return Err(MeshError::invalid("z_min must be less than z_max"));
        }
        if self.delta_theta() >= PI {
            return Err(MeshError::invalid(
                "angular step must be below 180 degrees",
            ));
        }
        if full && self.angular_divisions < 3 {
            return Err(MeshError::invalid(
                "a full revolution needs at least 3 angular_divisions",
            ));
        }
        Ok(())
    }
}
