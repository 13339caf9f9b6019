//! Model length units.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExportError;

/// Unit of the vertex coordinates, written as `convertToMeters`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Metres.
    Meters,
    /// Centimetres.
    Centimeters,
    /// Millimetres.
    #[default]
    Millimeters,
    /// Micrometres.
    Micrometers,
}

impl LengthUnit {
    /// Scale factor from model units to metres.
    pub fn convert_to_meters(&self) -> f64 {
        match self {
            LengthUnit::Meters => 1.0,
            LengthUnit::Centimeters => 0.01,
            LengthUnit::Millimeters => 0.001,
            LengthUnit::Micrometers => 1e-6,
        }
    }

    /// Short unit symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Meters => "m",
            LengthUnit::Centimeters => "cm",
            LengthUnit::Millimeters => "mm",
            LengthUnit::Micrometers => "um",
        }
    }

    /// All supported units.
    pub fn all() -> [Self; 4] {
        [
            LengthUnit::Meters,
            LengthUnit::Centimeters,
            LengthUnit::Millimeters,
            LengthUnit::Micrometers,
        ]
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for LengthUnit {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(LengthUnit::Meters),
            "cm" | "centimeter" | "centimeters" => Ok(LengthUnit::Centimeters),
            "mm" | "millimeter" | "millimeters" => Ok(LengthUnit::Millimeters),
            "um" | "micrometer" | "micrometers" | "micron" | "microns" => {
                Ok(LengthUnit::Micrometers)
            }
            other => Err(ExportError::InvalidSettings(format!(
                "unknown length unit '{other}'"
            ))),
        }
    }
}
