//! SVG scatter of the mesh vertices in the XY plane.
//!
//! Only the bottom axial layer is drawn; every other layer projects onto
//! the same points.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use polarmesh::PolarMesh;
use polarmesh_math::Point2;
use tracing::info;

use crate::error::{ExportError, Result};

/// Renders a vertex scatter as SVG.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgPreview {
    /// Canvas width and height in pixels.
    pub size: f64,
    /// Blank border around the plot in pixels.
    pub margin: f64,
    /// Marker radius in pixels.
    pub marker_radius: f64,
}

impl Default for SvgPreview {
    fn default() -> Self {
        Self {
            size: 800.0,
            margin: 20.0,
            marker_radius: 1.5,
        }
    }
}

impl SvgPreview {
    /// Write the preview of `mesh` to `path`, creating parent directories.
    pub fn export(&self, mesh: &PolarMesh, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        self.write_to(mesh, BufWriter::new(file))?;
        info!(path = %path.display(), "wrote preview");
        Ok(())
    }

    /// Write the preview of `mesh` to `writer`.
    pub fn write_to(&self, mesh: &PolarMesh, mut writer: impl Write) -> Result<()> {
        if self.size <= 2.0 * self.margin || self.margin < 0.0 || self.marker_radius <= 0.0 {
            return Err(ExportError::InvalidSettings(format!(
                "preview size {} must exceed twice the margin {} and the marker radius must be positive",
                self.size, self.margin
            )));
        }

        let points: Vec<Point2> = mesh
            .vertices
            .iter()
            .take(mesh.indexer.layer_size())
            .map(|v| Point2::new(v.x, v.y))
            .collect();

        let (lo, hi) = points.iter().fold(
            (
                Point2::new(f64::INFINITY, f64::INFINITY),
                Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
            ),
            |(lo, hi), p| {
                (
                    Point2::new(lo.x.min(p.x), lo.y.min(p.y)),
                    Point2::new(hi.x.max(p.x), hi.y.max(p.y)),
                )
            },
        );
        let extent = (hi.x - lo.x).max(hi.y - lo.y).max(f64::EPSILON);
        let scale = (self.size - 2.0 * self.margin) / extent;

        writeln!(
            writer,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{s}" height="{s}" viewBox="0 0 {s} {s}">"#,
            s = self.size
        )?;
        writeln!(writer, r#"  <rect width="100%" height="100%" fill="white"/>"#)?;
        writeln!(writer, r#"  <g fill="black">"#)?;
        for p in &points {
            let x = self.margin + (p.x - lo.x) * scale;
            // SVG y grows downward.
            let y = self.size - self.margin - (p.y - lo.y) * scale;
            writeln!(
                writer,
                r#"    <circle cx="{x:.2}" cy="{y:.2}" r="{:.2}"/>"#,
                self.marker_radius
            )?;
        }
        writeln!(writer, "  </g>")?;
        writeln!(writer, "</svg>")?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polarmesh::{generate, MeshSettings};

    fn render(preview: &SvgPreview, mesh: &PolarMesh) -> Result<String> {
        let mut buf = Vec::new();
        preview.write_to(mesh, &mut buf)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_one_marker_per_planar_vertex() {
        let mesh = generate(&MeshSettings::quarter_wedge()).unwrap();
        let svg = render(&SvgPreview::default(), &mesh).unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<circle").count(), mesh.indexer.layer_size());
    }

    #[test]
    fn test_markers_inside_canvas() {
        let mesh = generate(&MeshSettings::quarter_wedge()).unwrap();
        let preview = SvgPreview::default();
        let svg = render(&preview, &mesh).unwrap();

        for line in svg.lines().filter(|l| l.contains("<circle")) {
            for attr in ["cx=\"", "cy=\""] {
                let start = line.find(attr).unwrap() + attr.len();
                let end = start + line[start..].find('"').unwrap();
                let value: f64 = line[start..end].parse().unwrap();
                assert!(value >= preview.margin - 0.01);
                assert!(value <= preview.size - preview.margin + 0.01);
            }
        }
    }

    #[test]
    fn test_rejects_degenerate_canvas() {
        let mesh = generate(&MeshSettings::quarter_wedge()).unwrap();
        let preview = SvgPreview {
            size: 30.0,
            margin: 20.0,
            ..SvgPreview::default()
        };
        assert!(matches!(
            render(&preview, &mesh),
            Err(ExportError::InvalidSettings(_))
        ));
    }
}
