//! polarmesh init - write a settings template.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use polarmesh::MeshSettings;
use polarmesh_foam::DictSettings;

use crate::config::CaseConfig;
use crate::Cli;

pub fn run(output: &Path, full: bool, force: bool, cli: &Cli) -> Result<()> {
    if output.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            output.display()
        );
    }

    let text = template(full)?;
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(output, text).with_context(|| format!("Failed to write {}", output.display()))?;

    if !cli.quiet {
        println!("Settings template written to {}", output.display());
    }
    Ok(())
}

fn template(full: bool) -> Result<String> {
    let mesh = if full {
        MeshSettings::full_annulus()
    } else {
        MeshSettings::quarter_wedge()
    };
    CaseConfig {
        mesh,
        export: DictSettings::default(),
    }
    .to_toml()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_parse_and_validate() {
        for full in [false, true] {
            let config = CaseConfig::from_toml(&template(full).unwrap()).unwrap();
            config.mesh.validate().unwrap();
            config.export.validate().unwrap();
            assert_eq!(config.mesh.angle_deg == 360.0, full);
        }
    }
}
