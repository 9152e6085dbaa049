//! Provisioning binary: writes the render image definition to disk.

use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

use shortreel_image::ImageSpec;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let target: PathBuf = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("deploy/Dockerfile"));

    let spec = ImageSpec::renderer();

    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }

    std::fs::write(&target, spec.render())
        .with_context(|| format!("writing {}", target.display()))?;
    std::fs::write(target.with_file_name(".dockerignore"), ImageSpec::dockerignore())
        .context("writing .dockerignore")?;

    info!("Wrote image definition to {}", target.display());
    Ok(())
}
