use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// The gymbot home directory (`~/.gymbot`).
pub fn gymbot_home() -> Result<PathBuf> {
    Ok(dirs::home_dir()
        .context("could not determine home directory")?
        .join(".gymbot"))
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)
        .with_context(|| format!("failed to create directory {}", path.display()))
}
