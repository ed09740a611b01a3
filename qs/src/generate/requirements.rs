//! requirements.txt generation for Python presets

use std::fs;
use std::path::Path;

use colored::Colorize;
use eyre::{Context, Result};
use tracing::info;

use crate::catalog::Architecture;

/// Write `requirements.txt` for presets that declare Python requirements
pub fn write_requirements(root: &Path, arch: &Architecture) -> Result<bool> {
    if !arch.has_requirements() {
        return Ok(false);
    }

    let path = root.join("requirements.txt");
    fs::write(&path, arch.requirements.join("\n")).context("Failed to write requirements.txt")?;

    info!("Created requirements.txt");
    println!("{} Created requirements.txt", "✅".green());
    println!("🐍 Install Python packages: pip install -r requirements.txt");

    Ok(true)
}
