//! package.json generation for Node.js based presets

use std::fs;
use std::path::Path;

use colored::Colorize;
use eyre::{Context, Result};
use tracing::info;

use crate::catalog::Architecture;

use super::slugify;

/// Write `package.json` for presets that declare npm packages
///
/// Returns false (without writing) when the preset has no packages.
pub fn write_package_json(root: &Path, arch: &Architecture, project_name: &str) -> Result<bool> {
    if !arch.has_packages() {
        return Ok(false);
    }

    let package_json = serde_json::json!({
        "name": slugify(project_name),
        "version": "0.1.0",
        "description": "MVP created with quick-start template",
        "main": "index.js",
        "scripts": arch.scripts,
        "dependencies": {},
        "devDependencies": {},
    });

    let path = root.join("package.json");
    let content = serde_json::to_string_pretty(&package_json).context("Failed to serialize package.json")?;
    fs::write(&path, content).context("Failed to write package.json")?;

    info!("Created package.json");
    println!("{} Created package.json", "✅".green());

    if !arch.packages.is_empty() {
        println!("📦 Install packages: npm install {}", arch.packages.join(" "));
    }
    if !arch.dev_dependencies.is_empty() {
        println!(
            "🔧 Install dev packages: npm install --save-dev {}",
            arch.dev_dependencies.join(" ")
        );
    }

    Ok(true)
}
