//! Starter source files for backend presets

use std::fs;
use std::path::Path;

use colored::Colorize;
use eyre::{Context, Result};
use serde_json::json;
use tracing::info;

use crate::templates;

use super::slugify;

/// Create `src/` and architecture-specific starter files
///
/// Starters are only written when the target file does not already exist.
pub fn create_basic_structure(root: &Path, arch_key: &str, project_name: &str) -> Result<()> {
    fs::create_dir_all(root.join("src")).context("Failed to create src directory")?;

    let context = json!({ "project_name": project_name });

    match arch_key {
        "fastapi" => {
            let main_py = root.join("main.py");
            if !main_py.exists() {
                fs::write(&main_py, templates::render(templates::FASTAPI_MAIN, &context)?)
                    .context("Failed to write main.py")?;
                info!("Created FastAPI starter");
                println!("{} Created FastAPI starter (main.py)", "✅".green());
            }
        }
        "flask-api" => {
            let app_py = root.join("app.py");
            if !app_py.exists() {
                fs::write(&app_py, templates::render(templates::FLASK_APP, &context)?)
                    .context("Failed to write app.py")?;
                info!("Created Flask starter");
                println!("{} Created Flask starter (app.py)", "✅".green());
            }
        }
        "django-api" => {
            // Django scaffolds itself; point the user at django-admin
            if !root.join("manage.py").exists() {
                println!(
                    "📋 Django project structure needed - run: django-admin startproject {} .",
                    slugify(project_name).replace('-', "_")
                );
            }
        }
        _ => {}
    }

    Ok(())
}
