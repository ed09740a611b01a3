//! Template file archiving
//!
//! After setup the template's own files are moved into a timestamped archive
//! folder so the generated project starts clean. Individual failures warn and
//! continue; the manifest records what was attempted.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use colored::Colorize;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Template-only files moved out of the project root
const TEMPLATE_FILES: &[&str] = &[
    "architectures.json",
    "rule-mappings.json",
    "setup.sh",
    "WORKFLOW.md",
];

/// Template-only directories moved out of the project root
const TEMPLATE_DIRS: &[&str] = &[".cursor/awesome-rules", ".cursor/rules", "dev_tools"];

/// Manifest written alongside the archived files
#[derive(Debug, Serialize, Deserialize)]
pub struct ArchiveInfo {
    pub archived_at: String,
    pub selected_architecture: String,
    pub project_name: String,
    pub archived_files: Vec<String>,
    pub archived_directories: Vec<String>,
    pub note: String,
}

/// Archiver for template files under a project root
pub struct Archiver {
    root: PathBuf,
    archive_dir: PathBuf,
    rules_dir: PathBuf,
}

impl Archiver {
    pub fn new(root: impl Into<PathBuf>, archive_dir: impl Into<PathBuf>, rules_dir: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            archive_dir: archive_dir.into(),
            rules_dir: rules_dir.into(),
        }
    }

    /// Move template files and directories into the timestamped archive
    ///
    /// Returns the number of entries archived.
    pub fn archive_template_files(&self, selected_arch: &str, project_name: &str) -> Result<usize> {
        println!("\n📦 Archiving unused template files...");

        let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        fs::create_dir_all(&self.archive_dir).context("Failed to create archive directory")?;

        let mut archived = 0;

        for file_name in TEMPLATE_FILES {
            let file_path = self.root.join(file_name);
            if !file_path.is_file() {
                continue;
            }

            let archive_path = self.archive_dir.join(format!("{timestamp}_{file_name}"));
            match fs::copy(&file_path, &archive_path).and_then(|_| fs::remove_file(&file_path)) {
                Ok(_) => archived += 1,
                Err(e) => warn!("Failed to archive {file_name}: {e}"),
            }
        }

        for dir_name in TEMPLATE_DIRS {
            let dir_path = self.root.join(dir_name);
            if !dir_path.is_dir() {
                continue;
            }

            let flat_name = dir_name.replace('/', "_");
            let archive_path = self.archive_dir.join(format!("{timestamp}_{flat_name}"));
            match copy_dir_all(&dir_path, &archive_path).and_then(|_| fs::remove_dir_all(&dir_path)) {
                Ok(_) => archived += 1,
                Err(e) => warn!("Failed to archive {dir_name}: {e}"),
            }
        }

        self.write_manifest(&timestamp, selected_arch, project_name)?;

        if archived > 0 {
            info!("Archived {archived} template entries");
            println!("{} Archived {archived} template files to archive/", "✅".green());
        }

        // Recreate the rules dir so selected rules have somewhere to live
        fs::create_dir_all(&self.rules_dir).context("Failed to recreate rules directory")?;

        Ok(archived)
    }

    fn write_manifest(&self, timestamp: &str, selected_arch: &str, project_name: &str) -> Result<()> {
        let info = ArchiveInfo {
            archived_at: timestamp.to_string(),
            selected_architecture: selected_arch.to_string(),
            project_name: project_name.to_string(),
            archived_files: TEMPLATE_FILES.iter().map(|s| s.to_string()).collect(),
            archived_directories: TEMPLATE_DIRS.iter().map(|s| s.to_string()).collect(),
            note: "These files were archived after quickstart setup.".to_string(),
        };

        let path = self.archive_dir.join(format!("{timestamp}_archive_info.json"));
        let json = serde_json::to_string_pretty(&info).context("Failed to serialize archive manifest")?;
        fs::write(&path, json).context("Failed to write archive manifest")?;

        Ok(())
    }
}

/// Recursively copy a directory
fn copy_dir_all(src: &Path, dst: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_all(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
