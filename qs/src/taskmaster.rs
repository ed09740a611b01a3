//! Taskmaster CLI integration
//!
//! Best-effort: every failure path logs a hint and returns without aborting
//! the rest of setup. Exit status is the only thing checked; this tool does
//! not interpret taskmaster's output.

use std::path::PathBuf;

use colored::Colorize;
use eyre::{Context, Result};
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::config::TaskmasterConfig;
use crate::templates;

/// Taskmaster setup for a project root
pub struct Taskmaster {
    root: PathBuf,
    config: TaskmasterConfig,
}

impl Taskmaster {
    pub fn new(root: impl Into<PathBuf>, config: TaskmasterConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Run the full taskmaster setup; returns true when everything succeeded
    pub async fn setup(&self, project_name: &str) -> Result<bool> {
        if !self.config.enabled {
            debug!("Taskmaster integration disabled in config");
            return Ok(false);
        }

        println!("🤖 Setting up Taskmaster AI for task management...");

        if !self.ensure_installed().await {
            return Ok(false);
        }

        self.scaffold_directories().context("Failed to create .taskmaster directories")?;

        if !self.init_project(project_name).await {
            return Ok(false);
        }

        self.write_templates().context("Failed to write taskmaster templates")?;

        println!("  {} Created .taskmaster/ directory structure", "✅".green());
        println!(
            "  {} Created PRD template at .taskmaster/docs/project-prd-template.md",
            "✅".green()
        );
        println!("  {} Task context directory ready", "✅".green());

        Ok(true)
    }

    /// Check for the CLI, installing it globally via npm when missing
    async fn ensure_installed(&self) -> bool {
        let version_check = Command::new("task-master").arg("--version").output().await;

        if matches!(&version_check, Ok(output) if output.status.success()) {
            println!("  {} Taskmaster already installed", "✅".green());
            return true;
        }

        println!("  📦 Installing Taskmaster globally...");
        let install = Command::new("npm")
            .args(["install", "-g", &self.config.npm_package])
            .output()
            .await;

        match install {
            Ok(output) if output.status.success() => {
                info!("Installed taskmaster via npm");
                println!("  {} Taskmaster installed successfully", "✅".green());
                true
            }
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                warn!("npm install failed: {stderr}");
                println!("  ⚠️  Failed to install Taskmaster");
                println!(
                    "  💡 You can install manually with: npm install -g {}",
                    self.config.npm_package
                );
                false
            }
            Err(e) => {
                warn!("Failed to run npm: {e}");
                println!("  ⚠️  Failed to install Taskmaster: {e}");
                false
            }
        }
    }

    fn taskmaster_dir(&self) -> PathBuf {
        self.root.join(".taskmaster")
    }

    fn scaffold_directories(&self) -> Result<()> {
        let dir = self.taskmaster_dir();
        for sub in ["docs", "context", "reports"] {
            std::fs::create_dir_all(dir.join(sub))?;
        }
        Ok(())
    }

    /// Run `task-master init` in the project root
    async fn init_project(&self, project_name: &str) -> bool {
        let result = Command::new("task-master")
            .arg("init")
            .arg(format!("--name={project_name}"))
            .arg("--description=MVP project created from template")
            .current_dir(&self.root)
            .output()
            .await;

        match result {
            Ok(output) if output.status.success() => {
                info!("Taskmaster initialized in project");
                println!("  {} Taskmaster initialized in project", "✅".green());
                true
            }
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                warn!("task-master init failed: {stderr}");
                println!("  ⚠️  Failed to initialize Taskmaster");
                println!("  💡 You can initialize manually with: task-master init");
                false
            }
            Err(e) => {
                warn!("Failed to run task-master: {e}");
                println!("  ⚠️  Failed to initialize Taskmaster: {e}");
                false
            }
        }
    }

    fn write_templates(&self) -> Result<()> {
        let dir = self.taskmaster_dir();
        std::fs::write(dir.join("docs/project-prd-template.md"), templates::PRD_TEMPLATE)?;
        std::fs::write(dir.join("context/README.md"), templates::TASK_CONTEXT_README)?;
        Ok(())
    }
}
