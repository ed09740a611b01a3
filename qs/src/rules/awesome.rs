//! Awesome-rules fetching and conversion
//!
//! Clones the upstream rules repository (shallow), moves its `rules/`
//! directory into place, and converts individual `.cursorrules` files into
//! MDC rule files in the local rules directory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tokio::process::Command;
use tracing::{debug, info, warn};

use super::rule_title;

/// Error types for awesome-rules operations
#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("Failed to clone rules repository: {0}")]
    CloneFailed(String),

    #[error("Cloned repository has no rules directory: {0}")]
    MissingRulesDir(String),

    #[error("Git command failed: {0}")]
    GitError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Manager for the upstream awesome-rules checkout
pub struct AwesomeRules {
    /// Project root the temp clone lands under
    root: PathBuf,

    /// Target directory for the unpacked `rules/` tree
    rules_checkout: PathBuf,

    /// Clone URL
    repo_url: String,
}

impl AwesomeRules {
    pub fn new(root: impl Into<PathBuf>, rules_checkout: impl Into<PathBuf>, repo_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            rules_checkout: rules_checkout.into(),
            repo_url: repo_url.into(),
        }
    }

    /// Whether the checkout is already in place
    pub fn is_present(&self) -> bool {
        self.rules_checkout.exists()
    }

    /// Clone the upstream repository if the checkout is absent
    ///
    /// Returns true when a fresh clone happened, false when the checkout was
    /// already present.
    pub async fn ensure_cloned(&self) -> Result<bool, RulesError> {
        if self.is_present() {
            debug!("Awesome rules already present at {}", self.rules_checkout.display());
            return Ok(false);
        }

        let temp_dir = self.root.join("temp-awesome-rules");
        if temp_dir.exists() {
            tokio::fs::remove_dir_all(&temp_dir).await?;
        }

        info!("Cloning awesome rules from {}", self.repo_url);

        let output = Command::new("git")
            .args(["clone", "--depth", "1", &self.repo_url])
            .arg(&temp_dir)
            .output()
            .await
            .map_err(|e| RulesError::GitError(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RulesError::CloneFailed(stderr.to_string()));
        }

        // Move the rules directory into place, then drop the clone
        let rules_source = temp_dir.join("rules");
        if !rules_source.exists() {
            tokio::fs::remove_dir_all(&temp_dir).await?;
            return Err(RulesError::MissingRulesDir(temp_dir.display().to_string()));
        }

        if let Some(parent) = self.rules_checkout.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::rename(&rules_source, &self.rules_checkout).await?;
        tokio::fs::remove_dir_all(&temp_dir).await?;

        info!("Downloaded awesome rules to {}", self.rules_checkout.display());
        Ok(true)
    }

    /// Copy mapped awesome rules into the local rules directory as MDC files
    ///
    /// Unknown slugs and missing source files are skipped with a warning.
    /// Returns the filenames written into `rules_dir`.
    pub fn copy_rules(
        &self,
        slugs: &[String],
        mappings: &BTreeMap<String, String>,
        rules_dir: &Path,
    ) -> Result<Vec<String>, RulesError> {
        if slugs.is_empty() || !self.is_present() {
            return Ok(Vec::new());
        }

        let mut copied = Vec::new();

        for slug in slugs {
            let Some(relative) = mappings.get(slug) else {
                warn!("No mapping for awesome rule: {slug}");
                continue;
            };

            let source = self.rules_checkout.join(relative);
            if !source.exists() {
                warn!("Awesome rule source missing: {}", source.display());
                continue;
            }

            let content = std::fs::read_to_string(&source)?;
            let target_name = format!("{}.mdc", slug.replace('-', "_"));
            let target = rules_dir.join(&target_name);

            std::fs::create_dir_all(rules_dir)?;
            std::fs::write(&target, to_mdc(slug, &content))?;

            copied.push(target_name);
        }

        if !copied.is_empty() {
            info!("Copied {} awesome rules into {}", copied.len(), rules_dir.display());
        }

        Ok(copied)
    }
}

/// Wrap raw `.cursorrules` content in MDC frontmatter
fn to_mdc(slug: &str, content: &str) -> String {
    format!(
        "---\ndescription: {} rules from awesome-cursor-rules\nglobs: **/*\nalwaysApply: true\n---\n\n{}\n",
        rule_title(slug),
        content
    )
}
