//! Quickstart configuration types and loading

use eyre::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main quickstart configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Template directory layout
    pub paths: PathsConfig,

    /// Upstream awesome-rules repository
    pub awesome: AwesomeConfig,

    /// Taskmaster integration
    pub taskmaster: TaskmasterConfig,
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .quickstart.yml
        let local_config = PathBuf::from(".quickstart.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/quickstart/quickstart.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("quickstart").join("quickstart.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        config.validate()?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.awesome.repo_url.trim().is_empty() {
            bail!("awesome.repo-url cannot be empty");
        }
        if self.taskmaster.npm_package.trim().is_empty() {
            bail!("taskmaster.npm-package cannot be empty");
        }
        if self.paths.rules_dir.as_os_str().is_empty() {
            bail!("paths.rules-dir cannot be empty");
        }
        Ok(())
    }
}

/// Template directory layout, relative to the project root
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory holding `*.mdc` rule files
    #[serde(rename = "rules-dir")]
    pub rules_dir: PathBuf,

    /// Directory holding workflow prompt files
    #[serde(rename = "prompts-dir")]
    pub prompts_dir: PathBuf,

    /// Directory the upstream rules repo is unpacked into
    #[serde(rename = "awesome-rules-dir")]
    pub awesome_rules_dir: PathBuf,

    /// Directory archived template files are moved into
    #[serde(rename = "archive-dir")]
    pub archive_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            rules_dir: PathBuf::from(".cursor/rules"),
            prompts_dir: PathBuf::from("dev_tools/prompts"),
            awesome_rules_dir: PathBuf::from(".cursor/awesome-rules"),
            archive_dir: PathBuf::from("archive"),
        }
    }
}

/// Upstream awesome-rules repository configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AwesomeConfig {
    /// Clone URL of the rules repository
    #[serde(rename = "repo-url")]
    pub repo_url: String,

    /// Skip cloning entirely
    #[serde(rename = "skip-clone")]
    pub skip_clone: bool,
}

impl Default for AwesomeConfig {
    fn default() -> Self {
        Self {
            repo_url: "https://github.com/PatrickJS/awesome-cursorrules.git".to_string(),
            skip_clone: false,
        }
    }
}

/// Taskmaster integration configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskmasterConfig {
    /// Run the taskmaster setup step at all
    pub enabled: bool,

    /// npm package installed when the CLI is missing
    #[serde(rename = "npm-package")]
    pub npm_package: String,
}

impl Default for TaskmasterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            npm_package: "taskmaster-ai".to_string(),
        }
    }
}
