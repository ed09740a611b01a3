//! Project config snapshot (`.mvp-config.json`)
//!
//! A machine-readable record of the chosen preset for other tooling to read.

use std::fs;
use std::path::Path;

use chrono::Utc;
use colored::Colorize;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::Architecture;

#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub project_name: String,
    pub primary_architecture: String,
    pub architecture_details: Architecture,
    pub active_rules: Vec<String>,
    pub created_at: String,
    pub last_modified: String,
    pub tech_stack: TechStack,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryInfo>,
}

/// Empty slots other tooling fills in as the project grows
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TechStack {
    pub frontend: Option<String>,
    pub backend: Option<String>,
    pub database: Option<String>,
    pub testing: Option<String>,
    pub deployment: Option<String>,
}

/// Categorization of a known architecture key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryInfo {
    #[serde(rename = "type")]
    pub kind: String,
    pub framework: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub includes: Option<Vec<String>>,
}

impl CategoryInfo {
    fn new(kind: &str, framework: &str) -> Self {
        Self {
            kind: kind.to_string(),
            framework: framework.to_string(),
            language: None,
            platform: None,
            includes: None,
        }
    }

    fn language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string());
        self
    }

    fn platform(mut self, platform: &str) -> Self {
        self.platform = Some(platform.to_string());
        self
    }

    fn includes(mut self, includes: &[&str]) -> Self {
        self.includes = Some(includes.iter().map(|s| s.to_string()).collect());
        self
    }
}

/// Category record for a known architecture key
pub fn categorize(arch_key: &str) -> Option<CategoryInfo> {
    let info = match arch_key {
        // Frontend
        "react" => CategoryInfo::new("frontend", "React"),
        "vue" => CategoryInfo::new("frontend", "Vue.js"),
        "angular" => CategoryInfo::new("frontend", "Angular"),
        "svelte" => CategoryInfo::new("frontend", "Svelte"),

        // Full-stack
        "nextjs" => CategoryInfo::new("fullstack", "Next.js").includes(&["React", "API Routes"]),
        "nuxtjs" => CategoryInfo::new("fullstack", "Nuxt.js").includes(&["Vue.js", "API Routes"]),
        "t3-stack" => CategoryInfo::new("fullstack", "T3 Stack").includes(&["Next.js", "tRPC", "Prisma"]),

        // Mobile
        "react-native" => CategoryInfo::new("mobile", "React Native").platform("iOS/Android"),
        "flutter" => CategoryInfo::new("mobile", "Flutter").platform("iOS/Android"),

        // Backend
        "fastapi" => CategoryInfo::new("backend", "FastAPI").language("Python"),
        "django" => CategoryInfo::new("backend", "Django").language("Python"),
        "flask" => CategoryInfo::new("backend", "Flask").language("Python"),
        "expressjs" => CategoryInfo::new("backend", "Express.js").language("JavaScript"),
        "nestjs" => CategoryInfo::new("backend", "NestJS").language("TypeScript"),

        _ => return None,
    };

    Some(info)
}

/// Write `.mvp-config.json` at the project root
pub fn write_project_config(
    root: &Path,
    arch_key: &str,
    arch: &Architecture,
    project_name: &str,
    active_rules: &[String],
) -> Result<()> {
    let now = Utc::now().to_rfc3339();

    let config = ProjectConfig {
        project_name: project_name.to_string(),
        primary_architecture: arch_key.to_string(),
        architecture_details: arch.clone(),
        active_rules: active_rules.to_vec(),
        created_at: now.clone(),
        last_modified: now,
        tech_stack: TechStack::default(),
        category: categorize(arch_key),
    };

    let path = root.join(".mvp-config.json");
    let json = serde_json::to_string_pretty(&config).context("Failed to serialize project config")?;
    fs::write(&path, json).context("Failed to write .mvp-config.json")?;

    info!("Created .mvp-config.json");
    println!("{} Created .mvp-config.json for other agents to read", "✅".green());

    Ok(())
}
