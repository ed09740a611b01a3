//! Rule mappings: awesome-rule slug -> path inside the upstream repo

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
struct MappingsDoc {
    #[serde(default)]
    mappings: BTreeMap<String, String>,
}

/// The known slug -> upstream path table
pub fn default_mappings() -> BTreeMap<String, String> {
    [
        ("react-typescript-cursorrules", "react-typescript/.cursorrules"),
        (
            "cursor-ai-react-typescript-shadcn-ui-cursorrules-p",
            "cursor-ai-react-typescript-shadcn-ui/.cursorrules",
        ),
        ("vue-cursorrules-prompt-file", "vue/.cursorrules"),
        ("angular-novo-elements-cursorrules", "angular-novo-elements/.cursorrules"),
        (
            "angular-cursorrules-prompt-file-typescript",
            "angular-typescript/.cursorrules",
        ),
        ("svelte-cursorrules-prompt-file", "svelte/.cursorrules"),
        ("next-type-llm", "next-type-llm/.cursorrules"),
        ("nuxt-cursorrules-prompt-file", "nuxt/.cursorrules"),
        ("remix-cursorrules-prompt-file", "remix/.cursorrules"),
        ("trpc-cursorrules-prompt-file", "trpc/.cursorrules"),
        ("react-native-cursorrules-prompt-file", "react-native/.cursorrules"),
        ("flutter-cursorrules-prompt-file", "flutter/.cursorrules"),
        ("swift-cursorrules-prompt-file-uikit", "swift-uikit/.cursorrules"),
        ("swift-cursorrules-prompt-file-swiftui", "swift-swiftui/.cursorrules"),
        (
            "android-jetpack-compose-cursorrules",
            "android-jetpack-compose/.cursorrules",
        ),
        ("python-fastapi-cursorrules-prompt-file", "python-fastapi/.cursorrules"),
        ("python-django-cursorrules-prompt-file", "python-django/.cursorrules"),
        ("python-flask-cursorrules-prompt-file", "python-flask/.cursorrules"),
        ("express-cursorrules-prompt-file", "express/.cursorrules"),
        ("nestjs-cursorrules-prompt-file", "nestjs/.cursorrules"),
        ("java-spring-boot-cursorrules", "java-spring-boot/.cursorrules"),
        ("ruby-rails-cursorrules-prompt-file", "ruby-rails/.cursorrules"),
        ("laravel-cursorrules-prompt-file", "laravel/.cursorrules"),
        ("python-vercel-cursorrules-prompt-file", "python-vercel/.cursorrules"),
        ("netlify-functions-cursorrules", "netlify-functions/.cursorrules"),
        ("aws-lambda-cursorrules", "aws-lambda/.cursorrules"),
        ("prisma-cursorrules-prompt-file", "prisma/.cursorrules"),
        ("supabase-cursorrules-prompt-file", "supabase/.cursorrules"),
        ("cypress-cursorrules-prompt-file", "cypress/.cursorrules"),
        ("playwright-cursorrules-prompt-file", "playwright/.cursorrules"),
        ("solidity-hardhat-cursorrules", "solidity-hardhat/.cursorrules"),
        ("solidity-foundry-cursorrules", "solidity-foundry/.cursorrules"),
        (
            "python-projects-guide-cursorrules-prompt-file",
            "python-projects-guide/.cursorrules",
        ),
        (
            "python-cursorrules-prompt-file-best-practices",
            "python-best-practices/.cursorrules",
        ),
        ("typescript-cursorrules-prompt-file", "typescript/.cursorrules"),
        ("go-cursorrules-prompt-file", "go/.cursorrules"),
        ("rust-cursorrules-prompt-file", "rust/.cursorrules"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// Write `rule-mappings.json` at the project root
pub fn write_mappings(root: &Path) -> Result<()> {
    let doc = MappingsDoc {
        mappings: default_mappings(),
    };

    let path = root.join("rule-mappings.json");
    let json = serde_json::to_string_pretty(&doc).context("Failed to serialize rule mappings")?;
    fs::write(&path, json).context("Failed to write rule-mappings.json")?;

    Ok(())
}

/// Load `rule-mappings.json` from the project root
pub fn load_mappings(root: &Path) -> Result<BTreeMap<String, String>> {
    let path = root.join("rule-mappings.json");
    let content = fs::read_to_string(&path).context(format!("Failed to read {}", path.display()))?;
    let doc: MappingsDoc = serde_json::from_str(&content).context("Failed to parse rule-mappings.json")?;

    Ok(doc.mappings)
}
