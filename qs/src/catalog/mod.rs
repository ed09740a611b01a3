//! Architecture catalog: preset definitions and loading
//!
//! Presets come from `architectures.json` in the project root. The document
//! groups presets under categories and popular stacks; loading flattens all
//! groupings into one ordered key -> preset list. A missing or unparseable
//! file falls back to the builtin catalog.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

mod builtin;

pub use builtin::builtin_catalog;

/// A single tech-stack preset
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Architecture {
    /// Display name shown in the selection menu
    pub name: String,

    /// Rule files bundled with the template (legacy field name)
    pub rules: Vec<String>,

    /// Rule files bundled with the template (newer catalog documents)
    pub local_rules: Vec<String>,

    /// Slugs of upstream awesome-rules to fetch and convert
    pub awesome_rules: Vec<String>,

    /// Workflow prompt files to copy into `active_prompts/`
    pub prompts: Vec<String>,

    /// npm runtime packages
    pub packages: Vec<String>,

    /// npm dev packages
    pub dev_dependencies: Vec<String>,

    /// Python requirements (backend presets only)
    pub requirements: Vec<String>,

    /// Script name -> command map for package.json, in catalog declaration
    /// order (serde_json's preserve_order feature)
    pub scripts: serde_json::Map<String, serde_json::Value>,
}

impl Architecture {
    /// The synthetic "pick your own rules" preset appended to every catalog
    pub fn custom() -> Self {
        Self {
            name: "Custom Architecture (Select your own rules)".to_string(),
            ..Default::default()
        }
    }

    /// Rule files bundled with the template, whichever field the catalog used
    pub fn local_rule_files(&self) -> &[String] {
        if self.local_rules.is_empty() {
            &self.rules
        } else {
            &self.local_rules
        }
    }

    /// Whether this preset generates a package.json
    pub fn has_packages(&self) -> bool {
        !self.packages.is_empty()
    }

    /// Whether this preset generates a requirements.txt
    pub fn has_requirements(&self) -> bool {
        !self.requirements.is_empty()
    }
}

/// Ordered key -> preset mapping
///
/// Declaration order is preserved so the numbered selection menu is stable
/// across runs. Inserting an existing key overwrites the preset in place.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<(String, Architecture)>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a preset
    pub fn insert(&mut self, key: impl Into<String>, arch: Architecture) {
        let key = key.into();
        if let Some(existing) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            existing.1 = arch;
        } else {
            self.entries.push((key, arch));
        }
    }

    /// Look up a preset by key
    pub fn get(&self, key: &str) -> Option<&Architecture> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, a)| a)
    }

    /// Iterate presets in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Architecture)> {
        self.entries.iter().map(|(k, a)| (k.as_str(), a))
    }

    /// Preset keys in declaration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// On-disk shape of `architectures.json`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CatalogDoc {
    categories: BTreeMap<String, Category>,
    popular_stacks: Option<PopularStacks>,
    presets: BTreeMap<String, Architecture>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Category {
    architectures: BTreeMap<String, Architecture>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PopularStacks {
    stacks: BTreeMap<String, Architecture>,
}

/// Load the catalog from `architectures.json` under `root`
///
/// Falls back to the builtin catalog when the file is missing or invalid.
pub fn load(root: &Path) -> Catalog {
    let path = root.join("architectures.json");
    if !path.exists() {
        info!("No architectures.json found, using builtin catalog");
        return builtin_catalog();
    }

    match load_from_file(&path) {
        Ok(catalog) => catalog,
        Err(e) => {
            warn!("Failed to load {}: {e}", path.display());
            builtin_catalog()
        }
    }
}

fn load_from_file(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path).context("Failed to read architectures.json")?;
    let doc: CatalogDoc = serde_json::from_str(&content).context("Failed to parse architectures.json")?;

    info!("Loaded catalog from: {}", path.display());
    Ok(flatten(doc))
}

/// Flatten categories, popular stacks, and legacy presets into one mapping
fn flatten(doc: CatalogDoc) -> Catalog {
    let mut catalog = Catalog::new();

    for (_, category) in doc.categories {
        for (key, arch) in category.architectures {
            catalog.insert(key, arch);
        }
    }

    if let Some(popular) = doc.popular_stacks {
        for (key, arch) in popular.stacks {
            catalog.insert(key, arch);
        }
    }

    for (key, arch) in doc.presets {
        catalog.insert(key, arch);
    }

    // Custom option is always available
    catalog.insert("custom", Architecture::custom());

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_builtin_catalog_presets() {
        let catalog = builtin_catalog();

        assert!(catalog.get("fastapi").is_some());
        assert!(catalog.get("nextjs-fullstack").is_some());
        assert!(catalog.get("custom").is_some());

        let fastapi = catalog.get("fastapi").unwrap();
        assert!(fastapi.has_requirements());
        assert!(!fastapi.has_packages());
        assert!(fastapi.requirements.contains(&"uvicorn".to_string()));
    }

    #[test]
    fn test_catalog_insert_overwrites() {
        let mut catalog = Catalog::new();
        catalog.insert("a", Architecture::default());
        catalog.insert(
            "a",
            Architecture {
                name: "replaced".to_string(),
                ..Default::default()
            },
        );

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("a").unwrap().name, "replaced");
    }

    #[test]
    fn test_catalog_preserves_order() {
        let mut catalog = Catalog::new();
        catalog.insert("zebra", Architecture::default());
        catalog.insert("alpha", Architecture::default());

        let keys: Vec<&str> = catalog.keys().collect();
        assert_eq!(keys, vec!["zebra", "alpha"]);
    }

    #[test]
    fn test_load_missing_file_uses_builtin() {
        let dir = tempdir().unwrap();
        let catalog = load(dir.path());

        assert!(catalog.get("fastapi").is_some());
        assert!(catalog.get("custom").is_some());
    }

    #[test]
    fn test_load_invalid_json_uses_builtin() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("architectures.json"), "not json").unwrap();

        let catalog = load(dir.path());
        assert!(catalog.get("fastapi").is_some());
    }

    #[test]
    fn test_flatten_categories_and_stacks() {
        let json = r#"{
            "categories": {
                "backend": {
                    "architectures": {
                        "fastapi": {
                            "name": "FastAPI",
                            "local_rules": ["testing.mdc"],
                            "requirements": ["fastapi", "uvicorn"]
                        }
                    }
                }
            },
            "popular_stacks": {
                "stacks": {
                    "t3-stack": {
                        "name": "T3 Stack",
                        "packages": ["next", "react"]
                    }
                }
            },
            "presets": {
                "legacy-one": { "name": "Legacy" }
            }
        }"#;

        let doc: CatalogDoc = serde_json::from_str(json).unwrap();
        let catalog = flatten(doc);

        assert_eq!(catalog.get("fastapi").unwrap().name, "FastAPI");
        assert_eq!(catalog.get("t3-stack").unwrap().packages, vec!["next", "react"]);
        assert_eq!(catalog.get("legacy-one").unwrap().name, "Legacy");
        assert!(catalog.get("custom").is_some());
    }

    #[test]
    fn test_local_rule_files_prefers_local_rules() {
        let arch = Architecture {
            rules: vec!["old.mdc".to_string()],
            local_rules: vec!["new.mdc".to_string()],
            ..Default::default()
        };
        assert_eq!(arch.local_rule_files(), &["new.mdc".to_string()]);

        let legacy = Architecture {
            rules: vec!["old.mdc".to_string()],
            ..Default::default()
        };
        assert_eq!(legacy.local_rule_files(), &["old.mdc".to_string()]);
    }

    #[test]
    fn test_unknown_fields_tolerated() {
        let json = r#"{ "name": "X", "totally_new_field": 42 }"#;
        let arch: Architecture = serde_json::from_str(json).unwrap();
        assert_eq!(arch.name, "X");
    }
}
