//! Integration tests for quickstart
//!
//! These exercise the generation pipeline end to end against a tempdir
//! project root, plus the CLI surface via assert_cmd.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use quickstart::archive::Archiver;
use quickstart::catalog::{self, builtin_catalog};
use quickstart::config::Config;
use quickstart::generate;
use quickstart::project_config::write_project_config;
use quickstart::rules;
use quickstart::setup::Setup;

fn write_rule(rules_dir: &Path, name: &str, content: &str) {
    fs::create_dir_all(rules_dir).unwrap();
    fs::write(rules_dir.join(name), content).unwrap();
}

// =============================================================================
// Full generation pipeline
// =============================================================================

#[test]
fn test_fastapi_pipeline_generates_expected_files() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = temp.path();
    let rules_dir = root.join(".cursor/rules");

    let catalog = builtin_catalog();
    let arch = catalog.get("fastapi").unwrap();
    let project_name = "Demo API";

    // Seed the template rules the preset references
    for rule in arch.local_rule_files() {
        write_rule(&rules_dir, rule, &format!("content of {rule}"));
    }

    let selected: Vec<String> = arch.local_rule_files().to_vec();
    let activated = rules::consolidate(root, &rules_dir, &selected).unwrap();
    assert_eq!(activated, selected.len());

    assert!(!generate::write_package_json(root, arch, project_name).unwrap());
    assert!(generate::write_requirements(root, arch).unwrap());
    assert!(generate::write_env_example(root, "fastapi").unwrap());
    assert!(generate::write_readme(root, arch, project_name, &selected).unwrap());
    generate::create_basic_structure(root, "fastapi", project_name).unwrap();

    // FastAPI is a Python preset: requirements and starter, no package.json
    assert!(!root.join("package.json").exists());
    assert!(root.join("requirements.txt").exists());
    assert!(root.join("main.py").exists());
    assert!(root.join("src").is_dir());

    let cursorrules = fs::read_to_string(root.join(".cursorrules")).unwrap();
    assert!(cursorrules.contains("# === testing.mdc ==="));

    let env = fs::read_to_string(root.join(".env.example")).unwrap();
    assert!(env.contains("ALGORITHM=HS256"));

    let readme = fs::read_to_string(root.join("README.md")).unwrap();
    assert!(readme.contains("# Demo API"));
    assert!(readme.contains("FastAPI (Modern Python API)"));
}

#[test]
fn test_nextjs_pipeline_generates_package_json() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = temp.path();

    let catalog = builtin_catalog();
    let arch = catalog.get("nextjs-fullstack").unwrap();

    assert!(generate::write_package_json(root, arch, "Web App").unwrap());
    assert!(!generate::write_requirements(root, arch).unwrap());

    let package: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(root.join("package.json")).unwrap()).unwrap();
    assert_eq!(package["name"], "web-app");
    assert_eq!(package["scripts"]["build"], "next build");
    assert!(!root.join("requirements.txt").exists());
}

#[test]
fn test_archive_then_config_snapshot() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = temp.path();
    let rules_dir = root.join(".cursor/rules");

    // Template files present before archiving
    fs::write(root.join("architectures.json"), "{}").unwrap();
    write_rule(&rules_dir, "testing.mdc", "rule");
    fs::create_dir_all(root.join("dev_tools")).unwrap();

    let archiver = Archiver::new(root, root.join("archive"), &rules_dir);
    let archived = archiver.archive_template_files("fastapi", "Demo API").unwrap();
    assert_eq!(archived, 3);

    // Template files are gone, archive holds them, rules dir is back (empty)
    assert!(!root.join("architectures.json").exists());
    assert!(!root.join("dev_tools").exists());
    assert!(rules_dir.is_dir());
    assert_eq!(fs::read_dir(&rules_dir).unwrap().count(), 0);

    let catalog = builtin_catalog();
    let arch = catalog.get("fastapi").unwrap();
    write_project_config(root, "fastapi", arch, "Demo API", &["testing.mdc".to_string()]).unwrap();

    let snapshot: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(root.join(".mvp-config.json")).unwrap()).unwrap();
    assert_eq!(snapshot["primary_architecture"], "fastapi");
    assert_eq!(snapshot["category"]["language"], "Python");
}

// =============================================================================
// Catalog loading from a project root
// =============================================================================

#[test]
fn test_catalog_file_overrides_builtin() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    fs::write(
        temp.path().join("architectures.json"),
        r#"{
            "categories": {
                "backend": {
                    "architectures": {
                        "axum-api": {
                            "name": "Axum API (Rust Backend)",
                            "local_rules": ["testing.mdc"]
                        }
                    }
                }
            }
        }"#,
    )
    .unwrap();

    let catalog = catalog::load(temp.path());

    assert!(catalog.get("axum-api").is_some());
    assert!(catalog.get("custom").is_some());
    // Builtin-only presets are not merged in when a file is present
    assert!(catalog.get("fastapi").is_none());
}

// =============================================================================
// Environment preparation
// =============================================================================

#[tokio::test]
async fn test_prepare_environment_is_idempotent() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let mut config = Config::default();
    config.awesome.skip_clone = true;

    let setup = Setup::new(temp.path(), config);
    setup.prepare_environment().await.unwrap();
    setup.prepare_environment().await.unwrap();

    let mappings = rules::load_mappings(temp.path()).unwrap();
    assert!(mappings.contains_key("rust-cursorrules-prompt-file"));
}

// =============================================================================
// CLI surface
// =============================================================================

#[test]
fn test_cli_help() {
    Command::cargo_bin("qs")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interactive quick-start scaffolder"));
}

#[test]
fn test_cli_list_architectures_uses_builtin() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    Command::cargo_bin("qs")
        .unwrap()
        .arg("list-architectures")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("FastAPI (Modern Python API)"))
        .stdout(predicate::str::contains("custom"));
}

#[test]
fn test_cli_list_rules_empty_dir() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    Command::cargo_bin("qs")
        .unwrap()
        .arg("list-rules")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No rule files found"));
}

#[test]
fn test_cli_list_rules_with_rules() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    write_rule(&temp.path().join(".cursor/rules"), "code-writing-standards.mdc", "x");

    Command::cargo_bin("qs")
        .unwrap()
        .arg("list-rules")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Code Writing Standards"));
}
