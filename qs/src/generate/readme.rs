//! README.md generation

use std::fs;
use std::path::Path;

use colored::Colorize;
use eyre::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::catalog::Architecture;
use crate::rules::rule_title;
use crate::templates;

use super::slugify;

/// Context rendered into the embedded README template
#[derive(Debug, Serialize)]
struct ReadmeContext {
    project_name: String,
    slug: String,
    architecture_name: String,
    rules: Vec<String>,
    has_scripts: bool,
    scripts: Vec<ScriptEntry>,
    install_section: String,
    has_requirements: bool,
}

#[derive(Debug, Serialize)]
struct ScriptEntry {
    name: String,
    command: String,
}

fn install_section(arch: &Architecture) -> String {
    if arch.has_packages() {
        let mut section = String::from("```bash\nnpm install\n");
        if arch.has_requirements() {
            section.push_str("pip install -r requirements.txt\n");
        }
        section.push_str("```");
        section
    } else if arch.has_requirements() {
        "```bash\npip install -r requirements.txt\n```".to_string()
    } else {
        "```bash\n# No dependencies to install\n```".to_string()
    }
}

/// Write `README.md` rendered from the embedded template
pub fn write_readme(root: &Path, arch: &Architecture, project_name: &str, selected_rules: &[String]) -> Result<bool> {
    let context = ReadmeContext {
        project_name: project_name.to_string(),
        slug: slugify(project_name),
        architecture_name: arch.name.clone(),
        rules: selected_rules.iter().map(|r| rule_title(r)).collect(),
        has_scripts: !arch.scripts.is_empty(),
        scripts: arch
            .scripts
            .iter()
            .map(|(name, command)| ScriptEntry {
                name: name.clone(),
                command: command.as_str().unwrap_or_default().to_string(),
            })
            .collect(),
        install_section: install_section(arch),
        has_requirements: arch.has_requirements(),
    };

    let content = templates::render(templates::README, &context)?;
    fs::write(root.join("README.md"), content).context("Failed to write README.md")?;

    info!("Created README.md");
    println!("{} Created README.md with setup instructions", "✅".green());

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn preset() -> Architecture {
        let scripts = json!({"dev": "uvicorn main:app --reload"});
        Architecture {
            name: "FastAPI (Modern Python API)".to_string(),
            requirements: vec!["fastapi".to_string()],
            scripts: scripts.as_object().unwrap().clone(),
            ..Default::default()
        }
    }

    #[test]
    fn test_readme_contains_architecture_and_rules() {
        let dir = tempdir().unwrap();
        write_readme(
            dir.path(),
            &preset(),
            "My API",
            &["testing.mdc".to_string(), "security.mdc".to_string()],
        )
        .unwrap();

        let content = fs::read_to_string(dir.path().join("README.md")).unwrap();
        assert!(content.starts_with("# My API"));
        assert!(content.contains("**FastAPI (Modern Python API)**"));
        assert!(content.contains("- Testing"));
        assert!(content.contains("- Security"));
        assert!(content.contains("uvicorn main:app --reload"));
        assert!(content.contains("my-api/"));
    }

    #[test]
    fn test_readme_install_section_python_only() {
        let arch = preset();
        let section = install_section(&arch);
        assert_eq!(section, "```bash\npip install -r requirements.txt\n```");
    }

    #[test]
    fn test_readme_install_section_node_and_python() {
        let mut arch = preset();
        arch.packages = vec!["vercel".to_string()];
        let section = install_section(&arch);
        assert!(section.contains("npm install"));
        assert!(section.contains("pip install -r requirements.txt"));
    }

    #[test]
    fn test_readme_install_section_no_deps() {
        let section = install_section(&Architecture::default());
        assert!(section.contains("# No dependencies to install"));
    }

    #[test]
    fn test_readme_preserves_special_characters_in_name() {
        let dir = tempdir().unwrap();
        write_readme(dir.path(), &preset(), "Tom & Jerry's App", &[]).unwrap();

        let content = fs::read_to_string(dir.path().join("README.md")).unwrap();
        assert!(content.starts_with("# Tom & Jerry's App"));
        assert!(!content.contains("&amp;"));
        assert!(!content.contains("&#x27;"));
    }

    #[test]
    fn test_readme_requirements_line_in_structure_tree() {
        let dir = tempdir().unwrap();
        write_readme(dir.path(), &preset(), "My API", &[]).unwrap();

        let content = fs::read_to_string(dir.path().join("README.md")).unwrap();
        assert!(content.contains("requirements.txt      # Python dependencies"));
    }
}
