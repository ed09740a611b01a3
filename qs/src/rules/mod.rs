//! Rule file handling: listing, titles, and consolidation into `.cursorrules`

use std::fs;
use std::path::Path;

use eyre::{Context, Result};
use tracing::{info, warn};

mod awesome;
mod mappings;

pub use awesome::{AwesomeRules, RulesError};
pub use mappings::{default_mappings, load_mappings, write_mappings};

/// List available `*.mdc` rule files in the rules directory, sorted by name
pub fn available_rules(rules_dir: &Path) -> Vec<String> {
    if !rules_dir.exists() {
        warn!("Rules directory not found: {}", rules_dir.display());
        return Vec::new();
    }

    let pattern = rules_dir.join("*.mdc");
    let mut names: Vec<String> = glob::glob(&pattern.to_string_lossy())
        .map(|paths| {
            paths
                .filter_map(|p| p.ok())
                .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
                .collect()
        })
        .unwrap_or_default();

    names.sort();
    names
}

/// Human-readable title for a rule filename
///
/// `code-writing-standards.mdc` becomes `Code Writing Standards`.
pub fn rule_title(filename: &str) -> String {
    filename
        .trim_end_matches(".mdc")
        .split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Consolidate selected rules into `.cursorrules` at the project root
///
/// Missing rule files are skipped with a warning. Returns the number of rules
/// actually written; zero means nothing was activated and no file is written.
pub fn consolidate(root: &Path, rules_dir: &Path, rules: &[String]) -> Result<usize> {
    if rules.is_empty() {
        warn!("No rules to activate");
        return Ok(0);
    }

    let mut content = String::from("# Auto-generated Cursor Rules for MVP Development\n");
    let mut activated = 0;

    for rule in rules {
        let rule_path = rules_dir.join(rule);
        if !rule_path.exists() {
            warn!("Rule file not found, skipping: {}", rule_path.display());
            continue;
        }

        match fs::read_to_string(&rule_path) {
            Ok(rule_content) => {
                content.push_str(&format!("\n# === {rule} ===\n"));
                content.push_str(&rule_content);
                content.push('\n');
                activated += 1;
            }
            Err(e) => {
                warn!("Failed to read {rule}: {e}");
            }
        }
    }

    if activated > 0 {
        let target = root.join(".cursorrules");
        fs::write(&target, content).context("Failed to write .cursorrules")?;
        info!("Activated {activated} rules in .cursorrules");
    } else {
        warn!("No rules were successfully activated");
    }

    Ok(activated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_rule_title() {
        assert_eq!(rule_title("code-writing-standards.mdc"), "Code Writing Standards");
        assert_eq!(rule_title("testing.mdc"), "Testing");
        assert_eq!(rule_title("git-automation"), "Git Automation");
    }

    #[test]
    fn test_available_rules_missing_dir() {
        let dir = tempdir().unwrap();
        let rules = available_rules(&dir.path().join("nope"));
        assert!(rules.is_empty());
    }

    #[test]
    fn test_available_rules_sorted() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("zeta.mdc"), "z").unwrap();
        fs::write(dir.path().join("alpha.mdc"), "a").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let rules = available_rules(dir.path());
        assert_eq!(rules, vec!["alpha.mdc", "zeta.mdc"]);
    }

    #[test]
    fn test_consolidate_writes_banner_per_rule() {
        let root = tempdir().unwrap();
        let rules_dir = root.path().join("rules");
        fs::create_dir_all(&rules_dir).unwrap();
        fs::write(rules_dir.join("one.mdc"), "rule one content").unwrap();
        fs::write(rules_dir.join("two.mdc"), "rule two content").unwrap();

        let count = consolidate(
            root.path(),
            &rules_dir,
            &["one.mdc".to_string(), "two.mdc".to_string()],
        )
        .unwrap();

        assert_eq!(count, 2);
        let content = fs::read_to_string(root.path().join(".cursorrules")).unwrap();
        assert!(content.starts_with("# Auto-generated Cursor Rules"));
        assert!(content.contains("# === one.mdc ==="));
        assert!(content.contains("rule one content"));
        assert!(content.contains("# === two.mdc ==="));
    }

    #[test]
    fn test_consolidate_skips_missing_rules() {
        let root = tempdir().unwrap();
        let rules_dir = root.path().join("rules");
        fs::create_dir_all(&rules_dir).unwrap();
        fs::write(rules_dir.join("real.mdc"), "content").unwrap();

        let count = consolidate(
            root.path(),
            &rules_dir,
            &["real.mdc".to_string(), "ghost.mdc".to_string()],
        )
        .unwrap();

        assert_eq!(count, 1);
    }

    #[test]
    fn test_consolidate_nothing_writes_no_file() {
        let root = tempdir().unwrap();
        let rules_dir = root.path().join("rules");
        fs::create_dir_all(&rules_dir).unwrap();

        let count = consolidate(root.path(), &rules_dir, &["ghost.mdc".to_string()]).unwrap();

        assert_eq!(count, 0);
        assert!(!root.path().join(".cursorrules").exists());
    }
}
