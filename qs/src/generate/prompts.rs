//! Workflow prompt copying into `active_prompts/`

use std::fs;
use std::path::Path;

use colored::Colorize;
use eyre::{Context, Result};
use tracing::{info, warn};

/// Copy the preset's prompt files from the template prompts dir
///
/// Missing sources are skipped with a warning. Returns the number of prompts
/// copied.
pub fn copy_prompts(root: &Path, prompts_dir: &Path, prompts: &[String]) -> Result<usize> {
    if prompts.is_empty() {
        return Ok(0);
    }

    let target_dir = root.join("active_prompts");
    fs::create_dir_all(&target_dir).context("Failed to create active_prompts directory")?;

    let mut copied = 0;
    for prompt in prompts {
        let source = prompts_dir.join(prompt);
        if !source.exists() {
            warn!("Prompt not found, skipping: {}", source.display());
            continue;
        }

        let Some(file_name) = source.file_name() else {
            warn!("Prompt has no file name, skipping: {}", source.display());
            continue;
        };

        match fs::copy(&source, target_dir.join(file_name)) {
            Ok(_) => copied += 1,
            Err(e) => warn!("Failed to copy {prompt}: {e}"),
        }
    }

    if copied > 0 {
        info!("Set up {copied} prompts in active_prompts/");
        println!("{} Set up {copied} prompts in active_prompts/", "✅".green());
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_copy_prompts_flattens_paths() {
        let dir = tempdir().unwrap();
        let prompts_dir = dir.path().join("dev_tools/prompts");
        fs::create_dir_all(prompts_dir.join("workflow")).unwrap();
        fs::write(prompts_dir.join("workflow/execution_prompt.md"), "do the work").unwrap();

        let copied = copy_prompts(
            dir.path(),
            &prompts_dir,
            &["workflow/execution_prompt.md".to_string()],
        )
        .unwrap();

        assert_eq!(copied, 1);
        let content = fs::read_to_string(dir.path().join("active_prompts/execution_prompt.md")).unwrap();
        assert_eq!(content, "do the work");
    }

    #[test]
    fn test_copy_prompts_skips_missing() {
        let dir = tempdir().unwrap();
        let prompts_dir = dir.path().join("prompts");
        fs::create_dir_all(&prompts_dir).unwrap();

        let copied = copy_prompts(dir.path(), &prompts_dir, &["ghost.md".to_string()]).unwrap();
        assert_eq!(copied, 0);
    }

    #[test]
    fn test_copy_prompts_empty_list() {
        let dir = tempdir().unwrap();
        let copied = copy_prompts(dir.path(), &dir.path().join("prompts"), &[]).unwrap();
        assert_eq!(copied, 0);
        assert!(!dir.path().join("active_prompts").exists());
    }
}
