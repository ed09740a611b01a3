//! Setup orchestration
//!
//! Runs the interactive flow end to end. Steps after selection are
//! best-effort: a failed step is logged and later steps still run.

use std::path::{Path, PathBuf};

use colored::Colorize;
use eyre::{Context, Result};
use tracing::{info, warn};

use crate::archive::Archiver;
use crate::catalog::{self, Architecture, Catalog};
use crate::config::Config;
use crate::generate;
use crate::project_config;
use crate::rules::{self, AwesomeRules};
use crate::select::Selector;
use crate::taskmaster::Taskmaster;

/// Everything the setup flow needs, resolved against one project root
pub struct Setup {
    root: PathBuf,
    config: Config,
}

impl Setup {
    pub fn new(root: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Run setup in the current directory
    pub async fn run_in_cwd(config: Config) -> Result<()> {
        let root = std::env::current_dir().context("Failed to get current directory")?;
        Self::new(root, config).run().await
    }

    fn rules_dir(&self) -> PathBuf {
        self.root.join(&self.config.paths.rules_dir)
    }

    fn prompts_dir(&self) -> PathBuf {
        self.root.join(&self.config.paths.prompts_dir)
    }

    fn awesome(&self) -> AwesomeRules {
        AwesomeRules::new(
            &self.root,
            self.root.join(&self.config.paths.awesome_rules_dir),
            &self.config.awesome.repo_url,
        )
    }

    /// Create base directories, fetch awesome rules, write mappings
    pub async fn prepare_environment(&self) -> Result<()> {
        for dir in [self.rules_dir(), self.prompts_dir()] {
            if let Some(parent) = dir.parent() {
                std::fs::create_dir_all(parent).context("Failed to create template directories")?;
            }
        }

        if !self.config.awesome.skip_clone {
            let awesome = self.awesome();
            if !awesome.is_present() {
                println!("🔧 Setting up awesome-cursor-rules...");
                match awesome.ensure_cloned().await {
                    Ok(true) => println!("{} Downloaded awesome-cursor-rules", "✅".green()),
                    Ok(false) => {}
                    Err(e) => {
                        warn!("Awesome rules setup failed: {e}");
                        println!("⚠️  Failed to download awesome-cursor-rules. Continuing without them.");
                    }
                }
            }
        }

        rules::write_mappings(&self.root).context("Failed to write rule mappings")?;
        Ok(())
    }

    /// The full interactive setup flow
    pub async fn run(&self) -> Result<()> {
        self.prepare_environment().await?;

        let catalog = catalog::load(&self.root);
        let mut selector = Selector::new()?;

        let Some((arch_key, arch)) = selector.select_architecture(&catalog)? else {
            println!("\n👋 Setup cancelled");
            return Ok(());
        };
        let arch = arch.clone();

        // Resolve the rule list: preset rules, or interactive picks for custom
        let mut selected_rules: Vec<String> = if arch_key == "custom" {
            let available = rules::available_rules(&self.rules_dir());
            match selector.select_custom_rules(&available)? {
                Some(selected) => selected,
                None => {
                    println!("\n👋 Setup cancelled");
                    return Ok(());
                }
            }
        } else {
            arch.local_rule_files().to_vec()
        };

        let Some(project_name) = selector.prompt_project_name()? else {
            println!("\n👋 Setup cancelled");
            return Ok(());
        };

        println!("\n🔧 Setting up {} architecture...\n", arch.name);

        let mut steps = StepSummary::default();

        // Awesome rules are copied first so they land in the consolidated file
        let mappings = rules::load_mappings(&self.root).unwrap_or_else(|e| {
            warn!("Falling back to default mappings: {e}");
            rules::default_mappings()
        });
        match self.awesome().copy_rules(&arch.awesome_rules, &mappings, &self.rules_dir()) {
            Ok(copied) => selected_rules.extend(copied),
            Err(e) => warn!("Failed to copy awesome rules: {e}"),
        }

        match rules::consolidate(&self.root, &self.rules_dir(), &selected_rules) {
            Ok(count) if count > 0 => {
                println!("{} Activated {count} rules in .cursorrules", "✅".green());
                steps.record("Rules activated");
            }
            Ok(_) => {}
            Err(e) => warn!("Rule consolidation failed: {e}"),
        }

        match generate::copy_prompts(&self.root, &self.prompts_dir(), &arch.prompts) {
            Ok(count) if count > 0 => steps.record("Prompts configured"),
            Ok(_) => {}
            Err(e) => warn!("Prompt setup failed: {e}"),
        }

        match generate::write_package_json(&self.root, &arch, &project_name) {
            Ok(true) => steps.record("package.json created"),
            Ok(false) => {}
            Err(e) => warn!("package.json generation failed: {e}"),
        }

        match generate::write_requirements(&self.root, &arch) {
            Ok(true) => steps.record("requirements.txt created"),
            Ok(false) => {}
            Err(e) => warn!("requirements.txt generation failed: {e}"),
        }

        match generate::write_env_example(&self.root, &arch_key) {
            Ok(_) => steps.record(".env.example created"),
            Err(e) => warn!(".env.example generation failed: {e}"),
        }

        match generate::write_readme(&self.root, &arch, &project_name, &selected_rules) {
            Ok(_) => steps.record("README.md generated"),
            Err(e) => warn!("README generation failed: {e}"),
        }

        if let Err(e) = generate::create_basic_structure(&self.root, &arch_key, &project_name) {
            warn!("Starter file generation failed: {e}");
        }

        let archiver = Archiver::new(
            &self.root,
            self.root.join(&self.config.paths.archive_dir),
            self.rules_dir(),
        );
        if let Err(e) = archiver.archive_template_files(&arch_key, &project_name) {
            warn!("Archiving failed: {e}");
        }

        if let Err(e) = project_config::write_project_config(&self.root, &arch_key, &arch, &project_name, &selected_rules)
        {
            warn!("Project config emission failed: {e}");
        }

        let taskmaster = Taskmaster::new(&self.root, self.config.taskmaster.clone());
        let taskmaster_ok = match taskmaster.setup(&project_name).await {
            Ok(ok) => {
                if ok {
                    steps.record("Taskmaster AI configured");
                }
                ok
            }
            Err(e) => {
                warn!("Taskmaster setup failed: {e}");
                false
            }
        };

        self.print_summary(&project_name, &arch, &arch_key, &steps, taskmaster_ok);
        info!("Setup completed for {project_name} ({arch_key})");

        Ok(())
    }

    fn print_summary(&self, project_name: &str, arch: &Architecture, arch_key: &str, steps: &StepSummary, taskmaster_ok: bool) {
        println!("\n🎉 {project_name} is ready for rapid MVP development!");
        println!("\nSetup completed:");
        for step in &steps.completed {
            println!("  {} {step}", "✅".green());
        }
        println!("  {} Archived unused template files", "✅".green());

        println!("\nNext steps:");
        if arch.has_packages() {
            println!("1. npm install (install Node.js dependencies)");
        }
        if arch.has_requirements() {
            println!("1. pip install -r requirements.txt (install Python dependencies)");
        }
        if arch.scripts.contains_key("dev") {
            println!("2. npm run dev (start development)");
        } else {
            println!("2. Start development with your preferred method");
        }
        println!("3. Check active_prompts/ for development workflows");
        println!("4. Review .cursorrules for coding standards");

        if taskmaster_ok {
            println!("\n🤖 Taskmaster AI Workflow:");
            println!("5. Fill out .taskmaster/docs/project-prd-template.md with your PRD");
            println!("6. Run: task-master parse-prd .taskmaster/docs/project-prd.txt");
        }

        // Architecture-specific tips
        match arch_key {
            "react-native" => println!("\n💡 Expo CLI: npm install -g @expo/cli"),
            "django-api" => println!(
                "\n💡 Initialize Django: django-admin startproject {} .",
                generate::slugify(project_name).replace('-', "_")
            ),
            _ => {}
        }
    }

    /// Print the catalog as a numbered list (non-interactive)
    pub fn list_architectures(root: &Path) {
        let catalog = catalog::load(root);
        print_catalog(&catalog);
    }
}

fn print_catalog(catalog: &Catalog) {
    println!("Available architectures:");
    for (i, (key, arch)) in catalog.iter().enumerate() {
        println!("{:2}. {} ({})", i + 1, arch.name, key);
    }
}

/// Names of setup steps that completed
#[derive(Debug, Default)]
struct StepSummary {
    completed: Vec<String>,
}

impl StepSummary {
    fn record(&mut self, step: &str) {
        self.completed.push(step.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_prepare_environment_writes_mappings() {
        let dir = tempdir().unwrap();
        let mut config = Config::default();
        config.awesome.skip_clone = true;

        let setup = Setup::new(dir.path(), config);
        setup.prepare_environment().await.unwrap();

        assert!(dir.path().join("rule-mappings.json").exists());
        assert!(dir.path().join(".cursor").is_dir());
        assert!(dir.path().join("dev_tools").is_dir());
    }

    #[test]
    fn test_step_summary_records_in_order() {
        let mut steps = StepSummary::default();
        steps.record("first");
        steps.record("second");
        assert_eq!(steps.completed, vec!["first", "second"]);
    }
}
