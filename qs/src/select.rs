//! Interactive selection: architecture menu, custom rule picks, project name

use colored::Colorize;
use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::catalog::{Architecture, Catalog};
use crate::rules;

/// Default project name when the user just presses Enter
pub const DEFAULT_PROJECT_NAME: &str = "my-mvp";

/// Parse a 1-based menu choice; None for junk or out-of-range input
pub fn parse_choice(input: &str, max: usize) -> Option<usize> {
    let choice: usize = input.trim().parse().ok()?;
    (1..=max).contains(&choice).then_some(choice)
}

/// Parse a comma-separated list of 1-based rule indices
///
/// Out-of-range indices are dropped. Any unparseable token invalidates the
/// whole selection (returns None), matching "use no rules" behavior.
pub fn parse_rule_selection(input: &str, available: &[String]) -> Option<Vec<String>> {
    let mut selected = Vec::new();
    for token in input.split(',') {
        let index: usize = token.trim().parse().ok()?;
        if index >= 1 && index <= available.len() {
            selected.push(available[index - 1].clone());
        }
    }
    Some(selected)
}

/// Resolve the raw prompt line into a rule selection
///
/// An absent line (user abort) stays None so the caller can cancel; junk
/// input falls back to an empty selection instead.
pub fn resolve_rule_selection(line: Option<String>, available: &[String]) -> Option<Vec<String>> {
    let line = line?;
    match parse_rule_selection(&line, available) {
        Some(selected) => Some(selected),
        None => {
            println!("Invalid selection. Using no rules.");
            Some(Vec::new())
        }
    }
}

/// Interactive prompt session backed by rustyline
pub struct Selector {
    rl: DefaultEditor,
}

impl Selector {
    pub fn new() -> Result<Self> {
        let rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;
        Ok(Self { rl })
    }

    /// Read one line; None means the user aborted (Ctrl-C / Ctrl-D)
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.rl.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(eyre::eyre!("Readline error: {}", e)),
        }
    }

    /// Display the architecture menu and read a validated choice
    ///
    /// Returns None when the user aborts.
    pub fn select_architecture<'a>(&mut self, catalog: &'a Catalog) -> Result<Option<(String, &'a Architecture)>> {
        println!("\n🚀 Welcome to the MVP Quick-Start Setup!\n");
        println!("Available architectures:");

        for (i, (_, arch)) in catalog.iter().enumerate() {
            println!("{}. {}", i + 1, arch.name);
        }

        let max = catalog.len();
        loop {
            let Some(line) = self.read_line(&format!("\nSelect architecture (1-{max}): "))? else {
                return Ok(None);
            };

            match parse_choice(&line, max) {
                Some(choice) => {
                    let (key, arch) = catalog.iter().nth(choice - 1).expect("choice validated against len");
                    return Ok(Some((key.to_string(), arch)));
                }
                None => println!("Please enter a number between 1 and {max}"),
            }
        }
    }

    /// Interactive rule selection for the custom architecture
    ///
    /// Returns None when the user aborts.
    pub fn select_custom_rules(&mut self, available: &[String]) -> Result<Option<Vec<String>>> {
        println!("\n📋 Select rules for your custom architecture:");

        if available.is_empty() {
            println!("{}", "No rule files available".yellow());
            return Ok(Some(Vec::new()));
        }

        println!("\nAvailable rules:");
        for (i, rule) in available.iter().enumerate() {
            println!("{:2}. {}", i + 1, rules::rule_title(rule));
        }

        let line = self.read_line("\nEnter rule numbers (comma-separated, e.g., 1,3,5): ")?;
        Ok(resolve_rule_selection(line, available))
    }

    /// Prompt for the project name, defaulting when empty
    ///
    /// Returns None when the user aborts.
    pub fn prompt_project_name(&mut self) -> Result<Option<String>> {
        let Some(line) = self.read_line(&format!(
            "\nEnter project name (or press Enter for \"{DEFAULT_PROJECT_NAME}\"): "
        ))?
        else {
            return Ok(None);
        };

        let name = line.trim();
        if name.is_empty() {
            Ok(Some(DEFAULT_PROJECT_NAME.to_string()))
        } else {
            Ok(Some(name.to_string()))
        }
    }
}
