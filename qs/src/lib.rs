//! Quickstart - Interactive MVP Project Scaffolder
//!
//! Quickstart turns a template checkout into a ready-to-develop project:
//! pick an architecture preset, and it consolidates editor rules, copies
//! workflow prompts, generates manifests and starter files, archives the
//! template's own files, and wires up task management.
//!
//! # Core Concepts
//!
//! - **Preset-driven**: Everything generated is declared by the chosen preset
//! - **Best-effort steps**: A failed step is logged; later steps still run
//! - **Clean exit**: Template files end up in a timestamped archive, not the
//!   generated project
//!
//! # Modules
//!
//! - [`catalog`] - Architecture preset definitions and loading
//! - [`select`] - Interactive selection prompts
//! - [`rules`] - Rule consolidation and awesome-rules fetching
//! - [`generate`] - Per-file project generators
//! - [`archive`] - Template file archiving
//! - [`setup`] - The orchestrated setup flow

pub mod archive;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod generate;
pub mod project_config;
pub mod rules;
pub mod select;
pub mod setup;
pub mod taskmaster;
pub mod templates;

// Re-export commonly used types
pub use archive::{ArchiveInfo, Archiver};
pub use catalog::{Architecture, Catalog, builtin_catalog};
pub use config::{AwesomeConfig, Config, PathsConfig, TaskmasterConfig};
pub use project_config::{CategoryInfo, ProjectConfig, write_project_config};
pub use rules::{AwesomeRules, RulesError, available_rules, consolidate, rule_title};
pub use select::Selector;
pub use setup::Setup;
pub use taskmaster::Taskmaster;
