//! Project file generators
//!
//! Each generator is independent and best-effort: it writes one output file
//! into the project root (or skips when the preset does not call for it) and
//! reports whether anything was written.

mod env_example;
mod package_json;
mod prompts;
mod readme;
mod requirements;
mod starters;

pub use env_example::write_env_example;
pub use package_json::write_package_json;
pub use prompts::copy_prompts;
pub use readme::write_readme;
pub use requirements::write_requirements;
pub use starters::create_basic_structure;

/// Lowercase a project name and replace spaces with dashes
pub fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}
