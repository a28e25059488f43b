//! Product configuration trait for CLI binaries
//!
//! The binary implements this trait to tell the library where its templates live,
//! which package manager the generated project uses, and what to print when done.

use std::path::PathBuf;

/// Configuration trait for the scaffolding product
///
/// Defines:
/// - Product identity (name, display name)
/// - Template tree location and its override variable
/// - Tooling of the generated project (package manager, git branch)
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, env vars)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Environment variable name for overriding the template directory
    fn templates_dir_env(&self) -> &'static str;

    /// Template directory used when neither flag nor env var is set
    fn default_templates_dir(&self) -> PathBuf;

    /// Package manager command used by the generated project's scripts
    fn package_manager(&self) -> &'static str {
        "bun"
    }

    /// Branch name the fresh repository is switched to
    fn default_branch(&self) -> &'static str {
        "main"
    }

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, project_name: &str) -> Vec<String> {
        let pm = self.package_manager();
        vec![
            format!("cd {}", project_name),
            format!("{} install", pm),
            format!("{} dev", pm),
        ]
    }
}
