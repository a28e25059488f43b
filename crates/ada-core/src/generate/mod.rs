//! Project generation
//!
//! This module provides:
//! - The generation pipeline (copy, compose, write generated artifacts)
//! - Generators for `package.json`, `README.md`, `.env.example` and the CI workflow
//! - Git repository initialization

pub mod env_file;
pub mod git;
pub mod package;
pub mod readme;
pub mod workflow;

use crate::config::ProjectConfig;
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::features::{resolve_features, FeatureRegistry};
use crate::templates::slots::{ROOT_LAYOUT_OUTPUT, ROOT_LAYOUT_TEMPLATE, STYLESHEET};
use crate::templates::{
    apply_theme, copy_base_template, copy_feature_templates, RootLayoutSlots, TemplateRoot,
};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

pub use env_file::render_env_example;
pub use git::init_git_repository;
pub use package::{build_package_json, PackageJson};
pub use readme::render_readme;
pub use workflow::{Workflow, WORKFLOW_PATH};

/// Knobs that do not belong to the project configuration itself
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub init_git: bool,
    pub default_branch: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            init_git: true,
            default_branch: "main".to_string(),
        }
    }
}

/// Summary of a completed generation run
#[derive(Debug, Clone)]
pub struct GeneratedProject {
    pub path: PathBuf,
    pub features: Vec<&'static str>,
    /// Distinct files in the project, not counting git metadata
    pub files_written: usize,
    pub git_initialized: bool,
}

/// Write `content` to `root/relative`, creating parent directories.
/// Returns `relative` for the written-files ledger.
async fn write_file(root: &Path, relative: &str, content: &str) -> ScaffoldResult<PathBuf> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| ScaffoldError::io(parent, e))?;
    }
    fs::write(&path, content)
        .await
        .map_err(|e| ScaffoldError::io(&path, e))?;
    debug!(file = relative, "wrote generated file");
    Ok(PathBuf::from(relative))
}

async fn read_file(path: &Path) -> ScaffoldResult<String> {
    fs::read_to_string(path)
        .await
        .map_err(|e| ScaffoldError::io(path, e))
}

/// Generate a project into `target_dir`.
///
/// Refuses to touch an existing directory. Steps run in order and the first
/// failure aborts the rest; files already written stay on disk.
/// `progress` receives a short message before each step.
pub async fn generate_project<F>(
    config: &ProjectConfig,
    templates: &TemplateRoot,
    target_dir: &Path,
    options: &GenerateOptions,
    mut progress: F,
) -> ScaffoldResult<GeneratedProject>
where
    F: FnMut(&str),
{
    let exists = fs::try_exists(target_dir)
        .await
        .map_err(|e| ScaffoldError::io(target_dir, e))?;
    if exists {
        return Err(ScaffoldError::DirectoryExists(target_dir.to_path_buf()));
    }
    templates.ensure_exists()?;

    let registry = FeatureRegistry::builtin();
    let features = resolve_features(&config.features);
    info!(name = %config.name, features = ?features, "generating project");

    progress("Creating project structure...");
    fs::create_dir_all(target_dir)
        .await
        .map_err(|e| ScaffoldError::io(target_dir, e))?;
    // Overlays and rewrites hit paths already present; count each path once
    let mut written: BTreeSet<PathBuf> = copy_base_template(templates, target_dir)
        .await?
        .into_iter()
        .collect();

    progress("Adding selected features...");
    written.extend(copy_feature_templates(templates, target_dir, &registry, &features).await?);

    progress("Generating package.json...");
    let package = build_package_json(config, &registry);
    written.insert(write_file(target_dir, "package.json", &package.to_json()?).await?);

    progress("Generating README...");
    written.insert(write_file(target_dir, "README.md", &render_readme(config)).await?);

    let layout = read_file(&templates.base_dir().join(ROOT_LAYOUT_TEMPLATE)).await?;
    let layout = RootLayoutSlots::from_features(&config.features).apply(&layout);
    written.insert(write_file(target_dir, ROOT_LAYOUT_OUTPUT, &layout).await?);

    progress("Applying theme...");
    let stylesheet = read_file(&target_dir.join(STYLESHEET)).await?;
    let themed = apply_theme(&stylesheet, config.theme);
    written.insert(write_file(target_dir, STYLESHEET, &themed).await?);

    progress("Generating .env.example...");
    written.insert(write_file(target_dir, ".env.example", &render_env_example(config)).await?);

    if config.features.github_actions {
        progress("Generating CI workflow...");
        let workflow = Workflow::for_features(&config.features, &options.default_branch);
        written.insert(write_file(target_dir, WORKFLOW_PATH, &workflow.to_yaml()?).await?);
    }

    let mut git_initialized = false;
    if options.init_git {
        progress("Initializing git repository...");
        git_initialized = init_git_repository(target_dir, &options.default_branch).await?;
    }

    let files_written = written.len();
    info!(path = %target_dir.display(), files_written, "project generated");

    Ok(GeneratedProject {
        path: target_dir.to_path_buf(),
        features,
        files_written,
        git_initialized,
    })
}
