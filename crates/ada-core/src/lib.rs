//! Ada Core - project scaffolding library behind `create-ada`
//!
//! This library turns a project configuration (name, preset, feature selection, theme)
//! into a ready-to-run TanStack Start project on disk.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Feature registry, resolution, dependency merging,
//!   template copying, slot substitution, validation, runtime detection
//! - **Layer 2: Generation** - `ProductConfig` trait and `generate_project` pipeline
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use ada_core::{generate_project, GenerateOptions, PresetName, ProjectConfig, TemplateRoot, ThemeColor};
//!
//! let config = ProjectConfig::from_preset("my-app", PresetName::Standard, ThemeColor::Blue)?;
//! let templates = TemplateRoot::new("./templates");
//! generate_project(&config, &templates, Path::new("my-app"), &GenerateOptions::default(), |_| {}).await?;
//! ```

pub mod config;
pub mod error;
pub mod features;
pub mod generate;
pub mod product;
pub mod runtime;
pub mod templates;
pub mod theme;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{validate_project_name, ProjectConfig};
pub use error::{ScaffoldError, ScaffoldResult};
pub use features::{
    resolve_features, FeatureRegistry, FeatureSelection, MergedDependencies, PresetName,
};
pub use generate::{generate_project, GenerateOptions, GeneratedProject};
pub use product::ProductConfig;
pub use runtime::{check_bun, check_git, RuntimeInfo};
pub use templates::{format_validation_result, validate_feature_templates, TemplateRoot, ValidationResult};
pub use theme::ThemeColor;

#[cfg(feature = "tui")]
pub use tui::{run, CreateArgs};
