//! Template tree access, copying, slot substitution, and validation
//!
//! This module provides:
//! - Template root resolution (flag, environment variable, compiled-in default)
//! - Recursive base/feature copying into the target project
//! - Slot substitution for the root layout and the theme stylesheet
//! - Cross-checking of the feature registry against the template tree

pub mod copier;
pub mod slots;
pub mod validator;

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::features::FeatureDefinition;
use crate::product::ProductConfig;
use std::path::{Path, PathBuf};

pub use copier::{copy_base_template, copy_feature_templates, copy_tree, is_slot_template};
pub use slots::{apply_theme, RootLayoutSlots};
pub use validator::{format_validation_result, validate_feature_templates, ValidationResult};

/// Directory holding `base/` and `features/`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRoot {
    path: PathBuf,
}

impl TemplateRoot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Pick the template directory: explicit override, then the product's environment
    /// variable, then the product default
    pub fn resolve<C: ProductConfig>(config: &C, override_dir: Option<&Path>) -> Self {
        if let Some(dir) = override_dir {
            return Self::new(dir);
        }

        match std::env::var_os(config.templates_dir_env()) {
            Some(dir) if !dir.is_empty() => Self::new(dir),
            _ => Self::new(config.default_templates_dir()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn base_dir(&self) -> PathBuf {
        self.path.join("base")
    }

    pub fn features_dir(&self) -> PathBuf {
        self.path.join("features")
    }

    /// Absolute template directory of a feature, if it has one
    pub fn feature_dir(&self, feature: &FeatureDefinition) -> Option<PathBuf> {
        feature.template_dir.map(|dir| self.path.join(dir))
    }

    /// Fail early when the tree has no base template
    pub fn ensure_exists(&self) -> ScaffoldResult<()> {
        let base = self.base_dir();
        if base.is_dir() {
            Ok(())
        } else {
            Err(ScaffoldError::TemplateNotFound(base))
        }
    }
}
