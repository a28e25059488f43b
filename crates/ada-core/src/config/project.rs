//! The validated configuration for a single generation run

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::features::{FeatureSelection, PresetName};
use crate::theme::ThemeColor;
use serde::Serialize;

/// Everything the generator needs to know about the project being created
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectConfig {
    pub name: String,
    pub preset: PresetName,
    pub features: FeatureSelection,
    pub theme: ThemeColor,
}

impl ProjectConfig {
    /// Build a config from a preset's fixed selection
    pub fn from_preset(
        name: impl Into<String>,
        preset: PresetName,
        theme: ThemeColor,
    ) -> ScaffoldResult<Self> {
        Self::new(name, preset, preset.features(), theme)
    }

    pub fn new(
        name: impl Into<String>,
        preset: PresetName,
        features: FeatureSelection,
        theme: ThemeColor,
    ) -> ScaffoldResult<Self> {
        let name = name.into();
        if let Err(reason) = validate_project_name(&name) {
            return Err(ScaffoldError::InvalidProjectName {
                name,
                reason: reason.to_string(),
            });
        }

        Ok(Self {
            name,
            preset,
            features,
            theme,
        })
    }
}

/// Check that a project name is a lowercase-with-dashes slug
pub fn validate_project_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("Project name is required");
    }

    let is_slug = name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !is_slug {
        return Err("Project name must be lowercase with dashes only");
    }

    Ok(())
}

/// Human-readable title for a project slug (`my-app` -> `My App`)
pub fn app_title(name: &str) -> String {
    name.split('-')
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
