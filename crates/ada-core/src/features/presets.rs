//! Named feature presets

use super::selection::{FeatureSelection, FormLibrary, StateOption, TestingOption, UiBundle};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresetName {
    Minimal,
    Standard,
    Enterprise,
    Custom,
}

impl PresetName {
    pub const ALL: [PresetName; 4] = [
        PresetName::Minimal,
        PresetName::Standard,
        PresetName::Enterprise,
        PresetName::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PresetName::Minimal => "minimal",
            PresetName::Standard => "standard",
            PresetName::Enterprise => "enterprise",
            PresetName::Custom => "custom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PresetName::Minimal => "Minimal",
            PresetName::Standard => "Standard",
            PresetName::Enterprise => "Enterprise",
            PresetName::Custom => "Custom",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PresetName::Minimal => {
                "Core only - React, TanStack Start, TypeScript, Tailwind, Biome"
            }
            PresetName::Standard => {
                "Recommended - Includes data fetching, forms, API client, unit tests"
            }
            PresetName::Enterprise => "Full-featured - Includes auth, state management, E2E tests",
            PresetName::Custom => "Choose your own features",
        }
    }

    /// The fixed selection for this preset.
    /// For `Custom` this is the starting point the prompt flow edits.
    pub fn features(&self) -> FeatureSelection {
        match self {
            PresetName::Minimal => FeatureSelection::none(),
            PresetName::Standard => FeatureSelection {
                tanstack_query: true,
                forms: FormLibrary::TanstackForm,
                api_client: true,
                env_validation: true,
                testing: TestingOption::Unit,
                ..FeatureSelection::none()
            },
            PresetName::Enterprise => FeatureSelection {
                tanstack_query: true,
                forms: FormLibrary::TanstackForm,
                api_client: true,
                env_validation: true,
                testing: TestingOption::UnitE2e,
                auth: true,
                state: StateOption::Zustand,
                error_boundaries: true,
                ui_bundles: vec![UiBundle::Full],
                github_actions: true,
            },
            PresetName::Custom => FeatureSelection {
                tanstack_query: true,
                forms: FormLibrary::TanstackForm,
                api_client: true,
                env_validation: true,
                testing: TestingOption::Unit,
                ..FeatureSelection::none()
            },
        }
    }
}

impl FromStr for PresetName {
    type Err = super::selection::UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        PresetName::ALL
            .into_iter()
            .find(|preset| preset.as_str() == wanted)
            .ok_or_else(|| super::selection::UnknownChoice {
                kind: "preset",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for PresetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::resolver::resolve_features;

    #[test]
    fn test_minimal_resolves_to_nothing() {
        assert!(resolve_features(&PresetName::Minimal.features()).is_empty());
    }

    #[test]
    fn test_enterprise_enables_every_toggle() {
        let features = PresetName::Enterprise.features();
        assert!(features.tanstack_query);
        assert!(features.api_client);
        assert!(features.env_validation);
        assert!(features.auth);
        assert!(features.error_boundaries);
        assert!(features.github_actions);
        assert_eq!(features.testing, TestingOption::UnitE2e);
        assert_eq!(features.state, StateOption::Zustand);
        assert_eq!(features.ui_bundles, vec![UiBundle::Full]);
    }

    #[test]
    fn test_standard_is_a_subset_of_enterprise() {
        let standard = resolve_features(&PresetName::Standard.features());
        let enterprise = resolve_features(&PresetName::Enterprise.features());
        assert!(standard.iter().all(|id| enterprise.contains(id)));
        assert!(standard.len() < enterprise.len());
    }

    #[test]
    fn test_parse_preset() {
        assert_eq!("Enterprise".parse::<PresetName>(), Ok(PresetName::Enterprise));
        assert!("huge".parse::<PresetName>().is_err());
    }
}
