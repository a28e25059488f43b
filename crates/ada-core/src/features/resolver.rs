//! Feature selection -> concrete feature ids

use super::registry::{
    API_CLIENT, AUTH, ENV_VALIDATION, ERROR_BOUNDARIES, FORMS_RHF, GITHUB_ACTIONS,
    STATE_ZUSTAND, TANSTACK_FORM, TANSTACK_QUERY, TESTS_E2E, TESTS_UNIT, UI_DATA_DISPLAY,
    UI_FORMS, UI_OVERLAYS,
};
use super::selection::{FeatureSelection, FormLibrary, StateOption, UiBundle};

/// Resolve a selection into the feature ids to materialize, in insertion order and
/// without duplicates.
pub fn resolve_features(selection: &FeatureSelection) -> Vec<&'static str> {
    let mut features: Vec<&'static str> = Vec::new();

    if selection.tanstack_query {
        features.push(TANSTACK_QUERY);
    }

    match selection.forms {
        FormLibrary::TanstackForm => features.push(TANSTACK_FORM),
        FormLibrary::ReactHookForm => features.push(FORMS_RHF),
        FormLibrary::None => {}
    }

    if selection.api_client {
        features.push(API_CLIENT);
    }

    if selection.env_validation {
        features.push(ENV_VALIDATION);
    }

    if selection.testing.has_unit() {
        features.push(TESTS_UNIT);
    }

    if selection.testing.has_e2e() {
        features.push(TESTS_E2E);
    }

    if selection.auth {
        features.push(AUTH);
    }

    if selection.state == StateOption::Zustand {
        features.push(STATE_ZUSTAND);
    }

    if selection.error_boundaries {
        features.push(ERROR_BOUNDARIES);
    }

    if selection.github_actions {
        features.push(GITHUB_ACTIONS);
    }

    for bundle in &selection.ui_bundles {
        features.extend_from_slice(bundle_features(*bundle));
    }

    let mut seen = std::collections::HashSet::new();
    features.retain(|id| seen.insert(*id));
    features
}

/// Concrete feature ids a UI bundle choice expands to
fn bundle_features(bundle: UiBundle) -> &'static [&'static str] {
    match bundle {
        UiBundle::Core => &[],
        UiBundle::Forms => &[UI_FORMS],
        UiBundle::DataDisplay => &[UI_DATA_DISPLAY],
        UiBundle::Overlays => &[UI_OVERLAYS],
        UiBundle::Full => &[UI_FORMS, UI_DATA_DISPLAY, UI_OVERLAYS],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::selection::TestingOption;

    #[test]
    fn test_all_disabled_is_empty() {
        let mut selection = FeatureSelection::none();
        selection.ui_bundles.clear();
        assert!(resolve_features(&selection).is_empty());

        selection.ui_bundles = vec![UiBundle::Core];
        assert!(resolve_features(&selection).is_empty());
    }

    #[test]
    fn test_forms_choice_yields_one_id() {
        let cases = [
            (FormLibrary::TanstackForm, vec![TANSTACK_FORM]),
            (FormLibrary::ReactHookForm, vec![FORMS_RHF]),
            (FormLibrary::None, vec![]),
        ];

        for (forms, expected) in cases {
            let selection = FeatureSelection {
                forms,
                ..FeatureSelection::none()
            };
            assert_eq!(resolve_features(&selection), expected, "forms = {}", forms);
        }
    }

    #[test]
    fn test_testing_choice() {
        let cases = [
            (TestingOption::None, vec![]),
            (TestingOption::Unit, vec![TESTS_UNIT]),
            (TestingOption::UnitE2e, vec![TESTS_UNIT, TESTS_E2E]),
        ];

        for (testing, expected) in cases {
            let selection = FeatureSelection {
                testing,
                ..FeatureSelection::none()
            };
            assert_eq!(resolve_features(&selection), expected, "testing = {}", testing);
        }
    }

    #[test]
    fn test_state_choice() {
        let selection = FeatureSelection {
            state: StateOption::Zustand,
            ..FeatureSelection::none()
        };
        assert_eq!(resolve_features(&selection), vec![STATE_ZUSTAND]);
    }

    #[test]
    fn test_full_bundle_with_subset_is_deduplicated() {
        let selection = FeatureSelection {
            ui_bundles: vec![UiBundle::Forms, UiBundle::Full, UiBundle::Overlays],
            ..FeatureSelection::none()
        };
        assert_eq!(
            resolve_features(&selection),
            vec![UI_FORMS, UI_DATA_DISPLAY, UI_OVERLAYS]
        );
    }

    #[test]
    fn test_output_is_duplicate_free() {
        let selection = FeatureSelection {
            tanstack_query: true,
            auth: true,
            ui_bundles: vec![UiBundle::Full, UiBundle::Full, UiBundle::DataDisplay],
            ..FeatureSelection::none()
        };
        let resolved = resolve_features(&selection);
        let unique: std::collections::HashSet<_> = resolved.iter().collect();
        assert_eq!(unique.len(), resolved.len());
    }

    #[test]
    fn test_every_resolved_id_is_registered() {
        let registry = crate::features::FeatureRegistry::builtin();
        let selection = crate::features::PresetName::Enterprise.features();
        for id in resolve_features(&selection) {
            assert!(registry.get(id).is_some(), "{} missing from registry", id);
        }
    }
}
