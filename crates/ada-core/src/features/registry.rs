//! Static feature registry
//!
//! Each feature is a bag of metadata: the packages it adds to `package.json` and the
//! template directory (relative to the template root) whose contents are overlaid onto
//! the generated project.

use super::dependencies::MergedDependencies;
use tracing::debug;

pub const TANSTACK_QUERY: &str = "tanstack-query";
pub const TANSTACK_FORM: &str = "tanstack-form";
pub const FORMS_RHF: &str = "forms-rhf";
pub const API_CLIENT: &str = "api-client";
pub const ENV_VALIDATION: &str = "env-validation";
pub const TESTS_UNIT: &str = "tests-unit";
pub const TESTS_E2E: &str = "tests-e2e";
pub const AUTH: &str = "auth";
pub const STATE_ZUSTAND: &str = "state-zustand";
pub const ERROR_BOUNDARIES: &str = "error-boundaries";
pub const UI_FORMS: &str = "ui-forms";
pub const UI_DATA_DISPLAY: &str = "ui-data-display";
pub const UI_OVERLAYS: &str = "ui-overlays";
pub const GITHUB_ACTIONS: &str = "github-actions";

/// Metadata for a single optional feature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Template directory relative to the template root; `None` for generated-only features
    pub template_dir: Option<&'static str>,
    pub dependencies: &'static [(&'static str, &'static str)],
    pub dev_dependencies: &'static [(&'static str, &'static str)],
    /// Files expected under `template_dir`
    pub files: &'static [&'static str],
}

pub static FEATURES: &[FeatureDefinition] = &[
    FeatureDefinition {
        id: TANSTACK_QUERY,
        name: "TanStack Query",
        description: "Powerful data fetching and caching",
        template_dir: Some("features/tanstack-query"),
        dependencies: &[("@tanstack/react-query", "^5.62.7")],
        dev_dependencies: &[],
        files: &["src/lib/query-client.ts"],
    },
    FeatureDefinition {
        id: TANSTACK_FORM,
        name: "TanStack Form",
        description: "Type-safe form management",
        template_dir: Some("features/tanstack-form"),
        dependencies: &[
            ("@tanstack/react-form", "^1.27.1"),
            ("@tanstack/zod-form-adapter", "^0.42.1"),
        ],
        dev_dependencies: &[],
        files: &[
            "src/forms/index.ts",
            "src/forms/types.ts",
            "src/forms/adapters/tanstack-adapter.ts",
            "src/forms/components/form.tsx",
            "src/forms/components/field.tsx",
            "src/forms/hooks/use-app-form.ts",
        ],
    },
    FeatureDefinition {
        id: FORMS_RHF,
        name: "React Hook Form",
        description: "Performant form management",
        template_dir: Some("features/forms-rhf"),
        dependencies: &[
            ("react-hook-form", "^7.54.2"),
            ("@hookform/resolvers", "^3.9.1"),
        ],
        dev_dependencies: &[],
        files: &[
            "src/forms/index.ts",
            "src/forms/types.ts",
            "src/forms/adapters/rhf-adapter.ts",
            "src/forms/components/form.tsx",
            "src/forms/components/field.tsx",
            "src/forms/hooks/use-app-form.ts",
        ],
    },
    FeatureDefinition {
        id: API_CLIENT,
        name: "API Client",
        description: "Type-safe HTTP client",
        template_dir: Some("features/api-client"),
        dependencies: &[],
        dev_dependencies: &[],
        files: &["src/lib/api/client.ts", "src/lib/api/types.ts"],
    },
    FeatureDefinition {
        id: ENV_VALIDATION,
        name: "Environment Validation",
        description: "Zod-based env validation",
        template_dir: Some("features/env-validation"),
        dependencies: &[],
        dev_dependencies: &[],
        files: &["src/lib/env.ts"],
    },
    FeatureDefinition {
        id: TESTS_UNIT,
        name: "Unit Tests",
        description: "Bun test runner with Testing Library",
        template_dir: Some("features/tests-unit"),
        dependencies: &[],
        dev_dependencies: &[
            ("@testing-library/react", "^16.1.0"),
            ("@testing-library/dom", "^10.4.0"),
            ("@happy-dom/global-registrator", "^15.11.7"),
        ],
        files: &["tests/setup.ts", "tests/example.test.tsx", "bunfig.toml"],
    },
    FeatureDefinition {
        id: TESTS_E2E,
        name: "E2E Tests",
        description: "Playwright for end-to-end testing",
        template_dir: Some("features/tests-e2e"),
        dependencies: &[],
        dev_dependencies: &[("@playwright/test", "^1.49.1")],
        files: &["tests/e2e/example.spec.ts", "playwright.config.ts"],
    },
    FeatureDefinition {
        id: AUTH,
        name: "Auth Skeleton",
        description: "Authentication skeleton for Better Auth",
        template_dir: Some("features/auth"),
        dependencies: &[],
        dev_dependencies: &[],
        files: &[
            "src/auth/index.ts",
            "src/auth/types.ts",
            "src/auth/config.ts",
            "src/auth/provider.tsx",
            "src/auth/hooks/use-auth.ts",
            "src/auth/guards/protected-route.tsx",
            "src/auth/guards/ssr-guard.ts",
        ],
    },
    FeatureDefinition {
        id: STATE_ZUSTAND,
        name: "Zustand",
        description: "Lightweight state management",
        template_dir: Some("features/state-zustand"),
        dependencies: &[("zustand", "^5.0.2")],
        dev_dependencies: &[],
        files: &["src/lib/store.ts"],
    },
    FeatureDefinition {
        id: ERROR_BOUNDARIES,
        name: "Error Boundaries",
        description: "Error handling components",
        template_dir: Some("features/error-boundaries"),
        dependencies: &[],
        dev_dependencies: &[],
        files: &[
            "src/components/error-boundary.tsx",
            "src/components/route-error.tsx",
        ],
    },
    FeatureDefinition {
        id: UI_FORMS,
        name: "UI Forms Bundle",
        description: "Select, Checkbox, Radio, Switch components",
        template_dir: Some("features/ui-bundles/forms"),
        dependencies: &[
            ("@radix-ui/react-select", "^2.1.4"),
            ("@radix-ui/react-checkbox", "^1.1.3"),
            ("@radix-ui/react-radio-group", "^1.2.2"),
            ("@radix-ui/react-switch", "^1.1.2"),
        ],
        dev_dependencies: &[],
        files: &[
            "src/components/ui/select.tsx",
            "src/components/ui/checkbox.tsx",
            "src/components/ui/radio-group.tsx",
            "src/components/ui/switch.tsx",
        ],
    },
    FeatureDefinition {
        id: UI_DATA_DISPLAY,
        name: "UI Data Display Bundle",
        description: "Table, Badge, Avatar components",
        template_dir: Some("features/ui-bundles/data-display"),
        dependencies: &[("@radix-ui/react-avatar", "^1.1.2")],
        dev_dependencies: &[],
        files: &[
            "src/components/ui/table.tsx",
            "src/components/ui/badge.tsx",
            "src/components/ui/avatar.tsx",
        ],
    },
    FeatureDefinition {
        id: UI_OVERLAYS,
        name: "UI Overlays Bundle",
        description: "Dialog, Sheet, Dropdown components",
        template_dir: Some("features/ui-bundles/overlays"),
        dependencies: &[
            ("@radix-ui/react-dialog", "^1.1.4"),
            ("@radix-ui/react-dropdown-menu", "^2.1.4"),
        ],
        dev_dependencies: &[],
        files: &[
            "src/components/ui/dialog.tsx",
            "src/components/ui/sheet.tsx",
            "src/components/ui/dropdown-menu.tsx",
        ],
    },
    // The workflow file is generated, so there is nothing to copy
    FeatureDefinition {
        id: GITHUB_ACTIONS,
        name: "GitHub Actions CI",
        description: "CI workflow for lint, typecheck, and tests (dynamically generated)",
        template_dir: None,
        dependencies: &[],
        dev_dependencies: &[],
        files: &[".github/workflows/ci.yml"],
    },
];

/// Lookup view over a table of feature definitions
#[derive(Debug, Clone, Copy)]
pub struct FeatureRegistry<'a> {
    features: &'a [FeatureDefinition],
}

impl FeatureRegistry<'static> {
    /// The registry shipped with the CLI
    pub fn builtin() -> Self {
        Self { features: FEATURES }
    }
}

impl<'a> FeatureRegistry<'a> {
    pub fn new(features: &'a [FeatureDefinition]) -> Self {
        Self { features }
    }

    pub fn get(&self, id: &str) -> Option<&'a FeatureDefinition> {
        self.features.iter().find(|f| f.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a FeatureDefinition> {
        self.features.iter()
    }

    /// Fold the dependency maps of `ids` into sorted maps.
    /// Later ids overwrite versions declared by earlier ones; unknown ids are skipped.
    pub fn merge_dependencies<S: AsRef<str>>(&self, ids: &[S]) -> MergedDependencies {
        let mut merged = MergedDependencies::default();

        for id in ids {
            let Some(feature) = self.get(id.as_ref()) else {
                debug!(feature = id.as_ref(), "skipping unknown feature");
                continue;
            };
            merged.extend(feature.dependencies, feature.dev_dependencies);
        }

        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALPHA: FeatureDefinition = FeatureDefinition {
        id: "alpha",
        name: "Alpha",
        description: "",
        template_dir: None,
        dependencies: &[("shared", "^1.0.0"), ("alpha-only", "^0.1.0")],
        dev_dependencies: &[("alpha-dev", "^2.0.0")],
        files: &[],
    };

    const BETA: FeatureDefinition = FeatureDefinition {
        id: "beta",
        name: "Beta",
        description: "",
        template_dir: None,
        dependencies: &[("shared", "^2.0.0")],
        dev_dependencies: &[],
        files: &[],
    };

    const GAMMA: FeatureDefinition = FeatureDefinition {
        id: "gamma",
        name: "Gamma",
        description: "",
        template_dir: None,
        dependencies: &[("gamma-only", "^3.0.0")],
        dev_dependencies: &[("gamma-dev", "^1.0.0")],
        files: &[],
    };

    #[test]
    fn test_builtin_ids_are_unique() {
        let ids: HashSet<_> = FEATURES.iter().map(|f| f.id).collect();
        assert_eq!(ids.len(), FEATURES.len());
    }

    #[test]
    fn test_get_feature() {
        let registry = FeatureRegistry::builtin();
        let feature = registry.get(STATE_ZUSTAND).unwrap();
        assert_eq!(feature.name, "Zustand");
        assert!(registry.get("does-not-exist").is_none());
    }

    #[test]
    fn test_merge_later_feature_wins() {
        let table = [ALPHA, BETA];
        let registry = FeatureRegistry::new(&table);

        let merged = registry.merge_dependencies(&["alpha", "beta"]);
        assert_eq!(merged.dependencies["shared"], "^2.0.0");

        let merged = registry.merge_dependencies(&["beta", "alpha"]);
        assert_eq!(merged.dependencies["shared"], "^1.0.0");
    }

    #[test]
    fn test_merge_disjoint_is_order_independent() {
        let table = [ALPHA, GAMMA];
        let registry = FeatureRegistry::new(&table);

        let forward = registry.merge_dependencies(&["alpha", "gamma"]);
        let backward = registry.merge_dependencies(&["gamma", "alpha"]);
        assert_eq!(forward, backward);
        assert_eq!(
            forward.dev_dependencies.keys().collect::<Vec<_>>(),
            vec!["alpha-dev", "gamma-dev"]
        );
    }

    #[test]
    fn test_merge_skips_unknown_ids() {
        let table = [GAMMA];
        let registry = FeatureRegistry::new(&table);

        let merged = registry.merge_dependencies(&["missing", "gamma"]);
        assert_eq!(merged.dependencies.len(), 1);
        assert!(merged.dependencies.contains_key("gamma-only"));
    }

    #[test]
    fn test_merge_keys_are_sorted() {
        let registry = FeatureRegistry::builtin();
        let merged = registry.merge_dependencies(&[UI_OVERLAYS, UI_FORMS, STATE_ZUSTAND]);

        let keys: Vec<_> = merged.dependencies.keys().cloned().collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        assert_eq!(keys.last().map(String::as_str), Some("zustand"));
    }
}
