//! `package.json` generation

use crate::config::ProjectConfig;
use crate::error::ScaffoldResult;
use crate::features::{resolve_features, FeatureRegistry, MergedDependencies, TestingOption};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

const BASE_SCRIPTS: &[(&str, &str)] = &[
    ("dev", "vite dev"),
    ("build", "vite build"),
    ("start", "vite preview"),
    ("lint", "biome lint ."),
    ("format", "biome format --write ."),
    ("check", "biome check --write ."),
    ("typecheck", "tsc --noEmit"),
    ("prepare", "husky"),
    ("pre-commit", "lint-staged"),
];

/// Staged-file checks run by the `pre-commit` hook
const LINT_STAGED: &[(&str, &str)] = &[(
    "*.{ts,tsx,js,jsx,json,css}",
    "biome check --write --no-errors-on-unmatched",
)];

pub const BASE_DEPENDENCIES: &[(&str, &str)] = &[
    ("@radix-ui/react-label", "^2.1.8"),
    ("@radix-ui/react-slot", "^1.2.4"),
    ("@radix-ui/react-toast", "^1.2.4"),
    ("@tailwindcss/vite", "^4.0.6"),
    ("@tanstack/react-router", "^1.132.0"),
    ("@tanstack/react-start", "^1.132.0"),
    ("@tanstack/router-plugin", "^1.132.0"),
    ("class-variance-authority", "^0.7.1"),
    ("clsx", "^2.1.1"),
    ("lucide-react", "^0.544.0"),
    ("nitro", "latest"),
    ("react", "^19.2.0"),
    ("react-dom", "^19.2.0"),
    ("tailwind-merge", "^3.0.2"),
    ("tailwindcss", "^4.0.6"),
    ("vite-tsconfig-paths", "^5.1.4"),
    ("zod", "^4.1.13"),
];

pub const BASE_DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("@biomejs/biome", "^1.9.4"),
    ("@types/react", "^19.2.0"),
    ("@types/react-dom", "^19.2.0"),
    ("@vitejs/plugin-react", "^5.0.4"),
    ("husky", "^9.1.7"),
    ("lint-staged", "^16.1.0"),
    ("typescript", "^5.7.2"),
    ("vite", "^7.1.7"),
];

/// The generated project's manifest. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageJson {
    pub name: String,
    pub version: String,
    #[serde(rename = "type")]
    pub module_type: String,
    pub private: bool,
    pub scripts: Map<String, Value>,
    #[serde(rename = "lint-staged")]
    pub lint_staged: BTreeMap<String, String>,
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
}

impl PackageJson {
    /// Baseline manifest before any feature is applied
    pub fn base(name: &str) -> Self {
        let mut deps = MergedDependencies::default();
        deps.extend(BASE_DEPENDENCIES, BASE_DEV_DEPENDENCIES);

        let mut pkg = Self {
            name: name.to_string(),
            version: "0.1.0".to_string(),
            module_type: "module".to_string(),
            private: true,
            scripts: Map::new(),
            lint_staged: LINT_STAGED
                .iter()
                .map(|(glob, command)| (glob.to_string(), command.to_string()))
                .collect(),
            dependencies: deps.dependencies,
            dev_dependencies: deps.dev_dependencies,
        };
        pkg.add_scripts(BASE_SCRIPTS);
        pkg
    }

    /// Overlay feature dependencies; later entries win on name collisions
    pub fn merge(&mut self, additions: MergedDependencies) {
        self.dependencies.extend(additions.dependencies);
        self.dev_dependencies.extend(additions.dev_dependencies);
    }

    /// Append scripts, keeping insertion order
    pub fn add_scripts(&mut self, scripts: &[(&str, &str)]) {
        for (name, command) in scripts {
            self.scripts
                .insert(name.to_string(), Value::String(command.to_string()));
        }
    }

    pub fn add_testing_scripts(&mut self, testing: TestingOption) {
        if testing.has_unit() {
            self.add_scripts(&[("test", "bun test")]);
        }
        if testing.has_e2e() {
            self.add_scripts(&[
                ("test:e2e", "playwright test"),
                ("test:e2e:ui", "playwright test --ui"),
            ]);
        }
    }

    /// Two-space indented JSON with a trailing newline
    pub fn to_json(&self) -> ScaffoldResult<String> {
        let mut content = serde_json::to_string_pretty(self)?;
        content.push('\n');
        Ok(content)
    }
}

/// Build the manifest for a project configuration
pub fn build_package_json(config: &ProjectConfig, registry: &FeatureRegistry<'_>) -> PackageJson {
    let ids = resolve_features(&config.features);

    let mut pkg = PackageJson::base(&config.name);
    pkg.merge(registry.merge_dependencies(&ids));
    pkg.add_testing_scripts(config.features.testing);
    pkg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::PresetName;
    use crate::theme::ThemeColor;

    fn config(preset: PresetName) -> ProjectConfig {
        ProjectConfig::from_preset("demo-app", preset, ThemeColor::Blue).unwrap()
    }

    #[test]
    fn test_minimal_has_base_dependencies_only() {
        let pkg = build_package_json(&config(PresetName::Minimal), &FeatureRegistry::builtin());
        let base = PackageJson::base("demo-app");
        assert_eq!(pkg, base);
        assert!(!pkg.scripts.contains_key("test"));
    }

    #[test]
    fn test_enterprise_scripts_in_order() {
        let pkg = build_package_json(&config(PresetName::Enterprise), &FeatureRegistry::builtin());
        let names: Vec<&str> = pkg.scripts.keys().map(String::as_str).collect();
        assert_eq!(
            names,
            [
                "dev",
                "build",
                "start",
                "lint",
                "format",
                "check",
                "typecheck",
                "prepare",
                "pre-commit",
                "test",
                "test:e2e",
                "test:e2e:ui"
            ]
        );
        assert!(pkg.dependencies.contains_key("@tanstack/react-query"));
        assert!(pkg.dev_dependencies.contains_key("@playwright/test"));
    }

    #[test]
    fn test_unit_only_adds_single_test_script() {
        let pkg = build_package_json(&config(PresetName::Standard), &FeatureRegistry::builtin());
        assert_eq!(pkg.scripts.get("test"), Some(&Value::String("bun test".into())));
        assert!(!pkg.scripts.contains_key("test:e2e"));
    }

    #[test]
    fn test_json_layout() {
        let json = PackageJson::base("demo-app").to_json().unwrap();
        assert!(json.starts_with("{\n  \"name\": \"demo-app\",\n  \"version\": \"0.1.0\",\n  \"type\": \"module\","));
        assert!(json.ends_with("}\n"));

        let top_level: Vec<usize> = ["scripts", "lint-staged", "dependencies", "devDependencies"]
            .iter()
            .map(|key| json.find(&format!("\n  \"{}\": {{", key)).unwrap())
            .collect();
        assert!(top_level.windows(2).all(|pair| pair[0] < pair[1]), "{}", json);

        assert!(json.contains(
            "\"lint-staged\": {\n    \"*.{ts,tsx,js,jsx,json,css}\": \"biome check --write --no-errors-on-unmatched\"\n  },"
        ));
        assert!(json.contains("\"prepare\": \"husky\""));
        assert!(json.contains("\"pre-commit\": \"lint-staged\""));
        assert!(json.contains("\"@radix-ui/react-toast\": \"^1.2.4\""));
        assert!(json.contains("\"husky\": \"^9.1.7\""));
        assert!(json.contains("\"lint-staged\": \"^16.1.0\""));

        let react = json.find("\"react\":").unwrap();
        let zod = json.find("\"zod\":").unwrap();
        assert!(react < zod);
    }
}
