//! Cross-check of the feature registry against the template tree on disk

use super::TemplateRoot;
use crate::features::FeatureRegistry;
use colored::Colorize;
use std::collections::BTreeSet;
use std::path::Path;
use walkdir::WalkDir;

/// Outcome of a template validation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Children that mark a directory as a project tree rather than a bundle of bundles
const PROJECT_DIRS: &[&str] = &["src", "tests", "public"];

/// Sorted immediate children of `dir` as `(name, is_dir)`; unreadable entries are
/// reported as errors
fn list_children(dir: &Path, result: &mut ValidationResult) -> Vec<(String, bool)> {
    let mut children = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        match entry {
            Ok(entry) => {
                let Some(name) = entry.file_name().to_str() else {
                    continue;
                };
                children.push((name.to_string(), entry.file_type().is_dir()));
            }
            Err(e) => {
                let path = e.path().unwrap_or(dir).display().to_string();
                result.add_error(format!("Cannot read template folder {}: {}", path, e));
            }
        }
    }

    children
}

/// Template directories present under `features/`, as root-relative paths.
/// An undeclared directory holding only subdirectories, none of them a project
/// folder, is a bundle of bundles: its children are the template directories.
fn discover_template_dirs(
    templates: &TemplateRoot,
    declared: &BTreeSet<&str>,
    result: &mut ValidationResult,
) -> BTreeSet<String> {
    let features_dir = templates.features_dir();
    let mut found = BTreeSet::new();

    for (name, is_dir) in list_children(&features_dir, result) {
        if !is_dir {
            continue;
        }
        let relative = format!("features/{}", name);

        if declared.contains(relative.as_str()) {
            found.insert(relative);
            continue;
        }

        let children = list_children(&features_dir.join(&name), result);
        let is_bundle_root = !children.is_empty()
            && children
                .iter()
                .all(|(child, is_dir)| *is_dir && !PROJECT_DIRS.contains(&child.as_str()));

        if is_bundle_root {
            for (child, _) in children {
                found.insert(format!("{}/{}", relative, child));
            }
        } else {
            found.insert(relative);
        }
    }

    found
}

/// Report missing template directories and files as errors, undeclared
/// template directories as warnings
pub fn validate_feature_templates(
    registry: &FeatureRegistry<'_>,
    templates: &TemplateRoot,
) -> ValidationResult {
    let mut result = ValidationResult::new();
    let root = templates.path();

    let features_dir = templates.features_dir();
    if !features_dir.is_dir() {
        result.add_error(format!(
            "Features directory does not exist: {}",
            features_dir.display()
        ));
        return result;
    }

    let declared: BTreeSet<&str> = registry.iter().filter_map(|f| f.template_dir).collect();
    let discovered = discover_template_dirs(templates, &declared, &mut result);

    for feature in registry.iter() {
        let Some(template_dir) = feature.template_dir else {
            continue;
        };

        if !root.join(template_dir).is_dir() {
            result.add_error(format!(
                "Feature \"{}\" declares template \"{}\" but folder is missing",
                feature.id, template_dir
            ));
            continue;
        }

        for file in feature.files {
            if !root.join(template_dir).join(file).is_file() {
                result.add_error(format!(
                    "Feature \"{}\" declares file \"{}\" but it's missing",
                    feature.id, file
                ));
            }
        }
    }

    for dir in &discovered {
        if !declared.contains(dir.as_str()) {
            result.add_warning(format!(
                "Template folder \"{}\" exists but no feature declares it",
                dir
            ));
        }
    }

    result
}

/// Human-readable report of a validation run
pub fn format_validation_result(result: &ValidationResult) -> String {
    let mut lines = Vec::new();

    if !result.errors.is_empty() {
        lines.push("Errors:".red().bold().to_string());
        for error in &result.errors {
            lines.push(format!("  {} {}", "✗".red(), error));
        }
    }

    if !result.warnings.is_empty() {
        lines.push("Warnings:".yellow().bold().to_string());
        for warning in &result.warnings {
            lines.push(format!("  {} {}", "⚠".yellow(), warning));
        }
    }

    if result.valid && result.warnings.is_empty() {
        lines.push(format!(
            "{} All features and templates are valid",
            "✓".green()
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FeatureDefinition;
    use std::fs;
    use std::path::PathBuf;

    static TABLE: &[FeatureDefinition] = &[
        FeatureDefinition {
            id: "query",
            name: "Query",
            description: "",
            template_dir: Some("features/query"),
            dependencies: &[],
            dev_dependencies: &[],
            files: &["src/lib/query-client.ts"],
        },
        FeatureDefinition {
            id: "ui-forms",
            name: "UI Forms",
            description: "",
            template_dir: Some("features/ui-bundles/forms"),
            dependencies: &[],
            dev_dependencies: &[],
            files: &["src/components/ui/select.tsx", "src/components/ui/switch.tsx"],
        },
        FeatureDefinition {
            id: "ci",
            name: "CI",
            description: "",
            template_dir: None,
            dependencies: &[],
            dev_dependencies: &[],
            files: &[".github/workflows/ci.yml"],
        },
    ];

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    fn validate(root: &Path) -> ValidationResult {
        validate_feature_templates(&FeatureRegistry::new(TABLE), &TemplateRoot::new(root))
    }

    fn complete_tree() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "features/query/src/lib/query-client.ts");
        touch(dir.path(), "features/ui-bundles/forms/src/components/ui/select.tsx");
        touch(dir.path(), "features/ui-bundles/forms/src/components/ui/switch.tsx");
        dir
    }

    #[test]
    fn test_complete_tree_is_valid() {
        let dir = complete_tree();
        let result = validate(dir.path());
        assert!(result.valid, "{:?}", result.errors);
        assert!(result.warnings.is_empty(), "{:?}", result.warnings);
    }

    #[test]
    fn test_missing_directory_reports_single_error() {
        let dir = complete_tree();
        fs::remove_dir_all(dir.path().join("features/ui-bundles/forms")).unwrap();

        let result = validate(dir.path());
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("\"ui-forms\""));
        assert!(result.errors[0].contains("folder is missing"));
    }

    #[test]
    fn test_missing_file_reports_error_per_file() {
        let dir = complete_tree();
        fs::remove_file(dir.path().join("features/ui-bundles/forms/src/components/ui/select.tsx"))
            .unwrap();

        let result = validate(dir.path());
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("select.tsx"));
    }

    #[test]
    fn test_undeclared_folders_are_warnings() {
        let dir = complete_tree();
        touch(dir.path(), "features/stray/src/index.ts");
        touch(dir.path(), "features/ui-bundles/charts/src/chart.tsx");

        let result = validate(dir.path());
        assert!(result.valid);
        assert_eq!(
            result.warnings,
            vec![
                "Template folder \"features/stray\" exists but no feature declares it",
                "Template folder \"features/ui-bundles/charts\" exists but no feature declares it",
            ]
        );
    }

    #[test]
    fn test_undeclared_project_folder_is_one_warning() {
        let dir = complete_tree();
        touch(dir.path(), "features/charts/src/components/chart.tsx");
        touch(dir.path(), "features/charts/tests/chart.test.tsx");

        let result = validate(dir.path());
        assert!(result.valid, "{:?}", result.errors);
        assert_eq!(
            result.warnings,
            vec!["Template folder \"features/charts\" exists but no feature declares it"]
        );
    }

    #[test]
    fn test_undeclared_bundle_root_warns_per_bundle() {
        let dir = complete_tree();
        touch(dir.path(), "features/widgets/maps/src/map.tsx");
        touch(dir.path(), "features/widgets/video/src/player.tsx");

        let result = validate(dir.path());
        assert_eq!(
            result.warnings,
            vec![
                "Template folder \"features/widgets/maps\" exists but no feature declares it",
                "Template folder \"features/widgets/video\" exists but no feature declares it",
            ]
        );
    }

    #[test]
    fn test_shipped_tree_with_stray_folder_warns_once() {
        let shipped = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../templates");
        let dir = tempfile::tempdir().unwrap();
        for entry in WalkDir::new(shipped.join("features")).min_depth(1) {
            let entry = entry.unwrap();
            let relative = entry.path().strip_prefix(&shipped).unwrap();
            if entry.file_type().is_file() {
                let target = dir.path().join(relative);
                fs::create_dir_all(target.parent().unwrap()).unwrap();
                fs::copy(entry.path(), target).unwrap();
            }
        }
        touch(dir.path(), "features/charts/src/components/chart.tsx");
        touch(dir.path(), "features/charts/tests/chart.test.tsx");

        let result =
            validate_feature_templates(&FeatureRegistry::builtin(), &TemplateRoot::new(dir.path()));
        assert!(result.valid, "{:?}", result.errors);
        assert_eq!(
            result.warnings,
            vec!["Template folder \"features/charts\" exists but no feature declares it"]
        );
    }

    #[test]
    fn test_missing_features_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = validate(dir.path());
        assert!(!result.valid);
        assert!(result.errors[0].contains("Features directory does not exist"));
    }

    #[test]
    fn test_shipped_templates_are_valid() {
        let root =
            TemplateRoot::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../templates"));
        let result = validate_feature_templates(&FeatureRegistry::builtin(), &root);
        assert!(result.valid, "{:?}", result.errors);
        assert!(result.warnings.is_empty(), "{:?}", result.warnings);
    }

    #[test]
    fn test_format_reports_success() {
        colored::control::set_override(false);
        let report = format_validation_result(&ValidationResult::new());
        assert_eq!(report, "✓ All features and templates are valid");
    }
}
