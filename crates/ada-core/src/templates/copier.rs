//! Recursive template copying

use super::TemplateRoot;
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::features::FeatureRegistry;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Stem suffix marking a file as slot-substitution input rather than direct output
pub const TEMPLATE_SUFFIX: &str = ".template";

/// Whether a file (e.g. `__root.template.tsx`) is a slot template
pub fn is_slot_template(path: &Path) -> bool {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| stem.ends_with(TEMPLATE_SUFFIX))
}

/// Copy every file under `src` into `dest`, preserving structure and overwriting
/// existing files. `skip` receives paths relative to `src`.
/// Returns the relative paths that were written, in traversal order.
pub async fn copy_tree<F>(src: &Path, dest: &Path, skip: F) -> ScaffoldResult<Vec<PathBuf>>
where
    F: Fn(&Path) -> bool,
{
    fs::create_dir_all(dest)
        .await
        .map_err(|e| ScaffoldError::io(dest, e))?;

    let mut copied = Vec::new();

    for entry in WalkDir::new(src).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(src).to_path_buf();
            ScaffoldError::io(path, e.into())
        })?;

        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .await
                .map_err(|e| ScaffoldError::io(&target, e))?;
            continue;
        }

        if skip(relative) {
            debug!(file = %relative.display(), "skipping");
            continue;
        }

        let content = fs::read(entry.path())
            .await
            .map_err(|e| ScaffoldError::io(entry.path(), e))?;
        fs::write(&target, &content)
            .await
            .map_err(|e| ScaffoldError::io(&target, e))?;

        copied.push(relative.to_path_buf());
    }

    Ok(copied)
}

/// Copy the base template, leaving out slot templates
pub async fn copy_base_template(
    templates: &TemplateRoot,
    target_dir: &Path,
) -> ScaffoldResult<Vec<PathBuf>> {
    let base = templates.base_dir();
    let copied = copy_tree(&base, target_dir, is_slot_template).await?;
    debug!(count = copied.len(), "copied base template");
    Ok(copied)
}

/// Overlay each feature's template directory onto the target, in the given order.
/// Later features overwrite files written by the base or earlier features.
pub async fn copy_feature_templates<S: AsRef<str>>(
    templates: &TemplateRoot,
    target_dir: &Path,
    registry: &FeatureRegistry<'_>,
    feature_ids: &[S],
) -> ScaffoldResult<Vec<PathBuf>> {
    let mut copied = Vec::new();

    for id in feature_ids {
        let Some(feature) = registry.get(id.as_ref()) else {
            continue;
        };
        let Some(dir) = templates.feature_dir(feature) else {
            continue;
        };

        if !dir.is_dir() {
            warn!(feature = feature.id, dir = %dir.display(), "feature template directory missing");
            continue;
        }

        let files = copy_tree(&dir, target_dir, |_| false).await?;
        debug!(feature = feature.id, count = files.len(), "copied feature template");
        copied.extend(files);
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FeatureDefinition;

    fn write(path: &Path, content: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn test_slot_template_detection() {
        assert!(is_slot_template(Path::new("src/routes/__root.template.tsx")));
        assert!(is_slot_template(Path::new("layout.template.html")));
        assert!(!is_slot_template(Path::new("src/routes/index.tsx")));
        assert!(!is_slot_template(Path::new("template.tsx")));
        assert!(!is_slot_template(Path::new("src/templates/page.tsx")));
    }

    #[tokio::test]
    async fn test_copy_base_skips_slot_templates() {
        let templates = tempfile::tempdir().unwrap();
        let base = templates.path().join("base");
        write(&base.join("src/routes/__root.template.tsx"), "/* @SLOT:IMPORTS */");
        write(&base.join("src/routes/index.tsx"), "index");
        write(&base.join("vite.config.ts"), "vite");

        let target = tempfile::tempdir().unwrap();
        let dest = target.path().join("app");
        let copied = copy_base_template(&TemplateRoot::new(templates.path()), &dest)
            .await
            .unwrap();

        assert_eq!(copied.len(), 2);
        assert!(dest.join("src/routes/index.tsx").exists());
        assert!(dest.join("vite.config.ts").exists());
        assert!(!dest.join("src/routes/__root.template.tsx").exists());
    }

    #[tokio::test]
    async fn test_later_feature_overwrites_earlier_files() {
        static TABLE: &[FeatureDefinition] = &[
            FeatureDefinition {
                id: "first",
                name: "First",
                description: "",
                template_dir: Some("features/first"),
                dependencies: &[],
                dev_dependencies: &[],
                files: &["src/lib/env.ts"],
            },
            FeatureDefinition {
                id: "second",
                name: "Second",
                description: "",
                template_dir: Some("features/second"),
                dependencies: &[],
                dev_dependencies: &[],
                files: &["src/lib/env.ts"],
            },
            FeatureDefinition {
                id: "generated",
                name: "Generated",
                description: "",
                template_dir: None,
                dependencies: &[],
                dev_dependencies: &[],
                files: &[],
            },
        ];

        let templates = tempfile::tempdir().unwrap();
        write(&templates.path().join("features/first/src/lib/env.ts"), "first");
        write(&templates.path().join("features/second/src/lib/env.ts"), "second");

        let target = tempfile::tempdir().unwrap();
        let registry = FeatureRegistry::new(TABLE);
        let copied = copy_feature_templates(
            &TemplateRoot::new(templates.path()),
            target.path(),
            &registry,
            &["first", "generated", "unknown", "second"],
        )
        .await
        .unwrap();

        assert_eq!(copied.len(), 2);
        let content = std::fs::read_to_string(target.path().join("src/lib/env.ts")).unwrap();
        assert_eq!(content, "second");
    }
}
