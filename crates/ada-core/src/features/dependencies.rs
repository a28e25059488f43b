//! Merged package dependency maps

use serde::Serialize;
use std::collections::BTreeMap;

/// Runtime and development dependencies, keyed by package name in sorted order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedDependencies {
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
}

impl MergedDependencies {
    /// Insert declared packages, overwriting any version already present
    pub fn extend(
        &mut self,
        dependencies: &[(&str, &str)],
        dev_dependencies: &[(&str, &str)],
    ) {
        insert_all(&mut self.dependencies, dependencies);
        insert_all(&mut self.dev_dependencies, dev_dependencies);
    }
}

fn insert_all(target: &mut BTreeMap<String, String>, packages: &[(&str, &str)]) {
    for (name, version) in packages {
        target.insert((*name).to_string(), (*version).to_string());
    }
}
