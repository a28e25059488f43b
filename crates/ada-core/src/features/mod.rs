//! Feature registry, presets, and resolution
//!
//! This module provides:
//! - The static feature registry (template directories and package versions)
//! - The feature selection record and its choice enums
//! - Presets mapping a name to a fixed selection
//! - Resolution of a selection into feature ids and merged dependencies

pub mod dependencies;
pub mod presets;
pub mod registry;
pub mod resolver;
pub mod selection;

pub use dependencies::MergedDependencies;
pub use presets::PresetName;
pub use registry::{FeatureDefinition, FeatureRegistry, FEATURES};
pub use resolver::resolve_features;
pub use selection::{
    FeatureSelection, FormLibrary, StateOption, TestingOption, UiBundle, UnknownChoice,
};
