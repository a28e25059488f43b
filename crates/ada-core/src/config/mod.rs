//! Project configuration collected from arguments and prompts

pub mod project;

pub use project::{app_title, validate_project_name, ProjectConfig};
