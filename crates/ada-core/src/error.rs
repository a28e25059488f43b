//! Error types for project generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for scaffolding operations
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// Errors raised while collecting a project configuration or writing a project
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Directory {} already exists", .0.display())]
    DirectoryExists(PathBuf),

    #[error("Operation cancelled.")]
    Cancelled,

    #[error("Template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize {artifact}: {message}")]
    Serialize { artifact: &'static str, message: String },

    #[error("git {command} failed with exit code {code}")]
    Git { command: String, code: i32 },
}

impl ScaffoldError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for ScaffoldError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize {
            artifact: "package.json",
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ScaffoldError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialize {
            artifact: "CI workflow",
            message: err.to_string(),
        }
    }
}
