//! Runtime detection for Bun and Git

use std::fmt;
use std::process::Command;

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

impl fmt::Display for RuntimeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.version, self.available) {
            (Some(version), true) => write!(f, "{} ({})", self.name, version),
            (None, true) => write!(f, "{} (unknown)", self.name),
            (_, false) => write!(f, "{} (not installed)", self.name),
        }
    }
}

/// Run `<program> --version` and report whether it succeeded
fn detect(name: &'static str, program: &str) -> RuntimeInfo {
    let output = Command::new(program).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Bun is available
pub fn check_bun() -> RuntimeInfo {
    detect("Bun", "bun")
}

/// Check if Git is available
pub fn check_git() -> RuntimeInfo {
    detect("Git", "git")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_unavailable() {
        let info = detect("Nope", "create-ada-definitely-not-installed");
        assert!(!info.available);
        assert!(info.version.is_none());
        assert_eq!(info.to_string(), "Nope (not installed)");
    }

    #[test]
    fn test_display_with_version() {
        let info = RuntimeInfo {
            name: "Bun",
            version: Some("1.1.38".to_string()),
            available: true,
        };
        assert_eq!(info.to_string(), "Bun (1.1.38)");
    }
}
