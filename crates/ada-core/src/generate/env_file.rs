//! `.env.example` generation

use crate::config::{app_title, ProjectConfig};

const AUTH_SECTION: &str = "# Authentication (Better Auth)
VITE_AUTH_URL=http://localhost:3000/api/auth
# Set to \"false\" to disable magic link authentication
VITE_AUTH_MAGIC_LINK=true
# Comma-separated list of OIDC providers (e.g., \"google,github\")
VITE_AUTH_OIDC_PROVIDERS=";

pub fn render_env_example(config: &ProjectConfig) -> String {
    let mut sections = vec![
        format!("# Application\nVITE_APP_TITLE=\"{}\"", app_title(&config.name)),
        "# API\nVITE_API_URL=http://localhost:3000/api".to_string(),
    ];

    if config.features.auth {
        sections.push(AUTH_SECTION.to_string());
    }

    let mut content = sections.join("\n\n");
    content.push('\n');
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::PresetName;
    use crate::theme::ThemeColor;

    #[test]
    fn test_without_auth() {
        let config =
            ProjectConfig::from_preset("my-cool-app", PresetName::Minimal, ThemeColor::Blue)
                .unwrap();
        assert_eq!(
            render_env_example(&config),
            "# Application\nVITE_APP_TITLE=\"My Cool App\"\n\n# API\nVITE_API_URL=http://localhost:3000/api\n"
        );
    }

    #[test]
    fn test_with_auth() {
        let config =
            ProjectConfig::from_preset("portal", PresetName::Enterprise, ThemeColor::Blue).unwrap();
        let content = render_env_example(&config);
        assert!(content.contains("\n\n# Authentication (Better Auth)\n"));
        assert!(content.contains("VITE_AUTH_MAGIC_LINK=true\n"));
        assert!(content.ends_with("VITE_AUTH_OIDC_PROVIDERS=\n"));
    }
}
