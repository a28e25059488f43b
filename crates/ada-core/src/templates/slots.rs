//! Placeholder substitution for the root layout and the theme stylesheet

use crate::features::FeatureSelection;
use crate::theme::ThemeColor;

/// Root layout source, relative to `base/`
pub const ROOT_LAYOUT_TEMPLATE: &str = "src/routes/__root.template.tsx";

/// Where the substituted root layout is written in the generated project
pub const ROOT_LAYOUT_OUTPUT: &str = "src/routes/__root.tsx";

/// Stylesheet carrying the `ACTION` slot, relative to the project root
pub const STYLESHEET: &str = "src/styles/globals.css";

const PROVIDER_INDENT: &str = "\n      ";

/// Literal marker text for a named slot
pub fn slot_marker(name: &str) -> String {
    format!("/* @SLOT:{} */", name)
}

/// A provider that wraps the document in the root layout
struct Provider {
    imports: &'static [&'static str],
    setup: Option<&'static str>,
    open: &'static str,
    close: &'static str,
}

const QUERY_PROVIDER: Provider = Provider {
    imports: &[
        "import { useState } from 'react';",
        "import { QueryClient, QueryClientProvider } from '@tanstack/react-query';",
    ],
    setup: Some(
        "const [queryClient] = useState(() => new QueryClient({
    defaultOptions: {
      queries: {
        staleTime: 60 * 1000,
        gcTime: 5 * 60 * 1000,
      },
    },
  }));",
    ),
    open: "<QueryClientProvider client={queryClient}>",
    close: "</QueryClientProvider>",
};

const AUTH_PROVIDER: Provider = Provider {
    imports: &["import { AuthProvider } from '@/auth';"],
    setup: None,
    open: "<AuthProvider>",
    close: "</AuthProvider>",
};

/// Text substituted into the four root layout slots
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootLayoutSlots {
    pub imports: String,
    pub providers_setup: String,
    pub providers_open: String,
    pub providers_close: String,
}

impl RootLayoutSlots {
    /// Providers nest in a fixed order: query outermost, then auth
    pub fn from_features(features: &FeatureSelection) -> Self {
        let mut providers = Vec::new();
        if features.tanstack_query {
            providers.push(&QUERY_PROVIDER);
        }
        if features.auth {
            providers.push(&AUTH_PROVIDER);
        }

        let imports: Vec<&str> = providers
            .iter()
            .flat_map(|p| p.imports.iter().copied())
            .collect();
        let setup: Vec<&str> = providers.iter().filter_map(|p| p.setup).collect();
        let open: Vec<&str> = providers.iter().map(|p| p.open).collect();
        let close: Vec<&str> = providers.iter().rev().map(|p| p.close).collect();

        Self {
            imports: imports.join("\n"),
            providers_setup: setup.join("\n  "),
            providers_open: open.join(PROVIDER_INDENT),
            providers_close: close.join(PROVIDER_INDENT),
        }
    }

    /// Replace every slot marker in the root layout template
    pub fn apply(&self, template: &str) -> String {
        [
            ("IMPORTS", &self.imports),
            ("PROVIDERS_SETUP", &self.providers_setup),
            ("PROVIDERS_OPEN", &self.providers_open),
            ("PROVIDERS_CLOSE", &self.providers_close),
        ]
        .into_iter()
        .fold(template.to_string(), |text, (name, value)| {
            text.replace(&slot_marker(name), value)
        })
    }
}

/// Fill the stylesheet's `ACTION` slot with the theme's tokens
pub fn apply_theme(stylesheet: &str, theme: ThemeColor) -> String {
    stylesheet.replace(&slot_marker("ACTION"), &theme.action_tokens())
}
