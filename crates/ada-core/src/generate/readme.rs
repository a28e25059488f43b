//! README generation

use crate::config::ProjectConfig;
use crate::features::{FeatureSelection, FormLibrary, StateOption, TestingOption};

const BASE_STACK: &[&str] = &[
    "React 19",
    "TanStack Start (SSR)",
    "TypeScript (strict mode)",
    "Tailwind CSS",
    "shadcn/ui",
    "Biome (lint + format)",
];

const FORMS_SECTION: &str = r#"## Forms

Forms use an abstraction layer to decouple business logic from the form library:

```typescript
import { Form, Field, useAppForm } from '@/forms';

function MyForm() {
  const form = useAppForm({
    schema: mySchema,
    defaultValues: { name: '' },
    onSubmit: async (values) => { /* ... */ },
  });

  return (
    <Form form={form}>
      <Field name="name" label="Name" />
      <button type="submit">Submit</button>
    </Form>
  );
}
```
"#;

const AUTH_SECTION: &str = r#"## Authentication

Auth uses a skeleton ready to connect to Better Auth:

```typescript
import { useAuth } from '@/auth';

function Profile() {
  const { user, isAuthenticated, logout } = useAuth();

  if (!isAuthenticated) return <LoginButton />;

  return <Button onClick={logout}>{user?.name}</Button>;
}
```
"#;

fn feature_lines(features: &FeatureSelection) -> Vec<String> {
    let mut lines: Vec<String> = BASE_STACK.iter().map(|s| s.to_string()).collect();

    if features.tanstack_query {
        lines.push("TanStack Query".into());
    }
    match features.forms {
        FormLibrary::None => {}
        FormLibrary::TanstackForm => lines.push("Forms (TanStack Form)".into()),
        FormLibrary::ReactHookForm => lines.push("Forms (React Hook Form)".into()),
    }
    if features.api_client {
        lines.push("API Client".into());
    }
    if features.env_validation {
        lines.push("Environment Validation (Zod)".into());
    }
    match features.testing {
        TestingOption::None => {}
        TestingOption::Unit => lines.push("Unit Tests (Bun)".into()),
        TestingOption::UnitE2e => lines.push("Unit + E2E Tests".into()),
    }
    if features.auth {
        lines.push("Auth Skeleton (Better Auth)".into());
    }
    if features.state == StateOption::Zustand {
        lines.push("Zustand (State Management)".into());
    }
    if features.error_boundaries {
        lines.push("Error Boundaries".into());
    }

    lines
}

fn script_rows(features: &FeatureSelection) -> Vec<&'static str> {
    let mut rows = vec![
        "| `bun dev` | Start development server |",
        "| `bun build` | Build for production |",
        "| `bun start` | Start production server |",
        "| `bun lint` | Run linter |",
        "| `bun format` | Format code |",
        "| `bun check` | Run all checks |",
        "| `bun typecheck` | Type check |",
    ];
    if features.testing.has_unit() {
        rows.push("| `bun test` | Run unit tests |");
    }
    if features.testing.has_e2e() {
        rows.push("| `bun test:e2e` | Run E2E tests |");
    }
    rows
}

fn architecture_tree(features: &FeatureSelection) -> Vec<&'static str> {
    let mut tree = vec![
        "├── src/",
        "│   ├── routes/          # File-based routing",
        "│   ├── components/ui/   # shadcn/ui components",
        "│   ├── lib/             # Utilities and helpers",
    ];
    if features.has_forms() {
        tree.push("│   ├── forms/           # Form abstraction layer");
    }
    if features.auth {
        tree.push("│   ├── auth/            # Authentication");
    }
    tree.push("│   ├── router.tsx       # Router configuration");
    tree.push("│   └── styles/          # CSS (globals.css, theme.css)");
    tree.push("├── features/            # Business logic modules");
    if features.has_tests() {
        tree.push("├── tests/               # Test files");
    }
    tree.push("└── public/              # Static assets");
    tree
}

/// Render `README.md` for a project
pub fn render_readme(config: &ProjectConfig) -> String {
    let features = &config.features;
    let mut out = String::new();

    out.push_str(&format!("# {}\n\n", config.name));
    out.push_str("A modern frontend application built with create-ada.\n\n");

    out.push_str("## Features\n\n");
    for line in feature_lines(features) {
        out.push_str(&format!("- {}\n", line));
    }

    out.push_str(
        "
## Getting Started

```bash
# Install dependencies
bun install

# Start development server
bun dev

# Build for production
bun build

# Start production server
bun start
```

## Scripts

| Command | Description |
|---------|-------------|
",
    );
    for row in script_rows(features) {
        out.push_str(row);
        out.push('\n');
    }

    out.push_str("\n## Architecture\n\nThis project follows a **feature-first** architecture:\n\n```\n");
    for line in architecture_tree(features) {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("```\n");

    out.push_str(
        "
## Philosophy

This project follows an **SSR-first** approach:

- All routes are server-rendered by default
- Critical data is loaded via server loaders
- Client-side rendering is used for interactivity only
- SEO and performance are prioritized
",
    );

    if features.has_forms() {
        out.push('\n');
        out.push_str(FORMS_SECTION);
    }
    if features.auth {
        out.push('\n');
        out.push_str(AUTH_SECTION);
    }

    out.push_str("\n## License\n\nPrivate\n");
    out
}
