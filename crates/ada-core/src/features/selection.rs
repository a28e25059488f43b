//! The feature selection record that drives every generator

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Forms library choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormLibrary {
    None,
    TanstackForm,
    ReactHookForm,
}

impl FormLibrary {
    pub const ALL: [FormLibrary; 3] = [
        FormLibrary::TanstackForm,
        FormLibrary::ReactHookForm,
        FormLibrary::None,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormLibrary::None => "none",
            FormLibrary::TanstackForm => "tanstack-form",
            FormLibrary::ReactHookForm => "react-hook-form",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FormLibrary::None => "None",
            FormLibrary::TanstackForm => "TanStack Form",
            FormLibrary::ReactHookForm => "React Hook Form",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            FormLibrary::None => "No form library",
            FormLibrary::TanstackForm => "Recommended - Type-safe, headless",
            FormLibrary::ReactHookForm => "Performant, widely used",
        }
    }
}

/// Testing level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestingOption {
    None,
    Unit,
    UnitE2e,
}

impl TestingOption {
    pub const ALL: [TestingOption; 3] = [
        TestingOption::None,
        TestingOption::Unit,
        TestingOption::UnitE2e,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TestingOption::None => "none",
            TestingOption::Unit => "unit",
            TestingOption::UnitE2e => "unit-e2e",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TestingOption::None => "None",
            TestingOption::Unit => "Unit tests",
            TestingOption::UnitE2e => "Unit + E2E",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            TestingOption::None => "No testing setup",
            TestingOption::Unit => "Bun test + Testing Library",
            TestingOption::UnitE2e => "Unit tests + Playwright",
        }
    }

    pub fn has_unit(&self) -> bool {
        matches!(self, TestingOption::Unit | TestingOption::UnitE2e)
    }

    pub fn has_e2e(&self) -> bool {
        matches!(self, TestingOption::UnitE2e)
    }
}

/// Global state management choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StateOption {
    None,
    Zustand,
}

impl StateOption {
    pub const ALL: [StateOption; 2] = [StateOption::None, StateOption::Zustand];

    pub fn as_str(&self) -> &'static str {
        match self {
            StateOption::None => "none",
            StateOption::Zustand => "zustand",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StateOption::None => "None",
            StateOption::Zustand => "Zustand",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            StateOption::None => "Use React context or TanStack Query",
            StateOption::Zustand => "Lightweight, flexible",
        }
    }
}

/// UI component bundle. `Full` expands to every concrete bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UiBundle {
    Core,
    Forms,
    DataDisplay,
    Overlays,
    Full,
}

impl UiBundle {
    pub const ALL: [UiBundle; 5] = [
        UiBundle::Core,
        UiBundle::Forms,
        UiBundle::DataDisplay,
        UiBundle::Overlays,
        UiBundle::Full,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UiBundle::Core => "core",
            UiBundle::Forms => "forms",
            UiBundle::DataDisplay => "data-display",
            UiBundle::Overlays => "overlays",
            UiBundle::Full => "full",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UiBundle::Core => "Core only",
            UiBundle::Forms => "Forms",
            UiBundle::DataDisplay => "Data display",
            UiBundle::Overlays => "Overlays",
            UiBundle::Full => "Full UI kit",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            UiBundle::Core => "Button, Input, Label",
            UiBundle::Forms => "Select, Checkbox, Radio, Switch",
            UiBundle::DataDisplay => "Table, Badge, Avatar",
            UiBundle::Overlays => "Dialog, Sheet, Dropdown",
            UiBundle::Full => "All components",
        }
    }
}

/// Error returned when a string does not name a legal choice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownChoice {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for UnknownChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {}", self.kind, self.value)
    }
}

impl std::error::Error for UnknownChoice {}

macro_rules! impl_choice_str {
    ($ty:ty, $kind:literal) => {
        impl FromStr for $ty {
            type Err = UnknownChoice;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_lowercase();
                <$ty>::ALL
                    .into_iter()
                    .find(|choice| choice.as_str() == wanted)
                    .ok_or_else(|| UnknownChoice {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

impl_choice_str!(FormLibrary, "forms library");
impl_choice_str!(TestingOption, "testing option");
impl_choice_str!(StateOption, "state option");
impl_choice_str!(UiBundle, "UI bundle");

/// Independent feature choices for a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSelection {
    pub tanstack_query: bool,
    pub forms: FormLibrary,
    pub api_client: bool,
    pub env_validation: bool,
    pub testing: TestingOption,
    pub auth: bool,
    pub state: StateOption,
    pub error_boundaries: bool,
    pub ui_bundles: Vec<UiBundle>,
    pub github_actions: bool,
}

impl FeatureSelection {
    /// Every optional feature disabled
    pub fn none() -> Self {
        Self {
            tanstack_query: false,
            forms: FormLibrary::None,
            api_client: false,
            env_validation: false,
            testing: TestingOption::None,
            auth: false,
            state: StateOption::None,
            error_boundaries: false,
            ui_bundles: vec![UiBundle::Core],
            github_actions: false,
        }
    }

    pub fn has_forms(&self) -> bool {
        self.forms != FormLibrary::None
    }

    pub fn has_tests(&self) -> bool {
        self.testing.has_unit()
    }
}

impl Default for FeatureSelection {
    fn default() -> Self {
        Self::none()
    }
}
