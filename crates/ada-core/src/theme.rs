//! Theme colors and the action-color tokens they produce

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::features::UnknownChoice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeColor {
    Black,
    #[default]
    Blue,
    Indigo,
    Purple,
    Pink,
    Teal,
    Cyan,
    Green,
    Peach,
}

impl ThemeColor {
    /// Prompt order
    pub const ALL: [ThemeColor; 9] = [
        ThemeColor::Black,
        ThemeColor::Blue,
        ThemeColor::Indigo,
        ThemeColor::Purple,
        ThemeColor::Pink,
        ThemeColor::Teal,
        ThemeColor::Cyan,
        ThemeColor::Green,
        ThemeColor::Peach,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeColor::Black => "black",
            ThemeColor::Blue => "blue",
            ThemeColor::Indigo => "indigo",
            ThemeColor::Purple => "purple",
            ThemeColor::Pink => "pink",
            ThemeColor::Teal => "teal",
            ThemeColor::Cyan => "cyan",
            ThemeColor::Green => "green",
            ThemeColor::Peach => "peach",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemeColor::Black => "Black",
            ThemeColor::Blue => "Blue",
            ThemeColor::Indigo => "Indigo",
            ThemeColor::Purple => "Purple",
            ThemeColor::Pink => "Pink",
            ThemeColor::Teal => "Teal",
            ThemeColor::Cyan => "Cyan",
            ThemeColor::Green => "Green",
            ThemeColor::Peach => "Peach",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            ThemeColor::Black => "Neutral, professional",
            ThemeColor::Blue => "Default",
            _ => "",
        }
    }

    pub fn is_monochrome(&self) -> bool {
        matches!(self, ThemeColor::Black)
    }

    /// CSS custom properties substituted into the stylesheet's `ACTION` slot
    pub fn action_tokens(&self) -> String {
        if self.is_monochrome() {
            return [
                "--action: var(--ds-gray-1000);",
                "--action-hover: var(--ds-gray-900);",
                "--action-foreground: var(--ds-background-100);",
            ]
            .join("\n  ");
        }

        let color = self.as_str();
        [
            format!("--action: var(--ds-{color}-700);"),
            format!("--action-hover: var(--ds-{color}-800);"),
            format!("--action-light: var(--ds-{color}-200);"),
        ]
        .join("\n  ")
    }
}

impl FromStr for ThemeColor {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ThemeColor::ALL
            .into_iter()
            .find(|theme| theme.as_str() == wanted)
            .ok_or_else(|| UnknownChoice {
                kind: "theme",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
