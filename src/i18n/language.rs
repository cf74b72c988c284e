//! UI language selection.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ui::Style;

/// Supported UI language codes and their names.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[("en", "English"), ("ms", "Bahasa Malaysia")];

/// The language the client talks to the council service in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ms,
}

impl Language {
    /// Returns the wire code (`en` or `ms`).
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ms => "ms",
        }
    }

    /// Returns the other supported language.
    pub const fn toggle(self) -> Self {
        match self {
            Self::En => Self::Ms,
            Self::Ms => Self::En,
        }
    }

    /// Short label shown on the language toggle (the language it switches to).
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::En => "BM",
            Self::Ms => "EN",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "en" => Ok(Self::En),
            "ms" => Ok(Self::Ms),
            _ => anyhow::bail!(
                "Invalid language code: '{s}'\n\n\
                 Valid language codes: en, ms\n\
                 Run 'aduan languages' to see all supported codes."
            ),
        }
    }
}

pub fn print_languages() {
    println!("{}", Style::header("Supported languages"));
    for (code, name) in SUPPORTED_LANGUAGES {
        println!("  {}  {}", Style::code(code), Style::secondary(name));
    }
}
