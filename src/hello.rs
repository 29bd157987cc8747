// 👋 Hello - Greeting with language lookup
// Domain code only; printing happens in the CLI

use serde::{Deserialize, Serialize};
use std::fmt;

/// Substituted when the caller supplies an empty name.
pub const DEFAULT_NAME: &str = "World";

// ============================================================================
// LANGUAGE
// ============================================================================

/// Languages with a known greeting prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// Fallback for any unrecognised language name
    #[default]
    English,
    Spanish,
    French,
    #[serde(rename = "Pig Latin")]
    PigLatin,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::PigLatin,
    ];

    /// Look up a language by its display name.
    ///
    /// Matching is exact. Anything unknown (including "") is English.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Spanish" => Language::Spanish,
            "French" => Language::French,
            "Pig Latin" => Language::PigLatin,
            _ => Language::English,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::PigLatin => "Pig Latin",
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            Language::English => "Hello, ",
            Language::Spanish => "Hola, ",
            Language::French => "Bonjour, ",
            Language::PigLatin => "Ellohay, ",
        }
    }
}

impl From<&str> for Language {
    fn from(name: &str) -> Self {
        Language::from_name(name)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// GREETING
// ============================================================================

/// Greet `name` in `language`, e.g. `hello("Maya", "Spanish") == "Hola, Maya"`.
pub fn hello(name: &str, language: impl Into<Language>) -> String {
    let name = if name.is_empty() { DEFAULT_NAME } else { name };

    format!("{}{}", language.into().prefix(), name)
}

// ============================================================================
// TESTS
// ============================================================================
