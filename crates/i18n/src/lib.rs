//! UI string lookup for the dashboard (English and Thai).
//!
//! The tables are built once, on first lookup, and never change afterwards.
//! Lookups never fail: an unknown key is returned as-is so the UI shows the
//! key instead of an empty label.

use std::collections::HashMap;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use quantro_core::DomainError;

mod table;

/// Supported UI languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Th,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Th];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Th => "th",
        }
    }

    /// Parse a language code, falling back to English for anything unknown.
    pub fn from_code_or_default(code: &str) -> Self {
        code.parse().unwrap_or_default()
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "th" => Ok(Language::Th),
            other => Err(DomainError::not_found(format!("language '{other}'"))),
        }
    }
}

impl core::fmt::Display for Language {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

/// All strings for one language.
#[derive(Debug)]
pub struct TranslationTable {
    entries: HashMap<&'static str, &'static str>,
}

impl TranslationTable {
    fn build(pairs: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            entries: pairs.iter().copied().collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, *v))
    }
}

static ENGLISH: Lazy<TranslationTable> = Lazy::new(|| TranslationTable::build(table::ENGLISH));
static THAI: Lazy<TranslationTable> = Lazy::new(|| TranslationTable::build(table::THAI));

/// The full table for `language`.
pub fn language_translations(language: Language) -> &'static TranslationTable {
    match language {
        Language::En => &ENGLISH,
        Language::Th => &THAI,
    }
}

/// Translate `key`, or return the key itself when it has no entry.
pub fn t(key: &str, language: Language) -> &str {
    language_translations(language).get(key).unwrap_or(key)
}

/// Entry for the language picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AvailableLanguage {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

pub fn available_languages() -> [AvailableLanguage; 2] {
    [
        AvailableLanguage {
            code: Language::En.code(),
            name: "English",
            flag: "🇬🇧",
        },
        AvailableLanguage {
            code: Language::Th.code(),
            name: "ไทย",
            flag: "🇹🇭",
        },
    ]
}
