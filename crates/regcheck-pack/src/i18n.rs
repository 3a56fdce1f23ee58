//! # Translation Catalogs
//!
//! Flat key → text maps per locale. Lookups return `Option` and callers
//! choose their fallback explicitly; [`Translations::label`] implements the
//! standard chain (requested locale → English → the key itself).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use regcheck_core::Locale;

use crate::error::{PackError, PackResult};

/// Translated strings for the two presentation locales.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translations {
    /// English strings.
    #[serde(default)]
    pub en: BTreeMap<String, String>,
    /// German strings.
    #[serde(default)]
    pub de: BTreeMap<String, String>,
}

impl Translations {
    /// Look up a key in one locale. No fallback.
    pub fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        let table = match locale {
            Locale::En => &self.en,
            Locale::De => &self.de,
        };
        table.get(key).map(String::as_str)
    }

    /// Look up a key, returning `fallback` when it is missing.
    pub fn lookup_or<'a>(&'a self, locale: Locale, key: &str, fallback: &'a str) -> &'a str {
        self.lookup(locale, key).unwrap_or(fallback)
    }

    /// Label for display: requested locale, then English, then the key.
    pub fn label<'a>(&'a self, locale: Locale, key: &'a str) -> &'a str {
        self.lookup(locale, key)
            .or_else(|| self.lookup(Locale::En, key))
            .unwrap_or(key)
    }

}

static GLOSSARY_YAML: &str = include_str!("../packs/glossary.yaml");

/// The built-in glossary of assessment terms (maturity level, traffic
/// light, tier, effort level, synergy).
///
/// # Errors
///
/// Returns [`PackError::YamlParseStr`] if the embedded catalog is malformed.
pub fn glossary() -> PackResult<Translations> {
    serde_yaml::from_str(GLOSSARY_YAML).map_err(|source| PackError::YamlParseStr {
        name: "glossary".into(),
        source,
    })
}

/// Look up a glossary term, falling back to the given text.
pub fn glossary_term<'a>(
    glossary: &'a Translations,
    locale: Locale,
    term: &str,
    fallback: &'a str,
) -> &'a str {
    glossary.lookup_or(locale, &format!("glossary.{term}"), fallback)
}
