//! # Locale
//!
//! The two presentation locales. Scoring is locale-independent; the locale
//! only selects translated labels and number formatting downstream.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Presentation locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// German.
    #[default]
    De,
    /// English.
    En,
}

impl Locale {
    /// Locale code.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::De => "de",
            Self::En => "en",
        }
    }

    /// Format a whole-euro amount with the locale's grouping convention.
    ///
    /// `de` → `12.500 €`, `en` → `€12,500`.
    pub fn format_eur(self, amount: u64) -> String {
        let (separator, prefix, suffix) = match self {
            Self::De => ('.', "", " €"),
            Self::En => (',', "€", ""),
        };
        let digits = amount.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(separator);
            }
            grouped.push(ch);
        }
        format!("{prefix}{grouped}{suffix}")
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "de" => Ok(Self::De),
            "en" => Ok(Self::En),
            _ => Err(ValidationError::UnknownLocale(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn german_grouping() {
        assert_eq!(Locale::De.format_eur(12_500), "12.500 €");
        assert_eq!(Locale::De.format_eur(1_234_567), "1.234.567 €");
    }

    #[test]
    fn english_grouping() {
        assert_eq!(Locale::En.format_eur(12_500), "€12,500");
        assert_eq!(Locale::En.format_eur(999), "€999");
        assert_eq!(Locale::En.format_eur(0), "€0");
    }

    #[test]
    fn parse_locale() {
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert!("fr".parse::<Locale>().is_err());
    }
}
