//! Supported language labels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A language the detector can report.
///
/// The display form is the human-readable name that is also handed to the
/// text generator ("Respond in Bengali.").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Bengali,
    Hindi,
    Arabic,
    Chinese,
    Japanese,
    Portuguese,
    Turkish,
    German,
    English,
}

impl Language {
    /// Every label, in built-in priority order with the default last
    pub const ALL: [Language; 9] = [
        Language::Bengali,
        Language::Hindi,
        Language::Arabic,
        Language::Chinese,
        Language::Japanese,
        Language::Portuguese,
        Language::Turkish,
        Language::German,
        Language::English,
    ];

    /// Human-readable name of the language
    pub fn name(&self) -> &'static str {
        match self {
            Language::Bengali => "Bengali",
            Language::Hindi => "Hindi",
            Language::Arabic => "Arabic",
            Language::Chinese => "Chinese",
            Language::Japanese => "Japanese",
            Language::Portuguese => "Portuguese",
            Language::Turkish => "Turkish",
            Language::German => "German",
            Language::English => "English",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no supported language
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported language: {0}")]
pub struct ParseLanguageError(pub String);

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Language::ALL
            .iter()
            .copied()
            .find(|lang| lang.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseLanguageError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Language::Bengali.to_string(), "Bengali");
        assert_eq!(format!("Respond in {}.", Language::German), "Respond in German.");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("hindi".parse::<Language>(), Ok(Language::Hindi));
        assert_eq!(" JAPANESE ".parse::<Language>(), Ok(Language::Japanese));
        assert!("Klingon".parse::<Language>().is_err());
    }

    #[test]
    fn test_serde_uses_name() {
        let json = serde_json::to_string(&Language::Turkish).unwrap();
        assert_eq!(json, "\"Turkish\"");
        let back: Language = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Language::Turkish);
    }
}
