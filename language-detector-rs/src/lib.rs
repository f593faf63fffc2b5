//! # Language Detector
//!
//! Cheap, deterministic language detection for short chat messages.
//!
//! Every supported language is described by a character-class matcher
//! (a Unicode block or a set of diacritics). Detection counts the
//! characters each matcher hits, lets the default Latin-script language
//! win when it holds the majority of matched characters, and otherwise
//! picks the first language in priority order that matched at all.
//!
//! ## Features
//!
//! - Built-in table covering Bengali, Hindi, Arabic, Chinese, Japanese,
//!   Portuguese, Turkish, German and English
//! - Custom tables through [`PatternTable::builder`]
//! - Per-language score tables for diagnostics
//! - Total detection: every input yields a label

mod detector;
mod errors;
mod language;
mod patterns;

pub use detector::{detect_language, Detection, LanguageDetector, ScoreTable};
pub use errors::{PatternError, PatternResult};
pub use language::{Language, ParseLanguageError};
pub use patterns::{LanguagePattern, PatternTable, PatternTableBuilder};

/// Re-export commonly used items for convenience
pub mod prelude {
    pub use crate::detector::{detect_language, Detection, LanguageDetector};
    pub use crate::language::Language;
    pub use crate::patterns::PatternTable;
}

/// Version of the detector library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Share of matched characters the default language must exceed to win outright
pub const DEFAULT_SHARE_THRESHOLD: f64 = 0.5;

/// Label returned when nothing else applies
pub const DEFAULT_LANGUAGE: Language = Language::English;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_defaults() {
        let table = PatternTable::builtin();
        assert_eq!(table.default_language(), DEFAULT_LANGUAGE);
        assert_eq!(table.threshold(), DEFAULT_SHARE_THRESHOLD);
    }

    #[test]
    fn test_prelude_detects() {
        use crate::prelude::*;
        assert_eq!(detect_language("Hello there"), Language::English);
    }
}
