//! Language patterns and the pattern table
//!
//! A pattern table is configuration data: which languages exist, which
//! characters count as evidence for each of them, which one is the
//! default, and in which order the others are tried.

use crate::errors::{PatternError, PatternResult};
use crate::language::Language;
use crate::{DEFAULT_LANGUAGE, DEFAULT_SHARE_THRESHOLD};
use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

const BENGALI_PATTERN: &str = r"[\x{0980}-\x{09FF}]";
const HINDI_PATTERN: &str = r"[\x{0900}-\x{097F}]";
const ARABIC_PATTERN: &str = r"[\x{0600}-\x{06FF}]";
const CHINESE_PATTERN: &str = r"[\x{4E00}-\x{9FFF}]";
// Hiragana and Katakana only; Kanji fall under Chinese
const JAPANESE_PATTERN: &str = r"[\x{3040}-\x{309F}\x{30A0}-\x{30FF}]";
const PORTUGUESE_PATTERN: &str = "[ãõáéíóúâêîôûçÃÕÁÉÍÓÚÂÊÎÔÛÇ]";
const TURKISH_PATTERN: &str = "[çğıöşüÇĞİÖŞÜ]";
const GERMAN_PATTERN: &str = "[äöüÄÖÜß]";
const ENGLISH_PATTERN: &str = "[a-zA-Z]";

lazy_static! {
    static ref BUILTIN_TABLE: PatternTable = PatternTable::builder()
        .pattern(Language::Bengali, BENGALI_PATTERN)
        .pattern(Language::Hindi, HINDI_PATTERN)
        .pattern(Language::Arabic, ARABIC_PATTERN)
        .pattern(Language::Chinese, CHINESE_PATTERN)
        .pattern(Language::Japanese, JAPANESE_PATTERN)
        .case_insensitive_pattern(Language::Portuguese, PORTUGUESE_PATTERN)
        .pattern(Language::Turkish, TURKISH_PATTERN)
        .pattern(Language::German, GERMAN_PATTERN)
        .pattern(Language::English, ENGLISH_PATTERN)
        .build()
        .expect("built-in pattern table is valid");
}

/// A language label together with the character class that counts for it
#[derive(Debug, Clone)]
pub struct LanguagePattern {
    language: Language,
    matcher: Regex,
}

impl LanguagePattern {
    /// Compile a matcher for a language
    pub fn new(language: Language, pattern: &str) -> PatternResult<Self> {
        Self::compile(language, pattern, false)
    }

    /// Compile a matcher that ignores letter case
    pub fn case_insensitive(language: Language, pattern: &str) -> PatternResult<Self> {
        Self::compile(language, pattern, true)
    }

    fn compile(language: Language, pattern: &str, case_insensitive: bool) -> PatternResult<Self> {
        let matcher = RegexBuilder::new(pattern)
            .case_insensitive(case_insensitive)
            .build()
            .map_err(|e| PatternError::InvalidPattern {
                language,
                message: e.to_string(),
            })?;
        Ok(Self { language, matcher })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Number of non-overlapping matches in `text`
    pub fn count(&self, text: &str) -> usize {
        self.matcher.find_iter(text).count()
    }
}

/// The full set of patterns consulted by a detector
#[derive(Debug, Clone)]
pub struct PatternTable {
    /// Declaration order; doubles as priority order for non-default entries
    patterns: Vec<LanguagePattern>,
    default_language: Language,
    threshold: f64,
}

impl PatternTable {
    /// Start a custom table
    pub fn builder() -> PatternTableBuilder {
        PatternTableBuilder::new()
    }

    /// The shared built-in table
    pub fn builtin() -> &'static PatternTable {
        &BUILTIN_TABLE
    }

    pub fn default_language(&self) -> Language {
        self.default_language
    }

    /// Share of matched characters the default language must exceed
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// All patterns in declaration order
    pub fn patterns(&self) -> &[LanguagePattern] {
        &self.patterns
    }

    /// Non-default patterns in the order they are tried
    pub fn priority(&self) -> impl Iterator<Item = &LanguagePattern> {
        let default = self.default_language;
        self.patterns.iter().filter(move |p| p.language != default)
    }

    pub fn languages(&self) -> Vec<Language> {
        self.patterns.iter().map(|p| p.language).collect()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Fluent builder for [`PatternTable`]
///
/// The first error encountered is kept and reported by [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct PatternTableBuilder {
    patterns: Vec<LanguagePattern>,
    default_language: Language,
    threshold: f64,
    error: Option<PatternError>,
}

impl Default for PatternTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternTableBuilder {
    pub fn new() -> Self {
        Self {
            patterns: Vec::new(),
            default_language: DEFAULT_LANGUAGE,
            threshold: DEFAULT_SHARE_THRESHOLD,
            error: None,
        }
    }

    /// Append a pattern; later entries have lower priority
    pub fn pattern(self, language: Language, pattern: &str) -> Self {
        self.push(LanguagePattern::new(language, pattern))
    }

    /// Append a case-insensitive pattern
    pub fn case_insensitive_pattern(self, language: Language, pattern: &str) -> Self {
        self.push(LanguagePattern::case_insensitive(language, pattern))
    }

    pub fn default_language(mut self, language: Language) -> Self {
        self.default_language = language;
        self
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        if self.error.is_none() && !(0.0..=1.0).contains(&threshold) {
            self.error = Some(PatternError::InvalidThreshold(threshold));
        }
        self.threshold = threshold;
        self
    }

    fn push(mut self, pattern: PatternResult<LanguagePattern>) -> Self {
        if self.error.is_some() {
            return self;
        }
        match pattern {
            Ok(p) if self.patterns.iter().any(|e| e.language == p.language) => {
                self.error = Some(PatternError::DuplicateLanguage(p.language));
            }
            Ok(p) => self.patterns.push(p),
            Err(e) => self.error = Some(e),
        }
        self
    }

    pub fn build(self) -> PatternResult<PatternTable> {
        if let Some(err) = self.error {
            return Err(err);
        }
        if !self.patterns.iter().any(|p| p.language == self.default_language) {
            return Err(PatternError::MissingDefault(self.default_language));
        }
        Ok(PatternTable {
            patterns: self.patterns,
            default_language: self.default_language,
            threshold: self.threshold,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_layout() {
        let table = PatternTable::builtin();
        assert_eq!(table.languages(), Language::ALL.to_vec());
        assert_eq!(table.default_language(), Language::English);

        let priority: Vec<Language> = table.priority().map(|p| p.language()).collect();
        assert_eq!(priority.len(), 8);
        assert_eq!(priority.first(), Some(&Language::Bengali));
        assert_eq!(priority.last(), Some(&Language::German));
    }

    #[test]
    fn test_count_is_per_character() {
        let bengali = LanguagePattern::new(Language::Bengali, BENGALI_PATTERN).unwrap();
        assert_eq!(bengali.count("মাথা"), 4);
        assert_eq!(bengali.count("head"), 0);

        let english = LanguagePattern::new(Language::English, ENGLISH_PATTERN).unwrap();
        assert_eq!(english.count("Hi, you!"), 5);
    }

    #[test]
    fn test_portuguese_counts_both_cases() {
        let pattern =
            LanguagePattern::case_insensitive(Language::Portuguese, PORTUGUESE_PATTERN).unwrap();
        assert_eq!(pattern.count("AÇÃO ação"), 4);
    }

    #[test]
    fn test_builder_rejects_invalid_regex() {
        let result = PatternTable::builder()
            .pattern(Language::English, "[a-z")
            .build();
        assert!(matches!(
            result,
            Err(PatternError::InvalidPattern { language: Language::English, .. })
        ));
    }

    #[test]
    fn test_builder_rejects_duplicates() {
        let result = PatternTable::builder()
            .pattern(Language::English, ENGLISH_PATTERN)
            .pattern(Language::English, "[A-Z]")
            .build();
        assert_eq!(result.unwrap_err(), PatternError::DuplicateLanguage(Language::English));
    }

    #[test]
    fn test_builder_requires_default_pattern() {
        let result = PatternTable::builder()
            .pattern(Language::Hindi, HINDI_PATTERN)
            .build();
        assert_eq!(result.unwrap_err(), PatternError::MissingDefault(Language::English));
    }

    #[test]
    fn test_builder_rejects_bad_threshold() {
        let result = PatternTable::builder()
            .pattern(Language::English, ENGLISH_PATTERN)
            .threshold(1.2)
            .build();
        assert_eq!(result.unwrap_err(), PatternError::InvalidThreshold(1.2));
    }

    #[test]
    fn test_custom_default_language() {
        let table = PatternTable::builder()
            .pattern(Language::English, ENGLISH_PATTERN)
            .pattern(Language::Arabic, ARABIC_PATTERN)
            .default_language(Language::Arabic)
            .build()
            .unwrap();
        let priority: Vec<Language> = table.priority().map(|p| p.language()).collect();
        assert_eq!(priority, vec![Language::English]);
    }
}
