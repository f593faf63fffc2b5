//! Language detection over a pattern table
//!
//! Detection is a single pass per pattern: count the characters each
//! matcher hits, let the default language win outright when it holds
//! more than the threshold share of all matched characters, otherwise
//! return the first non-default language (in priority order) with any
//! hits at all. Every input yields a label.

use crate::language::Language;
use crate::patterns::PatternTable;
use serde::Serialize;

/// Detect the language of `text` with the built-in table
pub fn detect_language(text: &str) -> Language {
    LanguageDetector::new().detect(text)
}

/// Per-language match counts for one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreTable {
    /// Counts in table declaration order
    scores: Vec<(Language, usize)>,
}

impl ScoreTable {
    /// Count for a language; zero when the table has no such language
    pub fn get(&self, language: Language) -> usize {
        self.scores
            .iter()
            .find(|(lang, _)| *lang == language)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.scores.iter().map(|(_, count)| count).sum()
    }

    /// Fraction of all matched characters attributed to `language`
    pub fn share(&self, language: Language) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.get(language) as f64 / total as f64
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Language, usize)> + '_ {
        self.scores.iter().copied()
    }
}

/// Outcome of [`LanguageDetector::analyze`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detection {
    pub language: Language,
    pub scores: ScoreTable,
    /// Share of matched characters held by the default language
    pub default_share: f64,
}

/// Stateless detector bound to a pattern table
#[derive(Debug, Clone, Copy)]
pub struct LanguageDetector<'a> {
    table: &'a PatternTable,
}

impl Default for LanguageDetector<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageDetector<'static> {
    /// Detector over the built-in table
    pub fn new() -> Self {
        Self {
            table: PatternTable::builtin(),
        }
    }
}

impl<'a> LanguageDetector<'a> {
    /// Detector over a custom table
    pub fn with_table(table: &'a PatternTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a PatternTable {
        self.table
    }

    /// Count matched characters for every language in the table
    pub fn score(&self, text: &str) -> ScoreTable {
        ScoreTable {
            scores: self
                .table
                .patterns()
                .iter()
                .map(|p| (p.language(), p.count(text)))
                .collect(),
        }
    }

    /// Pick a label for `text`
    pub fn detect(&self, text: &str) -> Language {
        self.analyze(text).language
    }

    /// Pick a label and keep the evidence
    pub fn analyze(&self, text: &str) -> Detection {
        let scores = self.score(text);
        let default = self.table.default_language();
        let default_share = scores.share(default);

        let language = if default_share > self.table.threshold() {
            default
        } else {
            self.table
                .priority()
                .map(|p| p.language())
                .find(|lang| scores.get(*lang) > 0)
                .unwrap_or(default)
        };

        log::trace!(
            "Detected {} (default share {:.2}, {} matched chars)",
            language,
            default_share,
            scores.total()
        );

        Detection {
            language,
            scores,
            default_share,
        }
    }
}
