//! Error handling for pattern table construction
//!
//! Detection itself never fails; only building a custom table can.

use crate::language::Language;
use thiserror::Error;

/// Result type for pattern table construction
pub type PatternResult<T> = Result<T, PatternError>;

/// Reasons a pattern table can be rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatternError {
    /// The matcher is not a valid regular expression
    #[error("Invalid pattern for {language}: {message}")]
    InvalidPattern { language: Language, message: String },

    /// The same label was declared twice
    #[error("Duplicate pattern for {0}")]
    DuplicateLanguage(Language),

    /// The default label has no matcher of its own
    #[error("No pattern declared for default language {0}")]
    MissingDefault(Language),

    /// Share threshold must be a fraction
    #[error("Share threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PatternError::DuplicateLanguage(Language::Hindi);
        assert_eq!(err.to_string(), "Duplicate pattern for Hindi");

        let err = PatternError::InvalidThreshold(1.5);
        assert!(err.to_string().contains("1.5"));
    }
}
