//! Assistant configuration
//!
//! Everything is read from environment variables (optionally seeded from
//! a `.env` file by the binary):
//!
//! - GEMINI_API_KEY: API key for the Gemini API (no default)
//! - GEMINI_API_URL: API base URL
//! - GEMINI_MODEL: model name
//! - GEMINI_TIMEOUT_SECS: request timeout, 0 falls back to the default (default: 60)
//! - GEMINI_MAX_OUTPUT_TOKENS: answer length cap (default: 1024)
//! - ASSISTANT_PHRASING: "random" or "fixed" (default: random)
//! - ASSISTANT_DEDUP_CAPACITY: remembered answers per session (default: 256)
//! - ASSISTANT_DEDUP_TTL_SECS: how long an answer is remembered, 0 for ever (default: 3600)
//! - ASSISTANT_MAX_REGENERATIONS: extra calls when an answer repeats (default: 2)

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 1024;
pub const DEFAULT_DEDUP_CAPACITY: usize = 256;
pub const DEFAULT_DEDUP_TTL_SECS: u64 = 3600;
pub const DEFAULT_MAX_REGENERATIONS: u32 = 2;

/// Connection settings for the Gemini API
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
    pub max_output_tokens: u32,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }
}

// Keeps the key out of logs
impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_output_tokens", &self.max_output_tokens)
            .finish()
    }
}

impl GeminiConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: config_rs::get_optional_var("GEMINI_API_KEY"),
            base_url: config_rs::get_string_var("GEMINI_API_URL", DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
            model: config_rs::get_string_var("GEMINI_MODEL", DEFAULT_MODEL),
            timeout_secs: config_rs::get_positive_var("GEMINI_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
            max_output_tokens: config_rs::get_env_var(
                "GEMINI_MAX_OUTPUT_TOKENS",
                DEFAULT_MAX_OUTPUT_TOKENS,
            ),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Request timeout; a zero setting means the default
    pub fn timeout(&self) -> Duration {
        match self.timeout_secs {
            0 => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            secs => Duration::from_secs(secs),
        }
    }
}

/// Which phrasing policy a session uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhrasingKind {
    #[default]
    Random,
    Fixed,
}

impl FromStr for PhrasingKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "random" => Ok(PhrasingKind::Random),
            "fixed" => Ok(PhrasingKind::Fixed),
            other => Err(ConfigError::UnknownPhrasing(other.to_string())),
        }
    }
}

/// Top-level configuration for a chat session
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    pub gemini: GeminiConfig,
    pub phrasing: PhrasingKind,
    pub dedup_capacity: usize,
    pub dedup_ttl: Option<Duration>,
    pub max_regenerations: u32,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            gemini: GeminiConfig::default(),
            phrasing: PhrasingKind::default(),
            dedup_capacity: DEFAULT_DEDUP_CAPACITY,
            dedup_ttl: Some(Duration::from_secs(DEFAULT_DEDUP_TTL_SECS)),
            max_regenerations: DEFAULT_MAX_REGENERATIONS,
        }
    }
}

impl AssistantConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let phrasing = match config_rs::get_optional_var("ASSISTANT_PHRASING") {
            Some(raw) => raw.parse()?,
            None => PhrasingKind::default(),
        };

        Ok(Self {
            gemini: GeminiConfig::from_env(),
            phrasing,
            dedup_capacity: config_rs::get_env_var(
                "ASSISTANT_DEDUP_CAPACITY",
                DEFAULT_DEDUP_CAPACITY,
            ),
            dedup_ttl: config_rs::get_duration_secs(
                "ASSISTANT_DEDUP_TTL_SECS",
                DEFAULT_DEDUP_TTL_SECS,
            ),
            max_regenerations: config_rs::get_env_var(
                "ASSISTANT_MAX_REGENERATIONS",
                DEFAULT_MAX_REGENERATIONS,
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_defaults() {
        let config = AssistantConfig::default();
        assert_eq!(config.gemini.model, "gemini-1.5-flash-latest");
        assert_eq!(config.gemini.max_output_tokens, 1024);
        assert_eq!(config.phrasing, PhrasingKind::Random);
        assert_eq!(config.dedup_capacity, 256);
        assert_eq!(config.dedup_ttl, Some(Duration::from_secs(3600)));
        assert!(!config.gemini.is_configured());
    }

    #[test]
    fn test_phrasing_kind_parse() {
        assert_eq!("Fixed".parse::<PhrasingKind>(), Ok(PhrasingKind::Fixed));
        assert_eq!(" random ".parse::<PhrasingKind>(), Ok(PhrasingKind::Random));
        assert!("wild".parse::<PhrasingKind>().is_err());
    }

    #[test]
    fn test_zero_timeout_uses_default() {
        let config = GeminiConfig {
            timeout_secs: 0,
            ..GeminiConfig::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let config = GeminiConfig {
            timeout_secs: 5,
            ..GeminiConfig::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = GeminiConfig {
            api_key: Some("super-secret".to_string()),
            ..GeminiConfig::default()
        };
        let printed = format!("{:?}", config);
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn test_environment_variables() {
        // Set up temp environment variables for testing
        env::set_var("GEMINI_API_KEY", "test-key");
        env::set_var("GEMINI_API_URL", "http://localhost:9999/v1beta/");
        env::set_var("ASSISTANT_PHRASING", "fixed");
        env::set_var("ASSISTANT_DEDUP_TTL_SECS", "0");
        env::set_var("ASSISTANT_MAX_REGENERATIONS", "oops");
        env::set_var("GEMINI_TIMEOUT_SECS", "0");

        let config = AssistantConfig::from_env().unwrap();

        assert_eq!(config.gemini.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.gemini.base_url, "http://localhost:9999/v1beta");
        assert_eq!(config.phrasing, PhrasingKind::Fixed);
        assert_eq!(config.dedup_ttl, None);
        assert_eq!(config.max_regenerations, DEFAULT_MAX_REGENERATIONS);
        assert_eq!(config.gemini.timeout_secs, DEFAULT_TIMEOUT_SECS);

        // Clean up
        env::remove_var("GEMINI_API_KEY");
        env::remove_var("GEMINI_API_URL");
        env::remove_var("ASSISTANT_PHRASING");
        env::remove_var("ASSISTANT_DEDUP_TTL_SECS");
        env::remove_var("ASSISTANT_MAX_REGENERATIONS");
        env::remove_var("GEMINI_TIMEOUT_SECS");
    }
}
