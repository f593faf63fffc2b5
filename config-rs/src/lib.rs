//! config-rs/lib.rs
//! Shared configuration utilities for the medical assistant workspace
//! Provides `.env` loading and typed environment lookups with defaults

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Load variables from a `.env` file in the working directory or its parents
///
/// # Returns
/// `true` when a file was found and loaded. Variables already present in
/// the process environment are never overwritten.
pub fn load_dotenv() -> bool {
    match dotenv::dotenv() {
        Ok(path) => {
            log::debug!("Loaded environment from {}", path.display());
            true
        }
        Err(_) => false,
    }
}

/// Get a non-empty environment variable
///
/// # Arguments
/// * `name` - The variable name (e.g., "GEMINI_API_KEY")
///
/// # Returns
/// `None` when the variable is unset, not unicode, or blank
pub fn get_optional_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Get a string environment variable with a fallback
pub fn get_string_var(name: &str, default: &str) -> String {
    get_optional_var(name).unwrap_or_else(|| default.to_string())
}

/// Get a typed environment variable with a fallback
///
/// # Arguments
/// * `name` - The variable name
/// * `default` - Value used when the variable is unset or does not parse
///
/// # Returns
/// The parsed value; unparseable input is logged and replaced by `default`
pub fn get_env_var<T: FromStr>(name: &str, default: T) -> T {
    match get_optional_var(name) {
        Some(raw) => raw.parse::<T>().unwrap_or_else(|_| {
            log::warn!("Invalid value {:?} in {}, using default", raw, name);
            default
        }),
        None => default,
    }
}

/// Get a count that must be positive
///
/// # Returns
/// The parsed value; zero is logged and replaced by `default`
pub fn get_positive_var(name: &str, default: u64) -> u64 {
    match get_env_var(name, default) {
        0 => {
            log::warn!("{} must be greater than zero, using default {}", name, default);
            default
        }
        value => value,
    }
}

/// Get a duration given in whole seconds
///
/// # Returns
/// `None` when the configured (or default) number of seconds is zero
pub fn get_duration_secs(name: &str, default_secs: u64) -> Option<Duration> {
    match get_env_var(name, default_secs) {
        0 => None,
        secs => Some(Duration::from_secs(secs)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_env_var() {
        // Test with environment variable
        std::env::set_var("CONFIG_RS_TEST_PORT", "9000");
        assert_eq!(get_env_var("CONFIG_RS_TEST_PORT", 8000u16), 9000);

        // Test with default
        std::env::remove_var("CONFIG_RS_TEST_UNSET");
        assert_eq!(get_env_var("CONFIG_RS_TEST_UNSET", 8000u16), 8000);

        // Test with garbage
        std::env::set_var("CONFIG_RS_TEST_GARBAGE", "not-a-number");
        assert_eq!(get_env_var("CONFIG_RS_TEST_GARBAGE", 7u32), 7);
    }

    #[test]
    fn test_get_optional_var() {
        std::env::set_var("CONFIG_RS_TEST_BLANK", "   ");
        assert_eq!(get_optional_var("CONFIG_RS_TEST_BLANK"), None);

        std::env::set_var("CONFIG_RS_TEST_PADDED", "  value ");
        assert_eq!(get_optional_var("CONFIG_RS_TEST_PADDED"), Some("value".to_string()));

        assert_eq!(get_string_var("CONFIG_RS_TEST_MISSING", "fallback"), "fallback");
    }

    #[test]
    fn test_get_positive_var() {
        std::env::set_var("CONFIG_RS_TEST_TIMEOUT_ZERO", "0");
        assert_eq!(get_positive_var("CONFIG_RS_TEST_TIMEOUT_ZERO", 60), 60);

        std::env::set_var("CONFIG_RS_TEST_TIMEOUT_SET", "15");
        assert_eq!(get_positive_var("CONFIG_RS_TEST_TIMEOUT_SET", 60), 15);
    }

    #[test]
    fn test_get_duration_secs() {
        std::env::set_var("CONFIG_RS_TEST_TTL", "30");
        assert_eq!(get_duration_secs("CONFIG_RS_TEST_TTL", 10), Some(Duration::from_secs(30)));

        std::env::set_var("CONFIG_RS_TEST_TTL_OFF", "0");
        assert_eq!(get_duration_secs("CONFIG_RS_TEST_TTL_OFF", 10), None);

        assert_eq!(get_duration_secs("CONFIG_RS_TEST_TTL_MISSING", 10), Some(Duration::from_secs(10)));
    }
}
