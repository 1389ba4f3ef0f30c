//! Configuration management for the assistant bot.
//!
//! Settings come from environment variables, optionally seeded from a
//! `.env` file. Every setting has a default, so an empty environment is a
//! valid configuration.

use crate::book::UPCOMING_WINDOW_DAYS;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Longest accepted upcoming-birthday window.
const MAX_UPCOMING_DAYS: u64 = 366;

/// Configuration for the assistant bot.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Prompt printed before each input line (default: "> ")
    pub prompt: String,

    /// Days after today checked by the `birthdays` command (default: 7)
    pub upcoming_birthday_days: u64,

    /// Log level used when RUST_LOG is not set (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BOT_PROMPT`: Input prompt (default: "> ")
    /// - `UPCOMING_BIRTHDAY_DAYS`: Birthday window length, 1-366 (default: 7)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env is fine; a malformed one is not.
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let defaults = Self::default();

        let prompt = env::var("BOT_PROMPT").unwrap_or(defaults.prompt);
        if prompt.is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "BOT_PROMPT".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let upcoming_birthday_days =
            Self::parse_env_u64("UPCOMING_BIRTHDAY_DAYS", defaults.upcoming_birthday_days)?;
        if !(1..=MAX_UPCOMING_DAYS).contains(&upcoming_birthday_days) {
            return Err(ConfigError::InvalidValue {
                var: "UPCOMING_BIRTHDAY_DAYS".to_string(),
                reason: format!("Must be between 1 and {}", MAX_UPCOMING_DAYS),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            prompt,
            upcoming_birthday_days,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: "> ".to_string(),
            upcoming_birthday_days: UPCOMING_WINDOW_DAYS,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.upcoming_birthday_days, 7);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("BOT_PROMPT", "bot> ");
        guard.set("UPCOMING_BIRTHDAY_DAYS", "14");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.prompt, "bot> ");
        assert_eq!(config.upcoming_birthday_days, 14);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_rejects_zero_window() {
        let mut guard = EnvGuard::new();
        guard.set("UPCOMING_BIRTHDAY_DAYS", "0");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "UPCOMING_BIRTHDAY_DAYS");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_rejects_oversized_window() {
        let mut guard = EnvGuard::new();
        guard.set("UPCOMING_BIRTHDAY_DAYS", "400");

        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_config_rejects_empty_prompt() {
        let mut guard = EnvGuard::new();
        guard.set("BOT_PROMPT", "");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "BOT_PROMPT"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_u64() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U64", "42");

        let result = Config::parse_env_u64("TEST_U64", 10);
        assert_eq!(result.unwrap(), 42);

        let result = Config::parse_env_u64("NONEXISTENT", 10);
        assert_eq!(result.unwrap(), 10);
    }

    #[test]
    #[serial]
    fn test_parse_env_u64_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U64_INVALID", "not-a-number");

        let result = Config::parse_env_u64("TEST_U64_INVALID", 10);
        assert!(result.is_err());
    }
}
