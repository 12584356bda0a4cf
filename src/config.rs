//! Runtime configuration for the vanity seed generator.

use clap::Parser;

use crate::matcher::PREFIX_OFFSET;

/// An encoded family seed is always 29 symbols; everything after the two
/// version-derived leading symbols is matchable.
const MAX_PREFIX_LEN: usize = 29 - PREFIX_OFFSET;

/// XRP Ledger Vanity Seed Generator
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Prefix to search for, matched after the leading "s" symbols
    #[arg(short, long)]
    pub prefix: String,

    /// Number of worker threads (default: number of CPU cores)
    #[arg(short = 'w', long)]
    pub workers: Option<usize>,

    /// Total number of candidate seeds to test across all workers
    #[arg(short = 'a', long, default_value = "10000000")]
    pub max_attempts: u64,

    /// Stop after finding N secrets (0 = scan the whole attempt budget)
    #[arg(short = 'n', long, default_value = "0")]
    pub count: usize,

    /// Progress report interval in seconds
    #[arg(short = 'r', long, default_value = "5")]
    pub report_interval: u64,
}

impl Config {
    /// Returns the number of workers, defaulting to CPU count
    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(num_cpus::get)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prefix.len() > MAX_PREFIX_LEN {
            return Err(ConfigError::InvalidPrefix(format!(
                "Prefix cannot be longer than {} symbols (the matchable part of a secret)",
                MAX_PREFIX_LEN
            )));
        }
        // Prefix characters outside the alphabet are deliberately NOT an
        // error here: the search stays well-defined and simply finds
        // nothing, so main surfaces them as a warning instead.
        Ok(())
    }

    /// Returns the prefix lowercased, the form matching uses
    pub fn normalized_prefix(&self) -> String {
        self.prefix.to_lowercase()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid prefix: {0}")]
    InvalidPrefix(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_config(prefix: &str) -> Config {
        Config {
            prefix: prefix.into(),
            workers: None,
            max_attempts: 10_000_000,
            count: 0,
            report_interval: 5,
        }
    }

    #[test]
    fn test_valid_prefix() {
        let config = make_test_config("abc");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unmatchable_prefix_is_not_an_error() {
        // '0' can never appear in a secret, but that's a warning, not a
        // configuration failure.
        let config = make_test_config("0ab");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_prefix_too_long() {
        let config = make_test_config(&"a".repeat(MAX_PREFIX_LEN + 1));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_normalized_prefix() {
        let config = make_test_config("AbC");
        assert_eq!(config.normalized_prefix(), "abc");
    }

    #[test]
    fn test_worker_count_defaults_to_cpus() {
        let config = make_test_config("a");
        assert_eq!(config.worker_count(), num_cpus::get());
        let config = Config {
            workers: Some(3),
            ..make_test_config("a")
        };
        assert_eq!(config.worker_count(), 3);
    }
}
