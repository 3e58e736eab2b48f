//! Configuration loading from environment variables.

use serde::Deserialize;
use std::env;

/// Number of documents requested by the load-more control.
pub const DEFAULT_PAGE_SIZE: usize = 5;
/// Number of documents requested when the table first mounts.
pub const DEFAULT_INITIAL_PAGE_SIZE: usize = 5;
/// Base URL that document ids are appended to when opening a new tab.
pub const DEFAULT_DOCUMENT_BASE_URL: &str = "http://localhost:3000/documents";
/// Number of sample documents seeded into the in-memory store.
pub const DEFAULT_SEED_DOCUMENTS: usize = 12;

/// Runtime configuration for Quire.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub page_size: usize,
    pub initial_page_size: usize,
    pub document_base_url: String,
    pub spellcheck: bool,
    pub seed_documents: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            initial_page_size: DEFAULT_INITIAL_PAGE_SIZE,
            document_base_url: DEFAULT_DOCUMENT_BASE_URL.to_string(),
            spellcheck: true,
            seed_documents: DEFAULT_SEED_DOCUMENTS,
        }
    }
}

/// Parse a boolean-like environment flag value.
///
/// # Supported Values
/// - Truthy: `1`, `true`, `yes`, `on`
/// - Falsy: `0`, `false`, `no`, `off`, empty string
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// `Some(bool)` when the value is recognized, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_page_size(value: &str) -> Option<usize> {
    value.trim().parse().ok().filter(|size: &usize| *size > 0)
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Unparseable values fall back to their defaults.
    ///
    /// # Arguments
    /// - `lookup`: Returns the raw value for a variable name, if set.
    ///
    /// # Returns
    /// A populated [`Config`].
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            page_size: lookup("QUIRE_PAGE_SIZE")
                .and_then(|v| parse_page_size(&v))
                .unwrap_or(defaults.page_size),
            initial_page_size: lookup("QUIRE_INITIAL_PAGE_SIZE")
                .and_then(|v| parse_page_size(&v))
                .unwrap_or(defaults.initial_page_size),
            document_base_url: lookup("QUIRE_DOCUMENT_BASE_URL")
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.document_base_url),
            spellcheck: lookup("QUIRE_SPELLCHECK")
                .and_then(|v| parse_env_flag(&v))
                .unwrap_or(defaults.spellcheck),
            seed_documents: lookup("QUIRE_SEED_DOCUMENTS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.seed_documents),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn parse_env_flag_accepts_truthy_values() {
        for value in ["1", "true", "TRUE", " yes ", "on"] {
            assert_eq!(parse_env_flag(value), Some(true), "value: {}", value);
        }
    }

    #[test]
    fn parse_env_flag_accepts_falsy_values() {
        for value in ["", "0", "false", "FALSE", " no ", "off"] {
            assert_eq!(parse_env_flag(value), Some(false), "value: {}", value);
        }
    }

    #[test]
    fn parse_env_flag_rejects_unknown_values() {
        assert_eq!(parse_env_flag("maybe"), None);
        assert_eq!(parse_env_flag("enabled"), None);
    }

    #[test]
    fn missing_variables_use_defaults() {
        assert_eq!(config_with(&[]), Config::default());
    }

    #[test]
    fn overrides_are_applied_and_trailing_slash_trimmed() {
        let config = config_with(&[
            ("QUIRE_PAGE_SIZE", "10"),
            ("QUIRE_INITIAL_PAGE_SIZE", " 20 "),
            ("QUIRE_DOCUMENT_BASE_URL", "https://docs.example.com/d/"),
            ("QUIRE_SPELLCHECK", "off"),
            ("QUIRE_SEED_DOCUMENTS", "0"),
        ]);
        assert_eq!(config.page_size, 10);
        assert_eq!(config.initial_page_size, 20);
        assert_eq!(config.document_base_url, "https://docs.example.com/d");
        assert!(!config.spellcheck);
        assert_eq!(config.seed_documents, 0);
    }

    #[test]
    fn invalid_page_sizes_fall_back() {
        let config = config_with(&[("QUIRE_PAGE_SIZE", "0"), ("QUIRE_INITIAL_PAGE_SIZE", "lots")]);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.initial_page_size, DEFAULT_INITIAL_PAGE_SIZE);
    }
}
