use secrecy::SecretString;
use thiserror::Error;

use crate::constants::{ACCESS_TOKEN_VAR, BASE_URL_VAR, DEFAULT_BASE_URL, SECRET_ACCESS_TOKEN_VAR};

/// Connection settings for the GestãoClick API.
///
/// Tokens are wrapped in [`SecretString`] so that a `Debug` print of the
/// settings never exposes them.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL without a trailing slash.
    pub base_url: String,
    pub access_token: SecretString,
    pub secret_access_token: SecretString,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set or empty")]
    MissingVar(&'static str),
}

impl Config {
    /// Resolve connection settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve connection settings from an arbitrary variable lookup.
    ///
    /// Both tokens are mandatory; an unset or empty value fails resolution
    /// before any request is made.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: required(&lookup, ACCESS_TOKEN_VAR)?,
            secret_access_token: required(&lookup, SECRET_ACCESS_TOKEN_VAR)?,
        })
    }
}

fn required<F>(lookup: &F, name: &'static str) -> Result<SecretString, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.is_empty() => Ok(SecretString::from(value)),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn from_lookup_success_with_default_base_url() {
        let vars = vars(&[("ACCESS_TOKEN", "abc"), ("SECRET_ACCESS_TOKEN", "def")]);

        let config = Config::from_lookup(|name| vars.get(name).cloned()).unwrap();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.access_token.expose_secret(), "abc");
        assert_eq!(config.secret_access_token.expose_secret(), "def");
    }

    #[test]
    fn from_lookup_strips_trailing_slashes() {
        let vars = vars(&[
            ("GESTA_CLICK_BASE_URL", "https://example.com//"),
            ("ACCESS_TOKEN", "abc"),
            ("SECRET_ACCESS_TOKEN", "def"),
        ]);

        let config = Config::from_lookup(|name| vars.get(name).cloned()).unwrap();

        assert_eq!(config.base_url, "https://example.com");
    }

    #[test]
    fn from_lookup_missing_access_token() {
        let vars = vars(&[("SECRET_ACCESS_TOKEN", "def")]);

        let config = Config::from_lookup(|name| vars.get(name).cloned());

        assert_eq!(config.unwrap_err(), ConfigError::MissingVar("ACCESS_TOKEN"));
    }

    #[test]
    fn from_lookup_empty_secret_token() {
        let vars = vars(&[("ACCESS_TOKEN", "abc"), ("SECRET_ACCESS_TOKEN", "")]);

        let config = Config::from_lookup(|name| vars.get(name).cloned());

        assert_eq!(
            config.unwrap_err(),
            ConfigError::MissingVar("SECRET_ACCESS_TOKEN")
        );
    }

    #[test]
    fn debug_output_redacts_tokens() {
        let vars = vars(&[
            ("ACCESS_TOKEN", "hunter2"),
            ("SECRET_ACCESS_TOKEN", "hunter3"),
        ]);

        let config = Config::from_lookup(|name| vars.get(name).cloned()).unwrap();
        let printed = format!("{config:?}");

        assert!(!printed.contains("hunter2"));
        assert!(!printed.contains("hunter3"));
    }
}
