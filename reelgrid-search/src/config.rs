//! Centralized configuration for Reelgrid.
//!
//! The catalog API key is a secret: it is only ever read from the
//! environment and is redacted from `Debug` output.

use std::fmt;
use std::time::Duration;

use crate::errors::MovieSearchError;

/// Default catalog endpoint.
pub const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com";

/// Default maximum number of characters shown for a result title.
pub const DEFAULT_TITLE_MAX_CHARS: usize = 40;

/// Central configuration for the search pipeline.
#[derive(Debug, Clone, Default)]
pub struct ReelgridConfig {
    /// Catalog endpoint and display settings
    pub catalog: CatalogConfig,
    /// Poster probing settings
    pub probe: ProbeConfig,
}

/// Catalog API location and credentials.
#[derive(Clone)]
pub struct CatalogConfig {
    /// Base URL of the OMDb-compatible endpoint, without trailing slash
    pub base_url: String,
    /// API key sent as the `apikey` query parameter
    pub api_key: String,
    /// Maximum characters of a title before it is truncated
    pub title_max_chars: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            title_max_chars: DEFAULT_TITLE_MAX_CHARS,
        }
    }
}

impl fmt::Debug for CatalogConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("title_max_chars", &self.title_max_chars)
            .finish()
    }
}

/// Poster probing behavior.
#[derive(Debug, Clone, Default)]
pub struct ProbeConfig {
    /// Per-probe timeout (None = wait indefinitely)
    pub timeout: Option<Duration>,
    /// Maximum probes in flight at once (None = unbounded fan-out)
    pub max_concurrent: Option<usize>,
}

impl ReelgridConfig {
    /// Creates configuration from `REELGRID_*` environment variables.
    ///
    /// # Errors
    ///
    /// - `MovieSearchError::Configuration` - If the API key is missing or a value is malformed
    pub fn from_env() -> Result<Self, MovieSearchError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// - `MovieSearchError::Configuration` - If the API key is missing or a value is malformed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, MovieSearchError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(api_key) = lookup("REELGRID_OMDB_API_KEY") {
            config.catalog.api_key = api_key;
        }

        if let Some(base_url) = lookup("REELGRID_OMDB_BASE_URL") {
            config.catalog.base_url = base_url;
        }

        if let Some(max_chars) = lookup("REELGRID_TITLE_MAX_CHARS") {
            config.catalog.title_max_chars =
                parse_number("REELGRID_TITLE_MAX_CHARS", &max_chars)?;
        }

        if let Some(timeout) = lookup("REELGRID_PROBE_TIMEOUT_SECS") {
            let seconds: u64 = parse_number("REELGRID_PROBE_TIMEOUT_SECS", &timeout)?;
            config.probe.timeout = Some(Duration::from_secs(seconds));
        }

        if let Some(limit) = lookup("REELGRID_MAX_CONCURRENT_PROBES") {
            config.probe.max_concurrent =
                Some(parse_number("REELGRID_MAX_CONCURRENT_PROBES", &limit)?);
        }

        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration can drive a search.
    ///
    /// # Errors
    ///
    /// - `MovieSearchError::Configuration` - If any setting is unusable
    pub fn validate(&self) -> Result<(), MovieSearchError> {
        if self.catalog.api_key.trim().is_empty() {
            return Err(MovieSearchError::Configuration {
                reason: "REELGRID_OMDB_API_KEY is not set".to_string(),
            });
        }

        let base = url::Url::parse(&self.catalog.base_url).map_err(|e| {
            MovieSearchError::Configuration {
                reason: format!("invalid catalog base URL '{}': {e}", self.catalog.base_url),
            }
        })?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(MovieSearchError::Configuration {
                reason: format!("catalog base URL must be http(s), got '{}'", base.scheme()),
            });
        }

        if self.catalog.title_max_chars == 0 {
            return Err(MovieSearchError::Configuration {
                reason: "title length limit must be positive".to_string(),
            });
        }

        if self.probe.max_concurrent == Some(0) {
            return Err(MovieSearchError::Configuration {
                reason: "probe concurrency limit must be positive".to_string(),
            });
        }

        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, MovieSearchError> {
    value
        .trim()
        .parse()
        .map_err(|_| MovieSearchError::Configuration {
            reason: format!("{name} must be a non-negative integer, got '{value}'"),
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config_values() {
        let config = ReelgridConfig::default();

        assert_eq!(config.catalog.base_url, "http://www.omdbapi.com");
        assert_eq!(config.catalog.title_max_chars, 40);
        assert!(config.catalog.api_key.is_empty());
        assert_eq!(config.probe.timeout, None);
        assert_eq!(config.probe.max_concurrent, None);
    }

    #[test]
    fn test_missing_api_key_is_rejected() {
        let result = ReelgridConfig::from_lookup(lookup_from(&[]));
        assert!(matches!(
            result,
            Err(MovieSearchError::Configuration { .. })
        ));
    }

    #[test]
    fn test_env_override() {
        let config = ReelgridConfig::from_lookup(lookup_from(&[
            ("REELGRID_OMDB_API_KEY", "secret"),
            ("REELGRID_OMDB_BASE_URL", "http://127.0.0.1:8080"),
            ("REELGRID_TITLE_MAX_CHARS", "25"),
            ("REELGRID_PROBE_TIMEOUT_SECS", "5"),
            ("REELGRID_MAX_CONCURRENT_PROBES", "4"),
        ]))
        .unwrap();

        assert_eq!(config.catalog.api_key, "secret");
        assert_eq!(config.catalog.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.catalog.title_max_chars, 25);
        assert_eq!(config.probe.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.probe.max_concurrent, Some(4));
    }

    #[test]
    fn test_malformed_values_are_rejected() {
        let bad_timeout = ReelgridConfig::from_lookup(lookup_from(&[
            ("REELGRID_OMDB_API_KEY", "secret"),
            ("REELGRID_PROBE_TIMEOUT_SECS", "soon"),
        ]));
        assert!(bad_timeout.is_err());

        let zero_cap = ReelgridConfig::from_lookup(lookup_from(&[
            ("REELGRID_OMDB_API_KEY", "secret"),
            ("REELGRID_MAX_CONCURRENT_PROBES", "0"),
        ]));
        assert!(zero_cap.is_err());

        let bad_url = ReelgridConfig::from_lookup(lookup_from(&[
            ("REELGRID_OMDB_API_KEY", "secret"),
            ("REELGRID_OMDB_BASE_URL", "ftp://example.com"),
        ]));
        assert!(bad_url.is_err());
    }

    #[test]
    fn test_debug_output_redacts_api_key() {
        let mut config = ReelgridConfig::default();
        config.catalog.api_key = "super-secret-key".to_string();

        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret-key"));
        assert!(rendered.contains("<redacted>"));
    }
}
