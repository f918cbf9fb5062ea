//! Poster reachability checks.
//!
//! The catalog sometimes hands out dead or placeholder artwork links. A
//! probe fetches the poster and reports whether it answered with a success
//! status; every failure path is folded into [`ProbeOutcome::Unreachable`].

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::ProbeConfig;
use crate::types::POSTER_PLACEHOLDER;

/// Result of probing one poster URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Poster answered with a success status
    Reachable,
    /// Poster is missing, answered non-success, or could not be fetched
    Unreachable {
        /// Why the poster was rejected
        reason: String,
    },
}

impl ProbeOutcome {
    /// Whether the poster can be displayed.
    pub fn is_reachable(&self) -> bool {
        matches!(self, ProbeOutcome::Reachable)
    }
}

/// Trait for poster reachability checks.
#[async_trait]
pub trait PosterProber: Send + Sync + std::fmt::Debug {
    /// Probe a poster URL. Never fails; failures are returned as values.
    async fn probe(&self, poster_url: &str) -> ProbeOutcome;
}

/// Probes posters with a plain HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpPosterProber {
    client: reqwest::Client,
    timeout: Option<Duration>,
}

impl HttpPosterProber {
    /// Create a prober sharing an existing HTTP client.
    pub fn new(client: reqwest::Client, config: &ProbeConfig) -> Self {
        Self {
            client,
            timeout: config.timeout,
        }
    }
}

#[async_trait]
impl PosterProber for HttpPosterProber {
    async fn probe(&self, poster_url: &str) -> ProbeOutcome {
        let poster_url = poster_url.trim();
        if poster_url.is_empty() || poster_url == POSTER_PLACEHOLDER {
            debug!(poster_url, "Skipping placeholder poster");
            return ProbeOutcome::Unreachable {
                reason: "no poster available".to_string(),
            };
        }

        let mut request = self.client.get(poster_url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        match request.send().await {
            Ok(response) if response.status().is_success() => ProbeOutcome::Reachable,
            Ok(response) => {
                let status = response.status().as_u16();
                warn!(poster_url, status, "Poster URL answered with error status");
                ProbeOutcome::Unreachable {
                    reason: format!("HTTP {status}"),
                }
            }
            Err(e) => {
                warn!(poster_url, error = %e, "Error while checking poster URL");
                ProbeOutcome::Unreachable {
                    reason: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prober() -> HttpPosterProber {
        HttpPosterProber::new(reqwest::Client::new(), &ProbeConfig::default())
    }

    #[tokio::test]
    async fn test_placeholder_is_unreachable_without_request() {
        let outcome = prober().probe("N/A").await;
        assert!(!outcome.is_reachable());

        let outcome = prober().probe("   ").await;
        assert!(!outcome.is_reachable());
    }

    #[tokio::test]
    async fn test_malformed_url_is_unreachable() {
        let outcome = prober().probe("not a url at all").await;
        assert!(matches!(outcome, ProbeOutcome::Unreachable { .. }));
    }
}
