//! In-memory catalog and prober for tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use super::MovieCatalog;
use crate::errors::MovieSearchError;
use crate::probe::{PosterProber, ProbeOutcome};
use crate::types::{CandidateResult, SearchQuery};

#[derive(Debug, Clone)]
enum CatalogEntry {
    Results {
        candidates: Vec<CandidateResult>,
        delay: Duration,
    },
    Status(u16),
}

/// Catalog answering from a fixed query table. Unknown queries match nothing.
#[derive(Debug, Default)]
pub struct StaticCatalog {
    entries: HashMap<String, CatalogEntry>,
    calls: AtomicUsize,
}

impl StaticCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `query` with `candidates`.
    pub fn with_results(self, query: &str, candidates: Vec<CandidateResult>) -> Self {
        self.with_delayed_results(query, candidates, Duration::ZERO)
    }

    /// Answer `query` with `candidates` after `delay`.
    pub fn with_delayed_results(
        mut self,
        query: &str,
        candidates: Vec<CandidateResult>,
        delay: Duration,
    ) -> Self {
        self.entries.insert(
            query.to_string(),
            CatalogEntry::Results { candidates, delay },
        );
        self
    }

    /// Answer `query` as if the catalog returned HTTP `status`.
    pub fn with_status(mut self, query: &str, status: u16) -> Self {
        self.entries.insert(query.to_string(), CatalogEntry::Status(status));
        self
    }

    /// Number of searches issued so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MovieCatalog for StaticCatalog {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<CandidateResult>, MovieSearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.entries.get(query.as_str()).cloned() {
            Some(CatalogEntry::Results { candidates, delay }) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                Ok(candidates)
            }
            Some(CatalogEntry::Status(status)) => {
                Err(MovieSearchError::UnexpectedStatus { status })
            }
            None => Ok(Vec::new()),
        }
    }
}

/// Prober that treats a fixed set of URLs as reachable.
#[derive(Debug, Default)]
pub struct StaticProber {
    reachable: HashSet<String>,
    delays: HashMap<String, Duration>,
    probes: AtomicUsize,
}

impl StaticProber {
    /// Creates a prober for which every URL in `urls` is reachable.
    pub fn reachable<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            reachable: urls.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Delay the answer for `url`.
    pub fn with_delay(mut self, url: &str, delay: Duration) -> Self {
        self.delays.insert(url.to_string(), delay);
        self
    }

    /// Number of probes issued so far.
    pub fn probes(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PosterProber for StaticProber {
    async fn probe(&self, poster_url: &str) -> ProbeOutcome {
        self.probes.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delays.get(poster_url) {
            tokio::time::sleep(*delay).await;
        }

        if self.reachable.contains(poster_url) {
            ProbeOutcome::Reachable
        } else {
            ProbeOutcome::Unreachable {
                reason: "HTTP 404".to_string(),
            }
        }
    }
}
