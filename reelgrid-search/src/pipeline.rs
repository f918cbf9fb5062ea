//! Search pipeline: catalog lookup, concurrent poster probing, filtering.

use std::sync::Arc;

use futures::future::join_all;
use futures::stream::{self, StreamExt};
use tracing::{debug, info};

use crate::config::ReelgridConfig;
use crate::errors::MovieSearchError;
use crate::probe::{HttpPosterProber, PosterProber, ProbeOutcome};
use crate::providers::{MovieCatalog, OmdbCatalog};
use crate::types::{CandidateResult, SearchOutcome, SearchQuery, ValidatedResult};

/// Runs one search from query to displayable results.
///
/// Every probe settles before filtering, so a failing poster never aborts
/// the search and completion order never affects result order.
#[derive(Debug, Clone)]
pub struct SearchPipeline {
    catalog: Arc<dyn MovieCatalog>,
    prober: Arc<dyn PosterProber>,
    title_max_chars: usize,
    max_concurrent_probes: Option<usize>,
}

impl SearchPipeline {
    /// Creates a pipeline over explicit catalog and prober implementations.
    pub fn new(
        config: &ReelgridConfig,
        catalog: Arc<dyn MovieCatalog>,
        prober: Arc<dyn PosterProber>,
    ) -> Self {
        Self {
            catalog,
            prober,
            title_max_chars: config.catalog.title_max_chars,
            max_concurrent_probes: config.probe.max_concurrent,
        }
    }

    /// Creates a pipeline talking to the configured OMDb endpoint.
    ///
    /// # Errors
    ///
    /// - `MovieSearchError::Configuration` - If the configuration is invalid
    pub fn from_config(config: &ReelgridConfig) -> Result<Self, MovieSearchError> {
        config.validate()?;

        let client = reqwest::Client::new();
        let catalog = OmdbCatalog::new(client.clone(), config.catalog.clone());
        let prober = HttpPosterProber::new(client, &config.probe);

        Ok(Self::new(config, Arc::new(catalog), Arc::new(prober)))
    }

    /// Search the catalog and keep the candidates with reachable posters.
    ///
    /// # Errors
    ///
    /// - `MovieSearchError::NetworkError` - Catalog could not be reached
    /// - `MovieSearchError::UnexpectedStatus` - Catalog answered with a non-success status
    /// - `MovieSearchError::ParseError` - Catalog body was malformed
    pub async fn run(&self, query: &SearchQuery) -> Result<SearchOutcome, MovieSearchError> {
        let candidates = self.catalog.search(query).await?;
        if candidates.is_empty() {
            info!(query = %query, "No movies found");
            return Ok(SearchOutcome::Empty);
        }

        debug!(query = %query, candidates = candidates.len(), "Probing posters");
        let outcomes = self.probe_all(&candidates).await;

        let validated: Vec<ValidatedResult> = candidates
            .into_iter()
            .zip(outcomes)
            .filter(|(_, outcome)| outcome.is_reachable())
            .map(|(candidate, _)| ValidatedResult::from_candidate(candidate, self.title_max_chars))
            .collect();

        info!(query = %query, kept = validated.len(), "Filtered movies");

        if validated.is_empty() {
            Ok(SearchOutcome::Empty)
        } else {
            Ok(SearchOutcome::Found(validated))
        }
    }

    /// Probe every candidate, preserving input order in the returned outcomes.
    async fn probe_all(&self, candidates: &[CandidateResult]) -> Vec<ProbeOutcome> {
        // Collected so the run future stays `Send` for `tokio::spawn`.
        let probes: Vec<_> = candidates
            .iter()
            .map(|candidate| self.prober.probe(&candidate.poster_url))
            .collect();

        match self.max_concurrent_probes {
            Some(limit) => stream::iter(probes).buffered(limit.max(1)).collect().await,
            None => join_all(probes).await,
        }
    }
}
