//! OMDb catalog client.

use async_trait::async_trait;
use tracing::{debug, info};

use super::MovieCatalog;
use crate::config::CatalogConfig;
use crate::errors::MovieSearchError;
use crate::types::{CandidateResult, CatalogResponse, SearchQuery};

/// OMDb-compatible catalog reached over HTTP.
#[derive(Debug, Clone)]
pub struct OmdbCatalog {
    client: reqwest::Client,
    config: CatalogConfig,
}

impl OmdbCatalog {
    /// Create a catalog client sharing an existing HTTP client.
    pub fn new(client: reqwest::Client, config: CatalogConfig) -> Self {
        Self { client, config }
    }

    /// Builds the search URL for `query`.
    fn search_url(&self, query: &SearchQuery) -> String {
        format!(
            "{}/?apikey={}&s={}",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(&self.config.api_key),
            urlencoding::encode(query.as_str())
        )
    }

    /// Same URL with the key masked, for logs.
    fn redacted_url(&self, query: &SearchQuery) -> String {
        format!(
            "{}/?apikey=***&s={}",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(query.as_str())
        )
    }
}

#[async_trait]
impl MovieCatalog for OmdbCatalog {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<CandidateResult>, MovieSearchError> {
        info!(url = %self.redacted_url(query), "Calling catalog");

        let response = self
            .client
            .get(self.search_url(query))
            .send()
            .await
            .map_err(|e| MovieSearchError::NetworkError {
                reason: format!("HTTP request failed: {}", e.without_url()),
            })?;

        let status = response.status();
        debug!(status = status.as_u16(), "Catalog response status");
        if !status.is_success() {
            return Err(MovieSearchError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body: CatalogResponse = response
            .json()
            .await
            .map_err(|e| MovieSearchError::ParseError {
                reason: format!("JSON parsing failed: {}", e.without_url()),
            })?;

        if body.is_negative() {
            debug!(
                query = %query,
                error = body.error.as_deref().unwrap_or("Unknown error"),
                "Catalog reported no matches"
            );
            return Ok(Vec::new());
        }

        Ok(body.search.unwrap_or_default())
    }
}
