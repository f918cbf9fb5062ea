//! Catalog providers for movie lookup.

use async_trait::async_trait;

use crate::errors::MovieSearchError;
use crate::types::{CandidateResult, SearchQuery};

#[cfg(any(test, feature = "test-utils"))]
pub mod fixtures;
pub mod omdb;

#[cfg(any(test, feature = "test-utils"))]
pub use fixtures::{StaticCatalog, StaticProber};
pub use omdb::OmdbCatalog;

/// Trait for movie catalog backends.
///
/// Implementations return every candidate matching the query, in the order
/// the backend ranked them. "No matches" is an empty list, not an error.
#[async_trait]
pub trait MovieCatalog: Send + Sync + std::fmt::Debug {
    /// Search the catalog by title.
    ///
    /// # Errors
    /// - `MovieSearchError::NetworkError` - Catalog could not be reached
    /// - `MovieSearchError::UnexpectedStatus` - Catalog answered with a non-success status
    /// - `MovieSearchError::ParseError` - Response body was not understood
    async fn search(&self, query: &SearchQuery) -> Result<Vec<CandidateResult>, MovieSearchError>;
}
