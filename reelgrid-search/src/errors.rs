//! Error types for movie search functionality.

use thiserror::Error;

/// Errors that can occur while looking up movies in the catalog.
///
/// Poster probing never produces one of these; an unreachable poster is a
/// regular [`crate::ProbeOutcome`].
#[derive(Debug, Error)]
pub enum MovieSearchError {
    /// Configuration is missing or invalid.
    #[error("Configuration error: {reason}")]
    Configuration {
        /// The reason the configuration was rejected
        reason: String,
    },

    /// The query was empty after trimming.
    #[error("Invalid query: {reason}")]
    InvalidQuery {
        /// The reason the query was rejected
        reason: String,
    },

    /// Network communication error occurred while reaching the catalog.
    #[error("Network error: {reason}")]
    NetworkError {
        /// The reason for the network error
        reason: String,
    },

    /// Catalog answered with a non-success HTTP status.
    #[error("Catalog returned HTTP {status}")]
    UnexpectedStatus {
        /// The HTTP status code returned by the catalog
        status: u16,
    },

    /// Failed to parse the catalog response body.
    #[error("Parse error: {reason}")]
    ParseError {
        /// The reason for the parse error
        reason: String,
    },
}
