//! Reelgrid Search - Movie catalog lookup and poster validation

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Queries an OMDb-compatible catalog, probes every candidate's poster
//! concurrently and keeps only the candidates whose artwork is reachable.

pub mod config;
pub mod errors;
pub mod pipeline;
pub mod probe;
pub mod providers;
pub mod types;

// Re-export main types
pub use config::{CatalogConfig, ProbeConfig, ReelgridConfig};
pub use errors::MovieSearchError;
pub use pipeline::SearchPipeline;
pub use probe::{HttpPosterProber, PosterProber, ProbeOutcome};
pub use providers::{MovieCatalog, OmdbCatalog};
pub use types::{
    CandidateResult, CatalogResponse, SearchOutcome, SearchQuery, ValidatedResult, truncate_title,
};

/// Convenience type alias for Results with MovieSearchError.
pub type Result<T> = std::result::Result<T, MovieSearchError>;
