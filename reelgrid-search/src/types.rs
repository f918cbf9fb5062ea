//! Data types for movie search functionality.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::MovieSearchError;

/// Poster value the catalog uses when a title has no artwork.
pub const POSTER_PLACEHOLDER: &str = "N/A";

/// Marker appended to truncated titles.
pub const ELLIPSIS: &str = "...";

/// Non-empty search text entered by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Builds a query from raw input, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// - `MovieSearchError::InvalidQuery` - If the input is empty after trimming
    pub fn parse(raw: &str) -> Result<Self, MovieSearchError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(MovieSearchError::InvalidQuery {
                reason: "query is empty".to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the query text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Single title returned by the catalog, not yet validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateResult {
    /// Title as returned by the catalog
    #[serde(rename = "Title", default)]
    pub title: String,
    /// Poster URL, or `"N/A"` when the catalog has no artwork
    #[serde(rename = "Poster", default)]
    pub poster_url: String,
    /// Release year, possibly a range for series
    #[serde(rename = "Year", default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    /// IMDb identifier
    #[serde(rename = "imdbID", default, skip_serializing_if = "Option::is_none")]
    pub imdb_id: Option<String>,
}

impl CandidateResult {
    /// Creates a candidate with only title and poster set.
    pub fn new(title: impl Into<String>, poster_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            poster_url: poster_url.into(),
            year: None,
            imdb_id: None,
        }
    }

    /// Whether the catalog reported no artwork for this title.
    pub fn has_placeholder_poster(&self) -> bool {
        let poster = self.poster_url.trim();
        poster.is_empty() || poster == POSTER_PLACEHOLDER
    }
}

/// Candidate whose poster was confirmed reachable, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedResult {
    /// Display title, truncated to the configured length
    pub title: String,
    /// Reachable poster URL
    pub poster_url: String,
}

impl ValidatedResult {
    /// Converts a candidate whose poster probe succeeded.
    pub fn from_candidate(candidate: CandidateResult, title_max_chars: usize) -> Self {
        Self {
            title: truncate_title(&candidate.title, title_max_chars),
            poster_url: candidate.poster_url,
        }
    }
}

/// Raw body of an OMDb `?s=` search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    /// Matched titles, absent when nothing matched
    #[serde(rename = "Search", default)]
    pub search: Option<Vec<CandidateResult>>,
    /// `"True"` or `"False"`
    #[serde(rename = "Response", default)]
    pub response: String,
    /// Error message when `response` is `"False"`
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl CatalogResponse {
    /// Whether the catalog flagged the lookup as unsuccessful.
    pub fn is_negative(&self) -> bool {
        self.response.eq_ignore_ascii_case("false")
    }
}

/// Final result of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// No candidates, or none survived probing
    Empty,
    /// Validated results in catalog order
    Found(Vec<ValidatedResult>),
}

impl SearchOutcome {
    /// Number of results that will be rendered as cards.
    pub fn len(&self) -> usize {
        match self {
            SearchOutcome::Empty => 0,
            SearchOutcome::Found(results) => results.len(),
        }
    }

    /// Whether the outcome renders as the empty state.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Truncates `title` to `max_chars` characters, appending `"..."` when cut.
///
/// Counts Unicode scalar values so multi-byte titles are never split.
pub fn truncate_title(title: &str, max_chars: usize) -> String {
    match title.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &title[..cut]),
        None => title.to_string(),
    }
}
