//! Search generation tracking.
//!
//! Every search started from the controller advances the generation. A
//! pipeline completion may only render while its token is still current,
//! so a slow, superseded search can never clobber newer results.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies the search a completion belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GenerationToken(u64);

impl GenerationToken {
    /// Raw generation number.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for GenerationToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shared counter of the most recently started search.
#[derive(Debug, Clone, Default)]
pub struct SearchGeneration {
    current: Arc<AtomicU64>,
}

impl SearchGeneration {
    /// Creates a counter at generation zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new generation, invalidating every earlier token.
    pub fn advance(&self) -> GenerationToken {
        GenerationToken(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Token of the most recently started search.
    pub fn current(&self) -> GenerationToken {
        GenerationToken(self.current.load(Ordering::SeqCst))
    }

    /// Whether `token` belongs to the most recent search.
    pub fn is_current(&self, token: GenerationToken) -> bool {
        self.current() == token
    }
}
