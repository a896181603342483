//! Poster resolution against an external metadata service.
//!
//! The [`MetadataSource`] trait is the seam to the outside world: the
//! default implementation is [`TmdbClient`], and tests inject stubs.
//! [`PosterResolver`] sits on top and is infallible by contract: any
//! service failure is logged and degraded to absent fields, and results
//! (including absent ones) are reused within a session through a
//! bounded FIFO cache.

mod cache;
mod tmdb;

pub use tmdb::{TmdbClient, TMDB_API_BASE, TMDB_IMAGE_BASE};

use std::sync::Mutex;

use tracing::{trace, warn};

use crate::error::MetadataError;
use crate::types::TmdbMovieId;

use cache::PosterCache;

/// Poster lookup outcome for one title.
///
/// Either or both fields may be absent: the service may be unreachable,
/// the search may return no results, or the first result may carry no
/// poster path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieDetails {
    /// Identifier of the first search result, if any.
    pub movie_id: Option<TmdbMovieId>,

    /// Full poster image URL, if resolvable.
    pub poster_url: Option<String>,
}

impl MovieDetails {
    /// Details with both fields absent.
    pub fn absent() -> Self {
        Self::default()
    }

    /// Returns true if a poster URL was resolved.
    pub fn has_poster(&self) -> bool {
        self.poster_url.is_some()
    }
}

/// External movie metadata lookup keyed by display title.
///
/// Implementations must be `Send + Sync` for use inside
/// [`crate::Recommender`]. Errors are reported in the
/// [`MetadataError`] taxonomy; the resolver degrades them, so an
/// implementation should fail fast rather than retry internally.
pub trait MetadataSource: Send + Sync {
    /// Searches the service by title and extracts the first result's
    /// id and poster URL.
    fn movie_details(&self, title: &str) -> Result<MovieDetails, MetadataError>;
}

/// Degrading, caching front for a [`MetadataSource`].
///
/// `resolve` never fails: failures become [`MovieDetails::absent`].
/// Per-title results are cached for the session, capped at the
/// configured capacity with FIFO eviction. Absent results are cached
/// like hits so a dead service is not re-queried per repeat title.
pub struct PosterResolver {
    source: Box<dyn MetadataSource>,
    cache: Mutex<PosterCache>,
}

impl PosterResolver {
    /// Creates a resolver over the given source with a bounded cache.
    pub fn new(source: Box<dyn MetadataSource>, cache_capacity: usize) -> Self {
        Self {
            source,
            cache: Mutex::new(PosterCache::new(cache_capacity)),
        }
    }

    /// Resolves poster details for a display title.
    ///
    /// Checks the session cache first; on a miss, queries the source
    /// and caches whatever came back. A failed lookup is logged at warn
    /// level and degraded to absent fields.
    pub fn resolve(&self, title: &str) -> MovieDetails {
        if let Ok(cache) = self.cache.lock() {
            if let Some(hit) = cache.get(title) {
                trace!(title, "Poster cache hit");
                return hit;
            }
        }

        let details = match self.source.movie_details(title) {
            Ok(details) => details,
            Err(e) => {
                warn!(title, error = %e, "Poster lookup failed; degrading to no poster");
                MovieDetails::absent()
            }
        };

        // A poisoned lock only costs caching, never the query
        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(title, details.clone());
        }

        details
    }
}

impl std::fmt::Debug for PosterResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PosterResolver").finish_non_exhaustive()
    }
}
