//! Configuration types for CineSim.
//!
//! The [`Config`] struct controls engine behavior including:
//! - Artifact locations (catalog CSV, embedding table)
//! - TMDB credential and placeholder image
//! - Neighbor count and poster cache capacity
//! - HNSW index tuning via [`IndexParams`]
//!
//! # Example
//! ```rust
//! use cinesim::Config;
//!
//! // Use defaults (artifacts in the working directory)
//! let config = Config::default();
//!
//! // Customize for deployment
//! let config = Config {
//!     catalog_path: "/data/movies.csv".into(),
//!     embeddings_path: "/data/movie_embeddings.bin".into(),
//!     api_key: "tmdb-key".into(),
//!     ..Default::default()
//! };
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Default placeholder shown when no poster is resolvable.
pub const DEFAULT_PLACEHOLDER_URL: &str =
    "https://github.com/movie-recommendation-team/Movie-Recommendation-System/blob/main/No%20img.jpg?raw=true";

/// Engine configuration options.
///
/// All fields have sensible defaults. Use struct update syntax to
/// override specific settings:
///
/// ```rust
/// use cinesim::Config;
///
/// let config = Config {
///     neighbor_count: 6,
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Debug)]
pub struct Config {
    /// Path to the catalog CSV (header row with a `title` column).
    pub catalog_path: PathBuf,

    /// Path to the embedding table artifact.
    pub embeddings_path: PathBuf,

    /// TMDB API key, passed as a query parameter on search requests.
    ///
    /// Required by [`crate::Recommender::open`]; not required when a
    /// custom metadata source is injected via
    /// [`crate::Recommender::with_metadata_source`].
    pub api_key: String,

    /// How many neighbors to request per query, including the query row.
    ///
    /// The query row is excluded from results, so a query returns at
    /// most `neighbor_count - 1` recommendations. Default: 10.
    pub neighbor_count: usize,

    /// Maximum number of titles held in the poster cache.
    ///
    /// The cache is session-scoped with FIFO eviction. Default: 1024.
    pub poster_cache_capacity: usize,

    /// Image URL substituted when a poster cannot be resolved.
    pub placeholder_url: String,

    /// HNSW index tuning parameters.
    pub index: IndexParams,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("movies.csv"),
            embeddings_path: PathBuf::from("movie_embeddings.bin"),
            api_key: String::new(),
            neighbor_count: 10,
            poster_cache_capacity: 1024,
            placeholder_url: DEFAULT_PLACEHOLDER_URL.to_string(),
            index: IndexParams::default(),
        }
    }
}

impl Config {
    /// Creates a new Config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the configuration.
    ///
    /// Called automatically by [`crate::Recommender::open`]. You can also
    /// call this explicitly to check configuration before opening.
    ///
    /// # Errors
    /// Returns `ValidationError` if:
    /// - `neighbor_count` < 2 (the query row is excluded, so fewer would
    ///   always yield empty results)
    /// - `poster_cache_capacity` is 0
    /// - index parameters are out of range (see [`IndexParams::validate`])
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.neighbor_count < 2 {
            return Err(ValidationError::invalid_field(
                "neighbor_count",
                "must be at least 2 (the query row is excluded from results)",
            ));
        }

        if self.poster_cache_capacity == 0 {
            return Err(ValidationError::invalid_field(
                "poster_cache_capacity",
                "must be greater than 0",
            ));
        }

        self.index.validate()
    }
}

/// HNSW index tuning parameters.
///
/// Defaults are sized for catalogs of a few thousand movies. The graph
/// is built once at open and never mutated, so build-time parameters
/// matter more than in an incrementally updated index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexParams {
    /// Maximum connections per graph node (M). Must be 1..=256.
    pub max_nb_connection: usize,

    /// Candidate list size during construction.
    pub ef_construction: usize,

    /// Candidate list size during search. Higher improves recall at the
    /// cost of query latency.
    pub ef_search: usize,

    /// Maximum number of graph layers.
    pub max_layer: usize,
}

impl Default for IndexParams {
    fn default() -> Self {
        Self {
            max_nb_connection: 16,
            ef_construction: 200,
            ef_search: 64,
            max_layer: 16,
        }
    }
}

impl IndexParams {
    /// Validates index parameters.
    ///
    /// # Errors
    /// Returns `ValidationError` if any parameter is 0, or if
    /// `max_nb_connection` exceeds 256 (a hard limit in hnsw_rs).
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_nb_connection == 0 || self.max_nb_connection > 256 {
            return Err(ValidationError::invalid_field(
                "index.max_nb_connection",
                "must be between 1 and 256",
            ));
        }
        if self.ef_construction == 0 {
            return Err(ValidationError::invalid_field(
                "index.ef_construction",
                "must be greater than 0",
            ));
        }
        if self.ef_search == 0 {
            return Err(ValidationError::invalid_field(
                "index.ef_search",
                "must be greater than 0",
            ));
        }
        if self.max_layer == 0 {
            return Err(ValidationError::invalid_field(
                "index.max_layer",
                "must be greater than 0",
            ));
        }
        Ok(())
    }
}
