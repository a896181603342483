//! # CineSim
//!
//! Content-based movie recommendation engine over precomputed embeddings.
//!
//! CineSim answers one question: given a movie title, which movies are
//! most similar? Similarity comes from a precomputed embedding table
//! (one vector per catalog row) queried through an HNSW nearest-neighbor
//! index, and each result's poster is resolved from the TMDB metadata
//! API with graceful degradation.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cinesim::{Recommender, Config};
//!
//! let engine = Recommender::open(Config {
//!     catalog_path: "movies.csv".into(),
//!     embeddings_path: "movie_embeddings.bin".into(),
//!     api_key: std::env::var("TMDB_API_KEY")?,
//!     ..Default::default()
//! })?;
//!
//! let results = engine.recommend("Inception")?;
//! for rec in &results {
//!     println!("{} (distance {:.3})", rec.title, rec.distance);
//! }
//!
//! // Parallel sequences for display: titles + poster URLs (placeholder
//! // substituted where no poster resolved)
//! let titles = results.titles();
//! let posters = results.poster_urls_or_placeholder();
//! ```
//!
//! ## Key Concepts
//!
//! ### Catalog
//!
//! The set of known movie titles, loaded from a CSV with a `title`
//! column. Row order defines the **row index**, which aligns the
//! catalog with the embedding table and the neighbor index.
//!
//! ### Embedding table
//!
//! A precomputed, row-major f32 matrix — one fixed-length vector per
//! catalog row — loaded from a versioned bincode artifact. It is the
//! source of truth; the HNSW graph is rebuilt from it at open.
//!
//! ### Poster resolution
//!
//! Recommendation display titles are searched against TMDB. Failures
//! never fail a query: they degrade to an absent poster, substituted
//! with a placeholder image at display time, and per-title outcomes are
//! cached for the session.
//!
//! ## Thread Safety
//!
//! `Recommender` is `Send + Sync` and can be shared across threads
//! using `Arc`. All loaded state is immutable; the poster cache is the
//! only interior mutability and is mutex-guarded.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

// ============================================================================
// Module declarations
// ============================================================================

mod config;
mod error;
mod recommender;
mod types;

/// Catalog of movie titles and their row positions.
pub mod catalog;
/// Precomputed embedding table and artifact format.
pub mod embedding;
/// Poster resolution against external metadata services.
pub mod poster;
/// Title validation, normalization, and display casing.
pub mod title;
/// Neighbor index for nearest-vector queries.
pub mod vector;

// ============================================================================
// Public API re-exports
// ============================================================================

// Main engine interface
pub use recommender::{Recommendation, Recommendations, Recommender};

// Configuration
pub use config::{Config, IndexParams, DEFAULT_PLACEHOLDER_URL};

// Error handling
pub use error::{ArtifactError, CineSimError, MetadataError, Result, ValidationError};

// Core types
pub use types::{Embedding, RowIndex, TmdbMovieId};

// Component types (for advanced users and custom backends)
pub use catalog::Catalog;
pub use embedding::EmbeddingTable;
pub use poster::{MetadataSource, MovieDetails, PosterResolver, TmdbClient};
pub use vector::{HnswIndex, NeighborIndex};

// ============================================================================
// Prelude module for convenient imports
// ============================================================================

/// Convenient imports for common CineSim usage.
///
/// ```rust
/// use cinesim::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{CineSimError, Result};
    pub use crate::recommender::{Recommendation, Recommendations, Recommender};
    pub use crate::types::RowIndex;
}
