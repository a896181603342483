//! Core type definitions for CineSim identifiers.
//!
//! Row identity in CineSim is positional: the catalog, the embedding
//! table, and the neighbor index are aligned by row, so a row index is
//! the only identifier an entry needs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a movie within the aligned catalog/embedding table/index.
///
/// Row indices are assigned by catalog load order and are stable for the
/// lifetime of a [`crate::Recommender`] handle.
///
/// # Example
/// ```
/// use cinesim::RowIndex;
///
/// let row = RowIndex(42);
/// assert_eq!(row.as_usize(), 42);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RowIndex(pub usize);

impl RowIndex {
    /// Creates a RowIndex from a raw position.
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw position.
    #[inline]
    pub const fn as_usize(&self) -> usize {
        self.0
    }
}

impl From<usize> for RowIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for RowIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// TMDB movie identifier.
///
/// Assigned by the external metadata service, not by this crate. Present
/// on a recommendation only when the title search succeeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TmdbMovieId(pub u64);

impl TmdbMovieId {
    /// Creates a TmdbMovieId from a raw service identifier.
    #[inline]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw service identifier.
    #[inline]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TmdbMovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Embedding vector type alias.
///
/// Embeddings are f32 vectors of fixed dimension, constant within one
/// embedding table.
pub type Embedding = Vec<f32>;
