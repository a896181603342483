//! Neighbor index abstraction for similarity queries.
//!
//! This module provides a trait-based abstraction over nearest-neighbor
//! indexes, allowing different ANN (Approximate Nearest Neighbor)
//! backends. The primary implementation uses [`hnsw_rs`].
//!
//! The embedding table is the **source of truth**. The HNSW graph is a
//! derived, rebuildable structure: it is constructed deterministically
//! from the table at open and never serialized, so there is no graph
//! artifact to drift out of alignment with the catalog.

mod hnsw;

pub use hnsw::HnswIndex;

use crate::error::Result;
use crate::types::RowIndex;

/// Read-only nearest-neighbor queries over the embedding table.
///
/// Implementations must be `Send + Sync` for use inside
/// [`crate::Recommender`]. The index is built once at open and only
/// queried afterwards, so the trait has no mutation surface.
///
/// Tie-breaks between equidistant rows are whatever the backend's
/// traversal yields; results are stable per underlying implementation.
pub trait NeighborIndex: Send + Sync {
    /// Finds the k nearest rows to the query vector.
    ///
    /// Returns `(row, distance)` pairs sorted by distance ascending
    /// (closest first). Distance metric is cosine distance:
    /// 0.0 = identical, 2.0 = opposite. Returns fewer than k pairs when
    /// the index holds fewer than k rows.
    fn nearest(&self, query: &[f32], k: usize) -> Result<Vec<(RowIndex, f32)>>;

    /// Returns the number of indexed rows.
    fn len(&self) -> usize;

    /// Returns true if the index holds no rows.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the vector dimension the index was built with.
    fn dimension(&self) -> usize;
}
