//! HNSW neighbor index implementation using hnsw_rs.
//!
//! Wraps `hnsw_rs::Hnsw<f32, DistCosine>` built once from an
//! [`EmbeddingTable`]. Row indices double as the graph's data ids, so
//! no id mapping layer is needed: the table is dense and positional.
//!
//! # Thread Safety
//!
//! The `hnsw_rs::Hnsw` graph uses `parking_lot::RwLock` internally and
//! is only read after construction, so queries take `&self` with no
//! locking of our own.

use hnsw_rs::prelude::*;

use crate::config::IndexParams;
use crate::embedding::EmbeddingTable;
use crate::error::{CineSimError, Result};
use crate::types::RowIndex;

use super::NeighborIndex;

/// HNSW neighbor index backed by `hnsw_rs`.
///
/// Built from the embedding table with parallel bulk insertion; cosine
/// distance throughout.
pub struct HnswIndex {
    /// The underlying HNSW graph. Uses `'static` lifetime because
    /// all data is heap-owned (not memory-mapped).
    hnsw: Hnsw<'static, f32, DistCosine>,

    /// Vector dimension (must match all queries).
    dimension: usize,

    /// Number of indexed rows.
    rows: usize,

    /// Search-time candidate list size.
    ef_search: usize,
}

impl HnswIndex {
    /// Builds an index over every row of the table.
    ///
    /// Row indices become the graph's data ids. Building an index over
    /// an empty table succeeds; every query then returns no results.
    pub fn build(table: &EmbeddingTable, params: &IndexParams) -> Result<Self> {
        let rows = table.len();
        let hnsw = Hnsw::new(
            params.max_nb_connection,
            rows.max(1),
            params.max_layer,
            params.ef_construction,
            DistCosine,
        );

        if rows > 0 {
            let batch: Vec<(&[f32], usize)> =
                table.rows().map(|(row, vec)| (vec, row.as_usize())).collect();
            // Parallel bulk insert (uses rayon internally)
            hnsw.parallel_insert_slice(&batch);
        }

        Ok(Self {
            hnsw,
            dimension: table.dimension(),
            rows,
            ef_search: params.ef_search,
        })
    }
}

impl NeighborIndex for HnswIndex {
    fn nearest(&self, query: &[f32], k: usize) -> Result<Vec<(RowIndex, f32)>> {
        if query.len() != self.dimension {
            return Err(CineSimError::vector(format!(
                "Query dimension mismatch: expected {}, got {}",
                self.dimension,
                query.len()
            )));
        }

        if self.rows == 0 || k == 0 {
            return Ok(Vec::new());
        }

        // ef must be at least k for the traversal to keep k candidates
        let ef = self.ef_search.max(k);
        let results = self.hnsw.search(query, k, ef);

        Ok(results
            .into_iter()
            .map(|n| (RowIndex(n.d_id), n.distance))
            .collect())
    }

    fn len(&self) -> usize {
        self.rows
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
