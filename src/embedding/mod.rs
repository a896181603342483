//! Precomputed embedding table and its on-disk artifact format.
//!
//! The table is the source of truth for similarity: the HNSW graph is
//! rebuilt from it at load rather than persisted (see [`crate::vector`]).
//! The artifact is a versioned bincode file holding the declared
//! dimension and the row-major f32 data.
//!
//! The loader verifies the format version and that the data length is a
//! whole number of rows. Alignment with the catalog (equal row counts)
//! is checked by [`crate::Recommender::open`], which sees both sides.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ArtifactError;
use crate::types::RowIndex;

/// Artifact format version this build reads and writes.
pub const ARTIFACT_VERSION: u32 = 1;

/// On-disk layout of the embedding artifact.
#[derive(Serialize, Deserialize)]
struct EmbeddingArtifact {
    version: u32,
    dimension: usize,
    data: Vec<f32>,
}

/// Ordered, row-major matrix of precomputed embedding vectors.
///
/// Row i corresponds to catalog row i. Dimensionality is fixed at load
/// and constant for the life of the table.
#[derive(Debug, Clone)]
pub struct EmbeddingTable {
    dimension: usize,
    data: Vec<f32>,
}

impl EmbeddingTable {
    /// Loads an embedding table from a bincode artifact.
    ///
    /// # Errors
    /// Returns `ArtifactError` if the file is unreadable, the format
    /// version differs from [`ARTIFACT_VERSION`], the dimension is zero,
    /// or the data length is not a multiple of the dimension.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let file = File::open(path)?;
        let artifact: EmbeddingArtifact = bincode::deserialize_from(BufReader::new(file))?;

        if artifact.version != ARTIFACT_VERSION {
            return Err(ArtifactError::VersionMismatch {
                expected: ARTIFACT_VERSION,
                found: artifact.version,
            });
        }
        if artifact.dimension == 0 {
            return Err(ArtifactError::InvalidDimension);
        }
        if artifact.data.len() % artifact.dimension != 0 {
            return Err(ArtifactError::Truncated {
                len: artifact.data.len(),
                dimension: artifact.dimension,
            });
        }

        let table = Self {
            dimension: artifact.dimension,
            data: artifact.data,
        };
        debug!(
            rows = table.len(),
            dimension = table.dimension,
            path = %path.display(),
            "Embedding table loaded"
        );
        Ok(table)
    }

    /// Writes the table to a bincode artifact.
    ///
    /// Emits the format [`load`](Self::load) reads. Intended for
    /// artifact producers and test fixtures.
    pub fn save(&self, path: &Path) -> Result<(), ArtifactError> {
        let file = File::create(path)?;
        let artifact = EmbeddingArtifact {
            version: ARTIFACT_VERSION,
            dimension: self.dimension,
            data: self.data.clone(),
        };
        bincode::serialize_into(BufWriter::new(file), &artifact)?;
        Ok(())
    }

    /// Builds a table from individual vectors.
    ///
    /// # Errors
    /// Returns `ArtifactError` if `dimension` is zero or any vector has
    /// a different length.
    pub fn from_vectors(dimension: usize, vectors: Vec<Vec<f32>>) -> Result<Self, ArtifactError> {
        if dimension == 0 {
            return Err(ArtifactError::InvalidDimension);
        }

        let mut data = Vec::with_capacity(dimension * vectors.len());
        for vector in &vectors {
            if vector.len() != dimension {
                return Err(ArtifactError::DimensionMismatch {
                    expected: dimension,
                    got: vector.len(),
                });
            }
            data.extend_from_slice(vector);
        }

        Ok(Self { dimension, data })
    }

    /// Returns the embedding vector at the given row, if in range.
    pub fn row(&self, row: RowIndex) -> Option<&[f32]> {
        let start = row.as_usize().checked_mul(self.dimension)?;
        let end = start.checked_add(self.dimension)?;
        self.data.get(start..end)
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        if self.dimension == 0 {
            0
        } else {
            self.data.len() / self.dimension
        }
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the vector dimension.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Iterates over rows in order as `(RowIndex, vector)` pairs.
    pub fn rows(&self) -> impl Iterator<Item = (RowIndex, &[f32])> {
        self.data
            .chunks_exact(self.dimension)
            .enumerate()
            .map(|(i, chunk)| (RowIndex(i), chunk))
    }
}
