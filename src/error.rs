//! Error types for CineSim.
//!
//! CineSim uses a hierarchical error system:
//! - `CineSimError` is the top-level error returned by all public APIs
//! - Specific error types (`ArtifactError`, `ValidationError`, `MetadataError`)
//!   provide detail
//!
//! # Error Handling Pattern
//! ```rust,ignore
//! use cinesim::{Recommender, Config, Result};
//!
//! fn example() -> Result<()> {
//!     let engine = Recommender::open(Config::default())?;
//!     let results = engine.recommend("Inception")?;
//!     Ok(())
//! }
//! ```
//!
//! Metadata (poster) failures never reach the caller of `recommend`: the
//! poster layer degrades them to absent fields. `MetadataError` is public
//! so that custom `MetadataSource` implementations can report failures
//! in the same taxonomy.

use thiserror::Error;

/// Result type alias for CineSim operations.
pub type Result<T> = std::result::Result<T, CineSimError>;

/// Top-level error enum for all CineSim operations.
///
/// This is the only error type returned by public APIs.
/// Use pattern matching to handle specific error cases.
#[derive(Debug, Error)]
pub enum CineSimError {
    /// Artifact loading error (catalog CSV, embedding table).
    #[error("Artifact error: {0}")]
    Artifact(#[from] ArtifactError),

    /// Input validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// External metadata service error.
    #[error("Metadata error: {0}")]
    Metadata(#[from] MetadataError),

    /// Configuration error.
    #[error("Configuration error: {reason}")]
    Config {
        /// Description of what's wrong with the configuration.
        reason: String,
    },

    /// General I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Vector index error (HNSW operations).
    #[error("Vector index error: {0}")]
    Vector(String),
}

impl CineSimError {
    /// Creates a configuration error with the given reason.
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Creates a vector index error with the given message.
    pub fn vector(msg: impl Into<String>) -> Self {
        Self::Vector(msg.into())
    }

    /// Returns true if this is an artifact error.
    pub fn is_artifact(&self) -> bool {
        matches!(self, Self::Artifact(_))
    }

    /// Returns true if this is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is a metadata service error.
    pub fn is_metadata(&self) -> bool {
        matches!(self, Self::Metadata(_))
    }

    /// Returns true if this is a vector index error.
    pub fn is_vector(&self) -> bool {
        matches!(self, Self::Vector(_))
    }
}

/// Artifact loading errors.
///
/// These errors indicate problems with the catalog CSV or the embedding
/// artifact. They surface from [`crate::Recommender::open`] only.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// Underlying I/O failure while reading or writing an artifact.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed catalog CSV.
    #[error("Catalog CSV error: {0}")]
    Csv(String),

    /// The catalog CSV header lacks a required column.
    #[error("Catalog missing required column: {column}")]
    MissingColumn {
        /// Name of the missing column.
        column: String,
    },

    /// Embedding artifact was written with a different format version.
    #[error("Embedding artifact version mismatch: expected {expected}, found {found}")]
    VersionMismatch {
        /// Version this build reads and writes.
        expected: u32,
        /// Version found in the artifact.
        found: u32,
    },

    /// Embedding artifact declares a zero dimension.
    #[error("Embedding artifact has invalid dimension 0")]
    InvalidDimension,

    /// Embedding data length is not a whole number of rows.
    #[error("Embedding artifact truncated: {len} values is not a multiple of dimension {dimension}")]
    Truncated {
        /// Total number of f32 values in the artifact.
        len: usize,
        /// Declared vector dimension.
        dimension: usize,
    },

    /// A vector has the wrong dimension.
    #[error("Embedding dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Actual dimension provided.
        got: usize,
    },

    /// Catalog and embedding table have different row counts.
    ///
    /// Row i of the catalog must correspond to row i of the table; a
    /// count mismatch means the artifacts were produced from different
    /// catalog snapshots.
    #[error("Row count mismatch: catalog has {catalog} rows, embedding table has {embeddings}")]
    RowCountMismatch {
        /// Number of catalog rows.
        catalog: usize,
        /// Number of embedding table rows.
        embeddings: usize,
    },

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ArtifactError {
    /// Creates a CSV error with the given message.
    pub fn csv(msg: impl Into<String>) -> Self {
        Self::Csv(msg.into())
    }

    /// Creates a missing column error.
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    /// Creates a serialization error with the given message.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }
}

impl From<csv::Error> for ArtifactError {
    fn from(err: csv::Error) -> Self {
        ArtifactError::Csv(err.to_string())
    }
}

impl From<bincode::Error> for ArtifactError {
    fn from(err: bincode::Error) -> Self {
        ArtifactError::Serialization(err.to_string())
    }
}

// Also allow direct conversion to CineSimError for convenience
impl From<csv::Error> for CineSimError {
    fn from(err: csv::Error) -> Self {
        CineSimError::Artifact(ArtifactError::from(err))
    }
}

impl From<bincode::Error> for CineSimError {
    fn from(err: bincode::Error) -> Self {
        CineSimError::Artifact(ArtifactError::from(err))
    }
}

/// Validation errors for input data.
///
/// These errors indicate problems with data provided by the caller.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A query title contains a character outside the accepted set
    /// (ASCII letters, digits, and spaces).
    #[error("Disallowed character '{character}' at byte {position} (only letters, digits, and spaces are accepted)")]
    DisallowedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character within the input.
        position: usize,
    },

    /// A field has an invalid value.
    #[error("Invalid field '{field}': {reason}")]
    InvalidField {
        /// Name of the invalid field.
        field: String,
        /// Why the value is invalid.
        reason: String,
    },

    /// A required field is missing or empty.
    #[error("Required field missing: {field}")]
    RequiredField {
        /// Name of the missing field.
        field: String,
    },
}

impl ValidationError {
    /// Creates a disallowed character error.
    pub fn disallowed_character(character: char, position: usize) -> Self {
        Self::DisallowedCharacter {
            character,
            position,
        }
    }

    /// Creates an invalid field error.
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a required field error.
    pub fn required_field(field: impl Into<String>) -> Self {
        Self::RequiredField {
            field: field.into(),
        }
    }
}

/// External metadata service errors.
///
/// Produced by [`crate::poster::MetadataSource`] implementations. The
/// poster resolver logs these and degrades to absent fields; they never
/// propagate past the query boundary.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The service returned a non-success HTTP status.
    #[error("Metadata service returned HTTP {status}")]
    Http {
        /// HTTP status code.
        status: u16,
    },

    /// Transport-level failure (DNS, connect, TLS, read).
    #[error("Metadata transport error: {0}")]
    Transport(String),

    /// Response body did not match the expected shape.
    #[error("Metadata response parse error: {0}")]
    Parse(String),
}

impl MetadataError {
    /// Creates a transport error with the given message.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Creates a parse error with the given message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
