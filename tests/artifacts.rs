//! Artifact loading and alignment tests at the engine boundary.
//!
//! Verifies that `Recommender::with_metadata_source` / `open` reject
//! malformed or misaligned artifact pairs with the right error, and
//! that degenerate-but-valid inputs (an empty catalog) open cleanly.

use std::path::PathBuf;

use cinesim::{
    ArtifactError, CineSimError, Config, EmbeddingTable, MetadataError, MetadataSource,
    MovieDetails, Recommender,
};
use tempfile::TempDir;

const DIM: usize = 8;

/// Metadata source that panics if reached; artifact tests never get
/// past open.
struct UnreachableSource;

impl MetadataSource for UnreachableSource {
    fn movie_details(&self, title: &str) -> Result<MovieDetails, MetadataError> {
        panic!("metadata source should not be reached for {title}");
    }
}

fn make_embedding(seed: u64) -> Vec<f32> {
    (0..DIM)
        .map(|i| (seed as f32 * 0.1 + i as f32 * 0.01).sin())
        .collect()
}

fn write_fixtures(titles: &[&str], rows: usize) -> (PathBuf, PathBuf, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let catalog_path = dir.path().join("movies.csv");
    let embeddings_path = dir.path().join("movie_embeddings.bin");

    let mut csv = String::from("title\n");
    for title in titles {
        csv.push_str(title);
        csv.push('\n');
    }
    std::fs::write(&catalog_path, csv).unwrap();

    let vectors = (0..rows as u64).map(make_embedding).collect();
    EmbeddingTable::from_vectors(DIM, vectors)
        .unwrap()
        .save(&embeddings_path)
        .unwrap();

    (catalog_path, embeddings_path, dir)
}

fn open_with(config: Config) -> cinesim::Result<Recommender> {
    Recommender::with_metadata_source(config, Box::new(UnreachableSource))
}

#[test]
fn test_aligned_artifacts_open() {
    let titles = &["Inception", "Up", "Memento", "Tenet"];
    let (catalog_path, embeddings_path, _dir) = write_fixtures(titles, titles.len());

    let engine = open_with(Config {
        catalog_path,
        embeddings_path,
        ..Default::default()
    })
    .unwrap();

    assert_eq!(engine.catalog_len(), 4);
    assert_eq!(engine.dimension(), DIM);
}

#[test]
fn test_row_count_mismatch_rejected() {
    let titles = &["Inception", "Up", "Memento"];
    let (catalog_path, embeddings_path, _dir) = write_fixtures(titles, 5);

    let err = open_with(Config {
        catalog_path,
        embeddings_path,
        ..Default::default()
    })
    .unwrap_err();

    assert!(matches!(
        err,
        CineSimError::Artifact(ArtifactError::RowCountMismatch {
            catalog: 3,
            embeddings: 5
        })
    ));
}

#[test]
fn test_missing_catalog_rejected() {
    let (_, embeddings_path, dir) = write_fixtures(&["Up"], 1);

    let err = open_with(Config {
        catalog_path: dir.path().join("does-not-exist.csv"),
        embeddings_path,
        ..Default::default()
    })
    .unwrap_err();

    assert!(err.is_artifact());
}

#[test]
fn test_missing_embeddings_rejected() {
    let (catalog_path, _, dir) = write_fixtures(&["Up"], 1);

    let err = open_with(Config {
        catalog_path,
        embeddings_path: dir.path().join("does-not-exist.bin"),
        ..Default::default()
    })
    .unwrap_err();

    assert!(err.is_artifact());
}

#[test]
fn test_catalog_without_title_column_rejected() {
    let (_, embeddings_path, dir) = write_fixtures(&["Up"], 1);
    let catalog_path = dir.path().join("bad.csv");
    std::fs::write(&catalog_path, "movieId,name\n1,Up\n").unwrap();

    let err = open_with(Config {
        catalog_path,
        embeddings_path,
        ..Default::default()
    })
    .unwrap_err();

    assert!(matches!(
        err,
        CineSimError::Artifact(ArtifactError::MissingColumn { ref column }) if column == "title"
    ));
}

#[test]
fn test_corrupt_embedding_artifact_rejected() {
    let (catalog_path, _, dir) = write_fixtures(&["Up"], 1);
    let embeddings_path = dir.path().join("garbage.bin");
    std::fs::write(&embeddings_path, b"not a bincode artifact").unwrap();

    let err = open_with(Config {
        catalog_path,
        embeddings_path,
        ..Default::default()
    })
    .unwrap_err();

    assert!(err.is_artifact());
}

#[test]
fn test_empty_catalog_opens_and_always_misses() {
    let (catalog_path, embeddings_path, _dir) = write_fixtures(&[], 0);

    let engine = open_with(Config {
        catalog_path,
        embeddings_path,
        ..Default::default()
    })
    .unwrap();

    assert_eq!(engine.catalog_len(), 0);
    assert!(engine.recommend("Inception").unwrap().is_empty());
}

#[test]
fn test_invalid_config_rejected_before_loading() {
    // Paths point nowhere, but validation fires first
    let err = open_with(Config {
        neighbor_count: 1,
        ..Default::default()
    })
    .unwrap_err();

    assert!(err.is_validation());
}

#[test]
fn test_open_requires_api_key() {
    let (catalog_path, embeddings_path, _dir) = write_fixtures(&["Up"], 1);

    let err = Recommender::open(Config {
        catalog_path,
        embeddings_path,
        ..Default::default()
    })
    .unwrap_err();

    assert!(err.is_validation());
    assert!(err.to_string().contains("api_key"));
}

#[test]
fn test_duplicate_titles_resolve_to_first_row() {
    let titles = &["Inception", "Up", "inception"];
    let (catalog_path, embeddings_path, _dir) = write_fixtures(titles, titles.len());

    let engine = open_with(Config {
        catalog_path,
        embeddings_path,
        ..Default::default()
    })
    .unwrap();

    assert_eq!(
        engine.catalog().lookup("inception"),
        Some(cinesim::RowIndex(0))
    );
}
