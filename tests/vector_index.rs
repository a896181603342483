//! Neighbor index behavior over realistic catalog-sized tables.
//!
//! Complements the unit tests in `src/vector/hnsw.rs` with the ranking
//! properties the recommender relies on, checked across every row.

use cinesim::{EmbeddingTable, HnswIndex, IndexParams, NeighborIndex, RowIndex};

const DIM: usize = 16;

fn make_embedding(seed: u64) -> Vec<f32> {
    (0..DIM)
        .map(|i| (seed as f32 * 0.1 + i as f32 * 0.01).sin())
        .collect()
}

fn build_index(rows: u64) -> (EmbeddingTable, HnswIndex) {
    let table =
        EmbeddingTable::from_vectors(DIM, (0..rows).map(make_embedding).collect()).unwrap();
    let index = HnswIndex::build(&table, &IndexParams::default()).unwrap();
    (table, index)
}

#[test]
fn test_every_row_finds_itself_first() {
    let (table, index) = build_index(30);

    for (row, vector) in table.rows() {
        let results = index.nearest(vector, 5).unwrap();
        assert_eq!(
            results[0].0, row,
            "Row {row} should be its own nearest neighbor"
        );
        assert!(results[0].1 < 0.001);
    }
}

#[test]
fn test_results_sorted_for_every_row() {
    let (table, index) = build_index(30);

    for (_, vector) in table.rows() {
        let results = index.nearest(vector, 10).unwrap();
        for w in results.windows(2) {
            assert!(w[0].1 <= w[1].1, "Results not sorted by distance");
        }
    }
}

#[test]
fn test_close_seeds_rank_close() {
    let (_, index) = build_index(40);

    // Seeds vary smoothly, so row 20's nearest non-self neighbors
    // should come from its numeric vicinity
    let results = index.nearest(&make_embedding(20), 5).unwrap();
    let neighbors: Vec<usize> = results
        .iter()
        .map(|(row, _)| row.as_usize())
        .filter(|&r| r != 20)
        .collect();

    for row in neighbors {
        assert!(
            (15..=25).contains(&row),
            "Row {row} is not in the numeric vicinity of 20"
        );
    }
}

#[test]
fn test_never_more_results_than_rows() {
    let (_, index) = build_index(4);

    let results = index.nearest(&make_embedding(0), 10).unwrap();
    assert_eq!(results.len(), 4);
}

#[test]
fn test_distinct_rows_in_results() {
    let (_, index) = build_index(25);

    let results = index.nearest(&make_embedding(12), 10).unwrap();
    let mut rows: Vec<RowIndex> = results.iter().map(|r| r.0).collect();
    rows.sort_unstable();
    rows.dedup();
    assert_eq!(rows.len(), results.len(), "Duplicate rows in results");
}

#[test]
fn test_query_with_foreign_vector() {
    // A query vector that is not a table row still ranks by distance
    let (_, index) = build_index(20);

    let halfway: Vec<f32> = make_embedding(7)
        .iter()
        .zip(make_embedding(8).iter())
        .map(|(a, b)| (a + b) / 2.0)
        .collect();

    let results = index.nearest(&halfway, 3).unwrap();
    assert_eq!(results.len(), 3);
    let top: Vec<usize> = results.iter().map(|r| r.0.as_usize()).collect();
    assert!(
        top.contains(&7) || top.contains(&8),
        "Expected a vector between rows 7 and 8 to rank one of them on top, got {top:?}"
    );
}
