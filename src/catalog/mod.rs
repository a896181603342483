//! Movie catalog: normalized titles and their row positions.
//!
//! The catalog is loaded once from a CSV file and held read-only. Row
//! order in the file defines the row index, which must align with the
//! embedding table (verified by [`crate::Recommender::open`]).
//!
//! Duplicate normalized titles are resolved at load time with a
//! first-occurrence-wins policy; shadowed rows are logged at warn level
//! so catalog producers can spot them.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::ArtifactError;
use crate::title::{normalize_title, title_case};
use crate::types::RowIndex;

/// Name of the required CSV column.
const TITLE_COLUMN: &str = "title";

/// One row of the catalog CSV. Columns other than `title` are ignored.
#[derive(Debug, Deserialize)]
struct CatalogRecord {
    title: String,
}

/// Read-only mapping from normalized movie titles to row indices.
///
/// Titles are case-folded at load with the same normalization applied to
/// queries, so lookup is a plain map probe.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Normalized title per row, in file order.
    titles: Vec<String>,

    /// Normalized title → first row it appears at.
    by_title: HashMap<String, RowIndex>,
}

impl Catalog {
    /// Loads a catalog from a CSV file.
    ///
    /// The file must have a header row containing a `title` column;
    /// other columns are ignored. An empty catalog loads successfully.
    ///
    /// # Errors
    /// Returns `ArtifactError` if the file is unreadable, the CSV is
    /// malformed, or the `title` column is missing.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let mut reader = csv::Reader::from_path(path)?;

        let headers = reader.headers()?;
        if !headers.iter().any(|h| h == TITLE_COLUMN) {
            return Err(ArtifactError::missing_column(TITLE_COLUMN));
        }

        let mut titles = Vec::new();
        for record in reader.deserialize::<CatalogRecord>() {
            titles.push(record?.title);
        }

        debug!(rows = titles.len(), path = %path.display(), "Catalog loaded");
        Ok(Self::from_titles(titles))
    }

    /// Builds a catalog from raw titles, normalizing each.
    ///
    /// Row indices follow the iteration order. Intended for artifact
    /// producers and tests; [`Catalog::load`] is the normal path.
    pub fn from_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let titles: Vec<String> = titles
            .into_iter()
            .map(|t| normalize_title(t.as_ref()))
            .collect();

        let mut by_title = HashMap::with_capacity(titles.len());
        for (i, title) in titles.iter().enumerate() {
            let row = RowIndex(i);
            if let Some(&first) = by_title.get(title) {
                warn!(
                    title = %title,
                    first_row = %first,
                    shadowed_row = %row,
                    "Duplicate normalized title; first occurrence wins"
                );
            } else {
                by_title.insert(title.clone(), row);
            }
        }

        Self { titles, by_title }
    }

    /// Resolves a normalized title to its row index.
    ///
    /// Returns the first row whose stored title equals the input, or
    /// `None` if no row matches. A miss is a valid outcome, not an error.
    pub fn lookup(&self, normalized: &str) -> Option<RowIndex> {
        self.by_title.get(normalized).copied()
    }

    /// Returns the title-cased display form of a row's title.
    pub fn display_title(&self, row: RowIndex) -> Option<String> {
        self.titles.get(row.as_usize()).map(|t| title_case(t))
    }

    /// Returns the stored (normalized) title of a row.
    pub fn normalized_title(&self, row: RowIndex) -> Option<&str> {
        self.titles.get(row.as_usize()).map(String::as_str)
    }

    /// Returns the number of catalog rows.
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Returns true if the catalog has no rows.
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}
