//! Recommender engine handle and the top-level query path.
//!
//! [`Recommender`] owns the catalog, the embedding table, the neighbor
//! index, and the poster resolver — all loaded once by [`Recommender::open`]
//! and read-only afterwards. [`recommend`](Recommender::recommend) ties
//! the pipeline together: validate → normalize → lookup → rank →
//! resolve posters.
//!
//! # Thread Safety
//!
//! `Recommender` is `Send + Sync` and can be shared across threads with
//! `Arc`. The only interior mutability is the poster cache, which is
//! mutex-guarded inside the resolver.

use tracing::{debug, info, instrument};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::embedding::EmbeddingTable;
use crate::error::{ArtifactError, CineSimError, Result, ValidationError};
use crate::poster::{MetadataSource, PosterResolver, TmdbClient};
use crate::title::{normalize_title, validate_title};
use crate::types::{RowIndex, TmdbMovieId};
use crate::vector::{HnswIndex, NeighborIndex};

/// One recommended movie.
#[derive(Debug, Clone)]
pub struct Recommendation {
    /// Catalog row of the recommended movie.
    pub row: RowIndex,

    /// Display title (title-cased form of the stored title).
    pub title: String,

    /// TMDB id of the first search result for this title, if resolved.
    pub movie_id: Option<TmdbMovieId>,

    /// Full poster URL, if resolved.
    pub poster_url: Option<String>,

    /// Cosine distance from the query movie (0.0 = identical).
    pub distance: f32,
}

/// Ordered query result, closest movies first.
///
/// Empty when the queried title is not in the catalog. A query returns
/// at most `neighbor_count - 1` items (the query movie itself is always
/// excluded).
#[derive(Debug, Clone)]
pub struct Recommendations {
    items: Vec<Recommendation>,
    placeholder_url: String,
}

impl Recommendations {
    fn new(items: Vec<Recommendation>, placeholder_url: String) -> Self {
        Self {
            items,
            placeholder_url,
        }
    }

    /// Returns the ranked recommendations.
    pub fn items(&self) -> &[Recommendation] {
        &self.items
    }

    /// Returns the number of recommendations.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no recommendations were produced.
    ///
    /// This is the "movie not found" outcome for catalogs with at least
    /// two rows.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns display titles in rank order.
    pub fn titles(&self) -> Vec<&str> {
        self.items.iter().map(|r| r.title.as_str()).collect()
    }

    /// Returns poster URLs in rank order, substituting the configured
    /// placeholder wherever no poster was resolved.
    ///
    /// The returned sequence is parallel to [`titles`](Self::titles):
    /// same length, same order.
    pub fn poster_urls_or_placeholder(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|r| {
                r.poster_url
                    .clone()
                    .unwrap_or_else(|| self.placeholder_url.clone())
            })
            .collect()
    }

    /// Consumes the result, yielding the ranked recommendations.
    pub fn into_items(self) -> Vec<Recommendation> {
        self.items
    }
}

impl<'a> IntoIterator for &'a Recommendations {
    type Item = &'a Recommendation;
    type IntoIter = std::slice::Iter<'a, Recommendation>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// The main recommendation engine handle.
///
/// Create an instance with [`Recommender::open`] (or
/// [`Recommender::with_metadata_source`] to inject a custom metadata
/// backend) and query it with [`recommend`](Recommender::recommend).
/// There is nothing to flush or close; dropping the handle releases
/// everything.
pub struct Recommender {
    catalog: Catalog,
    table: EmbeddingTable,
    index: Box<dyn NeighborIndex>,
    posters: PosterResolver,
    config: Config,
}

impl std::fmt::Debug for Recommender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recommender")
            .field("catalog_len", &self.catalog.len())
            .field("dimension", &self.table.dimension())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Recommender {
    /// Opens an engine over the configured artifacts, resolving posters
    /// through the TMDB API.
    ///
    /// Loads the catalog CSV and the embedding table, verifies they are
    /// aligned (equal row counts), and builds the neighbor index from
    /// the table.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration is invalid (see [`Config::validate`])
    /// - `api_key` is empty (use
    ///   [`with_metadata_source`](Self::with_metadata_source) to skip
    ///   the TMDB client entirely)
    /// - Either artifact is unreadable or malformed
    /// - Catalog and embedding table row counts differ
    #[instrument(skip(config), fields(catalog = %config.catalog_path.display()))]
    pub fn open(config: Config) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(ValidationError::required_field("api_key").into());
        }
        let client = TmdbClient::new(config.api_key.clone());
        Self::with_metadata_source(config, Box::new(client))
    }

    /// Opens an engine with a caller-provided metadata source.
    ///
    /// Identical to [`open`](Self::open) except poster lookups go
    /// through `source`, so no TMDB credential is required. This is the
    /// seam tests and alternative metadata backends use.
    pub fn with_metadata_source(config: Config, source: Box<dyn MetadataSource>) -> Result<Self> {
        config.validate().map_err(CineSimError::from)?;

        info!("Opening recommender");

        let catalog = Catalog::load(&config.catalog_path)?;
        let table = EmbeddingTable::load(&config.embeddings_path)?;

        if catalog.len() != table.len() {
            return Err(ArtifactError::RowCountMismatch {
                catalog: catalog.len(),
                embeddings: table.len(),
            }
            .into());
        }

        let index = HnswIndex::build(&table, &config.index)?;
        let posters = PosterResolver::new(source, config.poster_cache_capacity);

        info!(
            rows = catalog.len(),
            dimension = table.dimension(),
            "Recommender ready"
        );

        Ok(Self {
            catalog,
            table,
            index: Box::new(index),
            posters,
            config,
        })
    }

    /// Returns up to `neighbor_count - 1` movies similar to the given
    /// title, closest first, with posters resolved per item.
    ///
    /// The raw title is validated (ASCII letters, digits, spaces only),
    /// case-folded, and looked up in the catalog. A title not in the
    /// catalog yields an empty result, not an error. Poster failures
    /// degrade per item; the batch always completes.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the title contains a disallowed
    /// character. This is the only error a well-constructed engine
    /// surfaces from a query.
    #[instrument(skip(self))]
    pub fn recommend(&self, raw_title: &str) -> Result<Recommendations> {
        validate_title(raw_title).map_err(CineSimError::from)?;

        let key = normalize_title(raw_title);
        let Some(query_row) = self.catalog.lookup(&key) else {
            debug!(title = %key, "Title not in catalog");
            return Ok(Recommendations::new(
                Vec::new(),
                self.config.placeholder_url.clone(),
            ));
        };

        let query = self
            .table
            .row(query_row)
            .ok_or_else(|| CineSimError::vector(format!("Row {query_row} out of table range")))?;

        let neighbors = self.index.nearest(query, self.config.neighbor_count)?;
        debug!(
            row = %query_row,
            candidates = neighbors.len(),
            "Neighbor query completed"
        );

        let mut items = Vec::with_capacity(self.config.neighbor_count - 1);
        for (row, distance) in neighbors {
            // Exclude by identity: an approximate index is not
            // guaranteed to return the query row first
            if row == query_row {
                continue;
            }
            if items.len() == self.config.neighbor_count - 1 {
                break;
            }
            let Some(title) = self.catalog.display_title(row) else {
                continue;
            };

            let details = self.posters.resolve(&title);
            items.push(Recommendation {
                row,
                title,
                movie_id: details.movie_id,
                poster_url: details.poster_url,
                distance,
            });
        }

        Ok(Recommendations::new(
            items,
            self.config.placeholder_url.clone(),
        ))
    }

    /// Returns a reference to the engine configuration.
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns a reference to the loaded catalog.
    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the embedding dimension of the loaded table.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.table.dimension()
    }

    /// Returns the number of catalog rows.
    #[inline]
    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }
}

// Recommender is auto Send + Sync: Box<dyn NeighborIndex> and the
// metadata source both require Send + Sync, and the poster cache is
// mutex-guarded.
