//! TMDB metadata client.
//!
//! Issues blocking title-search requests against the TMDB v3 API and
//! extracts the first result's id and poster path. No timeout is
//! configured and no retries are attempted; the resolver above this
//! layer degrades failures.

use serde::Deserialize;
use tracing::debug;

use crate::error::MetadataError;
use crate::types::TmdbMovieId;

use super::{MetadataSource, MovieDetails};

/// TMDB v3 API base URL.
pub const TMDB_API_BASE: &str = "https://api.themoviedb.org/3";

/// Base URL for poster images (w500 rendition).
pub const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

// ---------------------------------------------------------------------------
// API response types (private -- only the fields we extract)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    id: Option<u64>,
    poster_path: Option<String>,
}

/// TMDB API client.
///
/// Wraps the search endpoint with an API key passed as a query
/// parameter. Each call is an independent blocking request.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    api_key: String,
}

impl TmdbClient {
    /// Creates a new TMDB client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

impl MetadataSource for TmdbClient {
    fn movie_details(&self, title: &str) -> Result<MovieDetails, MetadataError> {
        let url = format!("{TMDB_API_BASE}/search/movie");
        let response = ureq::get(url.as_str())
            .query("api_key", &self.api_key)
            .query("query", title)
            .call()
            .map_err(|e| match e {
                ureq::Error::StatusCode(status) => MetadataError::Http { status },
                other => MetadataError::transport(other.to_string()),
            })?;

        let body = response
            .into_body()
            .read_to_string()
            .map_err(|e| MetadataError::transport(e.to_string()))?;
        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| MetadataError::parse(e.to_string()))?;

        let details = details_from_response(parsed);
        debug!(
            title,
            movie_id = ?details.movie_id,
            has_poster = details.has_poster(),
            "TMDB search completed"
        );
        Ok(details)
    }
}

/// Extracts `(id, poster url)` from a search response.
///
/// Takes the first result, if any; the poster URL is the fixed image
/// base joined with the result's poster path.
fn details_from_response(response: SearchResponse) -> MovieDetails {
    let Some(first) = response.results.into_iter().next() else {
        return MovieDetails::absent();
    };

    MovieDetails {
        movie_id: first.id.map(TmdbMovieId),
        poster_url: first
            .poster_path
            .map(|path| format!("{TMDB_IMAGE_BASE}{path}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = TmdbClient::new("test-key");
        let debug = format!("{:?}", client);
        assert!(debug.contains("TmdbClient"));
    }

    #[test]
    fn test_search_response_deserialize() {
        let json = r#"{
            "page": 1,
            "results": [
                {"id": 27205, "title": "Inception", "poster_path": "/inception.jpg"},
                {"id": 64956, "title": "Inception: The Cobol Job", "poster_path": null}
            ],
            "total_results": 2
        }"#;
        let parsed: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.results.len(), 2);
        assert_eq!(parsed.results[0].id, Some(27205));
        assert_eq!(parsed.results[1].poster_path, None);
    }

    #[test]
    fn test_search_response_missing_results_defaults_to_empty() {
        let json = r#"{"page": 1}"#;
        let parsed: SearchResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.results.is_empty());
    }

    #[test]
    fn test_details_full_result() {
        let json = r#"{"results": [{"id": 27205, "poster_path": "/inception.jpg"}]}"#;
        let parsed: SearchResponse = serde_json::from_str(json).unwrap();
        let details = details_from_response(parsed);

        assert_eq!(details.movie_id, Some(TmdbMovieId(27205)));
        assert_eq!(
            details.poster_url.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/inception.jpg")
        );
    }

    #[test]
    fn test_details_no_results() {
        let json = r#"{"results": []}"#;
        let parsed: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(details_from_response(parsed), MovieDetails::absent());
    }

    #[test]
    fn test_details_result_without_poster_path() {
        let json = r#"{"results": [{"id": 64956, "poster_path": null}]}"#;
        let parsed: SearchResponse = serde_json::from_str(json).unwrap();
        let details = details_from_response(parsed);

        assert_eq!(details.movie_id, Some(TmdbMovieId(64956)));
        assert_eq!(details.poster_url, None);
    }

    #[test]
    fn test_details_takes_first_result() {
        let json = r#"{"results": [
            {"id": 1, "poster_path": "/first.jpg"},
            {"id": 2, "poster_path": "/second.jpg"}
        ]}"#;
        let parsed: SearchResponse = serde_json::from_str(json).unwrap();
        let details = details_from_response(parsed);
        assert_eq!(details.movie_id, Some(TmdbMovieId(1)));
    }
}
