//! Bounded session cache for poster lookups.
//!
//! Avoiding repeat external calls is a performance concern, not a
//! correctness one, so the policy is deliberately simple: size-capped
//! with FIFO eviction in insertion order. Absent results are cached the
//! same as hits.

use std::collections::{HashMap, VecDeque};

use tracing::trace;

use super::MovieDetails;

/// FIFO-evicting map from display title to lookup outcome.
///
/// Not thread-safe on its own; [`super::PosterResolver`] guards it with
/// a mutex.
#[derive(Debug)]
pub(crate) struct PosterCache {
    capacity: usize,
    entries: HashMap<String, MovieDetails>,
    order: VecDeque<String>,
}

impl PosterCache {
    /// Creates a cache holding at most `capacity` titles.
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity.min(64)),
            order: VecDeque::with_capacity(capacity.min(64)),
        }
    }

    /// Returns the cached outcome for a title, if present.
    pub(crate) fn get(&self, title: &str) -> Option<MovieDetails> {
        self.entries.get(title).cloned()
    }

    /// Inserts an outcome, evicting the oldest entry when full.
    ///
    /// Re-inserting an existing title updates the value without
    /// touching its eviction position.
    pub(crate) fn insert(&mut self, title: &str, details: MovieDetails) {
        if self.entries.insert(title.to_string(), details).is_some() {
            return;
        }

        self.order.push_back(title.to_string());
        while self.order.len() > self.capacity {
            if let Some(evicted) = self.order.pop_front() {
                self.entries.remove(&evicted);
                trace!(title = %evicted, "Poster cache eviction");
            }
        }
    }

    /// Returns the number of cached titles.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
