//! In-memory watchlist.

use crate::domain::error::{PopcornError, Result};
use crate::domain::movie::WatchedMovieRecord;
use crate::storage::backend::WatchlistStore;

/// `Vec`-backed [`WatchlistStore`] preserving insertion order.
///
/// Holds at most one record per movie id: [`add`](WatchlistStore::add)
/// rejects duplicates instead of appending a second copy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryWatchlist {
    records: Vec<WatchedMovieRecord>,
}

impl MemoryWatchlist {
    #[must_use]
    pub const fn new() -> Self {
        Self { records: Vec::new() }
    }
}

impl WatchlistStore for MemoryWatchlist {
    fn add(&mut self, record: WatchedMovieRecord) -> Result<()> {
        if self.contains(&record.id) {
            tracing::debug!(movie_id = %record.id, "rejecting duplicate watchlist entry");
            return Err(PopcornError::AlreadyWatched(record.id));
        }

        tracing::debug!(
            movie_id = %record.id,
            user_rating = record.user_rating.value(),
            "added movie to watchlist"
        );
        self.records.push(record);
        Ok(())
    }

    fn remove(&mut self, id: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        let removed = before - self.records.len();
        tracing::debug!(movie_id = %id, removed, "removed movie from watchlist");
        removed
    }

    fn records(&self) -> &[WatchedMovieRecord] {
        &self.records
    }
}
