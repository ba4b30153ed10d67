//! Watchlist store abstraction.
//!
//! The [`WatchlistStore`] trait is the seam between the application layer and
//! wherever watched movies live. The plugin ships a single in-memory
//! implementation; the watched list is lost when the plugin pane closes.
//!
//! The trait is minimal and maps one-to-one onto what the controllers need:
//! appending a record, removing by id, and id lookups for the detail view's
//! "already watched" derivation.

use crate::domain::error::Result;
use crate::domain::movie::WatchedMovieRecord;
use crate::storage::summary::WatchlistSummary;

/// An ordered collection of watched movies.
///
/// # Implementations
///
/// - [`MemoryWatchlist`](crate::storage::MemoryWatchlist): `Vec`-backed, insertion ordered
///
/// # Examples
///
/// ```
/// use popcorn::storage::{MemoryWatchlist, WatchlistStore};
///
/// let watchlist = MemoryWatchlist::default();
/// assert!(watchlist.is_empty());
/// assert!(watchlist.summary().mean_user_rating.is_none());
/// ```
pub trait WatchlistStore {
    /// Appends a record to the end of the list.
    ///
    /// # Errors
    ///
    /// Returns [`PopcornError::AlreadyWatched`](crate::domain::PopcornError::AlreadyWatched)
    /// if a record with the same id is already stored. The list is left
    /// unchanged in that case.
    fn add(&mut self, record: WatchedMovieRecord) -> Result<()>;

    /// Removes every record with the given id and returns how many were removed.
    fn remove(&mut self, id: &str) -> usize;

    /// All records in insertion order.
    fn records(&self) -> &[WatchedMovieRecord];

    /// Looks up a record by id.
    fn get(&self, id: &str) -> Option<&WatchedMovieRecord> {
        self.records().iter().find(|record| record.id == id)
    }

    fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    fn len(&self) -> usize {
        self.records().len()
    }

    fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    /// Computes count and mean statistics over the current records.
    fn summary(&self) -> WatchlistSummary {
        WatchlistSummary::from_records(self.records())
    }
}
