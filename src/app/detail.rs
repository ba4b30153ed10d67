//! Detail controller.
//!
//! Owns the detail panel: which movie is selected, whether its record is
//! loading or loaded, and the rating the user is about to commit. The
//! watchlist is only ever read here; committing returns a
//! [`WatchedMovieRecord`] for the caller to store.
//!
//! Detail fetches carry a [`RequestToken`] just like searches. Selecting a
//! second movie before the first one's record arrives makes the first
//! response stale, so a slow answer can never overwrite a newer selection.

use super::search::Completion;
use super::token::{RequestToken, TokenSource};
use crate::domain::error::FetchError;
use crate::domain::movie::{MovieDetail, UserRating, WatchedMovieRecord};
use crate::storage::WatchlistStore;

/// Banner text shown when a movie's details cannot be loaded.
pub const DETAIL_FAILED_MESSAGE: &str = "Could not load this movie's details";

/// A detail fetch the caller should issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    pub token: RequestToken,
    pub id: String,
}

/// Lifecycle of the detail panel.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailState {
    #[default]
    Closed,
    Loading {
        id: String,
    },
    Loaded(MovieDetail),
    Failed {
        id: String,
        message: String,
    },
}

#[derive(Debug, Clone, Default)]
pub struct DetailController {
    state: DetailState,
    pending_rating: Option<UserRating>,
    tokens: TokenSource,
}

impl DetailController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> &DetailState {
        &self.state
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self.state, DetailState::Closed)
    }

    /// Id of the movie the panel is showing or loading.
    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        match &self.state {
            DetailState::Closed => None,
            DetailState::Loading { id } | DetailState::Failed { id, .. } => Some(id),
            DetailState::Loaded(detail) => Some(&detail.id),
        }
    }

    #[must_use]
    pub const fn detail(&self) -> Option<&MovieDetail> {
        match &self.state {
            DetailState::Loaded(detail) => Some(detail),
            _ => None,
        }
    }

    #[must_use]
    pub const fn pending_rating(&self) -> Option<UserRating> {
        self.pending_rating
    }

    /// Opens the panel for `id` and returns the fetch to issue.
    pub fn open(&mut self, id: impl Into<String>) -> DetailRequest {
        let id = id.into();
        let token = self.tokens.issue();
        tracing::debug!(movie_id = %id, token = %token, "opening detail view");

        self.state = DetailState::Loading { id: id.clone() };
        self.pending_rating = None;
        DetailRequest { token, id }
    }

    /// Closes the panel; returns whether it was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.tokens.invalidate();
        self.state = DetailState::Closed;
        self.pending_rating = None;
        if was_open {
            tracing::debug!("closed detail view");
        }
        was_open
    }

    /// Selecting the movie that is already open closes the panel.
    pub fn toggle(&mut self, id: &str) -> Option<DetailRequest> {
        if self.selected_id() == Some(id) {
            self.close();
            None
        } else {
            Some(self.open(id))
        }
    }

    /// Applies a fetched detail record, unless the selection has moved on.
    pub fn complete(
        &mut self,
        token: RequestToken,
        outcome: Result<MovieDetail, FetchError>,
    ) -> Completion {
        if !self.tokens.is_current(token) {
            tracing::debug!(token = %token, "discarding stale detail response");
            return Completion::Superseded;
        }

        let id = self.selected_id().unwrap_or_default().to_string();
        self.state = match outcome {
            Ok(detail) => {
                tracing::debug!(movie_id = %detail.id, title = %detail.title, "detail loaded");
                DetailState::Loaded(detail)
            }
            Err(e) => {
                tracing::warn!(movie_id = %id, error = %e, "detail request failed");
                DetailState::Failed {
                    id,
                    message: DETAIL_FAILED_MESSAGE.to_string(),
                }
            }
        };
        Completion::Applied
    }

    /// Whether the selected movie is already in the watched list.
    #[must_use]
    pub fn already_watched(&self, watchlist: &impl WatchlistStore) -> bool {
        self.selected_id().is_some_and(|id| watchlist.contains(id))
    }

    /// The rating stored for the selected movie, if it was watched.
    #[must_use]
    pub fn prior_user_rating(&self, watchlist: &impl WatchlistStore) -> Option<UserRating> {
        self.selected_id()
            .and_then(|id| watchlist.get(id))
            .map(|record| record.user_rating)
    }

    /// Chooses a rating. Ignored once the movie is watched (no re-rating).
    pub fn set_rating(&mut self, rating: UserRating, watchlist: &impl WatchlistStore) -> bool {
        if !self.is_open() || self.already_watched(watchlist) {
            return false;
        }
        self.pending_rating = Some(rating);
        true
    }

    pub fn increase_rating(&mut self, watchlist: &impl WatchlistStore) -> bool {
        let next = self.pending_rating.map_or(UserRating::LOWEST, UserRating::increment);
        self.set_rating(next, watchlist)
    }

    pub fn decrease_rating(&mut self, watchlist: &impl WatchlistStore) -> bool {
        let Some(current) = self.pending_rating else {
            return false;
        };
        self.set_rating(current.decrement(), watchlist)
    }

    /// "Add to list" is enabled only with a loaded, unwatched movie and a chosen rating.
    #[must_use]
    pub fn can_commit(&self, watchlist: &impl WatchlistStore) -> bool {
        self.detail().is_some() && self.pending_rating.is_some() && !self.already_watched(watchlist)
    }

    /// Builds the watched record for the loaded movie and chosen rating.
    #[must_use]
    pub fn commit(&self, watchlist: &impl WatchlistStore) -> Option<WatchedMovieRecord> {
        if !self.can_commit(watchlist) {
            return None;
        }
        let detail = self.detail()?;
        let rating = self.pending_rating?;
        Some(WatchedMovieRecord::from_detail(detail, rating))
    }

    /// Pane title while a loaded movie is shown.
    #[must_use]
    pub fn pane_title(&self) -> Option<String> {
        self.detail().map(|detail| format!("Movie | {}", detail.title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::movie::fixtures::{detail, record};
    use crate::storage::MemoryWatchlist;

    fn rating(n: u8) -> UserRating {
        UserRating::new(n).unwrap()
    }

    #[test]
    fn open_enters_loading_then_populates() {
        let mut controller = DetailController::new();
        let request = controller.open("tt2294629");
        assert_eq!(
            controller.state(),
            &DetailState::Loading {
                id: "tt2294629".to_string()
            }
        );

        let completion = controller.complete(request.token, Ok(detail("tt2294629", "Frozen")));
        assert_eq!(completion, Completion::Applied);
        assert_eq!(controller.detail().unwrap().title, "Frozen");
        assert_eq!(controller.pane_title().as_deref(), Some("Movie | Frozen"));
    }

    #[test]
    fn late_response_for_previous_selection_is_ignored() {
        let mut controller = DetailController::new();
        let first = controller.open("tt1");
        let second = controller.open("tt2");

        assert_eq!(controller.complete(second.token, Ok(detail("tt2", "Heat"))), Completion::Applied);
        assert_eq!(
            controller.complete(first.token, Ok(detail("tt1", "Frost"))),
            Completion::Superseded
        );
        assert_eq!(controller.detail().unwrap().id, "tt2");
    }

    #[test]
    fn response_after_close_is_ignored() {
        let mut controller = DetailController::new();
        let request = controller.open("tt1");
        assert!(controller.close());

        assert_eq!(
            controller.complete(request.token, Ok(detail("tt1", "Frost"))),
            Completion::Superseded
        );
        assert!(!controller.is_open());
    }

    #[test]
    fn toggling_the_open_movie_closes_it() {
        let mut controller = DetailController::new();
        assert!(controller.toggle("tt1").is_some());
        assert!(controller.toggle("tt1").is_none());
        assert!(!controller.is_open());
        assert!(controller.toggle("tt1").is_some());
    }

    #[test]
    fn failed_fetch_keeps_panel_open_with_message() {
        let mut controller = DetailController::new();
        let request = controller.open("tt1");
        controller.complete(request.token, Err(FetchError::Http { status: 502 }));

        assert_eq!(
            controller.state(),
            &DetailState::Failed {
                id: "tt1".to_string(),
                message: DETAIL_FAILED_MESSAGE.to_string()
            }
        );
        assert_eq!(controller.pane_title(), None);
    }

    #[test]
    fn watched_status_is_derived_from_the_watchlist() {
        let mut watchlist = MemoryWatchlist::new();
        watchlist.add(record("tt1", 8.0, 9, 100)).unwrap();

        let mut controller = DetailController::new();
        controller.open("tt1");
        assert!(controller.already_watched(&watchlist));
        assert_eq!(controller.prior_user_rating(&watchlist), Some(rating(9)));

        controller.open("tt2");
        assert!(!controller.already_watched(&watchlist));
        assert_eq!(controller.prior_user_rating(&watchlist), None);
    }

    #[test]
    fn commit_requires_loaded_detail_and_rating() {
        let watchlist = MemoryWatchlist::new();
        let mut controller = DetailController::new();
        let request = controller.open("tt2294629");

        assert!(controller.set_rating(rating(8), &watchlist));
        assert!(!controller.can_commit(&watchlist), "still loading");

        controller.complete(request.token, Ok(detail("tt2294629", "Frozen")));
        assert!(controller.can_commit(&watchlist));

        let record = controller.commit(&watchlist).unwrap();
        assert_eq!(record.id, "tt2294629");
        assert_eq!(record.user_rating, rating(8));
    }

    #[test]
    fn no_rating_means_no_commit() {
        let watchlist = MemoryWatchlist::new();
        let mut controller = DetailController::new();
        let request = controller.open("tt1");
        controller.complete(request.token, Ok(detail("tt1", "Heat")));

        assert!(!controller.can_commit(&watchlist));
        assert!(controller.commit(&watchlist).is_none());
    }

    #[test]
    fn watched_movies_cannot_be_rerated() {
        let mut watchlist = MemoryWatchlist::new();
        watchlist.add(record("tt1", 8.0, 9, 100)).unwrap();

        let mut controller = DetailController::new();
        let request = controller.open("tt1");
        controller.complete(request.token, Ok(detail("tt1", "Heat")));

        assert!(!controller.set_rating(rating(3), &watchlist));
        assert!(!controller.increase_rating(&watchlist));
        assert!(controller.commit(&watchlist).is_none());
    }

    #[test]
    fn rating_steps_start_at_one_and_clamp() {
        let watchlist = MemoryWatchlist::new();
        let mut controller = DetailController::new();
        controller.open("tt1");

        assert!(!controller.decrease_rating(&watchlist), "nothing chosen yet");
        assert!(controller.increase_rating(&watchlist));
        assert_eq!(controller.pending_rating(), Some(rating(1)));

        controller.set_rating(rating(10), &watchlist);
        controller.increase_rating(&watchlist);
        assert_eq!(controller.pending_rating(), Some(rating(10)));

        controller.decrease_rating(&watchlist);
        assert_eq!(controller.pending_rating(), Some(rating(9)));
    }

    #[test]
    fn opening_another_movie_resets_pending_rating() {
        let watchlist = MemoryWatchlist::new();
        let mut controller = DetailController::new();
        controller.open("tt1");
        controller.set_rating(rating(6), &watchlist);

        controller.open("tt2");
        assert_eq!(controller.pending_rating(), None);
    }
}
