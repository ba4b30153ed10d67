//! Application state and view model computation.
//!
//! [`AppState`] is the session: it owns the search controller, the detail
//! controller and the watched list, plus the transient UI state (focus,
//! selection, collapsed boxes). The detail controller only ever borrows the
//! watched list.
//!
//! # View Model Computation
//!
//! `compute_viewmodel` turns a state snapshot into a [`UIViewModel`]: it
//! windows both lists around their selection, formats summary numbers and
//! computes fuzzy match highlight ranges for result titles.

use super::detail::{DetailController, DetailState};
use super::modes::{InputMode, Pane};
use super::search::SearchController;
use crate::api::OmdbEndpoint;
use crate::domain::movie::{SearchResultItem, WatchedMovieRecord};
use crate::storage::{MemoryWatchlist, WatchlistStore, WatchlistSummary};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DetailView, FooterInfo, HeaderInfo, PanelInfo, RatingView, ResultRow, ResultsBody,
    SearchBarInfo, SummaryView, UIViewModel, WatchedBody, WatchedRow,
};
use fuzzy_matcher::skim::SkimMatcherV2;

/// Title shown in the header bar.
pub const APP_TITLE: &str = "usePopcorn";

/// Pane title while no movie is open.
pub const DEFAULT_PANE_TITLE: &str = "Watch list";

/// Rows taken by everything except box contents: blank line, header, border,
/// three search bar lines, two box borders, footer.
const CHROME_ROWS: usize = 9;

/// Rows taken by the summary block above the watched list.
const SUMMARY_ROWS: usize = 3;

/// Shown in place of a mean or rating that does not exist.
const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone)]
pub struct AppState {
    pub search: SearchController,
    pub detail: DetailController,
    pub watchlist: MemoryWatchlist,
    pub endpoint: OmdbEndpoint,

    pub input_mode: InputMode,
    /// Box receiving navigation keys.
    pub focus: Pane,

    /// Selected row in the result list.
    pub result_index: usize,
    /// Selected row in the watched list.
    pub watched_index: usize,

    pub results_open: bool,
    pub watched_open: bool,

    pub theme: Theme,
}

impl AppState {
    #[must_use]
    pub fn new(endpoint: OmdbEndpoint, min_query_len: usize, theme: Theme) -> Self {
        Self {
            search: SearchController::new(min_query_len),
            detail: DetailController::new(),
            watchlist: MemoryWatchlist::new(),
            endpoint,
            input_mode: InputMode::default(),
            focus: Pane::default(),
            result_index: 0,
            watched_index: 0,
            results_open: true,
            watched_open: true,
            theme,
        }
    }

    /// Moves the selection in the focused box down, wrapping to the top.
    pub fn move_selection_down(&mut self) -> bool {
        let len = self.focused_len();
        if len == 0 {
            return false;
        }
        let index = self.focused_index_mut();
        *index = (*index + 1) % len;
        true
    }

    /// Moves the selection in the focused box up, wrapping to the bottom.
    pub fn move_selection_up(&mut self) -> bool {
        let len = self.focused_len();
        if len == 0 {
            return false;
        }
        let index = self.focused_index_mut();
        *index = if *index == 0 { len - 1 } else { *index - 1 };
        true
    }

    #[must_use]
    pub fn selected_result(&self) -> Option<&SearchResultItem> {
        self.search.results().get(self.result_index)
    }

    #[must_use]
    pub fn selected_watched(&self) -> Option<&WatchedMovieRecord> {
        self.watchlist.records().get(self.watched_index)
    }

    /// Keeps both selections inside their lists after the lists change.
    pub fn clamp_selection(&mut self) {
        self.result_index = clamp_index(self.result_index, self.search.results().len());
        self.watched_index = clamp_index(self.watched_index, self.watchlist.len());
    }

    /// Whether the right box currently lists watched movies: expanded, no
    /// detail open.
    #[must_use]
    pub const fn watched_list_visible(&self) -> bool {
        self.watched_open && !self.detail.is_open()
    }

    fn focused_len(&self) -> usize {
        match self.focus {
            Pane::Results if self.results_open => self.search.results().len(),
            Pane::Results => 0,
            Pane::Watchlist if self.watched_list_visible() => self.watchlist.len(),
            Pane::Watchlist => 0,
        }
    }

    fn focused_index_mut(&mut self) -> &mut usize {
        match self.focus {
            Pane::Results => &mut self.result_index,
            Pane::Watchlist => &mut self.watched_index,
        }
    }

    /// Computes a renderable view model for a pane of `rows` x `cols` cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use popcorn::api::OmdbEndpoint;
    /// use popcorn::app::AppState;
    /// use popcorn::ui::{viewmodel::ResultsBody, Theme};
    ///
    /// let state = AppState::new(OmdbEndpoint::default(), 3, Theme::default());
    /// let vm = state.compute_viewmodel(24, 80);
    /// assert_eq!(vm.header.result_count, "Found 0 results");
    /// assert!(matches!(vm.results.body, ResultsBody::Hint(_)));
    /// ```
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::trace_span!("compute_viewmodel", rows, cols).entered();
        let content_rows = rows.saturating_sub(CHROME_ROWS);
        tracing::trace!(content_rows, "computing view model");

        UIViewModel {
            header: HeaderInfo {
                title: APP_TITLE.to_string(),
                result_count: format!("Found {} results", self.search.results().len()),
            },
            search_bar: SearchBarInfo {
                query: self.search.query().to_string(),
                is_active: self.input_mode == InputMode::Search,
            },
            results: PanelInfo {
                title: "Results".to_string(),
                is_open: self.results_open,
                is_focused: self.is_focused(Pane::Results),
                body: self.compute_results_body(content_rows),
            },
            watched: PanelInfo {
                title: if self.detail.is_open() { "Movie" } else { "Watched" }.to_string(),
                is_open: self.watched_open,
                is_focused: self.is_focused(Pane::Watchlist),
                body: self.compute_watched_body(content_rows),
            },
            footer: self.compute_footer(),
        }
    }

    fn is_focused(&self, pane: Pane) -> bool {
        self.input_mode == InputMode::Normal && self.focus == pane
    }

    fn compute_results_body(&self, available_rows: usize) -> ResultsBody {
        if self.search.is_loading() {
            return ResultsBody::Loading;
        }
        if let Some(error) = self.search.error() {
            return ResultsBody::Error(error.to_string());
        }

        let results = self.search.results();
        if results.is_empty() {
            let hint = if self.search.query().trim().is_empty() {
                "Start typing to search for movies".to_string()
            } else {
                format!("Type at least {} characters", self.search.min_query_len())
            };
            return ResultsBody::Hint(hint);
        }

        let (start, end) = visible_window(self.result_index, results.len(), available_rows);
        let query = self.search.query().trim();
        let matcher = (!query.is_empty()).then(SkimMatcherV2::default);
        let open_id = self.detail.selected_id();

        let rows = results[start..end]
            .iter()
            .enumerate()
            .map(|(relative_idx, item)| ResultRow {
                title: item.title.clone(),
                year: item.year.clone(),
                is_selected: start + relative_idx == self.result_index,
                is_open: open_id == Some(item.id.as_str()),
                is_watched: self.watchlist.contains(&item.id),
                highlight_ranges: matcher
                    .as_ref()
                    .map_or_else(Vec::new, |m| compute_highlight_ranges(&item.title, query, m)),
            })
            .collect();

        ResultsBody::Items(rows)
    }

    fn compute_watched_body(&self, available_rows: usize) -> WatchedBody {
        match self.detail.state() {
            DetailState::Loading { .. } => WatchedBody::DetailLoading,
            DetailState::Failed { message, .. } => WatchedBody::DetailError(message.clone()),
            DetailState::Loaded(detail) => {
                let rating = self.detail.prior_user_rating(&self.watchlist).map_or_else(
                    || RatingView::Choosing {
                        pending: self.detail.pending_rating().map(u8::from),
                        can_add: self.detail.can_commit(&self.watchlist),
                    },
                    |stored| RatingView::Rated(stored.value()),
                );

                WatchedBody::Detail(DetailView {
                    title: detail.title.clone(),
                    release_line: detail.release_line(),
                    genre: detail.genre.clone(),
                    imdb_rating: detail
                        .imdb_rating
                        .map_or_else(|| NOT_AVAILABLE.to_string(), |r| format!("{r:.1} IMDb rating")),
                    plot: detail.plot.clone(),
                    actors: detail.actors.clone(),
                    director: detail.director.clone(),
                    rating,
                })
            }
            DetailState::Closed => {
                let records = self.watchlist.records();
                let list_rows = available_rows.saturating_sub(SUMMARY_ROWS);
                let (start, end) = visible_window(self.watched_index, records.len(), list_rows);

                let rows = records[start..end]
                    .iter()
                    .enumerate()
                    .map(|(relative_idx, record)| WatchedRow {
                        title: record.title.clone(),
                        imdb_rating: format_optional(record.imdb_rating, |r| format!("{r:.1}")),
                        user_rating: record.user_rating.to_string(),
                        runtime: format_optional(record.runtime_minutes, |m| format!("{m} min")),
                        is_selected: self.focus == Pane::Watchlist
                            && start + relative_idx == self.watched_index,
                    })
                    .collect();

                WatchedBody::List {
                    summary: summary_view(&self.watchlist.summary()),
                    rows,
                }
            }
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.input_mode, self.focus, self.detail.state()) {
            (InputMode::Search, _, _) => {
                "Type to search  Enter: results  Ctrl+u: clear  Tab: switch box  Esc: stop typing"
            }
            (InputMode::Normal, _, DetailState::Loaded(_)) => {
                "1-9,0: rate  +/-: adjust  a: add to list  Enter: toggle  Esc: close movie"
            }
            (InputMode::Normal, _, DetailState::Loading { .. } | DetailState::Failed { .. }) => {
                "Esc: close movie  j/k: move  /: search  q: quit"
            }
            (InputMode::Normal, Pane::Results, DetailState::Closed) => {
                "j/k: move  Enter: open  /: search  Tab: switch box  [ ]: collapse  q: quit"
            }
            (InputMode::Normal, Pane::Watchlist, DetailState::Closed) => {
                "j/k: move  d: remove  /: search  Tab: switch box  [ ]: collapse  q: quit"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

fn clamp_index(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        index.min(len - 1)
    }
}

/// Window of `available` rows kept around `selected`, as `[start, end)`.
fn visible_window(selected: usize, len: usize, available: usize) -> (usize, usize) {
    let available = available.max(1);
    let start = selected
        .saturating_sub(available / 2)
        .min(len.saturating_sub(available));
    let end = (start + available).min(len);
    (start, end)
}

/// Coalesces fuzzy match indices into contiguous `(start, end)` ranges.
fn compute_highlight_ranges(text: &str, query: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
    use fuzzy_matcher::FuzzyMatcher;

    let Some((_score, indices)) = matcher.fuzzy_indices(text, query) else {
        return vec![];
    };

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

fn format_optional<T>(value: Option<T>, format: impl FnOnce(T) -> String) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), format)
}

fn summary_view(summary: &WatchlistSummary) -> SummaryView {
    SummaryView {
        count: summary.count,
        imdb_rating: format_optional(summary.mean_imdb_rating, |m| format!("{m:.2}")),
        user_rating: format_optional(summary.mean_user_rating, |m| format!("{m:.2}")),
        runtime: format_optional(summary.mean_runtime_minutes, |m| format!("{m:.0} min")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::search::QueryChange;
    use crate::domain::movie::fixtures::{detail, record};
    use crate::domain::UserRating;

    fn state() -> AppState {
        AppState::new(
            OmdbEndpoint::new("https://www.omdbapi.com/", Some("key".to_string())),
            3,
            Theme::default(),
        )
    }

    fn item(id: &str, title: &str) -> SearchResultItem {
        SearchResultItem {
            id: id.to_string(),
            title: title.to_string(),
            year: "2013".to_string(),
            poster_url: None,
        }
    }

    fn with_results(state: &mut AppState, items: Vec<SearchResultItem>) {
        let QueryChange::Fetch(request) = state.search.set_query("frozen") else {
            panic!("expected a fetch");
        };
        state.search.complete(request.token, Ok(items));
    }

    #[test]
    fn selection_wraps_in_both_directions() {
        let mut state = state();
        with_results(&mut state, vec![item("tt1", "A"), item("tt2", "B"), item("tt3", "C")]);

        assert!(state.move_selection_up());
        assert_eq!(state.result_index, 2);
        assert!(state.move_selection_down());
        assert_eq!(state.result_index, 0);
    }

    #[test]
    fn moving_in_empty_list_is_a_no_op() {
        let mut state = state();
        state.focus = Pane::Watchlist;
        assert!(!state.move_selection_down());
        assert_eq!(state.watched_index, 0);
    }

    #[test]
    fn clamp_keeps_selection_in_bounds() {
        let mut state = state();
        state.watchlist.add(record("tt1", 8.0, 9, 100)).unwrap();
        state.watched_index = 4;
        state.result_index = 7;
        state.clamp_selection();
        assert_eq!(state.watched_index, 0);
        assert_eq!(state.result_index, 0);
    }

    #[test]
    fn results_body_priorities() {
        let mut state = state();
        let QueryChange::Fetch(request) = state.search.set_query("frozen") else {
            panic!("expected a fetch");
        };
        assert_eq!(state.compute_viewmodel(24, 80).results.body, ResultsBody::Loading);

        state
            .search
            .complete(request.token, Err(crate::domain::FetchError::Http { status: 500 }));
        assert!(matches!(
            state.compute_viewmodel(24, 80).results.body,
            ResultsBody::Error(_)
        ));

        state.search.set_query("fr");
        assert_eq!(
            state.compute_viewmodel(24, 80).results.body,
            ResultsBody::Hint("Type at least 3 characters".to_string())
        );
    }

    #[test]
    fn result_rows_carry_selection_and_highlights() {
        let mut state = state();
        with_results(&mut state, vec![item("tt1", "Frozen"), item("tt2", "Frozen II")]);
        state.result_index = 1;

        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.header.result_count, "Found 2 results");
        let ResultsBody::Items(rows) = vm.results.body else {
            panic!("expected items");
        };
        assert!(!rows[0].is_selected);
        assert!(rows[1].is_selected);
        assert_eq!(rows[0].highlight_ranges, vec![(0, 6)]);
    }

    #[test]
    fn long_result_lists_are_windowed_around_selection() {
        let mut state = state();
        let items = (0..40).map(|i| item(&format!("tt{i}"), &format!("Movie {i}"))).collect();
        with_results(&mut state, items);
        state.result_index = 39;

        let ResultsBody::Items(rows) = state.compute_viewmodel(24, 80).results.body else {
            panic!("expected items");
        };
        assert_eq!(rows.len(), 24 - CHROME_ROWS);
        assert_eq!(rows.last().unwrap().title, "Movie 39");
        assert!(rows.last().unwrap().is_selected);
    }

    #[test]
    fn empty_watchlist_summary_shows_not_available() {
        let vm = state().compute_viewmodel(24, 80);
        let WatchedBody::List { summary, rows } = vm.watched.body else {
            panic!("expected the watched list");
        };
        assert!(rows.is_empty());
        assert_eq!(summary.count, 0);
        assert_eq!(summary.imdb_rating, "N/A");
        assert_eq!(summary.user_rating, "N/A");
        assert_eq!(summary.runtime, "N/A");
    }

    #[test]
    fn summary_is_formatted_with_two_decimals() {
        let mut state = state();
        state.watchlist.add(record("tt1", 8.0, 9, 100)).unwrap();
        state.watchlist.add(record("tt2", 6.0, 7, 120)).unwrap();

        let WatchedBody::List { summary, rows } = state.compute_viewmodel(24, 80).watched.body else {
            panic!("expected the watched list");
        };
        assert_eq!(summary.count, 2);
        assert_eq!(summary.imdb_rating, "7.00");
        assert_eq!(summary.user_rating, "8.00");
        assert_eq!(summary.runtime, "110 min");
        assert_eq!(rows[1].runtime, "120 min");
    }

    #[test]
    fn detail_panel_replaces_the_watched_list() {
        let mut state = state();
        let request = state.detail.open("tt2294629");
        assert_eq!(
            state.compute_viewmodel(24, 80).watched.body,
            WatchedBody::DetailLoading
        );

        state
            .detail
            .complete(request.token, Ok(detail("tt2294629", "Frozen")));
        state
            .detail
            .set_rating(UserRating::new(8).unwrap(), &state.watchlist);

        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.watched.title, "Movie");
        let WatchedBody::Detail(view) = vm.watched.body else {
            panic!("expected detail");
        };
        assert_eq!(view.title, "Frozen");
        assert_eq!(view.imdb_rating, "7.4 IMDb rating");
        assert_eq!(
            view.rating,
            RatingView::Choosing {
                pending: Some(8),
                can_add: true
            }
        );
    }

    #[test]
    fn watched_movie_detail_shows_stored_rating() {
        let mut state = state();
        state.watchlist.add(record("tt1", 8.0, 9, 100)).unwrap();
        let request = state.detail.open("tt1");
        state.detail.complete(request.token, Ok(detail("tt1", "Heat")));

        let WatchedBody::Detail(view) = state.compute_viewmodel(24, 80).watched.body else {
            panic!("expected detail");
        };
        assert_eq!(view.rating, RatingView::Rated(9));
    }

    #[test]
    fn highlight_ranges_coalesce_runs() {
        let matcher = SkimMatcherV2::default();
        assert_eq!(compute_highlight_ranges("Frozen", "fro", &matcher), vec![(0, 3)]);
        assert!(compute_highlight_ranges("Heat", "xyz", &matcher).is_empty());
    }

    #[test]
    fn window_fits_short_lists() {
        assert_eq!(visible_window(0, 3, 10), (0, 3));
        assert_eq!(visible_window(0, 0, 10), (0, 0));
        assert_eq!(visible_window(9, 10, 4), (6, 10));
    }
}
