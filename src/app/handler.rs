//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place where [`AppState`] changes. It maps an
//! [`Event`] (a key already translated by the plugin shim, or a completed web
//! request) onto controller calls and returns the side effects to perform as
//! [`Action`]s. Nothing in here touches Zellij, so whole sessions can be
//! replayed in tests.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `SwitchPane`, `TogglePanel`
//! - **Query**: `Char`, `Backspace`, `ClearQuery`, `SearchMode`, `FocusResults`
//! - **Detail**: `Select`, `Escape`, `SetRating`, `RatingUp`, `RatingDown`,
//!   `AddToWatchlist`
//! - **Watched list**: `RemoveWatched`
//! - **Completions**: `SearchCompleted`, `DetailCompleted`
//!
//! The pane title follows the detail panel: whenever the title the panel
//! wants differs before and after an event, a `SetPaneTitle` action is
//! emitted.

use super::actions::Action;
use super::modes::{InputMode, Pane};
use super::search::{Completion, QueryChange};
use super::state::{AppState, DEFAULT_PANE_TITLE};
use super::token::RequestToken;
use crate::domain::error::{FetchError, Result};
use crate::domain::movie::{MovieDetail, SearchResultItem, UserRating};
use crate::storage::WatchlistStore;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Moves the selection in the focused box down (wraps to top).
    KeyDown,
    /// Moves the selection in the focused box up (wraps to bottom).
    KeyUp,
    /// Appends a character to the query.
    Char(char),
    /// Removes the last character of the query.
    Backspace,
    ClearQuery,
    /// Starts typing into the search bar.
    SearchMode,
    /// Stops typing and focuses the result list.
    FocusResults,
    /// Moves focus to the other box.
    SwitchPane,
    /// Collapses or expands a box.
    TogglePanel(Pane),
    /// Opens the highlighted result, or closes it if it is already open.
    Select,
    /// Closes the movie if one is open, otherwise stops typing.
    Escape,
    /// Chooses a rating for the open movie.
    SetRating(u8),
    RatingUp,
    RatingDown,
    /// Adds the open movie with the chosen rating to the watched list.
    AddToWatchlist,
    /// Deletes the highlighted watched movie.
    RemoveWatched,
    /// Hides the plugin.
    CloseFocus,

    SearchCompleted {
        token: RequestToken,
        outcome: std::result::Result<Vec<SearchResultItem>, FetchError>,
    },
    DetailCompleted {
        token: RequestToken,
        outcome: std::result::Result<MovieDetail, FetchError>,
    },

    /// Web access was refused; no search can ever complete.
    PermissionsDenied,
}

/// Processes an event, mutates state, and returns `(should_render, actions)`.
///
/// # Errors
///
/// Reserved for failures the plugin cannot recover from; every failure a
/// user can trigger (bad URL, failed fetch, duplicate add) is absorbed into
/// state and logged instead.
///
/// # Examples
///
/// ```
/// use popcorn::api::OmdbEndpoint;
/// use popcorn::app::{handle_event, Action, AppState, Event};
/// use popcorn::ui::Theme;
///
/// let endpoint = OmdbEndpoint::new("https://www.omdbapi.com/", Some("key".into()));
/// let mut state = AppState::new(endpoint, 3, Theme::default());
///
/// for c in "fro".chars() {
///     let (_, actions) = handle_event(&mut state, &Event::Char(c))?;
///     assert_eq!(actions.len(), usize::from(c == 'o'));
/// }
/// # Ok::<(), popcorn::domain::PopcornError>(())
/// ```
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?EventKind(event)).entered();

    let title_before = state.detail.pane_title();
    let (should_render, mut actions) = dispatch(state, event)?;
    let title_after = state.detail.pane_title();

    if title_before != title_after {
        let title = title_after.unwrap_or_else(|| DEFAULT_PANE_TITLE.to_string());
        tracing::debug!(title = %title, "pane title changed");
        actions.push(Action::SetPaneTitle(title));
    }

    Ok((should_render, actions))
}

#[allow(clippy::too_many_lines)]
fn dispatch(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    match event {
        Event::KeyDown => Ok((state.move_selection_down(), vec![])),
        Event::KeyUp => Ok((state.move_selection_up(), vec![])),
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),

        Event::Char(c) => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            let change = state.search.push_char(*c);
            Ok((true, apply_query_change(state, change)))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search || state.search.query().is_empty() {
                return Ok((false, vec![]));
            }
            let change = state.search.pop_char();
            Ok((true, apply_query_change(state, change)))
        }
        Event::ClearQuery => {
            if state.search.query().is_empty() {
                return Ok((false, vec![]));
            }
            let change = state.search.clear_query();
            Ok((true, apply_query_change(state, change)))
        }

        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search;
            state.focus = Pane::Results;
            state.results_open = true;
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            state.input_mode = InputMode::Normal;
            state.focus = Pane::Results;
            Ok((true, vec![]))
        }
        Event::SwitchPane => {
            state.input_mode = InputMode::Normal;
            state.focus = state.focus.other();
            tracing::debug!(focus = ?state.focus, "switched pane");
            Ok((true, vec![]))
        }
        Event::TogglePanel(pane) => {
            let open = match pane {
                Pane::Results => &mut state.results_open,
                Pane::Watchlist => &mut state.watched_open,
            };
            *open = !*open;
            tracing::debug!(pane = ?pane, open = *open, "toggled panel");
            Ok((true, vec![]))
        }

        Event::Select => Ok(select(state)),
        Event::Escape => {
            if state.detail.close() {
                return Ok((true, vec![]));
            }
            if state.input_mode == InputMode::Search {
                state.input_mode = InputMode::Normal;
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }

        Event::SetRating(value) => match UserRating::new(*value) {
            Ok(rating) => Ok((state.detail.set_rating(rating, &state.watchlist), vec![])),
            Err(e) => {
                tracing::debug!(error = %e, "ignoring rating");
                Ok((false, vec![]))
            }
        },
        Event::RatingUp => Ok((state.detail.increase_rating(&state.watchlist), vec![])),
        Event::RatingDown => Ok((state.detail.decrease_rating(&state.watchlist), vec![])),

        Event::AddToWatchlist => {
            let Some(record) = state.detail.commit(&state.watchlist) else {
                tracing::debug!("nothing to add: no loaded movie, no rating, or already watched");
                return Ok((false, vec![]));
            };

            let id = record.id.clone();
            if let Err(e) = state.watchlist.add(record) {
                tracing::warn!(movie_id = %id, error = %e, "could not add movie to watched list");
                return Ok((false, vec![]));
            }
            tracing::debug!(movie_id = %id, watched = state.watchlist.len(), "added movie to watched list");

            state.detail.close();
            state.watched_index = state.watchlist.len().saturating_sub(1);
            Ok((true, vec![]))
        }
        Event::RemoveWatched => {
            if state.focus != Pane::Watchlist || !state.watched_list_visible() {
                return Ok((false, vec![]));
            }
            let Some(id) = state.selected_watched().map(|record| record.id.clone()) else {
                return Ok((false, vec![]));
            };

            let removed = state.watchlist.remove(&id);
            tracing::debug!(movie_id = %id, removed, "removed movie from watched list");
            state.clamp_selection();
            Ok((removed > 0, vec![]))
        }

        Event::SearchCompleted { token, outcome } => {
            match state.search.complete(*token, outcome.clone()) {
                Completion::Applied => {
                    state.result_index = 0;
                    Ok((true, vec![]))
                }
                Completion::Superseded => Ok((false, vec![])),
            }
        }
        Event::DetailCompleted { token, outcome } => Ok((
            state.detail.complete(*token, outcome.clone()) == Completion::Applied,
            vec![],
        )),

        Event::PermissionsDenied => {
            tracing::warn!("web access denied; searches cannot be issued");
            Ok((false, vec![]))
        }
    }
}

/// Reacts to a query edit: the open movie closes and a search goes out when due.
fn apply_query_change(state: &mut AppState, change: QueryChange) -> Vec<Action> {
    state.detail.close();
    state.result_index = 0;

    match change {
        QueryChange::Cleared => vec![],
        QueryChange::Fetch(request) => match state.endpoint.search_url(&request.query) {
            Ok(url) => vec![Action::FetchSearch {
                token: request.token,
                url,
            }],
            Err(e) => {
                state.search.fail_to_dispatch(request.token, &e);
                vec![]
            }
        },
    }
}

fn select(state: &mut AppState) -> (bool, Vec<Action>) {
    if state.focus != Pane::Results || !state.results_open {
        return (false, vec![]);
    }
    let Some(id) = state.selected_result().map(|item| item.id.clone()) else {
        tracing::debug!("no result selected");
        return (false, vec![]);
    };

    let Some(request) = state.detail.toggle(&id) else {
        return (true, vec![]);
    };

    match state.endpoint.detail_url(&request.id) {
        Ok(url) => (
            true,
            vec![Action::FetchDetail {
                token: request.token,
                id: request.id,
                url,
            }],
        ),
        Err(e) => {
            state
                .detail
                .complete(request.token, Err(FetchError::NotSent(e.to_string())));
            (true, vec![])
        }
    }
}

/// Short event label for spans; completions would otherwise log whole bodies.
struct EventKind<'a>(&'a Event);

impl std::fmt::Debug for EventKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Event::SearchCompleted { token, outcome } => {
                write!(f, "SearchCompleted({token}, ok={})", outcome.is_ok())
            }
            Event::DetailCompleted { token, outcome } => {
                write!(f, "DetailCompleted({token}, ok={})", outcome.is_ok())
            }
            other => write!(f, "{other:?}"),
        }
    }
}
