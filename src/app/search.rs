//! Search state controller.
//!
//! Owns the query string, the current result list, and the loading/error
//! flags. Every query change invalidates the in-flight request (if any) and
//! either clears the results (query too short) or asks the caller to issue a
//! new search via the returned [`SearchRequest`].
//!
//! Completions are matched against the current [`RequestToken`]; an outcome
//! for a superseded query is dropped without touching any state, so only the
//! last issued query can ever be reflected in the result list.

use super::token::{RequestToken, TokenSource};
use crate::domain::error::{FetchError, PopcornError};
use crate::domain::movie::SearchResultItem;

/// Queries shorter than this (after trimming) never reach the network.
pub const DEFAULT_MIN_QUERY_LEN: usize = 3;

/// Banner text shown for every failed search.
///
/// Request failures and "no match" answers render identically; the precise
/// cause is logged.
pub const SEARCH_FAILED_MESSAGE: &str = "Something went wrong while searching for movies";

/// A search the caller should issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub token: RequestToken,
    pub query: String,
}

/// What a query change asks of the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryChange {
    /// Query too short: results and error cleared, nothing to fetch.
    Cleared,
    /// Issue this request.
    Fetch(SearchRequest),
}

/// Whether a completion was applied to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// The token was stale; the outcome was discarded.
    Superseded,
}

#[derive(Debug, Clone)]
pub struct SearchController {
    query: String,
    results: Vec<SearchResultItem>,
    is_loading: bool,
    error: Option<String>,
    min_query_len: usize,
    tokens: TokenSource,
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_QUERY_LEN)
    }
}

impl SearchController {
    /// A `min_query_len` of 0 is raised to 1: the empty query never searches.
    #[must_use]
    pub const fn new(min_query_len: usize) -> Self {
        let min_query_len = if min_query_len == 0 { 1 } else { min_query_len };
        Self {
            query: String::new(),
            results: Vec::new(),
            is_loading: false,
            error: None,
            min_query_len,
            tokens: TokenSource::new(),
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn results(&self) -> &[SearchResultItem] {
        &self.results
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub const fn min_query_len(&self) -> usize {
        self.min_query_len
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replaces the query and reacts to the change.
    ///
    /// # Examples
    ///
    /// ```
    /// use popcorn::app::search::{QueryChange, SearchController};
    ///
    /// let mut search = SearchController::default();
    /// assert_eq!(search.set_query("fr"), QueryChange::Cleared);
    /// assert!(matches!(search.set_query("frozen"), QueryChange::Fetch(_)));
    /// assert!(search.is_loading());
    /// ```
    pub fn set_query(&mut self, query: impl Into<String>) -> QueryChange {
        self.query = query.into();
        self.tokens.invalidate();

        let trimmed = self.query.trim();
        if trimmed.chars().count() < self.min_query_len {
            tracing::trace!(query_len = trimmed.len(), "query below minimum length, clearing results");
            self.results.clear();
            self.error = None;
            self.is_loading = false;
            return QueryChange::Cleared;
        }

        let request = SearchRequest {
            token: self.tokens.issue(),
            query: trimmed.to_string(),
        };
        self.is_loading = true;
        self.error = None;

        tracing::debug!(query = %request.query, token = %request.token, "search issued");
        QueryChange::Fetch(request)
    }

    pub fn push_char(&mut self, c: char) -> QueryChange {
        let mut query = std::mem::take(&mut self.query);
        query.push(c);
        self.set_query(query)
    }

    pub fn pop_char(&mut self) -> QueryChange {
        let mut query = std::mem::take(&mut self.query);
        query.pop();
        self.set_query(query)
    }

    pub fn clear_query(&mut self) -> QueryChange {
        self.set_query(String::new())
    }

    /// Applies the outcome of a search, unless it has been superseded.
    pub fn complete(
        &mut self,
        token: RequestToken,
        outcome: Result<Vec<SearchResultItem>, FetchError>,
    ) -> Completion {
        if !self.tokens.is_current(token) {
            tracing::debug!(token = %token, "discarding superseded search result");
            return Completion::Superseded;
        }

        self.is_loading = false;
        match outcome {
            Ok(items) => {
                tracing::debug!(query = %self.query, result_count = items.len(), "search completed");
                self.results = items;
                self.error = None;
            }
            Err(e) => {
                if e.is_not_found() {
                    tracing::info!(query = %self.query, error = %e, "search returned no match");
                } else {
                    tracing::warn!(query = %self.query, error = %e, "search request failed");
                }
                self.results.clear();
                self.error = Some(SEARCH_FAILED_MESSAGE.to_string());
            }
        }
        Completion::Applied
    }

    /// Marks a request as failed before it ever left the plugin.
    ///
    /// Used when the request URL cannot be built, e.g. without an API key.
    pub fn fail_to_dispatch(&mut self, token: RequestToken, error: &PopcornError) -> Completion {
        if !self.tokens.is_current(token) {
            return Completion::Superseded;
        }
        tracing::warn!(query = %self.query, error = %error, "search could not be dispatched");
        self.is_loading = false;
        self.results.clear();
        self.error = Some(SEARCH_FAILED_MESSAGE.to_string());
        Completion::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, title: &str) -> SearchResultItem {
        SearchResultItem {
            id: id.to_string(),
            title: title.to_string(),
            year: "2013".to_string(),
            poster_url: None,
        }
    }

    fn fetch(change: QueryChange) -> SearchRequest {
        match change {
            QueryChange::Fetch(request) => request,
            QueryChange::Cleared => panic!("expected a fetch"),
        }
    }

    #[test]
    fn short_queries_never_fetch_and_clear_everything() {
        let mut search = SearchController::default();
        let request = fetch(search.set_query("frozen"));
        search.complete(request.token, Err(FetchError::Http { status: 500 }));
        assert!(search.error().is_some());

        for query in ["", "f", "fr", "  fr  "] {
            assert_eq!(search.set_query(query), QueryChange::Cleared, "{query:?}");
            assert!(search.results().is_empty());
            assert!(search.error().is_none());
            assert!(!search.is_loading());
        }
    }

    #[test]
    fn empty_query_never_fetches_even_without_minimum() {
        let mut search = SearchController::new(0);
        assert_eq!(search.min_query_len(), 1);

        assert!(matches!(search.set_query("a"), QueryChange::Fetch(_)));
        assert_eq!(search.pop_char(), QueryChange::Cleared);
        assert_eq!(search.set_query("   "), QueryChange::Cleared);
        assert!(!search.is_loading());
    }

    #[test]
    fn success_replaces_results_and_clears_error() {
        let mut search = SearchController::default();
        let request = fetch(search.set_query("frozen"));
        assert!(search.is_loading());

        let completion = search.complete(request.token, Ok(vec![item("tt2294629", "Frozen")]));
        assert_eq!(completion, Completion::Applied);
        assert!(!search.is_loading());
        assert!(search.error().is_none());
        assert_eq!(search.results().len(), 1);
    }

    #[test]
    fn not_found_sets_banner_and_empties_results() {
        let mut search = SearchController::default();
        let first = fetch(search.set_query("frozen"));
        search.complete(first.token, Ok(vec![item("tt2294629", "Frozen")]));

        let second = fetch(search.set_query("xyqqqq123"));
        search.complete(
            second.token,
            Err(FetchError::NotFound {
                message: "Movie not found!".to_string(),
            }),
        );

        assert_eq!(search.error(), Some(SEARCH_FAILED_MESSAGE));
        assert!(search.results().is_empty());
        assert!(!search.is_loading());
    }

    #[test]
    fn only_the_last_issued_query_is_reflected() {
        let mut search = SearchController::default();
        let fro = fetch(search.set_query("fro"));
        let froz = fetch(search.push_char('z'));
        let froze = fetch(search.push_char('e'));

        assert_eq!(search.complete(froze.token, Ok(vec![item("tt3", "Frozen")])), Completion::Applied);
        assert_eq!(search.complete(fro.token, Ok(vec![item("tt1", "Frost")])), Completion::Superseded);
        assert_eq!(
            search.complete(froz.token, Err(FetchError::Http { status: 500 })),
            Completion::Superseded
        );

        assert_eq!(search.results()[0].id, "tt3");
        assert!(search.error().is_none());
        assert!(!search.is_loading());
    }

    #[test]
    fn superseded_outcome_leaves_loading_flag_alone() {
        let mut search = SearchController::default();
        let old = fetch(search.set_query("heat"));
        let _new = fetch(search.set_query("heath"));

        search.complete(old.token, Ok(vec![item("tt1", "Heat")]));
        assert!(search.is_loading(), "newer request still pending");
        assert!(search.results().is_empty());
    }

    #[test]
    fn shortening_below_minimum_cancels_in_flight_request() {
        let mut search = SearchController::default();
        let request = fetch(search.set_query("abc"));
        assert_eq!(search.pop_char(), QueryChange::Cleared);

        assert_eq!(
            search.complete(request.token, Ok(vec![item("tt1", "ABC")])),
            Completion::Superseded
        );
        assert!(search.results().is_empty());
        assert!(!search.is_loading());
    }

    #[test]
    fn undispatchable_search_surfaces_the_banner() {
        let mut search = SearchController::default();
        let request = fetch(search.set_query("frozen"));
        let error = PopcornError::Config("api_key is not set".to_string());

        assert_eq!(search.fail_to_dispatch(request.token, &error), Completion::Applied);
        assert_eq!(search.error(), Some(SEARCH_FAILED_MESSAGE));
        assert!(!search.is_loading());
    }

    #[test]
    fn request_query_is_trimmed() {
        let mut search = SearchController::default();
        let request = fetch(search.set_query("  frozen "));
        assert_eq!(request.query, "frozen");
        assert_eq!(search.query(), "  frozen ");
    }
}
