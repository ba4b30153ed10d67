//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready data only: selection already
//! windowed, numbers already formatted, highlight ranges already computed.
//!
//! ```text
//! ┌ header: usePopcorn · Found 10 results ────────────────────┐
//! │ search bar                                                │
//! ├ results box ────────────────┬ watched box ────────────────┤
//! │ loader | banner | rows      │ detail | summary + rows     │
//! └─────────────────────────────┴─────────────────────────────┘
//!   footer keybindings
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub search_bar: SearchBarInfo,
    pub results: PanelInfo<ResultsBody>,
    pub watched: PanelInfo<WatchedBody>,
    pub footer: FooterInfo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// `Found N results`.
    pub result_count: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    /// Whether keystrokes currently edit the query.
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// One of the two boxes, collapsible independently.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelInfo<T> {
    pub title: String,
    pub is_open: bool,
    pub is_focused: bool,
    pub body: T,
}

/// Contents of the left box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsBody {
    Loading,
    /// Error banner; replaces the list.
    Error(String),
    Items(Vec<ResultRow>),
    /// Nothing searched yet, or the query is too short.
    Hint(String),
}

/// Display information for a single search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub title: String,
    pub year: String,
    pub is_selected: bool,
    /// The detail panel shows this movie.
    pub is_open: bool,
    pub is_watched: bool,
    /// Character ranges of the title matching the query, `(start, end)` exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Contents of the right box.
#[derive(Debug, Clone, PartialEq)]
pub enum WatchedBody {
    DetailLoading,
    DetailError(String),
    Detail(DetailView),
    List {
        summary: SummaryView,
        rows: Vec<WatchedRow>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub title: String,
    pub release_line: String,
    pub genre: String,
    pub imdb_rating: String,
    pub plot: String,
    pub actors: String,
    pub director: String,
    pub rating: RatingView,
}

/// Rating widget state inside the detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingView {
    /// Already in the watched list; shows the stored rating, no input.
    Rated(u8),
    Choosing {
        pending: Option<u8>,
        can_add: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub count: usize,
    pub imdb_rating: String,
    pub user_rating: String,
    pub runtime: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchedRow {
    pub title: String,
    pub imdb_rating: String,
    pub user_rating: String,
    pub runtime: String,
    pub is_selected: bool,
}
