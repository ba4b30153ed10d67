//! Input mode and pane focus types.
//!
//! The plugin reads keys in one of two modes:
//! - **Normal**: navigation, selection, rating and list commands
//! - **Search**: keystrokes edit the query
//!
//! Independently, one of the two boxes has focus and receives navigation
//! keys: the search results on the left, or the watched list on the right.

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys are commands: j/k to move, Enter to open, digits to rate.
    Normal,

    /// Keys edit the search query. Enter hands focus to the results.
    #[default]
    Search,
}

/// Which of the two boxes receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    /// Left box: search results.
    #[default]
    Results,
    /// Right box: selected movie, or the watched summary and list.
    Watchlist,
}

impl Pane {
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Results => Self::Watchlist,
            Self::Watchlist => Self::Results,
        }
    }
}
