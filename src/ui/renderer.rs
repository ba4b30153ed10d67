//! Top-level rendering entry point.
//!
//! Rendering is two steps: [`AppState::compute_viewmodel`] turns state into a
//! [`UIViewModel`](crate::ui::viewmodel::UIViewModel), then the components
//! print it.
//!
//! # Example
//!
//! ```rust
//! use popcorn::api::OmdbEndpoint;
//! use popcorn::app::{AppState, DEFAULT_MIN_QUERY_LEN};
//! use popcorn::ui::{render, Theme};
//!
//! let state = AppState::new(OmdbEndpoint::default(), DEFAULT_MIN_QUERY_LEN, Theme::default());
//! render(&state, 24, 80);
//! ```

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// Output is ANSI escapes positioned absolutely; the screen is not cleared.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_screen(&viewmodel, &state.theme, rows, cols);
}
