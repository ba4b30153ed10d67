//! Terminal user interface.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: plain data describing one frame
//! - [`renderer`]: the [`render`] entry point
//! - [`components`]: header, search bar, the two boxes, footer
//! - [`helpers`]: width-aware text helpers and match highlighting
//! - [`theme`]: color schemes and ANSI escapes

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    DetailView, FooterInfo, HeaderInfo, PanelInfo, RatingView, ResultRow, ResultsBody,
    SearchBarInfo, SummaryView, UIViewModel, WatchedBody, WatchedRow,
};
