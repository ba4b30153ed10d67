//! Search input box.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin on both sides of the box.
const SEARCH_BOX_MARGIN: usize = 2;

const PLACEHOLDER: &str = "Search movies...";

/// Draws the 3-line box and returns the row after it.
///
/// ```text
///   ┌──────────────────────────┐
///   │ Search: frozen▏          │
///   └──────────────────────────┘
/// ```
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let border = Theme::fg(if search.is_active {
        &theme.colors.search_bar_border
    } else {
        &theme.colors.border
    });

    position_cursor(row, 1);
    print!("{margin}{border}┌{}┐{}", "─".repeat(inner_width), Theme::reset());

    let (text, color) = if search.query.is_empty() && !search.is_active {
        (format!(" {PLACEHOLDER}"), &theme.colors.text_dim)
    } else {
        let cursor = if search.is_active { "▏" } else { "" };
        (format!(" Search: {}{cursor}", search.query), &theme.colors.text_normal)
    };

    position_cursor(row + 1, 1);
    print!(
        "{margin}{border}│{}{}{border}│{}",
        Theme::fg(color),
        fit(&text, inner_width),
        Theme::reset()
    );

    position_cursor(row + 2, 1);
    print!("{margin}{border}└{}┘{}", "─".repeat(inner_width), Theme::reset());

    row + 3
}
