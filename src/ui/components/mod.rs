//! Component renderers.
//!
//! Each component draws one part of the screen at absolute cursor positions.
//!
//! ```text
//! row 1       (blank)
//! row 2       header
//! row 3       border
//! rows 4-6    search bar
//! rows 7..    results box | watched box
//! last row    footer
//! ```

mod detail;
mod footer;
mod header;
mod panel;
mod results;
mod search;
mod status;
mod watched;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// A rectangle of cells, 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Area {
    pub row: usize,
    pub col: usize,
    pub width: usize,
    pub height: usize,
}

impl Area {
    /// Rows of the area, top to bottom.
    pub fn rows(self) -> impl Iterator<Item = usize> {
        self.row..self.row + self.height
    }
}

/// First row of the two boxes.
const BOXES_TOP: usize = 7;

fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}{}{}", Theme::fg(color), "─".repeat(cols), Theme::reset());
    row + 1
}

/// Draws the whole screen.
pub fn render_screen(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2;
    current_row = header::render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    search::render_search_bar(current_row, &vm.search_bar, theme, cols);

    let footer_row = rows.max(BOXES_TOP + 3);
    let boxes_height = footer_row - BOXES_TOP;
    let left_width = cols / 2;

    let left = Area {
        row: BOXES_TOP,
        col: 1,
        width: left_width,
        height: boxes_height,
    };
    let right = Area {
        row: BOXES_TOP,
        col: left_width + 1,
        width: cols - left_width,
        height: boxes_height,
    };

    if let Some(inner) = panel::render_panel(left, &vm.results, theme) {
        results::render_results(inner, &vm.results.body, theme);
    }
    if let Some(inner) = panel::render_panel(right, &vm.watched, theme) {
        watched::render_watched(inner, &vm.watched.body, theme);
    }

    footer::render_footer(footer_row, &vm.footer, theme, cols);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_rows_cover_height() {
        let area = Area {
            row: 8,
            col: 1,
            width: 10,
            height: 3,
        };
        assert_eq!(area.rows().collect::<Vec<_>>(), vec![8, 9, 10]);
    }
}
