//! Left box: search result list or its status.

use super::{status, Area};
use crate::ui::helpers::{self, char_len, fit, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ResultRow, ResultsBody};

pub fn render_results(area: Area, body: &ResultsBody, theme: &Theme) {
    match body {
        ResultsBody::Loading => status::render_loader(area, theme),
        ResultsBody::Error(message) => status::render_error(area, message, theme),
        ResultsBody::Hint(message) => status::render_hint(area, message, theme),
        ResultsBody::Items(rows) => {
            for (row, item) in area.rows().zip(rows) {
                render_row(row, area, item, theme);
            }
        }
    }
}

/// One result line:
///
/// ```text
/// ▶ Frozen                      ✓ 2013
/// ```
///
/// `▶` marks the movie open in the detail panel, `✓` one already watched.
fn render_row(row: usize, area: Area, item: &ResultRow, theme: &Theme) {
    let year = format!(" {}", truncate(&item.year, 9));
    let title_width = area
        .width
        .saturating_sub(2 + 2 + char_len(&year));
    let title = truncate(&item.title, title_width);

    position_cursor(row, area.col);
    let base = if item.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    print!("{base}");

    print!("{}", if item.is_open { "▶ " } else { "  " });
    helpers::render_highlighted_text(&title, &item.highlight_ranges, theme, item.is_selected);
    print!("{base}{}", " ".repeat(title_width.saturating_sub(char_len(&title))));

    if item.is_watched {
        if !item.is_selected {
            print!("{}", Theme::fg(&theme.colors.watched_fg));
        }
        print!("✓ ");
    } else {
        print!("  ");
    }

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", fit(&year, area.width.saturating_sub(4 + title_width)));
    print!("{}", Theme::reset());
}
