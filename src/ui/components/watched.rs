//! Right box: the open movie, or the watched summary and list.

use super::{detail, status, Area};
use crate::ui::helpers::{char_len, fit, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SummaryView, WatchedBody, WatchedRow};

pub fn render_watched(area: Area, body: &WatchedBody, theme: &Theme) {
    match body {
        WatchedBody::DetailLoading => status::render_loader(area, theme),
        WatchedBody::DetailError(message) => status::render_error(area, message, theme),
        WatchedBody::Detail(view) => detail::render_detail(area, view, theme),
        WatchedBody::List { summary, rows } => {
            if area.height == 0 {
                return;
            }
            render_summary(area, summary, theme);
            for (row, record) in area.rows().skip(3).zip(rows) {
                render_row(row, area, record, theme);
            }
        }
    }
}

/// ```text
/// MOVIES YOU WATCHED
/// 2 movies  IMDb 7.00  You 8.00  110 min
/// ──────────────────────────────
/// ```
fn render_summary(area: Area, summary: &SummaryView, theme: &Theme) {
    position_cursor(area.row, area.col);
    print!(
        "{}{}{}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.header_fg),
        fit("MOVIES YOU WATCHED", area.width),
        Theme::reset()
    );

    if area.height < 2 {
        return;
    }
    let noun = if summary.count == 1 { "movie" } else { "movies" };
    let stats = format!(
        "{} {noun}  IMDb {}  You {}  {}",
        summary.count, summary.imdb_rating, summary.user_rating, summary.runtime
    );
    position_cursor(area.row + 1, area.col);
    print!("{}{}{}", Theme::fg(&theme.colors.rating_fg), fit(&stats, area.width), Theme::reset());

    if area.height < 3 {
        return;
    }
    position_cursor(area.row + 2, area.col);
    print!("{}{}{}", Theme::fg(&theme.colors.border), "─".repeat(area.width), Theme::reset());
}

/// `Frozen            7.4 / 8  102 min`: IMDb rating, your rating, runtime.
fn render_row(row: usize, area: Area, record: &WatchedRow, theme: &Theme) {
    let stats = format!("  {} / {}  {}", record.imdb_rating, record.user_rating, record.runtime);
    let title_width = area.width.saturating_sub(char_len(&stats));
    let title = truncate(&record.title, title_width);

    position_cursor(row, area.col);
    if record.is_selected {
        print!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        );
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
    print!("{}", fit(&title, title_width));
    if !record.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}{}", fit(&stats, area.width - title_width), Theme::reset());
}
