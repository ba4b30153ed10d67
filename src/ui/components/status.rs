//! One-line status messages drawn inside a box: loader, error banner, hint.

use super::Area;
use crate::ui::helpers::{char_len, position_cursor, truncate};
use crate::ui::theme::Theme;

pub fn render_loader(area: Area, theme: &Theme) {
    render_centered(area, "Loading...", &theme.colors.loader_fg, false);
}

/// Error banner, prefixed with a stop sign.
pub fn render_error(area: Area, message: &str, theme: &Theme) {
    render_centered(area, &format!("⛔ {message}"), &theme.colors.error_fg, true);
}

pub fn render_hint(area: Area, message: &str, theme: &Theme) {
    render_centered(area, message, &theme.colors.hint_fg, false);
}

fn render_centered(area: Area, text: &str, color: &str, bold: bool) {
    if area.height == 0 {
        return;
    }
    let text = truncate(text, area.width);
    let padding = area.width.saturating_sub(char_len(&text)) / 2;

    position_cursor(area.row + area.height.min(2) - 1, area.col + padding);
    if bold {
        print!("{}", Theme::bold());
    }
    print!("{}{text}{}", Theme::fg(color), Theme::reset());
}
