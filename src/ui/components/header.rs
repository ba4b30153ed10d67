//! Header bar: app title on the left, result count on the right.

use crate::ui::helpers::{char_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = format!(" {}", header.title);
    let count = truncate(&header.result_count, cols.saturating_sub(char_len(&title) + 2));
    let gap = cols.saturating_sub(char_len(&title) + char_len(&count) + 2);

    position_cursor(row, 1);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{title}{}{count}  ", " ".repeat(gap));
    print!("{}", Theme::reset());
    row + 1
}
