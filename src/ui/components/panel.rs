//! Box frame shared by the results and watched panels.

use super::Area;
use crate::ui::helpers::{char_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PanelInfo;

/// Draws the frame of `panel` over `area` and returns the inner area when the
/// panel is expanded. A collapsed panel keeps its frame with an empty body.
///
/// ```text
/// ┌─ Results [-] ──────┐
/// │                    │
/// └────────────────────┘
/// ```
pub fn render_panel<T>(area: Area, panel: &PanelInfo<T>, theme: &Theme) -> Option<Area> {
    if area.width < 4 || area.height < 3 {
        return None;
    }

    let inner_width = area.width - 2;
    let color = Theme::fg(if panel.is_focused {
        &theme.colors.focus_border
    } else {
        &theme.colors.border
    });
    let toggle = if panel.is_open { "[-]" } else { "[+]" };
    let label = truncate(&format!(" {} {toggle} ", panel.title), inner_width.saturating_sub(1));

    position_cursor(area.row, area.col);
    print!("{color}┌─");
    if panel.is_focused {
        print!("{}", Theme::bold());
    }
    print!("{label}{}{color}", Theme::reset());
    print!(
        "{}┐",
        "─".repeat(inner_width.saturating_sub(1 + char_len(&label)))
    );

    let bottom = area.row + area.height - 1;
    for row in area.row + 1..bottom {
        position_cursor(row, area.col);
        print!("{color}│{}", " ".repeat(inner_width));
        print!("{color}│");
    }
    position_cursor(bottom, area.col);
    print!("{color}└{}┘{}", "─".repeat(inner_width), Theme::reset());

    panel.is_open.then_some(Area {
        row: area.row + 1,
        col: area.col + 1,
        width: inner_width,
        height: area.height - 2,
    })
}
