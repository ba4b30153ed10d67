//! Selected movie panel.

use super::Area;
use crate::ui::helpers::{fit, position_cursor, wrap};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailView, RatingView};

/// Lays the movie out top to bottom, dropping whatever does not fit:
///
/// ```text
/// Frozen
/// 27 Nov 2013 • 102 min
/// Animation, Adventure, Comedy
/// ⭐ 7.4 IMDb rating
///
/// Your rating: ★★★★★★★★☆☆ 8   a: add to list
///
/// When the newly crowned Queen Elsa accidentally…
///
/// Starring Kristen Bell, Idina Menzel
/// Directed by Chris Buck, Jennifer Lee
/// ```
pub fn render_detail(area: Area, view: &DetailView, theme: &Theme) {
    let mut lines: Vec<(String, String, bool)> = vec![
        (view.title.clone(), theme.colors.header_fg.clone(), true),
        (view.release_line.clone(), theme.colors.text_dim.clone(), false),
        (view.genre.clone(), theme.colors.text_dim.clone(), false),
        (format!("⭐ {}", view.imdb_rating), theme.colors.rating_fg.clone(), false),
        (String::new(), theme.colors.text_normal.clone(), false),
        (rating_line(view.rating), theme.colors.rating_fg.clone(), false),
        (String::new(), theme.colors.text_normal.clone(), false),
    ];

    for line in wrap(&view.plot, area.width) {
        lines.push((line, theme.colors.text_normal.clone(), false));
    }
    lines.push((String::new(), theme.colors.text_normal.clone(), false));
    for line in wrap(&format!("Starring {}", view.actors), area.width) {
        lines.push((line, theme.colors.text_dim.clone(), false));
    }
    for line in wrap(&format!("Directed by {}", view.director), area.width) {
        lines.push((line, theme.colors.text_dim.clone(), false));
    }

    for (row, (text, color, bold)) in area.rows().zip(&lines) {
        position_cursor(row, area.col);
        if *bold {
            print!("{}", Theme::bold());
        }
        print!("{}{}{}", Theme::fg(color), fit(text, area.width), Theme::reset());
    }
}

fn rating_line(rating: RatingView) -> String {
    match rating {
        RatingView::Rated(value) => format!("You rated this movie {value} ⭐"),
        RatingView::Choosing { pending: None, .. } => "Rate it: press 1-9 or 0 for 10".to_string(),
        RatingView::Choosing {
            pending: Some(value),
            can_add,
        } => {
            let stars = usize::from(value);
            let hint = if can_add { "   a: add to list" } else { "" };
            format!("{}{} {value}{hint}", "★".repeat(stars), "☆".repeat(10 - stars.min(10)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_line_reflects_state() {
        assert_eq!(rating_line(RatingView::Rated(9)), "You rated this movie 9 ⭐");
        assert_eq!(
            rating_line(RatingView::Choosing {
                pending: Some(3),
                can_add: true
            }),
            "★★★☆☆☆☆☆☆☆ 3   a: add to list"
        );
        assert!(rating_line(RatingView::Choosing {
            pending: None,
            can_add: false
        })
        .starts_with("Rate it"));
    }
}
