//! Shared rendering utilities.
//!
//! All widths are counted in `char`s, never bytes: movie titles routinely
//! contain accented letters and en dashes (`2011–2019`).

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed `row`, `col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `width` characters, ending in `…` when shortened.
///
/// # Examples
///
/// ```
/// use popcorn::ui::helpers::truncate;
///
/// assert_eq!(truncate("Frozen", 10), "Frozen");
/// assert_eq!(truncate("The Lord of the Rings", 10), "The Lord …");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if char_len(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Truncates then right-pads with spaces to exactly `width` characters.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let cut = truncate(text, width);
    let padding = width.saturating_sub(char_len(&cut));
    format!("{cut}{}", " ".repeat(padding))
}

/// Greedy word wrap into lines of at most `width` characters.
///
/// Words longer than a line are truncated rather than split.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let word = truncate(word, width);
        let needed = if line.is_empty() {
            char_len(&word)
        } else {
            char_len(&line) + 1 + char_len(&word)
        };

        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&word);
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Prints `text` with the given character ranges highlighted.
///
/// Ranges past the end of `text` are clipped. While a row is selected the
/// selection colors win and no match highlight is drawn.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, is_selected: bool) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(current);
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        let plain: String = chars[current..start].iter().collect();
        let highlighted: String = chars[start..end].iter().collect();
        print!(
            "{plain}{}{}{highlighted}{}{}",
            Theme::fg(&theme.colors.match_highlight_fg),
            Theme::bg(&theme.colors.match_highlight_bg),
            Theme::reset(),
            Theme::fg(&theme.colors.text_normal),
        );
        current = end;
    }

    let rest: String = chars[current..].iter().collect();
    print!("{rest}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate("Amélie", 6), "Amélie");
        assert_eq!(truncate("Amélie Poulain", 4), "Amé…");
        assert_eq!(truncate("Heat", 0), "");
    }

    #[test]
    fn fit_pads_to_width() {
        assert_eq!(fit("Up", 5), "Up   ");
        assert_eq!(char_len(&fit("Léon: The Professional", 8)), 8);
    }

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(
            wrap("When the newly crowned Queen Elsa", 12),
            vec!["When the", "newly", "crowned", "Queen Elsa"]
        );
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn wrap_truncates_overlong_words() {
        assert_eq!(wrap("Supercalifragilistic", 6), vec!["Super…"]);
    }
}
