use chrono::{Local, TimeZone};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use super::theme::Theme;
use crate::color;

/// Pads or trims `value` to exactly `width` characters.
pub fn clamp_name(value: &str, width: usize) -> String {
    let value_len = value.chars().count();
    if value_len <= width {
        return format!("{value:<width$}", width = width);
    }
    let trimmed = value
        .chars()
        .take(width.saturating_sub(2))
        .collect::<String>();
    format!("{trimmed}..")
}

pub fn hex_to_color(value: &str) -> Option<Color> {
    let rgb = color::parse_hex(value).ok()?;
    Some(Color::Rgb(rgb.r, rgb.g, rgb.b))
}

/// Local wall-clock time of a history entry.
pub fn format_timestamp(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis).single() {
        Some(time) => time.format("%H:%M:%S").to_string(),
        None => "--:--:--".to_string(),
    }
}

/// A colored block with the hex code printed in its contrast color.
pub fn swatch(hex: &str, width: usize) -> Span<'static> {
    let background = hex_to_color(hex).unwrap_or(Color::Black);
    let foreground = hex_to_color(color::contrast_color(hex)).unwrap_or(Color::White);
    Span::styled(
        format!("{hex:^width$}", width = width),
        Style::default()
            .fg(foreground)
            .bg(background)
            .add_modifier(Modifier::BOLD),
    )
}

/// `> ` for the selected row, blank otherwise.
pub fn marker(selected: bool) -> Span<'static> {
    if selected {
        Span::styled(
            "> ",
            Style::default()
                .fg(Theme::selection_marker())
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw("  ")
    }
}

pub fn field_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(Theme::highlight())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Theme::text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_padded_or_trimmed() {
        assert_eq!(clamp_name("abc", 5), "abc  ");
        assert_eq!(clamp_name("abcdefgh", 5), "abc..");
    }

    #[test]
    fn hex_codes_become_terminal_colors() {
        assert_eq!(hex_to_color("#FF8000"), Some(Color::Rgb(255, 128, 0)));
        assert_eq!(hex_to_color("ff8000"), Some(Color::Rgb(255, 128, 0)));
        assert_eq!(hex_to_color("#FF80"), None);
    }

    #[test]
    fn swatch_uses_contrast_text() {
        let span = swatch("#FFFFFF", 9);
        assert_eq!(span.content, " #FFFFFF ");
        assert_eq!(span.style.fg, Some(Color::Rgb(0, 0, 0)));
        assert_eq!(span.style.bg, Some(Color::Rgb(255, 255, 255)));
    }
}
