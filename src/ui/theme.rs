use ratatui::style::Color;

/// Unified color theme for the application
pub struct Theme;

impl Theme {
    /// Header badge
    pub fn primary() -> Color {
        Color::Magenta
    }

    /// Borders and section titles
    pub fn secondary() -> Color {
        Color::Cyan
    }

    /// Selected field or tab
    pub fn highlight() -> Color {
        Color::Cyan
    }

    pub fn selection_marker() -> Color {
        Color::Green
    }

    /// Freshly generated results
    pub fn result() -> Color {
        Color::LightGreen
    }

    /// Dice still tumbling
    pub fn rolling() -> Color {
        Color::Yellow
    }

    pub fn dim() -> Color {
        Color::DarkGray
    }

    pub fn text() -> Color {
        Color::White
    }

    /// Numbers, counts and headings
    pub fn accent() -> Color {
        Color::LightBlue
    }
}
