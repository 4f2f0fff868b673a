use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::helpers::{format_timestamp, swatch};
use super::theme::Theme;
use crate::app::App;
use crate::color::ColorMode;
use crate::types::Color;

pub fn build_colors_text(app: &App) -> Text<'_> {
    let page = &app.colors;
    let mut lines = Vec::new();

    let mut header = vec![
        Span::styled("Mode: ", Style::default().fg(Theme::dim())),
        Span::styled(
            page.mode.label(),
            Style::default()
                .fg(Theme::accent())
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if page.mode == ColorMode::Palette {
        header.push(Span::styled("   Size: ", Style::default().fg(Theme::dim())));
        header.push(Span::styled(
            page.palette_size.to_string(),
            Style::default().fg(Theme::text()),
        ));
    }
    lines.push(Line::from(header));
    lines.push(Line::from(""));

    if let Some(color) = &page.inspected {
        lines.push(Line::from(Span::styled(
            "Inspected",
            Style::default().fg(Theme::dim()),
        )));
        lines.push(color_line(color));
        lines.push(Line::from(""));
    }

    if page.results.is_empty() {
        lines.push(Line::from(Span::styled(
            "Press Enter to generate, or i to inspect a hex code.",
            Style::default().fg(Theme::dim()),
        )));
    } else {
        for color in &page.results {
            lines.push(color_line(color));
        }
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        format!("History ({})", page.history.len()),
        Style::default()
            .fg(Theme::secondary())
            .add_modifier(Modifier::BOLD),
    )));
    for entry in page.history.iter().take(8) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}  ", format_timestamp(entry.timestamp)),
                Style::default().fg(Theme::dim()),
            ),
            swatch(&entry.payload.hex, 9),
            Span::styled(
                format!("  {}", entry.payload.name),
                Style::default().fg(Theme::text()),
            ),
        ]));
    }

    Text::from(lines)
}

fn color_line(color: &Color) -> Line<'static> {
    Line::from(vec![
        Span::raw("  "),
        swatch(&color.hex, 11),
        Span::styled(
            format!("  {:<20} {:<22} ", color.rgb.to_string(), color.hsl.to_string()),
            Style::default().fg(Theme::text()),
        ),
        Span::styled(color.name.clone(), Style::default().fg(Theme::accent())),
    ])
}
