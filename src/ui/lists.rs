use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::helpers::{clamp_name, field_style, format_timestamp, marker};
use super::theme::Theme;
use crate::app::App;
use crate::lists::ListMode;

pub fn build_lists_text(app: &App) -> Text<'_> {
    let page = &app.lists;
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
    if page.mode == ListMode::Multiple {
        header.push(Span::styled("   Count: ", Style::default().fg(Theme::dim())));
        header.push(Span::styled(page.count.to_string(), Style::default().fg(Theme::text())));
    }
    lines.push(Line::from(header));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        format!("Items ({})", page.items.len()),
        Style::default()
            .fg(Theme::secondary())
            .add_modifier(Modifier::BOLD),
    )));
    if page.items.is_empty() {
        lines.push(Line::from(Span::styled(
            "  The list is empty. Press a to add an item or i to import a file.",
            Style::default().fg(Theme::dim()),
        )));
    }
    for (index, item) in page.items.iter().enumerate() {
        let selected = index == page.selected;
        let mut spans = vec![
            marker(selected),
            Span::styled(clamp_name(&item.text, 32), field_style(selected)),
        ];
        if page.mode == ListMode::Weighted || item.weight.is_some() {
            spans.push(Span::styled(
                format!("  w {}", item.effective_weight()),
                Style::default().fg(Theme::dim()),
            ));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(""));

    if !page.results.is_empty() {
        lines.push(Line::from(Span::styled(
            "Result",
            Style::default().fg(Theme::dim()),
        )));
        let style = Style::default()
            .fg(Theme::result())
            .add_modifier(Modifier::BOLD);
        if page.mode == ListMode::Shuffle {
            for (index, label) in page.results.iter().enumerate() {
                lines.push(Line::from(Span::styled(
                    format!("  {:>3}. {label}", index + 1),
                    style,
                )));
            }
        } else {
            lines.push(Line::from(Span::styled(
                format!("  {}", page.results.join(", ")),
                style,
            )));
        }
        lines.push(Line::from(""));
    }

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
            Span::styled(entry.payload.as_str(), Style::default().fg(Theme::text())),
        ]));
    }

    Text::from(lines)
}
