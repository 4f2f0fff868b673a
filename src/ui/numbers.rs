use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::helpers::{field_style, format_timestamp, marker};
use super::theme::Theme;
use crate::app::{App, NumberField};

pub fn build_numbers_text(app: &App) -> Text<'_> {
    let page = &app.numbers;
    let mut lines = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("Mode: ", Style::default().fg(Theme::dim())),
        Span::styled(
            page.mode.label(),
            Style::default()
                .fg(Theme::accent())
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(""));

    for field in page.fields() {
        let selected = page.field == *field;
        if *field == NumberField::Values {
            lines.push(Line::from(vec![
                marker(selected),
                Span::styled(field.label(), field_style(selected)),
            ]));
            lines.push(Line::from(Span::styled(
                format!("    {:>10} {:>10} {:>8}", "Value", "Weight", "Chance"),
                Style::default().fg(Theme::secondary()),
            )));
            let total: f64 = page.weighted.iter().map(|value| value.weight).sum();
            for (index, value) in page.weighted.iter().enumerate() {
                let row_selected = selected && index == page.selected_value;
                let chance = if total > 0.0 {
                    value.weight / total * 100.0
                } else {
                    0.0
                };
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    marker(row_selected),
                    Span::styled(
                        format!("{:>10} {:>10} {:>7.1}%", value.value, value.weight, chance),
                        field_style(row_selected),
                    ),
                ]));
            }
            continue;
        }
        let value = match field {
            NumberField::Min => page.min.to_string(),
            NumberField::Max => page.max.to_string(),
            NumberField::Count => page.count.to_string(),
            NumberField::Decimals => page.decimals.to_string(),
            NumberField::Values => String::new(),
        };
        lines.push(Line::from(vec![
            marker(selected),
            Span::styled(format!("{:<10}", field.label()), Style::default().fg(Theme::dim())),
            Span::styled(value, field_style(selected)),
        ]));
    }
    lines.push(Line::from(""));

    if page.results.is_empty() {
        lines.push(Line::from(Span::styled(
            "Press Enter to generate.",
            Style::default().fg(Theme::dim()),
        )));
    } else {
        let shown = page
            .results
            .iter()
            .take(50)
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let more = page.results.len().saturating_sub(50);
        lines.push(Line::from(vec![
            Span::styled("Result  ", Style::default().fg(Theme::dim())),
            Span::styled(
                shown,
                Style::default()
                    .fg(Theme::result())
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        if more > 0 {
            lines.push(Line::from(Span::styled(
                format!("        ... and {more} more"),
                Style::default().fg(Theme::dim()),
            )));
        }
        if let Some(summary) = page.summary().filter(|summary| summary.count > 1) {
            lines.push(Line::from(Span::styled(
                format!("        {summary}"),
                Style::default().fg(Theme::accent()),
            )));
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
            Span::styled(entry.payload.to_string(), Style::default().fg(Theme::text())),
        ]));
    }

    Text::from(lines)
}
