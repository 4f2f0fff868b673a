use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::helpers::{clamp_name, field_style, format_timestamp, marker};
use super::theme::Theme;
use crate::app::{App, DiceField};

pub fn build_dice_text(app: &App) -> Text<'_> {
    let page = &app.dice;
    let mut lines = Vec::new();

    for field in DiceField::ALL {
        let selected = page.field == field;
        let value = match field {
            DiceField::Die => page.die.label().to_string(),
            DiceField::Quantity => page.quantity.to_string(),
            DiceField::Modifier => format!("{:+}", page.modifier),
        };
        lines.push(Line::from(vec![
            marker(selected),
            Span::styled(format!("{:<10}", field.label()), Style::default().fg(Theme::dim())),
            Span::styled(value, field_style(selected)),
        ]));
    }
    lines.push(Line::from(""));

    match page.notation() {
        Ok(notation) => lines.push(Line::from(vec![
            Span::styled("Notation: ", Style::default().fg(Theme::dim())),
            Span::styled(notation.to_string(), Style::default().fg(Theme::accent())),
            Span::styled("   Range: ", Style::default().fg(Theme::dim())),
            Span::styled(
                format!("{} - {}", notation.min_total(), notation.max_total()),
                Style::default().fg(Theme::text()),
            ),
            Span::styled("   Engine: ", Style::default().fg(Theme::dim())),
            Span::styled(
                if app.dice_engine_ready() { "ready" } else { "direct" },
                Style::default().fg(Theme::text()),
            ),
        ])),
        Err(err) => lines.push(Line::from(err.to_string())),
    }
    lines.push(Line::from(""));

    if let Some(animation) = &page.rolling {
        lines.push(Line::from(vec![
            Span::styled(
                "Rolling  ",
                Style::default()
                    .fg(Theme::rolling())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(faces_text(&animation.faces), Style::default().fg(Theme::rolling())),
        ]));
    } else if let Some(roll) = &page.last {
        let mut spans = vec![
            Span::styled("Total  ", Style::default().fg(Theme::dim())),
            Span::styled(
                roll.total.to_string(),
                Style::default()
                    .fg(Theme::result())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(faces_text(&roll.faces), Style::default().fg(Theme::text())),
        ];
        if roll.notation.modifier != 0 {
            spans.push(Span::styled(
                format!("   base {} {:+}", roll.base(), roll.notation.modifier),
                Style::default().fg(Theme::dim()),
            ));
        }
        lines.push(Line::from(spans));
    } else {
        lines.push(Line::from(Span::styled(
            "Press Enter to roll, or 1-7 for a single d4 ... d100.",
            Style::default().fg(Theme::dim()),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Roll history ({})", page.history.len()),
        Style::default()
            .fg(Theme::secondary())
            .add_modifier(Modifier::BOLD),
    )));
    if page.history.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No rolls yet",
            Style::default().fg(Theme::dim()),
        )));
    }
    for entry in page.history.iter().take(10) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}  ", format_timestamp(entry.timestamp)),
                Style::default().fg(Theme::dim()),
            ),
            Span::styled(
                clamp_name(&entry.payload.notation.to_string(), 12),
                Style::default().fg(Theme::text()),
            ),
            Span::styled(
                format!("{:>6}", entry.payload.total),
                Style::default().fg(Theme::accent()),
            ),
        ]));
    }

    Text::from(lines)
}

fn faces_text(faces: &[u32]) -> String {
    faces
        .iter()
        .map(|face| format!("[{face}]"))
        .collect::<Vec<_>>()
        .join(" ")
}
