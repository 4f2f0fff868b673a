use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;

pub fn build_help_text() -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Key bindings",
        Style::default()
            .fg(Theme::accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section_title("Global"));
    lines.extend(section_lines(&[
        "q: Quit",
        "?: Toggle help",
        "Tab: Toggle focus (tab bar / content)",
        "Left/Right: Navigate tabs (tab bar focus)",
        "Enter: Activate tab (tab bar focus)",
        "F1-F4: Dice, Numbers, Lists, Colors",
        "esc: Back",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Every page"));
    lines.extend(section_lines(&[
        "Enter/space: Generate",
        "y: Copy the result",
        "x: Clear history",
        "m: Cycle mode (numbers, lists, colors)",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Dice"));
    lines.extend(section_lines(&[
        "Up/Down: Select die, quantity or modifier",
        "Left/Right: Change the selected field",
        "e: Type a value",
        "1-7: Roll a single d4, d6, d8, d10, d12, d20 or d100",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Numbers"));
    lines.extend(section_lines(&[
        "Up/Down: Select field, or value in the weighted table",
        "Left/Right: Step the selected field",
        "e: Type a value",
        "a/d: Add or delete a weighted value",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Lists"));
    lines.extend(section_lines(&[
        "Up/Down: Move selection",
        "Left/Right/e: Change how many items to pick",
        "a: Add item (text or text=weight)",
        "d: Delete item",
        "w: Edit item weight",
        "c: Clear the list",
        "i: Import a text file",
        "o: Copy the list, one item per line",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Colors"));
    lines.extend(section_lines(&[
        "Left/Right/e: Palette size",
        "i: Inspect a hex code",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Popups"));
    lines.extend(section_lines(&[
        "Input: type, Backspace delete, Enter save, Esc cancel",
        "Confirm: y confirm, n/Esc cancel",
    ]));

    Text::from(lines)
}

fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(Theme::secondary())
            .add_modifier(Modifier::BOLD),
    ))
}

fn section_lines(items: &[&str]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(Span::styled(
                format!("  - {item}"),
                Style::default().fg(Theme::text()),
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_page() {
        let text = build_help_text();
        let rendered: Vec<String> = text.lines.iter().map(|line| line.to_string()).collect();
        for title in ["Global", "Dice", "Numbers", "Lists", "Colors", "Popups"] {
            assert!(rendered.iter().any(|line| line.trim() == title), "{title}");
        }
    }
}
