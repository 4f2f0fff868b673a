mod colors;
mod dice;
mod help;
mod helpers;
mod lists;
mod numbers;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::app::{App, AppView, ConfirmPopup, FocusMode, InputPopup, TABS};
use theme::Theme;

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let body_text = match app.view {
        AppView::Dice => dice::build_dice_text(app),
        AppView::Numbers => numbers::build_numbers_text(app),
        AppView::Lists => lists::build_lists_text(app),
        AppView::Colors => colors::build_colors_text(app),
        AppView::Help => help::build_help_text(),
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    let header_lines = vec![Line::from(vec![
        Span::styled(
            "  Randomizer  ",
            Style::default().fg(Color::Black).bg(Theme::primary()),
        ),
        Span::raw(" "),
        Span::styled(
            "dice, numbers, lists and colors",
            Style::default()
                .fg(Theme::secondary())
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    let header = Paragraph::new(Text::from(header_lines))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        );
    frame.render_widget(header, layout[0]);

    let mut body_lines = vec![
        tabs_line(app),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", app.view.title()),
            Style::default()
                .fg(Theme::accent())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    body_lines.extend(body_text.lines);
    body_lines.push(Line::from(""));
    body_lines.push(Line::from(Span::styled(
        "----------------------------------------",
        Style::default().fg(Theme::dim()),
    )));
    body_lines.extend(keybinds_lines(app));
    let body = Paragraph::new(Text::from(body_lines))
        .style(Style::default().fg(Theme::text()))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        );
    frame.render_widget(body, layout[1]);

    let footer = Paragraph::new(Text::from(status_line(app)))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        );
    frame.render_widget(footer, layout[2]);

    if let Some(popup) = &app.input_popup {
        render_input_popup(frame, popup);
    }
    if let Some(popup) = &app.confirm_popup {
        render_confirm_popup(frame, popup);
    }
}

fn render_input_popup(frame: &mut Frame, popup: &InputPopup) {
    let area = centered_rect(60, 30, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            popup.title.as_str(),
            Style::default()
                .fg(Theme::accent())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(Theme::selection_marker())),
            Span::styled(
                popup.value.as_str(),
                Style::default()
                    .fg(Theme::highlight())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("_", Style::default().fg(Theme::dim())),
        ]),
        Line::from(""),
        Line::from(Span::styled(popup.hint, Style::default().fg(Theme::dim()))),
        Line::from(Span::styled(
            "Enter: save. Esc: cancel.",
            Style::default().fg(Theme::dim()),
        )),
    ];

    let popup_widget = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary()))
                .title(" Input "),
        );
    frame.render_widget(popup_widget, area);
}

fn render_confirm_popup(frame: &mut Frame, popup: &ConfirmPopup) {
    let area = centered_rect(60, 30, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = Vec::new();
    lines.push(Line::from(Span::styled(
        "Confirm Action",
        Style::default()
            .fg(Theme::accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        &popup.message,
        Style::default().fg(Theme::text()),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Press ", Style::default().fg(Theme::dim())),
        Span::styled("Y", Style::default().fg(Theme::highlight()).add_modifier(Modifier::BOLD)),
        Span::styled(" to confirm or ", Style::default().fg(Theme::dim())),
        Span::styled("N", Style::default().fg(Theme::highlight()).add_modifier(Modifier::BOLD)),
        Span::styled("/", Style::default().fg(Theme::dim())),
        Span::styled("ESC", Style::default().fg(Theme::highlight()).add_modifier(Modifier::BOLD)),
        Span::styled(" to cancel", Style::default().fg(Theme::dim())),
    ]));

    let popup_widget = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary()))
                .title(" Confirm "),
        );
    frame.render_widget(popup_widget, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ]
            .as_ref(),
        )
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ]
            .as_ref(),
        )
        .split(popup_layout[1])[1]
}

fn tabs_line(app: &App) -> Line<'_> {
    let mut spans = Vec::new();
    for (index, view) in TABS.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        let active = *view == app.view;
        let focused = app.focus_mode == FocusMode::TabBar && app.selected_tab_index == index;
        let style = if active {
            Style::default()
                .fg(Color::Black)
                .bg(Theme::highlight())
                .add_modifier(Modifier::BOLD)
        } else if focused {
            Style::default()
                .fg(Theme::highlight())
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Theme::dim())
        };
        spans.push(Span::styled(format!(" {} ", view.title()), style));
    }

    Line::from(spans)
}

fn status_line(app: &App) -> Line<'_> {
    if let Some(status) = &app.status {
        return Line::from(Span::styled(
            status.as_str(),
            Style::default()
                .fg(Theme::text())
                .add_modifier(Modifier::BOLD),
        ));
    }
    if app.dice.is_rolling() {
        return Line::from(Span::styled(
            "Rolling...",
            Style::default()
                .fg(Theme::rolling())
                .add_modifier(Modifier::BOLD),
        ));
    }
    let engine = if app.dice_engine_ready() {
        "● Dice engine ready"
    } else {
        "● Dice engine unavailable, rolling directly"
    };
    Line::from(Span::styled(engine, Style::default().fg(Theme::dim())))
}

fn keybinds_lines(app: &App) -> Vec<Line<'static>> {
    let focus_hint = if app.focus_mode == FocusMode::TabBar {
        "Tab: Switch to content  ←/→: Navigate tabs  Enter: Select"
    } else {
        "Tab: Switch to tab bar  F1-F4: Quick nav"
    };

    let (primary, secondary) = match app.view {
        AppView::Dice => (
            "Up/Down: Field  Left/Right: Change  e: Edit  Enter: Roll  1-7: Quick roll",
            "y: Copy  x: Clear history  ?: Help  q: Quit",
        ),
        AppView::Numbers => (
            "Up/Down: Field  Left/Right: Change  e: Edit  m: Mode  a/d: Add/Delete value",
            "Enter: Generate  y: Copy  x: Clear history  ?: Help  q: Quit",
        ),
        AppView::Lists => (
            "Up/Down: Select  a: Add  d: Delete  w: Weight  c: Clear  i: Import  o: Export",
            "m: Mode  Left/Right: Count  Enter: Pick  y: Copy  x: Clear history  q: Quit",
        ),
        AppView::Colors => (
            "m: Mode  Left/Right: Palette size  i: Inspect  Enter: Generate",
            "y: Copy  x: Clear history  ?: Help  q: Quit",
        ),
        AppView::Help => ("Press ? or ESC to close this help screen", ""),
    };
    vec![
        Line::from(Span::styled(
            focus_hint,
            Style::default().fg(Theme::highlight()),
        )),
        Line::from(Span::styled(primary, Style::default().fg(Theme::dim()))),
        Line::from(Span::styled(secondary, Style::default().fg(Theme::dim()))),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppEvent;
    use crate::clipboard::MemoryClipboard;
    use crate::config::Config;
    use crate::dice::TumbleEngine;
    use crate::random::SeededSource;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 60)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn every_view_renders() {
        let mut app = App::new(
            &Config::default(),
            Box::new(SeededSource::new(3)),
            Box::new(TumbleEngine::new(Box::new(SeededSource::new(4)))),
            Box::new(MemoryClipboard::default()),
        );
        assert!(screen(&app).contains("Randomizer"));
        for key in [KeyCode::F(1), KeyCode::F(2), KeyCode::F(3), KeyCode::F(4)] {
            app.update(AppEvent::KeyPress(key));
            app.update(AppEvent::KeyPress(KeyCode::Enter));
            let title = app.view.title();
            assert!(screen(&app).contains(title), "{title}");
        }
        app.update(AppEvent::KeyPress(KeyCode::Char('?')));
        assert!(screen(&app).contains("Key bindings"));
    }

    #[test]
    fn popups_render_over_the_page() {
        let mut app = App::new(
            &Config::default(),
            Box::new(SeededSource::new(3)),
            Box::new(TumbleEngine::new(Box::new(SeededSource::new(4)))),
            Box::new(MemoryClipboard::default()),
        );
        app.update(AppEvent::KeyPress(KeyCode::F(3)));
        app.update(AppEvent::KeyPress(KeyCode::Char('c')));
        assert!(screen(&app).contains("Confirm Action"));
        app.update(AppEvent::KeyPress(KeyCode::Esc));
        app.update(AppEvent::KeyPress(KeyCode::Char('a')));
        assert!(screen(&app).contains("Add item"));
    }
}
