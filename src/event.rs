use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tracing::debug;

use crate::app::{App, AppEvent};

/// How often the app ticks when no key arrives. Dice animation frames advance
/// once per tick.
pub const TICK_RATE: Duration = Duration::from_millis(250);

/// Polls for crossterm events and maps them to `AppEvent`s.
pub fn poll(timeout: Duration) -> Result<Option<AppEvent>> {
    if event::poll(timeout)? {
        return Ok(match event::read()? {
            Event::Key(key) => map_key(key),
            _ => None,
        });
    }
    Ok(Some(AppEvent::Tick))
}

/// Only presses count; repeats and releases are dropped.
fn map_key(key: KeyEvent) -> Option<AppEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    Some(AppEvent::KeyPress(key.code))
}

/// Runs the main event loop.
pub fn run(app: &mut App, terminal: &mut crate::tui::Terminal) -> Result<()> {
    debug!(tick_ms = TICK_RATE.as_millis() as u64, "event loop started");
    while app.running {
        terminal.draw(|frame| crate::ui::draw(frame, app))?;

        if let Some(event) = poll(TICK_RATE)? {
            app.update(event);
        }
    }
    debug!("event loop stopped");
    Ok(())
}
