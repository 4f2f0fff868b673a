mod colors;
mod dice;
mod lists;
mod numbers;
mod state;

use crossterm::event::KeyCode;

pub use colors::ColorsPage;
pub use dice::{DiceField, DicePage, ROLL_FRAMES, RollAnimation};
pub use lists::{ListsPage, parse_entry};
pub use numbers::{NumberField, NumbersPage, format_weighted, parse_weighted};
pub use state::{App, ConfirmAction, ConfirmPopup, InputPopup, InputTarget};

/// Possible input events the app reacts to.
pub enum AppEvent {
    Tick,
    KeyPress(KeyCode),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppView {
    Dice,
    Numbers,
    Lists,
    Colors,
    Help,
}

impl AppView {
    pub fn title(self) -> &'static str {
        match self {
            AppView::Dice => "Dice",
            AppView::Numbers => "Numbers",
            AppView::Lists => "Lists",
            AppView::Colors => "Colors",
            AppView::Help => "Help",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusMode {
    TabBar,
    Content,
}

pub const TABS: [AppView; 5] = [
    AppView::Dice,
    AppView::Numbers,
    AppView::Lists,
    AppView::Colors,
    AppView::Help,
];
