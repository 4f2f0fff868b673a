//! Dice, numbers, lists and colors randomizers with a terminal UI.
//!
//! The sampling core (`numbers`, `lists`, `color`, `dice`) is pure and takes
//! its entropy from a [`random::RandomSource`]; `app` and `ui` hold the page
//! state and draw it.

pub mod app;
pub mod cli;
pub mod clipboard;
pub mod color;
pub mod config;
pub mod dice;
pub mod error;
pub mod event;
pub mod history;
pub mod lists;
pub mod logging;
pub mod numbers;
pub mod random;
pub mod tui;
pub mod types;
pub mod ui;
mod weighted;
