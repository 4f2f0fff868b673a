use std::path::PathBuf;

use crossterm::event::KeyCode;
use tracing::{info, warn};

use crate::clipboard::ClipboardSink;
use crate::config::Config;
use crate::dice::{DiceEngine, DiceNotation, DiceRoller, DieType};
use crate::random::RandomSource;

use super::{
    AppEvent, AppView, ColorsPage, DiceField, DicePage, FocusMode, ListsPage, NumberField,
    NumbersPage, TABS, parse_entry, parse_weighted,
};

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub view: AppView,
    view_before_help: AppView,
    pub focus_mode: FocusMode,
    pub selected_tab_index: usize,
    pub status: Option<String>,
    pub dice: DicePage,
    pub numbers: NumbersPage,
    pub lists: ListsPage,
    pub colors: ColorsPage,
    pub input_popup: Option<InputPopup>,
    pub confirm_popup: Option<ConfirmPopup>,
    rng: Box<dyn RandomSource>,
    roller: DiceRoller<Box<dyn DiceEngine>>,
    clipboard: Box<dyn ClipboardSink>,
}

/// What an [`InputPopup`] writes to when confirmed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputTarget {
    DiceField,
    NumberField,
    NewWeightedValue,
    NewListItem,
    ListItemWeight,
    ListCount,
    ListImport,
    PaletteSize,
    InspectHex,
}

#[derive(Clone, Debug)]
pub struct InputPopup {
    pub title: String,
    pub hint: &'static str,
    pub value: String,
    pub target: InputTarget,
}

impl InputPopup {
    fn new(title: impl Into<String>, hint: &'static str, value: String, target: InputTarget) -> Self {
        Self {
            title: title.into(),
            hint,
            value,
            target,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmAction {
    ClearList,
}

#[derive(Clone, Debug)]
pub struct ConfirmPopup {
    pub message: String,
    pub action: ConfirmAction,
}

impl App {
    pub fn new(
        config: &Config,
        rng: Box<dyn RandomSource>,
        engine: Box<dyn DiceEngine>,
        clipboard: Box<dyn ClipboardSink>,
    ) -> Self {
        Self {
            running: true,
            view: AppView::Dice,
            view_before_help: AppView::Dice,
            focus_mode: FocusMode::Content,
            selected_tab_index: 0,
            status: None,
            dice: DicePage::new(&config.dice),
            numbers: NumbersPage::new(&config.numbers),
            lists: ListsPage::new(&config.lists),
            colors: ColorsPage::new(&config.colors),
            input_popup: None,
            confirm_popup: None,
            rng,
            roller: DiceRoller::new(engine),
            clipboard,
        }
    }

    pub fn dice_engine_ready(&self) -> bool {
        self.roller.is_ready()
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => self.advance_roll(),
            AppEvent::KeyPress(key) => self.handle_key(key),
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        if self.confirm_popup.is_some() {
            self.handle_confirm_key(key);
            return;
        }
        if self.input_popup.is_some() {
            self.handle_input_key(key);
            return;
        }

        match key {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('?') => {
                if self.view == AppView::Help {
                    self.go_back();
                } else {
                    self.navigate_to(AppView::Help);
                }
            }
            KeyCode::Tab => {
                self.focus_mode = match self.focus_mode {
                    FocusMode::TabBar => FocusMode::Content,
                    FocusMode::Content => FocusMode::TabBar,
                };
            }
            KeyCode::F(n @ 1..=4) => {
                self.navigate_to(TABS[usize::from(n) - 1]);
                self.focus_mode = FocusMode::Content;
            }
            KeyCode::Esc => self.go_back(),
            _ if self.focus_mode == FocusMode::TabBar => self.handle_tab_bar_key(key),
            _ => match self.view {
                AppView::Dice => self.handle_dice_key(key),
                AppView::Numbers => self.handle_numbers_key(key),
                AppView::Lists => self.handle_lists_key(key),
                AppView::Colors => self.handle_colors_key(key),
                AppView::Help => {}
            },
        }
    }

    fn handle_tab_bar_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Left => {
                if self.selected_tab_index == 0 {
                    self.selected_tab_index = TABS.len() - 1;
                } else {
                    self.selected_tab_index -= 1;
                }
            }
            KeyCode::Right => {
                self.selected_tab_index = (self.selected_tab_index + 1) % TABS.len();
            }
            KeyCode::Enter => {
                self.navigate_to(TABS[self.selected_tab_index]);
                self.focus_mode = FocusMode::Content;
            }
            _ => {}
        }
    }

    fn navigate_to(&mut self, view: AppView) {
        if self.view == view {
            return;
        }
        if view == AppView::Help {
            self.view_before_help = self.view;
        }
        self.view = view;
        self.clear_status();
        if let Some(index) = TABS.iter().position(|v| *v == view) {
            self.selected_tab_index = index;
        }
    }

    fn go_back(&mut self) {
        if self.view == AppView::Help {
            self.navigate_to(self.view_before_help);
        } else {
            self.clear_status();
        }
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    fn copy(&mut self, text: Option<String>) {
        let Some(text) = text else {
            self.set_status("Nothing to copy yet");
            return;
        };
        match self.clipboard.copy(&text) {
            Ok(()) => self.set_status("Copied to clipboard"),
            Err(err) => {
                warn!("clipboard copy failed: {err:#}");
                self.set_status(format!("{err:#}"));
            }
        }
    }

    fn open_input(&mut self, title: impl Into<String>, hint: &'static str, value: String, target: InputTarget) {
        self.input_popup = Some(InputPopup::new(title, hint, value, target));
    }

    fn handle_input_key(&mut self, key: KeyCode) {
        let Some(popup) = self.input_popup.as_mut() else {
            return;
        };
        match key {
            KeyCode::Esc => {
                self.input_popup = None;
                self.clear_status();
            }
            KeyCode::Enter => {
                if let Some(popup) = self.input_popup.take() {
                    self.apply_input(popup);
                }
            }
            KeyCode::Backspace | KeyCode::Delete => {
                popup.value.pop();
            }
            KeyCode::Char(ch) => {
                if ch.is_control() {
                    return;
                }
                popup.value.push(ch);
            }
            _ => {}
        }
    }

    /// Applies a confirmed popup. Invalid input keeps the popup open with the
    /// error in the status line.
    fn apply_input(&mut self, popup: InputPopup) {
        let value = popup.value.as_str();
        let result = match popup.target {
            InputTarget::DiceField => self.dice.set_field(value),
            InputTarget::NumberField => self.numbers.set_field(value),
            InputTarget::NewWeightedValue => {
                parse_weighted(value).map(|weighted| self.numbers.add_value(weighted))
            }
            InputTarget::NewListItem => self.add_list_item(value),
            InputTarget::ListItemWeight => self.lists.set_selected_weight(value),
            InputTarget::ListCount => self.lists.set_count(value),
            InputTarget::ListImport => self.import_list(value),
            InputTarget::PaletteSize => self.colors.set_palette_size(value),
            InputTarget::InspectHex => match self.colors.inspect(value) {
                Ok(color) => {
                    let message = format!("{} is {}", color.hex, color.name);
                    self.set_status(message);
                    Ok(())
                }
                Err(err) => Err(err.to_string()),
            },
        };
        match result {
            Ok(()) => {
                if !matches!(popup.target, InputTarget::InspectHex | InputTarget::ListImport) {
                    self.clear_status();
                }
            }
            Err(message) => {
                self.set_status(message);
                self.input_popup = Some(popup);
            }
        }
    }

    /// `text` or `text=weight`.
    fn add_list_item(&mut self, value: &str) -> Result<(), String> {
        let (text, weight) = parse_entry(value)?;
        self.lists.add_item(text, weight)
    }

    fn import_list(&mut self, value: &str) -> Result<(), String> {
        let path = PathBuf::from(value.trim());
        let added = self
            .lists
            .import_file(&path)
            .map_err(|err| format!("{err:#}"))?;
        info!(path = %path.display(), added, "imported list items");
        self.set_status(format!("Imported {added} items"));
        Ok(())
    }

    fn handle_confirm_key(&mut self, key: KeyCode) {
        let Some(popup) = self.confirm_popup.take() else {
            return;
        };
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') => match popup.action {
                ConfirmAction::ClearList => {
                    self.lists.clear_items();
                    self.set_status("List cleared");
                }
            },
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => self.clear_status(),
            _ => self.confirm_popup = Some(popup),
        }
    }

    fn handle_dice_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => self.dice.select_prev(),
            KeyCode::Down => self.dice.select_next(),
            KeyCode::Left => self.dice.adjust(-1),
            KeyCode::Right => self.dice.adjust(1),
            KeyCode::Char('e') => {
                let title = format!("Edit {}", self.dice.field.label());
                let hint = match self.dice.field {
                    DiceField::Die => "d4, d6, d8, d10, d12, d20 or d100",
                    DiceField::Quantity => "1 to 10 dice",
                    DiceField::Modifier => "a whole number, e.g. +2 or -1",
                };
                self.open_input(title, hint, self.dice.field_text(), InputTarget::DiceField);
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.dice.notation() {
                Ok(notation) => self.start_roll(notation),
                Err(err) => self.set_status(err.to_string()),
            },
            KeyCode::Char(ch @ '1'..='7') => {
                let die = DieType::ALL[ch as usize - '1' as usize];
                match DiceNotation::of(die, 1, 0) {
                    Ok(notation) => self.start_roll(notation),
                    Err(err) => self.set_status(err.to_string()),
                }
            }
            KeyCode::Char('y') => {
                let text = self.dice.last.as_ref().map(|roll| roll.total.to_string());
                self.copy(text);
            }
            KeyCode::Char('x') => {
                self.dice.clear_history();
                self.set_status("Roll history cleared");
            }
            _ => {}
        }
    }

    fn start_roll(&mut self, notation: DiceNotation) {
        if self.dice.start_roll(self.rng.as_mut(), notation) {
            self.set_status(format!("Rolling {notation}..."));
        }
    }

    fn advance_roll(&mut self) {
        if let Some(notation) = self.dice.tick(self.rng.as_mut()) {
            let roll = self.roller.roll(self.rng.as_mut(), &notation);
            let message = format!("{} rolled {}", roll.notation, roll.total);
            self.dice.finish(roll);
            self.set_status(message);
        }
    }

    fn handle_numbers_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => self.numbers.select_prev(),
            KeyCode::Down => self.numbers.select_next(),
            KeyCode::Left => self.numbers.adjust(-1),
            KeyCode::Right => self.numbers.adjust(1),
            KeyCode::Char('m') => self.numbers.cycle_mode(),
            KeyCode::Char('e') => {
                let field = self.numbers.field;
                let hint = match field {
                    NumberField::Values => "value:weight, e.g. 3:25",
                    NumberField::Count => "1 to 1000",
                    NumberField::Decimals => "0 to 10",
                    NumberField::Min | NumberField::Max => "a number",
                };
                self.open_input(
                    format!("Edit {}", field.label()),
                    hint,
                    self.numbers.field_text(),
                    InputTarget::NumberField,
                );
            }
            KeyCode::Char('a') if self.numbers.field == NumberField::Values => {
                self.open_input(
                    "Add weighted value",
                    "value:weight, e.g. 6:10",
                    String::new(),
                    InputTarget::NewWeightedValue,
                );
            }
            KeyCode::Char('d') if self.numbers.field == NumberField::Values => {
                if let Some(removed) = self.numbers.remove_selected_value() {
                    self.set_status(format!("Removed value {}", removed.value));
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                match self.numbers.generate(self.rng.as_mut()) {
                    Ok(values) => {
                        let message = format!("Generated {} number(s)", values.len());
                        self.set_status(message);
                    }
                    Err(err) => self.set_status(err.to_string()),
                }
            }
            KeyCode::Char('y') => {
                let text = self.numbers.copy_text();
                self.copy(text);
            }
            KeyCode::Char('x') => {
                self.numbers.clear_history();
                self.set_status("Number history cleared");
            }
            _ => {}
        }
    }

    fn handle_lists_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => self.lists.select_prev(),
            KeyCode::Down => self.lists.select_next(),
            KeyCode::Left => self.lists.adjust_count(-1),
            KeyCode::Right => self.lists.adjust_count(1),
            KeyCode::Char('m') => self.lists.cycle_mode(),
            KeyCode::Char('a') => self.open_input(
                "Add item",
                "text, or text=weight",
                String::new(),
                InputTarget::NewListItem,
            ),
            KeyCode::Char('d') => {
                if let Some(removed) = self.lists.remove_selected() {
                    self.set_status(format!("Removed '{}'", removed.text));
                }
            }
            KeyCode::Char('w') => {
                if !self.lists.items.is_empty() {
                    self.open_input(
                        "Edit weight",
                        "zero or a positive number",
                        self.lists.selected_weight_text(),
                        InputTarget::ListItemWeight,
                    );
                }
            }
            KeyCode::Char('e') => self.open_input(
                "Edit count",
                "number of items to pick",
                self.lists.count.to_string(),
                InputTarget::ListCount,
            ),
            KeyCode::Char('c') => {
                if !self.lists.items.is_empty() {
                    self.confirm_popup = Some(ConfirmPopup {
                        message: format!("Remove all {} items from the list?", self.lists.items.len()),
                        action: ConfirmAction::ClearList,
                    });
                }
            }
            KeyCode::Char('i') => self.open_input(
                "Import list",
                "path to a text file, one item per line",
                String::new(),
                InputTarget::ListImport,
            ),
            KeyCode::Char('o') => {
                let text = (!self.lists.items.is_empty()).then(|| self.lists.export_text());
                self.copy(text);
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.lists.generate(self.rng.as_mut()) {
                Ok(results) => {
                    let message = format!("Picked {} item(s)", results.len());
                    self.set_status(message);
                }
                Err(err) => self.set_status(err.to_string()),
            },
            KeyCode::Char('y') => {
                let text = self.lists.copy_text();
                self.copy(text);
            }
            KeyCode::Char('x') => {
                self.lists.clear_history();
                self.set_status("Pick history cleared");
            }
            _ => {}
        }
    }

    fn handle_colors_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Left => self.colors.adjust_palette_size(-1),
            KeyCode::Right => self.colors.adjust_palette_size(1),
            KeyCode::Char('m') => self.colors.cycle_mode(),
            KeyCode::Char('e') => self.open_input(
                "Edit palette size",
                "2 to 12 colors",
                self.colors.palette_size.to_string(),
                InputTarget::PaletteSize,
            ),
            KeyCode::Char('i') => self.open_input(
                "Inspect color",
                "hex code like #FF5733",
                String::new(),
                InputTarget::InspectHex,
            ),
            KeyCode::Enter | KeyCode::Char(' ') => match self.colors.generate(self.rng.as_mut()) {
                Ok(colors) => {
                    let message = match colors {
                        [single] => format!("{} ({})", single.hex, single.name),
                        colors => format!("Generated {} colors", colors.len()),
                    };
                    self.set_status(message);
                }
                Err(err) => self.set_status(err.to_string()),
            },
            KeyCode::Char('y') => {
                let text = self.colors.copy_text();
                self.copy(text);
            }
            KeyCode::Char('x') => {
                self.colors.clear_history();
                self.set_status("Color history cleared");
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::app::ROLL_FRAMES;
    use crate::clipboard::MemoryClipboard;
    use crate::dice::{DiceError, MockDiceEngine, RollSource, TumbleEngine};
    use crate::lists::ListMode;
    use crate::numbers::NumberMode;
    use crate::random::{SeededSource, SequenceSource};
    use crate::types::Number;
    use tempfile::TempDir;

    fn app_with(rng: Box<dyn RandomSource>) -> (App, MemoryClipboard) {
        let clipboard = MemoryClipboard::default();
        let engine = TumbleEngine::new(Box::new(SeededSource::new(99)));
        let app = App::new(
            &Config::default(),
            rng,
            Box::new(engine),
            Box::new(clipboard.clone()),
        );
        (app, clipboard)
    }

    fn app() -> (App, MemoryClipboard) {
        app_with(Box::new(SeededSource::new(1)))
    }

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            app.update(AppEvent::KeyPress(*key));
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.update(AppEvent::KeyPress(KeyCode::Char(ch)));
        }
    }

    fn tick(app: &mut App, times: u8) {
        for _ in 0..times {
            app.update(AppEvent::Tick);
        }
    }

    #[test]
    fn tab_bar_navigation_and_quit() {
        let (mut app, _) = app();
        press(&mut app, &[KeyCode::Tab, KeyCode::Right, KeyCode::Right, KeyCode::Enter]);
        assert_eq!(app.view, AppView::Lists);
        assert_eq!(app.focus_mode, FocusMode::Content);

        press(&mut app, &[KeyCode::F(4)]);
        assert_eq!(app.view, AppView::Colors);
        press(&mut app, &[KeyCode::Char('?')]);
        assert_eq!(app.view, AppView::Help);
        press(&mut app, &[KeyCode::Esc]);
        assert_eq!(app.view, AppView::Colors);

        press(&mut app, &[KeyCode::Char('q')]);
        assert!(!app.running);
    }

    #[test]
    fn dice_roll_animates_then_records() {
        let (mut app, clipboard) = app();
        press(&mut app, &[KeyCode::Enter]);
        assert!(app.dice.is_rolling());
        press(&mut app, &[KeyCode::Char('3')]);
        assert_eq!(app.dice.rolling.as_ref().map(|r| r.notation.sides), Some(20));

        tick(&mut app, ROLL_FRAMES);
        assert!(!app.dice.is_rolling());
        let roll = app.dice.last.clone().unwrap();
        assert_eq!(roll.source, RollSource::Engine);
        assert!((1..=20).contains(&roll.total));
        assert_eq!(app.dice.history.len(), 1);

        press(&mut app, &[KeyCode::Char('y')]);
        assert_eq!(clipboard.copied(), vec![roll.total.to_string()]);
    }

    #[test]
    fn quick_roll_keys_pick_the_die_type() {
        let (mut app, _) = app();
        press(&mut app, &[KeyCode::Char('7')]);
        tick(&mut app, ROLL_FRAMES);
        assert_eq!(app.dice.last.as_ref().map(|r| r.notation.to_string()), Some("1d100".to_string()));
    }

    #[test]
    fn broken_dice_engine_falls_back() {
        let mut engine = MockDiceEngine::new();
        engine
            .expect_initialize()
            .returning(|| Err(DiceError::EngineUnavailable("headless".to_string())));
        let mut app = App::new(
            &Config::default(),
            Box::new(SequenceSource::new(vec![0.99])),
            Box::new(engine),
            Box::new(MemoryClipboard::default()),
        );
        assert!(!app.dice_engine_ready());
        press(&mut app, &[KeyCode::Enter]);
        tick(&mut app, ROLL_FRAMES);
        let roll = app.dice.last.clone().unwrap();
        assert_eq!(roll.source, RollSource::Fallback);
        assert_eq!(roll.total, 20);
    }

    #[test]
    fn edit_popup_validates_input() {
        let (mut app, _) = app();
        press(&mut app, &[KeyCode::Down, KeyCode::Char('e')]);
        assert_eq!(app.input_popup.as_ref().map(|p| p.value.as_str()), Some("1"));
        press(&mut app, &[KeyCode::Backspace]);
        type_text(&mut app, "42");
        press(&mut app, &[KeyCode::Enter]);
        assert!(app.input_popup.is_some());
        assert!(app.status.is_some());

        press(&mut app, &[KeyCode::Backspace, KeyCode::Backspace]);
        type_text(&mut app, "4");
        press(&mut app, &[KeyCode::Enter]);
        assert!(app.input_popup.is_none());
        assert_eq!(app.dice.quantity, 4);
    }

    #[test]
    fn number_errors_keep_results() {
        let (mut app, clipboard) = app_with(Box::new(SequenceSource::new(vec![0.0, 0.5])));
        press(&mut app, &[KeyCode::F(2), KeyCode::Enter]);
        assert_eq!(app.numbers.results, vec![Number::Int(1)]);
        press(&mut app, &[KeyCode::Char('y')]);
        assert_eq!(clipboard.copied(), vec!["1"]);

        app.numbers.min = 50.0;
        app.numbers.max = 10.0;
        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.numbers.results, vec![Number::Int(1)]);
        assert_eq!(
            app.status.as_deref(),
            Some("Minimum 50 is greater than maximum 10")
        );
    }

    #[test]
    fn weighted_values_can_be_added_from_the_table() {
        let (mut app, _) = app();
        press(&mut app, &[KeyCode::F(2)]);
        for _ in 0..3 {
            press(&mut app, &[KeyCode::Char('m')]);
        }
        assert_eq!(app.numbers.mode, NumberMode::Weighted);
        press(&mut app, &[KeyCode::Down, KeyCode::Char('a')]);
        type_text(&mut app, "6:5");
        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.numbers.weighted.len(), 6);
        press(&mut app, &[KeyCode::Char('d')]);
        assert_eq!(app.numbers.weighted.len(), 5);
    }

    #[test]
    fn list_items_weights_and_clear_confirmation() {
        let (mut app, _) = app();
        press(&mut app, &[KeyCode::F(3), KeyCode::Char('a')]);
        type_text(&mut app, "Tacos=4");
        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.lists.items.len(), 4);
        assert_eq!(app.lists.items[3].weight, Some(4.0));

        press(&mut app, &[KeyCode::Char('c')]);
        assert!(app.confirm_popup.is_some());
        press(&mut app, &[KeyCode::Char('n')]);
        assert_eq!(app.lists.items.len(), 4);

        press(&mut app, &[KeyCode::Char('c'), KeyCode::Char('y')]);
        assert!(app.lists.items.is_empty());
        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(
            app.status.as_deref(),
            Some("Please add at least one item to the list")
        );
    }

    #[test]
    fn shuffled_lists_copy_one_per_line() {
        let (mut app, clipboard) = app();
        press(&mut app, &[KeyCode::F(3)]);
        while app.lists.mode != ListMode::Shuffle {
            press(&mut app, &[KeyCode::Char('m')]);
        }
        press(&mut app, &[KeyCode::Enter, KeyCode::Char('y')]);
        let copied = clipboard.copied();
        assert_eq!(copied.len(), 1);
        assert_eq!(copied[0].lines().count(), 3);
    }

    #[test]
    fn list_import_reads_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("items.txt");
        fs::write(&path, "one\ntwo\n").unwrap();

        let (mut app, _) = app();
        press(&mut app, &[KeyCode::F(3), KeyCode::Char('i')]);
        type_text(&mut app, &path.display().to_string());
        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.lists.items.len(), 5);
        assert_eq!(app.status.as_deref(), Some("Imported 2 items"));
    }

    #[test]
    fn colors_inspect_and_palette() {
        let (mut app, clipboard) = app();
        press(&mut app, &[KeyCode::F(4), KeyCode::Char('i')]);
        type_text(&mut app, "#00FFFF");
        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.status.as_deref(), Some("#00FFFF is Cyan"));

        for _ in 0..3 {
            press(&mut app, &[KeyCode::Char('m')]);
        }
        press(&mut app, &[KeyCode::Left, KeyCode::Enter, KeyCode::Char('y')]);
        assert_eq!(app.colors.results.len(), 4);
        assert_eq!(clipboard.copied()[0].split(", ").count(), 4);
    }
}
