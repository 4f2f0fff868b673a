use crate::clipboard;
use crate::color::{self, ColorMode, MAX_PALETTE_SIZE, MIN_PALETTE_SIZE};
use crate::config::ColorsConfig;
use crate::error::ColorError;
use crate::history::HistoryLog;
use crate::random::RandomSource;
use crate::types::Color;

pub struct ColorsPage {
    pub mode: ColorMode,
    pub palette_size: usize,
    pub results: Vec<Color>,
    pub inspected: Option<Color>,
    pub history: HistoryLog<Color>,
}

impl ColorsPage {
    pub fn new(config: &ColorsConfig) -> Self {
        Self {
            mode: ColorMode::Hex,
            palette_size: config
                .palette_size
                .clamp(MIN_PALETTE_SIZE, MAX_PALETTE_SIZE),
            results: Vec::new(),
            inspected: None,
            history: HistoryLog::new(),
        }
    }

    pub fn cycle_mode(&mut self) {
        self.mode = self.mode.next();
    }

    pub fn adjust_palette_size(&mut self, delta: i64) {
        let size = self.palette_size as i64 + delta;
        self.palette_size = size.clamp(MIN_PALETTE_SIZE as i64, MAX_PALETTE_SIZE as i64) as usize;
    }

    pub fn set_palette_size(&mut self, text: &str) -> Result<(), String> {
        let text = text.trim();
        let size: usize = text
            .parse()
            .map_err(|_| format!("Palette size must be a whole number, got '{text}'"))?;
        if !(MIN_PALETTE_SIZE..=MAX_PALETTE_SIZE).contains(&size) {
            return Err(ColorError::PaletteSize {
                size,
                min: MIN_PALETTE_SIZE,
                max: MAX_PALETTE_SIZE,
            }
            .to_string());
        }
        self.palette_size = size;
        Ok(())
    }

    /// Replaces the results. Palettes and complementary pairs record only
    /// their first color in the history.
    pub fn generate(&mut self, rng: &mut dyn RandomSource) -> Result<&[Color], ColorError> {
        let colors = color::generate(rng, self.mode, self.palette_size)?;
        if let Some(first) = colors.first() {
            self.history.append(first.clone());
        }
        self.results = colors;
        self.inspected = None;
        Ok(&self.results)
    }

    /// Describes a user-entered hex code.
    pub fn inspect(&mut self, hex: &str) -> Result<&Color, ColorError> {
        let rgb = color::parse_hex(hex)?;
        let described = color::describe(&color::rgb_to_hex(rgb.r, rgb.g, rgb.b));
        Ok(&*self.inspected.insert(described))
    }

    /// One color copies as its hex code, several as a comma-separated list.
    pub fn copy_text(&self) -> Option<String> {
        if let Some(inspected) = &self.inspected {
            return Some(inspected.hex.clone());
        }
        match self.results.as_slice() {
            [] => None,
            [single] => Some(single.hex.clone()),
            colors => Some(clipboard::join_palette(colors)),
        }
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
