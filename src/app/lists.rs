use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::clipboard;
use crate::config::ListsConfig;
use crate::error::SampleError;
use crate::history::HistoryLog;
use crate::lists::{self, ListMode};
use crate::random::RandomSource;
use crate::types::ListItem;

pub struct ListsPage {
    pub mode: ListMode,
    pub items: Vec<ListItem>,
    pub selected: usize,
    pub count: usize,
    pub results: Vec<String>,
    pub history: HistoryLog<String>,
    next_id: u64,
}

impl ListsPage {
    pub fn new(config: &ListsConfig) -> Self {
        let mut page = Self {
            mode: ListMode::Picker,
            items: Vec::new(),
            selected: 0,
            count: config.count.max(1),
            results: Vec::new(),
            history: HistoryLog::new(),
            next_id: 1,
        };
        for label in &config.items {
            // Blank labels from the config are skipped.
            let _ = page.add_item(label, None);
        }
        page.selected = 0;
        page
    }

    pub fn cycle_mode(&mut self) {
        self.mode = self.mode.next();
    }

    pub fn select_prev(&mut self) {
        if self.items.is_empty() {
            return;
        }
        if self.selected == 0 {
            self.selected = self.items.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.items.len();
    }

    pub fn adjust_count(&mut self, delta: i64) {
        let upper = self.items.len().max(1) as i64;
        self.count = (self.count as i64 + delta).clamp(1, upper) as usize;
    }

    pub fn set_count(&mut self, text: &str) -> Result<(), String> {
        let text = text.trim();
        let count: usize = text
            .parse()
            .map_err(|_| format!("Count must be a whole number, got '{text}'"))?;
        if count == 0 {
            return Err(SampleError::ZeroCount.to_string());
        }
        self.count = count;
        Ok(())
    }

    /// Adds a trimmed, non-empty label and selects it.
    pub fn add_item(&mut self, text: &str, weight: Option<f64>) -> Result<(), String> {
        let text = text.trim();
        if text.is_empty() {
            return Err("Item text must not be empty".to_string());
        }
        if let Some(weight) = weight {
            check_weight(weight)?;
        }
        let mut item = ListItem::new(self.next_id.to_string(), text);
        item.weight = weight;
        self.next_id += 1;
        self.items.push(item);
        self.selected = self.items.len() - 1;
        Ok(())
    }

    pub fn remove_selected(&mut self) -> Option<ListItem> {
        if self.selected >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(self.selected);
        self.selected = self.selected.min(self.items.len().saturating_sub(1));
        Some(removed)
    }

    pub fn selected_weight_text(&self) -> String {
        self.items
            .get(self.selected)
            .map(|item| item.effective_weight().to_string())
            .unwrap_or_default()
    }

    pub fn set_selected_weight(&mut self, text: &str) -> Result<(), String> {
        let text = text.trim();
        let weight: f64 = text
            .parse()
            .map_err(|_| format!("Weight must be a number, got '{text}'"))?;
        check_weight(weight)?;
        let item = self
            .items
            .get_mut(self.selected)
            .ok_or_else(|| "No item selected".to_string())?;
        item.weight = Some(weight);
        Ok(())
    }

    pub fn clear_items(&mut self) {
        self.items.clear();
        self.selected = 0;
    }

    /// Appends one item per non-empty line of `path`. Returns how many were added.
    pub fn import_file(&mut self, path: &Path) -> Result<usize> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read list file: {}", path.display()))?;
        let labels = lists::parse_import(&text);
        for label in &labels {
            let _ = self.add_item(label, None);
        }
        Ok(labels.len())
    }

    pub fn export_text(&self) -> String {
        lists::export(&self.items)
    }

    /// Replaces the results and records every picked label. On error the
    /// previous results stay.
    pub fn generate(&mut self, rng: &mut dyn RandomSource) -> Result<&[String], SampleError> {
        let results = lists::generate(rng, self.mode, &self.items, self.count)?;
        self.history.append_batch(results.iter().cloned());
        self.results = results;
        Ok(&self.results)
    }

    /// Shuffles copy one label per line; picks copy comma-separated.
    pub fn copy_text(&self) -> Option<String> {
        if self.results.is_empty() {
            return None;
        }
        Some(match self.mode {
            ListMode::Shuffle => clipboard::join_lines(&self.results),
            _ => clipboard::join_labels(&self.results),
        })
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

/// Splits `text=weight` into its parts; plain `text` has no weight.
pub fn parse_entry(value: &str) -> Result<(&str, Option<f64>), String> {
    match value.rsplit_once('=') {
        Some((text, weight)) => {
            let weight: f64 = weight
                .trim()
                .parse()
                .map_err(|_| format!("Weight must be a number, got '{}'", weight.trim()))?;
            check_weight(weight)?;
            Ok((text, Some(weight)))
        }
        None => Ok((value, None)),
    }
}

fn check_weight(weight: f64) -> Result<(), String> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(format!("Weight must be zero or positive, got {weight}"));
    }
    Ok(())
}
