use crate::clipboard;
use crate::config::NumbersConfig;
use crate::error::SampleError;
use crate::history::HistoryLog;
use crate::numbers::{self, MAX_COUNT, MAX_DECIMALS, NumberMode, NumberRequest, Summary};
use crate::random::RandomSource;
use crate::types::{Number, WeightedValue};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberField {
    Min,
    Max,
    Count,
    Decimals,
    Values,
}

impl NumberField {
    pub fn label(self) -> &'static str {
        match self {
            NumberField::Min => "Minimum",
            NumberField::Max => "Maximum",
            NumberField::Count => "Count",
            NumberField::Decimals => "Decimals",
            NumberField::Values => "Weighted values",
        }
    }
}

pub struct NumbersPage {
    pub mode: NumberMode,
    pub min: f64,
    pub max: f64,
    pub count: usize,
    pub decimals: u32,
    pub weighted: Vec<WeightedValue>,
    pub selected_value: usize,
    pub field: NumberField,
    pub results: Vec<Number>,
    pub history: HistoryLog<Number>,
}

impl NumbersPage {
    pub fn new(config: &NumbersConfig) -> Self {
        Self {
            mode: NumberMode::Integer,
            min: config.min,
            max: config.max,
            count: config.count.clamp(1, MAX_COUNT),
            decimals: config.decimals.min(MAX_DECIMALS),
            weighted: config.weighted.clone(),
            selected_value: 0,
            field: NumberField::Min,
            results: Vec::new(),
            history: HistoryLog::new(),
        }
    }

    /// Fields shown for the current mode.
    pub fn fields(&self) -> &'static [NumberField] {
        match self.mode {
            NumberMode::Integer | NumberMode::Range | NumberMode::Unique => {
                &[NumberField::Min, NumberField::Max, NumberField::Count]
            }
            NumberMode::Float => &[
                NumberField::Min,
                NumberField::Max,
                NumberField::Count,
                NumberField::Decimals,
            ],
            NumberMode::Weighted => &[NumberField::Count, NumberField::Values],
        }
    }

    pub fn cycle_mode(&mut self) {
        self.mode = self.mode.next();
        if !self.fields().contains(&self.field) {
            self.field = self.fields()[0];
        }
    }

    pub fn select_prev(&mut self) {
        let fields = self.fields();
        let index = fields.iter().position(|f| *f == self.field).unwrap_or(0);
        self.field = fields[(index + fields.len() - 1) % fields.len()];
    }

    pub fn select_next(&mut self) {
        let fields = self.fields();
        let index = fields.iter().position(|f| *f == self.field).unwrap_or(0);
        self.field = fields[(index + 1) % fields.len()];
    }

    /// Left/Right: step the selected field, or move through the weighted
    /// value table.
    pub fn adjust(&mut self, delta: i64) {
        match self.field {
            NumberField::Min => self.min += delta as f64,
            NumberField::Max => self.max += delta as f64,
            NumberField::Count => {
                let count = self.count as i64 + delta;
                self.count = count.clamp(1, MAX_COUNT as i64) as usize;
            }
            NumberField::Decimals => {
                let decimals = i64::from(self.decimals) + delta;
                self.decimals = decimals.clamp(0, i64::from(MAX_DECIMALS)) as u32;
            }
            NumberField::Values => {
                if self.weighted.is_empty() {
                    return;
                }
                let len = self.weighted.len() as i64;
                self.selected_value = (self.selected_value as i64 + delta).rem_euclid(len) as usize;
            }
        }
    }

    pub fn field_text(&self) -> String {
        match self.field {
            NumberField::Min => self.min.to_string(),
            NumberField::Max => self.max.to_string(),
            NumberField::Count => self.count.to_string(),
            NumberField::Decimals => self.decimals.to_string(),
            NumberField::Values => self
                .weighted
                .get(self.selected_value)
                .map(format_weighted)
                .unwrap_or_default(),
        }
    }

    pub fn set_field(&mut self, text: &str) -> Result<(), String> {
        let text = text.trim();
        match self.field {
            NumberField::Min => self.min = parse_number(text, "Minimum")?,
            NumberField::Max => self.max = parse_number(text, "Maximum")?,
            NumberField::Count => {
                let count: usize = text
                    .parse()
                    .map_err(|_| format!("Count must be a whole number, got '{text}'"))?;
                if !(1..=MAX_COUNT).contains(&count) {
                    return Err(format!("Count must be between 1 and {MAX_COUNT}"));
                }
                self.count = count;
            }
            NumberField::Decimals => {
                let decimals: u32 = text
                    .parse()
                    .map_err(|_| format!("Decimals must be a whole number, got '{text}'"))?;
                if decimals > MAX_DECIMALS {
                    return Err(format!("Decimals must be between 0 and {MAX_DECIMALS}"));
                }
                self.decimals = decimals;
            }
            NumberField::Values => {
                let value = parse_weighted(text)?;
                match self.weighted.get_mut(self.selected_value) {
                    Some(slot) => *slot = value,
                    None => self.add_value(value),
                }
            }
        }
        Ok(())
    }

    pub fn add_value(&mut self, value: WeightedValue) {
        self.weighted.push(value);
        self.selected_value = self.weighted.len() - 1;
    }

    pub fn remove_selected_value(&mut self) -> Option<WeightedValue> {
        if self.selected_value >= self.weighted.len() {
            return None;
        }
        let removed = self.weighted.remove(self.selected_value);
        self.selected_value = self.selected_value.min(self.weighted.len().saturating_sub(1));
        Some(removed)
    }

    /// Replaces the results and records every value in the history. On error
    /// the previous results stay.
    pub fn generate(&mut self, rng: &mut dyn RandomSource) -> Result<&[Number], SampleError> {
        let request = NumberRequest {
            mode: self.mode,
            min: self.min,
            max: self.max,
            count: self.count,
            decimals: self.decimals,
            weighted: &self.weighted,
        };
        let values = numbers::generate(rng, &request)?;
        self.history.append_batch(values.iter().copied());
        self.results = values;
        Ok(&self.results)
    }

    pub fn summary(&self) -> Option<Summary> {
        numbers::summarize(&self.results)
    }

    pub fn copy_text(&self) -> Option<String> {
        if self.results.is_empty() {
            return None;
        }
        Some(clipboard::join_numbers(&self.results))
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

pub fn format_weighted(value: &WeightedValue) -> String {
    format!("{}:{}", value.value, value.weight)
}

/// Parses `value:weight`. The weight must be positive.
pub fn parse_weighted(text: &str) -> Result<WeightedValue, String> {
    let (value, weight) = text
        .split_once(':')
        .ok_or_else(|| format!("Expected value:weight, got '{text}'"))?;
    let value = parse_number(value.trim(), "Value")?;
    let weight = parse_number(weight.trim(), "Weight")?;
    if weight <= 0.0 {
        return Err(format!("Weight must be greater than zero, got {weight}"));
    }
    Ok(WeightedValue::new(value, weight))
}

fn parse_number(text: &str, what: &str) -> Result<f64, String> {
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| format!("{what} must be a number, got '{text}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{SeededSource, SequenceSource};

    fn page() -> NumbersPage {
        NumbersPage::new(&NumbersConfig::default())
    }

    #[test]
    fn fields_follow_the_mode() {
        let mut page = page();
        assert_eq!(page.fields().len(), 3);
        page.cycle_mode();
        assert_eq!(page.mode, NumberMode::Float);
        assert!(page.fields().contains(&NumberField::Decimals));
        page.cycle_mode();
        page.cycle_mode();
        assert_eq!(page.mode, NumberMode::Weighted);
        assert_eq!(page.field, NumberField::Count);
        page.select_next();
        assert_eq!(page.field, NumberField::Values);
        page.select_next();
        assert_eq!(page.field, NumberField::Count);
    }

    #[test]
    fn count_and_decimals_are_clamped() {
        let mut page = page();
        page.field = NumberField::Count;
        page.adjust(-3);
        assert_eq!(page.count, 1);
        assert!(page.set_field("1001").is_err());
        page.set_field("12").unwrap();
        assert_eq!(page.count, 12);

        page.field = NumberField::Decimals;
        page.adjust(20);
        assert_eq!(page.decimals, MAX_DECIMALS);
    }

    #[test]
    fn invalid_text_leaves_the_field_unchanged() {
        let mut page = page();
        assert!(page.set_field("abc").is_err());
        assert_eq!(page.min, 1.0);
        page.set_field("-5.5").unwrap();
        assert_eq!(page.min, -5.5);
    }

    #[test]
    fn generation_fills_results_and_history() {
        let mut page = page();
        page.count = 3;
        let mut rng = SequenceSource::new(vec![0.0, 0.5, 0.999]);
        let values = page.generate(&mut rng).unwrap().to_vec();
        assert_eq!(values, vec![Number::Int(1), Number::Int(51), Number::Int(100)]);
        assert_eq!(page.history.len(), 3);
        assert_eq!(page.history.latest().map(|e| e.payload), Some(Number::Int(1)));
        assert_eq!(page.copy_text().as_deref(), Some("1, 51, 100"));
        assert_eq!(page.summary().map(|s| s.max), Some(100.0));
    }

    #[test]
    fn failed_generation_keeps_previous_results() {
        let mut page = page();
        let mut rng = SeededSource::new(1);
        page.generate(&mut rng).unwrap();
        let before = page.results.clone();

        page.mode = NumberMode::Unique;
        page.min = 1.0;
        page.max = 5.0;
        page.count = 6;
        assert!(matches!(
            page.generate(&mut rng),
            Err(SampleError::RangeTooSmall { .. })
        ));
        assert_eq!(page.results, before);
        assert_eq!(page.history.len(), 1);
    }

    #[test]
    fn weighted_table_edits() {
        let mut page = page();
        page.mode = NumberMode::Weighted;
        page.field = NumberField::Values;
        page.adjust(-1);
        assert_eq!(page.selected_value, 4);
        assert_eq!(page.field_text(), "5:15");
        page.set_field("9:1").unwrap();
        assert_eq!(page.weighted[4], WeightedValue::new(9.0, 1.0));
        assert!(page.set_field("9:0").is_err());
        assert!(page.set_field("nine").is_err());

        assert_eq!(page.remove_selected_value(), Some(WeightedValue::new(9.0, 1.0)));
        assert_eq!(page.selected_value, 3);
        page.add_value(WeightedValue::new(7.0, 2.0));
        assert_eq!(page.selected_value, 4);
    }

    #[test]
    fn empty_weighted_table_is_reported() {
        let mut page = page();
        page.mode = NumberMode::Weighted;
        page.weighted.clear();
        let mut rng = SeededSource::new(2);
        assert_eq!(page.generate(&mut rng), Err(SampleError::EmptyValues));
    }
}
