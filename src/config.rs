//! User configuration: startup defaults for every page, the seed and logging.
//!
//! Stored as TOML at `<config_dir>/randomizer/config.toml`:
//!
//! - Linux: `~/.config/randomizer/config.toml`
//! - macOS: `~/Library/Application Support/randomizer/config.toml`
//! - Windows: `%APPDATA%\randomizer\config.toml`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::color::{MAX_PALETTE_SIZE, MIN_PALETTE_SIZE};
use crate::dice::{DieType, MAX_MODIFIER};
use crate::numbers::{MAX_COUNT, MAX_DECIMALS};
use crate::types::WeightedValue;

pub const MAX_DICE_QUANTITY: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumbersConfig {
    pub min: f64,
    pub max: f64,
    pub count: usize,
    pub decimals: u32,
    pub weighted: Vec<WeightedValue>,
}

impl Default for NumbersConfig {
    fn default() -> Self {
        Self {
            min: 1.0,
            max: 100.0,
            count: 1,
            decimals: 2,
            weighted: vec![
                WeightedValue::new(1.0, 10.0),
                WeightedValue::new(2.0, 20.0),
                WeightedValue::new(3.0, 30.0),
                WeightedValue::new(4.0, 25.0),
                WeightedValue::new(5.0, 15.0),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListsConfig {
    /// Labels the list page starts with.
    pub items: Vec<String>,
    pub count: usize,
}

impl Default for ListsConfig {
    fn default() -> Self {
        Self {
            items: vec![
                "Item 1".to_string(),
                "Item 2".to_string(),
                "Item 3".to_string(),
            ],
            count: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    pub palette_size: usize,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self { palette_size: 5 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiceConfig {
    pub die: DieType,
    pub quantity: u32,
    pub modifier: i64,
}

impl Default for DiceConfig {
    fn default() -> Self {
        Self {
            die: DieType::D20,
            quantity: 1,
            modifier: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RANDOMIZER_LOG` is unset.
    pub level: String,
    /// Log file for the terminal UI; defaults to the data directory.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fixed seed for reproducible sessions.
    pub seed: Option<u64>,
    pub numbers: NumbersConfig,
    pub lists: ListsConfig,
    pub colors: ColorsConfig,
    pub dice: DiceConfig,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("randomizer");
        Ok(config_dir)
    }

    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// The explicit path when given, the default location otherwise.
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::config_file_path(),
        }
    }

    /// Loads and validates the configuration. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// Writes the configuration through a temp file and rename.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = path.with_extension("toml.tmp");
        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp config file: {}", temp_path.display())
        })?;
        fs::rename(&temp_path, path).with_context(|| {
            format!("Failed to rename temp config file to: {}", path.display())
        })?;
        Ok(())
    }

    /// Writes the defaults unless a file already exists. Returns whether it wrote.
    pub fn init_at(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        Self::default().save_to(path)?;
        Ok(true)
    }

    pub fn validate(&self) -> Result<()> {
        let numbers = &self.numbers;
        if !numbers.min.is_finite() || !numbers.max.is_finite() {
            anyhow::bail!("numbers.min and numbers.max must be finite");
        }
        if numbers.min > numbers.max {
            anyhow::bail!(
                "numbers.min ({}) is greater than numbers.max ({})",
                numbers.min,
                numbers.max
            );
        }
        if !(1..=MAX_COUNT).contains(&numbers.count) {
            anyhow::bail!("numbers.count must be between 1 and {MAX_COUNT}");
        }
        if numbers.decimals > MAX_DECIMALS {
            anyhow::bail!("numbers.decimals must be between 0 and {MAX_DECIMALS}");
        }
        if let Some(value) = numbers
            .weighted
            .iter()
            .find(|value| !(value.weight.is_finite() && value.weight > 0.0))
        {
            anyhow::bail!(
                "numbers.weighted: weight {} for value {} must be positive",
                value.weight,
                value.value
            );
        }

        if self.lists.count == 0 {
            anyhow::bail!("lists.count must be at least 1");
        }

        let size = self.colors.palette_size;
        if !(MIN_PALETTE_SIZE..=MAX_PALETTE_SIZE).contains(&size) {
            anyhow::bail!(
                "colors.palette_size must be between {MIN_PALETTE_SIZE} and {MAX_PALETTE_SIZE}, got {size}"
            );
        }

        if !(1..=MAX_DICE_QUANTITY).contains(&self.dice.quantity) {
            anyhow::bail!("dice.quantity must be between 1 and {MAX_DICE_QUANTITY}");
        }

        if !(-MAX_MODIFIER..=MAX_MODIFIER).contains(&self.dice.modifier) {
            anyhow::bail!("dice.modifier must be between -{MAX_MODIFIER} and {MAX_MODIFIER}");
        }
        Ok(())
    }
}
