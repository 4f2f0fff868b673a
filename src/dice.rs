//! Dice notation, the dice-engine capability and the roller that falls back to
//! plain sampling when the engine can't deliver.
//!
//! Notation looks like `"3d6+2"`, `"2d8-1"` or `"d20"`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::numbers;
use crate::random::RandomSource;

pub const MAX_DICE: u32 = 100;
pub const MAX_SIDES: u32 = 1000;
pub const MAX_MODIFIER: i64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    #[error("Empty dice notation")]
    Empty,
    #[error("Invalid dice notation: {0}")]
    InvalidFormat(String),
    #[error("Dice count must be between 1 and 100")]
    InvalidDiceCount,
    #[error("Die size must be between 2 and 1000")]
    InvalidDieSize,
    #[error("Modifier must be between -1000 and 1000")]
    InvalidModifier,
    #[error("Dice engine unavailable: {0}")]
    EngineUnavailable(String),
    #[error("Dice engine failed: {0}")]
    EngineFailed(String),
}

/// The standard polyhedral dice offered for quick rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DieType {
    D4,
    D6,
    D8,
    D10,
    D12,
    #[default]
    D20,
    D100,
}

impl DieType {
    pub const ALL: [DieType; 7] = [
        DieType::D4,
        DieType::D6,
        DieType::D8,
        DieType::D10,
        DieType::D12,
        DieType::D20,
        DieType::D100,
    ];

    pub fn sides(self) -> u32 {
        match self {
            DieType::D4 => 4,
            DieType::D6 => 6,
            DieType::D8 => 8,
            DieType::D10 => 10,
            DieType::D12 => 12,
            DieType::D20 => 20,
            DieType::D100 => 100,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DieType::D4 => "d4",
            DieType::D6 => "d6",
            DieType::D8 => "d8",
            DieType::D10 => "d10",
            DieType::D12 => "d12",
            DieType::D20 => "d20",
            DieType::D100 => "d100",
        }
    }

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|die| *die == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let index = Self::ALL.iter().position(|die| *die == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl FromStr for DieType {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|die| die.label() == wanted)
            .ok_or_else(|| DiceError::InvalidFormat(format!("Unknown die type: '{s}'")))
    }
}

/// A parsed roll like `2d6+3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceNotation {
    pub count: u32,
    pub sides: u32,
    pub modifier: i64,
}

impl DiceNotation {
    pub fn new(count: u32, sides: u32, modifier: i64) -> Result<Self, DiceError> {
        if !(1..=MAX_DICE).contains(&count) {
            return Err(DiceError::InvalidDiceCount);
        }
        if !(2..=MAX_SIDES).contains(&sides) {
            return Err(DiceError::InvalidDieSize);
        }
        if !(-MAX_MODIFIER..=MAX_MODIFIER).contains(&modifier) {
            return Err(DiceError::InvalidModifier);
        }
        Ok(Self {
            count,
            sides,
            modifier,
        })
    }

    pub fn of(die: DieType, count: u32, modifier: i64) -> Result<Self, DiceError> {
        Self::new(count, die.sides(), modifier)
    }

    /// Parses `XdY`, `XdY+Z`, `XdY-Z` and the `dY` shorthand.
    pub fn parse(input: &str) -> Result<Self, DiceError> {
        let input = input.trim().to_ascii_lowercase();
        if input.is_empty() {
            return Err(DiceError::Empty);
        }

        let (count_str, after_d) = input.split_once('d').ok_or_else(|| {
            DiceError::InvalidFormat(format!("Missing 'd' separator in '{input}'"))
        })?;

        let count: u32 = if count_str.is_empty() {
            1
        } else {
            count_str.parse().map_err(|_| {
                DiceError::InvalidFormat(format!("Invalid dice count: '{count_str}'"))
            })?
        };

        let (sides_str, modifier) = match after_d.find(['+', '-']) {
            Some(0) => {
                return Err(DiceError::InvalidFormat(format!(
                    "Invalid die size: '{after_d}'"
                )));
            }
            Some(pos) => {
                let (sides_str, signed) = after_d.split_at(pos);
                let digits = &signed[1..];
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(DiceError::InvalidFormat(format!(
                        "Invalid modifier: '{signed}'"
                    )));
                }
                let magnitude: i64 = digits.parse().map_err(|_| DiceError::InvalidModifier)?;
                let modifier = if signed.starts_with('-') {
                    -magnitude
                } else {
                    magnitude
                };
                (sides_str, modifier)
            }
            None => (after_d, 0),
        };

        let sides: u32 = sides_str.parse().map_err(|_| {
            DiceError::InvalidFormat(format!("Invalid die size: '{sides_str}'"))
        })?;

        Self::new(count, sides, modifier)
    }

    pub fn min_total(&self) -> i64 {
        i64::from(self.count) + self.modifier
    }

    pub fn max_total(&self) -> i64 {
        i64::from(self.count) * i64::from(self.sides) + self.modifier
    }
}

impl fmt::Display for DiceNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.modifier {
            0 => write!(f, "{}d{}", self.count, self.sides),
            m if m > 0 => write!(f, "{}d{}+{}", self.count, self.sides, m),
            m => write!(f, "{}d{}{}", self.count, self.sides, m),
        }
    }
}

impl FromStr for DiceNotation {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollSource {
    Engine,
    Fallback,
}

/// Outcome of one roll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceRoll {
    pub notation: DiceNotation,
    pub faces: Vec<u32>,
    pub total: i64,
    pub source: RollSource,
}

impl DiceRoll {
    fn from_faces(notation: DiceNotation, faces: Vec<u32>, source: RollSource) -> Self {
        let total = faces.iter().map(|face| i64::from(*face)).sum::<i64>() + notation.modifier;
        Self {
            notation,
            faces,
            total,
            source,
        }
    }

    /// Sum of the faces, before the modifier.
    pub fn base(&self) -> i64 {
        self.total - self.notation.modifier
    }
}

/// Something that animates dice and reports one value per die.
#[cfg_attr(test, mockall::automock)]
pub trait DiceEngine {
    fn initialize(&mut self) -> Result<(), DiceError>;
    fn roll(&mut self, notation: &DiceNotation) -> Result<Vec<u32>, DiceError>;
}

impl<E: DiceEngine + ?Sized> DiceEngine for Box<E> {
    fn initialize(&mut self) -> Result<(), DiceError> {
        (**self).initialize()
    }

    fn roll(&mut self, notation: &DiceNotation) -> Result<Vec<u32>, DiceError> {
        (**self).roll(notation)
    }
}

/// Terminal dice: tumbles each die through random faces before it settles.
pub struct TumbleEngine {
    source: Box<dyn RandomSource>,
    ready: bool,
}

impl TumbleEngine {
    pub fn new(source: Box<dyn RandomSource>) -> Self {
        Self {
            source,
            ready: false,
        }
    }

    /// One animation frame: a random face per die.
    pub fn frame(&mut self, notation: &DiceNotation) -> Vec<u32> {
        (0..notation.count)
            .map(|_| self.source.next_index(notation.sides as usize) as u32 + 1)
            .collect()
    }
}

impl DiceEngine for TumbleEngine {
    fn initialize(&mut self) -> Result<(), DiceError> {
        self.ready = true;
        Ok(())
    }

    fn roll(&mut self, notation: &DiceNotation) -> Result<Vec<u32>, DiceError> {
        if !self.ready {
            return Err(DiceError::EngineUnavailable("not initialized".to_string()));
        }
        Ok(self.frame(notation))
    }
}

/// Rolls without any engine: `count` draws of `integer(1, sides)` plus the modifier.
pub fn roll_direct(rng: &mut dyn RandomSource, notation: &DiceNotation) -> DiceRoll {
    let faces = numbers::integer(rng, 1, i64::from(notation.sides), notation.count as usize)
        .map(|values| values.into_iter().map(|value| value as u32).collect())
        .unwrap_or_default();
    DiceRoll::from_faces(*notation, faces, RollSource::Fallback)
}

/// Drives a [`DiceEngine`] and guarantees a result: whenever the engine is not
/// ready, errors, or reports faces that don't fit the notation, the roll is
/// computed with [`roll_direct`].
pub struct DiceRoller<E> {
    engine: E,
    ready: bool,
}

impl<E: DiceEngine> DiceRoller<E> {
    pub fn new(mut engine: E) -> Self {
        let ready = match engine.initialize() {
            Ok(()) => true,
            Err(err) => {
                warn!("dice engine failed to initialize: {err}");
                false
            }
        };
        Self { engine, ready }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn roll(&mut self, rng: &mut dyn RandomSource, notation: &DiceNotation) -> DiceRoll {
        if self.ready {
            match self.engine.roll(notation) {
                Ok(faces) if faces_fit(notation, &faces) => {
                    let roll = DiceRoll::from_faces(*notation, faces, RollSource::Engine);
                    debug!(%notation, total = roll.total, "engine roll");
                    return roll;
                }
                Ok(faces) => warn!(%notation, ?faces, "dice engine reported impossible faces"),
                Err(err) => warn!(%notation, "dice engine roll failed: {err}"),
            }
        }
        let roll = roll_direct(rng, notation);
        debug!(%notation, total = roll.total, "fallback roll");
        roll
    }
}

fn faces_fit(notation: &DiceNotation, faces: &[u32]) -> bool {
    faces.len() == notation.count as usize
        && faces.iter().all(|face| (1..=notation.sides).contains(face))
}
