use crate::config::{DiceConfig, MAX_DICE_QUANTITY};
use crate::dice::{self, DiceError, DiceNotation, DiceRoll, DieType, MAX_MODIFIER};
use crate::history::HistoryLog;
use crate::random::RandomSource;

/// Ticks a roll tumbles before it settles.
pub const ROLL_FRAMES: u8 = 4;

/// Rolls kept on the dice page; the other pages keep the default history size.
pub const DICE_HISTORY_CAPACITY: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiceField {
    Die,
    Quantity,
    Modifier,
}

impl DiceField {
    pub const ALL: [DiceField; 3] = [DiceField::Die, DiceField::Quantity, DiceField::Modifier];

    pub fn label(self) -> &'static str {
        match self {
            DiceField::Die => "Die",
            DiceField::Quantity => "Quantity",
            DiceField::Modifier => "Modifier",
        }
    }
}

/// A roll in progress: the notation and the faces currently shown.
#[derive(Clone, Debug)]
pub struct RollAnimation {
    pub notation: DiceNotation,
    pub faces: Vec<u32>,
    pub frames_left: u8,
}

pub struct DicePage {
    pub die: DieType,
    pub quantity: u32,
    pub modifier: i64,
    pub field: DiceField,
    pub last: Option<DiceRoll>,
    pub rolling: Option<RollAnimation>,
    pub history: HistoryLog<DiceRoll>,
}

impl DicePage {
    pub fn new(config: &DiceConfig) -> Self {
        Self {
            die: config.die,
            quantity: config.quantity.clamp(1, MAX_DICE_QUANTITY),
            modifier: config.modifier.clamp(-MAX_MODIFIER, MAX_MODIFIER),
            field: DiceField::Die,
            last: None,
            rolling: None,
            history: HistoryLog::with_capacity(DICE_HISTORY_CAPACITY),
        }
    }

    pub fn notation(&self) -> Result<DiceNotation, DiceError> {
        DiceNotation::of(self.die, self.quantity, self.modifier)
    }

    pub fn is_rolling(&self) -> bool {
        self.rolling.is_some()
    }

    pub fn select_prev(&mut self) {
        let index = DiceField::ALL.iter().position(|f| *f == self.field).unwrap_or(0);
        self.field = DiceField::ALL[(index + DiceField::ALL.len() - 1) % DiceField::ALL.len()];
    }

    pub fn select_next(&mut self) {
        let index = DiceField::ALL.iter().position(|f| *f == self.field).unwrap_or(0);
        self.field = DiceField::ALL[(index + 1) % DiceField::ALL.len()];
    }

    pub fn adjust(&mut self, delta: i64) {
        match self.field {
            DiceField::Die => {
                self.die = if delta >= 0 { self.die.next() } else { self.die.prev() };
            }
            DiceField::Quantity => {
                let quantity = i64::from(self.quantity) + delta;
                self.quantity = quantity.clamp(1, i64::from(MAX_DICE_QUANTITY)) as u32;
            }
            DiceField::Modifier => {
                self.modifier = self
                    .modifier
                    .saturating_add(delta)
                    .clamp(-MAX_MODIFIER, MAX_MODIFIER);
            }
        }
    }

    /// Current text of the selected field, for the edit popup.
    pub fn field_text(&self) -> String {
        match self.field {
            DiceField::Die => self.die.label().to_string(),
            DiceField::Quantity => self.quantity.to_string(),
            DiceField::Modifier => self.modifier.to_string(),
        }
    }

    pub fn set_field(&mut self, text: &str) -> Result<(), String> {
        let text = text.trim();
        match self.field {
            DiceField::Die => {
                self.die = text.parse::<DieType>().map_err(|err| err.to_string())?;
            }
            DiceField::Quantity => {
                let quantity: u32 = text
                    .parse()
                    .map_err(|_| format!("Quantity must be a whole number, got '{text}'"))?;
                if !(1..=MAX_DICE_QUANTITY).contains(&quantity) {
                    return Err(format!("Quantity must be between 1 and {MAX_DICE_QUANTITY}"));
                }
                self.quantity = quantity;
            }
            DiceField::Modifier => {
                let modifier: i64 = text
                    .strip_prefix('+')
                    .unwrap_or(text)
                    .parse()
                    .map_err(|_| format!("Modifier must be a whole number, got '{text}'"))?;
                if !(-MAX_MODIFIER..=MAX_MODIFIER).contains(&modifier) {
                    return Err(DiceError::InvalidModifier.to_string());
                }
                self.modifier = modifier;
            }
        }
        Ok(())
    }

    /// Starts tumbling `notation`. Ignored while another roll animates.
    pub fn start_roll(&mut self, rng: &mut dyn RandomSource, notation: DiceNotation) -> bool {
        if self.is_rolling() {
            return false;
        }
        self.rolling = Some(RollAnimation {
            notation,
            faces: dice::roll_direct(rng, &notation).faces,
            frames_left: ROLL_FRAMES,
        });
        true
    }

    /// Advances the animation one frame. Returns the notation once the
    /// animation has run out and the real roll is due.
    pub fn tick(&mut self, rng: &mut dyn RandomSource) -> Option<DiceNotation> {
        let animation = self.rolling.as_mut()?;
        animation.frames_left = animation.frames_left.saturating_sub(1);
        if animation.frames_left == 0 {
            let notation = animation.notation;
            return Some(notation);
        }
        animation.faces = dice::roll_direct(rng, &animation.notation).faces;
        None
    }

    pub fn finish(&mut self, roll: DiceRoll) {
        self.rolling = None;
        self.history.append(roll.clone());
        self.last = Some(roll);
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
