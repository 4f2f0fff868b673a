//! Number sampling: integers, floats, ranges, weighted values and unique sets.

use std::collections::BTreeSet;
use std::fmt;

use tracing::debug;

use crate::error::SampleError;
use crate::random::RandomSource;
use crate::types::{Number, WeightedValue};
use crate::weighted;

/// Upper bound on `count` applied by callers; the samplers themselves don't enforce it.
pub const MAX_COUNT: usize = 1000;
pub const MAX_DECIMALS: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberMode {
    Integer,
    Float,
    Range,
    Weighted,
    Unique,
}

impl NumberMode {
    pub const ALL: [NumberMode; 5] = [
        NumberMode::Integer,
        NumberMode::Float,
        NumberMode::Range,
        NumberMode::Weighted,
        NumberMode::Unique,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NumberMode::Integer => "Random Integer",
            NumberMode::Float => "Random Float/Decimal",
            NumberMode::Range => "Number Range",
            NumberMode::Weighted => "Weighted Random",
            NumberMode::Unique => "Unique Numbers",
        }
    }

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|mode| *mode == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

/// `count` independent draws of `floor(U * (max - min + 1)) + min`.
pub fn integer(
    rng: &mut dyn RandomSource,
    min: i64,
    max: i64,
    count: usize,
) -> Result<Vec<i64>, SampleError> {
    check_int_bounds(min, max, count)?;
    let values = (0..count).map(|_| draw_int(rng, min, max)).collect();
    debug!(min, max, count, "generated integers");
    Ok(values)
}

/// `count` draws of `U * (max - min) + min`, each rounded to `decimals` places.
///
/// Rounding can land a value a hair outside `[min, max]`.
pub fn float(
    rng: &mut dyn RandomSource,
    min: f64,
    max: f64,
    count: usize,
    decimals: u32,
) -> Result<Vec<f64>, SampleError> {
    if decimals > MAX_DECIMALS {
        return Err(SampleError::TooManyDecimals {
            decimals,
            max: MAX_DECIMALS,
        });
    }
    let values = range(rng, min, max, count)?
        .into_iter()
        .map(|value| round_to(value, decimals))
        .collect();
    debug!(min, max, count, decimals, "generated floats");
    Ok(values)
}

/// Like [`float`] but at full precision.
pub fn range(
    rng: &mut dyn RandomSource,
    min: f64,
    max: f64,
    count: usize,
) -> Result<Vec<f64>, SampleError> {
    if !(min <= max) || !min.is_finite() || !max.is_finite() {
        return Err(SampleError::InvertedBounds { min, max });
    }
    if count == 0 {
        return Err(SampleError::ZeroCount);
    }
    Ok((0..count)
        .map(|_| rng.next_f64() * (max - min) + min)
        .collect())
}

/// `count` draws from `values`, each picked with probability proportional to its weight.
pub fn weighted(
    rng: &mut dyn RandomSource,
    values: &[WeightedValue],
    count: usize,
) -> Result<Vec<f64>, SampleError> {
    if values.is_empty() {
        return Err(SampleError::EmptyValues);
    }
    if count == 0 {
        return Err(SampleError::ZeroCount);
    }
    let weights: Vec<f64> = values.iter().map(|value| value.weight).collect();
    let total = weighted::total_weight(weights.iter().copied(), true)?;
    let picks = (0..count)
        .map(|_| values[weighted::pick_index(rng, &weights, total)].value)
        .collect();
    debug!(options = values.len(), count, "generated weighted values");
    Ok(picks)
}

/// `count` distinct integers from `[min, max]`, sorted ascending.
pub fn unique(
    rng: &mut dyn RandomSource,
    min: i64,
    max: i64,
    count: usize,
) -> Result<Vec<i64>, SampleError> {
    check_int_bounds(min, max, count)?;
    let available = span(min, max);
    if count as u128 > available {
        return Err(SampleError::RangeTooSmall {
            requested: count,
            min,
            max,
            available,
        });
    }
    let mut seen = BTreeSet::new();
    while seen.len() < count {
        seen.insert(draw_int(rng, min, max));
    }
    debug!(min, max, count, "generated unique integers");
    Ok(seen.into_iter().collect())
}

/// Runs the sampler for `mode` and tags the values as [`Number`]s.
///
/// `min`/`max` are truncated to integers for the integer modes.
pub fn generate(
    rng: &mut dyn RandomSource,
    request: &NumberRequest<'_>,
) -> Result<Vec<Number>, SampleError> {
    let NumberRequest {
        mode,
        min,
        max,
        count,
        decimals,
        weighted: values,
    } = *request;
    let numbers = match mode {
        NumberMode::Integer => integer(rng, min as i64, max as i64, count)?
            .into_iter()
            .map(Number::Int)
            .collect(),
        NumberMode::Unique => unique(rng, min as i64, max as i64, count)?
            .into_iter()
            .map(Number::Int)
            .collect(),
        NumberMode::Float => float(rng, min, max, count, decimals)?
            .into_iter()
            .map(Number::Float)
            .collect(),
        NumberMode::Range => range(rng, min, max, count)?
            .into_iter()
            .map(Number::Float)
            .collect(),
        NumberMode::Weighted => weighted(rng, values, count)?
            .into_iter()
            .map(as_number)
            .collect(),
    };
    Ok(numbers)
}

/// Parameters of a [`generate`] call.
#[derive(Clone, Copy, Debug)]
pub struct NumberRequest<'a> {
    pub mode: NumberMode,
    pub min: f64,
    pub max: f64,
    pub count: usize,
    pub decimals: u32,
    pub weighted: &'a [WeightedValue],
}

/// Rounds half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(MAX_DECIMALS) as i32);
    (value * factor).round() / factor
}

/// Total, average and extremes of a result batch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub sum: f64,
    pub average: f64,
    pub min: f64,
    pub max: f64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total: {}  Average: {:.2}  Min: {}  Max: {}",
            self.sum, self.average, self.min, self.max
        )
    }
}

pub fn summarize(values: &[Number]) -> Option<Summary> {
    if values.is_empty() {
        return None;
    }
    let floats = values.iter().map(|value| value.as_f64());
    let sum: f64 = floats.clone().sum();
    let min = floats.clone().fold(f64::INFINITY, f64::min);
    let max = floats.fold(f64::NEG_INFINITY, f64::max);
    Some(Summary {
        count: values.len(),
        sum,
        average: sum / values.len() as f64,
        min,
        max,
    })
}

fn as_number(value: f64) -> Number {
    let integral = value.fract() == 0.0 && value.abs() < i64::MAX as f64;
    if integral {
        Number::Int(value as i64)
    } else {
        Number::Float(value)
    }
}

fn check_int_bounds(min: i64, max: i64, count: usize) -> Result<(), SampleError> {
    if min > max {
        return Err(SampleError::InvertedRange { min, max });
    }
    if count == 0 {
        return Err(SampleError::ZeroCount);
    }
    Ok(())
}

fn span(min: i64, max: i64) -> u128 {
    (i128::from(max) - i128::from(min) + 1) as u128
}

fn draw_int(rng: &mut dyn RandomSource, min: i64, max: i64) -> i64 {
    let offset = (rng.next_f64() * span(min, max) as f64).floor() as i128;
    (i128::from(min) + offset).min(i128::from(max)) as i64
}
