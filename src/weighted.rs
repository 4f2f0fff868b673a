//! Cumulative-weight inversion shared by the number and list samplers.

use crate::error::SampleError;
use crate::random::RandomSource;

/// Sum of the weights after checking each one is finite and non-negative.
/// With `strict`, zero is rejected too.
pub(crate) fn total_weight(
    weights: impl IntoIterator<Item = f64>,
    strict: bool,
) -> Result<f64, SampleError> {
    let mut total = 0.0;
    for (index, weight) in weights.into_iter().enumerate() {
        let rejected = !weight.is_finite() || weight < 0.0 || (strict && weight == 0.0);
        if rejected {
            return Err(SampleError::InvalidWeight { index, weight });
        }
        total += weight;
    }
    if total <= 0.0 || !total.is_finite() {
        return Err(SampleError::ZeroTotalWeight);
    }
    Ok(total)
}

/// Draws `r = U * total` and walks the weights subtracting each one; the first
/// index where the remainder reaches zero wins. Zero weights are never picked.
/// Floating-point drift that leaves a positive remainder falls back to the last
/// index with a positive weight.
pub(crate) fn pick_index(rng: &mut dyn RandomSource, weights: &[f64], total: f64) -> usize {
    let mut remainder = rng.next_f64() * total;
    let mut last_positive = 0;
    for (index, &weight) in weights.iter().enumerate() {
        if weight <= 0.0 {
            continue;
        }
        last_positive = index;
        remainder -= weight;
        if remainder <= 0.0 {
            return index;
        }
    }
    last_positive
}
