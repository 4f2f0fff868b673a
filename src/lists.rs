//! Picking and shuffling over a user-supplied list of labeled items.

use tracing::debug;

use crate::error::SampleError;
use crate::random::RandomSource;
use crate::types::ListItem;
use crate::weighted;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListMode {
    Picker,
    Multiple,
    Weighted,
    Shuffle,
}

impl ListMode {
    pub const ALL: [ListMode; 4] = [
        ListMode::Picker,
        ListMode::Multiple,
        ListMode::Weighted,
        ListMode::Shuffle,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ListMode::Picker => "Pick One",
            ListMode::Multiple => "Pick Multiple",
            ListMode::Weighted => "Weighted Pick",
            ListMode::Shuffle => "Shuffle List",
        }
    }

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|mode| *mode == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

/// Uniformly picks one item's label.
pub fn pick_one(rng: &mut dyn RandomSource, items: &[ListItem]) -> Result<String, SampleError> {
    if items.is_empty() {
        return Err(SampleError::EmptyList);
    }
    Ok(items[rng.next_index(items.len())].text.clone())
}

/// Picks `count` labels without replacement.
///
/// Asking for the whole list (or more) returns every label in a uniformly
/// shuffled order; callers that must refuse oversized requests check
/// [`check_pick_count`] first.
pub fn pick_many(
    rng: &mut dyn RandomSource,
    items: &[ListItem],
    count: usize,
) -> Result<Vec<String>, SampleError> {
    if items.is_empty() {
        return Err(SampleError::EmptyList);
    }
    if count == 0 {
        return Err(SampleError::ZeroCount);
    }
    if count >= items.len() {
        return Ok(shuffle(rng, items));
    }
    let mut labels = labels(items);
    for i in 0..count {
        let j = i + rng.next_index(labels.len() - i);
        labels.swap(i, j);
    }
    labels.truncate(count);
    debug!(count, of = items.len(), "picked list items");
    Ok(labels)
}

/// Picks one label with probability proportional to its weight (default 1).
/// Zero-weight items are never picked.
pub fn pick_weighted(
    rng: &mut dyn RandomSource,
    items: &[ListItem],
) -> Result<String, SampleError> {
    if items.is_empty() {
        return Err(SampleError::EmptyList);
    }
    let weights: Vec<f64> = items.iter().map(ListItem::effective_weight).collect();
    let total = weighted::total_weight(weights.iter().copied(), false)?;
    let index = weighted::pick_index(rng, &weights, total);
    Ok(items[index].text.clone())
}

/// All labels in a uniformly random order.
pub fn shuffle(rng: &mut dyn RandomSource, items: &[ListItem]) -> Vec<String> {
    let mut labels = labels(items);
    shuffle_in_place(rng, &mut labels);
    labels
}

/// Fisher-Yates: walk from the last index down, swapping each slot with a
/// uniformly chosen slot at or before it.
pub fn shuffle_in_place<T>(rng: &mut dyn RandomSource, values: &mut [T]) {
    for i in (1..values.len()).rev() {
        let j = rng.next_index(i + 1);
        values.swap(i, j);
    }
}

/// Rejects a multi-pick asking for more items than the list holds.
pub fn check_pick_count(available: usize, requested: usize) -> Result<(), SampleError> {
    if requested == 0 {
        return Err(SampleError::ZeroCount);
    }
    if requested > available {
        return Err(SampleError::TooManyItems {
            requested,
            available,
        });
    }
    Ok(())
}

/// Runs the sampler for `mode`. Multi-picks are checked against the list size.
pub fn generate(
    rng: &mut dyn RandomSource,
    mode: ListMode,
    items: &[ListItem],
    count: usize,
) -> Result<Vec<String>, SampleError> {
    if items.is_empty() {
        return Err(SampleError::EmptyList);
    }
    match mode {
        ListMode::Picker => Ok(vec![pick_one(rng, items)?]),
        ListMode::Multiple => {
            check_pick_count(items.len(), count)?;
            pick_many(rng, items, count)
        }
        ListMode::Weighted => Ok(vec![pick_weighted(rng, items)?]),
        ListMode::Shuffle => Ok(shuffle(rng, items)),
    }
}

/// One label per non-empty line, trimmed.
pub fn parse_import(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Labels joined by newlines.
pub fn export(items: &[ListItem]) -> String {
    items
        .iter()
        .map(|item| item.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

fn labels(items: &[ListItem]) -> Vec<String> {
    items.iter().map(|item| item.text.clone()).collect()
}
