//! Properties of the sampling and color core, checked through the public API.

use std::collections::HashMap;

use randomizer::color;
use randomizer::dice::{self, DiceNotation};
use randomizer::history::{HISTORY_CAPACITY, HistoryLog};
use randomizer::lists;
use randomizer::numbers;
use randomizer::random::{RandomSource, SeededSource};
use randomizer::types::{ListItem, Rgb, WeightedValue};

/// Integer HSL loses a little precision per channel on the way back.
const HSL_TOLERANCE: i16 = 5;

fn close(a: Rgb, b: Rgb, tolerance: i16) -> bool {
    (i16::from(a.r) - i16::from(b.r)).abs() <= tolerance
        && (i16::from(a.g) - i16::from(b.g)).abs() <= tolerance
        && (i16::from(a.b) - i16::from(b.b)).abs() <= tolerance
}

fn items(labels: &[&str]) -> Vec<ListItem> {
    labels
        .iter()
        .enumerate()
        .map(|(index, label)| ListItem::new(index.to_string(), *label))
        .collect()
}

#[test]
fn hex_survives_rgb_and_hsl_round_trips() {
    let mut rng = SeededSource::new(2024);
    for _ in 0..500 {
        let hex = color::random_hex(&mut rng);
        let rgb = color::hex_to_rgb(&hex);
        assert_eq!(color::rgb_to_hex(rgb.r, rgb.g, rgb.b), hex);
        assert_eq!(color::rgb_to_hex(rgb.r, rgb.g, rgb.b), hex.to_uppercase());

        let hsl = color::rgb_to_hsl(rgb.r, rgb.g, rgb.b);
        let back = color::hsl_to_rgb(hsl.h, hsl.s, hsl.l);
        assert!(close(rgb, back, HSL_TOLERANCE), "{hex}: {rgb:?} vs {back:?}");
    }
}

#[test]
fn worst_round_trip_drift_sits_at_the_tolerance() {
    // Largest drift over the whole 24-bit cube.
    let rgb = color::hex_to_rgb("#02E4E6");
    let hsl = color::rgb_to_hsl(rgb.r, rgb.g, rgb.b);
    let back = color::hsl_to_rgb(hsl.h, hsl.s, hsl.l);
    assert_eq!((hsl.h, hsl.s, hsl.l), (181, 98, 45));
    assert_eq!(back, Rgb::new(2, 223, 227));
    assert!(close(rgb, back, HSL_TOLERANCE));
    assert!(!close(rgb, back, HSL_TOLERANCE - 1));
}

#[test]
fn lowercase_hex_normalizes_to_uppercase() {
    let rgb = color::hex_to_rgb("#a1b2c3");
    assert_eq!(color::rgb_to_hex(rgb.r, rgb.g, rgb.b), "#A1B2C3");
}

#[test]
fn complementary_twice_returns_home() {
    let mut rng = SeededSource::new(77);
    for _ in 0..300 {
        let hex = color::random_hex(&mut rng);
        let twice = color::complementary(&color::complementary(&hex));
        assert!(
            close(color::hex_to_rgb(&hex), color::hex_to_rgb(&twice), HSL_TOLERANCE),
            "{hex} -> {twice}"
        );
    }
}

#[test]
fn weighted_draws_follow_the_weights() {
    let values = [
        WeightedValue::new(1.0, 10.0),
        WeightedValue::new(2.0, 30.0),
        WeightedValue::new(3.0, 60.0),
    ];
    let mut rng = SeededSource::new(5);
    let draws = numbers::weighted(&mut rng, &values, 20_000).unwrap();
    let mut counts: HashMap<i64, usize> = HashMap::new();
    for value in draws {
        *counts.entry(value as i64).or_default() += 1;
    }
    for (value, expected) in [(1, 0.10), (2, 0.30), (3, 0.60)] {
        let share = counts.get(&value).copied().unwrap_or_default() as f64 / 20_000.0;
        assert!((share - expected).abs() < 0.02, "{value}: {share}");
    }
}

#[test]
fn unique_values_are_distinct_sorted_and_in_range() {
    let mut rng = SeededSource::new(11);
    for (min, max, count) in [(1, 10, 10), (-20, 20, 7), (100, 1_000, 50), (0, 0, 1)] {
        let values = numbers::unique(&mut rng, min, max, count).unwrap();
        assert_eq!(values.len(), count);
        assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(values.iter().all(|value| (min..=max).contains(value)));
    }
}

#[test]
fn shuffle_is_a_permutation() {
    let labels = ["a", "b", "b", "c", "d", "e"];
    let mut rng = SeededSource::new(3);
    for _ in 0..50 {
        let mut shuffled = lists::shuffle(&mut rng, &items(&labels));
        assert_eq!(shuffled.len(), labels.len());
        shuffled.sort();
        assert_eq!(shuffled, labels);
    }
}

#[test]
fn shuffle_reaches_every_ordering_evenly() {
    let list = items(&["a", "b", "c"]);
    let mut rng = SeededSource::new(8);
    let mut counts: HashMap<Vec<String>, usize> = HashMap::new();
    for _ in 0..6_000 {
        *counts.entry(lists::shuffle(&mut rng, &list)).or_default() += 1;
    }
    assert_eq!(counts.len(), 6);
    assert!(counts.values().all(|count| (800..=1_200).contains(count)));
}

#[test]
fn red_is_red() {
    let rgb = color::hex_to_rgb("#FF0000");
    assert_eq!(rgb, Rgb::new(255, 0, 0));
    let hsl = color::rgb_to_hsl(rgb.r, rgb.g, rgb.b);
    assert_eq!((hsl.h, hsl.s, hsl.l), (0, 100, 50));
}

#[test]
fn unique_over_the_whole_range_is_the_range() {
    let mut rng = SeededSource::new(1);
    assert_eq!(numbers::unique(&mut rng, 1, 5, 5).unwrap(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn unique_fails_when_the_range_is_too_small() {
    let mut rng = SeededSource::new(1);
    assert!(numbers::unique(&mut rng, 1, 3, 5).is_err());
}

#[test]
fn zero_weight_items_are_never_picked() {
    let list = vec![
        ListItem::new("1", "A").with_weight(0.0),
        ListItem::new("2", "B").with_weight(10.0),
    ];
    let mut rng = SeededSource::new(4);
    for _ in 0..1_000 {
        assert_eq!(lists::pick_weighted(&mut rng, &list).unwrap(), "B");
    }
}

#[test]
fn nearest_names() {
    assert_eq!(color::nearest_name("#FF0000"), "Red");
    assert_eq!(color::nearest_name("#010101"), "Black");
}

#[test]
fn palette_from_hue_zero() {
    let mut rng = SeededSource::new(6);
    let palette = color::palette(&mut rng, 5, Some(0)).unwrap();
    let hues: Vec<u16> = palette.iter().map(|color| color.hsl.h).collect();
    assert_eq!(hues, vec![0, 60, 120, 180, 240]);
    for color in &palette {
        assert!((50..80).contains(&color.hsl.s));
        assert!((40..70).contains(&color.hsl.l));
        assert!(color::is_valid_hex(&color.hex));
    }
}

#[test]
fn direct_dice_rolls_stay_in_range() {
    let notation = DiceNotation::parse("3d6+2").unwrap();
    let mut rng = SeededSource::new(12);
    for _ in 0..500 {
        let roll = dice::roll_direct(&mut rng, &notation);
        assert_eq!(roll.faces.len(), 3);
        assert!(roll.faces.iter().all(|face| (1..=6).contains(face)));
        assert!((notation.min_total()..=notation.max_total()).contains(&roll.total));
        assert_eq!(roll.base() + 2, roll.total);
    }
}

#[test]
fn history_keeps_the_newest_entries() {
    let mut log = HistoryLog::new();
    let mut rng = SeededSource::new(0);
    for _ in 0..HISTORY_CAPACITY + 25 {
        log.append(rng.next_index(1_000));
    }
    assert_eq!(log.len(), HISTORY_CAPACITY);
}
