/// Color math: hex/RGB/HSL conversions, naming, palettes and contrast.
use tracing::debug;

use crate::error::ColorError;
use crate::random::RandomSource;
use crate::types::{Color, Hsl, Rgb};

pub const MIN_PALETTE_SIZE: usize = 2;
pub const MAX_PALETTE_SIZE: usize = 12;
/// Hue rotation between consecutive palette colors.
pub const PALETTE_HUE_STEP: u16 = 60;
/// Beyond this RGB distance a qualitative descriptor may replace the nearest name.
const NAME_DISTANCE_LIMIT: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    Hex,
    Rgb,
    Hsl,
    Palette,
    Complementary,
    Name,
}

impl ColorMode {
    pub const ALL: [ColorMode; 6] = [
        ColorMode::Hex,
        ColorMode::Rgb,
        ColorMode::Hsl,
        ColorMode::Palette,
        ColorMode::Complementary,
        ColorMode::Name,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ColorMode::Hex => "Random Hex Color",
            ColorMode::Rgb => "Random RGB Color",
            ColorMode::Hsl => "Random HSL Color",
            ColorMode::Palette => "Color Palette",
            ColorMode::Complementary => "Complementary Colors",
            ColorMode::Name => "Color Name Generator",
        }
    }

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|mode| *mode == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

/// Entry of the reference table used by [`nearest_name`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NamedColor {
    pub name: &'static str,
    pub hex: &'static str,
    pub rgb: Rgb,
}

const fn named(name: &'static str, hex: &'static str, r: u8, g: u8, b: u8) -> NamedColor {
    NamedColor {
        name,
        hex,
        rgb: Rgb::new(r, g, b),
    }
}

/// Scanned in order; the first entry wins exact matches and distance ties.
pub const NAMED_COLORS: &[NamedColor] = &[
    named("Red", "#FF0000", 255, 0, 0),
    named("Green", "#00FF00", 0, 255, 0),
    named("Blue", "#0000FF", 0, 0, 255),
    named("Yellow", "#FFFF00", 255, 255, 0),
    named("Magenta", "#FF00FF", 255, 0, 255),
    named("Cyan", "#00FFFF", 0, 255, 255),
    named("White", "#FFFFFF", 255, 255, 255),
    named("Black", "#000000", 0, 0, 0),
    named("Gray", "#808080", 128, 128, 128),
    named("Orange", "#FFA500", 255, 165, 0),
    named("Purple", "#800080", 128, 0, 128),
    named("Pink", "#FFC0CB", 255, 192, 203),
    named("Brown", "#A52A2A", 165, 42, 42),
    named("Navy", "#000080", 0, 0, 128),
    named("Lime", "#00FF00", 0, 255, 0),
    named("Teal", "#008080", 0, 128, 128),
    named("Maroon", "#800000", 128, 0, 0),
    named("Olive", "#808000", 128, 128, 0),
    named("Aqua", "#00FFFF", 0, 255, 255),
    named("Silver", "#C0C0C0", 192, 192, 192),
    named("Gold", "#FFD700", 255, 215, 0),
    named("Coral", "#FF7F50", 255, 127, 80),
    named("Salmon", "#FA8072", 250, 128, 114),
    named("Turquoise", "#40E0D0", 64, 224, 208),
    named("Violet", "#EE82EE", 238, 130, 238),
    named("Indigo", "#4B0082", 75, 0, 130),
    named("Beige", "#F5F5DC", 245, 245, 220),
    named("Khaki", "#F0E68C", 240, 230, 140),
    named("Lavender", "#E6E6FA", 230, 230, 250),
    named("Mint", "#98FF98", 152, 255, 152),
    named("Peach", "#FFE5B4", 255, 229, 180),
    named("Crimson", "#DC143C", 220, 20, 60),
    named("Tomato", "#FF6347", 255, 99, 71),
    named("Sky Blue", "#87CEEB", 135, 206, 235),
    named("Forest Green", "#228B22", 34, 139, 34),
    named("Royal Blue", "#4169E1", 65, 105, 225),
    named("Chocolate", "#D2691E", 210, 105, 30),
    named("Sienna", "#A0522D", 160, 82, 45),
    named("Tan", "#D2B48C", 210, 180, 140),
    named("Wheat", "#F5DEB3", 245, 222, 179),
    named("Peru", "#CD853F", 205, 133, 63),
    named("Sandy Brown", "#F4A460", 244, 164, 96),
];

/// True for six hex digits with an optional leading `#`, in either case.
pub fn is_valid_hex(s: &str) -> bool {
    let digits = s.strip_prefix('#').unwrap_or(s);
    digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Strict parse of `#RRGGBB` (the `#` is optional).
pub fn parse_hex(s: &str) -> Result<Rgb, ColorError> {
    let trimmed = s.trim();
    if !is_valid_hex(trimmed) {
        return Err(ColorError::InvalidHex(s.to_string()));
    }
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::InvalidHex(s.to_string()))
    };
    Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Lenient parse: malformed input becomes black.
pub fn hex_to_rgb(s: &str) -> Rgb {
    parse_hex(s).unwrap_or(Rgb::BLACK)
}

pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02X}{g:02X}{b:02X}")
}

pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0, 0, percent(l));
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let sector = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    let hue = ((sector * 60.0).round() as u16) % 360;
    Hsl::new(hue, percent(s), percent(l))
}

/// Inverse of [`rgb_to_hsl`]. Hue wraps modulo 360; `s` and `l` clamp at 100.
pub fn hsl_to_rgb(h: u16, s: u8, l: u8) -> Rgb {
    let h = f64::from(h % 360) / 360.0;
    let s = f64::from(s.min(100)) / 100.0;
    let l = f64::from(l.min(100)) / 100.0;

    if s == 0.0 {
        let gray = channel(l);
        return Rgb::new(gray, gray, gray);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    Rgb::new(
        channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
        channel(hue_to_rgb(p, q, h)),
        channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
    )
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn channel(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

fn percent(unit: f64) -> u8 {
    (unit * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Uniform 24-bit color as `#RRGGBB`.
pub fn random_hex(rng: &mut dyn RandomSource) -> String {
    let value = rng.next_index(0x0100_0000);
    format!("#{value:06X}")
}

pub fn random_rgb(rng: &mut dyn RandomSource) -> Rgb {
    let mut byte = || rng.next_index(256) as u8;
    Rgb::new(byte(), byte(), byte())
}

/// Hue in `0..360`, saturation and lightness in `0..100`.
pub fn random_hsl(rng: &mut dyn RandomSource) -> Hsl {
    let h = rng.next_index(360) as u16;
    let s = rng.next_index(100) as u8;
    let l = rng.next_index(100) as u8;
    Hsl::new(h, s, l)
}

/// Rotates the hue by 180 degrees, keeping saturation and lightness.
pub fn complementary(hex: &str) -> String {
    let rgb = hex_to_rgb(hex);
    let hsl = rgb_to_hsl(rgb.r, rgb.g, rgb.b);
    let rotated = hsl_to_rgb((hsl.h + 180) % 360, hsl.s, hsl.l);
    rgb_to_hex(rotated.r, rotated.g, rotated.b)
}

/// Closest reference-table name by Euclidean RGB distance.
pub fn nearest_name(hex: &str) -> &'static str {
    let normalized = normalize_hex(hex);
    if let Some(exact) = NAMED_COLORS.iter().find(|c| c.hex == normalized) {
        return exact.name;
    }

    let rgb = hex_to_rgb(hex);
    let mut closest = &NAMED_COLORS[0];
    let mut min_distance = distance(rgb, closest.rgb);
    for candidate in NAMED_COLORS {
        let d = distance(rgb, candidate.rgb);
        if d < min_distance {
            min_distance = d;
            closest = candidate;
        }
    }

    if min_distance > NAME_DISTANCE_LIMIT {
        if let Some(descriptor) = qualitative(rgb_to_hsl(rgb.r, rgb.g, rgb.b)) {
            return descriptor;
        }
    }
    closest.name
}

fn qualitative(hsl: Hsl) -> Option<&'static str> {
    if hsl.l < 20 {
        Some("Very Dark")
    } else if hsl.l > 80 {
        Some("Very Light")
    } else if hsl.s < 20 {
        Some("Grayish")
    } else {
        None
    }
}

fn normalize_hex(hex: &str) -> String {
    let trimmed = hex.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    format!("#{}", digits.to_ascii_uppercase())
}

fn distance(a: Rgb, b: Rgb) -> f64 {
    let dr = f64::from(a.r) - f64::from(b.r);
    let dg = f64::from(a.g) - f64::from(b.g);
    let db = f64::from(a.b) - f64::from(b.b);
    (dr * dr + dg * dg + db * db).sqrt()
}

/// `#000000` on light backgrounds, `#FFFFFF` on dark ones.
pub fn contrast_color(hex: &str) -> &'static str {
    let rgb = hex_to_rgb(hex);
    let brightness = (f64::from(rgb.r) * 299.0 + f64::from(rgb.g) * 587.0 + f64::from(rgb.b) * 114.0)
        / 1000.0;
    if brightness > 128.0 { "#000000" } else { "#FFFFFF" }
}

/// Full [`Color`] for a hex code, named by [`nearest_name`].
pub fn describe(hex: &str) -> Color {
    let rgb = hex_to_rgb(hex);
    Color {
        hex: rgb_to_hex(rgb.r, rgb.g, rgb.b),
        rgb,
        hsl: rgb_to_hsl(rgb.r, rgb.g, rgb.b),
        name: nearest_name(hex).to_string(),
    }
}

/// Colors at hues `base + i * 60`, each with saturation in `[50, 80)` and
/// lightness in `[40, 70)`. The base hue is drawn when not given.
pub fn palette(
    rng: &mut dyn RandomSource,
    size: usize,
    base_hue: Option<u16>,
) -> Result<Vec<Color>, ColorError> {
    if !(MIN_PALETTE_SIZE..=MAX_PALETTE_SIZE).contains(&size) {
        return Err(ColorError::PaletteSize {
            size,
            min: MIN_PALETTE_SIZE,
            max: MAX_PALETTE_SIZE,
        });
    }
    let base = match base_hue {
        Some(hue) => hue % 360,
        None => rng.next_index(360) as u16,
    };

    let colors = (0..size)
        .map(|i| {
            let hue = ((u32::from(base) + i as u32 * u32::from(PALETTE_HUE_STEP)) % 360) as u16;
            let saturation = 50 + rng.next_index(30) as u8;
            let lightness = 40 + rng.next_index(30) as u8;
            let rgb = hsl_to_rgb(hue, saturation, lightness);
            let hex = rgb_to_hex(rgb.r, rgb.g, rgb.b);
            Color {
                name: nearest_name(&hex).to_string(),
                hex,
                rgb,
                hsl: Hsl::new(hue, saturation, lightness),
            }
        })
        .collect();
    debug!(size, base, "generated palette");
    Ok(colors)
}

/// One color, or the base and its complement, for every non-palette mode.
pub fn generate(rng: &mut dyn RandomSource, mode: ColorMode, palette_size: usize) -> Result<Vec<Color>, ColorError> {
    let colors = match mode {
        ColorMode::Hex | ColorMode::Name => vec![describe(&random_hex(rng))],
        ColorMode::Rgb => {
            let rgb = random_rgb(rng);
            vec![describe(&rgb_to_hex(rgb.r, rgb.g, rgb.b))]
        }
        ColorMode::Hsl => {
            let hsl = random_hsl(rng);
            let rgb = hsl_to_rgb(hsl.h, hsl.s, hsl.l);
            vec![describe(&rgb_to_hex(rgb.r, rgb.g, rgb.b))]
        }
        ColorMode::Palette => palette(rng, palette_size, None)?,
        ColorMode::Complementary => {
            let base = random_hex(rng);
            let complement = complementary(&base);
            vec![describe(&base), describe(&complement)]
        }
    };
    Ok(colors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{SeededSource, SequenceSource};

    fn within_one(a: Rgb, b: Rgb) -> bool {
        let close = |x: u8, y: u8| x.abs_diff(y) <= 1;
        close(a.r, b.r) && close(a.g, b.g) && close(a.b, b.b)
    }

    #[test]
    fn hex_validation_accepts_optional_hash_and_any_case() {
        assert!(is_valid_hex("#FF5733"));
        assert!(is_valid_hex("ff5733"));
        assert!(!is_valid_hex("#FF573"));
        assert!(!is_valid_hex("#GG5733"));
        assert!(!is_valid_hex("#FF57333"));
    }

    #[test]
    fn red_converts_both_ways() {
        assert_eq!(hex_to_rgb("#FF0000"), Rgb::new(255, 0, 0));
        assert_eq!(rgb_to_hsl(255, 0, 0), Hsl::new(0, 100, 50));
        assert_eq!(hsl_to_rgb(0, 100, 50), Rgb::new(255, 0, 0));
    }

    #[test]
    fn malformed_hex_is_lenient_or_strict() {
        assert_eq!(hex_to_rgb("not a color"), Rgb::BLACK);
        assert_eq!(
            parse_hex("#12345"),
            Err(ColorError::InvalidHex("#12345".to_string()))
        );
        assert_eq!(parse_hex(" #a0B1c2 "), Ok(Rgb::new(0xA0, 0xB1, 0xC2)));
    }

    #[test]
    fn achromatic_colors_have_zero_hue() {
        assert_eq!(rgb_to_hsl(128, 128, 128), Hsl::new(0, 0, 50));
        assert_eq!(rgb_to_hsl(255, 255, 255), Hsl::new(0, 0, 100));
        assert_eq!(hsl_to_rgb(200, 0, 50), Rgb::new(128, 128, 128));
    }

    #[test]
    fn known_hues() {
        assert_eq!(rgb_to_hsl(0, 255, 0).h, 120);
        assert_eq!(rgb_to_hsl(0, 0, 255).h, 240);
        assert_eq!(rgb_to_hsl(255, 0, 255).h, 300);
        // Hue just below 360 must not round up to 360.
        assert!(rgb_to_hsl(255, 0, 1).h < 360);
    }

    #[test]
    fn hex_formatting_is_uppercase_and_padded() {
        assert_eq!(rgb_to_hex(10, 171, 255), "#0AABFF");
        assert_eq!(rgb_to_hex(0, 0, 0), "#000000");
    }

    #[test]
    fn round_trips_hold_over_random_colors() {
        let mut rng = SeededSource::new(17);
        for _ in 0..2000 {
            let hex = random_hex(&mut rng);
            let rgb = hex_to_rgb(&hex);
            assert_eq!(rgb_to_hex(rgb.r, rgb.g, rgb.b), hex);

            let hsl = rgb_to_hsl(rgb.r, rgb.g, rgb.b);
            let back = hsl_to_rgb(hsl.h, hsl.s, hsl.l);
            assert!(hsl.h < 360 && hsl.s <= 100 && hsl.l <= 100);
            // Integer HSL keeps roughly 1% of lightness precision, so
            // saturated mid-tones can drift a few units per channel.
            let close = |x: u8, y: u8| x.abs_diff(y) <= 5;
            assert!(
                close(rgb.r, back.r) && close(rgb.g, back.g) && close(rgb.b, back.b),
                "{hex}: {rgb:?} -> {hsl:?} -> {back:?}"
            );
        }
    }

    #[test]
    fn primaries_round_trip_exactly() {
        for hex in ["#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#00FFFF", "#FF00FF", "#FFFFFF", "#000000"] {
            let rgb = hex_to_rgb(hex);
            let hsl = rgb_to_hsl(rgb.r, rgb.g, rgb.b);
            assert!(within_one(hsl_to_rgb(hsl.h, hsl.s, hsl.l), rgb), "{hex}");
        }
    }

    #[test]
    fn complementary_of_red_is_cyan_and_twice_is_identity() {
        assert_eq!(complementary("#FF0000"), "#00FFFF");
        assert_eq!(complementary(&complementary("#FF0000")), "#FF0000");
        assert_eq!(complementary("#808080"), "#808080");
    }

    #[test]
    fn nearest_name_exact_and_approximate() {
        assert_eq!(nearest_name("#FF0000"), "Red");
        assert_eq!(nearest_name("#ff0000"), "Red");
        assert_eq!(nearest_name("00ff00"), "Green");
        assert_eq!(nearest_name("#00FFFF"), "Cyan");
        assert_eq!(nearest_name("#010101"), "Black");
        assert_eq!(nearest_name("#FE0101"), "Red");
    }

    #[test]
    fn distant_colors_keep_nearest_name_when_vivid() {
        // 123 away from Magenta, but saturated and mid-light.
        assert_eq!(nearest_name("#8400FC"), "Magenta");
    }

    #[test]
    fn descriptors_follow_lightness_then_saturation() {
        assert_eq!(qualitative(Hsl::new(0, 90, 10)), Some("Very Dark"));
        assert_eq!(qualitative(Hsl::new(0, 5, 90)), Some("Very Light"));
        assert_eq!(qualitative(Hsl::new(0, 5, 50)), Some("Grayish"));
        assert_eq!(qualitative(Hsl::new(0, 60, 50)), None);
    }

    #[test]
    fn contrast_picks_readable_text() {
        assert_eq!(contrast_color("#FFFFFF"), "#000000");
        assert_eq!(contrast_color("#000000"), "#FFFFFF");
        assert_eq!(contrast_color("#FFFF00"), "#000000");
        assert_eq!(contrast_color("#0000FF"), "#FFFFFF");
    }

    #[test]
    fn palette_rotates_hue_in_sixty_degree_steps() {
        let mut rng = SeededSource::new(8);
        let colors = palette(&mut rng, 5, Some(0)).unwrap();
        let hues: Vec<u16> = colors.iter().map(|c| c.hsl.h).collect();
        assert_eq!(hues, vec![0, 60, 120, 180, 240]);
        for color in &colors {
            assert!((50..80).contains(&color.hsl.s));
            assert!((40..70).contains(&color.hsl.l));
            assert_eq!(color.rgb, hex_to_rgb(&color.hex));
        }
    }

    #[test]
    fn palette_wraps_and_draws_base_hue() {
        let mut rng = SequenceSource::new(vec![0.5]);
        let colors = palette(&mut rng, 7, None).unwrap();
        let hues: Vec<u16> = colors.iter().map(|c| c.hsl.h).collect();
        assert_eq!(hues, vec![180, 240, 300, 0, 60, 120, 180]);
        assert_eq!(colors[0].hsl.s, 65);
        assert_eq!(colors[0].hsl.l, 55);
    }

    #[test]
    fn palette_size_is_bounded() {
        let mut rng = SeededSource::new(1);
        assert_eq!(
            palette(&mut rng, 1, Some(0)),
            Err(ColorError::PaletteSize {
                size: 1,
                min: 2,
                max: 12
            })
        );
        assert!(palette(&mut rng, 13, None).is_err());
        assert_eq!(palette(&mut rng, 12, None).unwrap().len(), 12);
    }

    #[test]
    fn random_hex_covers_full_range() {
        let mut rng = SequenceSource::new(vec![0.0, 0.999_999_999_9]);
        assert_eq!(random_hex(&mut rng), "#000000");
        assert_eq!(random_hex(&mut rng), "#FFFFFF");
    }

    #[test]
    fn generate_complementary_returns_pair() {
        let mut rng = SeededSource::new(30);
        let colors = generate(&mut rng, ColorMode::Complementary, 5).unwrap();
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[1].hex, complementary(&colors[0].hex));
        let single = generate(&mut rng, ColorMode::Hsl, 5).unwrap();
        assert_eq!(single.len(), 1);
        assert!(is_valid_hex(&single[0].hex));
    }

    #[test]
    fn describe_fills_every_field() {
        let color = describe("#ff7f50");
        assert_eq!(color.hex, "#FF7F50");
        assert_eq!(color.rgb, Rgb::new(255, 127, 80));
        assert_eq!(color.name, "Coral");
    }
}
