/// CLI argument parsing and one-shot command handling.
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use crate::app::{parse_entry, parse_weighted};
use crate::clipboard;
use crate::color::{self, ColorMode};
use crate::config::Config;
use crate::dice::{self, DiceNotation};
use crate::lists::{self, ListMode};
use crate::numbers::{self, NumberMode, NumberRequest};
use crate::random::RandomSource;
use crate::types::{Color, ListItem, WeightedValue};

#[derive(Parser, Debug)]
#[command(
    name = "randomizer",
    version,
    about = "Randomizer - dice, numbers, lists and colors in the terminal"
)]
pub struct Cli {
    /// Seed for reproducible results; overrides the config file.
    #[arg(long, global = true)]
    pub seed: Option<u64>,
    /// Config file to use instead of the default location.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Roll dice, e.g. `2d6+1`.
    Dice { notation: String },
    /// Generate numbers. Unset options come from the config file.
    Number {
        #[arg(value_enum)]
        kind: NumberKind,
        #[arg(long, allow_negative_numbers = true)]
        min: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        max: Option<f64>,
        #[arg(short = 'n', long)]
        count: Option<usize>,
        #[arg(short = 'd', long)]
        decimals: Option<u32>,
        /// Weighted value as `value:weight`; repeat for more.
        #[arg(long = "value", value_name = "V:W", allow_negative_numbers = true)]
        values: Vec<String>,
    },
    /// Pick from or shuffle a list. Items may be written `text=weight`.
    List {
        #[arg(value_enum)]
        mode: ListKind,
        #[arg(short = 'n', long)]
        count: Option<usize>,
        items: Vec<String>,
    },
    /// Generate or inspect colors.
    Color {
        #[arg(value_enum)]
        kind: ColorKind,
        #[arg(short = 's', long)]
        size: Option<usize>,
        #[arg(long)]
        base_hue: Option<u16>,
        #[arg(long)]
        hex: Option<String>,
    },
    /// Print the config file path, or write the defaults with `--init`.
    Config {
        #[arg(long)]
        init: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum NumberKind {
    Integer,
    Float,
    Range,
    Unique,
    Weighted,
}

impl From<NumberKind> for NumberMode {
    fn from(kind: NumberKind) -> Self {
        match kind {
            NumberKind::Integer => NumberMode::Integer,
            NumberKind::Float => NumberMode::Float,
            NumberKind::Range => NumberMode::Range,
            NumberKind::Unique => NumberMode::Unique,
            NumberKind::Weighted => NumberMode::Weighted,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ListKind {
    Pick,
    Many,
    Weighted,
    Shuffle,
}

impl From<ListKind> for ListMode {
    fn from(kind: ListKind) -> Self {
        match kind {
            ListKind::Pick => ListMode::Picker,
            ListKind::Many => ListMode::Multiple,
            ListKind::Weighted => ListMode::Weighted,
            ListKind::Shuffle => ListMode::Shuffle,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorKind {
    Hex,
    Rgb,
    Hsl,
    Name,
    Complementary,
    Palette,
    Inspect,
}

/// Execute a CLI command, printing to stdout.
pub fn run(
    command: Command,
    config: &Config,
    config_path: &Path,
    rng: &mut dyn RandomSource,
) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(command, config, config_path, rng, &mut out)
}

pub fn execute(
    command: Command,
    config: &Config,
    config_path: &Path,
    rng: &mut dyn RandomSource,
    out: &mut dyn Write,
) -> Result<()> {
    debug!(?command, "running command");
    match command {
        Command::Dice { notation } => handle_dice(&notation, rng, out),
        Command::Number {
            kind,
            min,
            max,
            count,
            decimals,
            values,
        } => {
            let defaults = &config.numbers;
            let weighted = if values.is_empty() {
                defaults.weighted.clone()
            } else {
                values
                    .iter()
                    .map(|value| parse_weighted(value).map_err(|err| anyhow!(err)))
                    .collect::<Result<Vec<WeightedValue>>>()?
            };
            let request = NumberRequest {
                mode: kind.into(),
                min: min.unwrap_or(defaults.min),
                max: max.unwrap_or(defaults.max),
                count: count.unwrap_or(defaults.count),
                decimals: decimals.unwrap_or(defaults.decimals),
                weighted: &weighted,
            };
            handle_number(&request, rng, out)
        }
        Command::List { mode, count, items } => {
            let labels = if items.is_empty() {
                config.lists.items.clone()
            } else {
                items
            };
            handle_list(
                mode.into(),
                &labels,
                count.unwrap_or(config.lists.count),
                rng,
                out,
            )
        }
        Command::Color {
            kind,
            size,
            base_hue,
            hex,
        } => handle_color(
            kind,
            size.unwrap_or(config.colors.palette_size),
            base_hue,
            hex.as_deref(),
            rng,
            out,
        ),
        Command::Config { init } => handle_config(init, config_path, out),
    }
}

fn handle_dice(notation: &str, rng: &mut dyn RandomSource, out: &mut dyn Write) -> Result<()> {
    let notation = DiceNotation::parse(notation)?;
    let roll = dice::roll_direct(rng, &notation);
    let faces = roll
        .faces
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(out, "{}: [{faces}] = {}", roll.notation, roll.total)?;
    Ok(())
}

fn handle_number(
    request: &NumberRequest<'_>,
    rng: &mut dyn RandomSource,
    out: &mut dyn Write,
) -> Result<()> {
    if request.count > numbers::MAX_COUNT {
        bail!("Count must be at most {}", numbers::MAX_COUNT);
    }
    let values = numbers::generate(rng, request)?;
    writeln!(out, "{}", clipboard::join_numbers(&values))?;
    if let Some(summary) = numbers::summarize(&values).filter(|summary| summary.count > 1) {
        writeln!(out, "{summary}")?;
    }
    Ok(())
}

fn handle_list(
    mode: ListMode,
    labels: &[String],
    count: usize,
    rng: &mut dyn RandomSource,
    out: &mut dyn Write,
) -> Result<()> {
    let mut items = Vec::with_capacity(labels.len());
    for (index, label) in labels.iter().enumerate() {
        let (text, weight) = parse_entry(label).map_err(|err| anyhow!(err))?;
        let text = text.trim();
        if text.is_empty() {
            continue;
        }
        let mut item = ListItem::new((index + 1).to_string(), text);
        item.weight = weight;
        items.push(item);
    }
    let picked = lists::generate(rng, mode, &items, count)?;
    let text = match mode {
        ListMode::Shuffle => clipboard::join_lines(&picked),
        _ => clipboard::join_labels(&picked),
    };
    writeln!(out, "{text}")?;
    Ok(())
}

fn handle_color(
    kind: ColorKind,
    size: usize,
    base_hue: Option<u16>,
    hex: Option<&str>,
    rng: &mut dyn RandomSource,
    out: &mut dyn Write,
) -> Result<()> {
    let given = match hex {
        Some(hex) => {
            let rgb = color::parse_hex(hex)?;
            Some(color::rgb_to_hex(rgb.r, rgb.g, rgb.b))
        }
        None => None,
    };
    match kind {
        ColorKind::Hex => {
            let colors = color::generate(rng, ColorMode::Hex, size)?;
            for color in &colors {
                writeln!(out, "{}", color.hex)?;
            }
        }
        ColorKind::Rgb => {
            let colors = color::generate(rng, ColorMode::Rgb, size)?;
            for color in &colors {
                writeln!(out, "{}", color.rgb)?;
            }
        }
        ColorKind::Hsl => {
            let hsl = color::random_hsl(rng);
            writeln!(out, "{hsl}")?;
        }
        ColorKind::Name => {
            let colors = color::generate(rng, ColorMode::Name, size)?;
            for color in &colors {
                writeln!(out, "{} {}", color.hex, color.name)?;
            }
        }
        ColorKind::Complementary => {
            let base = match given {
                Some(hex) => hex,
                None => color::random_hex(rng),
            };
            let complement = color::complementary(&base);
            writeln!(out, "{}", describe_line(&color::describe(&base)))?;
            writeln!(out, "{}", describe_line(&color::describe(&complement)))?;
        }
        ColorKind::Palette => {
            for color in color::palette(rng, size, base_hue)? {
                writeln!(out, "{}", describe_line(&color))?;
            }
        }
        ColorKind::Inspect => {
            let hex = given.context("inspect needs --hex, e.g. --hex '#FF5733'")?;
            let described = color::describe(&hex);
            writeln!(out, "{}", describe_line(&described))?;
            writeln!(out, "contrast text: {}", color::contrast_color(&hex))?;
        }
    }
    Ok(())
}

fn describe_line(color: &Color) -> String {
    format!("{}  {}  {}  {}", color.hex, color.rgb, color.hsl, color.name)
}

fn handle_config(init: bool, path: &Path, out: &mut dyn Write) -> Result<()> {
    if init {
        if Config::init_at(path)? {
            writeln!(out, "Wrote default config to {}", path.display())?;
        } else {
            writeln!(out, "Config already exists at {}", path.display())?;
        }
    } else {
        writeln!(out, "{}", path.display())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{SeededSource, SequenceSource};
    use tempfile::TempDir;

    fn output(args: &[&str], rng: &mut dyn RandomSource) -> Result<String> {
        let cli = Cli::try_parse_from(args)?;
        let command = cli.command.context("missing command")?;
        let mut out = Vec::new();
        execute(
            command,
            &Config::default(),
            Path::new("config.toml"),
            rng,
            &mut out,
        )?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn global_flags_parse_anywhere() {
        let cli = Cli::try_parse_from(["randomizer", "dice", "2d6", "--seed", "7"]).unwrap();
        assert_eq!(cli.seed, Some(7));
        let cli = Cli::try_parse_from(["randomizer", "--config", "x.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        assert!(cli.command.is_none());
    }

    #[test]
    fn dice_prints_faces_and_total() {
        let mut rng = SequenceSource::new(vec![0.0, 0.99]);
        let text = output(&["randomizer", "dice", "2d6+1"], &mut rng).unwrap();
        assert_eq!(text, "2d6+1: [1, 6] = 8\n");
        assert!(output(&["randomizer", "dice", "banana"], &mut rng).is_err());
    }

    #[test]
    fn numbers_accept_negative_bounds() {
        let mut rng = SequenceSource::new(vec![0.0, 0.99]);
        let text = output(
            &["randomizer", "number", "integer", "--min", "-5", "--max", "5", "-n", "2"],
            &mut rng,
        )
        .unwrap();
        let first = text.lines().next().unwrap();
        assert_eq!(first, "-5, 5");
        assert!(text.contains("Total: 0"));
    }

    #[test]
    fn unique_rejects_impossible_counts() {
        let mut rng = SeededSource::new(1);
        let err = output(
            &["randomizer", "number", "unique", "--min", "1", "--max", "3", "-n", "5"],
            &mut rng,
        )
        .unwrap_err();
        assert!(err.to_string().contains('5'));
    }

    #[test]
    fn weighted_values_come_from_flags() {
        let mut rng = SequenceSource::new(vec![0.9]);
        let text = output(
            &["randomizer", "number", "weighted", "--value", "7:1", "--value", "9:9"],
            &mut rng,
        )
        .unwrap();
        assert_eq!(text, "9\n");
    }

    #[test]
    fn lists_pick_and_shuffle() {
        let mut rng = SequenceSource::new(vec![0.5]);
        let text = output(&["randomizer", "list", "pick", "a", "b", "c"], &mut rng).unwrap();
        assert_eq!(text, "b\n");

        let mut rng = SeededSource::new(5);
        let text = output(&["randomizer", "list", "shuffle", "a", "b", "c"], &mut rng).unwrap();
        let mut lines: Vec<_> = text.lines().collect();
        lines.sort();
        assert_eq!(lines, vec!["a", "b", "c"]);

        let err = output(&["randomizer", "list", "many", "-n", "4", "a", "b"], &mut rng);
        assert!(err.is_err());
    }

    #[test]
    fn colors_inspect_and_palette() {
        let mut rng = SeededSource::new(9);
        let text = output(&["randomizer", "color", "inspect", "--hex", "#ff0000"], &mut rng).unwrap();
        assert!(text.starts_with("#FF0000  rgb(255, 0, 0)  hsl(0, 100%, 50%)  Red"));
        assert!(text.contains("contrast text: #FFFFFF"));

        let text = output(
            &["randomizer", "color", "palette", "-s", "3", "--base-hue", "0"],
            &mut rng,
        )
        .unwrap();
        assert_eq!(text.lines().count(), 3);

        assert!(output(&["randomizer", "color", "inspect"], &mut rng).is_err());
        assert!(output(&["randomizer", "color", "inspect", "--hex", "#12"], &mut rng).is_err());
    }

    #[test]
    fn config_init_writes_once() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let mut rng = SeededSource::new(1);
        let mut out = Vec::new();
        execute(Command::Config { init: true }, &Config::default(), &path, &mut rng, &mut out)
            .unwrap();
        execute(Command::Config { init: true }, &Config::default(), &path, &mut rng, &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Wrote default config"));
        assert!(text.contains("already exists"));
        assert!(path.exists());
    }
}
