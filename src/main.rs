mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use kairos::{Interval, Mode, PeriodSlug, Wordlist, derive, generate};

#[derive(Parser)]
#[command(
    name = "kairos",
    version,
    about = "Deterministic rolling slugs from a secret seed and time period"
)]
struct Cli {
    /// Output style
    #[arg(short, long, value_enum, default_value = "obfuscated")]
    mode: CliMode,

    /// Words (bip39) or digest-width steering (obfuscated)
    #[arg(short, long, default_value_t = 16)]
    length: usize,

    /// Explicit period label; bypasses anchor and window handling
    #[arg(short, long, conflicts_with_all = ["anchor", "window"])]
    period: Option<String>,

    /// Center of the time window, e.g. 2026-02-03 or 2026-02-03T15:04.
    /// Defaults to the current UTC time
    #[arg(short, long)]
    anchor: Option<String>,

    /// Period granularity
    #[arg(short, long, value_enum, default_value = "day")]
    interval: CliInterval,

    /// Number of periods centered on the anchor
    #[arg(short, long, default_value_t = 1)]
    window: usize,

    /// Custom 2048-entry wordlist file, one word per line
    #[arg(long)]
    wordlist: Option<PathBuf>,

    /// Print slugs only
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
enum CliMode {
    Bip39,
    Obfuscated,
}

impl From<CliMode> for Mode {
    fn from(mode: CliMode) -> Self {
        match mode {
            CliMode::Bip39 => Mode::Bip39,
            CliMode::Obfuscated => Mode::Obfuscated,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
enum CliInterval {
    #[value(alias = "s")]
    #[value(alias = "seconds")]
    Second,
    #[value(alias = "m")]
    #[value(alias = "minutes")]
    Minute,
    #[value(alias = "h")]
    #[value(alias = "hours")]
    Hour,
    #[value(alias = "d")]
    #[value(alias = "days")]
    Day,
    #[value(alias = "w")]
    #[value(alias = "weeks")]
    Week,
}

impl From<CliInterval> for Interval {
    fn from(interval: CliInterval) -> Self {
        match interval {
            CliInterval::Second => Interval::Second,
            CliInterval::Minute => Interval::Minute,
            CliInterval::Hour => Interval::Hour,
            CliInterval::Day => Interval::Day,
            CliInterval::Week => Interval::Week,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let options = ui::DisplayOptions {
        unicode_support: ui::detect_unicode_support(),
        color_support: ui::detect_color_support(),
        quiet: cli.quiet,
    };

    let custom_wordlist = cli
        .wordlist
        .as_deref()
        .map(Wordlist::from_file)
        .transpose()
        .context("Failed to load wordlist")?;
    let wordlist = match &custom_wordlist {
        Some(list) => list,
        None => Wordlist::builtin(),
    };

    let seed = ui::prompt_seed()?;
    let mode = Mode::from(cli.mode);

    let entries: Vec<PeriodSlug> = match &cli.period {
        Some(period) => {
            let derived = derive(&seed, period, cli.length, mode, wordlist)?;
            vec![PeriodSlug {
                period: period.clone(),
                slug: derived.slug,
                digest: derived.digest,
            }]
        }
        None => {
            let anchor = match &cli.anchor {
                Some(anchor) => anchor.clone(),
                None => chrono::Utc::now()
                    .naive_utc()
                    .format("%Y-%m-%dT%H:%M:%S")
                    .to_string(),
            };
            generate(
                &seed,
                &anchor,
                cli.length,
                cli.window,
                cli.interval.into(),
                mode,
                wordlist,
            )?
        }
    };

    let mode_label = match mode {
        Mode::Bip39 => "bip39",
        Mode::Obfuscated => "obfuscated",
    };
    ui::display_slugs(mode_label, &entries, &options);

    Ok(())
}
