use std::io::{self, Write};

use anyhow::{Context, Result};
use console::{Style, Term};
use rpassword::read_password;
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroizing;

use kairos::PeriodSlug;

pub const MAX_SEED_BYTES: usize = 1024 * 1024;

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
    pub quiet: bool,
}

pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stdout)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

fn tree_glyphs(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support { ("├─", "└─") } else { ("|-", "`-") }
}

fn validate_control_characters(s: &str, input_name: &str) -> Result<String> {
    let control_chars: Vec<(usize, char)> = s
        .chars()
        .enumerate()
        .filter(|(_, c)| c.is_control())
        .collect();

    if !control_chars.is_empty() {
        let term = Term::stderr();

        let warning_msg = format!(
            "WARNING: {} contains {} control character(s) at position(s): {}",
            input_name,
            control_chars.len(),
            control_chars
                .iter()
                .map(|(pos, _)| pos.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );

        term.write_line(&warning_msg)?;
        term.write_str("Continue anyway? [y/N]: ")?;
        term.flush()?;

        let mut response = String::new();
        io::stdin().read_line(&mut response)?;
        let response = response.trim().to_lowercase();

        term.clear_last_lines(2)?;

        if response != "y" && response != "yes" {
            eprintln!("Aborted.");
            std::process::exit(1);
        }
    }

    Ok(s.to_string())
}

fn normalize_and_validate(s: &str, input_name: &str) -> Result<String> {
    let trimmed = s.trim();
    let normalized: String = trimmed.nfc().collect();
    validate_control_characters(&normalized, input_name)
}

/// Reads the seed without echo. Trimmed and NFC-normalized so the same
/// secret typed on different platforms derives the same slugs; the seed
/// never passes through argv or the environment.
pub fn prompt_seed() -> Result<Zeroizing<String>> {
    print!("Seed: ");
    io::stdout().flush()?;

    let seed = read_password().context("Failed to read seed")?;

    if seed.is_empty() {
        anyhow::bail!("Seed cannot be empty");
    }

    let normalized = normalize_and_validate(&seed, "Seed")?;

    if normalized.len() > MAX_SEED_BYTES {
        anyhow::bail!(
            "Seed too long ({} bytes, maximum is {})",
            normalized.len(),
            MAX_SEED_BYTES
        );
    }

    Ok(Zeroizing::new(normalized))
}

pub fn display_slugs(mode_label: &str, entries: &[PeriodSlug], options: &DisplayOptions) {
    if options.quiet {
        for entry in entries {
            println!("{}", entry.slug);
        }
        return;
    }

    let (mid, last) = tree_glyphs(options.unicode_support);

    let period_style = if options.color_support {
        Style::new().cyan()
    } else {
        Style::new()
    };
    let slug_style = if options.color_support {
        Style::new().green().bold()
    } else {
        Style::new()
    };
    let digest_style = if options.color_support {
        Style::new().dim()
    } else {
        Style::new()
    };

    println!("Mode: {mode_label}");
    for (i, entry) in entries.iter().enumerate() {
        let glyph = if i + 1 == entries.len() { last } else { mid };
        println!(
            "  {} {}  {}  {}",
            glyph,
            period_style.apply_to(&entry.period),
            slug_style.apply_to(&entry.slug),
            digest_style.apply_to(&entry.digest),
        );
    }
}
