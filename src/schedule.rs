use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::derive::{Derivation, Mode, derive};
use crate::error::{Error, Result};
use crate::wordlist::Wordlist;

/// Period granularity for window expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    Second,
    Minute,
    Hour,
    Day,
    Week,
}

impl Interval {
    pub fn step(self) -> Duration {
        match self {
            Interval::Second => Duration::seconds(1),
            Interval::Minute => Duration::minutes(1),
            Interval::Hour => Duration::hours(1),
            Interval::Day => Duration::days(1),
            Interval::Week => Duration::weeks(1),
        }
    }

    /// Label format at this granularity; the label is the period fed into
    /// derivation, so it must stay stable across releases.
    pub fn label_format(self) -> &'static str {
        match self {
            Interval::Second => "%Y-%m-%dT%H:%M:%S",
            Interval::Minute => "%Y-%m-%dT%H:%M",
            Interval::Hour => "%Y-%m-%dT%H",
            Interval::Day => "%Y-%m-%d",
            Interval::Week => "%G-W%V",
        }
    }
}

impl FromStr for Interval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "s" | "second" | "seconds" => Ok(Interval::Second),
            "m" | "minute" | "minutes" => Ok(Interval::Minute),
            "h" | "hour" | "hours" => Ok(Interval::Hour),
            "" | "d" | "day" | "days" => Ok(Interval::Day),
            "w" | "week" | "weeks" => Ok(Interval::Week),
            other => Err(Error::InvalidArgument(format!("unknown interval: {other}"))),
        }
    }
}

/// One window entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodSlug {
    pub period: String,
    pub slug: String,
    pub digest: String,
}

const ANCHOR_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Accepts RFC 3339 or progressively truncated forms down to a bare date:
/// `2026-02-03T15:04:05`, `...T15:04`, `...T15`, `2026-02-03`.
pub fn parse_anchor(input: &str) -> Result<NaiveDateTime> {
    if let Ok(at) = DateTime::parse_from_rfc3339(input) {
        return Ok(at.naive_utc());
    }
    for format in ANCHOR_DATETIME_FORMATS {
        if let Ok(at) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(at);
        }
    }
    // Bare-hour form: chrono needs minutes to build a time of day.
    if let Ok(at) = NaiveDateTime::parse_from_str(&format!("{input}:00"), "%Y-%m-%dT%H:%M") {
        return Ok(at);
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    Err(Error::InvalidArgument(format!(
        "unrecognized anchor time: {input}"
    )))
}

/// Expands a window of `window` periods centered on `anchor` and derives
/// each one independently.
pub fn generate(
    seed: &str,
    anchor: &str,
    length: usize,
    window: usize,
    interval: Interval,
    mode: Mode,
    wordlist: &Wordlist,
) -> Result<Vec<PeriodSlug>> {
    if window == 0 {
        return Err(Error::InvalidArgument("window must be at least 1".into()));
    }
    let anchor = parse_anchor(anchor)?;
    let start = -(window as i64 / 2);

    let mut slugs = Vec::with_capacity(window);
    for i in 0..window {
        let offset = (start + i as i64) as i32;
        let at = anchor + interval.step() * offset;
        let period = at.format(interval.label_format()).to_string();
        let Derivation { slug, digest } = derive(seed, &period, length, mode, wordlist)?;
        slugs.push(PeriodSlug {
            period,
            slug,
            digest,
        });
    }
    Ok(slugs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_anchor_accepts() {
        let valid = [
            "2026-02-03",
            "2026-02-03T15",
            "2026-02-03T15:04",
            "2026-02-03T15:04:05",
            "2026-02-03T15:04:05Z",
        ];
        for input in valid {
            assert!(parse_anchor(input).is_ok(), "parse_anchor({input:?})");
        }
    }

    #[test]
    fn test_parse_anchor_rejects() {
        for input in ["invalid", "02-03-2026", ""] {
            assert!(
                matches!(parse_anchor(input), Err(Error::InvalidArgument(_))),
                "parse_anchor({input:?}) should fail"
            );
        }
    }

    #[test]
    fn test_parse_anchor_bare_forms() {
        let date = parse_anchor("2026-02-03").unwrap();
        assert_eq!(date.format("%Y-%m-%dT%H:%M:%S").to_string(), "2026-02-03T00:00:00");

        let hour = parse_anchor("2026-02-03T15").unwrap();
        assert_eq!(hour.format("%Y-%m-%dT%H:%M:%S").to_string(), "2026-02-03T15:00:00");
    }

    #[test]
    fn test_interval_from_str() {
        let cases = [
            ("s", Interval::Second),
            ("second", Interval::Second),
            ("seconds", Interval::Second),
            ("m", Interval::Minute),
            ("h", Interval::Hour),
            ("HOURS", Interval::Hour),
            ("", Interval::Day),
            ("d", Interval::Day),
            ("day", Interval::Day),
            ("w", Interval::Week),
            ("weeks", Interval::Week),
        ];
        for (input, want) in cases {
            assert_eq!(input.parse::<Interval>().unwrap(), want, "{input:?}");
        }
        assert!(matches!(
            "invalid".parse::<Interval>(),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_generate_centered_window() {
        let slugs = generate(
            "seedphrase",
            "2026-02-03",
            16,
            3,
            Interval::Day,
            Mode::Obfuscated,
            Wordlist::builtin(),
        )
        .unwrap();

        assert_eq!(slugs.len(), 3);
        assert_eq!(slugs[0].period, "2026-02-02");
        assert_eq!(slugs[1].period, "2026-02-03");
        assert_eq!(slugs[2].period, "2026-02-04");
        assert_eq!(slugs[1].slug, "trybeambold8");
        assert_eq!(slugs[2].slug, "brightbeamvivar");
    }

    #[test]
    fn test_generate_single_window_at_anchor() {
        let slugs = generate(
            "seedphrase",
            "2026-02-03T12:30:45",
            16,
            1,
            Interval::Day,
            Mode::Obfuscated,
            Wordlist::builtin(),
        )
        .unwrap();
        assert_eq!(slugs.len(), 1);
        assert_eq!(slugs[0].period, "2026-02-03");
        assert_eq!(slugs[0].slug, "trybeambold8");
    }

    #[test]
    fn test_generate_hour_labels() {
        let slugs = generate(
            "seed",
            "2026-02-03T15:04:05",
            16,
            3,
            Interval::Hour,
            Mode::Obfuscated,
            Wordlist::builtin(),
        )
        .unwrap();
        assert_eq!(slugs[0].period, "2026-02-03T14");
        assert_eq!(slugs[1].period, "2026-02-03T15");
        assert_eq!(slugs[2].period, "2026-02-03T16");
    }

    #[test]
    fn test_generate_week_labels_iso() {
        let slugs = generate(
            "seed",
            "2026-02-03",
            16,
            2,
            Interval::Week,
            Mode::Obfuscated,
            Wordlist::builtin(),
        )
        .unwrap();
        // Window of two starts one step before the anchor.
        assert_eq!(slugs[0].period, "2026-W05");
        assert_eq!(slugs[1].period, "2026-W06");
    }

    #[test]
    fn test_generate_zero_window_rejected() {
        assert!(matches!(
            generate(
                "seed",
                "2026-02-03",
                16,
                0,
                Interval::Day,
                Mode::Obfuscated,
                Wordlist::builtin(),
            ),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_generate_bad_anchor_rejected() {
        assert!(matches!(
            generate(
                "seed",
                "not-a-time",
                16,
                1,
                Interval::Day,
                Mode::Obfuscated,
                Wordlist::builtin(),
            ),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_second_and_minute_labels() {
        let seconds = generate(
            "seed",
            "2026-02-03T15:04:05",
            16,
            1,
            Interval::Second,
            Mode::Obfuscated,
            Wordlist::builtin(),
        )
        .unwrap();
        assert_eq!(seconds[0].period, "2026-02-03T15:04:05");

        let minutes = generate(
            "seed",
            "2026-02-03T15:04:05",
            16,
            1,
            Interval::Minute,
            Mode::Obfuscated,
            Wordlist::builtin(),
        )
        .unwrap();
        assert_eq!(minutes[0].period, "2026-02-03T15:04");
    }
}
