use crate::entropy::ENTROPY_LEN;
use crate::lexicon::{BLOCKLIST, CODAS, CONSONANTS, NUMBERS, PREFIXES, SUFFIXES, VOWELS, WORD_BANK};

/// Inclusive length window the pipeline aims for. Cleanup runs after
/// truncation and can only shorten, so the upper bound holds; the lower
/// bound is best-effort.
const MIN_LEN: usize = 10;
const MAX_LEN: usize = 18;

// Gating moduli, named for the probability they encode.
const PREFIX_ONE_IN: u8 = 4; // 25% leading prefix
const SHORTEN_ONE_IN: u8 = 5; // 20% word contraction
const MID_MOD: u8 = 7;
const MID_BAND: u8 = 2; // 2-in-7 mid filler, split evenly syllable/hyphen
const ENDING_BANDS: u8 = 8; // 3/8 syllable, 2/8 number, 2/8 double syllable, 1/8 suffix

/// Picks drawn for a second word before a duplicate is accepted.
const WORD_DRAWS: usize = 5;

// Checkpoints give the pad and repair passes draw material decoupled from
// whatever the layers consumed.
const PAD_CHECKPOINT: usize = 20;
const REPAIR_CHECKPOINT: usize = 25;

/// Repair passes before a residual blocklist match is accepted as-is.
const MAX_REPAIR_PASSES: usize = 10;

fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u')
}

/// Draw position over the fixed entropy block. Value-scoped: one cursor per
/// build, never shared. Cycling the 32-byte window is intentional —
/// determinism matters here, uniformity does not.
struct Cursor {
    offset: usize,
}

impl Cursor {
    fn new() -> Self {
        Self { offset: 0 }
    }

    fn seek(&mut self, checkpoint: usize) {
        self.offset = checkpoint;
    }

    /// Raw gating byte; consumes one position.
    fn gate(&mut self, entropy: &[u8; ENTROPY_LEN]) -> u8 {
        let byte = entropy[self.offset % ENTROPY_LEN];
        self.offset += 1;
        byte
    }

    fn pick<'a>(&mut self, entropy: &[u8; ENTROPY_LEN], choices: &'a [&'a str]) -> &'a str {
        choices[self.gate(entropy) as usize % choices.len()]
    }

    /// Consonant-vowel-coda cluster like "ba", "kem", "tor". Three draws.
    fn syllable(&mut self, entropy: &[u8; ENTROPY_LEN]) -> String {
        let mut syl = String::with_capacity(3);
        syl.push_str(self.pick(entropy, &CONSONANTS));
        syl.push_str(self.pick(entropy, &VOWELS));
        syl.push_str(self.pick(entropy, &CODAS));
        syl
    }
}

/// Assembles the pronounceable slug from the entropy block.
///
/// Five layers, then pad, blocklist repair, truncate, cleanup — in that
/// order; the ordering is what bounds the final length at MAX_LEN. Every
/// layer consumes its gating draw even when skipped so that cursor
/// positions stay aligned across inputs.
pub fn build_slug(entropy: &[u8; ENTROPY_LEN]) -> String {
    let mut cursor = Cursor::new();
    let mut slug = String::new();

    // Optional leading prefix.
    if cursor.gate(entropy) % PREFIX_ONE_IN == 0 {
        slug.push_str(cursor.pick(entropy, &PREFIXES));
    }

    let mut first = cursor.pick(entropy, &WORD_BANK).to_string();
    if cursor.gate(entropy) % SHORTEN_ONE_IN == 0 {
        first = shorten(&first);
    }
    slug.push_str(&first);

    // Mid filler: one gate byte selects both presence and flavor.
    let mid = cursor.gate(entropy);
    if mid % MID_MOD < MID_BAND {
        if mid % 2 == 0 {
            let syl = cursor.syllable(entropy);
            slug.push_str(&syl);
        } else {
            slug.push('-');
        }
    }

    // Second word: redraw on collision with the (possibly contracted)
    // first word, up to the draw limit.
    let mut second = cursor.pick(entropy, &WORD_BANK);
    for _ in 1..WORD_DRAWS {
        if second != first {
            break;
        }
        second = cursor.pick(entropy, &WORD_BANK);
    }
    let mut second = second.to_string();
    if cursor.gate(entropy) % SHORTEN_ONE_IN == 0 {
        second = shorten(&second);
    }
    slug.push_str(&second);

    // Ending.
    match cursor.gate(entropy) % ENDING_BANDS {
        0..=2 => {
            let syl = cursor.syllable(entropy);
            slug.push_str(&syl);
        }
        3..=4 => slug.push_str(cursor.pick(entropy, &NUMBERS)),
        5..=6 => {
            let a = cursor.syllable(entropy);
            let b = cursor.syllable(entropy);
            slug.push_str(&a);
            slug.push_str(&b);
        }
        _ => slug.push_str(cursor.pick(entropy, &SUFFIXES)),
    }

    pad(&mut slug, &mut cursor, entropy);
    repair_blocked(&mut slug, &mut cursor, entropy);
    truncate(&mut slug);
    collapse_runs(&slug)
}

/// Startup-style contraction: "tiger" -> "tigr", "purple" -> "purpl",
/// "delta" -> "delt". Words shorter than four characters pass through.
fn shorten(word: &str) -> String {
    let bytes = word.as_bytes();
    let n = bytes.len();
    if n < 4 {
        return word.to_string();
    }
    if matches!(bytes[n - 2], b'a' | b'e' | b'o') && bytes[n - 1] == b'r' {
        return format!("{}r", &word[..n - 2]);
    }
    if word.ends_with("le") && n > 3 {
        return word[..n - 1].to_string();
    }
    if is_vowel(bytes[n - 1]) && n > 4 {
        return word[..n - 1].to_string();
    }
    word.to_string()
}

/// Syllable padding up to the minimum length. Seeks a fixed checkpoint so
/// the pad stream does not replay the layers' exact positions. Each
/// syllable adds at least two characters, so this terminates.
fn pad(slug: &mut String, cursor: &mut Cursor, entropy: &[u8; ENTROPY_LEN]) {
    if slug.len() >= MIN_LEN {
        return;
    }
    cursor.seek(PAD_CHECKPOINT);
    while slug.len() < MIN_LEN {
        let syl = cursor.syllable(entropy);
        slug.push_str(&syl);
    }
}

/// Bounded best-effort blocklist repair: splice a syllable into the middle
/// of the match and re-scan. A match that survives every pass is kept; this
/// is not a hard filter.
fn repair_blocked(slug: &mut String, cursor: &mut Cursor, entropy: &[u8; ENTROPY_LEN]) {
    for pass in 0..MAX_REPAIR_PASSES {
        let Some((start, len)) = first_blocked(slug) else {
            return;
        };
        cursor.seek(REPAIR_CHECKPOINT + pass);
        let syl = cursor.syllable(entropy);
        slug.insert_str(start + len / 2, &syl);
    }
}

/// First blocklist entry (in table order) occurring in `s`, with the byte
/// offset of its leftmost occurrence.
fn first_blocked(s: &str) -> Option<(usize, usize)> {
    let lower = s.to_ascii_lowercase();
    BLOCKLIST
        .iter()
        .find_map(|blocked| lower.find(blocked).map(|at| (at, blocked.len())))
}

#[cfg(test)]
fn contains_blocked(s: &str) -> bool {
    first_blocked(s).is_some()
}

/// Cuts an overlong slug at the last vowel inside the target window,
/// falling back to a hard cut at the maximum.
fn truncate(slug: &mut String) {
    if slug.len() <= MAX_LEN {
        return;
    }
    let bytes = slug.as_bytes();
    for end in (MIN_LEN..=MAX_LEN).rev() {
        if is_vowel(bytes[end - 1]) {
            slug.truncate(end);
            return;
        }
    }
    slug.truncate(MAX_LEN);
}

/// Collapses any run of three or more identical characters down to two.
/// Only ever shortens; length bounds established before this hold.
fn collapse_runs(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    for (i, &b) in bytes.iter().enumerate() {
        if i < 2 || !(b == bytes[i - 1] && b == bytes[i - 2]) {
            out.push(b as char);
        }
    }
    out
}
