//! Fixed lexicons for the synthetic slug builder. Each table is the single
//! source of truth; nothing here is derived per call.

pub const CONSONANTS: [&str; 15] = [
    "b", "c", "d", "f", "g", "k", "l", "m", "n", "p", "r", "s", "t", "v", "z",
];

// Repeated entries skew the draw toward a/e/i/o.
pub const VOWELS: [&str; 9] = ["a", "a", "e", "e", "i", "i", "o", "o", "u"];

// Empty entries make the coda optional more often than not.
pub const CODAS: [&str; 10] = ["", "", "", "", "", "", "n", "m", "r", "x"];

pub const PREFIXES: [&str; 8] = ["get", "try", "go", "my", "pro", "on", "up", "hi"];

pub const SUFFIXES: [&str; 8] = ["ly", "fy", "io", "co", "go", "up", "hq", "ai"];

pub const NUMBERS: [&str; 18] = [
    "1", "2", "3", "4", "5", "7", "8", "9", "11", "22", "24", "42", "99", "101", "123", "247",
    "360", "365",
];

pub const WORD_BANK: [&str; 119] = [
    "cloud", "data", "tech", "sync", "fast", "smart", "link", "soft", "core", "base",
    "meta", "flux", "grid", "node", "edge", "wave", "pixel", "cyber", "logic", "delta",
    "sigma", "alpha", "beta", "gamma", "nova", "nexus", "pulse", "spark", "beam", "volt",
    "zero", "next", "snap", "dash", "rush", "bolt", "jump", "flip", "spin", "zoom",
    "push", "pull", "grab", "drop", "lift", "kick", "click", "swipe", "pure", "bold",
    "keen", "swift", "prime", "peak", "true", "safe", "bright", "clear", "clean", "fresh",
    "sharp", "super", "ultra", "mega", "rock", "star", "moon", "sand", "leaf", "pine",
    "oak", "wolf", "lake", "river", "wind", "fire", "ice", "snow", "rain", "sun",
    "fox", "bear", "hawk", "crow", "elk", "owl", "lion", "tiger", "blue", "red",
    "gray", "gold", "jade", "mint", "rust", "onyx", "amber", "coral", "ivory", "slate",
    "steel", "silver", "copper", "box", "hub", "lab", "bit", "dot", "max", "zen",
    "arc", "top", "pop", "cup", "cap", "pin", "pen", "pad", "pod",
];

// Matched case-insensitively as substrings.
pub const BLOCKLIST: [&str; 24] = [
    "shit", "fuck", "damn", "hell", "crap", "piss", "cock", "dick", "cunt", "ass",
    "fag", "nig", "sex", "xxx", "porn", "anal", "rape", "kill", "nazi", "hate",
    "dead", "die", "hack", "crack",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_ascii_lowercase() {
        let tables: [&[&str]; 7] = [
            &CONSONANTS,
            &VOWELS,
            &CODAS,
            &PREFIXES,
            &SUFFIXES,
            &WORD_BANK,
            &BLOCKLIST,
        ];
        for table in tables {
            for entry in table {
                assert!(
                    entry.bytes().all(|b| b.is_ascii_lowercase()),
                    "non-lowercase entry {:?}",
                    entry
                );
            }
        }
    }

    #[test]
    fn test_word_bank_no_duplicates() {
        use std::collections::HashSet;
        let unique: HashSet<_> = WORD_BANK.iter().collect();
        assert_eq!(unique.len(), WORD_BANK.len(), "word bank contains duplicates");
    }

    #[test]
    fn test_word_bank_clean() {
        for word in WORD_BANK {
            for blocked in BLOCKLIST {
                assert!(
                    !word.contains(blocked),
                    "word bank entry {:?} contains blocked fragment {:?}",
                    word,
                    blocked
                );
            }
        }
    }

    #[test]
    fn test_numbers_numeric() {
        for entry in NUMBERS {
            assert!(entry.bytes().all(|b| b.is_ascii_digit()));
        }
    }
}
