use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::{Error, Result};

/// Exactly what an 11-bit group can address.
pub const WORDLIST_LEN: usize = 2048;

static BUILTIN: OnceLock<Wordlist> = OnceLock::new();

/// Ordered 2048-entry word table. Arity is validated at construction and
/// never re-checked by the encoder.
pub struct Wordlist {
    words: Vec<String>,
}

impl Wordlist {
    /// The canonical BIP-39 English list, built once and shared.
    pub fn builtin() -> &'static Wordlist {
        BUILTIN.get_or_init(|| {
            let words: Vec<String> = bip39::Language::English
                .word_list()
                .iter()
                .map(|word| (*word).to_string())
                .collect();

            assert_eq!(
                words.len(),
                WORDLIST_LEN,
                "built-in wordlist must contain exactly {WORDLIST_LEN} words"
            );
            Wordlist { words }
        })
    }

    pub fn from_words(words: Vec<String>) -> Result<Self> {
        if words.len() != WORDLIST_LEN {
            return Err(Error::Configuration(format!(
                "expected exactly {WORDLIST_LEN} words, found {}",
                words.len()
            )));
        }
        Ok(Self { words })
    }

    /// One word per line; surrounding whitespace and blank lines ignored.
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!("failed to read {}: {e}", path.display()))
        })?;

        let words = data
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self::from_words(words)
    }

    /// Word at an 11-bit index. Callers produce indices by masking to 11
    /// bits, so this cannot go out of bounds.
    pub fn word(&self, index: u16) -> &str {
        &self.words[index as usize]
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_loaded() {
        assert_eq!(Wordlist::builtin().len(), WORDLIST_LEN);
    }

    #[test]
    fn test_builtin_no_duplicates() {
        use std::collections::HashSet;
        let list = Wordlist::builtin();
        let unique: HashSet<_> = (0..WORDLIST_LEN).map(|i| list.word(i as u16)).collect();
        assert_eq!(unique.len(), WORDLIST_LEN, "wordlist contains duplicates");
    }

    #[test]
    fn test_builtin_integrity() {
        let list = Wordlist::builtin();

        assert_eq!(list.word(0), "abandon", "first word should be \"abandon\"");
        assert_eq!(list.word(2047), "zoo", "last word should be \"zoo\"");

        for i in 0..WORDLIST_LEN {
            let word = list.word(i as u16);
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "word at index {} ({:?}) contains invalid characters",
                i,
                word
            );
            assert!(
                word.len() >= 3 && word.len() <= 8,
                "word at index {} ({:?}) has invalid length {}",
                i,
                word,
                word.len()
            );
        }
    }

    #[test]
    fn test_from_words_wrong_arity() {
        let short: Vec<String> = (0..WORDLIST_LEN - 1).map(|i| format!("w{i}")).collect();
        assert!(matches!(
            Wordlist::from_words(short),
            Err(Error::Configuration(_))
        ));

        let long: Vec<String> = (0..WORDLIST_LEN + 1).map(|i| format!("w{i}")).collect();
        assert!(matches!(
            Wordlist::from_words(long),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn test_from_file_roundtrip() {
        let path = std::env::temp_dir().join("kairos_wordlist_test.txt");
        let mut data = String::new();
        for i in 0..WORDLIST_LEN {
            data.push_str(&format!("w{i}\n"));
        }
        // A trailing blank line must not affect the count.
        data.push('\n');
        fs::write(&path, &data).unwrap();

        let list = Wordlist::from_file(&path).unwrap();
        assert_eq!(list.len(), WORDLIST_LEN);
        assert_eq!(list.word(0), "w0");
        assert_eq!(list.word(2047), "w2047");

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_from_file_missing() {
        let path = std::env::temp_dir().join("kairos_no_such_wordlist.txt");
        assert!(matches!(
            Wordlist::from_file(&path),
            Err(Error::Configuration(_))
        ));
    }
}
