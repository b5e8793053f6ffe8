use crate::entropy::derive_entropy;
use crate::error::{Error, Result};
use crate::mnemonic;
use crate::synth;
use crate::wordlist::Wordlist;

/// Output style for a derived slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Bip39,
    Obfuscated,
}

/// A slug and its companion hex digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
    pub slug: String,
    pub digest: String,
}

/// Longest companion digest in obfuscated mode, in bytes.
const MAX_COMPANION_BYTES: usize = 16;

const MAX_WORDS: usize = 24;

/// Derives the slug and companion digest for one (seed, period) pair.
///
/// `length` counts words in Bip39 mode (clamped to 24) and steers the
/// digest width in both modes; the synthetic slug's own length comes from
/// the builder's pipeline, not from `length`.
pub fn derive(
    seed: &str,
    period: &str,
    length: usize,
    mode: Mode,
    wordlist: &Wordlist,
) -> Result<Derivation> {
    if length == 0 {
        return Err(Error::InvalidArgument("length must be at least 1".into()));
    }

    let entropy = derive_entropy(seed, &format!("{seed}:{period}"))?;

    match mode {
        Mode::Obfuscated => {
            let slug = synth::build_slug(&entropy);
            // The digest comes from a separately keyed stream so it does
            // not reveal bytes the visible slug was drawn from.
            let companion = derive_entropy(seed, &format!("{seed}:skid:{period}"))?;
            let digest_len = length.div_ceil(2).min(MAX_COMPANION_BYTES);
            Ok(Derivation {
                slug,
                digest: hex::encode(&companion[..digest_len]),
            })
        }
        Mode::Bip39 => {
            let words = mnemonic::entropy_to_words(&entropy, wordlist);
            let word_count = length.min(MAX_WORDS);
            let slug = words[..word_count].concat();
            // 24 words would ask for 33 digest bytes; the block holds 32.
            let digest_len = (word_count * 11).div_ceil(8).min(entropy.len());
            Ok(Derivation {
                slug,
                digest: hex::encode(&entropy[..digest_len]),
            })
        }
    }
}
