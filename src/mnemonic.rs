use sha2::{Digest, Sha256};

use crate::entropy::ENTROPY_LEN;
use crate::wordlist::Wordlist;

/// 256 entropy bits plus 8 checksum bits, 11 bits per word.
pub const WORD_COUNT: usize = 24;

const GROUP_BITS: usize = 11;

/// Maps an entropy block onto 24 wordlist words.
///
/// Bit layout: the entropy bytes MSB-first, then the most significant byte
/// of SHA-256(entropy); consecutive big-endian 11-bit groups index the
/// list, order preserved.
pub fn entropy_to_words<'a>(entropy: &[u8; ENTROPY_LEN], wordlist: &'a Wordlist) -> Vec<&'a str> {
    let checksum = Sha256::digest(entropy);

    let mut bits = Vec::with_capacity(ENTROPY_LEN * 8 + 8);
    for byte in entropy.iter().chain(std::iter::once(&checksum[0])) {
        for shift in (0..8).rev() {
            bits.push((byte >> shift) & 1);
        }
    }

    (0..WORD_COUNT)
        .map(|group| {
            let index = bits[group * GROUP_BITS..(group + 1) * GROUP_BITS]
                .iter()
                .fold(0u16, |acc, bit| (acc << 1) | u16::from(*bit));
            wordlist.word(index)
        })
        .collect()
}
