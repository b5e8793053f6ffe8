use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::{Error, Result};

type HmacSha256 = Hmac<Sha256>;

pub const ENTROPY_LEN: usize = 32;

/// Keyed entropy block: HMAC-SHA256 of `message` under `seed`.
///
/// Pure function of its inputs; all downstream "randomness" is this byte
/// stream.
pub fn derive_entropy(seed: &str, message: &str) -> Result<[u8; ENTROPY_LEN]> {
    let mut mac = HmacSha256::new_from_slice(seed.as_bytes())
        .map_err(|e| Error::Computation(e.to_string()))?;
    mac.update(message.as_bytes());
    let digest = mac.finalize().into_bytes();

    let mut entropy = [0u8; ENTROPY_LEN];
    entropy.copy_from_slice(&digest);
    Ok(entropy)
}
