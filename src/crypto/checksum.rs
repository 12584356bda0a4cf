//! Double-SHA-256 payload checksum.

use sha2::{Digest, Sha256};

/// Number of checksum bytes appended to a payload.
pub const CHECKSUM_LEN: usize = 4;

/// Computes the 4-byte integrity tag for `payload`:
/// the first four bytes of `SHA-256(SHA-256(payload))`.
///
/// Pure and deterministic; accepts any byte string, including empty.
#[must_use]
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let first = Sha256::digest(payload);
    let second = Sha256::digest(first);
    let mut tag = [0u8; CHECKSUM_LEN];
    tag.copy_from_slice(&second[..CHECKSUM_LEN]);
    tag
}

/// Returns true if `tag` is the checksum of `payload`.
#[inline]
#[must_use]
pub fn verify(payload: &[u8], tag: &[u8]) -> bool {
    tag == checksum(payload)
}
