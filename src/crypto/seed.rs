//! XRP Ledger family seed generation and verification.

use rand::Rng;

use crate::codec::base58::{self, DecodeError};

use super::checksum::{checksum, verify, CHECKSUM_LEN};

/// Version byte marking a family seed payload.
pub const SEED_PREFIX: u8 = 0x21;

/// Length of the random seed body in bytes.
pub const SEED_LEN: usize = 16;

/// Length of a decoded checked payload: prefix + body + checksum.
const PAYLOAD_LEN: usize = 1 + SEED_LEN + CHECKSUM_LEN;

/// Errors that can occur while building or verifying a seed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedError {
    #[error("seed body must be {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("payload does not start with the seed version byte (found {found:#04x})")]
    BadVersion { found: u8 },

    #[error("payload checksum mismatch")]
    ChecksumMismatch,
}

/// A family seed: 16 secret bytes plus their Base58 text form.
///
/// The text is derived once at construction: the body is prefixed with
/// [`SEED_PREFIX`], the double-SHA-256 checksum of that payload is appended,
/// and the whole checked payload is Base58 encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    /// The secret body bytes
    body: [u8; SEED_LEN],
    /// The encoded secret, e.g. `sp6JS7f14BuwFY8Mw6bTtLKWauoUs`
    encoded: String,
}

impl Seed {
    /// Builds a seed from an explicit 16-byte body.
    #[must_use]
    pub fn from_body(body: [u8; SEED_LEN]) -> Self {
        let mut payload = Vec::with_capacity(PAYLOAD_LEN);
        payload.push(SEED_PREFIX);
        payload.extend_from_slice(&body);
        let tag = checksum(&payload);
        payload.extend_from_slice(&tag);

        Self {
            body,
            encoded: base58::encode(&payload),
        }
    }

    /// Draws a fresh seed from the supplied random source.
    ///
    /// Taking the generator as a parameter keeps the randomness injectable,
    /// so deterministic tests can pass a seeded generator.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let mut body = [0u8; SEED_LEN];
        rng.fill(&mut body);
        Self::from_body(body)
    }

    /// Draws a fresh seed from the thread-local random source.
    #[must_use]
    pub fn random() -> Self {
        Self::generate(&mut rand::thread_rng())
    }

    /// Decodes and verifies an encoded secret, recovering the seed.
    ///
    /// # Errors
    /// - `Decode` if the text contains a non-alphabet symbol.
    /// - `InvalidLength` if the decoded payload is not 21 bytes.
    /// - `BadVersion` if the payload does not start with [`SEED_PREFIX`].
    /// - `ChecksumMismatch` if the trailing 4 bytes do not reproduce the
    ///   checksum of the preceding bytes.
    pub fn from_encoded(text: &str) -> Result<Self, SeedError> {
        let payload = base58::decode(text)?;
        if payload.len() != PAYLOAD_LEN {
            return Err(SeedError::InvalidLength {
                expected: PAYLOAD_LEN,
                actual: payload.len(),
            });
        }
        if payload[0] != SEED_PREFIX {
            return Err(SeedError::BadVersion { found: payload[0] });
        }
        let (checked, tag) = payload.split_at(PAYLOAD_LEN - CHECKSUM_LEN);
        if !verify(checked, tag) {
            return Err(SeedError::ChecksumMismatch);
        }

        let mut body = [0u8; SEED_LEN];
        body.copy_from_slice(&checked[1..]);
        Ok(Self::from_body(body))
    }

    /// Returns the encoded secret text.
    #[inline]
    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    /// Returns the secret body bytes.
    #[inline]
    pub fn body(&self) -> &[u8; SEED_LEN] {
        &self.body
    }

    /// Returns the secret body as uppercase hex.
    #[must_use]
    pub fn body_hex(&self) -> String {
        crate::codec::bytes_to_hex(&self.body)
    }
}

impl std::fmt::Display for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encoded)
    }
}

/// Encodes a seed body of unchecked length.
///
/// This is the slice-level entry point; callers with a known `[u8; 16]`
/// should prefer [`Seed::from_body`].
///
/// # Errors
/// `SeedError::InvalidLength` when `body` is not exactly 16 bytes.
pub fn encode_seed(body: &[u8]) -> Result<String, SeedError> {
    let body: [u8; SEED_LEN] = body
        .try_into()
        .map_err(|_| SeedError::InvalidLength {
            expected: SEED_LEN,
            actual: body.len(),
        })?;
    Ok(Seed::from_body(body).encoded)
}
