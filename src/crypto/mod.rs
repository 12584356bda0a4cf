//! Cryptographic operations for family seed generation.
//!
//! This module provides:
//! - Double-SHA-256 payload checksums
//! - Versioned seed payload assembly and Base58 encoding
//! - Decode-and-verify for existing secrets

mod checksum;
mod seed;

pub use checksum::{checksum, verify, CHECKSUM_LEN};
pub use seed::{encode_seed, Seed, SeedError, SEED_LEN, SEED_PREFIX};
