//! Text codecs for secrets and diagnostics.
//!
//! This module provides:
//! - Base58 encode/decode over the XRP Ledger alphabet
//! - Uppercase hex encode/decode for diagnostics

pub mod base58;
pub mod hex;

pub use self::base58::{decode, encode, encode_uint, DecodeError, ALPHABET};
pub use self::hex::{bytes_to_hex, hex_to_bytes, HexError};
