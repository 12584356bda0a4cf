//! # xrp_vanity
//!
//! High-performance XRP Ledger vanity seed generator.
//!
//! Generates family seeds (`s...` secrets) whose Base58 encoding carries a
//! chosen prefix, by brute-force sampling of random 16-byte seed bodies.
//!
//! ## Architecture
//!
//! - `codec`: Base58 and hex encoding/decoding
//! - `crypto`: Checksum and versioned seed payload assembly
//! - `matcher`: Prefix matching against encoded secrets
//! - `worker`: Parallel execution and worker pool management
//! - `config`: Runtime configuration

pub mod codec;
pub mod config;
pub mod crypto;
pub mod matcher;
pub mod worker;

pub use codec::{decode, encode, encode_uint, DecodeError, HexError, ALPHABET};
pub use config::Config;
pub use crypto::{checksum, encode_seed, Seed, SeedError};
pub use matcher::{MatchResult, Pattern, PREFIX_OFFSET};
pub use worker::{search, VanityResult, WorkerPool};
