//! Vanity prefix matching for encoded secrets.
//!
//! Matching skips the two version-derived leading symbols and compares
//! case-insensitively from there.

mod pattern;

pub use pattern::{MatchResult, Pattern, PREFIX_OFFSET};
