//! Prefix matching against encoded secrets.

use crate::codec::base58::ALPHABET;

/// Offset of the first matchable symbol in an encoded secret.
///
/// Every family seed encodes to 29 symbols and the version byte pins the
/// first two, so a vanity prefix is matched starting at the third symbol.
pub const PREFIX_OFFSET: usize = 2;

/// Result of a pattern match operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    /// Full match found
    Match,
    /// No match
    NoMatch,
}

impl MatchResult {
    #[inline]
    pub fn is_match(self) -> bool {
        matches!(self, MatchResult::Match)
    }
}

/// A compiled vanity prefix.
///
/// Matching is case-insensitive, so the prefix is normalized to lowercase
/// once at construction. The empty prefix matches every candidate.
#[derive(Debug, Clone)]
pub struct Pattern {
    /// The prefix, lowercased
    prefix: String,
}

impl Pattern {
    /// Creates a new pattern from the desired prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into().to_lowercase(),
        }
    }

    /// Returns the normalized prefix string.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Matches an encoded secret against this pattern.
    ///
    /// The candidate's symbols starting at [`PREFIX_OFFSET`] are compared
    /// case-insensitively over the prefix length.
    #[inline]
    pub fn matches(&self, encoded: &str) -> MatchResult {
        let tail = encoded.as_bytes().get(PREFIX_OFFSET..).unwrap_or(&[]);
        let matched = tail.len() >= self.prefix.len()
            && tail[..self.prefix.len()].eq_ignore_ascii_case(self.prefix.as_bytes());

        if matched {
            MatchResult::Match
        } else {
            MatchResult::NoMatch
        }
    }

    /// Returns the prefix characters that no alphabet symbol can match,
    /// even case-insensitively.
    ///
    /// A pattern containing such a character can never match; the caller
    /// should surface this as a warning rather than an error, since the
    /// search itself stays well-defined (it scans its budget and reports
    /// nothing).
    pub fn unmatchable_symbols(&self) -> Vec<char> {
        self.prefix
            .chars()
            .filter(|&c| {
                !ALPHABET
                    .iter()
                    .any(|&s| (s as char).eq_ignore_ascii_case(&c))
            })
            .collect()
    }

    /// Returns the estimated number of attempts to find a match.
    ///
    /// Each symbol position holds one of 58 values; case-insensitivity makes
    /// this a slight overestimate for letters present in both cases.
    pub fn estimated_difficulty(&self) -> u64 {
        58u64.saturating_pow(self.prefix.len() as u32)
    }

    /// Returns a human-readable difficulty estimate.
    pub fn difficulty_description(&self) -> String {
        match self.estimated_difficulty() {
            0..=1_000 => "Very Easy (< 1 second)".into(),
            1_001..=100_000 => "Easy (seconds)".into(),
            100_001..=10_000_000 => "Medium (minutes)".into(),
            10_000_001..=1_000_000_000 => "Hard (hours)".into(),
            _ => "Very Hard (days or more)".into(),
        }
    }
}
