//! # Attribute Matcher
//!
//! Compares extracted identity attributes against what the caller expects:
//! token-sort fuzzy similarity for names, digit-suffix equality for the
//! masked identifier.
//!
//! This stage cannot fail. When either side of a comparison is absent the
//! result is a neutral value (`0.0` / `false`), and the verdict engine
//! decides from the *expectations* — never from these neutral values —
//! whether a comparison was actually evaluated.

use crate::extractor::ExtractedAttributes;
use crate::utils::digits_only;
use serde::{Deserialize, Serialize};

/// Caller-supplied expectations, both optional.
///
/// Empty strings are treated as absent, so hosts can pass form fields
/// through without pre-filtering.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ExpectedAttributes {
    /// Full name the caller believes the record holds.
    pub name: Option<String>,
    /// Trailing digits of the identifier, typically the last 4.
    pub last_digits: Option<String>,
}

impl ExpectedAttributes {
    /// The expected name, if one was meaningfully supplied.
    pub fn expected_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|s| !s.is_empty())
    }

    /// The expected trailing digits, if meaningfully supplied.
    pub fn expected_last_digits(&self) -> Option<&str> {
        self.last_digits.as_deref().filter(|s| !s.is_empty())
    }
}

/// Outcome of comparing one record against one set of expectations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchResult {
    /// Token-sort name similarity in `[0, 100]`.
    ///
    /// Meaningful only when both names were present; `0.0` otherwise, which
    /// the verdict engine reads as "not evaluated", not as a mismatch.
    pub name_similarity: f64,
    /// Whether the masked identifier's digits end with the expected digits.
    /// `false` when either side was absent, with the same caveat.
    pub last_digits_match: bool,
}

/// Compare extracted attributes against expectations.
pub fn match_attributes(
    extracted: &ExtractedAttributes,
    expected: &ExpectedAttributes,
) -> MatchResult {
    let name_similarity = match (extracted.name.as_deref(), expected.expected_name()) {
        (Some(found), Some(wanted)) => token_sort_similarity(found, wanted),
        _ => 0.0,
    };

    let last_digits_match = match (extracted.masked_id.as_deref(), expected.expected_last_digits())
    {
        (Some(masked), Some(digits)) => digits_only(masked).ends_with(digits),
        _ => false,
    };

    MatchResult {
        name_similarity,
        last_digits_match,
    }
}

/// Case-insensitive, token-order-insensitive similarity in `[0, 100]`.
///
/// Both strings are lowercased, split on whitespace, token-sorted, and
/// rejoined; the score is the normalized Levenshtein similarity of the
/// sorted forms. `"Jane Mary Doe"` vs `"Doe Jane Mary"` scores `100.0`.
pub fn token_sort_similarity(a: &str, b: &str) -> f64 {
    let a = sort_tokens(a);
    let b = sort_tokens(b);
    strsim::normalized_levenshtein(&a, &b) * 100.0
}

fn sort_tokens(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut tokens: Vec<&str> = lower.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}
