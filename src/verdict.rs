//! # Verdict Engine
//!
//! Turns a [`MatchResult`] into the final verdict via an ordered decision
//! list, first applicable rule wins:
//!
//! 1. expected name supplied → `Verified` iff similarity ≥ threshold,
//!    else `LowConfidence` with `name_mismatch (score=…)`;
//! 2. else expected last digits supplied → `Verified` iff the suffix
//!    matched, else `LowConfidence` with `last4_mismatch`;
//! 3. else → `Verified` with an empty reason. Successful decryption alone
//!    proves possession of the share code; callers wanting stronger
//!    assurance must supply an expectation.
//!
//! Rule 1 deciding alone when both expectations are supplied is part of the
//! contract, not an oversight.

use crate::error::EkycError;
use crate::extractor::ExtractedAttributes;
use crate::matcher::{ExpectedAttributes, MatchResult};
use serde::Serialize;

/// Terminal outcome of one verification call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictStatus {
    /// The supplied expectations (or mere possession of the share code)
    /// were satisfied.
    Verified,
    /// Decryption and extraction succeeded but an expectation was not met.
    LowConfidence,
    /// The pipeline aborted before the decision stage.
    Failed,
}

/// The verification verdict returned to the caller.
///
/// Serializes to the wire shape hosting services return:
/// `status` / `name_extracted` / `masked_extracted` / `name_score` /
/// `reason`. Constructed once per pipeline invocation and immutable
/// thereafter; the library never stores it.
#[derive(Clone, Debug, Serialize)]
pub struct Verdict {
    pub status: VerdictStatus,
    pub name_extracted: Option<String>,
    pub masked_extracted: Option<String>,
    pub name_score: f64,
    /// Empty when `Verified`; otherwise a stable, caller-safe explanation.
    pub reason: String,
}

impl Verdict {
    /// Verdict for a pipeline aborted by a decryption or parse failure.
    ///
    /// Always `Failed` (never `LowConfidence`), carrying the error's stable
    /// display message as the reason.
    pub fn failed(err: &EkycError) -> Self {
        Verdict {
            status: VerdictStatus::Failed,
            name_extracted: None,
            masked_extracted: None,
            name_score: 0.0,
            reason: err.to_string(),
        }
    }
}

/// Apply the decision list to a completed match.
pub fn decide(
    extracted: &ExtractedAttributes,
    expected: &ExpectedAttributes,
    result: &MatchResult,
    name_match_threshold: f64,
) -> Verdict {
    let (status, reason) = if expected.expected_name().is_some() {
        if result.name_similarity >= name_match_threshold {
            (VerdictStatus::Verified, String::new())
        } else {
            (
                VerdictStatus::LowConfidence,
                // {:?} keeps the trailing ".0" on whole scores, matching the
                // wire text hosts already parse ("score=40.0", not "score=40").
                format!("name_mismatch (score={:?})", result.name_similarity),
            )
        }
    } else if expected.expected_last_digits().is_some() {
        if result.last_digits_match {
            (VerdictStatus::Verified, String::new())
        } else {
            (VerdictStatus::LowConfidence, "last4_mismatch".to_string())
        }
    } else {
        // No expectations: decryption itself is the (weak) proof.
        (VerdictStatus::Verified, String::new())
    };

    Verdict {
        status,
        name_extracted: extracted.name.clone(),
        masked_extracted: extracted.masked_id.clone(),
        name_score: result.name_similarity,
        reason,
    }
}
