//! src/verify.rs
//! Pipeline entry point: decrypt → extract → match → decide.

use crate::aliases::ShareCode;
use crate::consts::DEFAULT_NAME_MATCH_THRESHOLD;
use crate::decryptor::decrypt;
use crate::extractor::extract;
use crate::matcher::{match_attributes, ExpectedAttributes};
use crate::verdict::{decide, Verdict};

/// Tunables supplied by the hosting service.
#[derive(Clone, Copy, Debug)]
pub struct VerifyOptions {
    /// Minimum token-sort name similarity for a `Verified` verdict when an
    /// expected name is supplied.
    pub name_match_threshold: f64,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        VerifyOptions {
            name_match_threshold: DEFAULT_NAME_MATCH_THRESHOLD,
        }
    }
}

/// Run the full verification pipeline over one archive.
///
/// Infallible by design: failures of the untrusted input (bad container,
/// wrong share code, malformed record) come back as `Failed` verdicts with
/// stable reasons, not as `Err`. The archive bytes and all intermediate
/// buffers are local to this call and dropped on return.
///
/// ```
/// use ekyc_verify_rs::{verify, ExpectedAttributes, ShareCode, VerifyOptions};
///
/// let share_code = ShareCode::new("1234".to_string());
/// let verdict = verify(b"not a zip", &share_code, &ExpectedAttributes::default(), &VerifyOptions::default());
/// assert_eq!(verdict.status, ekyc_verify_rs::VerdictStatus::Failed);
/// ```
pub fn verify(
    archive_bytes: &[u8],
    share_code: &ShareCode,
    expected: &ExpectedAttributes,
    options: &VerifyOptions,
) -> Verdict {
    let record_bytes = match decrypt(archive_bytes, share_code) {
        Ok(bytes) => bytes,
        Err(err) => return Verdict::failed(&err),
    };

    let extracted = match extract(&record_bytes) {
        Ok(attrs) => attrs,
        Err(err) => return Verdict::failed(&err),
    };

    let result = match_attributes(&extracted, expected);
    decide(&extracted, expected, &result, options.name_match_threshold)
}
