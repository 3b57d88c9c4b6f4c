//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All fallible operations return [`Result<T, EkycError>`](EkycError).
//!
//! Every message is stable and caller-safe: it can be forwarded verbatim as a
//! verdict reason without leaking internal details. In particular, wrong share
//! codes and corrupted ciphertext are deliberately indistinguishable (single
//! [`EkycError::DecryptionFailed`] variant, see the decryptor docs).

use thiserror::Error;

/// The error type for all eKYC verification operations.
///
/// This enum covers container parsing errors, decryption failures, and
/// record parsing errors. All variants describe expected failure modes of
/// untrusted input — none of them is ever escalated as a panic.
#[derive(Error, Debug)]
pub enum EkycError {
    /// The byte stream is not a usable ZIP container.
    ///
    /// Raised for structural problems detected before any key material is
    /// used: bad signatures, truncated central directory, missing AES extra
    /// field, unsupported compression method, Zip64 archives.
    #[error("invalid archive: {0}")]
    Archive(String),

    /// The container holds no `.xml` record entry.
    #[error("no XML record found in archive")]
    NoRecordFound,

    /// Decryption of the record entry failed.
    ///
    /// Covers both a wrong share code and a corrupted/tampered entry body.
    /// The two cases are intentionally merged so callers cannot use the
    /// library as a password-guessing oracle.
    #[error("unable to decrypt archive; wrong share code or corrupted file")]
    DecryptionFailed,

    /// The decrypted record is not well-formed XML.
    #[error("malformed eKYC record: {0}")]
    MalformedRecord(String),

    /// The caller supplied an empty share code.
    ///
    /// A usage error, not a crypto error: decryption is never attempted.
    #[error("share code must not be empty")]
    EmptyShareCode,
}

impl From<&'static str> for EkycError {
    fn from(msg: &'static str) -> Self {
        EkycError::Archive(msg.to_string())
    }
}
