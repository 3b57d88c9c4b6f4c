//! # Constants
//!
//! ZIP container signatures, WinZip AES entry-format constants, and
//! verification defaults used throughout the library.

/// Local file header signature (`PK\x03\x04`).
pub const LOCAL_FILE_HEADER_SIG: u32 = 0x0403_4b50;

/// Central directory file header signature (`PK\x01\x02`).
pub const CENTRAL_DIR_HEADER_SIG: u32 = 0x0201_4b50;

/// End-of-central-directory record signature (`PK\x05\x06`).
pub const EOCD_SIG: u32 = 0x0605_4b50;

/// Fixed size of the end-of-central-directory record, without the comment.
pub const EOCD_MIN_LEN: usize = 22;

/// Fixed size of a local file header, without name and extra field.
pub const LOCAL_FILE_HEADER_LEN: usize = 30;

/// Fixed size of a central directory header, without variable-length tails.
pub const CENTRAL_DIR_HEADER_LEN: usize = 46;

/// A ZIP comment is at most 65535 bytes, bounding the EOCD back-scan.
pub const MAX_COMMENT_LEN: usize = 0xFFFF;

/// Compression method code meaning "stored" (no compression).
pub const METHOD_STORED: u16 = 0;

/// Compression method code meaning "deflate".
pub const METHOD_DEFLATED: u16 = 8;

/// Compression method code marking a WinZip AES encrypted entry.
///
/// The real compression method is carried inside the AES extra field.
pub const METHOD_AES: u16 = 99;

/// Header ID of the WinZip AES extra field.
pub const AES_EXTRA_FIELD_ID: u16 = 0x9901;

/// Payload size of the WinZip AES extra field:
/// vendor version (2) + vendor id (2) + strength (1) + real method (2).
pub const AES_EXTRA_FIELD_LEN: usize = 7;

/// Vendor ID carried in the AES extra field, always `"AE"`.
pub const AES_VENDOR_ID: [u8; 2] = *b"AE";

/// PBKDF2-HMAC-SHA1 iteration count fixed by the WinZip AES specification.
pub const WINZIP_PBKDF2_ITERATIONS: u32 = 1000;

/// Size of the password-verify value stored after the salt.
pub const PASSWORD_VERIFY_LEN: usize = 2;

/// Size of the truncated HMAC-SHA1 authentication code at the entry tail.
pub const AUTH_CODE_LEN: usize = 10;

/// Case-insensitive extension of the structured record entry.
pub const RECORD_EXTENSION: &str = ".xml";

/// Default minimum token-sort name similarity for a `Verified` verdict.
///
/// The hosting service may override this per call via
/// [`VerifyOptions`](crate::verify::VerifyOptions).
pub const DEFAULT_NAME_MATCH_THRESHOLD: f64 = 75.0;
