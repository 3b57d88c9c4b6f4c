// src/archive/mod.rs

//! ZIP container parsing.
//!
//! Read-only, slice-based walk of a ZIP file held in memory: locate the
//! end-of-central-directory record, enumerate the central directory, and map
//! each entry to its raw data span via its local file header. No entry body
//! is decrypted or decompressed here; that is the decryptor's job.
//!
//! Zip64 and multi-disk archives are rejected as malformed.

pub(crate) mod aes_extra;
pub(crate) mod reader;

pub use aes_extra::{parse_aes_extra_field, AesEntrySpec, AesStrength};
pub use reader::{CentralEntry, ZipArchive};
